/// State of a value that has to be fetched from somewhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteData<T> {
    NotAsked,
    Loading,
    Done(T),
}

/// One callback per variant of [`RemoteData`].
///
/// Building this struct requires all three fields, so a caller of
/// [`RemoteData::fold`] or [`crate::fetch::FetchHook::use_fetch`] can not
/// forget a state.
pub struct Handlers<N, L, D> {
    pub on_not_asked: N,
    pub on_loading: L,
    pub on_done: D,
}

impl<T> RemoteData<T> {
    pub const NOT_ASKED: Self = RemoteData::NotAsked;
    pub const LOADING: Self = RemoteData::Loading;

    pub fn done(value: T) -> Self {
        RemoteData::Done(value)
    }

    /// Calls exactly one of the handlers and returns what it returned.
    pub fn fold<R, N, L, D>(self, handlers: Handlers<N, L, D>) -> R
    where
        N: FnOnce() -> R,
        L: FnOnce() -> R,
        D: FnOnce(T) -> R,
    {
        match self {
            RemoteData::NotAsked => (handlers.on_not_asked)(),
            RemoteData::Loading => (handlers.on_loading)(),
            RemoteData::Done(value) => (handlers.on_done)(value),
        }
    }

    pub fn is_not_asked(&self) -> bool {
        match self {
            RemoteData::NotAsked => true,
            RemoteData::Loading => false,
            RemoteData::Done(_) => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            RemoteData::NotAsked => false,
            RemoteData::Loading => true,
            RemoteData::Done(_) => false,
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            RemoteData::NotAsked => false,
            RemoteData::Loading => false,
            RemoteData::Done(_) => true,
        }
    }

    pub fn as_ref(&self) -> RemoteData<&T> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Done(value) => RemoteData::Done(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteData<U> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Done(value) => RemoteData::Done(f(value)),
        }
    }

    pub fn done_value(self) -> Option<T> {
        match self {
            RemoteData::Done(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        RemoteData::NotAsked
    }
}
