use std::{sync::Arc, time::Duration};

use tokio::{runtime::Handle, sync::watch, task::JoinHandle};

use super::Fetch;
use crate::ui::{Handlers, RemoteData};

/// Receives the states of one fetch, in order.
pub trait FetchHandler<T> {
    fn on_not_asked(&mut self);

    fn on_loading(&mut self);

    fn on_done(&mut self, value: T);
}

impl<T, N, L, D> FetchHandler<T> for Handlers<N, L, D>
where
    N: FnMut(),
    L: FnMut(),
    D: FnMut(T),
{
    fn on_not_asked(&mut self) {
        (self.on_not_asked)()
    }

    fn on_loading(&mut self) {
        (self.on_loading)()
    }

    fn on_done(&mut self, value: T) {
        (self.on_done)(value)
    }
}

/// Publishes every state on a watch channel, so a frame loop can read the latest one.
pub struct StateSender<T>(pub watch::Sender<RemoteData<T>>);

impl<T> FetchHandler<T> for StateSender<T> {
    fn on_not_asked(&mut self) {
        let _ = self.0.send(RemoteData::NOT_ASKED);
    }

    fn on_loading(&mut self) {
        let _ = self.0.send(RemoteData::LOADING);
    }

    fn on_done(&mut self, value: T) {
        let _ = self.0.send(RemoteData::done(value));
    }
}

struct Inflight {
    url: String,
    task: JoinHandle<()>,
}

/// Drives a single url through `NotAsked -> Loading -> Done`.
///
/// The hook owns the task doing the fetch. Switching to another url, calling
/// [`FetchHook::cancel`] or dropping the hook aborts it, and the handler that
/// belonged to it is dropped without seeing any later state.
pub struct FetchHook<F: Fetch> {
    fetcher: Arc<F>,
    rt: Handle,
    delay: Duration,
    inflight: Option<Inflight>,
}

impl<F: Fetch> FetchHook<F> {
    pub fn new(fetcher: F, rt: Handle, delay: Duration) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            rt,
            delay,
            inflight: None,
        }
    }

    /// The url the hook is currently bound to.
    pub fn url(&self) -> Option<&str> {
        self.inflight.as_ref().map(|inflight| inflight.url.as_str())
    }

    /// Starts fetching `url` unless the hook is already bound to it.
    ///
    /// Returns true when a new sequence was started. `on_not_asked` runs before
    /// this returns, the rest runs on the runtime.
    pub fn use_fetch<H>(&mut self, url: &str, mut handler: H) -> bool
    where
        H: FetchHandler<eyre::Result<F::Output>> + Send + 'static,
    {
        if self.url() == Some(url) {
            return false;
        }
        self.cancel();

        handler.on_not_asked();

        let fetcher = self.fetcher.clone();
        let delay = self.delay;
        let target = url.to_string();
        let task = self.rt.spawn(async move {
            tokio::time::sleep(delay).await;
            handler.on_loading();
            tracing::debug!(url = %target, "Fetching");
            let result = fetcher.fetch(&target).await;
            match &result {
                Ok(_) => tracing::debug!(url = %target, "Fetched"),
                Err(err) => tracing::warn!(url = %target, "Fetch failed: {err:#}"),
            }
            handler.on_done(result);
        });
        tracing::debug!(url, ?delay, "Scheduled fetch");
        self.inflight = Some(Inflight {
            url: url.to_string(),
            task,
        });
        true
    }

    pub fn cancel(&mut self) {
        if let Some(inflight) = self.inflight.take() {
            if !inflight.task.is_finished() {
                tracing::debug!(url = %inflight.url, "Cancelling fetch");
            }
            inflight.task.abort();
        }
    }
}

impl<F: Fetch> Drop for FetchHook<F> {
    fn drop(&mut self) {
        self.cancel();
    }
}
