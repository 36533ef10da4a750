//! Models a network fetch as [`ui::RemoteData`] and shows a list of posts with it.

pub mod fetch;
pub mod logging;
pub mod posts;
pub mod settings;
pub mod ui;
