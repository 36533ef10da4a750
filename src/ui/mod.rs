mod posts_view;
mod remote_data;
mod style;
mod uiapp;

pub use posts_view::*;
pub use remote_data::*;
pub use uiapp::*;
