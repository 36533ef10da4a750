mod styling;

pub use styling::*;
