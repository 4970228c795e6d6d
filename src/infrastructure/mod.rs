//! Host environment concerns: filesystem paths.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
