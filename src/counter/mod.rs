pub mod constants;
mod core;

pub use core::{format_path, PathCounter};
