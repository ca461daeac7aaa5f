//! Visual theme for the directory.

mod styles;

pub use styles::GLOBAL_STYLES;
