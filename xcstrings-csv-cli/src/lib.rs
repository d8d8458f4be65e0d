//! CLI library for testing purposes

pub mod convert;
pub mod logging;
pub mod mode;

pub use convert::{OutputOptions, render_report, run_convert_command};
pub use mode::Mode;
