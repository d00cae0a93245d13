//! File sink plugin and its options

mod options;
mod file;
mod config_file;

pub use options::{FileSaveOptions, Prefix, PrefixFormatter, LINE_ENDING};
pub use file::attach;
pub use config_file::{load_options, OptionsFile, OptionsFormat};
