//! Level-based logger and the extension point plugins hook into

mod traits;
mod noop;
mod console;
mod level_logger;
mod registry;

pub use traits::{LogMethod, MethodFactory, PluggableLogger};
pub use noop::noop_method;
pub use console::{console_factory, console_method, ConsoleStream};
pub use level_logger::{Logger, DEFAULT_LEVEL};
pub use registry::{
    get_logger, get_root_logger, has_logger, list_loggers, remove_logger,
    SharedLogger, ROOT_LOGGER,
};

#[cfg(test)]
pub(crate) use level_logger::tests::capturing_factory;
