//! Reference backends

pub mod memory;

#[cfg(feature = "console")]
pub mod console;

#[cfg(feature = "file")]
pub mod file;

pub use memory::MemoryLogger;

#[cfg(feature = "console")]
pub use console::ConsoleLogger;

#[cfg(feature = "file")]
pub use file::FileLogger;
