//! Basic logger usage example
//!
//! Demonstrates configuring a backend, level filtering, error detail and
//! reading persisted entries back.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_base::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Logger Base - Basic Usage Example ===\n");

    // Console backend with the initial configuration (minimum level Warn)
    let console = ConsoleLogger::new();
    println!("1. Console logging at the default level (Warn):");
    console.debug("demo", "debug message (hidden)")?;
    console.info("demo", "info message (hidden)")?;
    console.warn("demo", "warning message (visible)")?;
    console.error("demo", "error message (visible, stderr)")?;

    println!("\n2. Lowering the level and switching to UTC timestamps:");
    console.configure(
        LoggerConfiguration::configure_defaults()
            .with_level(LogLevel::Debug)
            .with_time_option(LogTimeOption::UtcTime),
    );
    console.debug("demo", "debug message (visible)")?;

    println!("\n3. File logging with error detail:");
    let dir = std::env::temp_dir().join("rust_logger_base_demo");
    let file = FileLogger::with_configuration(
        &dir,
        LoggerConfiguration::configure_defaults()
            .with_log_file_name("demo.log")
            .with_level(LogLevel::Info),
    )?;

    let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
    file.info("demo", "request accepted")?;
    file.error_with_error("demo", "request failed", &ErrorDetail::from_error(&io_err))?;

    println!("   Entries in {} (newest first):", file.local_storage_path()?.display());
    for line in file.get_all(true)? {
        println!("   {}", line);
    }

    file.purge()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
