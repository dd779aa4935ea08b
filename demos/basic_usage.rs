//! Basic facade usage example
//!
//! Demonstrates stream logging with one format, then per-severity formats.
//!
//! Run with: cargo run --example basic_usage

use advanced_logging::prelude::*;

fn main() -> Result<()> {
    println!("=== Advanced Logging - Basic Usage Example ===\n");

    let facade = LoggingFacade::new("basic").with_colored_streams(true);
    let logger = facade.logger();

    // No handlers yet: this creates one stderr handler for every level
    println!("1. One stream handler, default format:");
    facade.configure_single_format(None)?;
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");

    println!("\n2. Per-severity formats:");
    facade.configure_multi_format(&FormatMap::from_pairs([
        ("DEBUG", "{levelname} {message}".to_string()),
        ("ERROR", "!! {asctime} {levelname} {name}: {message}".to_string()),
    ])?)?;
    logger.info("Info goes through the DEBUG handler");
    logger.error("Errors also reach the ERROR handler");

    println!("\n3. Rejected configuration:");
    match FormatMap::from_pairs([("VERBOSE", String::new())]) {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(e) => println!("   {}", e),
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
