//! File logging example
//!
//! Routes each severity to its own file under a scratch directory.
//!
//! Run with: cargo run --example file_logging

use advanced_logging::prelude::*;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("=== Advanced Logging - File Logging Example ===\n");

    let root = std::env::temp_dir().join("advanced-logging-demo");
    let facade = LoggingFacade::new("orders").with_log_root(&root);
    let logger = facade.logger();

    println!("1. Default layout under {}:", root.display());
    facade.configure_file_logging_default()?;
    for severity in Severity::ALL {
        println!("   {:8} -> {}", severity, facade.default_file_path(severity).display());
    }

    logger.info("Application started");
    logger.warning("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Moving ERROR to a dedicated file:");
    let errors = root.join("alerts").join("errors.log");
    facade.configure_multi_file(&FileMap::new().with(Severity::Error, errors.clone()))?;
    logger.error("Payment gateway timed out");
    println!("   ERROR    -> {}", errors.display());

    println!("\n3. Handlers now attached:");
    for info in logger.handlers() {
        let path = info.target.path().map(PathBuf::from).unwrap_or_default();
        println!("   {:8} {}", info.threshold, path.display());
    }

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
