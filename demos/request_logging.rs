//! Request id example
//!
//! Simulates a server stamping each request with a fresh id.
//!
//! Run with: cargo run --example request_logging

use advanced_logging::prelude::*;
use std::thread;

fn handle_request(logger: &Logger, path: &str) {
    let _scope = RequestScope::begin();
    logger.info(format!("GET {}", path));
    logger.debug("loading session");
    logger.info("200 OK");
}

fn main() -> Result<()> {
    println!("=== Advanced Logging - Request Id Example ===\n");

    let facade = LoggingFacade::new("web").with_stream(StreamKind::Stdout);
    facade.configure_request_format()?;
    let logger = facade.logger().clone();

    let handles: Vec<_> = ["/", "/orders", "/health"]
        .into_iter()
        .map(|path| {
            let logger = logger.clone();
            thread::spawn(move || handle_request(&logger, path))
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }

    logger.info("no request in flight");

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
