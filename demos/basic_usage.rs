//! Basic logger factory usage example
//!
//! Demonstrates named loggers, level strings and hot reconfiguration.
//!
//! Run with: cargo run --example basic_usage

use rust_log_factory::prelude::*;
use rust_log_factory::{args, info, ConsoleEncoder, JsonEncoder, TermEncoder};

fn main() -> Result<()> {
    println!("=== Rust Log Factory - Basic Usage Example ===\n");

    let factory = Factory::new();
    factory.set_encoder(TermEncoder::colored(EncoderConfig::development()));

    let http = factory.new_logger("http");
    let sql = factory.new_logger("sql");

    println!("1. Everything is off until configured:");
    http.info("This is hidden", &[]);

    println!("\n2. Default INF, http fully enabled, sql off:");
    factory.apply_level_string("*=INF,http,-sql")?;
    http.debug("Request received", &args!["path", "/users", "method", "GET"]);
    sql.error("Query failed (hidden, sql is off)", &[]);
    factory.new_logger("cache").info("Cache warmed", &args!["entries", 1024]);

    println!("\n3. Context is carried by derived loggers:");
    let request_log = http.with(&args!["request_id", "req-42"]);
    request_log.info("Handling request", &[]);
    info!(request_log, "Responded in {}ms", 12; "status" => 200);

    println!("\n4. Loggers follow encoder changes:");
    factory.set_encoder(JsonEncoder::default());
    request_log.info("Now as JSON", &[]);
    factory.set_encoder(ConsoleEncoder::new(EncoderConfig::development()));
    request_log.info("Now as console columns", &args!["bytes", 512]);

    println!("\n5. Caller capture:");
    factory.set_caller_capture(true);
    http.error("Something broke", &args!["retryable", false]);

    println!("\n6. Deprecated abbreviations still apply, with notes:");
    if let Err(e) = factory.apply_level_string("*=WRN,sql=TRC") {
        println!("   {}", e);
    }
    sql.debug("sql is at DBG now", &[]);

    println!(
        "\n{} records written, {} rebuild passes",
        factory.metrics().records_written(),
        factory.metrics().rebuild_passes()
    );
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
