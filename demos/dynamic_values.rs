//! Working with Value for documents without a fixed schema.
//!
//! Run with: cargo run --example dynamic_values

use serde_luaml::{decode, encode, luaml, Mode, Value};
use std::error::Error;

const DOCUMENT: &str = r#"
-- written by hand
name = "edge-01"
mode = fast
workers = 0x10
listen = { "0.0.0.0:80", "0.0.0.0:443", }
motd = [[Welcome!
Have a nice day.]]
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let mut config = decode(DOCUMENT)?;

    // Access values dynamically; missing entries read as nil
    println!("name:    {}", config["name"]);
    println!("workers: {:?}", config["workers"].as_i64());
    println!("first listener: {}", config["listen"][0]);
    println!("missing is nil: {}\n", config["missing"].is_nil());

    // Extend the tree with the luaml! macro
    if let Some(table) = config.as_table_mut() {
        table.insert("limits", luaml!({ "conns": 1024, "timeout": 2.5 }));
        table.insert("debug", Value::Bool(false));
    }

    println!("Global mode:\n{}", encode(&config, Mode::Global));
    println!("Table mode:\n{}\n", encode(&config, Mode::Table));

    // Decoding fails with a position for malformed input
    match decode("ports = { 80, name = x }") {
        Ok(_) => unreachable!("mixed blocks are rejected"),
        Err(e) => println!("Expected error: {}", e),
    }

    Ok(())
}
