//! Basic LuaML serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_luaml::{from_str, to_string, to_string_with_options, EncodeOptions};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Server {
    name: String,
    ports: Vec<u16>,
    tls: Option<Tls>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Tls {
    cert: String,
    key: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let server = Server {
        name: "edge-01".to_string(),
        ports: vec![80, 443],
        tls: Some(Tls {
            cert: "/etc/tls/cert.pem".to_string(),
            key: "/etc/tls/key.pem".to_string(),
        }),
    };

    // Global mode: one statement per line
    let text = to_string(&server)?;
    println!("Global mode:\n{}", text);

    let server_back: Server = from_str(&text)?;
    assert_eq!(server, server_back);

    // Table mode: a single { ... } expression
    let text = to_string_with_options(&server, &EncodeOptions::table())?;
    println!("Table mode:\n{}\n", text);

    let server_back: Server = from_str(&text)?;
    assert_eq!(server, server_back);
    println!("✓ Round-trip successful");

    Ok(())
}
