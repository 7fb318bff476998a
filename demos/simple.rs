//! Parsing, reading and printing an FVV document.
//!
//! Run with: cargo run --example simple

use fvv::{from_str, PrintMode};
use std::error::Error;

const CONFIG: &str = r#"
{
  server = {
    host = "0.0.0.0" <bind address>;
    port = 8080;
    workers = 4;
  };
  limits.rate = 12.5;
  allowed = ["alice", "bob"];
}
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = from_str(CONFIG);

    let server = tree.get("server").ok_or("missing server group")?;
    println!("host:    {}", server.path("host").map_or("", |n| n.as_str()));
    println!("port:    {}", server.path("port").map_or(0, |n| n.as_int()));
    println!("rate:    {}", tree.get("limits.rate").map_or(0.0, |n| n.as_double()));
    println!("allowed: {:?}", tree.get("allowed").map(|n| n.as_strs()));

    // Missing or mistyped values fall back to zero values
    let port = tree.get("server.port").ok_or("missing port")?;
    assert_eq!(port.as_str(), "");

    println!("\nPrinted:\n{}", tree.print(PrintMode::Common));

    let again = from_str(&tree.print(PrintMode::Min));
    assert_eq!(again.print(PrintMode::Common), tree.print(PrintMode::Common));
    println!("\n✓ Round-trip successful");

    Ok(())
}
