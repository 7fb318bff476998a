//! Links, forward references and materializing.
//!
//! Run with: cargo run --example links

use fvv::{from_str, parse_with_options, FvvTree, LinkResolution, ParseOptions, PrintMode};
use std::error::Error;

const DOC: &str = r#"{
  defaults = { timeout = 30; };
  api = {
    timeout = defaults.timeout;
    retries = fallback.retries;
  };
  fallback = { retries = 5; };
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    // First-sight resolution: `fallback.retries` is defined after its use
    let tree = from_str(DOC);
    let retries = tree.get("api.retries").ok_or("missing api.retries")?;
    println!("first sight: retries = {} (pending: {})", retries.as_int(), retries.is_link_pending());

    // Deferred resolution retries pending links after the whole document is read
    let mut tree = FvvTree::new();
    let options = ParseOptions::new().with_links(LinkResolution::Deferred);
    parse_with_options(DOC, &mut tree, &options)?;
    let retries = tree.get("api.retries").ok_or("missing api.retries")?;
    println!("deferred:    retries = {} (pending: {})", retries.as_int(), retries.is_link_pending());

    // Links read through to the current value of their target
    tree.entry("defaults.timeout").set(60);
    println!("timeout follows defaults: {}", tree.get("api.timeout").map_or(0, |n| n.as_int()));

    // Materializing copies the value and cuts the link
    let id = tree.get("api.timeout").ok_or("missing api.timeout")?.id();
    if let Some(mut node) = tree.node_mut(id) {
        node.materialize_link();
    }
    tree.entry("defaults.timeout").set(90);
    println!("after materialize: {}", tree.get("api.timeout").map_or(0, |n| n.as_int()));

    println!("\n{}", tree.print(PrintMode::Common));
    Ok(())
}
