//! Building trees with the fvv! macro and the builder API.
//!
//! Run with: cargo run --example macro

use fvv::{fvv, PrintMode};

fn main() {
    let replicas = 3;

    let mut tree = fvv!({
        "service": {
            "name": "billing",
            "replicas": replicas,
            "ports": [8080, 8443]
        },
        "features": ["audit", "export"],
        "beta": false
    });

    // Trees stay editable after construction
    tree.entry("service.name").set_description("public service name");
    tree.entry("service.timeout").set(2.5);

    println!("{}", tree.print(PrintMode::Common));

    let json = serde_json::to_string_pretty(&tree).unwrap_or_default();
    println!("\nAs JSON:\n{json}");
}
