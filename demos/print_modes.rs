//! The three output modes and custom indentation.
//!
//! Run with: cargo run --example print_modes

use fvv::{from_str, PrintMode, PrintOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = from_str(
        r#"{ db = { host = "localhost" <primary>; port = 5432; } <database>; ratio = 1.0; }"#,
    );

    for name in ["common", "min", "nodesc"] {
        let mode: PrintMode = name.parse()?;
        println!("--- {mode} ---\n{}\n", tree.print(mode));
    }

    let wide = PrintOptions::new().with_indent(4);
    println!("--- common, indent 4 ---\n{}", fvv::to_string_with_options(&tree, &wide));

    let mut stdout = std::io::stdout();
    fvv::to_writer_with_options(&mut stdout, &tree, &PrintOptions::min())?;
    println!();

    Ok(())
}
