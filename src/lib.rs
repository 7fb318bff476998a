//! # fvv
//!
//! A parser and printer for FVV, a compact, human-editable hierarchical data format.
//!
//! ## What is FVV?
//!
//! An FVV document is a brace-wrapped list of `name = value;` statements. Values are
//! typed scalars or homogeneous arrays, statements nest into groups, any statement can
//! carry a `<description>`, and a bare dotted path links one node to another.
//!
//! ```text
//! {
//!   server = {
//!     host = "localhost" <bind address>;
//!     port = 8080;
//!   };
//!   backup.port = server.port;
//!   ratios = [0.5, 0.25];
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Typed values**: bool, 64-bit int, double, string and arrays of each
//! - **Dotted paths**: `a.b.c = 1;` creates intermediate groups on the fly
//! - **Links**: a bare path aliases another node; reads look through it
//! - **Descriptions**: `<...>` annotations kept alongside values and printed back
//! - **Lenient parsing**: malformed input never panics and never aborts the parse;
//!   what was recovered from is reported as diagnostics and logged with `tracing`
//! - **Stable output**: children print in name order, and print → parse → print is
//!   idempotent
//!
//! ## Quick Start
//!
//! ```rust
//! use fvv::{FvvTree, PrintMode};
//!
//! let mut tree = FvvTree::new();
//! fvv::parse(r#"{ server = { port = 8080 <listen port>; }; alias = server.port; }"#, &mut tree);
//!
//! assert_eq!(tree.get("server.port").unwrap().as_int(), 8080);
//! assert_eq!(tree.get("alias").unwrap().as_int(), 8080);
//! assert_eq!(tree.get("server.port").unwrap().description(), "listen port");
//!
//! assert_eq!(
//!     tree.print(PrintMode::Min),
//!     "{alias=server.port;server={port=8080<listen port>;};}"
//! );
//! ```
//!
//! ### Building Trees with the fvv! Macro
//!
//! ```rust
//! use fvv::{fvv, PrintMode};
//!
//! let tree = fvv!({
//!     "name": "demo",
//!     "limits": { "cpu": 2, "mem": 0.5 },
//!     "tags": ["a", "b"]
//! });
//!
//! assert_eq!(
//!     tree.print(PrintMode::Min),
//!     "{limits={cpu=2;mem=0.5;};name=\"demo\";tags=[\"a\",\"b\"];}"
//! );
//! ```
//!
//! ### Strict Parsing
//!
//! ```rust
//! use fvv::{parse_with_options, Error, FvvTree, ParseOptions};
//!
//! let mut tree = FvvTree::new();
//! let err = parse_with_options("{ a = [1, x]; }", &mut tree, &ParseOptions::strict()).unwrap_err();
//! assert!(matches!(err, Error::DroppedListElement { .. }));
//! assert!(tree.is_empty());
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber. Every recovered
//! condition is a `debug` event with the source position; group nesting and link
//! resolution are `trace` events.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics on any input text, and no recursion over nesting depth when parsing
//!   or printing
//! - Links are arena indices and can never dangle
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Parsing, reading and printing a document
//! - **`macro.rs`** - Building trees with the fvv! macro
//! - **`links.rs`** - Links, forward references and materializing
//! - **`print_modes.rs`** - The three output modes
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod grammar;
pub mod literal;
pub mod macros;
mod map;
pub mod node;
pub mod options;
pub mod ser;
pub mod value;

pub use de::Parser;
pub use error::{Error, Result};
pub use node::{FvvTree, NodeId, NodeMut, NodeRef};
pub use options::{LinkResolution, ParseOptions, PrintMode, PrintOptions};
pub use ser::Printer;
pub use value::{FvvValue, ValueKind};

use std::io;

/// Parses FVV text into `tree`, leniently.
///
/// Statements overwrite or extend what `tree` already holds. Malformed input is
/// recovered from locally; nothing is reported except through `tracing`.
///
/// # Examples
///
/// ```rust
/// use fvv::FvvTree;
///
/// let mut tree = FvvTree::new();
/// fvv::parse("{ a = 1; }", &mut tree);
/// fvv::parse("{ b = a; }", &mut tree);
/// assert_eq!(tree.get("b").unwrap().as_int(), 1);
/// ```
pub fn parse(text: &str, tree: &mut FvvTree) {
    de::parse_document(text, tree, &ParseOptions::default());
}

/// Parses FVV text into `tree` with custom options.
///
/// # Errors
///
/// Only in strict mode: returns the first diagnostic (missing braces, unterminated
/// construct, unresolved link or dropped list element). `tree` is then left exactly
/// as it was. Lenient mode always returns `Ok`.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len(), strict = options.strict))]
pub fn parse_with_options(text: &str, tree: &mut FvvTree, options: &ParseOptions) -> Result<()> {
    if !options.strict {
        de::parse_document(text, tree, options);
        return Ok(());
    }

    let mut scratch = tree.clone();
    let diagnostics = de::parse_document(text, &mut scratch, options);
    match diagnostics.into_iter().next() {
        Some(err) => Err(err),
        None => {
            *tree = scratch;
            Ok(())
        }
    }
}

/// Parses FVV text into a new tree, leniently.
///
/// # Examples
///
/// ```rust
/// let tree = fvv::from_str("{ list = [1, 2, 3]; }");
/// assert_eq!(tree.get("list").unwrap().as_ints(), &[1, 2, 3]);
/// ```
#[must_use]
pub fn from_str(text: &str) -> FvvTree {
    let mut tree = FvvTree::new();
    parse(text, &mut tree);
    tree
}

/// Parses FVV text into a new tree with custom options.
///
/// # Errors
///
/// See [`parse_with_options`].
pub fn from_str_with_options(text: &str, options: &ParseOptions) -> Result<FvvTree> {
    let mut tree = FvvTree::new();
    parse_with_options(text, &mut tree, options)?;
    Ok(tree)
}

/// Parses FVV text from bytes into a new tree, leniently.
///
/// # Examples
///
/// ```rust
/// let tree = fvv::from_slice(b"{ ok = true; }").unwrap();
/// assert!(tree.get("ok").unwrap().as_bool());
/// ```
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the bytes are not valid UTF-8.
pub fn from_slice(bytes: &[u8]) -> Result<FvvTree> {
    let text = std::str::from_utf8(bytes)?;
    Ok(from_str(text))
}

/// Parses FVV text from an I/O stream into a new tree, leniently.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let tree = fvv::from_reader(Cursor::new("{ n = 1.5; }")).unwrap();
/// assert_eq!(tree.get("n").unwrap().as_double(), 1.5);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the stream is not valid UTF-8.
pub fn from_reader<R>(mut reader: R) -> Result<FvvTree>
where
    R: io::Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(from_str(&text))
}

/// Prints a tree in `common` mode.
///
/// # Examples
///
/// ```rust
/// let tree = fvv::from_str("{ a = 1; }");
/// assert_eq!(fvv::to_string(&tree), "{\n  a = 1;\n}");
/// ```
#[must_use]
pub fn to_string(tree: &FvvTree) -> String {
    tree.print(PrintMode::Common)
}

/// Prints a tree in `min` mode.
#[must_use]
pub fn to_string_min(tree: &FvvTree) -> String {
    tree.print(PrintMode::Min)
}

/// Prints a tree with custom options.
///
/// # Examples
///
/// ```rust
/// use fvv::{PrintMode, PrintOptions};
///
/// let tree = fvv::from_str("{ a = 1 <one>; }");
/// let options = PrintOptions::nodesc().with_indent(0);
/// assert_eq!(fvv::to_string_with_options(&tree, &options), "{\na = 1;\n}");
/// ```
#[must_use]
pub fn to_string_with_options(tree: &FvvTree, options: &PrintOptions) -> String {
    tree.print_with_options(options)
}

/// Prints a tree in `common` mode to a writer.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W>(writer: W, tree: &FvvTree) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, tree, &PrintOptions::default())
}

/// Prints a tree with custom options to a writer.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer_with_options<W>(mut writer: W, tree: &FvvTree, options: &PrintOptions) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(tree.print_with_options(options).as_bytes())?;
    Ok(())
}
