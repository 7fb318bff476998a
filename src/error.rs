//! Error types for FVV parsing and printing.
//!
//! The default parse is lenient: malformed input is recovered locally and never
//! surfaces as an [`Error`]. Errors appear in three places:
//!
//! - **Strict parsing** ([`ParseOptions::strict`](crate::ParseOptions::strict)): every
//!   condition the lenient parser would silently recover from becomes a diagnostic
//!   with line and column information.
//! - **I/O adapters**: [`from_reader`](crate::from_reader), [`from_slice`](crate::from_slice)
//!   and [`to_writer`](crate::to_writer).
//! - **Configuration**: parsing an unknown print mode name.
//!
//! ## Examples
//!
//! ```rust
//! use fvv::{parse_with_options, Error, FvvTree, ParseOptions};
//!
//! let mut tree = FvvTree::new();
//! let result = parse_with_options("{ a = missing; }", &mut tree, &ParseOptions::strict());
//!
//! match result {
//!     Err(Error::UnresolvedLink { name, .. }) => assert_eq!(name, "missing"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents everything that can go wrong in the `fvv` crate.
///
/// Positions are 1-based and refer to the document text after the byte-order mark,
/// counting columns in characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes are not valid UTF-8
    #[error("Invalid UTF-8 at byte {offset}")]
    Utf8 { offset: usize },

    /// No unescaped `{ ... }` pair was found
    #[error("No FVV document found: expected content wrapped in '{{' and '}}'")]
    NoDocument,

    /// Input ended while one or more groups were still open
    #[error("Unterminated group '{group}' at line {line}, column {col}\nHelp: close the group with '}};'")]
    UnterminatedGroup {
        line: usize,
        col: usize,
        group: String,
    },

    /// Input ended inside a quoted string
    #[error("Unterminated string at line {line}, column {col}")]
    UnterminatedString { line: usize, col: usize },

    /// Input ended before the `;` of a statement
    #[error("Unterminated statement '{name}' at line {line}, column {col}\nHelp: end the statement with ';'")]
    UnterminatedStatement {
        line: usize,
        col: usize,
        name: String,
    },

    /// Input ended inside a `< ... >` description
    #[error("Unterminated description at line {line}, column {col}")]
    UnterminatedDescription { line: usize, col: usize },

    /// A bare value named a path that exists neither in the enclosing group nor at the root
    #[error("Unresolved link '{name}' at line {line}, column {col}")]
    UnresolvedLink {
        line: usize,
        col: usize,
        name: String,
    },

    /// A list element did not fit the element type chosen from the first element
    #[error("List element '{element}' at line {line}, column {col} does not match list type '{expected}'")]
    DroppedListElement {
        line: usize,
        col: usize,
        element: String,
        expected: String,
    },

    /// Unknown print mode name
    #[error("Invalid print mode '{0}': expected one of common, min, nodesc")]
    InvalidMode(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unterminated-group error.
    pub fn unterminated_group(line: usize, col: usize, group: &str) -> Self {
        Error::UnterminatedGroup {
            line,
            col,
            group: group.to_string(),
        }
    }

    /// Creates an unresolved-link error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fvv::Error;
    ///
    /// let err = Error::unresolved_link(3, 9, "db.host");
    /// assert!(err.to_string().contains("line 3"));
    /// assert!(err.to_string().contains("db.host"));
    /// ```
    pub fn unresolved_link(line: usize, col: usize, name: &str) -> Self {
        Error::UnresolvedLink {
            line,
            col,
            name: name.to_string(),
        }
    }

    /// Creates a dropped-list-element error.
    pub fn dropped_list_element(line: usize, col: usize, element: &str, expected: &str) -> Self {
        Error::DroppedListElement {
            line,
            col,
            element: element.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the 1-based `(line, column)` of a parse diagnostic, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::UnterminatedGroup { line, col, .. }
            | Error::UnterminatedString { line, col }
            | Error::UnterminatedStatement { line, col, .. }
            | Error::UnterminatedDescription { line, col }
            | Error::UnresolvedLink { line, col, .. }
            | Error::DroppedListElement { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Utf8 {
            offset: err.valid_up_to(),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
