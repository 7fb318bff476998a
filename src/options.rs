//! Configuration for FVV parsing and printing.
//!
//! - [`PrintMode`]: the three output styles (`common`, `min`, `nodesc`)
//! - [`PrintOptions`]: mode plus indentation width
//! - [`ParseOptions`]: link resolution policy and strictness
//! - [`LinkResolution`]: when bare paths are resolved into links
//!
//! ## Examples
//!
//! ```rust
//! use fvv::{LinkResolution, ParseOptions, PrintMode, PrintOptions};
//!
//! let print = PrintOptions::new().with_indent(4);
//! assert_eq!(print.mode, PrintMode::Common);
//!
//! let parse = ParseOptions::new().with_links(LinkResolution::Deferred);
//! assert!(!parse.strict);
//!
//! let mode: PrintMode = "nodesc".parse().unwrap();
//! assert_eq!(mode, PrintMode::NoDesc);
//! ```

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Output style of the printer.
///
/// - **Common**: indented, one statement per line, descriptions included
/// - **Min**: no whitespace at all, descriptions included
/// - **NoDesc**: like `Common` but descriptions are left out
///
/// # Examples
///
/// ```rust
/// use fvv::PrintMode;
///
/// assert_eq!(PrintMode::Min.as_str(), "min");
/// assert!(PrintMode::Common.includes_descriptions());
/// assert!(!PrintMode::NoDesc.includes_descriptions());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PrintMode {
    #[default]
    Common,
    Min,
    NoDesc,
}

impl PrintMode {
    /// Returns the name used on the wire and in configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PrintMode::Common => "common",
            PrintMode::Min => "min",
            PrintMode::NoDesc => "nodesc",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_min(&self) -> bool {
        matches!(self, PrintMode::Min)
    }

    #[inline]
    #[must_use]
    pub const fn includes_descriptions(&self) -> bool {
        !matches!(self, PrintMode::NoDesc)
    }
}

impl fmt::Display for PrintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrintMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(PrintMode::Common),
            "min" => Ok(PrintMode::Min),
            "nodesc" => Ok(PrintMode::NoDesc),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

/// Printer configuration.
///
/// # Examples
///
/// ```rust
/// use fvv::{PrintMode, PrintOptions};
///
/// let options = PrintOptions::min();
/// assert_eq!(options.mode, PrintMode::Min);
///
/// let options = PrintOptions::new().with_indent(4);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PrintOptions {
    pub mode: PrintMode,
    /// Spaces per nesting level. Ignored in `Min` mode.
    pub indent: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            mode: PrintMode::default(),
            indent: 2,
        }
    }
}

impl PrintOptions {
    /// Creates default options (common mode, 2-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for compact output.
    #[must_use]
    pub fn min() -> Self {
        PrintOptions {
            mode: PrintMode::Min,
            ..Default::default()
        }
    }

    /// Creates options for indented output without descriptions.
    #[must_use]
    pub fn nodesc() -> Self {
        PrintOptions {
            mode: PrintMode::NoDesc,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: PrintMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the indentation size (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl From<PrintMode> for PrintOptions {
    fn from(mode: PrintMode) -> Self {
        PrintOptions::new().with_mode(mode)
    }
}

/// When bare dotted paths are turned into live links.
///
/// A link whose target is defined later in the same document cannot be found by a
/// single left-to-right pass.
///
/// The printer writes children in name order, so a link that pointed backwards in
/// the source can point forwards in printed text: `{ z = 1; a = z; }` prints as
/// `{a=z;z=1;}`. Read printed text back with [`LinkResolution::Deferred`] to get the
/// same links again; with `FirstSight` such a link stays pending (the printed text
/// itself is unchanged either way).
///
/// # Examples
///
/// ```rust
/// use fvv::{parse_with_options, FvvTree, LinkResolution, ParseOptions};
///
/// let text = "{ b = a; a = 5; }";
///
/// let mut tree = FvvTree::new();
/// fvv::parse(text, &mut tree);
/// assert_eq!(tree.get("b").unwrap().as_int(), 0);
///
/// let mut tree = FvvTree::new();
/// let options = ParseOptions::new().with_links(LinkResolution::Deferred);
/// parse_with_options(text, &mut tree, &options).unwrap();
/// assert_eq!(tree.get("b").unwrap().as_int(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LinkResolution {
    /// Resolve each link when its statement is read; forward references stay pending.
    #[default]
    FirstSight,
    /// Additionally retry pending links after the whole document has been read.
    Deferred,
}

/// Parser configuration.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ParseOptions {
    pub links: LinkResolution,
    /// Report recovered conditions as errors and leave the target tree untouched.
    pub strict: bool,
}

impl ParseOptions {
    /// Creates default options (lenient, first-sight link resolution).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for strict parsing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fvv::ParseOptions;
    ///
    /// assert!(ParseOptions::strict().strict);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            strict: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_links(mut self, links: LinkResolution) -> Self {
        self.links = links;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_round_trip() {
        for mode in [PrintMode::Common, PrintMode::Min, PrintMode::NoDesc] {
            assert_eq!(mode.as_str().parse::<PrintMode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn test_unknown_mode() {
        let err = "pretty".parse::<PrintMode>().unwrap_err();
        assert_eq!(err, Error::InvalidMode("pretty".to_string()));
    }

    #[test]
    fn test_print_option_builders() {
        assert_eq!(PrintOptions::default().indent, 2);
        assert_eq!(PrintOptions::nodesc().mode, PrintMode::NoDesc);
        let options = PrintOptions::from(PrintMode::Min).with_indent(8);
        assert_eq!(options.mode, PrintMode::Min);
        assert_eq!(options.indent, 8);
    }

    #[test]
    fn test_parse_option_builders() {
        let options = ParseOptions::new();
        assert_eq!(options.links, LinkResolution::FirstSight);
        assert!(!options.strict);

        let options = ParseOptions::strict().with_links(LinkResolution::Deferred);
        assert!(options.strict);
        assert_eq!(options.links, LinkResolution::Deferred);
        assert!(!options.with_strict(false).strict);
    }
}
