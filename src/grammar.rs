//! FVV Format Reference
//!
//! This module documents the FVV text format as implemented by this library.
//!
//! # Overview
//!
//! FVV is a small hierarchical configuration format. A document is a brace-wrapped
//! sequence of statements; each statement assigns a value, a link or a nested group
//! to a dotted name, and may carry a description.
//!
//! ## Document
//!
//! Everything before the first `{` and after the last `}` (neither preceded by a
//! backslash) is ignored, so documents can sit inside comments or other text. A
//! leading byte-order mark is dropped. A document without such a pair is not parsed.
//!
//! ```text
//! this header is ignored
//! {
//!   a = 1;
//! }
//! ```
//!
//! Space, tab, carriage return and line feed are insignificant everywhere except
//! inside strings and descriptions. Names therefore cannot contain whitespace.
//!
//! # Statements
//!
//! ```text
//! path = value;
//! path = value <description>;
//! path <description> = value;
//! ```
//!
//! **Rules**:
//! - `path` is one or more names separated by `.`; missing intermediate nodes are
//!   created as groups
//! - The path is resolved from the group the statement appears in
//! - A statement must end with `;`; text ending without it is dropped
//! - A later statement for the same path replaces the earlier value and description
//! - An empty path (`= 1;`) or an empty value (`a = ;`) is allowed; the latter leaves an
//!   empty node that the printer skips
//!
//! ## Values
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Bool | `true` or `false` | `on = true;` |
//! | Int | optional sign and digits, 64-bit | `n = -42;` |
//! | Double | optional sign, digits, one `.` | `x = .5;` |
//! | String | double-quoted | `s = "hi";` |
//! | Array | `[a, b, ...]` of one type | `v = [1, 2];` |
//! | Link | bare dotted path | `p = server.port;` |
//!
//! A bare token is classified in the order bool, int, double, link. An integer too
//! large for 64 bits reads as a double. Exponents are not supported.
//!
//! ### Strings
//!
//! Inside a string the only escape is `\"`; every other character, including `<`, `;`
//! and newlines, is kept verbatim.
//!
//! ### Arrays
//!
//! The first element decides the array type:
//!
//! - quoted first element: string array; every element is kept as text, quoted or not
//! - `true`/`false`: bool array
//! - integer: int array
//! - double: double array; integers are accepted and widened
//!
//! Elements that do not fit are dropped. A list whose first element is an unquoted
//! non-literal, or an empty list, leaves the node empty. A list may also be closed by
//! the statement's `;`.
//!
//! ```text
//! a = [1, 2.5, 3];      // int array [1, 3]
//! b = [1.5, 2];         // double array [1.5, 2.0]
//! c = ["x", y];         // string array ["x", "y"]
//! ```
//!
//! ## Groups
//!
//! ```text
//! server = {
//!   host = "localhost";
//!   port = 8080;
//! } <description of the group>;
//! ```
//!
//! A group body is closed by `}` followed by `;`. A description after the `}` applies
//! to the group. Assigning a group to a name that holds a value turns it into a group;
//! assigning a value to a group drops its children.
//!
//! ## Descriptions
//!
//! `<...>` attaches text to the statement being read. `\>` writes a literal `>`.
//! Descriptions outside any statement at document level are discarded. A `<` preceded
//! by a backslash does not open a description.
//!
//! ## Links
//!
//! ```text
//! {
//!   defaults = { timeout = 30; };
//!   service = {
//!     timeout = defaults.timeout;
//!   };
//! }
//! ```
//!
//! A bare path is looked up first from the group holding the statement, then from the
//! document root. The target must already hold a value or a link; groups cannot be
//! linked. A link to a link points at the final target. A node cannot link to itself.
//!
//! A link whose target is not found stays **pending**: it reads as empty but keeps its
//! name and prints it back. With
//! [`LinkResolution::Deferred`](crate::LinkResolution::Deferred), pending links are
//! retried once the whole document has been read, which resolves forward references.
//!
//! # Printing
//!
//! | Mode | Layout | Descriptions |
//! |------|--------|--------------|
//! | `common` | one statement per line, indented | yes |
//! | `min` | no whitespace | yes |
//! | `nodesc` | one statement per line, indented | no |
//!
//! Children print in name order. Doubles always print with a fractional part so they
//! read back as doubles. Links print as their path. Empty nodes and groups with nothing
//! printable below them are left out.
//!
//! # Limitations
//!
//! - A string cannot end with a backslash, and a description cannot end with one
//! - NaN and infinite doubles print as text that does not read back as a double
//! - Names containing `.`, `=`, `;`, `{`, `}`, `<`, or whitespace cannot be written
