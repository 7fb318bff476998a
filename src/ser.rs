//! FVV printing.
//!
//! This module provides the [`Printer`], which renders a tree (or any subtree) back to
//! FVV text.
//!
//! ## Overview
//!
//! - **Sorted**: children are written in name order, so output does not depend on the
//!   order statements were read in
//! - **Re-parseable**: printing, parsing and printing again yields the same text
//! - **Pruned**: nodes that carry nothing (no value, no link, nothing printable below)
//!   are left out
//!
//! ## Usage
//!
//! Most users should use [`FvvTree::print`](crate::FvvTree::print) or the functions in
//! the crate root:
//!
//! ```rust
//! use fvv::PrintMode;
//!
//! let tree = fvv::from_str("{ b = 2 <two>; a = [1.0, 2.5]; }");
//!
//! assert_eq!(tree.print(PrintMode::Common), "{\n  a = [1.0, 2.5];\n  b = 2 <two>;\n}");
//! assert_eq!(tree.print(PrintMode::Min), "{a=[1.0,2.5];b=2<two>;}");
//! assert_eq!(tree.print(PrintMode::NoDesc), "{\n  a = [1.0, 2.5];\n  b = 2;\n}");
//! ```
//!
//! ## Direct Printer Usage
//!
//! ```rust
//! use fvv::{Printer, PrintOptions};
//!
//! let tree = fvv::from_str("{ g = { x = true; }; }");
//!
//! let mut printer = Printer::new(PrintOptions::new().with_indent(4));
//! printer.print(tree.root());
//! assert_eq!(printer.into_inner(), "{\n    g = {\n        x = true;\n    };\n}");
//! ```

use crate::literal;
use crate::node::NodeRef;
use crate::options::{PrintMode, PrintOptions};
use crate::value::FvvValue;

/// The FVV printer.
///
/// Accumulates text in an internal buffer; retrieve it with [`Printer::into_inner`].
/// Nesting depth is bounded only by memory: the tree is walked with an explicit stack.
pub struct Printer {
    output: String,
    options: PrintOptions,
}

/// One pending step of the walk.
enum Frame<'a> {
    /// Write `name = ...` and, for a group, schedule its children.
    Open {
        name: &'a str,
        node: NodeRef<'a>,
        depth: usize,
    },
    /// Write the closing brace of a group.
    Close { node: NodeRef<'a>, depth: usize },
}

impl Printer {
    pub fn new(options: PrintOptions) -> Self {
        Printer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes the children of `node` wrapped in the outer braces.
    ///
    /// The output has no trailing newline.
    pub fn print(&mut self, node: NodeRef<'_>) {
        let printable = printable_nodes(node);
        let mut stack = Vec::new();
        push_children(&mut stack, node, 1, &printable);

        self.output.push('{');
        self.write_newline();
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Open { name, node, depth } => {
                    self.write_indent(depth);
                    self.output.push_str(name);
                    self.output
                        .push_str(if self.options.mode.is_min() { "=" } else { " = " });

                    if node.has_children() {
                        self.output.push('{');
                        self.write_newline();
                        stack.push(Frame::Close { node, depth });
                        push_children(&mut stack, node, depth + 1, &printable);
                    } else {
                        if node.link_name().is_empty() {
                            write_literal(&mut self.output, node.value(), self.options.mode);
                        } else {
                            self.output.push_str(node.link_name());
                        }
                        self.end_statement(node);
                    }
                }
                Frame::Close { node, depth } => {
                    self.write_indent(depth);
                    self.output.push('}');
                    self.end_statement(node);
                }
            }
        }
        self.output.push('}');
    }

    fn end_statement(&mut self, node: NodeRef<'_>) {
        self.write_description(node.description());
        self.output.push(';');
        self.write_newline();
    }

    fn write_description(&mut self, desc: &str) {
        if desc.is_empty() || !self.options.mode.includes_descriptions() {
            return;
        }
        if !self.options.mode.is_min() {
            self.output.push(' ');
        }
        self.output.push('<');
        for ch in desc.chars() {
            if ch == '>' {
                self.output.push('\\');
            }
            self.output.push(ch);
        }
        self.output.push('>');
    }

    #[inline]
    fn write_indent(&mut self, depth: usize) {
        if !self.options.mode.is_min() {
            self.output
                .extend(std::iter::repeat(' ').take(depth * self.options.indent));
        }
    }

    #[inline]
    fn write_newline(&mut self) {
        if !self.options.mode.is_min() {
            self.output.push('\n');
        }
    }
}

/// Pushes the printable children of `node` so that they pop in name order.
fn push_children<'a>(stack: &mut Vec<Frame<'a>>, node: NodeRef<'a>, depth: usize, printable: &[bool]) {
    let start = stack.len();
    stack.extend(
        node.children()
            .filter(|(_, child)| printable[child.id().index()])
            .map(|(name, node)| Frame::Open { name, node, depth }),
    );
    stack[start..].reverse();
}

/// Marks, for every node below `node`, whether it is printed: a leaf if it holds a
/// value or a link name, a group if any child is printed. Empty nodes would otherwise
/// re-parse differently.
fn printable_nodes(node: NodeRef<'_>) -> Vec<bool> {
    let tree = node.tree();
    let mut order = Vec::new();
    let mut stack = vec![node.id()];
    while let Some(id) = stack.pop() {
        order.push(id);
        stack.extend(tree.data(id).children.ids());
    }

    // Children come after their parent in `order`, so a reverse sweep sees them first.
    let mut printable = vec![false; tree.node_count()];
    for id in order.into_iter().rev() {
        let data = tree.data(id);
        printable[id.index()] = if data.children.is_empty() {
            !data.value.is_empty() || !data.link_name.is_empty()
        } else {
            data.children.ids().any(|child| printable[child.index()])
        };
    }
    printable
}

/// Appends `value` as an FVV literal.
pub(crate) fn write_literal(out: &mut String, value: &FvvValue, mode: PrintMode) {
    match value {
        FvvValue::Empty => {}
        FvvValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        FvvValue::Int(i) => out.push_str(&i.to_string()),
        FvvValue::Double(d) => write_double(out, *d),
        FvvValue::String(s) => write_quoted(out, s),
        FvvValue::Bools(v) => write_array(out, v, mode, |out, b| {
            out.push_str(if *b { "true" } else { "false" })
        }),
        FvvValue::Ints(v) => write_array(out, v, mode, |out, i| out.push_str(&i.to_string())),
        FvvValue::Doubles(v) => write_array(out, v, mode, |out, d| write_double(out, *d)),
        FvvValue::Strings(v) => write_array(out, v, mode, |out, s| write_quoted(out, s)),
    }
}

fn write_array<T>(out: &mut String, items: &[T], mode: PrintMode, write: impl Fn(&mut String, &T)) {
    let separator = if mode.is_min() { "," } else { ", " };
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write(out, item);
    }
    out.push(']');
}

/// Doubles that look like integers get a `.0` so they read back as doubles.
fn write_double(out: &mut String, d: f64) {
    let text = d.to_string();
    let integral = literal::is_int(&text);
    out.push_str(&text);
    if integral {
        out.push_str(".0");
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        if ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
}
