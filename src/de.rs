//! FVV parsing.
//!
//! This module provides the [`Parser`], a character-level state machine that reads
//! FVV text into an [`FvvTree`].
//!
//! ## Overview
//!
//! - **Single pass**: every character is looked at once, no backtracking
//! - **Lenient**: malformed input is recovered locally; each recovery is recorded as a
//!   diagnostic [`Error`] and logged at `debug` level
//! - **Merging**: parsing into a non-empty tree overwrites and extends it
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! let tree = fvv::from_str("{ a = 1; g = { b = [true, false]; }; }");
//! assert_eq!(tree.get("g.b").unwrap().as_bools(), &[true, false]);
//! ```
//!
//! The parser itself reports what it recovered from:
//!
//! ```rust
//! use fvv::{Error, FvvTree, ParseOptions, Parser};
//!
//! let mut tree = FvvTree::new();
//! let diagnostics = Parser::new(&mut tree, &ParseOptions::default()).parse("{ n = [1, x, 2]; }");
//!
//! assert_eq!(tree.get("n").unwrap().as_ints(), &[1, 2]);
//! assert!(matches!(diagnostics[0], Error::DroppedListElement { .. }));
//! ```

use crate::literal::{self, Literal};
use crate::node::{FvvTree, NodeId};
use crate::options::{LinkResolution, ParseOptions};
use crate::value::FvvValue;
use crate::Error;
use std::collections::HashMap;
use tracing::{debug, trace};

const BOM: char = '\u{feff}';

/// Parser states. Whitespace outside strings and descriptions is skipped in every state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// Reading a statement path at document level.
    TopLevel,
    /// Reading a statement path inside an open group.
    InGroupPath,
    /// After `=`: a bare token, or the start of a string, list or group.
    InValue,
    /// Inside `"..."`, either a scalar or a list element.
    InString,
    /// Inside `[...]`.
    InList,
    /// Inside `<...>`. Returns to the state it was entered from.
    InDescription,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    Stop,
}

/// A raw list element, typed once the whole list is known.
#[derive(Debug)]
struct Element {
    text: String,
    quoted: bool,
    line: usize,
    col: usize,
}

/// The statement currently being read.
#[derive(Debug, Default)]
struct Statement {
    path: Vec<String>,
    token: String,
    quoted: bool,
    list: Option<Vec<Element>>,
    line: usize,
    col: usize,
}

#[derive(Debug)]
struct GroupFrame {
    node: NodeId,
    name: String,
    /// A `}` was seen; the next `;` closes the group.
    closed: bool,
    line: usize,
    col: usize,
}

/// A link whose target was not found when its statement was read.
#[derive(Debug)]
struct PendingLink {
    node: NodeId,
    context: NodeId,
    name: String,
    line: usize,
    col: usize,
}

/// The FVV parser.
///
/// Reads one document into the tree it was created with. Statements are applied as
/// soon as their `;` is read, so a document cut short still leaves everything before
/// the cut in the tree.
pub struct Parser<'t> {
    tree: &'t mut FvvTree,
    links: LinkResolution,
    state: State,
    resume: State,
    groups: Vec<GroupFrame>,
    path: String,
    stmt: Statement,
    desc_buf: String,
    desc: String,
    escape_next: bool,
    line: usize,
    column: usize,
    element_start: (usize, usize),
    string_start: (usize, usize),
    desc_start: (usize, usize),
    pending_links: Vec<PendingLink>,
    diagnostics: Vec<Error>,
}

impl<'t> Parser<'t> {
    pub fn new(tree: &'t mut FvvTree, options: &ParseOptions) -> Self {
        Parser {
            tree,
            links: options.links,
            state: State::TopLevel,
            resume: State::TopLevel,
            groups: Vec::new(),
            path: String::new(),
            stmt: Statement::default(),
            desc_buf: String::new(),
            desc: String::new(),
            escape_next: false,
            line: 1,
            column: 1,
            element_start: (1, 1),
            string_start: (1, 1),
            desc_start: (1, 1),
            pending_links: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Parses a whole document and returns every recovered condition, in input order.
    ///
    /// Text before the first unescaped `{` and after the last unescaped `}` is ignored.
    /// Input without such a pair leaves the tree untouched and yields
    /// [`Error::NoDocument`].
    pub fn parse(mut self, text: &str) -> Vec<Error> {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        let Some((start, end)) = find_body(text) else {
            debug!("no enclosing braces, tree left unchanged");
            return vec![Error::NoDocument];
        };

        let body = &text[start..end];
        if body.trim_matches(is_whitespace).is_empty() {
            trace!("empty document");
            return Vec::new();
        }

        let (line, column) = position_of(text, start);
        self.line = line;
        self.column = column;
        self.run(body);
        self.finish();
        self.diagnostics
    }

    /// Feeds characters through the state machine.
    pub(crate) fn run(&mut self, body: &str) {
        for ch in body.chars() {
            let escaped = self.escape_next;
            self.escape_next = ch == '\\' && !escaped;

            let step = self.step(ch, escaped);
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            if step == Step::Stop {
                trace!(line = self.line, "closing brace at document level, stopping");
                break;
            }
        }
    }

    /// The transition function. `escaped` is true when the previous character was a
    /// backslash that was not itself escaped.
    pub(crate) fn step(&mut self, ch: char, escaped: bool) -> Step {
        match self.state {
            State::InDescription => self.step_description(ch, escaped),
            State::InString => self.step_string(ch, escaped),
            _ if is_whitespace(ch) => {}
            _ if ch == '<' && !escaped => self.open_description(),
            State::TopLevel | State::InGroupPath => return self.step_path(ch),
            State::InValue => self.step_value(ch, escaped),
            State::InList => self.step_list(ch, escaped),
        }
        Step::Continue
    }

    #[inline]
    fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn context(&self) -> NodeId {
        self.groups.last().map_or(FvvTree::ROOT, |frame| frame.node)
    }

    fn path_state(&self) -> State {
        if self.groups.is_empty() {
            State::TopLevel
        } else {
            State::InGroupPath
        }
    }

    fn open_description(&mut self) {
        self.resume = self.state;
        self.state = State::InDescription;
        self.desc_buf.clear();
        self.desc_start = self.position();
    }

    fn step_description(&mut self, ch: char, escaped: bool) {
        if ch != '>' {
            self.desc_buf.push(ch);
        } else if escaped {
            self.desc_buf.pop();
            self.desc_buf.push('>');
        } else {
            let text = std::mem::take(&mut self.desc_buf);
            if self.resume == State::TopLevel {
                debug!(desc = %text, "description outside any statement discarded");
            } else {
                self.desc = text;
            }
            self.state = self.resume;
        }
    }

    fn step_string(&mut self, ch: char, escaped: bool) {
        if ch != '"' {
            self.stmt.token.push(ch);
        } else if escaped {
            self.stmt.token.pop();
            self.stmt.token.push('"');
        } else if self.stmt.list.is_some() {
            self.state = State::InList;
        } else {
            self.state = State::InValue;
        }
    }

    fn step_path(&mut self, ch: char) -> Step {
        match ch {
            '=' => {
                self.stmt.path = split_path(&std::mem::take(&mut self.path));
                (self.stmt.line, self.stmt.col) = self.position();
                self.state = State::InValue;
            }
            ';' => match self.groups.last() {
                Some(frame) if frame.closed => self.close_group(),
                _ => self.discard_path(),
            },
            '}' => match self.groups.last_mut() {
                Some(frame) => frame.closed = true,
                None => return Step::Stop,
            },
            _ => self.path.push(ch),
        }
        Step::Continue
    }

    fn discard_path(&mut self) {
        if !self.path.is_empty() {
            debug!(path = %self.path, line = self.line, "statement without '=' discarded");
            self.path.clear();
        }
    }

    fn step_value(&mut self, ch: char, escaped: bool) {
        match ch {
            '"' if !escaped => {
                self.stmt.quoted = true;
                self.string_start = self.position();
                self.state = State::InString;
            }
            '[' => {
                self.stmt.list.get_or_insert_with(Vec::new);
                self.state = State::InList;
            }
            '{' => self.open_group(),
            ';' => self.commit(),
            _ => self.stmt.token.push(ch),
        }
    }

    fn step_list(&mut self, ch: char, escaped: bool) {
        if self.stmt.token.is_empty() && !self.stmt.quoted {
            self.element_start = self.position();
        }
        match ch {
            '"' if !escaped => {
                self.stmt.quoted = true;
                self.string_start = self.position();
                self.state = State::InString;
            }
            ',' => self.push_element(),
            ']' => {
                self.push_element();
                self.state = State::InValue;
            }
            ';' => {
                debug!(line = self.line, "list closed by ';'");
                self.push_element();
                self.commit();
            }
            _ => self.stmt.token.push(ch),
        }
    }

    fn push_element(&mut self) {
        if self.stmt.token.is_empty() && !self.stmt.quoted {
            return;
        }
        let (line, col) = self.element_start;
        let element = Element {
            text: std::mem::take(&mut self.stmt.token),
            quoted: std::mem::take(&mut self.stmt.quoted),
            line,
            col,
        };
        if let Some(list) = self.stmt.list.as_mut() {
            list.push(element);
        }
    }

    /// Walks the statement path from the current group, creating nodes as needed.
    /// Returns `(parent, target)`.
    fn walk(&mut self, path: &[String]) -> Option<(NodeId, NodeId)> {
        let (last, prefix) = path.split_last()?;
        let context = self.context();
        let parent = prefix
            .iter()
            .fold(context, |node, segment| self.tree.child_or_insert(node, segment));
        Some((parent, self.tree.child_or_insert(parent, last)))
    }

    fn open_group(&mut self) {
        let stmt = std::mem::take(&mut self.stmt);
        let node = match self.walk(&stmt.path) {
            Some((_, target)) => target,
            None => {
                debug!(line = stmt.line, "group without a name merged into enclosing group");
                self.context()
            }
        };
        let name = stmt.path.join(".");
        trace!(group = %name, depth = self.groups.len() + 1, "open group");
        self.groups.push(GroupFrame {
            node,
            name,
            closed: false,
            line: stmt.line,
            col: stmt.col,
        });
        self.state = State::InGroupPath;
    }

    fn close_group(&mut self) {
        self.path.clear();
        if let Some(frame) = self.groups.pop() {
            let desc = std::mem::take(&mut self.desc);
            if !desc.is_empty() {
                self.tree.set_description(frame.node, desc);
            }
            trace!(group = %frame.name, "close group");
        }
        self.state = self.path_state();
    }

    fn commit(&mut self) {
        let stmt = std::mem::take(&mut self.stmt);
        let desc = std::mem::take(&mut self.desc);
        self.state = self.path_state();

        let Some((parent, target)) = self.walk(&stmt.path) else {
            debug!(line = stmt.line, "statement without a name discarded");
            return;
        };

        if let Some(elements) = stmt.list {
            let value = self.typed_list(elements);
            self.tree.set_value(target, value);
        } else if stmt.quoted {
            self.tree.set_value(target, FvvValue::String(stmt.token));
        } else {
            match literal::classify(&stmt.token) {
                Literal::Bool(b) => self.tree.set_value(target, FvvValue::Bool(b)),
                Literal::Int(i) => self.tree.set_value(target, FvvValue::Int(i)),
                Literal::Double(d) => self.tree.set_value(target, FvvValue::Double(d)),
                Literal::Path("") => self.tree.set_value(target, FvvValue::Empty),
                Literal::Path(name) => self.link(target, parent, name, stmt.line, stmt.col),
            }
        }
        self.tree.set_description(target, desc);
    }

    fn link(&mut self, node: NodeId, context: NodeId, name: &str, line: usize, col: usize) {
        let resolved = self.tree.resolve_link(context, name, node);
        if self.tree.set_link(node, resolved, name.to_string()) {
            trace!(link = name, "link resolved");
            return;
        }
        match self.links {
            LinkResolution::FirstSight => {
                debug!(link = name, line, col, "unresolved link kept as pending");
                self.diagnostics.push(Error::unresolved_link(line, col, name));
            }
            LinkResolution::Deferred => self.pending_links.push(PendingLink {
                node,
                context,
                name: name.to_string(),
                line,
                col,
            }),
        }
    }

    /// Types a list by its first element and drops the elements that do not fit.
    fn typed_list(&mut self, elements: Vec<Element>) -> FvvValue {
        let Some(first) = elements.first() else {
            return FvvValue::Empty;
        };
        if first.quoted {
            return FvvValue::Strings(elements.into_iter().map(|e| e.text).collect());
        }
        match literal::classify(&first.text) {
            Literal::Bool(_) => FvvValue::Bools(self.coerce(elements, "bool", literal::parse_bool)),
            Literal::Int(_) => FvvValue::Ints(self.coerce(elements, "int", literal::parse_int)),
            Literal::Double(_) => {
                FvvValue::Doubles(self.coerce(elements, "double", literal::parse_double))
            }
            Literal::Path(text) => {
                debug!(element = text, line = first.line, "list starting with a bare word left empty");
                FvvValue::Empty
            }
        }
    }

    fn coerce<T>(
        &mut self,
        elements: Vec<Element>,
        expected: &str,
        parse: fn(&str) -> Option<T>,
    ) -> Vec<T> {
        let mut out = Vec::with_capacity(elements.len());
        for element in elements {
            let parsed = if element.quoted {
                None
            } else {
                parse(&element.text)
            };
            match parsed {
                Some(value) => out.push(value),
                None => {
                    debug!(element = %element.text, expected, "list element dropped");
                    self.diagnostics.push(Error::dropped_list_element(
                        element.line,
                        element.col,
                        &element.text,
                        expected,
                    ));
                }
            }
        }
        out
    }

    /// Reports what the input left open and runs the deferred link pass.
    fn finish(&mut self) {
        match self.state {
            State::InString => {
                let (line, col) = self.string_start;
                debug!(line, col, "input ended inside a string");
                self.diagnostics.push(Error::UnterminatedString { line, col });
            }
            State::InDescription => {
                let (line, col) = self.desc_start;
                debug!(line, col, "input ended inside a description");
                self.diagnostics
                    .push(Error::UnterminatedDescription { line, col });
            }
            State::InValue | State::InList => {
                let name = self.stmt.path.join(".");
                debug!(statement = %name, "input ended before ';'");
                self.diagnostics.push(Error::UnterminatedStatement {
                    line: self.stmt.line,
                    col: self.stmt.col,
                    name,
                });
            }
            State::TopLevel | State::InGroupPath => {}
        }

        for frame in &self.groups {
            debug!(group = %frame.name, line = frame.line, "input ended inside a group");
            self.diagnostics
                .push(Error::unterminated_group(frame.line, frame.col, &frame.name));
        }

        if self.links == LinkResolution::Deferred {
            self.resolve_deferred();
        }
    }

    /// Resolves pending links whose targets were defined later in the document.
    ///
    /// Each link is tried once. One that still fails waits on the nodes its name could
    /// name, and is retried only when one of those becomes a live link itself, so a
    /// chain of forward references resolves in a single sweep. A node overwritten after
    /// its link statement is no longer pending.
    fn resolve_deferred(&mut self) {
        let pending = std::mem::take(&mut self.pending_links);
        let mut settled = vec![false; pending.len()];
        let mut waiting: HashMap<NodeId, Vec<usize>> = HashMap::new();
        let mut queue: Vec<usize> = (0..pending.len()).rev().collect();

        while let Some(index) = queue.pop() {
            if settled[index] {
                continue;
            }
            let link = &pending[index];
            let node = self.tree.data(link.node);
            if node.link.is_some() || node.link_name != link.name {
                settled[index] = true;
                continue;
            }

            let resolved = self
                .tree
                .resolve_link(link.context, &link.name, link.node)
                .is_some_and(|target| self.tree.set_link(link.node, Some(target), link.name.clone()));
            if resolved {
                trace!(link = %link.name, "deferred link resolved");
                settled[index] = true;
                if let Some(woken) = waiting.remove(&link.node) {
                    queue.extend(woken);
                }
                continue;
            }

            let candidates = self.tree.link_candidates(link.context, &link.name);
            for candidate in candidates.into_iter().flatten() {
                if candidate != link.node {
                    waiting.entry(candidate).or_default().push(index);
                }
            }
        }

        for (link, settled) in pending.into_iter().zip(settled) {
            if !settled {
                debug!(link = %link.name, line = link.line, "unresolved link kept as pending");
                self.diagnostics
                    .push(Error::unresolved_link(link.line, link.col, &link.name));
            }
        }
    }
}

/// Parses `text` into `tree` and returns the diagnostics.
pub(crate) fn parse_document(text: &str, tree: &mut FvvTree, options: &ParseOptions) -> Vec<Error> {
    Parser::new(tree, options).parse(text)
}

#[inline]
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

fn split_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(str::to_string).collect()
}

/// Byte range strictly between the first unescaped `{` and the last unescaped `}`.
fn find_body(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let unescaped = |i: usize| i == 0 || bytes[i - 1] != b'\\';
    let open = (0..bytes.len()).find(|&i| bytes[i] == b'{' && unescaped(i))?;
    let close = (0..bytes.len())
        .rev()
        .find(|&i| bytes[i] == b'}' && unescaped(i))?;
    (close > open).then_some((open + 1, close))
}

/// 1-based line and column of byte `offset`.
fn position_of(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, before[line_start..].chars().count() + 1)
}
