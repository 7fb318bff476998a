//! The FVV tree: an arena of nodes addressed by [`NodeId`].
//!
//! Every node carries a [`FvvValue`], a map of named children, a description and an
//! optional link. A node is either a **leaf** (value set, no children) or a **group**
//! (children, no value); the root is always a group.
//!
//! Nodes live in one `Vec` owned by [`FvvTree`]. A link is the [`NodeId`] of another
//! node in the same arena, captured once when the link is made, so it can never dangle
//! even when the tree is restructured later. Nodes are never freed individually: a
//! subtree detached by an overwrite stays in the arena (unreachable from the root),
//! which keeps links into it readable, until [`FvvTree::compact`] rebuilds the arena.
//!
//! ## Reading
//!
//! [`NodeRef`] is a cheap `Copy` view. Typed getters look through one link and fall
//! back to a zero value on a type mismatch:
//!
//! ```rust
//! let tree = fvv::from_str("{ port = 8080; alias = port; name = \"srv\"; }");
//!
//! let alias = tree.get("alias").unwrap();
//! assert!(alias.is_link());
//! assert_eq!(alias.as_int(), 8080);
//! assert_eq!(alias.as_str(), "");
//! assert_eq!(tree.get("name").unwrap().as_str(), "srv");
//! ```
//!
//! ## Writing
//!
//! [`NodeMut`] auto-vivifies children by name:
//!
//! ```rust
//! use fvv::{FvvTree, PrintMode};
//!
//! let mut tree = FvvTree::new();
//! tree.entry("server.port").set(8080).set_description("listen port");
//! tree.entry("server.host").set("localhost");
//!
//! assert_eq!(
//!     tree.print(PrintMode::Min),
//!     "{server={host=\"localhost\";port=8080<listen port>;};}"
//! );
//! ```

use crate::map::FvvMap;
use crate::options::{PrintMode, PrintOptions};
use crate::ser::Printer;
use crate::value::{FvvValue, FvvValueVisitor, ValueKind};
use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stable handle of a node inside one [`FvvTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[cfg(test)]
    pub(crate) const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of the node in its tree's arena.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Node {
    pub(crate) value: FvvValue,
    pub(crate) children: FvvMap,
    pub(crate) desc: String,
    pub(crate) link: Option<NodeId>,
    pub(crate) link_name: String,
}

impl Node {
    #[inline]
    fn is_not_empty(&self) -> bool {
        !self.value.is_empty() || self.link.is_some()
    }
}

/// An FVV document tree.
///
/// # Examples
///
/// ```rust
/// use fvv::FvvTree;
///
/// let mut tree = FvvTree::new();
/// assert!(tree.is_empty());
///
/// fvv::parse("{ a.b = 1; a.c = 2; }", &mut tree);
/// let a = tree.get("a").unwrap();
/// assert!(a.is_group());
/// assert_eq!(a.as_int(), 0);
/// assert_eq!(tree.get("a.c").unwrap().as_int(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FvvTree {
    nodes: Vec<Node>,
}

impl Default for FvvTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FvvTree {
    /// Id of the root group of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Creates a tree holding only an empty root group.
    #[must_use]
    pub fn new() -> Self {
        FvvTree {
            nodes: vec![Node::default()],
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: Self::ROOT,
        }
    }

    pub fn root_mut(&mut self) -> NodeMut<'_> {
        NodeMut {
            tree: self,
            id: Self::ROOT,
        }
    }

    /// Returns a view of `id`, or `None` if the id does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<NodeMut<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeMut { tree: self, id })
    }

    /// Looks up a dotted path from the root without creating anything.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<NodeRef<'_>> {
        self.root().path(path)
    }

    /// Returns the node at a dotted path, creating missing nodes on the way.
    pub fn entry(&mut self, path: &str) -> NodeMut<'_> {
        self.root_mut().path(path)
    }

    /// Returns `true` if the root has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes[Self::ROOT.0].children.is_empty()
    }

    /// Number of nodes in the arena, including detached ones.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Prints the whole document in the given mode.
    #[must_use]
    pub fn print(&self, mode: PrintMode) -> String {
        self.root().print(mode)
    }

    #[must_use]
    pub fn print_with_options(&self, options: &PrintOptions) -> String {
        self.root().print_with_options(options)
    }

    /// Drops nodes that are no longer reachable from the root and renumbers the rest.
    ///
    /// Subtrees detached by overwrites stay in the arena until this is called. A
    /// detached node that a live link still points at is kept. Every [`NodeId`] obtained
    /// before the call is invalidated. Returns the number of nodes removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut tree = fvv::from_str("{ g = { x = 1; y = 2; }; }");
    /// fvv::parse("{ g = 3; }", &mut tree);
    /// assert_eq!(tree.node_count(), 4);
    ///
    /// assert_eq!(tree.compact(), 2);
    /// assert_eq!(tree.node_count(), 2);
    /// assert_eq!(tree.get("g").unwrap().as_int(), 3);
    /// ```
    pub fn compact(&mut self) -> usize {
        let mut remap: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut order = vec![Self::ROOT];
        remap[Self::ROOT.0] = Some(Self::ROOT);

        let mut next = 0;
        while let Some(&id) = order.get(next) {
            next += 1;
            let node = &self.nodes[id.0];
            for reached in node.children.ids().chain(node.link) {
                if remap[reached.0].is_none() {
                    remap[reached.0] = Some(NodeId(order.len()));
                    order.push(reached);
                }
            }
        }

        let removed = self.nodes.len() - order.len();
        if removed == 0 {
            return 0;
        }

        let mut old = std::mem::take(&mut self.nodes);
        self.nodes = order
            .iter()
            .map(|id| std::mem::take(&mut old[id.0]))
            .collect();
        let new_id = |id: NodeId| remap[id.0].unwrap_or(id);
        for node in &mut self.nodes {
            node.children.remap(new_id);
            node.link = node.link.map(new_id);
        }
        removed
    }

    // Crate-internal arena operations. Ids handed to these always come from this tree.

    #[inline]
    pub(crate) fn data(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the child `name` of `parent`, creating an empty node if missing.
    ///
    /// A leaf that gains a child becomes a group: its value and link are dropped.
    pub(crate) fn child_or_insert(&mut self, parent: NodeId, name: &str) -> NodeId {
        if let Some(id) = self.nodes[parent.0].children.get(name) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::default());

        let parent_node = &mut self.nodes[parent.0];
        if parent_node.is_not_empty() || !parent_node.link_name.is_empty() {
            parent_node.value = FvvValue::Empty;
            parent_node.link = None;
            parent_node.link_name.clear();
        }
        parent_node.children.insert(name.to_string(), id);
        id
    }

    /// Makes `id` a leaf holding `value`, dropping any link and children.
    pub(crate) fn set_value(&mut self, id: NodeId, value: FvvValue) {
        let node = &mut self.nodes[id.0];
        node.value = value;
        node.link = None;
        node.link_name.clear();
        node.children.clear();
    }

    /// Makes `id` a link leaf named `name`. Returns `true` if a live target was set.
    ///
    /// A target that is itself a resolved link is replaced by its own target, so reads
    /// never need more than one hop. A link that would end on `id` is left pending.
    pub(crate) fn set_link(&mut self, id: NodeId, target: Option<NodeId>, name: String) -> bool {
        let target = target.and_then(|t| self.link_target(id, t));
        let node = &mut self.nodes[id.0];
        node.value = FvvValue::Empty;
        node.children.clear();
        node.link = target;
        node.link_name = name;
        target.is_some()
    }

    fn link_target(&self, id: NodeId, target: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(target.0)?;
        let target = node.link.unwrap_or(target);
        (target != id).then_some(target)
    }

    pub(crate) fn set_description(&mut self, id: NodeId, desc: String) {
        self.nodes[id.0].desc = desc;
    }

    /// Walks `path` child by child from `from`.
    fn find_path(&self, from: NodeId, path: &str) -> Option<NodeId> {
        path.split('.')
            .try_fold(from, |node, segment| self.nodes[node.0].children.get(segment))
    }

    /// Like [`find_path`](Self::find_path), but only a non-empty node other than
    /// `exclude` counts.
    fn resolve_path(&self, from: NodeId, path: &str, exclude: NodeId) -> Option<NodeId> {
        self.find_path(from, path)
            .filter(|&id| id != exclude && self.nodes[id.0].is_not_empty())
    }

    /// The nodes a link name could resolve to once they hold something: the one below
    /// the enclosing group and the one below the root.
    pub(crate) fn link_candidates(&self, context: NodeId, path: &str) -> [Option<NodeId>; 2] {
        [self.find_path(context, path), self.find_path(Self::ROOT, path)]
    }

    /// Resolves a link name against the enclosing group, then against the root.
    pub(crate) fn resolve_link(&self, context: NodeId, path: &str, exclude: NodeId) -> Option<NodeId> {
        self.resolve_path(context, path, exclude)
            .or_else(|| self.resolve_path(Self::ROOT, path, exclude))
    }
}

impl fmt::Display for FvvTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print(PrintMode::Common))
    }
}

/// Read-only view of one node.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a FvvTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn tree(&self) -> &'a FvvTree {
        self.tree
    }

    #[inline]
    fn node(&self) -> &'a Node {
        self.tree.data(self.id)
    }

    /// The node whose value typed reads see: the link target if there is one.
    #[inline]
    fn target(&self) -> &'a Node {
        match self.node().link {
            Some(target) => self.tree.data(target),
            None => self.node(),
        }
    }

    /// The value stored on this node itself, ignoring any link.
    #[must_use]
    pub fn value(&self) -> &'a FvvValue {
        &self.node().value
    }

    /// The value seen through the link, if any.
    #[must_use]
    pub fn resolved_value(&self) -> &'a FvvValue {
        &self.target().value
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.resolved_value().kind()
    }

    /// Returns the boolean value, or `false` if the node holds anything else.
    #[must_use]
    pub fn as_bool(&self) -> bool {
        self.resolved_value().as_bool().unwrap_or(false)
    }

    /// Returns the integer value, or `0` if the node holds anything else.
    #[must_use]
    pub fn as_int(&self) -> i64 {
        self.resolved_value().as_int().unwrap_or(0)
    }

    /// Returns the double value, or `0.0` if the node holds anything else.
    ///
    /// Integers are not widened.
    #[must_use]
    pub fn as_double(&self) -> f64 {
        self.resolved_value().as_double().unwrap_or(0.0)
    }

    /// Returns the string value, or `""` if the node holds anything else.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.resolved_value().as_str().unwrap_or("")
    }

    #[must_use]
    pub fn as_bools(&self) -> &'a [bool] {
        self.resolved_value().as_bools().unwrap_or(&[])
    }

    #[must_use]
    pub fn as_ints(&self) -> &'a [i64] {
        self.resolved_value().as_ints().unwrap_or(&[])
    }

    #[must_use]
    pub fn as_doubles(&self) -> &'a [f64] {
        self.resolved_value().as_doubles().unwrap_or(&[])
    }

    #[must_use]
    pub fn as_strs(&self) -> &'a [String] {
        self.resolved_value().as_strs().unwrap_or(&[])
    }

    /// `true` unless the node holds a concrete value or a live link.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.node().is_not_empty()
    }

    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        self.node().is_not_empty()
    }

    #[must_use]
    pub fn description(&self) -> &'a str {
        &self.node().desc
    }

    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.node().desc.is_empty()
    }

    /// `true` if the node carries a live link.
    #[must_use]
    pub fn is_link(&self) -> bool {
        self.node().link.is_some()
    }

    /// `true` if the node names a link target that was never found.
    #[must_use]
    pub fn is_link_pending(&self) -> bool {
        let node = self.node();
        node.link.is_none() && !node.link_name.is_empty()
    }

    /// The dotted path text the link was written as; empty if the node is not a link.
    #[must_use]
    pub fn link_name(&self) -> &'a str {
        &self.node().link_name
    }

    #[must_use]
    pub fn link(&self) -> Option<NodeRef<'a>> {
        self.node().link.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<NodeRef<'a>> {
        self.node().children.get(name).map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    /// Looks up a dotted path below this node.
    #[must_use]
    pub fn path(&self, path: &str) -> Option<NodeRef<'a>> {
        path.split('.')
            .try_fold(*self, |node, segment| node.get(segment))
    }

    /// Children ordered by name.
    pub fn children(&self) -> impl Iterator<Item = (&'a str, NodeRef<'a>)> + 'a {
        let tree = self.tree;
        self.node()
            .children
            .sorted()
            .into_iter()
            .map(move |(name, id)| (name, NodeRef { tree, id }))
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.node().children.len()
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.node().children.is_empty()
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        self.has_children()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !self.has_children()
    }

    /// Prints this node's children as a document.
    #[must_use]
    pub fn print(&self, mode: PrintMode) -> String {
        self.print_with_options(&PrintOptions::from(mode))
    }

    #[must_use]
    pub fn print_with_options(&self, options: &PrintOptions) -> String {
        let mut printer = Printer::new(options.clone());
        printer.print(*self);
        printer.into_inner()
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &node.value)
            .field("link", &node.link)
            .field("link_name", &node.link_name)
            .field("desc", &node.desc)
            .field(
                "children",
                &self.children().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Mutable view of one node.
///
/// Methods that walk down (`child`, `path`) consume the view so the result can be
/// bound with `let`; use [`NodeMut::reborrow`] to keep the parent view around.
///
/// # Examples
///
/// ```rust
/// use fvv::FvvTree;
///
/// let mut tree = FvvTree::new();
/// let mut db = tree.root_mut().child("db");
/// db.reborrow().child("host").set("localhost");
/// db.reborrow().child("port").set(5432);
///
/// assert_eq!(tree.get("db").unwrap().len(), 2);
/// ```
pub struct NodeMut<'a> {
    tree: &'a mut FvvTree,
    id: NodeId,
}

impl<'a> NodeMut<'a> {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Read-only view of this node.
    #[must_use]
    pub fn view(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self.tree,
            id: self.id,
        }
    }

    pub fn into_ref(self) -> NodeRef<'a> {
        NodeRef {
            tree: self.tree,
            id: self.id,
        }
    }

    pub fn reborrow(&mut self) -> NodeMut<'_> {
        NodeMut {
            tree: self.tree,
            id: self.id,
        }
    }

    /// Returns the child `name`, creating an empty node if it does not exist.
    ///
    /// If this node was a leaf, it becomes a group and loses its value.
    pub fn child(self, name: &str) -> NodeMut<'a> {
        let id = self.tree.child_or_insert(self.id, name);
        NodeMut {
            tree: self.tree,
            id,
        }
    }

    /// Walks a dotted path below this node, creating missing nodes.
    pub fn path(self, path: &str) -> NodeMut<'a> {
        path.split('.').fold(self, |node, segment| node.child(segment))
    }

    /// Stores `value`, turning the node into a leaf.
    ///
    /// Any link is cleared and any children are detached.
    pub fn set(&mut self, value: impl Into<FvvValue>) -> &mut Self {
        self.tree.set_value(self.id, value.into());
        self
    }

    pub fn set_description(&mut self, desc: impl Into<String>) -> &mut Self {
        self.tree.set_description(self.id, desc.into());
        self
    }

    pub fn clear_description(&mut self) -> &mut Self {
        self.tree.set_description(self.id, String::new());
        self
    }

    /// Links this node to `target`, remembering `name` as the printed alias.
    ///
    /// Returns `false` if the target is not in this tree or would make the node link
    /// to itself; the node then keeps `name` as a pending link.
    pub fn set_link(&mut self, target: NodeId, name: impl Into<String>) -> bool {
        self.tree.set_link(self.id, Some(target), name.into())
    }

    /// Removes the link and its name. The node is left empty.
    pub fn clear_link(&mut self) -> &mut Self {
        self.tree.set_value(self.id, FvvValue::Empty);
        self
    }

    /// Copies the link target's current value into this node and drops the link.
    ///
    /// Returns `false` and changes nothing if the node has no live link.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut tree = fvv::from_str("{ a = 5; b = a; }");
    ///
    /// let b = tree.get("b").unwrap().id();
    /// assert!(tree.node_mut(b).unwrap().materialize_link());
    /// tree.entry("a").set(6);
    ///
    /// let b = tree.get("b").unwrap();
    /// assert!(!b.is_link());
    /// assert_eq!(b.as_int(), 5);
    /// ```
    pub fn materialize_link(&mut self) -> bool {
        let Some(target) = self.tree.data(self.id).link else {
            return false;
        };
        let value = self.tree.data(target).value.clone();
        self.tree.set_value(self.id, value);
        true
    }
}

impl fmt::Debug for NodeMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view(), f)
    }
}

// ── serde bridge ────────────────────────────────────────────────────

/// Groups nested deeper than this are refused by the serde bridge, whose visitors
/// recurse once per level.
const MAX_SERIALIZE_DEPTH: usize = 256;

impl Serialize for NodeRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Nested {
            node: *self,
            depth: 0,
        }
        .serialize(serializer)
    }
}

/// A node together with its depth below the node serialization started at.
struct Nested<'a> {
    node: NodeRef<'a>,
    depth: usize,
}

impl Serialize for Nested<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.node.has_children() {
            serialize_group(self.node, self.depth, serializer)
        } else {
            self.node.resolved_value().serialize(serializer)
        }
    }
}

fn serialize_group<S>(node: NodeRef<'_>, depth: usize, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if depth >= MAX_SERIALIZE_DEPTH {
        return Err(ser::Error::custom(format_args!(
            "groups nested deeper than {MAX_SERIALIZE_DEPTH} levels"
        )));
    }
    let mut map = serializer.serialize_map(Some(node.len()))?;
    for (name, child) in node.children() {
        map.serialize_entry(
            name,
            &Nested {
                node: child,
                depth: depth + 1,
            },
        )?;
    }
    map.end()
}

impl Serialize for FvvTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_group(self.root(), 0, serializer)
    }
}

impl<'de> Deserialize<'de> for FvvTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut tree = FvvTree::new();
        NodeSeed {
            tree: &mut tree,
            id: FvvTree::ROOT,
        }
        .deserialize(deserializer)?;
        Ok(tree)
    }
}

/// Deserializes into an existing node: maps become children, everything else a value.
struct NodeSeed<'t> {
    tree: &'t mut FvvTree,
    id: NodeId,
}

impl NodeSeed<'_> {
    fn store<E>(self, value: FvvValue) -> Result<(), E> {
        self.tree.set_value(self.id, value);
        Ok(())
    }
}

impl<'de> DeserializeSeed<'de> for NodeSeed<'_> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for NodeSeed<'_> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of FVV nodes or a scalar value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<(), E> {
        self.store(FvvValue::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<(), E> {
        self.store(FvvValue::Int(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<(), E>
    where
        E: de::Error,
    {
        let value = FvvValueVisitor.visit_u64::<E>(value)?;
        self.store(value)
    }

    fn visit_f64<E>(self, value: f64) -> Result<(), E> {
        self.store(FvvValue::Double(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<(), E> {
        self.store(FvvValue::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<(), E> {
        self.store(FvvValue::String(value))
    }

    fn visit_unit<E>(self) -> Result<(), E> {
        self.store(FvvValue::Empty)
    }

    fn visit_none<E>(self) -> Result<(), E> {
        self.store(FvvValue::Empty)
    }

    fn visit_seq<A>(self, seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        let value = FvvValueVisitor.visit_seq(seq)?;
        self.store(value)
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        let tree = self.tree;
        while let Some(key) = map.next_key::<String>()? {
            let id = tree.child_or_insert(self.id, &key);
            map.next_value_seed(NodeSeed {
                tree: &mut *tree,
                id,
            })?;
        }
        Ok(())
    }
}
