//! Children map for FVV groups.
//!
//! [`FvvMap`] wraps an [`IndexMap`] from child name to [`NodeId`]. Storage keeps
//! insertion order, which makes lookups and inserts cheap and keeps the arena layout
//! predictable; every public iteration goes through [`FvvMap::sorted`] so that
//! printed output is ordered by name regardless of the order statements appeared in.

use crate::node::NodeId;
use indexmap::IndexMap;

/// Name → child mapping of a single node.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct FvvMap(IndexMap<String, NodeId>);

impl FvvMap {
    /// Inserts a child. If the name was already present, the old id is returned.
    pub fn insert(&mut self, key: String, id: NodeId) -> Option<NodeId> {
        self.0.insert(key, id)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<NodeId> {
        self.0.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Detaches every child.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Child ids in storage order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.values().copied()
    }

    /// Rewrites every child id through `f`.
    pub fn remap(&mut self, f: impl Fn(NodeId) -> NodeId) {
        for id in self.0.values_mut() {
            *id = f(*id);
        }
    }

    /// Returns the entries ordered lexicographically by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, NodeId)> {
        let mut entries: Vec<_> = self.0.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
        entries
    }
}

impl FromIterator<(String, NodeId)> for FvvMap {
    fn from_iter<T: IntoIterator<Item = (String, NodeId)>>(iter: T) -> Self {
        FvvMap(IndexMap::from_iter(iter))
    }
}
