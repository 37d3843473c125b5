//! The filter tree.
//!
//! A tree is a root [`GroupNode`] whose children are either leaf filters or
//! nested groups. Children are ordered; order is both display order and
//! evaluation order. Lookups are by [`NodePath`] and return `None` when the
//! path does not resolve, leaving the error wording to the caller.

use crate::operations::Operation;
use crate::path::NodePath;
use crate::value::FilterValue;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Boolean combinator applied to a group's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl std::fmt::Display for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conjunction::And => f.write_str("and"),
            Conjunction::Or => f.write_str("or"),
        }
    }
}

impl FromStr for Conjunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(Conjunction::And),
            "or" => Ok(Conjunction::Or),
            other => Err(format!("unknown conjunction '{}' (expected and/or)", other)),
        }
    }
}

/// A leaf comparison. Every slot may be unset while the user is editing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterNode {
    /// Key of the selected field (`dataIndex` once submitted).
    pub field: Option<String>,
    pub operation: Option<Operation>,
    pub value: Option<FilterValue>,
}

impl FilterNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn with_value(mut self, value: impl Into<FilterValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.field.is_none() && self.operation.is_none() && self.value.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupNode {
    pub conjunction: Conjunction,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Filter(FilterNode),
    Group(GroupNode),
}

/// Borrowed view of a resolved node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Filter(&'a FilterNode),
    Group(&'a GroupNode),
}

impl Node {
    /// A fresh, empty filter.
    pub fn filter() -> Self {
        Node::Filter(FilterNode::new())
    }

    /// A fresh `and` group holding one empty filter.
    pub fn group() -> Self {
        Node::Group(GroupNode::seeded(Conjunction::And))
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group(_))
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Node::Filter(f) => NodeRef::Filter(f),
            Node::Group(g) => NodeRef::Group(g),
        }
    }

    /// Number of group levels in this subtree; zero for a filter.
    pub fn height(&self) -> usize {
        match self {
            Node::Filter(_) => 0,
            Node::Group(g) => g.height(),
        }
    }
}

impl From<FilterNode> for Node {
    fn from(node: FilterNode) -> Self {
        Node::Filter(node)
    }
}

impl From<GroupNode> for Node {
    fn from(node: GroupNode) -> Self {
        Node::Group(node)
    }
}

impl GroupNode {
    pub fn new(conjunction: Conjunction) -> Self {
        Self {
            conjunction,
            children: Vec::new(),
        }
    }

    /// A group holding a single empty filter, the shape every new group starts with.
    pub fn seeded(conjunction: Conjunction) -> Self {
        Self {
            conjunction,
            children: vec![Node::filter()],
        }
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Number of group levels, counting this one.
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(Node::height).max().unwrap_or(0)
    }

    pub fn get(&self, path: &NodePath) -> Option<NodeRef<'_>> {
        match path.indices().split_last() {
            None => Some(NodeRef::Group(self)),
            Some((last, parent)) => {
                let group = self.group_at_indices(parent)?;
                group.children.get(*last).map(Node::as_node_ref)
            }
        }
    }

    pub fn group_at(&self, path: &NodePath) -> Option<&GroupNode> {
        self.group_at_indices(path.indices())
    }

    pub fn group_at_mut(&mut self, path: &NodePath) -> Option<&mut GroupNode> {
        self.group_at_indices_mut(path.indices())
    }

    pub fn filter_at(&self, path: &NodePath) -> Option<&FilterNode> {
        match self.get(path)? {
            NodeRef::Filter(f) => Some(f),
            NodeRef::Group(_) => None,
        }
    }

    pub fn filter_at_mut(&mut self, path: &NodePath) -> Option<&mut FilterNode> {
        let (last, parent) = path.indices().split_last()?;
        match self.group_at_indices_mut(parent)?.children.get_mut(*last)? {
            Node::Filter(f) => Some(f),
            Node::Group(_) => None,
        }
    }

    /// All filters in depth-first order, paired with their paths.
    pub fn filters(&self) -> Vec<(NodePath, &FilterNode)> {
        let mut out = Vec::new();
        self.collect_filters(&NodePath::root(), &mut out);
        out
    }

    fn collect_filters<'a>(&'a self, at: &NodePath, out: &mut Vec<(NodePath, &'a FilterNode)>) {
        for (i, child) in self.children.iter().enumerate() {
            let path = at.child(i);
            match child {
                Node::Filter(f) => out.push((path, f)),
                Node::Group(g) => g.collect_filters(&path, out),
            }
        }
    }

    fn group_at_indices(&self, indices: &[usize]) -> Option<&GroupNode> {
        match indices.split_first() {
            None => Some(self),
            Some((idx, rest)) => match self.children.get(*idx)? {
                Node::Group(g) => g.group_at_indices(rest),
                Node::Filter(_) => None,
            },
        }
    }

    fn group_at_indices_mut(&mut self, indices: &[usize]) -> Option<&mut GroupNode> {
        match indices.split_first() {
            None => Some(self),
            Some((idx, rest)) => match self.children.get_mut(*idx)? {
                Node::Group(g) => g.group_at_indices_mut(rest),
                Node::Filter(_) => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GroupNode {
        // . and
        // 0   filter(name)
        // 1   or
        // 1.0   filter
        // 1.1   and
        // 1.1.0   filter(age)
        GroupNode::new(Conjunction::And)
            .with_child(FilterNode::new().with_field("name"))
            .with_child(
                GroupNode::new(Conjunction::Or)
                    .with_child(FilterNode::new())
                    .with_child(
                        GroupNode::new(Conjunction::And)
                            .with_child(FilterNode::new().with_field("age")),
                    ),
            )
    }

    #[test]
    fn resolves_filters_and_groups() {
        let root = sample();
        assert!(matches!(root.get(&NodePath::root()), Some(NodeRef::Group(_))));
        assert_eq!(
            root.filter_at(&NodePath::from([1, 1, 0])).unwrap().field.as_deref(),
            Some("age")
        );
        assert_eq!(
            root.group_at(&NodePath::from([1])).unwrap().conjunction,
            Conjunction::Or
        );
    }

    #[test]
    fn unresolvable_paths_return_none() {
        let root = sample();
        assert!(root.get(&NodePath::from([5])).is_none());
        // walking through a filter
        assert!(root.get(&NodePath::from([0, 0])).is_none());
        assert!(root.group_at(&NodePath::from([0])).is_none());
        assert!(root.filter_at(&NodePath::from([1])).is_none());
    }

    #[test]
    fn height_counts_group_levels() {
        assert_eq!(sample().height(), 3);
        assert_eq!(GroupNode::new(Conjunction::Or).height(), 1);
        assert_eq!(Node::filter().height(), 0);
        assert_eq!(Node::group().height(), 1);
    }

    #[test]
    fn filters_are_listed_depth_first() {
        let root = sample();
        let paths: Vec<String> = root.filters().iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(paths, vec!["0", "1.0", "1.1.0"]);
    }

    #[test]
    fn mutable_lookup_edits_in_place() {
        let mut root = sample();
        root.filter_at_mut(&NodePath::from([1, 0])).unwrap().field = Some("id".into());
        root.group_at_mut(&NodePath::from([1, 1])).unwrap().conjunction = Conjunction::Or;
        assert_eq!(
            root.filter_at(&NodePath::from([1, 0])).unwrap().field.as_deref(),
            Some("id")
        );
        assert_eq!(
            root.group_at(&NodePath::from([1, 1])).unwrap().conjunction,
            Conjunction::Or
        );
    }
}
