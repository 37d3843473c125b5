//! Submitted filter trees.
//!
//! A snapshot is the immutable, serializable copy of a tree that a builder
//! hands to its collaborator (usually a query layer). The shape is:
//!
//! ```json
//! {
//!   "type": "group",
//!   "conjunction": "and",
//!   "filters": [
//!     { "type": "filter", "dataIndex": "id", "operation": "in", "value": [1, 2, 3] },
//!     { "type": "group", "conjunction": "or", "filters": [] }
//!   ]
//! }
//! ```
//!
//! The only difference from the editing tree is naming: a filter's `field`
//! slot is emitted as `dataIndex`. Values are copied untouched and unset
//! slots are omitted.

use crate::operations::Operation;
use crate::tree::{Conjunction, FilterNode, GroupNode, Node};
use crate::value::FilterValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum GroupTag {
    #[default]
    Group,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum FilterTag {
    #[default]
    Filter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotNode {
    Filter(FilterSnapshot),
    Group(GroupSnapshot),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSnapshot {
    #[serde(rename = "type")]
    tag: FilterTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    #[serde(rename = "type", default)]
    tag: GroupTag,
    pub conjunction: Conjunction,
    #[serde(default)]
    pub filters: Vec<SnapshotNode>,
}

impl FilterSnapshot {
    pub fn new(
        data_index: Option<String>,
        operation: Option<Operation>,
        value: Option<FilterValue>,
    ) -> Self {
        Self {
            tag: FilterTag::Filter,
            data_index,
            operation,
            value,
        }
    }
}

impl GroupSnapshot {
    pub fn new(conjunction: Conjunction, filters: Vec<SnapshotNode>) -> Self {
        Self {
            tag: GroupTag::Group,
            conjunction,
            filters,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<&FilterNode> for FilterSnapshot {
    fn from(node: &FilterNode) -> Self {
        Self::new(node.field.clone(), node.operation, node.value.clone())
    }
}

impl From<&GroupNode> for GroupSnapshot {
    fn from(group: &GroupNode) -> Self {
        Self::new(
            group.conjunction,
            group.children.iter().map(SnapshotNode::from).collect(),
        )
    }
}

impl From<&Node> for SnapshotNode {
    fn from(node: &Node) -> Self {
        match node {
            Node::Filter(f) => SnapshotNode::Filter(f.into()),
            Node::Group(g) => SnapshotNode::Group(g.into()),
        }
    }
}

impl From<FilterSnapshot> for FilterNode {
    fn from(snapshot: FilterSnapshot) -> Self {
        FilterNode {
            field: snapshot.data_index,
            operation: snapshot.operation,
            value: snapshot.value,
        }
    }
}

impl From<GroupSnapshot> for GroupNode {
    fn from(snapshot: GroupSnapshot) -> Self {
        GroupNode {
            conjunction: snapshot.conjunction,
            children: snapshot.filters.into_iter().map(Node::from).collect(),
        }
    }
}

impl From<SnapshotNode> for Node {
    fn from(snapshot: SnapshotNode) -> Self {
        match snapshot {
            SnapshotNode::Filter(f) => Node::Filter(f.into()),
            SnapshotNode::Group(g) => Node::Group(g.into()),
        }
    }
}
