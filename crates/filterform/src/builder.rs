//! # Filter Builder Session
//!
//! [`FilterBuilder`] owns one editable filter tree together with the field
//! list it was started with. The host view layer drives it with discrete,
//! synchronous edits addressed by [`NodePath`]; after each edit the host
//! re-renders from [`FilterBuilder::root`].
//!
//! ## Edits
//!
//! | Edit | Target | Rejected with |
//! |------|--------|---------------|
//! | [`add_child`](FilterBuilder::add_child) | group | `InvalidPath`, `NotAGroup`, `DepthExceeded`, `UnknownField`, `InvalidOperationForField` |
//! | [`remove_child`](FilterBuilder::remove_child) | any non-root node | `RootNotRemovable`, `NotRemovable`, `InvalidPath` |
//! | [`set_field`](FilterBuilder::set_field) | filter | `UnknownField`, `NotAFilter`, `InvalidPath` |
//! | [`set_operation`](FilterBuilder::set_operation) | filter | `InvalidOperationForField`, `NotAFilter`, `InvalidPath` |
//! | [`set_value`](FilterBuilder::set_value) | filter | `NotAFilter`, `InvalidPath` |
//! | [`set_conjunction`](FilterBuilder::set_conjunction) | group | `NotAGroup`, `InvalidPath` |
//!
//! A rejected edit never mutates the tree.
//!
//! ## Removal Policy
//!
//! The first child of any group has no remove affordance, and neither does
//! the root. Later siblings can be removed; the siblings after them shift
//! down by one, so their paths change.
//!
//! ## Cascading Reset
//!
//! Changing a filter's field recomputes its valid operations. When the
//! current operation is not among them, or the stored value does not fit the
//! new field's type, both operation and value are cleared. Nothing is ever
//! coerced to a different operation or value.
//!
//! ## Values
//!
//! Values are stored exactly as entered. [`set_value`](FilterBuilder::set_value)
//! returns the node's validation issues so the host can flag the control,
//! but a value that does not fit its operation is still kept.

use crate::config::BuilderConfig;
use crate::error::{FilterError, Result};
use crate::fields::FieldSet;
use crate::operations::{reconcile, value_input, Operation, ValueInputSpec};
use crate::path::NodePath;
use crate::snapshot::GroupSnapshot;
use crate::tree::{Conjunction, FilterNode, GroupNode, Node, NodeRef};
use crate::validation::{validate_filter, validate_tree, ValidationIssue};
use crate::value::FilterValue;
use log::{debug, warn};

/// Receives the snapshot of every successful [`FilterBuilder::submit_validated`].
pub type SubmitListener = Box<dyn FnMut(&GroupSnapshot)>;

pub struct FilterBuilder {
    fields: FieldSet,
    config: BuilderConfig,
    root: GroupNode,
    on_submit: Option<SubmitListener>,
}

impl std::fmt::Debug for FilterBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterBuilder")
            .field("fields", &self.fields)
            .field("config", &self.config)
            .field("root", &self.root)
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

impl FilterBuilder {
    /// Start a session: an `and` root holding one empty filter.
    pub fn new(fields: FieldSet, config: BuilderConfig) -> Self {
        let mut builder = Self {
            fields,
            config,
            root: GroupNode::new(Conjunction::And),
            on_submit: None,
        };
        builder.reset();
        builder
    }

    /// Resume a session from a previously submitted tree.
    ///
    /// The snapshot must fit the depth limit and only reference declared
    /// fields and operations valid for them.
    pub fn from_snapshot(
        fields: FieldSet,
        config: BuilderConfig,
        snapshot: GroupSnapshot,
    ) -> Result<Self> {
        let root = GroupNode::from(snapshot);
        if root.height() > config.max_depth {
            return Err(FilterError::DepthExceeded {
                path: NodePath::root(),
                max_depth: config.max_depth,
            });
        }
        let builder = Self {
            fields,
            config,
            root,
            on_submit: None,
        };
        for (_, filter) in builder.root.filters() {
            builder.check_filter(filter)?;
        }
        Ok(builder)
    }

    /// Discard the tree and start over with a fresh root.
    pub fn reset(&mut self) {
        let mut root = Node::Group(GroupNode::seeded(Conjunction::And));
        if self.config.seed_new_filters {
            seed_filters(&self.fields, &mut root);
        }
        if let Node::Group(group) = root {
            self.root = group;
        }
        debug!("filter tree reset");
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn root(&self) -> &GroupNode {
        &self.root
    }

    pub fn node(&self, path: &NodePath) -> Result<NodeRef<'_>> {
        self.root
            .get(path)
            .ok_or_else(|| FilterError::InvalidPath(path.to_string()))
    }

    pub fn filter(&self, path: &NodePath) -> Result<&FilterNode> {
        match self.node(path)? {
            NodeRef::Filter(f) => Ok(f),
            NodeRef::Group(_) => Err(FilterError::NotAFilter(path.clone())),
        }
    }

    pub fn group(&self, path: &NodePath) -> Result<&GroupNode> {
        match self.node(path)? {
            NodeRef::Group(g) => Ok(g),
            NodeRef::Filter(_) => Err(FilterError::NotAGroup(path.clone())),
        }
    }

    /// Whether a nested group may be added under the group at `path`.
    pub fn can_add_group(&self, path: &NodePath) -> bool {
        self.root.group_at(path).is_some() && path.len() + 1 < self.config.max_depth
    }

    /// Whether the node at `path` offers a remove action.
    pub fn can_remove(&self, path: &NodePath) -> bool {
        matches!(path.last(), Some(index) if index > 0) && self.root.get(path).is_some()
    }

    /// Append `template` to the children of the group at `path`.
    ///
    /// Returns the path of the new child.
    pub fn add_child(&mut self, path: &NodePath, template: impl Into<Node>) -> Result<NodePath> {
        let mut template = template.into();
        self.group(path)?;

        let height = template.height();
        if height > 0 && path.len() + height >= self.config.max_depth {
            warn!("rejected group at '{}': depth limit {}", path, self.config.max_depth);
            return Err(FilterError::DepthExceeded {
                path: path.clone(),
                max_depth: self.config.max_depth,
            });
        }
        match &template {
            Node::Filter(f) => self.check_filter(f)?,
            Node::Group(g) => {
                for (_, f) in g.filters() {
                    self.check_filter(f)?;
                }
            }
        }
        if self.config.seed_new_filters {
            seed_filters(&self.fields, &mut template);
        }

        let group = self
            .root
            .group_at_mut(path)
            .ok_or_else(|| FilterError::InvalidPath(path.to_string()))?;
        group.children.push(template);
        let child = path.child(group.children.len() - 1);
        debug!("added node at '{}'", child);
        Ok(child)
    }

    /// Append an empty filter to the group at `path`.
    pub fn add_filter(&mut self, path: &NodePath) -> Result<NodePath> {
        self.add_child(path, Node::filter())
    }

    /// Append an `and` group seeded with one empty filter.
    pub fn add_group(&mut self, path: &NodePath) -> Result<NodePath> {
        self.add_child(path, Node::group())
    }

    /// Remove the node at `path` and return it.
    pub fn remove_child(&mut self, path: &NodePath) -> Result<Node> {
        let (Some(index), Some(parent)) = (path.last(), path.parent()) else {
            warn!("rejected removal of the root group");
            return Err(FilterError::RootNotRemovable);
        };
        self.node(path)?;
        if index == 0 {
            warn!("rejected removal of first child at '{}'", path);
            return Err(FilterError::NotRemovable(path.clone()));
        }

        let group = self
            .root
            .group_at_mut(&parent)
            .ok_or_else(|| FilterError::InvalidPath(path.to_string()))?;
        let removed = group.children.remove(index);
        debug!("removed node at '{}'", path);
        Ok(removed)
    }

    /// Select the field of the filter at `path`.
    ///
    /// Returns `true` when the change cleared the operation and value.
    pub fn set_field(&mut self, path: &NodePath, field: &str) -> Result<bool> {
        let descriptor = self
            .fields
            .get(field)
            .ok_or_else(|| FilterError::UnknownField(field.to_string()))?;
        let valid = descriptor.valid_operations();
        let field_type = descriptor.field_type();

        let filter = locate_filter(&mut self.root, path)?;
        filter.field = Some(field.to_string());

        let operation_dropped =
            filter.operation.is_some() && reconcile(filter.operation, &valid).is_none();
        let value_misfits = filter
            .value
            .as_ref()
            .is_some_and(|v| v.scalars().iter().any(|s| !s.fits(field_type)));
        let cleared = operation_dropped || value_misfits;
        if cleared {
            filter.operation = None;
            filter.value = None;
            debug!("field '{}' at '{}' cleared operation and value", field, path);
        } else {
            debug!("field '{}' set at '{}'", field, path);
        }
        Ok(cleared)
    }

    /// Select the operation of the filter at `path`.
    ///
    /// Only operations valid for the filter's current field are accepted.
    pub fn set_operation(&mut self, path: &NodePath, operation: Operation) -> Result<()> {
        let filter = locate_filter(&mut self.root, path)?;
        let valid = self.fields.operations_of(filter.field.as_deref());
        if !valid.contains(&operation) {
            let field = filter.field.clone().unwrap_or_default();
            warn!("rejected operation '{}' for field '{}' at '{}'", operation, field, path);
            return Err(FilterError::InvalidOperationForField {
                field,
                operation: operation.to_string(),
            });
        }
        filter.operation = Some(operation);
        debug!("operation '{}' set at '{}'", operation, path);
        Ok(())
    }

    /// Store a value as entered and report whether it passes validation.
    pub fn set_value(
        &mut self,
        path: &NodePath,
        value: Option<FilterValue>,
    ) -> Result<Vec<ValidationIssue>> {
        let filter = locate_filter(&mut self.root, path)?;
        filter.value = value;
        debug!("value set at '{}'", path);
        Ok(validate_filter(&self.fields, path, filter))
    }

    pub fn set_conjunction(&mut self, path: &NodePath, conjunction: Conjunction) -> Result<()> {
        self.group(path)?;
        let group = self
            .root
            .group_at_mut(path)
            .ok_or_else(|| FilterError::InvalidPath(path.to_string()))?;
        group.conjunction = conjunction;
        debug!("conjunction '{}' set at '{}'", conjunction, path);
        Ok(())
    }

    /// Operations the filter at `path` may currently use, default first.
    pub fn valid_operations(&self, path: &NodePath) -> Result<Vec<Operation>> {
        let filter = self.filter(path)?;
        Ok(self.fields.operations_of(filter.field.as_deref()))
    }

    /// The value entry control the host should render for the filter at `path`.
    pub fn value_input(&self, path: &NodePath) -> Result<ValueInputSpec> {
        let filter = self.filter(path)?;
        Ok(value_input(
            self.fields.type_of(filter.field.as_deref()),
            filter.operation,
        ))
    }

    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate_tree(&self.fields, &self.root)
    }

    /// A deep copy of the current tree. Later edits do not affect it.
    pub fn submit(&self) -> GroupSnapshot {
        GroupSnapshot::from(&self.root)
    }

    /// Register the collaborator notified by [`submit_validated`](Self::submit_validated).
    pub fn on_submit(&mut self, listener: impl FnMut(&GroupSnapshot) + 'static) {
        self.on_submit = Some(Box::new(listener));
    }

    /// Validate, then snapshot and notify the submit listener.
    ///
    /// An invalid tree notifies nobody and returns its issues.
    pub fn submit_validated(&mut self) -> Result<GroupSnapshot> {
        let issues = self.validate();
        if !issues.is_empty() {
            warn!("submit rejected with {} issue(s)", issues.len());
            return Err(FilterError::Invalid(issues));
        }
        let snapshot = self.submit();
        if let Some(listener) = self.on_submit.as_mut() {
            listener(&snapshot);
        }
        debug!("filter tree submitted");
        Ok(snapshot)
    }

    fn check_filter(&self, filter: &FilterNode) -> Result<()> {
        if let Some(key) = &filter.field {
            if !self.fields.contains(key) {
                return Err(FilterError::UnknownField(key.clone()));
            }
        }
        if let Some(op) = filter.operation {
            if !self.fields.operations_of(filter.field.as_deref()).contains(&op) {
                return Err(FilterError::InvalidOperationForField {
                    field: filter.field.clone().unwrap_or_default(),
                    operation: op.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn locate_filter<'a>(root: &'a mut GroupNode, path: &NodePath) -> Result<&'a mut FilterNode> {
    if root.group_at(path).is_some() {
        return Err(FilterError::NotAFilter(path.clone()));
    }
    root.filter_at_mut(path)
        .ok_or_else(|| FilterError::InvalidPath(path.to_string()))
}

/// Give every empty filter in `node` the default field and its first operation.
fn seed_filters(fields: &FieldSet, node: &mut Node) {
    let Some(default) = fields.default_field() else {
        return;
    };
    match node {
        Node::Filter(f) if f.is_empty() => {
            f.field = Some(default.data_index.clone());
            f.operation = default.valid_operations().first().copied();
        }
        Node::Filter(_) => {}
        Node::Group(g) => {
            for child in &mut g.children {
                seed_filters(fields, child);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldDescriptor, FieldType};
    use crate::operations::{operations_for, ValueInput};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fields() -> FieldSet {
        FieldSet::new(vec![
            FieldDescriptor::number("id", "ID"),
            FieldDescriptor::string("name", "Name"),
            FieldDescriptor::boolean("active", "Active"),
            FieldDescriptor::string("email", "Email"),
        ])
        .unwrap()
    }

    fn builder() -> FilterBuilder {
        FilterBuilder::new(fields(), BuilderConfig::default())
    }

    fn p<const N: usize>(indices: [usize; N]) -> NodePath {
        NodePath::from(indices)
    }

    #[test]
    fn session_starts_with_one_empty_filter() {
        let b = builder();
        assert_eq!(b.root().conjunction, Conjunction::And);
        assert_eq!(b.root().children, vec![Node::filter()]);
    }

    #[test]
    fn add_child_appends_in_order() {
        let mut b = builder();
        let first = b.add_filter(&NodePath::root()).unwrap();
        let second = b.add_group(&NodePath::root()).unwrap();
        assert_eq!(first, p([1]));
        assert_eq!(second, p([2]));
        assert!(b.root().children[2].is_group());
    }

    #[test]
    fn add_child_requires_a_group() {
        let mut b = builder();
        let err = b.add_filter(&p([0])).unwrap_err();
        assert!(matches!(err, FilterError::NotAGroup(_)));
        assert!(err.is_invalid_path());

        let err = b.add_filter(&p([7])).unwrap_err();
        assert!(matches!(err, FilterError::InvalidPath(_)));
        assert_eq!(b.root().children.len(), 1);
    }

    #[test]
    fn group_depth_is_bounded() {
        let mut b = builder();
        let mut at = NodePath::root();
        for _ in 0..4 {
            assert!(b.can_add_group(&at));
            at = b.add_group(&at).unwrap();
        }
        assert_eq!(at.len(), 4);
        assert!(!b.can_add_group(&at));
        assert!(matches!(
            b.add_group(&at),
            Err(FilterError::DepthExceeded { max_depth: 5, .. })
        ));
        // filters can still be added at the deepest level
        assert!(b.add_filter(&at).is_ok());
    }

    #[test]
    fn deep_templates_are_measured_whole() {
        let mut b = builder();
        let level1 = b.add_group(&NodePath::root()).unwrap();
        let level2 = b.add_group(&level1).unwrap();
        let tall = GroupNode::new(Conjunction::Or)
            .with_child(GroupNode::new(Conjunction::And).with_child(Node::group()));
        assert_eq!(tall.height(), 3);
        assert!(matches!(
            b.add_child(&level2, tall),
            Err(FilterError::DepthExceeded { .. })
        ));
    }

    #[test]
    fn first_child_and_root_are_not_removable() {
        let mut b = builder();
        assert!(matches!(
            b.remove_child(&NodePath::root()),
            Err(FilterError::RootNotRemovable)
        ));
        assert!(matches!(b.remove_child(&p([0])), Err(FilterError::NotRemovable(_))));
        assert!(!b.can_remove(&p([0])));

        let group = b.add_group(&NodePath::root()).unwrap();
        assert!(matches!(
            b.remove_child(&group.child(0)),
            Err(FilterError::NotRemovable(_))
        ));
    }

    #[test]
    fn removal_shifts_later_siblings() {
        let mut b = builder();
        b.add_filter(&NodePath::root()).unwrap();
        b.add_filter(&NodePath::root()).unwrap();
        b.set_field(&p([2]), "name").unwrap();

        assert!(b.can_remove(&p([1])));
        b.remove_child(&p([1])).unwrap();

        assert_eq!(b.root().children.len(), 2);
        assert_eq!(b.filter(&p([1])).unwrap().field.as_deref(), Some("name"));
        assert!(matches!(b.remove_child(&p([2])), Err(FilterError::InvalidPath(_))));
    }

    #[test]
    fn removing_from_a_group_keeps_the_group() {
        let mut b = builder();
        let group = b.add_group(&NodePath::root()).unwrap();
        b.add_filter(&group).unwrap();
        b.remove_child(&group.child(1)).unwrap();
        assert_eq!(b.group(&group).unwrap().children.len(), 1);
    }

    #[test]
    fn field_change_resets_incompatible_operation() {
        let mut b = builder();
        let at = p([0]);
        b.set_field(&at, "id").unwrap();
        b.set_operation(&at, Operation::Gt).unwrap();
        b.set_value(&at, Some(FilterValue::one(3))).unwrap();

        let cleared = b.set_field(&at, "active").unwrap();
        assert!(cleared);
        let filter = b.filter(&at).unwrap();
        assert_eq!(filter.field.as_deref(), Some("active"));
        assert_eq!(filter.operation, None);
        assert_eq!(filter.value, None);
    }

    #[test]
    fn field_change_keeps_compatible_operation_and_value() {
        let mut b = builder();
        let at = p([0]);
        b.set_field(&at, "name").unwrap();
        b.set_operation(&at, Operation::Contains).unwrap();
        b.set_value(&at, Some(FilterValue::one("ab"))).unwrap();

        assert!(!b.set_field(&at, "email").unwrap());
        let filter = b.filter(&at).unwrap();
        assert_eq!(filter.field.as_deref(), Some("email"));
        assert_eq!(filter.operation, Some(Operation::Contains));
        assert_eq!(filter.value, Some(FilterValue::one("ab")));
    }

    #[test]
    fn field_change_clears_value_of_another_type() {
        let mut b = builder();
        let at = p([0]);
        b.set_field(&at, "id").unwrap();
        b.set_operation(&at, Operation::In).unwrap();
        b.set_value(&at, Some(FilterValue::many([1, 2, 3]))).unwrap();

        assert!(b.set_field(&at, "name").unwrap());
        let filter = b.filter(&at).unwrap();
        assert_eq!(filter.operation, None);
        assert_eq!(filter.value, None);
        assert_eq!(
            b.valid_operations(&at).unwrap(),
            operations_for(FieldType::String).to_vec()
        );
    }

    #[test]
    fn field_change_without_value_keeps_shared_operation() {
        let mut b = builder();
        let at = p([0]);
        b.set_field(&at, "id").unwrap();
        b.set_operation(&at, Operation::Eq).unwrap();

        assert!(!b.set_field(&at, "name").unwrap());
        assert_eq!(b.filter(&at).unwrap().operation, Some(Operation::Eq));
    }

    #[test]
    fn unknown_field_is_rejected_without_mutation() {
        let mut b = builder();
        assert!(matches!(
            b.set_field(&p([0]), "missing"),
            Err(FilterError::UnknownField(_))
        ));
        assert!(b.filter(&p([0])).unwrap().field.is_none());
        assert!(matches!(
            b.set_field(&NodePath::root(), "id"),
            Err(FilterError::NotAFilter(_))
        ));
    }

    #[test]
    fn operation_must_belong_to_field_catalog() {
        let mut b = builder();
        let at = p([0]);
        b.set_field(&at, "active").unwrap();
        b.set_operation(&at, Operation::Eq).unwrap();

        let err = b.set_operation(&at, Operation::Gt).unwrap_err();
        assert!(matches!(
            err,
            FilterError::InvalidOperationForField { ref field, ref operation }
                if field == "active" && operation == "gt"
        ));
        assert_eq!(b.filter(&at).unwrap().operation, Some(Operation::Eq));
    }

    #[test]
    fn unset_field_uses_string_catalog() {
        let b = builder();
        assert_eq!(
            b.valid_operations(&p([0])).unwrap(),
            operations_for(FieldType::String).to_vec()
        );
    }

    #[test]
    fn set_value_keeps_mismatched_arity_and_reports_it() {
        let mut b = builder();
        let at = p([0]);
        b.set_field(&at, "id").unwrap();
        b.set_operation(&at, Operation::In).unwrap();
        let issues = b.set_value(&at, Some(FilterValue::one(1))).unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, crate::validation::IssueKind::ArityMismatch);
        assert_eq!(b.filter(&at).unwrap().value, Some(FilterValue::one(1)));

        let issues = b.set_value(&at, Some(FilterValue::many([1, 2]))).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn conjunction_targets_groups_only() {
        let mut b = builder();
        b.set_conjunction(&NodePath::root(), Conjunction::Or).unwrap();
        assert_eq!(b.root().conjunction, Conjunction::Or);
        assert!(matches!(
            b.set_conjunction(&p([0]), Conjunction::And),
            Err(FilterError::NotAGroup(_))
        ));
    }

    #[test]
    fn value_input_for_number_in() {
        let mut b = builder();
        let at = p([0]);
        b.set_field(&at, "id").unwrap();
        b.set_operation(&at, Operation::In).unwrap();
        let spec = b.value_input(&at).unwrap();
        assert_eq!(spec.input, ValueInput::NumberTags);
        assert!(!spec.disabled);
    }

    #[test]
    fn submit_does_not_reset() {
        let mut b = builder();
        b.set_field(&p([0]), "name").unwrap();
        let first = b.submit();
        let second = b.submit();
        assert_eq!(first, second);
        assert_eq!(b.filter(&p([0])).unwrap().field.as_deref(), Some("name"));
    }

    #[test]
    fn validated_submit_notifies_only_when_valid() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut b = builder();
        b.on_submit(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

        assert!(matches!(b.submit_validated(), Err(FilterError::Invalid(_))));
        assert!(seen.borrow().is_empty());

        let at = p([0]);
        b.set_field(&at, "active").unwrap();
        b.set_operation(&at, Operation::Null).unwrap();
        let snapshot = b.submit_validated().unwrap();
        assert_eq!(seen.borrow().as_slice(), &[snapshot]);
    }

    #[test]
    fn seeding_fills_new_filters() {
        let config = BuilderConfig {
            seed_new_filters: true,
            ..Default::default()
        };
        let mut b = FilterBuilder::new(fields(), config);
        let first = b.filter(&p([0])).unwrap();
        assert_eq!(first.field.as_deref(), Some("id"));
        assert_eq!(first.operation, Some(Operation::Eq));

        let group = b.add_group(&NodePath::root()).unwrap();
        assert_eq!(
            b.filter(&group.child(0)).unwrap().field.as_deref(),
            Some("id")
        );
    }

    #[test]
    fn templates_are_checked_against_fields() {
        let mut b = builder();
        assert!(matches!(
            b.add_child(&NodePath::root(), FilterNode::new().with_field("nope")),
            Err(FilterError::UnknownField(_))
        ));
        assert!(matches!(
            b.add_child(
                &NodePath::root(),
                FilterNode::new().with_field("active").with_operation(Operation::Contains)
            ),
            Err(FilterError::InvalidOperationForField { .. })
        ));
        assert_eq!(b.root().children.len(), 1);
    }

    #[test]
    fn restores_from_snapshot() {
        let mut b = builder();
        let group = b.add_group(&NodePath::root()).unwrap();
        b.set_field(&group.child(0), "name").unwrap();
        let snapshot = b.submit();

        let restored =
            FilterBuilder::from_snapshot(fields(), BuilderConfig::default(), snapshot).unwrap();
        assert_eq!(restored.root(), b.root());
    }

    #[test]
    fn snapshot_with_unknown_field_is_rejected() {
        let snapshot = GroupSnapshot::from(
            &GroupNode::new(Conjunction::And).with_child(FilterNode::new().with_field("ghost")),
        );
        assert!(matches!(
            FilterBuilder::from_snapshot(fields(), BuilderConfig::default(), snapshot),
            Err(FilterError::UnknownField(_))
        ));
    }
}
