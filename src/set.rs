//! Deduplicated collections of field paths.
//!
//! A traversal unit owns one [`FieldSet`] and is its only writer; sets have no
//! internal locking. Units that run in parallel each build their own set and
//! hand it back to a single owner, which combines them with
//! [`merge_field_sets`].
//!
//! [`FieldSet`]: struct.FieldSet.html
//! [`merge_field_sets`]: fn.merge_field_sets.html

use std::iter::FromIterator;

use tracing::debug;

use crate::collections::Set;
use crate::constants::{METADATA, ROOT, STATUS, TYPE_META};
use crate::path::FieldPath;

/// A conventional single-path field set with special meaning.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WellKnown {
    /// The object's metadata sub-record, `root.metadata`.
    Metadata,

    /// The object's status sub-record, `root.status`.
    Status,

    /// The object's embedded type-identity fields, `root.` followed by the
    /// empty name.
    TypeMeta,
}

impl WellKnown {
    /// Returns the path this classification matches.
    ///
    /// # Example
    ///
    /// ```
    /// # use field_paths::path::FieldPath;
    /// # use field_paths::set::WellKnown;
    /// #
    /// assert_eq!(WellKnown::Status.path(), FieldPath::root().join("status"));
    /// ```
    pub fn path(self) -> FieldPath {
        let name = match self {
            WellKnown::Metadata => METADATA,
            WellKnown::Status => STATUS,
            WellKnown::TypeMeta => TYPE_META,
        };

        FieldPath::new(ROOT).join(name)
    }
}

/// An unordered collection of unique [`FieldPath`]s.
///
/// Uniqueness follows path equality. Members iterate in insertion order, but
/// that order carries no meaning: two sets are equal when they hold the same
/// paths.
///
/// # Example
///
/// ```
/// # use field_paths::path::FieldPath;
/// # use field_paths::set::FieldSet;
/// #
/// let mut set = FieldSet::new();
///
/// assert!(set.add(FieldPath::root().join("spec").join("replicas")));
/// assert!(!set.add(FieldPath::root().join("spec").join("replicas")));
/// assert_eq!(set.len(), 1);
/// ```
///
/// [`FieldPath`]: ../path/struct.FieldPath.html
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSet {
    fields: Set<FieldPath>,
}

impl FieldSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        FieldSet { fields: Set::new() }
    }

    /// Creates an empty set with room for `capacity` paths.
    pub fn with_capacity(capacity: usize) -> Self {
        FieldSet {
            fields: Set::with_capacity(capacity),
        }
    }

    /// Inserts `path` unless an equal path is already a member.
    ///
    /// Returns `false` if the path was already present. The set is left
    /// unchanged in that case.
    pub fn add(&mut self, path: FieldPath) -> bool {
        self.fields.insert(path)
    }

    /// Returns `true` if a path equal to `path` is a member.
    pub fn contains(&self, path: &FieldPath) -> bool {
        self.fields.contains(path)
    }

    /// Iterates over the members in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldPath> {
        self.fields.iter()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Adds every member of `other` to `self`.
    pub fn merge(&mut self, other: &FieldSet) {
        self.fields.extend(other.fields().cloned());
    }

    /// Returns the well-known classification of the set, if any.
    ///
    /// A set is classified only when it has exactly one member and that
    /// member equals the well-known path.
    ///
    /// # Example
    ///
    /// ```
    /// # use field_paths::path::FieldPath;
    /// # use field_paths::set::{FieldSet, WellKnown};
    /// #
    /// let set = FieldSet::from(FieldPath::root().join("metadata"));
    /// assert_eq!(set.classify(), Some(WellKnown::Metadata));
    ///
    /// let set = FieldSet::from(FieldPath::root().join("metadata").join("name"));
    /// assert_eq!(set.classify(), None);
    /// ```
    pub fn classify(&self) -> Option<WellKnown> {
        [WellKnown::Metadata, WellKnown::Status, WellKnown::TypeMeta]
            .iter()
            .cloned()
            .find(|&known| self.is(known))
    }

    /// Returns `true` if the set is exactly `{root.metadata}`.
    pub fn is_metadata(&self) -> bool {
        self.is(WellKnown::Metadata)
    }

    /// Returns `true` if the set is exactly `{root.status}`.
    pub fn is_status(&self) -> bool {
        self.is(WellKnown::Status)
    }

    /// Returns `true` if the set is exactly the type-identity path, `root`
    /// followed by the empty name.
    pub fn is_type_meta(&self) -> bool {
        self.is(WellKnown::TypeMeta)
    }

    fn is(&self, known: WellKnown) -> bool {
        self.len() == 1 && self.contains(&known.path())
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        FieldSet::new()
    }
}

impl From<FieldPath> for FieldSet {
    fn from(path: FieldPath) -> Self {
        let mut set = FieldSet::with_capacity(1);
        set.add(path);
        set
    }
}

impl Extend<FieldPath> for FieldSet {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = FieldPath>,
    {
        self.fields.extend(iter);
    }
}

impl FromIterator<FieldPath> for FieldSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = FieldPath>,
    {
        FieldSet {
            fields: Set::from_iter(iter),
        }
    }
}

impl IntoIterator for FieldSet {
    type Item = FieldPath;
    type IntoIter = <Set<FieldPath> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldPath;
    type IntoIter = <&'a Set<FieldPath> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Returns the union of `sets` as a new set. None of the inputs are
/// modified, and no input yields an empty set.
///
/// # Example
///
/// ```
/// # use field_paths::path::FieldPath;
/// # use field_paths::set::{merge_field_sets, FieldSet};
/// #
/// let metadata = FieldSet::from(FieldPath::root().join("metadata"));
/// let status = FieldSet::from(FieldPath::root().join("status"));
///
/// let merged = merge_field_sets(&[metadata, status]);
///
/// assert_eq!(merged.len(), 2);
/// assert!(!merged.is_metadata());
/// ```
pub fn merge_field_sets<'a, I>(sets: I) -> FieldSet
where
    I: IntoIterator<Item = &'a FieldSet>,
{
    let mut merged = FieldSet::new();
    let mut inputs = 0usize;

    for set in sets {
        merged.merge(set);
        inputs += 1;
    }

    debug!(inputs, fields = merged.len(), "merged field sets");
    merged
}
