//! Field names, segments, and the paths built from them.

mod name;
mod segment;

use std::fmt::{self, Display, Formatter};

use tracing::trace;

use crate::constants::{ROOT, SEGMENT_SEPARATOR};
use crate::error::FieldPathError;
use crate::schema::RecordSchema;
use crate::tag::TagResolver;

pub use self::name::FieldName;
pub use self::segment::Segment;

/// Identifies one location reachable inside a nested record structure.
///
/// A path is the root-to-leaf sequence of [`Segment`]s walked to reach the
/// location. Two paths are equal when they have the same length and equal
/// segments at every position. Nothing is normalized or reordered.
///
/// Paths are never empty: every path starts from a root segment, and each
/// step of a traversal derives a new path from its parent, leaving the
/// parent untouched.
///
/// # Example
///
/// ```
/// # use field_paths::path::FieldPath;
/// #
/// let spec = FieldPath::root().join("spec");
/// let replicas = spec.join("replicas");
/// let items = spec.join("items").index();
///
/// assert_eq!(spec.to_string(), "root.spec");
/// assert_eq!(replicas, FieldPath::root().join("spec").join("replicas"));
/// assert_eq!(items.to_string(), "root.spec.items[*]");
/// ```
///
/// [`Segment`]: enum.Segment.html
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Creates a single-segment path starting from a caller-chosen root name.
    pub fn new<N>(root: N) -> Self
    where
        N: Into<FieldName>,
    {
        FieldPath {
            segments: vec![Segment::Field(root.into())],
        }
    }

    /// Creates the conventional root path, `root`.
    pub fn root() -> Self {
        FieldPath::new(ROOT)
    }

    /// Returns a new path that enters the field called `name`.
    pub fn join<N>(&self, name: N) -> Self
    where
        N: Into<FieldName>,
    {
        self.push(Segment::Field(name.into()))
    }

    /// Returns a new path that enters any element of the repeated field
    /// located at `self`.
    ///
    /// # Example
    ///
    /// ```
    /// # use field_paths::path::{FieldPath, Segment};
    /// #
    /// let items = FieldPath::root().join("items");
    /// let element = items.index();
    ///
    /// assert_eq!(element.segments().last(), Some(&Segment::Index));
    /// assert_eq!(element, items.index());
    /// assert_eq!(items.depth(), 2);
    /// ```
    pub fn index(&self) -> Self {
        self.push(Segment::Index)
    }

    /// Returns a new path that enters the field declared at `index` in
    /// `record`, named by the field's `json` annotation.
    ///
    /// # Errors
    ///
    /// Fails with [`FieldPathError::InvalidFieldIndex`] when `record` does not
    /// declare a field at `index`.
    ///
    /// [`FieldPathError::InvalidFieldIndex`]: ../error/enum.FieldPathError.html
    pub fn child<R>(&self, record: &R, index: usize) -> Result<Self, FieldPathError>
    where
        R: RecordSchema + ?Sized,
    {
        self.child_with(record, index, &TagResolver::default())
    }

    /// Like [`child`], resolving the field name with `resolver`.
    ///
    /// [`child`]: #method.child
    pub fn child_with<R>(
        &self,
        record: &R,
        index: usize,
        resolver: &TagResolver,
    ) -> Result<Self, FieldPathError>
    where
        R: RecordSchema + ?Sized,
    {
        let count = record.field_count();

        if index >= count {
            trace!(
                path = %self,
                record = record.name(),
                index,
                count,
                "field index out of range"
            );
            return Err(FieldPathError::InvalidFieldIndex {
                record: record.name().to_owned(),
                index,
                count,
            });
        }

        let name = resolver.resolve(record.field_tag(index).unwrap_or_default());
        Ok(self.join(name))
    }

    /// The segments of the path in root-to-leaf order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments, the root included. Always at least one.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if `prefix` is `self` or one of its ancestors.
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    fn push(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);

        segments.extend_from_slice(&self.segments);
        segments.push(segment);

        FieldPath { segments }
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 && !segment.is_index() {
                f.write_str(SEGMENT_SEPARATOR)?;
            }

            Display::fmt(segment, f)?;
        }

        Ok(())
    }
}
