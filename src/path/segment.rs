use std::fmt::{self, Display, Formatter};

use crate::constants::INDEX_DISPLAY;
use crate::path::FieldName;

/// One element of a [`FieldPath`].
///
/// An any-element step is its own variant rather than a reserved name, so a
/// field that happens to be called `INDEX` never collides with it.
///
/// [`FieldPath`]: struct.FieldPath.html
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Segment {
    /// Entering the named field of a record.
    Field(FieldName),

    /// Entering any element of a repeated field. Which element is not
    /// recorded.
    Index,
}

impl Segment {
    /// Optionally get the field name. Returns `None` for an index segment.
    ///
    /// # Example
    ///
    /// ```
    /// # use field_paths::path::Segment;
    /// #
    /// assert_eq!(Segment::from("spec").as_field().map(|n| n.as_str()), Some("spec"));
    /// assert_eq!(Segment::Index.as_field(), None);
    /// ```
    pub fn as_field(&self) -> Option<&FieldName> {
        match *self {
            Segment::Field(ref name) => Some(name),
            Segment::Index => None,
        }
    }

    /// Returns `true` if the segment stands for any element of a repeated
    /// field.
    pub fn is_index(&self) -> bool {
        match *self {
            Segment::Field(_) => false,
            Segment::Index => true,
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Segment::Field(ref name) => Display::fmt(name, f),
            Segment::Index => f.write_str(INDEX_DISPLAY),
        }
    }
}

impl From<FieldName> for Segment {
    fn from(name: FieldName) -> Self {
        Segment::Field(name)
    }
}

impl From<String> for Segment {
    fn from(name: String) -> Self {
        Segment::Field(name.into())
    }
}

impl<'a> From<&'a str> for Segment {
    fn from(name: &'a str) -> Self {
        Segment::Field(name.into())
    }
}
