use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// The canonical serialization name of a single field.
///
/// Names are kept exactly as resolved: no case conversion or trimming takes
/// place, and the empty name is valid. Embedded type-identity fields carry
/// no name of their own and resolve to it.
///
/// # Example
///
/// ```
/// # use field_paths::path::FieldName;
/// #
/// let name = FieldName::from("replicas");
/// assert_eq!(name, "replicas");
/// assert!(FieldName::from("").is_empty());
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldName(String);

impl FieldName {
    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for FieldName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self)
    }
}

impl From<String> for FieldName {
    fn from(value: String) -> Self {
        FieldName(value)
    }
}

impl<'a> From<&'a str> for FieldName {
    fn from(value: &'a str) -> Self {
        FieldName(value.to_owned())
    }
}

impl<'a> PartialEq<&'a str> for FieldName {
    fn eq(&self, rhs: &&str) -> bool {
        &**self == *rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_with_string_slices() {
        let name = FieldName::from(String::from("caf\u{e9}"));

        assert_eq!(name, "caf\u{e9}");
        assert_ne!(name, "cafe");
        assert_eq!(name.to_string(), "caf\u{e9}");
        assert_eq!(FieldName::default(), "");
    }
}
