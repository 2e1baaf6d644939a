//! Record schemas that paths are derived from.
//!
//! Discovering the fields of a type belongs to whatever front end inspects
//! the type definitions. [`RecordSchema`] is the narrow view of a record that
//! path construction needs. [`Record`] is an in-memory implementation that can
//! be built by hand or loaded from a JSON description.
//!
//! [`RecordSchema`]: trait.RecordSchema.html
//! [`Record`]: struct.Record.html

use crate::error::SchemaError;

/// A record type whose declared fields can be enumerated by position.
///
/// Implementations must be deterministic: the same record and index always
/// yield the same annotation.
pub trait RecordSchema {
    /// Name of the record type, used in diagnostics.
    fn name(&self) -> &str;

    /// Number of declared fields.
    fn field_count(&self) -> usize;

    /// Raw serialization annotation of the field at `index`. `None` when the
    /// field carries no annotation or `index` is out of range.
    fn field_tag(&self, index: usize) -> Option<&str>;
}

impl<'a, R> RecordSchema for &'a R
where
    R: RecordSchema + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn field_count(&self) -> usize {
        (**self).field_count()
    }

    fn field_tag(&self, index: usize) -> Option<&str> {
        (**self).field_tag(index)
    }
}

/// A record type with an ordered list of declared fields.
///
/// # Example
///
/// ```
/// # use field_paths::schema::{FieldType, Record, RecordSchema};
/// #
/// # fn example() -> Result<(), field_paths::error::SchemaError> {
/// let record = Record::from_json_str(r#"{
///     "name": "Cluster",
///     "fields": [
///         { "name": "Spec", "tag": "json:\"spec\"", "ty": { "record": { "name": "ClusterSpec" } } },
///         { "name": "Nodes", "tag": "json:\"nodes\"", "ty": { "repeated": "scalar" } }
///     ]
/// }"#)?;
///
/// assert_eq!(record.field_count(), 2);
/// assert_eq!(record.field_tag(1), Some(r#"json:"nodes""#));
/// assert_eq!(record.fields[1].ty, FieldType::Repeated(Box::new(FieldType::Scalar)));
/// #
/// # Ok(())
/// # }
/// #
/// # fn main() {
/// # example().unwrap()
/// # }
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Record {
    /// Name of the record type.
    pub name: String,

    /// Declared fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// A single declared field of a [`Record`].
///
/// [`Record`]: struct.Record.html
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDef {
    /// Name of the field in the type definition. Paths never use it; they
    /// use the name resolved from `tag`.
    pub name: String,

    /// Raw serialization annotation. Empty when the field has none.
    #[serde(default)]
    pub tag: String,

    /// The type of value the field holds.
    pub ty: FieldType,
}

impl FieldDef {
    /// Creates a field definition.
    pub fn new<N, T>(name: N, tag: T, ty: FieldType) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        FieldDef {
            name: name.into(),
            tag: tag.into(),
            ty,
        }
    }
}

/// The shape of value held by a field.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// A leaf value with no fields of its own.
    Scalar,

    /// A nested record.
    Record(Record),

    /// A sequence whose elements all have the inner type.
    Repeated(Box<FieldType>),
}

impl FieldType {
    /// Optionally get the nested record. Returns `None` if the type is not a
    /// record.
    pub fn as_record(&self) -> Option<&Record> {
        match *self {
            FieldType::Record(ref inner) => Some(inner),
            _ => None,
        }
    }

    /// Optionally get the element type. Returns `None` if the type is not
    /// repeated.
    pub fn as_repeated(&self) -> Option<&FieldType> {
        match *self {
            FieldType::Repeated(ref inner) => Some(inner),
            _ => None,
        }
    }
}

impl Record {
    /// Creates a record with no fields.
    pub fn new<N>(name: N) -> Self
    where
        N: Into<String>,
    {
        Record {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field declaration, returning the record for chaining.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Parses a record from its JSON description.
    ///
    /// # Errors
    ///
    /// Fails with a [`SchemaError`] naming the location of the first invalid
    /// value. Input left over after the description fails with an empty
    /// location.
    ///
    /// [`SchemaError`]: ../error/struct.SchemaError.html
    pub fn from_json_str(source: &str) -> Result<Self, SchemaError> {
        let mut deserializer = serde_json::Deserializer::from_str(source);

        let record: Record = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            let path = e.path().to_string();
            SchemaError::new(path, e.into_inner())
        })?;

        deserializer
            .end()
            .map_err(|e| SchemaError::new(String::new(), e))?;

        Ok(record)
    }
}

impl RecordSchema for Record {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn field_tag(&self, index: usize) -> Option<&str> {
        self.fields
            .get(index)
            .map(|field| field.tag.as_str())
            .filter(|tag| !tag.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_schema_view() {
        let record = Record::new("Pod")
            .field(FieldDef::new("TypeMeta", r#"json:",inline""#, FieldType::Scalar))
            .field(FieldDef::new("Hidden", "", FieldType::Scalar));

        assert_eq!(record.name(), "Pod");
        assert_eq!(record.field_count(), 2);
        assert_eq!(record.field_tag(0), Some(r#"json:",inline""#));
        assert_eq!(record.field_tag(1), None);
        assert_eq!(record.field_tag(2), None);
    }

    #[test]
    fn parse_nested_description() {
        let record = Record::from_json_str(
            r#"{
                "name": "Pod",
                "fields": [
                    {
                        "name": "Spec",
                        "tag": "json:\"spec\"",
                        "ty": {
                            "record": {
                                "name": "PodSpec",
                                "fields": [
                                    { "name": "Containers", "ty": { "repeated": { "record": { "name": "Container" } } } }
                                ]
                            }
                        }
                    }
                ]
            }"#,
        )
        .unwrap();

        let spec = record.fields[0].ty.as_record().unwrap();
        let containers = spec.fields[0].ty.as_repeated().unwrap();

        assert_eq!(spec.name, "PodSpec");
        assert_eq!(spec.fields[0].tag, "");
        assert_eq!(containers.as_record().map(|r| r.name.as_str()), Some("Container"));
    }

    #[test]
    fn parse_error_reports_location() {
        let err = Record::from_json_str(
            r#"{ "name": "Pod", "fields": [ { "name": "Spec", "ty": "tuple" } ] }"#,
        )
        .unwrap_err();

        assert_eq!(err.path(), "fields[0].ty");
    }

    #[test]
    fn trailing_input_is_rejected() {
        let err = Record::from_json_str(r#"{"name":"Pod","fields":[]} this is not json"#).unwrap_err();
        assert_eq!(err.path(), "");

        assert!(Record::from_json_str(r#"{"name":"Pod"} junk"#).is_err());
        assert!(Record::from_json_str(r#"{"name":"Pod"} {"name":"Svc"}"#).is_err());
        assert!(Record::from_json_str("{\"name\":\"Pod\"}\n  ").is_ok());
    }

    #[test]
    fn round_trips_through_serde_json() {
        let record = Record::new("Service").field(FieldDef::new(
            "Ports",
            r#"json:"ports""#,
            FieldType::Repeated(Box::new(FieldType::Scalar)),
        ));

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(Record::from_json_str(&json).unwrap(), record);
    }
}
