//! Canonical identities for field locations inside nested record types.
//!
//! A [`FieldPath`] names one location reachable through a chain of nested
//! records and repeated elements, such as `root.spec.containers[*].image`. A
//! [`FieldSet`] collects unique paths and merges results computed by
//! independent traversals.
//!
//! [`FieldPath`]: path/struct.FieldPath.html
//! [`FieldSet`]: set/struct.FieldSet.html

extern crate ordermap;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate serde_path_to_error;
extern crate thiserror;
extern crate tracing;

pub mod collections;
pub mod constants;
pub mod error;
pub mod path;
pub mod schema;
pub mod set;
pub mod tag;

#[doc(inline)]
pub use error::{FieldPathError, SchemaError};
#[doc(inline)]
pub use path::{FieldName, FieldPath, Segment};
pub use schema::{FieldDef, FieldType, Record, RecordSchema};
#[doc(inline)]
pub use set::{merge_field_sets, FieldSet, WellKnown};
pub use tag::{resolve_field_name, TagResolver};
