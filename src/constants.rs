//! Well-known literals shared by path construction and classification.

/// Name of the segment every path starts from, denoting the top-level record.
pub const ROOT: &str = "root";

/// Name of the metadata sub-record of a top-level object.
pub const METADATA: &str = "metadata";

/// Name of the status sub-record of a top-level object.
pub const STATUS: &str = "status";

/// Name carried by embedded type-identity fields. Their annotation resolves
/// to no name at all, e.g. `json:",inline"`.
pub const TYPE_META: &str = "";

/// Annotation key consulted by the default tag resolver.
pub const JSON_TAG_KEY: &str = "json";

/// How an any-element segment is rendered by `Display`.
pub const INDEX_DISPLAY: &str = "[*]";

/// Separator placed between named segments by `Display`.
pub const SEGMENT_SEPARATOR: &str = ".";
