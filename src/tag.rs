//! Resolution of canonical field names from per-field annotations.
//!
//! Annotations use the conventional struct-tag grammar: space separated
//! `key:"value"` pairs, where the value is a quoted string that may contain
//! backslash escapes. The serialization name is the part of the value before
//! the first comma, so `json:"replicas,omitempty"` names the field `replicas`
//! and `json:",inline"` names it with the empty string.

use crate::constants::JSON_TAG_KEY;
use crate::path::FieldName;

/// Resolves a field name from an annotation using the default `json` key.
///
/// An empty annotation, a missing key, or a malformed annotation resolves to
/// the empty name. A value whose escapes cannot be expanded keeps its raw
/// text, so it never reads as the empty name.
///
/// # Example
///
/// ```
/// # use field_paths::tag::resolve_field_name;
/// #
/// assert_eq!(resolve_field_name(r#"json:"replicas,omitempty""#), "replicas");
/// assert_eq!(resolve_field_name(r#"json:",inline""#), "");
/// assert_eq!(resolve_field_name(r#"protobuf:"bytes,1""#), "");
/// ```
pub fn resolve_field_name(tag: &str) -> FieldName {
    TagResolver::default().resolve(tag)
}

/// Selects which annotation key carries a field's serialization name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagResolver {
    key: String,
}

impl TagResolver {
    /// Creates a resolver that reads the annotation stored under `key`.
    pub fn new<K>(key: K) -> Self
    where
        K: Into<String>,
    {
        TagResolver { key: key.into() }
    }

    /// The annotation key this resolver reads.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolves the canonical field name carried by `tag`.
    ///
    /// The result is a pure function of `tag` and the configured key.
    ///
    /// # Example
    ///
    /// ```
    /// # use field_paths::tag::TagResolver;
    /// #
    /// let resolver = TagResolver::new("yaml");
    /// let tag = r#"json:"image" yaml:"containerImage,omitempty""#;
    ///
    /// assert_eq!(resolver.resolve(tag), "containerImage");
    /// ```
    pub fn resolve(&self, tag: &str) -> FieldName {
        let value = lookup(tag, &self.key).unwrap_or_default();

        match value.find(',') {
            Some(end) => FieldName::from(&value[..end]),
            None => FieldName::from(value),
        }
    }
}

impl Default for TagResolver {
    fn default() -> Self {
        TagResolver::new(JSON_TAG_KEY)
    }
}

/// Returns the unquoted value stored under `key`, or `None` if the key is not
/// present before the first malformed pair.
fn lookup(tag: &str, key: &str) -> Option<String> {
    let mut rest = tag.as_bytes();

    loop {
        while let Some((&b' ', tail)) = rest.split_first() {
            rest = tail;
        }

        if rest.is_empty() {
            return None;
        }

        let name_len = rest
            .iter()
            .position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
            .unwrap_or(rest.len());

        if name_len == 0 || name_len + 1 >= rest.len() || rest[name_len] != b':' || rest[name_len + 1] != b'"' {
            return None;
        }

        let name = &rest[..name_len];
        rest = &rest[name_len + 1..];

        // Find the closing quote, stepping over escaped characters.
        let mut end = 1;
        while end < rest.len() && rest[end] != b'"' {
            if rest[end] == b'\\' {
                end += 1;
            }
            end += 1;
        }

        if end >= rest.len() {
            return None;
        }

        let quoted = &rest[..=end];
        rest = &rest[end + 1..];

        if name == key.as_bytes() {
            // An unreadable value still names the field, so keep its raw text
            // rather than collapsing to the empty name.
            return Some(unquote(quoted).unwrap_or_else(|| raw(quoted)));
        }
    }
}

/// The text between the quotes of `quoted`, escapes left as written.
fn raw(quoted: &[u8]) -> String {
    String::from_utf8_lossy(&quoted[1..quoted.len() - 1]).into_owned()
}

/// Strips the surrounding quotes from `quoted` and expands its escapes.
///
/// Accepts the escapes of a double-quoted Go string literal: `\a \b \f \n
/// \r \t \v \\ \"`, two-digit `\x` bytes, three-digit octal bytes, and
/// `\u`/`\U` code points. Returns `None` for any other escape, a code point
/// that is not a scalar value, or bytes that do not form UTF-8.
fn unquote(quoted: &[u8]) -> Option<String> {
    let mut rest = &quoted[1..quoted.len() - 1];
    let mut dest = Vec::with_capacity(rest.len());

    while let Some((&value, tail)) = rest.split_first() {
        rest = tail;

        match value {
            b'\\' => {
                let (&escape, tail) = rest.split_first()?;
                rest = tail;

                match escape {
                    b'a' => dest.push(0x07),
                    b'b' => dest.push(0x08),
                    b'f' => dest.push(0x0c),
                    b'n' => dest.push(b'\n'),
                    b'r' => dest.push(b'\r'),
                    b't' => dest.push(b'\t'),
                    b'v' => dest.push(0x0b),
                    b'\\' => dest.push(b'\\'),
                    b'"' => dest.push(b'"'),
                    b'x' => dest.push(digits(&mut rest, 2, 16)? as u8),
                    b'0'..=b'7' => {
                        let byte = u32::from(escape - b'0') * 64 + digits(&mut rest, 2, 8)?;
                        if byte > 0xff {
                            return None;
                        }
                        dest.push(byte as u8);
                    }
                    b'u' | b'U' => {
                        let count = if escape == b'u' { 4 } else { 8 };
                        let ch = std::char::from_u32(digits(&mut rest, count, 16)?)?;
                        let mut buf = [0; 4];
                        dest.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                    }
                    _ => return None,
                }
            }
            b'\n' => return None,
            _ => dest.push(value),
        }
    }

    String::from_utf8(dest).ok()
}

/// Consumes exactly `count` digits in `radix` from the front of `rest`.
fn digits(rest: &mut &[u8], count: usize, radix: u32) -> Option<u32> {
    if rest.len() < count {
        return None;
    }

    let (head, tail) = rest.split_at(count);
    let value = head
        .iter()
        .try_fold(0u32, |acc, &b| char::from(b).to_digit(radix).map(|d| acc * radix + d))?;

    *rest = tail;
    Some(value)
}
