//! Wire codec helpers for the string/integer asymmetry
//!
//! The Zabbix API returns numeric fields as JSON strings on read but expects
//! true JSON integers on write. Every entity kind with numeric fields handles
//! this with the same dual-shape technique:
//!
//! - a private `*Wire` struct (derived `Deserialize`, numeric fields as
//!   `String`) mirrors what actually arrives;
//! - a `TryFrom<*Wire>` conversion parses the strings through
//!   [`parse_wire_int`] into the public domain struct;
//! - encoding never serializes the domain struct blindly; an explicit keyed
//!   map emits integer literals and omits unassigned id fields.
//!
//! This module holds the shared parsing half; the per-entity shapes live next
//! to their entities in `zapi-client`.

/// Parse a wire numeric string into a domain integer
///
/// An empty string decodes to 0: the API does not distinguish "absent" from
/// "zero" on read, so neither can we. Anything else must be a valid integer;
/// the error names the field and the raw value.
///
/// # Examples
///
/// ```rust
/// use zapi_core::codec::parse_wire_int;
///
/// assert_eq!(parse_wire_int("status", "1"), Ok(1));
/// assert_eq!(parse_wire_int("status", ""), Ok(0));
/// assert_eq!(
///     parse_wire_int("status", "up"),
///     Err("invalid status value: up".to_string())
/// );
/// ```
pub fn parse_wire_int(field: &str, raw: &str) -> Result<i32, String> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse()
        .map_err(|_| format!("invalid {field} value: {raw}"))
}
