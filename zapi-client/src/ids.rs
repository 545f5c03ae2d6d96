//! Decoding of the `{<kind>ids: [...]}` replies shared by every mutating call
//!
//! Every `*.create`, `*.update` and `*.delete` procedure answers with a list
//! of affected ids under a kind-specific key (`hostids`, `groupids`,
//! `templateids`). A successful reply with an empty list is a contract
//! violation by the server; this is the one place the crate constructs an
//! error locally instead of propagating one. Read calls never come through here;
//! their empty list is a normal outcome.

use serde_json::Value;
use zapi_core::{Error, Result};

/// Decode the id list under `key`, failing on an empty or missing list
pub(crate) fn affected_ids(method: &str, key: &str, result: &Value) -> Result<Vec<String>> {
    let ids: Vec<String> = match result.get(key) {
        Some(list) => serde_json::from_value(list.clone())
            .map_err(|e| Error::Decode(format!("failed to decode {method} response: {e}")))?,
        None => Vec::new(),
    };

    if ids.is_empty() {
        return Err(Error::EmptyResult {
            method: method.to_string(),
        });
    }
    Ok(ids)
}

/// The first affected id, which is what the create operations return
pub(crate) fn first_id(method: &str, key: &str, result: &Value) -> Result<String> {
    affected_ids(method, key, result)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::EmptyResult {
            method: method.to_string(),
        })
}

/// Check that a mutating call affected something, discarding the ids
pub(crate) fn ensure_affected(method: &str, key: &str, result: &Value) -> Result<()> {
    affected_ids(method, key, result).map(|_| ())
}
