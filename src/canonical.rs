//! Canonical request bodies.
//!
//! The bytes produced here are the bytes that get signed and the bytes that go
//! on the wire. Nothing downstream may re-serialize them.
//!
//! Rules:
//! 1. Object members are ordered by key (byte-wise ascending).
//! 2. Object members whose value is `null` are dropped at every depth.
//!    `null` elements inside arrays are kept.
//! 3. Numbers keep `serde_json` formatting (shortest round-trip for floats).
//! 4. Output is compact UTF-8 JSON.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SdkError;

/// An immutable, canonicalized request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPayload(Vec<u8>);

impl CanonicalPayload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The body as text (always valid UTF-8).
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl AsRef<[u8]> for CanonicalPayload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for CanonicalPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonicalize any serializable request record.
pub fn canonicalize<T: Serialize + ?Sized>(payload: &T) -> Result<CanonicalPayload, SdkError> {
    let value = serde_json::to_value(payload).map_err(|e| SdkError::Encoding(e.to_string()))?;
    Ok(canonicalize_value(&value))
}

/// Canonicalize an already-built JSON tree.
pub fn canonicalize_value(value: &Value) -> CanonicalPayload {
    let mut out = Vec::with_capacity(256);
    write_value(value, &mut out);
    CanonicalPayload(out)
}

fn write_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Object(map) => write_object(map, out),
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(item, out);
            }
            out.push(b']');
        }
        // Scalars: serde_json's own formatting is already fixed.
        scalar => write_scalar(scalar, out),
    }
}

fn write_object(map: &Map<String, Value>, out: &mut Vec<u8>) {
    let mut members: Vec<(&String, &Value)> =
        map.iter().filter(|(_, v)| !v.is_null()).collect();
    members.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    out.push(b'{');
    for (i, (key, val)) in members.into_iter().enumerate() {
        if i > 0 {
            out.push(b',');
        }
        write_scalar(&Value::String(key.clone()), out);
        out.push(b':');
        write_value(val, out);
    }
    out.push(b'}');
}

fn write_scalar(value: &Value, out: &mut Vec<u8>) {
    // Writing a scalar Value into a Vec cannot fail.
    let _ = serde_json::to_writer(&mut *out, value);
}
