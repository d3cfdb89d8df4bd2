use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::type_name;

use crate::error::CodecError;
use crate::models::{Mappings, Template};

/// Top-level shape of a document handed to [`canonicalize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// A full `_template` body.
    #[default]
    Template,
    /// A bare `mappings` object keyed by type name.
    Mappings,
}

impl DocumentKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "template" => Some(Self::Template),
            "mappings" => Some(Self::Mappings),
            _ => None,
        }
    }
}

pub fn encode<T: Serialize>(value: &T) -> Result<String, CodecError> {
    encode_as(value, short_name::<T>())
}

fn encode_as<T: Serialize>(value: &T, target: &'static str) -> Result<String, CodecError> {
    let out = serde_json::to_string(value).map_err(|e| CodecError::encode(target, e))?;
    tracing::debug!("Encoded {target} ({} bytes)", out.len());
    Ok(out)
}

pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String, CodecError> {
    encode_pretty_as(value, short_name::<T>())
}

fn encode_pretty_as<T: Serialize>(value: &T, target: &'static str) -> Result<String, CodecError> {
    let out = serde_json::to_string_pretty(value).map_err(|e| CodecError::encode(target, e))?;
    tracing::debug!("Encoded {target} ({} bytes, pretty)", out.len());
    Ok(out)
}

pub fn encode_value<T: Serialize>(value: &T) -> Result<Value, CodecError> {
    serde_json::to_value(value).map_err(|e| CodecError::encode(short_name::<T>(), e))
}

pub fn decode<T: DeserializeOwned>(input: &str) -> Result<T, CodecError> {
    decode_slice(input.as_bytes())
}

pub fn decode_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T, CodecError> {
    decode_as(input, short_name::<T>())
}

fn decode_as<T: DeserializeOwned>(input: &[u8], target: &'static str) -> Result<T, CodecError> {
    match serde_json::from_slice(input) {
        Ok(value) => {
            tracing::debug!("Decoded {target} ({} bytes)", input.len());
            Ok(value)
        }
        Err(e) => {
            tracing::warn!("Failed to decode {target}: {e}");
            Err(CodecError::decode(target, e))
        }
    }
}

pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, CodecError> {
    let target = short_name::<T>();
    serde_json::from_value(value).map_err(|e| {
        tracing::warn!("Failed to decode {target}: {e}");
        CodecError::decode(target, e)
    })
}

pub fn encode_template(template: &Template) -> Result<String, CodecError> {
    encode(template)
}

pub fn decode_template(input: &str) -> Result<Template, CodecError> {
    decode(input)
}

pub fn encode_mappings(mappings: &Mappings) -> Result<String, CodecError> {
    encode_as(mappings, MAPPINGS)
}

pub fn decode_mappings(input: &str) -> Result<Mappings, CodecError> {
    decode_as(input.as_bytes(), MAPPINGS)
}

const MAPPINGS: &str = "Mappings";

/// Decode `input` as `kind` and encode it back: keys sorted, unknown keys and
/// unset attributes dropped. Dropped keys are reported with `warn!`.
pub fn canonicalize(input: &str, kind: DocumentKind, pretty: bool) -> Result<String, CodecError> {
    match kind {
        DocumentKind::Template => {
            let template: Template = decode_as(input.as_bytes(), "Template")?;
            reencode(input, &template, "Template", pretty)
        }
        DocumentKind::Mappings => {
            let mappings: Mappings = decode_as(input.as_bytes(), MAPPINGS)?;
            reencode(input, &mappings, MAPPINGS, pretty)
        }
    }
}

fn reencode<T: Serialize>(
    input: &str,
    value: &T,
    target: &'static str,
    pretty: bool,
) -> Result<String, CodecError> {
    let before: Value = decode_as(input.as_bytes(), target)?;
    let after = serde_json::to_value(value).map_err(|e| CodecError::encode(target, e))?;
    let dropped = dropped_keys(&before, &after);
    if dropped > 0 {
        tracing::warn!("Dropped {dropped} unrecognized or null key(s) from {target}");
    }

    if pretty {
        encode_pretty_as(value, target)
    } else {
        encode_as(value, target)
    }
}

/// Object keys present in `before` but missing at the same path in `after`,
/// counting everything beneath a missing key.
fn dropped_keys(before: &Value, after: &Value) -> usize {
    match (before, after) {
        (Value::Object(old), Value::Object(new)) => old
            .iter()
            .map(|(key, value)| match new.get(key) {
                Some(kept) => dropped_keys(value, kept),
                None => 1 + nested_keys(value),
            })
            .sum(),
        (Value::Array(old), Value::Array(new)) => old
            .iter()
            .zip(new)
            .map(|(value, kept)| dropped_keys(value, kept))
            .sum(),
        _ => 0,
    }
}

fn nested_keys(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(|v| 1 + nested_keys(v)).sum(),
        Value::Array(items) => items.iter().map(nested_keys).sum(),
        _ => 0,
    }
}

/// Type name without its leading module path, for log lines and errors.
fn short_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
