//! Typed reply decoding
//!
//! Every server reply passes through one of these decoders before the crate
//! acts on it. A reply whose shape does not match the expected form fails with
//! `Error::Protocol` instead of being coerced.

use crate::{Error, Result};
use redis::Value;

/// Extract the text payload of a scalar reply.
///
/// Accepts the reply shapes servers use for text: bulk strings (RESP2),
/// simple strings, and verbatim strings (RESP3).
pub fn text(value: Value) -> Result<String> {
    match value {
        Value::BulkString(bytes) => String::from_utf8(bytes)
            .map_err(|e| Error::Protocol(format!("reply is not valid UTF-8: {}", e))),
        Value::SimpleString(s) => Ok(s),
        Value::VerbatimString { text, .. } => Ok(text),
        other => Err(Error::Protocol(format!(
            "expected a text reply, got {:?}",
            other
        ))),
    }
}

/// Decode an array-of-strings reply, preserving server order.
///
/// A nil reply decodes as an empty list; servers answer an empty listing
/// either way.
pub fn string_list(value: Value) -> Result<Vec<String>> {
    match value {
        Value::Nil => Ok(Vec::new()),
        Value::Array(items) => items.into_iter().map(text).collect(),
        other => Err(Error::Protocol(format!(
            "expected an array of strings, got {:?}",
            other
        ))),
    }
}

/// Decode a `SENTINEL MASTERS` reply into the logical names of the reported
/// master groups, preserving server order.
///
/// Each entry is a field/value record: an alternating flat array under RESP2,
/// a map under RESP3. Both shapes are accepted; anything else is a protocol
/// error.
pub fn master_names(value: Value) -> Result<Vec<String>> {
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(Error::Protocol(format!(
                "expected an array of master entries, got {:?}",
                other
            )))
        }
    };

    entries
        .into_iter()
        .map(|entry| record_field(entry, super::commands::sentinel::FIELD_NAME))
        .collect()
}

/// Look up one field of a field/value record reply.
fn record_field(entry: Value, field: &str) -> Result<String> {
    match entry {
        Value::Array(items) => {
            if items.len() % 2 != 0 {
                return Err(Error::Protocol(
                    "field/value record has an odd number of elements".into(),
                ));
            }
            let mut items = items.into_iter();
            while let (Some(key), Some(val)) = (items.next(), items.next()) {
                if text(key)? == field {
                    return text(val);
                }
            }
            Err(Error::Protocol(format!(
                "record is missing the {:?} field",
                field
            )))
        }
        Value::Map(pairs) => {
            for (key, val) in pairs {
                if text(key)? == field {
                    return text(val);
                }
            }
            Err(Error::Protocol(format!(
                "record is missing the {:?} field",
                field
            )))
        }
        other => Err(Error::Protocol(format!(
            "expected a field/value record, got {:?}",
            other
        ))),
    }
}

/// Decode a `GRAPH.CONFIG GET <key>` reply.
///
/// The server answers a `[name, value]` pair; numeric values are rendered in
/// decimal so the caller always receives a string.
pub fn config_value(value: Value) -> Result<String> {
    let mut items = match value {
        Value::Array(items) if items.len() == 2 => items.into_iter(),
        other => {
            return Err(Error::Protocol(format!(
                "expected a [name, value] configuration pair, got {:?}",
                other
            )))
        }
    };

    // Discard the echoed name, keep the value.
    let _name = items.next();
    match items.next() {
        Some(Value::Int(n)) => Ok(n.to_string()),
        Some(scalar) => text(scalar),
        None => Err(Error::Protocol("configuration pair truncated".into())),
    }
}

/// Require a simple `OK` acknowledgement.
pub fn ok(value: Value) -> Result<()> {
    match value {
        Value::Okay => Ok(()),
        Value::SimpleString(ref s) if s == "OK" => Ok(()),
        other => Err(Error::Protocol(format!(
            "expected an OK acknowledgement, got {:?}",
            other
        ))),
    }
}
