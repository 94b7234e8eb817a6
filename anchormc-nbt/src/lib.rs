//! Typed read access to level NBT data.
//!
//! Level data files (`level.dat` / `level.dat_old`) are gzip-compressed NBT
//! compounds. We decode them into `fastnbt::Value` once and walk the tree
//! through the optional accessors below; nothing here ever mutates a tag.

use anyhow::{Context, Result};
use fastnbt::Value;
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads an NBT compound from a file, transparently decompressing gzip.
///
/// Level data is normally gzip-compressed, but tooling occasionally writes
/// plain NBT, so we sniff the magic bytes instead of trusting the extension.
pub fn read_nbt_file(path: &Path) -> Result<Value> {
    let mut raw = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut raw))
        .with_context(|| format!("Failed to read NBT file {}", path.display()))?;

    if raw.starts_with(&[0x1f, 0x8b]) {
        let mut decoded = Vec::new();
        GzDecoder::new(raw.as_slice())
            .read_to_end(&mut decoded)
            .with_context(|| format!("Failed to decompress {}", path.display()))?;
        raw = decoded;
    }

    fastnbt::from_bytes(&raw).with_context(|| format!("Failed to parse NBT in {}", path.display()))
}

/// Borrows the entries of a compound tag.
pub fn entries(tag: &Value) -> Option<&HashMap<String, Value>> {
    match tag {
        Value::Compound(map) => Some(map),
        _ => None,
    }
}

/// Looks up a direct child of a compound tag.
pub fn child<'a>(tag: &'a Value, key: &str) -> Option<&'a Value> {
    entries(tag)?.get(key)
}

/// Looks up a child that is itself a compound.
pub fn compound<'a>(tag: &'a Value, key: &str) -> Option<&'a Value> {
    child(tag, key).filter(|value| matches!(value, Value::Compound(_)))
}

/// Looks up a string child.
pub fn string<'a>(tag: &'a Value, key: &str) -> Option<&'a str> {
    match child(tag, key)? {
        Value::String(value) => Some(value),
        _ => None,
    }
}

/// Looks up a list child, preserving element order.
pub fn list<'a>(tag: &'a Value, key: &str) -> Option<&'a [Value]> {
    match child(tag, key)? {
        Value::List(values) => Some(values),
        _ => None,
    }
}

/// Coerces a scalar tag to a boolean.
///
/// NBT has no boolean type; flags are stored as bytes, but larger integer
/// widths and literal "true"/"false" strings show up in old files too.
pub fn as_boolean(tag: &Value) -> Option<bool> {
    match tag {
        Value::Byte(value) => Some(*value != 0),
        Value::Short(value) => Some(*value != 0),
        Value::Int(value) => Some(*value != 0),
        Value::Long(value) => Some(*value != 0),
        Value::String(value) => match value.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Coerces a scalar tag to an i64, widening smaller integer types.
pub fn as_long(tag: &Value) -> Option<i64> {
    match tag {
        Value::Byte(value) => Some(i64::from(*value)),
        Value::Short(value) => Some(i64::from(*value)),
        Value::Int(value) => Some(i64::from(*value)),
        Value::Long(value) => Some(*value),
        _ => None,
    }
}

/// Coerces a scalar tag to an i32. Longs are truncated.
pub fn as_int(tag: &Value) -> Option<i32> {
    match tag {
        Value::Byte(value) => Some(i32::from(*value)),
        Value::Short(value) => Some(i32::from(*value)),
        Value::Int(value) => Some(*value),
        Value::Long(value) => Some(*value as i32),
        _ => None,
    }
}

/// Boolean child lookup with coercion.
pub fn boolean(tag: &Value, key: &str) -> Option<bool> {
    child(tag, key).and_then(as_boolean)
}

/// i64 child lookup with coercion.
pub fn long(tag: &Value, key: &str) -> Option<i64> {
    child(tag, key).and_then(as_long)
}

/// i32 child lookup with coercion.
pub fn int(tag: &Value, key: &str) -> Option<i32> {
    child(tag, key).and_then(as_int)
}
