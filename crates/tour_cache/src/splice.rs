//! Pre-serialized value splicing.
//!
//! An "all lessons" response is a JSON object mapping each lesson id to that
//! lesson's JSON. Every lesson is already stored as encoded JSON, so instead
//! of decoding the whole corpus into values and encoding it again, the object
//! is assembled byte by byte:
//!
//! ```text
//! {"basics":<basics bytes>,"methods":<methods bytes>}
//! ```
//!
//! Only the keys are encoded here. Each value must be one complete JSON
//! value on its own; it is copied without inspection.

use std::io::{self, Write};

/// Encodes a key as a JSON string literal, quotes included.
fn json_key(key: &str) -> String {
    serde_json::Value::from(key).to_string()
}

/// Returns the exact length of the spliced object for `entries`.
fn spliced_len<'a>(entries: impl Iterator<Item = (&'a str, &'a [u8])>) -> usize {
    let mut len = 2;
    let mut count = 0usize;
    for (key, value) in entries {
        len += json_key(key).len() + 1 + value.len();
        count += 1;
    }
    len + count.saturating_sub(1)
}

/// Builds a JSON object from keys and pre-encoded JSON values.
///
/// No entries give `{}`. Entries are emitted in iteration order, separated
/// by commas with none after the last.
pub fn splice_object<'a, I>(entries: I) -> Vec<u8>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
    I::IntoIter: Clone,
{
    let entries = entries.into_iter();
    let mut out = Vec::with_capacity(spliced_len(entries.clone()));
    out.push(b'{');
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            out.push(b',');
        }
        out.extend_from_slice(json_key(key).as_bytes());
        out.push(b':');
        out.extend_from_slice(value);
    }
    out.push(b'}');
    out
}

/// Streams the same object as [`splice_object`] into a writer.
pub fn write_spliced_object<'a, W, I>(w: &mut W, entries: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    w.write_all(b"{")?;
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        w.write_all(json_key(key).as_bytes())?;
        w.write_all(b":")?;
        w.write_all(value)?;
    }
    w.write_all(b"}")
}
