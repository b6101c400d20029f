// Rust guideline compliant 2026-10-12

//! Argument resolution for JSON-shaped registration calls.
//!
//! The typed `From` impls on [`Entry`] cover the call shapes known at compile
//! time. This module applies the same rules to argument lists that only exist
//! at runtime, such as values decoded from a request or a script.

use crate::entry::{Entry, EntryKind};
use crate::error::{ArgumentError, Result};
use serde_json::{Map, Value};

/// The outcome of resolving one argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Nothing to register.
    Empty,
    /// One entry.
    Single(Entry),
    /// Independent entries, registered in order.
    Batch(Vec<Entry>),
}

/// Resolves an argument list into one entry or a batch of entries.
///
/// # Arguments
///
/// * `kind` - Registration kind; only affects the zero-argument case
/// * `args` - Positional arguments
///
/// # Returns
///
/// The normalized resolution.
///
/// # Errors
///
/// Returns an error if:
/// - `args` is empty and `kind` is [`EntryKind::Error`]
/// - A third string cannot be assigned to code or description
/// - A second object appears alongside non-object arguments
/// - An argument is null, boolean, fractional, or an out-of-range status
/// - An options record field has the wrong type
pub fn resolve(kind: EntryKind, args: &[Value]) -> Result<Resolution> {
    match args {
        [] => match kind {
            EntryKind::Error => Err(ArgumentError::Empty { kind }),
            EntryKind::Info => Ok(Resolution::Empty),
        },
        [single] => resolve_single(kind, 0, single),
        _ => resolve_many(kind, args),
    }
}

fn resolve_single(kind: EntryKind, position: usize, arg: &Value) -> Result<Resolution> {
    match arg {
        Value::String(text) => Ok(Resolution::Single(Entry::from(text.as_str()))),
        Value::Object(record) => options_record(kind, position, record).map(Resolution::Single),
        Value::Number(_) => {
            let status = status_argument(kind, position, arg)?;
            Ok(Resolution::Single(Entry::new().status(status)))
        }
        Value::Array(items) => {
            let mut batch = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match resolve_single(kind, index, item)? {
                    Resolution::Single(entry) => batch.push(entry),
                    Resolution::Batch(entries) => batch.extend(entries),
                    Resolution::Empty => {}
                }
            }
            Ok(Resolution::Batch(batch))
        }
        Value::Null | Value::Bool(_) => Err(unsupported(kind, position, arg)),
    }
}

fn resolve_many(kind: EntryKind, args: &[Value]) -> Result<Resolution> {
    // Only objects: every argument is its own options record.
    if args.iter().all(Value::is_object) {
        let mut batch = Vec::with_capacity(args.len());
        for (position, arg) in args.iter().enumerate() {
            if let Value::Object(record) = arg {
                batch.push(options_record(kind, position, record)?);
            }
        }
        return Ok(Resolution::Batch(batch));
    }

    let code_first = args.iter().filter(|arg| arg.is_string()).count() == 2;
    let mut entry = Entry::new();

    for (position, arg) in args.iter().enumerate() {
        match arg {
            Value::Number(_) => {
                entry.status = Some(status_argument(kind, position, arg)?);
            }
            Value::String(text) => {
                let (first, second) = if code_first {
                    (&mut entry.code, &mut entry.description)
                } else {
                    (&mut entry.description, &mut entry.code)
                };
                if first.is_none() {
                    *first = Some(text.clone());
                } else if second.is_none() {
                    *second = Some(text.clone());
                } else {
                    return Err(ArgumentError::ExtraString {
                        kind,
                        position,
                        value: text.clone(),
                    });
                }
            }
            Value::Object(_) => {
                if entry.metadata.is_some() {
                    return Err(ArgumentError::ExtraRecord {
                        kind,
                        position,
                        value: arg.to_string(),
                    });
                }
                entry.metadata = Some(arg.clone());
            }
            Value::Array(_) | Value::Null | Value::Bool(_) => {
                return Err(unsupported(kind, position, arg));
            }
        }
    }

    Ok(Resolution::Single(entry))
}

/// Reads `status`, `code`, `description` and `metadata` by name.
///
/// Missing and null fields are absent; unknown keys are ignored.
fn options_record(kind: EntryKind, position: usize, record: &Map<String, Value>) -> Result<Entry> {
    let invalid = |field: &'static str, value: &Value| ArgumentError::InvalidField {
        kind,
        position,
        field,
        value: value.to_string(),
    };

    let mut entry = Entry::new();

    match record.get("status") {
        None | Some(Value::Null) => {}
        Some(value) => {
            let status = value
                .as_u64()
                .and_then(|status| u16::try_from(status).ok())
                .filter(|status| is_http_status(*status))
                .ok_or_else(|| invalid("status", value))?;
            entry.status = Some(status);
        }
    }

    match record.get("code") {
        None | Some(Value::Null) => {}
        Some(Value::String(code)) => entry.code = Some(code.clone()),
        Some(value) => return Err(invalid("code", value)),
    }

    match record.get("description") {
        None | Some(Value::Null) => {}
        Some(Value::String(description)) => entry.description = Some(description.clone()),
        Some(value) => return Err(invalid("description", value)),
    }

    match record.get("metadata") {
        None | Some(Value::Null) => {}
        Some(value) => entry.metadata = Some(value.clone()),
    }

    Ok(entry)
}

fn status_argument(kind: EntryKind, position: usize, arg: &Value) -> Result<u16> {
    if arg.is_f64() {
        return Err(unsupported(kind, position, arg));
    }
    arg.as_u64()
        .and_then(|status| u16::try_from(status).ok())
        .filter(|status| is_http_status(*status))
        .ok_or_else(|| ArgumentError::InvalidStatus {
            kind,
            position,
            value: arg.to_string(),
        })
}

fn unsupported(kind: EntryKind, position: usize, arg: &Value) -> ArgumentError {
    ArgumentError::Unsupported {
        kind,
        position,
        value: arg.to_string(),
    }
}

const fn is_http_status(status: u16) -> bool {
    status >= 100 && status <= 999
}
