// Rust guideline compliant 2026-10-12

//! The recursive response node.
//!
//! The root node is the envelope returned to a caller. Every error and info
//! record is itself a [`ResponseNode`], so records can carry nested errors and
//! info of their own.

use crate::entry::{Entry, EntryKind};
use crate::error::Result;
use crate::preset::Preset;
use crate::resolve::{resolve, Resolution};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status assigned to error records registered without one.
pub const DEFAULT_ERROR_STATUS: u16 = 500;

/// Aggregate status of a node without error children.
pub const DEFAULT_SUCCESS_STATUS: u16 = 200;

/// Lowest status treated as set on an error record.
const MIN_ERROR_STATUS: u16 = 100;

/// How the inserter looks for an existing sibling before appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    /// Match on a non-empty code first, then on a non-empty description.
    #[default]
    CodeThenDescription,
    /// Match on a non-empty description only.
    DescriptionOnly,
}

impl DedupPolicy {
    fn checks_code(self) -> bool {
        matches!(self, DedupPolicy::CodeThenDescription)
    }
}

/// A response envelope, or one record inside it.
///
/// Serializes to the wire shape with keys in the order `status`, `code`,
/// `desc`, `data`, `errors`, `info`, `result`; unset fields and empty lists
/// are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ResponseNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    info: Vec<ResponseNode>,
    #[serde(default, skip_serializing_if = "is_unset")]
    result: Option<Value>,
}

fn is_unset(result: &Option<Value>) -> bool {
    result.as_ref().map_or(true, Value::is_null)
}

impl ResponseNode {
    /// Creates an empty envelope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an envelope seeded with a result.
    #[must_use]
    pub fn with_result(result: impl Into<Value>) -> Self {
        Self {
            result: Some(result.into()),
            ..Self::default()
        }
    }

    fn from_entry(entry: Entry) -> Self {
        Self {
            status: entry.status,
            code: entry.code,
            description: entry.description,
            metadata: entry.metadata,
            ..Self::default()
        }
    }

    /// Returns the record's own status.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the record's code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the record's description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the record's metadata.
    pub fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }

    /// Returns the error children in insertion order.
    pub fn errors(&self) -> &[ResponseNode] {
        &self.errors
    }

    /// Returns the info children in insertion order.
    pub fn info(&self) -> &[ResponseNode] {
        &self.info
    }

    /// Returns the result payload.
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    /// Replaces the result payload.
    pub fn set_result(&mut self, result: impl Into<Value>) -> &mut Self {
        self.result = Some(result.into());
        self
    }

    /// Alias of [`ResponseNode::set_result`].
    pub fn results(&mut self, result: impl Into<Value>) -> &mut Self {
        self.set_result(result)
    }

    /// Serializes `result` and stores it as the result payload.
    ///
    /// # Errors
    ///
    /// Returns an error if `result` cannot be represented as JSON.
    pub fn set_result_serialized<T: Serialize>(
        &mut self,
        result: &T,
    ) -> std::result::Result<&mut Self, serde_json::Error> {
        self.result = Some(serde_json::to_value(result)?);
        Ok(self)
    }

    /// Returns true when at least one error child exists.
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns true when at least one info child exists.
    pub fn has_info(&self) -> bool {
        !self.info.is_empty()
    }

    /// Returns true when a non-null result is set.
    pub fn has_result(&self) -> bool {
        self.result.as_ref().is_some_and(|result| !result.is_null())
    }

    /// Returns true when the node carries no errors, no info and no result.
    pub fn is_empty(&self) -> bool {
        !self.has_error() && !self.has_info() && !self.has_result()
    }

    /// Returns the highest status among the immediate error children.
    ///
    /// Grandchildren and info children are not consulted.
    pub fn status_code(&self) -> u16 {
        self.errors
            .iter()
            .map(|error| error.status.unwrap_or(DEFAULT_ERROR_STATUS))
            .max()
            .unwrap_or(DEFAULT_SUCCESS_STATUS)
    }

    /// Appends an error child unless a sibling already matches.
    ///
    /// # Arguments
    ///
    /// * `entry` - Normalized tuple; a missing status, or one below 100,
    ///   becomes 500
    /// * `policy` - Sibling matching rule
    ///
    /// # Returns
    ///
    /// The new child, or the existing sibling when the entry is a duplicate.
    pub fn insert_error(&mut self, mut entry: Entry, policy: DedupPolicy) -> &mut ResponseNode {
        entry.status = entry
            .status
            .filter(|status| *status >= MIN_ERROR_STATUS)
            .or(Some(DEFAULT_ERROR_STATUS));
        insert(&mut self.errors, EntryKind::Error, entry, policy)
    }

    /// Appends an info child unless a sibling already matches.
    ///
    /// # Returns
    ///
    /// The new child, or the existing sibling when the entry is a duplicate.
    pub fn insert_info(&mut self, entry: Entry, policy: DedupPolicy) -> &mut ResponseNode {
        insert(&mut self.info, EntryKind::Info, entry, policy)
    }

    /// Registers an error.
    ///
    /// Accepts any shape convertible into an [`Entry`].
    ///
    /// ```
    /// use replykit_core::ResponseNode;
    ///
    /// let mut response = ResponseNode::new();
    /// response.error((400, "Bad Request", "an error description"));
    /// assert_eq!(response.status_code(), 400);
    /// ```
    pub fn error(&mut self, entry: impl Into<Entry>) -> &mut ResponseNode {
        self.insert_error(entry.into(), DedupPolicy::default())
    }

    /// Registers an info record.
    pub fn information(&mut self, entry: impl Into<Entry>) -> &mut ResponseNode {
        self.insert_info(entry.into(), DedupPolicy::default())
    }

    /// Registers each entry as a separate error, in order.
    pub fn error_batch<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        for entry in entries {
            self.error(entry);
        }
        self
    }

    /// Registers each entry as a separate info record, in order.
    pub fn information_batch<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        for entry in entries {
            self.information(entry);
        }
        self
    }

    /// Registers an error from a runtime argument list.
    ///
    /// # Returns
    ///
    /// The registered child for a single entry; `None` for a batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be resolved. Nothing is
    /// registered in that case.
    pub fn try_error(&mut self, args: &[Value]) -> Result<Option<&mut ResponseNode>> {
        let resolution = resolve(EntryKind::Error, args)?;
        Ok(self.apply(EntryKind::Error, resolution))
    }

    /// Registers info from a runtime argument list.
    ///
    /// # Returns
    ///
    /// The registered child for a single entry; `None` for a batch or an
    /// empty argument list.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be resolved. Nothing is
    /// registered in that case.
    pub fn try_information(&mut self, args: &[Value]) -> Result<Option<&mut ResponseNode>> {
        let resolution = resolve(EntryKind::Info, args)?;
        Ok(self.apply(EntryKind::Info, resolution))
    }

    fn apply(&mut self, kind: EntryKind, resolution: Resolution) -> Option<&mut ResponseNode> {
        let policy = DedupPolicy::default();
        match resolution {
            Resolution::Empty => None,
            Resolution::Single(entry) => Some(match kind {
                EntryKind::Error => self.insert_error(entry, policy),
                EntryKind::Info => self.insert_info(entry, policy),
            }),
            Resolution::Batch(entries) => {
                for entry in entries {
                    match kind {
                        EntryKind::Error => self.insert_error(entry, policy),
                        EntryKind::Info => self.insert_info(entry, policy),
                    };
                }
                None
            }
        }
    }

    /// Registers a preset error.
    ///
    /// Code dedup is skipped, so presets with different descriptions are
    /// kept as separate entries while identical descriptions collapse.
    pub fn error_preset(
        &mut self,
        preset: Preset,
        description: Option<&str>,
        metadata: Option<Value>,
    ) -> &mut ResponseNode {
        self.insert_error(
            preset.entry(description, metadata),
            DedupPolicy::DescriptionOnly,
        )
    }

    /// Registers a 400 Bad Request error.
    pub fn error_bad_request<'a>(
        &mut self,
        description: impl Into<Option<&'a str>>,
    ) -> &mut ResponseNode {
        self.error_preset(Preset::BadRequest, description.into(), None)
    }

    /// Registers a 403 Forbidden error.
    pub fn error_forbidden<'a>(
        &mut self,
        description: impl Into<Option<&'a str>>,
    ) -> &mut ResponseNode {
        self.error_preset(Preset::Forbidden, description.into(), None)
    }

    /// Registers a 404 Not Found error.
    pub fn error_not_found<'a>(
        &mut self,
        description: impl Into<Option<&'a str>>,
    ) -> &mut ResponseNode {
        self.error_preset(Preset::NotFound, description.into(), None)
    }

    /// Registers a 405 Method Not Allowed error.
    pub fn error_method_not_allowed<'a>(
        &mut self,
        description: impl Into<Option<&'a str>>,
    ) -> &mut ResponseNode {
        self.error_preset(Preset::MethodNotAllowed, description.into(), None)
    }

    /// Registers a 425 Too Early error.
    pub fn error_too_early<'a>(
        &mut self,
        description: impl Into<Option<&'a str>>,
    ) -> &mut ResponseNode {
        self.error_preset(Preset::TooEarly, description.into(), None)
    }

    /// Registers a 500 Internal Server Error.
    pub fn error_internal_server_error<'a>(
        &mut self,
        description: impl Into<Option<&'a str>>,
    ) -> &mut ResponseNode {
        self.error_preset(Preset::InternalServerError, description.into(), None)
    }

    /// Registers a 504 Gateway Timeout error.
    pub fn error_gateway_timeout<'a>(
        &mut self,
        description: impl Into<Option<&'a str>>,
    ) -> &mut ResponseNode {
        self.error_preset(Preset::GatewayTimeout, description.into(), None)
    }

    /// Returns the envelope as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if a result or metadata value fails to serialize.
    pub fn to_value(&self) -> std::result::Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Returns the compact JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if a result or metadata value fails to serialize.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Returns the pretty-printed JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if a result or metadata value fails to serialize.
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses an envelope from its JSON wire form.
    ///
    /// The parsed tree is taken as-is; dedup is only enforced on insertion.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid envelope.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn insert(
    siblings: &mut Vec<ResponseNode>,
    kind: EntryKind,
    entry: Entry,
    policy: DedupPolicy,
) -> &mut ResponseNode {
    let by_code = entry
        .dedup_code()
        .filter(|_| policy.checks_code())
        .and_then(|code| {
            siblings
                .iter()
                .position(|sibling| sibling.code.as_deref() == Some(code))
        });
    let existing = by_code.or_else(|| {
        entry.dedup_description().and_then(|description| {
            siblings
                .iter()
                .position(|sibling| sibling.description.as_deref() == Some(description))
        })
    });

    let index = match existing {
        Some(index) => {
            tracing::trace!(
                %kind,
                code = entry.code.as_deref(),
                description = entry.description.as_deref(),
                "suppressed duplicate entry"
            );
            index
        }
        None => {
            siblings.push(ResponseNode::from_entry(entry));
            siblings.len() - 1
        }
    };
    &mut siblings[index]
}
