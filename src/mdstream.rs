//! Metadata stream schemas this service attaches to ledgerd records.
//!
//! ledgerd treats metadata as opaque strings partitioned by stream id; the
//! schemas below are tally-www's own. The general stream holds one JSON
//! object describing the invoice. The status-change stream holds one JSON
//! object per administrator action, appended oldest first with no
//! separator and no wrapping array; decoding reads concatenated values.

use chrono::Utc;
use ledgerd_api::RecordStatus;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Stream 0: general invoice metadata, written once at submission.
pub const STREAM_GENERAL: u64 = 0;
/// Stream 2: status-change log, appended per administrator action. Stream
/// 1 held review comments in an earlier schema and stays retired.
pub const STREAM_STATUS_CHANGES: u64 = 2;

/// Schema version this service writes into the general stream.
pub const VERSION_INVOICE_METADATA: u64 = 1;
/// Schema version this service writes into status-change entries.
pub const VERSION_STATUS_CHANGE: u32 = 1;

/// Payload of the general stream: the invoice fields ledgerd has no
/// schema for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceMetadata {
    pub version: u64,
    /// Billing period.
    pub month: u16,
    pub year: u16,
    /// Submission time, unix seconds.
    pub timestamp: i64,
    /// Key that signed the submission.
    #[serde(rename = "publickey")]
    pub public_key: String,
    /// Client signature of the invoice file merkle root.
    pub signature: String,
}

impl InvoiceMetadata {
    /// Metadata for a fresh submission, stamped with the current time.
    pub fn new(month: u16, year: u16, public_key: String, signature: String) -> Self {
        Self {
            version: VERSION_INVOICE_METADATA,
            month,
            year,
            timestamp: Utc::now().timestamp(),
            public_key,
            signature,
        }
    }
}

/// One entry of the status-change stream.
///
/// `version` describes the entry that carried it and is preserved as read;
/// old entries keep their original version when newer schemas appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub version: u32,
    /// Key of the administrator who made the change.
    #[serde(rename = "adminpublickey")]
    pub admin_public_key: String,
    #[serde(rename = "newstatus")]
    pub new_status: RecordStatus,
    /// Change time, unix seconds.
    pub timestamp: i64,
}

impl StatusChange {
    /// A change entry stamped with the current time.
    pub fn new(admin_public_key: String, new_status: RecordStatus) -> Self {
        Self {
            version: VERSION_STATUS_CHANGE,
            admin_public_key,
            new_status,
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// Encode general-stream metadata as its JSON payload.
pub fn encode_invoice_metadata(md: &InvoiceMetadata) -> Result<String> {
    Ok(serde_json::to_string(md)?)
}

/// Decode a general-stream payload, validating the schema version.
///
/// # Errors
///
/// [`Error::Json`] when the payload is not the expected JSON shape, and
/// [`Error::UnsupportedMetadataVersion`] when it parses but carries a
/// version other than [`VERSION_INVOICE_METADATA`].
pub fn decode_invoice_metadata(payload: &str) -> Result<InvoiceMetadata> {
    let md: InvoiceMetadata = serde_json::from_str(payload)?;
    if md.version != VERSION_INVOICE_METADATA {
        return Err(Error::UnsupportedMetadataVersion {
            got: md.version,
            want: VERSION_INVOICE_METADATA,
        });
    }
    Ok(md)
}

/// Encode one status change as the JSON value appended to its stream.
pub fn encode_status_change(change: &StatusChange) -> Result<String> {
    Ok(serde_json::to_string(change)?)
}

/// Decode a status-change payload: concatenated JSON values, oldest first.
///
/// # Errors
///
/// [`Error::Json`] when any entry fails to parse. Entries before the
/// failure are discarded with it.
pub fn decode_status_changes(payload: &str) -> Result<Vec<StatusChange>> {
    let mut changes = Vec::new();
    for entry in serde_json::Deserializer::from_str(payload).into_iter::<StatusChange>() {
        changes.push(entry?);
    }
    Ok(changes)
}
