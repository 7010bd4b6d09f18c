//! Conversion between public API invoices and ledgerd records.
//!
//! Everything here is a pure translation: no signature checks, no I/O.
//! Transition legality stays with ledgerd. Conversions are total; inputs
//! the vocabularies do not cover collapse to each side's `Invalid`
//! sentinel, and recoverable decode problems degrade to zero values
//! surfaced through [`AnomalyReporter`] rather than failing the whole
//! record.

use std::collections::HashMap;

use ledgerd_api::{MetadataStream, Record, RecordStatus, METADATA_STREAMS_MAX};
use tally_api::{ErrorStatus, InvoiceRecord, InvoiceStatus};

use crate::anomaly::{Anomaly, AnomalyReporter};
use crate::inventory::InventoryRecord;
use crate::mdstream::{self, InvoiceMetadata, STREAM_GENERAL};

/// Name every invoice file carries inside ledgerd, whatever the client
/// called it locally.
pub const INVOICE_FILENAME: &str = "invoice.csv";

// ============================================================================
// Status translation
// ============================================================================

/// The status pairs that translate 1:1 between the public vocabulary and
/// ledgerd's. One table drives both directions; anything outside it
/// resolves to the respective `Invalid`.
const STATUS_PAIRS: [(InvoiceStatus, RecordStatus); 4] = [
    (InvoiceStatus::NotFound, RecordStatus::NotFound),
    (InvoiceStatus::NotReviewed, RecordStatus::NotReviewed),
    (InvoiceStatus::Rejected, RecordStatus::Censored),
    (InvoiceStatus::Approved, RecordStatus::Public),
];

/// Translate a public invoice status into ledgerd's vocabulary.
///
/// Total: statuses with no ledgerd counterpart become
/// [`RecordStatus::Invalid`].
pub fn to_record_status(status: InvoiceStatus) -> RecordStatus {
    STATUS_PAIRS
        .iter()
        .find(|(invoice, _)| *invoice == status)
        .map(|(_, record)| *record)
        .unwrap_or(RecordStatus::Invalid)
}

/// Translate a ledgerd record status into the public vocabulary.
///
/// Total: statuses the public API does not expose, such as
/// [`RecordStatus::UnreviewedChanges`], become [`InvoiceStatus::Invalid`].
pub fn to_invoice_status(status: RecordStatus) -> InvoiceStatus {
    STATUS_PAIRS
        .iter()
        .find(|(_, record)| *record == status)
        .map(|(invoice, _)| *invoice)
        .unwrap_or(InvoiceStatus::Invalid)
}

// ============================================================================
// Error-code translation
// ============================================================================

/// Translate a raw ledgerd error code into the public error vocabulary.
///
/// Only codes a user can act on translate. Codes for faults in tally-www's
/// own requests (invalid payload, invalid challenge) are deliberately not
/// translated; they and anything unrecognized, negative values included,
/// collapse to [`ErrorStatus::Invalid`].
pub fn to_api_error_status(code: i64) -> ErrorStatus {
    use ledgerd_api::ErrorStatus as Ledger;

    let known = u32::try_from(code)
        .map(Ledger::from)
        .unwrap_or(Ledger::Invalid);
    match known {
        Ledger::InvalidFileDigest => ErrorStatus::InvalidFileDigest,
        Ledger::InvalidBase64 => ErrorStatus::InvalidBase64,
        Ledger::InvalidMIMEType => ErrorStatus::InvalidMIMEType,
        Ledger::UnsupportedMIMEType => ErrorStatus::UnsupportedMIMEType,
        Ledger::InvalidRecordStatusTransition => ErrorStatus::InvalidInvoiceStatusTransition,
        _ => ErrorStatus::Invalid,
    }
}

// ============================================================================
// Files and censorship proofs
// ============================================================================

/// Wrap the public invoice file into ledgerd's file list.
///
/// The stored name is always [`INVOICE_FILENAME`]; mime, digest, and
/// payload pass through untouched.
pub fn to_record_files(file: &tally_api::File) -> Vec<ledgerd_api::File> {
    vec![ledgerd_api::File {
        name: INVOICE_FILENAME.to_string(),
        mime: file.mime.clone(),
        digest: file.digest.clone(),
        payload: file.payload.clone(),
    }]
}

/// Surface the invoice file from a ledgerd file list.
///
/// `None` when the record has no files, which is a legitimate state while
/// a record is mid-creation. Otherwise the first file's mime, digest, and
/// payload; the stored name and any files past the first are dropped.
pub fn to_invoice_file(files: &[ledgerd_api::File]) -> Option<tally_api::File> {
    let first = files.first()?;
    Some(tally_api::File {
        mime: first.mime.clone(),
        digest: first.digest.clone(),
        payload: first.payload.clone(),
    })
}

/// Censorship proofs relocate between representations without change.
pub fn to_record_censorship(proof: &tally_api::CensorshipRecord) -> ledgerd_api::CensorshipRecord {
    ledgerd_api::CensorshipRecord {
        token: proof.token.clone(),
        merkle: proof.merkle.clone(),
        signature: proof.signature.clone(),
    }
}

pub fn to_invoice_censorship(proof: &ledgerd_api::CensorshipRecord) -> tally_api::CensorshipRecord {
    tally_api::CensorshipRecord {
        token: proof.token.clone(),
        merkle: proof.merkle.clone(),
        signature: proof.signature.clone(),
    }
}

// ============================================================================
// Record assembly: ledgerd to public
// ============================================================================

/// Pull the general-stream metadata out of a record.
///
/// Only the first stream carrying [`STREAM_GENERAL`]'s id counts;
/// duplicates past it are ignored even when the first fails to decode. A
/// record without the stream yields zero-valued metadata silently; records
/// pass through states where the stream does not exist yet. A stream that
/// fails the strict decode also yields zero-valued metadata, and that gets
/// reported.
fn general_metadata(record: &Record, reporter: &dyn AnomalyReporter) -> InvoiceMetadata {
    let stream = match record.metadata.iter().find(|s| s.id == STREAM_GENERAL) {
        Some(stream) => stream,
        None => return InvoiceMetadata::default(),
    };

    match mdstream::decode_invoice_metadata(&stream.payload) {
        Ok(md) => md,
        Err(err) => {
            reporter.report(Anomaly::MetadataDecode {
                token: record.censorship_record.token.clone(),
                payload: stream.payload.clone(),
                error: err.to_string(),
            });
            InvoiceMetadata::default()
        }
    }
}

/// Decode a ledgerd record into a public invoice.
///
/// The status comes from the record's own status field; callers holding
/// the status-change history should prefer [`invoice_from_inventory`],
/// which replays it. `userid` is left empty here, identity resolution
/// happens at the inventory level.
pub fn to_invoice_record(record: &Record, reporter: &dyn AnomalyReporter) -> InvoiceRecord {
    let md = general_metadata(record, reporter);
    InvoiceRecord {
        status: to_invoice_status(record.status),
        timestamp: md.timestamp,
        month: md.month,
        year: md.year,
        public_key: md.public_key,
        signature: md.signature,
        file: to_invoice_file(&record.files),
        censorship_record: to_invoice_censorship(&record.censorship_record),
        user_id: String::new(),
    }
}

/// Assemble the public view of an inventory entry.
///
/// Replays the status-change history over the base decode, newest entry
/// winning; an empty history keeps the record's own status. Then resolves
/// the submitter's account through the `user_pubkeys` snapshot (public key
/// to account id). An unknown key is reported and leaves `userid` empty;
/// the conversion itself never fails.
pub fn invoice_from_inventory(
    inv: &InventoryRecord,
    user_pubkeys: &HashMap<String, String>,
    reporter: &dyn AnomalyReporter,
) -> InvoiceRecord {
    let mut invoice = to_invoice_record(&inv.record, reporter);

    // Replay the change log; the last entry wins.
    for change in &inv.changes {
        invoice.status = to_invoice_status(change.new_status);
    }

    match user_pubkeys.get(&invoice.public_key) {
        Some(user_id) => invoice.user_id = user_id.clone(),
        None => reporter.report(Anomaly::UnknownPublicKey {
            token: invoice.censorship_record.token.clone(),
            public_key: invoice.public_key.clone(),
        }),
    }

    invoice
}

// ============================================================================
// Record assembly: public to ledgerd, test fixtures only
// ============================================================================

/// Build a ledgerd record from a public invoice, wrong on purpose.
///
/// The single metadata stream uses an id past [`METADATA_STREAMS_MAX`] and
/// a placeholder payload, so ledgerd rejects the record at submission.
/// Tests use this to drive rejection paths. The real submission flow
/// composes its streams through [`crate::mdstream`]; no conversion from
/// the public shape can reproduce those faithfully because the public
/// shape does not carry the stream layout.
pub fn invalid_record_for_tests(invoice: &InvoiceRecord) -> Record {
    let file = invoice.file.clone().unwrap_or_default();
    Record {
        status: to_record_status(invoice.status),
        timestamp: invoice.timestamp,
        censorship_record: to_record_censorship(&invoice.censorship_record),
        metadata: vec![MetadataStream {
            id: METADATA_STREAMS_MAX + 1, // fail deliberately
            payload: "invalid payload".to_string(),
        }],
        files: to_record_files(&file),
    }
}

/// [`invalid_record_for_tests`] over a batch.
pub fn invalid_records_for_tests(invoices: &[InvoiceRecord]) -> Vec<Record> {
    invoices.iter().map(invalid_record_for_tests).collect()
}
