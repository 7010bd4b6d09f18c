//! tally-www: service layer between the public contractor invoice API and
//! the ledgerd record store.
//!
//! The heart of the crate is [`convert`]: pure translation between
//! [`tally_api::InvoiceRecord`] and [`ledgerd_api::Record`], covering the
//! status vocabularies, the metadata streams that carry invoice fields
//! ledgerd has no schema for, and the replay of status-change history.
//! Conversion degrades instead of failing; see [`anomaly`] for how
//! degradations get surfaced.

pub mod anomaly;
pub mod convert;
pub mod error;
pub mod inventory;
pub mod mdstream;

pub use anomaly::{Anomaly, AnomalyReporter, LogReporter};
pub use convert::{
    invalid_record_for_tests, invalid_records_for_tests, invoice_from_inventory,
    to_api_error_status, to_invoice_censorship, to_invoice_file, to_invoice_record,
    to_invoice_status, to_record_censorship, to_record_files, to_record_status, INVOICE_FILENAME,
};
pub use error::{Error, Result};
pub use inventory::InventoryRecord;
pub use mdstream::{InvoiceMetadata, StatusChange};
