//! Public contractor invoice API v1.
//!
//! Wire types shared by the service and its clients. Everything serializes
//! with serde to the JSON wire form; status and error-status enums travel
//! as bare integers so they match what non-Rust clients already send.

mod status;
mod types;

pub use status::{ErrorStatus, InvoiceStatus};
pub use types::{CensorshipRecord, File, InvoiceRecord};

/// MIME type of the csv invoice file.
pub const INVOICE_FILE_MIME: &str = "text/plain; charset=utf-8";
