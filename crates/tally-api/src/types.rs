use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::status::InvoiceStatus;
use crate::INVOICE_FILE_MIME;

/// A single invoice file.
///
/// `payload` is base64; `digest` is the hex SHA-256 of the decoded
/// payload. Clients do not name the file; the service stores it under a
/// canonical name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub mime: String,
    pub digest: String,
    pub payload: String,
}

impl File {
    /// Package csv contents for submission: base64 payload, hex SHA-256
    /// digest, [`INVOICE_FILE_MIME`] mime.
    pub fn from_csv_bytes(contents: &[u8]) -> Self {
        Self {
            mime: INVOICE_FILE_MIME.to_string(),
            digest: hex::encode(Sha256::digest(contents)),
            payload: STANDARD.encode(contents),
        }
    }
}

/// Proof that the store accepted an invoice: the token addressing it, the
/// merkle root of its file digests, and the server signature over that
/// root. Clients keep this to prove submission happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensorshipRecord {
    pub token: String,
    pub merkle: String,
    pub signature: String,
}

/// An invoice as the public API presents it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub status: InvoiceStatus,
    /// Submission time, unix seconds.
    pub timestamp: i64,
    /// Billing period.
    pub month: u16,
    pub year: u16,
    /// Key that signed the submission.
    #[serde(rename = "publickey")]
    pub public_key: String,
    /// Client signature of the invoice file merkle root.
    pub signature: String,
    /// The csv invoice itself. Absent while the store holds no files for
    /// the record.
    pub file: Option<File>,
    #[serde(rename = "censorshiprecord")]
    pub censorship_record: CensorshipRecord,
    /// Account id resolved from `publickey`; empty when no account matches.
    #[serde(rename = "userid")]
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_file_packaging_is_verifiable() {
        let contents = b"2018-11,Development,40,1500\n";
        let file = File::from_csv_bytes(contents);

        assert_eq!(file.mime, INVOICE_FILE_MIME);
        assert_eq!(STANDARD.decode(&file.payload).unwrap(), contents);
        assert_eq!(file.digest, hex::encode(Sha256::digest(contents)));
        assert_eq!(file.digest.len(), 64);
    }

    #[test]
    fn invoice_record_wire_keys_match_published_contract() {
        let invoice = InvoiceRecord {
            status: InvoiceStatus::NotReviewed,
            timestamp: 1_541_081_169,
            month: 10,
            year: 2018,
            public_key: "a".repeat(64),
            signature: "b".repeat(128),
            file: None,
            censorship_record: CensorshipRecord::default(),
            user_id: String::new(),
        };

        let value = serde_json::to_value(&invoice).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "status",
            "timestamp",
            "month",
            "year",
            "publickey",
            "signature",
            "file",
            "censorshiprecord",
            "userid",
        ] {
            assert!(obj.contains_key(key), "missing wire key {key}");
        }
        assert_eq!(obj.len(), 9);
        assert_eq!(value["status"], 2);
        assert!(value["file"].is_null());
    }

    #[test]
    fn invoice_record_decodes_from_wire_json() {
        let raw = r#"{
            "status": 4,
            "timestamp": 1541081169,
            "month": 10,
            "year": 2018,
            "publickey": "4206fa1c",
            "signature": "8d14c77d",
            "file": {"mime": "text/plain; charset=utf-8", "digest": "ab", "payload": "aGk="},
            "censorshiprecord": {"token": "57b09b", "merkle": "ad4f", "signature": "e2f9"},
            "userid": "f2ca6ca2-b3fc-4ed0-b6f3-4b7358a2a2f8"
        }"#;

        let invoice: InvoiceRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Approved);
        assert_eq!(invoice.month, 10);
        assert_eq!(invoice.file.as_ref().unwrap().payload, "aGk=");
        assert_eq!(invoice.censorship_record.token, "57b09b");
        assert_eq!(invoice.user_id, "f2ca6ca2-b3fc-4ed0-b6f3-4b7358a2a2f8");
    }
}
