use serde::{Deserialize, Serialize};

use crate::status::RecordStatus;

/// One opaque metadata blob attached to a record.
///
/// ledgerd never interprets payloads; stream ids partition them by schema,
/// and the submitting service owns what each id means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataStream {
    pub id: u64,
    pub payload: String,
}

/// A named file stored with a record.
///
/// `payload` is base64; `digest` is the hex SHA-256 of the decoded payload;
/// `mime` describes the decoded payload. ledgerd verifies all three at
/// submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    pub mime: String,
    pub digest: String,
    pub payload: String,
}

/// Proof that ledgerd accepted a record: the token addressing it, the
/// merkle root of its file digests, and the server signature over that
/// root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensorshipRecord {
    pub token: String,
    pub merkle: String,
    pub signature: String,
}

/// A full record as ledgerd returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub status: RecordStatus,
    /// Last status-change time, unix seconds.
    pub timestamp: i64,
    #[serde(rename = "censorshiprecord")]
    pub censorship_record: CensorshipRecord,
    pub metadata: Vec<MetadataStream>,
    pub files: Vec<File>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_decodes_from_wire_json() {
        let raw = r#"{
            "status": 2,
            "timestamp": 1541081169,
            "censorshiprecord": {
                "token": "c3957b09b364ba1a",
                "merkle": "ad4f5d4e",
                "signature": "e2f9f38c"
            },
            "metadata": [{"id": 0, "payload": "{}"}],
            "files": []
        }"#;

        let record: Record = serde_json::from_str(raw).unwrap();
        assert_eq!(record.status, RecordStatus::NotReviewed);
        assert_eq!(record.censorship_record.token, "c3957b09b364ba1a");
        assert_eq!(record.metadata.len(), 1);
        assert_eq!(record.metadata[0].id, 0);
        assert!(record.files.is_empty());
    }

    #[test]
    fn record_wire_keys_match_store_schema() {
        let record = Record {
            status: RecordStatus::Public,
            timestamp: 7,
            censorship_record: CensorshipRecord::default(),
            metadata: vec![MetadataStream {
                id: 2,
                payload: "x".to_string(),
            }],
            files: vec![File::default()],
        };

        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["status", "timestamp", "censorshiprecord", "metadata", "files"] {
            assert!(obj.contains_key(key), "missing wire key {key}");
        }
        assert_eq!(obj.len(), 5);
        assert_eq!(value["metadata"][0]["id"], 2);
        assert_eq!(value["files"][0]["name"], "");
    }
}
