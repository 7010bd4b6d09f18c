use serde::{Deserialize, Serialize};

/// Lifecycle status ledgerd tracks for a record.
///
/// Travels as a bare integer on the wire. Integers outside the known
/// range, a newer ledgerd's for instance, decode to `Invalid` rather than
/// failing deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum RecordStatus {
    /// Sentinel for values this vocabulary does not know.
    #[default]
    Invalid = 0,
    /// No record with the requested token.
    NotFound = 1,
    /// Unvetted, awaiting review.
    NotReviewed = 2,
    /// Censored by an administrator; files withheld from public routes.
    Censored = 3,
    /// Vetted and publicly visible.
    Public = 4,
    /// Public record with unvetted edits awaiting review.
    UnreviewedChanges = 5,
    /// Frozen; no further status changes accepted.
    Archived = 6,
}

impl From<u32> for RecordStatus {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::NotFound,
            2 => Self::NotReviewed,
            3 => Self::Censored,
            4 => Self::Public,
            5 => Self::UnreviewedChanges,
            6 => Self::Archived,
            _ => Self::Invalid,
        }
    }
}

impl From<RecordStatus> for u32 {
    fn from(status: RecordStatus) -> Self {
        status as u32
    }
}

/// Error codes ledgerd returns alongside a failed request.
///
/// Same integer wire form as [`RecordStatus`]: unknown codes decode to
/// `Invalid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ErrorStatus {
    #[default]
    Invalid = 0,
    /// Request body could not be parsed. A fault in the caller, not in
    /// anything the caller's user submitted.
    InvalidRequestPayload = 1,
    /// Challenge verification failed. Also a caller fault.
    InvalidChallenge = 2,
    InvalidFilename = 3,
    InvalidFileDigest = 4,
    InvalidBase64 = 5,
    InvalidMIMEType = 6,
    UnsupportedMIMEType = 7,
    InvalidRecordStatusTransition = 8,
}

impl From<u32> for ErrorStatus {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::InvalidRequestPayload,
            2 => Self::InvalidChallenge,
            3 => Self::InvalidFilename,
            4 => Self::InvalidFileDigest,
            5 => Self::InvalidBase64,
            6 => Self::InvalidMIMEType,
            7 => Self::UnsupportedMIMEType,
            8 => Self::InvalidRecordStatusTransition,
            _ => Self::Invalid,
        }
    }
}

impl From<ErrorStatus> for u32 {
    fn from(status: ErrorStatus) -> Self {
        status as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_status_wire_values_are_stable() {
        assert_eq!(u32::from(RecordStatus::Invalid), 0);
        assert_eq!(u32::from(RecordStatus::NotFound), 1);
        assert_eq!(u32::from(RecordStatus::NotReviewed), 2);
        assert_eq!(u32::from(RecordStatus::Censored), 3);
        assert_eq!(u32::from(RecordStatus::Public), 4);
        assert_eq!(u32::from(RecordStatus::UnreviewedChanges), 5);
        assert_eq!(u32::from(RecordStatus::Archived), 6);
    }

    #[test]
    fn record_status_travels_as_bare_integer() {
        let json = serde_json::to_string(&RecordStatus::Censored).unwrap();
        assert_eq!(json, "3");

        let status: RecordStatus = serde_json::from_str("4").unwrap();
        assert_eq!(status, RecordStatus::Public);
    }

    #[test]
    fn unknown_record_status_decodes_to_invalid() {
        let status: RecordStatus = serde_json::from_str("7").unwrap();
        assert_eq!(status, RecordStatus::Invalid);

        let status: RecordStatus = serde_json::from_str("4096").unwrap();
        assert_eq!(status, RecordStatus::Invalid);
    }

    #[test]
    fn error_status_maps_known_codes() {
        assert_eq!(ErrorStatus::from(4), ErrorStatus::InvalidFileDigest);
        assert_eq!(ErrorStatus::from(8), ErrorStatus::InvalidRecordStatusTransition);
        assert_eq!(ErrorStatus::from(0), ErrorStatus::Invalid);
        assert_eq!(ErrorStatus::from(99), ErrorStatus::Invalid);
    }
}
