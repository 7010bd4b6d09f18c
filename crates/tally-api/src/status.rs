use serde::{Deserialize, Serialize};

/// Public status of an invoice.
///
/// Travels as a bare integer on the wire. Integers outside the known range
/// decode to `Invalid` rather than failing deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum InvoiceStatus {
    /// Sentinel for values this vocabulary does not know.
    #[default]
    Invalid = 0,
    /// No invoice with the requested token.
    NotFound = 1,
    /// Submitted, awaiting administrator review.
    NotReviewed = 2,
    /// Rejected by an administrator.
    Rejected = 3,
    /// Approved for payment.
    Approved = 4,
}

impl From<u32> for InvoiceStatus {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::NotFound,
            2 => Self::NotReviewed,
            3 => Self::Rejected,
            4 => Self::Approved,
            _ => Self::Invalid,
        }
    }
}

impl From<InvoiceStatus> for u32 {
    fn from(status: InvoiceStatus) -> Self {
        status as u32
    }
}

/// Error codes the service returns to its clients.
///
/// Codes are part of the public contract; values never change meaning once
/// shipped. Unknown integers decode to `Invalid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ErrorStatus {
    #[default]
    Invalid = 0,
    InvalidCensorshipToken = 1,
    InvoiceNotFound = 2,
    /// File digest does not match the file payload.
    InvalidFileDigest = 3,
    /// File payload is not valid base64.
    InvalidBase64 = 4,
    /// Stated MIME type does not match the file payload.
    InvalidMIMEType = 5,
    /// MIME type is well formed but not accepted for invoices.
    UnsupportedMIMEType = 6,
    MalformedInvoiceFile = 7,
    InvalidInvoiceStatusTransition = 8,
    InvalidSignature = 9,
    InvalidPublicKey = 10,
}

impl From<u32> for ErrorStatus {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::InvalidCensorshipToken,
            2 => Self::InvoiceNotFound,
            3 => Self::InvalidFileDigest,
            4 => Self::InvalidBase64,
            5 => Self::InvalidMIMEType,
            6 => Self::UnsupportedMIMEType,
            7 => Self::MalformedInvoiceFile,
            8 => Self::InvalidInvoiceStatusTransition,
            9 => Self::InvalidSignature,
            10 => Self::InvalidPublicKey,
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
    fn invoice_status_wire_values_are_stable() {
        assert_eq!(u32::from(InvoiceStatus::Invalid), 0);
        assert_eq!(u32::from(InvoiceStatus::NotFound), 1);
        assert_eq!(u32::from(InvoiceStatus::NotReviewed), 2);
        assert_eq!(u32::from(InvoiceStatus::Rejected), 3);
        assert_eq!(u32::from(InvoiceStatus::Approved), 4);
    }

    #[test]
    fn invoice_status_travels_as_bare_integer() {
        let json = serde_json::to_string(&InvoiceStatus::Approved).unwrap();
        assert_eq!(json, "4");

        let status: InvoiceStatus = serde_json::from_str("2").unwrap();
        assert_eq!(status, InvoiceStatus::NotReviewed);
    }

    #[test]
    fn unknown_invoice_status_decodes_to_invalid() {
        let status: InvoiceStatus = serde_json::from_str("5").unwrap();
        assert_eq!(status, InvoiceStatus::Invalid);

        let status: InvoiceStatus = serde_json::from_str("1000000").unwrap();
        assert_eq!(status, InvoiceStatus::Invalid);
    }

    #[test]
    fn error_status_wire_values_are_stable() {
        assert_eq!(u32::from(ErrorStatus::Invalid), 0);
        assert_eq!(u32::from(ErrorStatus::InvalidFileDigest), 3);
        assert_eq!(u32::from(ErrorStatus::InvalidBase64), 4);
        assert_eq!(u32::from(ErrorStatus::InvalidMIMEType), 5);
        assert_eq!(u32::from(ErrorStatus::UnsupportedMIMEType), 6);
        assert_eq!(u32::from(ErrorStatus::InvalidInvoiceStatusTransition), 8);
    }
}
