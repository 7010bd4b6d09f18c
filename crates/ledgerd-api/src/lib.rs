//! ledgerd record store API v1.
//!
//! ledgerd stores censorship-resistant records addressed by token. A record
//! carries opaque metadata streams owned by the submitting service and a
//! list of named files; ledgerd validates files and status transitions but
//! never looks inside metadata payloads. This crate holds the wire types
//! for talking to it.

mod status;
mod types;

pub use status::{ErrorStatus, RecordStatus};
pub use types::{CensorshipRecord, File, MetadataStream, Record};

/// Highest metadata stream id ledgerd accepts. Streams with greater ids
/// are rejected at submission.
pub const METADATA_STREAMS_MAX: u64 = 16;
