//! Read-only view of an inventory entry.

use ledgerd_api::Record;

use crate::mdstream::StatusChange;

/// One invoice as the inventory holds it: the ledgerd record plus the
/// decoded status-change history, oldest first.
///
/// The inventory owns and mutates these; conversion only reads them. The
/// record's own status field can lag the history, so consumers that have
/// the history replay it instead of trusting the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub record: Record,
    pub changes: Vec<StatusChange>,
}
