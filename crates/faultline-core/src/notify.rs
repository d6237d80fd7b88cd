//! Notification interface
//!
//! The engine broadcasts every constructed record to an observer the
//! caller passes in; there is no process-wide registry. Fan-out
//! internals live with the implementation (`faultline-notify`); the
//! core only defines the calling contract.

use crate::record::ErrorRecord;

/// Observer of constructed error records
pub trait Notify {
    /// Receive a record
    ///
    /// `channel` carries the record's specific name when it differs
    /// from the kind's base label, and is `None` for the catch-all
    /// broadcast that follows every construction.
    fn notify(&self, record: &ErrorRecord, channel: Option<&str>);
}
