//! Verification trace sink.
//!
//! This module defines the passive observer hook used by external
//! verification tooling. The sink receives the resolved address, width,
//! and data of each successful access after the fact; it cannot alter the
//! result or fail the operation (the methods return nothing), and it never
//! sees fault detail beyond the absence of a callback.

use crate::common::{AccessWidth, PhysAddr};

/// Observer for successful memory accesses.
///
/// Injected into the pipeline at construction; when absent, tracing is a
/// no-op. Purely a side channel: implementations must not assume their
/// callbacks influence simulation state.
pub trait TraceSink {
    /// Records a completed read.
    ///
    /// # Arguments
    ///
    /// * `addr` - Physical address of the read.
    /// * `width` - Access width in bytes.
    /// * `value` - The value returned to the caller.
    fn trace_read(&mut self, addr: PhysAddr, width: AccessWidth, value: u64);

    /// Records a completed write.
    ///
    /// Called only when the write took effect (a failed store-conditional
    /// is not traced).
    ///
    /// # Arguments
    ///
    /// * `addr` - Physical address of the write.
    /// * `width` - Access width in bytes.
    /// * `value` - The value written.
    fn trace_write(&mut self, addr: PhysAddr, width: AccessWidth, value: u64);
}
