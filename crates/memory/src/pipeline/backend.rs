//! Storage backend seam.
//!
//! This module defines the trait the surrounding simulator's bus
//! implements to give the pipeline access to raw storage. It covers:
//! 1. **Physical Memory:** Raw reads/writes carrying data plus tag metadata.
//! 2. **MMIO:** Device register access for addresses the map classifies as I/O.
//!
//! Reservation-set bookkeeping (load-reserved/store-conditional success
//! and failure) belongs entirely to the backend: the pipeline passes the
//! resolved kind through and interprets `read_raw` returning `None` as an
//! access fault and `write_raw`'s bool as the store-conditional outcome.

use crate::common::{AccessWidth, Meta, PhysAddr};

use super::ordering::{ReadKind, WriteKind};

/// Raw storage adapter: physical memory plus MMIO devices.
///
/// Owned by the surrounding simulator and lent to the pipeline per call;
/// both concerns sit on one trait because the same bus object backs them.
pub trait Backend {
    /// Reads `width` bytes of physical memory with the given ordering kind.
    ///
    /// # Arguments
    ///
    /// * `kind` - Resolved ordering/atomicity kind of the read.
    /// * `addr` - Physical address, already classified as physical memory.
    /// * `width` - Access width in bytes.
    /// * `want_meta` - Whether the caller needs the stored tag metadata;
    ///   backends without per-word tag tracking may skip the lookup and
    ///   return [`Meta::DEFAULT`] when this is `false`.
    ///
    /// # Returns
    ///
    /// The data and metadata, or `None` when the backend cannot honor the
    /// requested kind at this address (e.g., reservation-set rules).
    fn read_raw(
        &mut self,
        kind: ReadKind,
        addr: PhysAddr,
        width: AccessWidth,
        want_meta: bool,
    ) -> Option<(u64, Meta)>;

    /// Writes `width` bytes of physical memory with the given ordering kind.
    ///
    /// # Arguments
    ///
    /// * `kind` - Resolved ordering/atomicity kind of the write.
    /// * `addr` - Physical address, already classified as physical memory.
    /// * `width` - Access width in bytes.
    /// * `value` - Data payload (low `width` bytes are significant).
    /// * `meta` - Tag metadata to store alongside the data.
    ///
    /// # Returns
    ///
    /// `true` if the write took effect; `false` for a failed
    /// store-conditional.
    fn write_raw(
        &mut self,
        kind: WriteKind,
        addr: PhysAddr,
        width: AccessWidth,
        value: u64,
        meta: Meta,
    ) -> bool;

    /// Reads `width` bytes from a device register.
    ///
    /// Only called for addresses the map classified as MMIO-readable, so
    /// the read always produces a value; devices carry no tag storage.
    fn mmio_read(&mut self, addr: PhysAddr, width: AccessWidth) -> u64;

    /// Writes `width` bytes to a device register.
    ///
    /// Only called for addresses the map classified as MMIO-writable;
    /// metadata does not travel to devices.
    fn mmio_write(&mut self, addr: PhysAddr, width: AccessWidth, value: u64);
}
