//! Physical address type.
//!
//! This module defines the strong type for physical addresses used by the
//! access pipeline. It provides the following:
//! 1. **Type Safety:** Keeps resolved physical addresses distinct from raw integers.
//! 2. **Address Manipulation:** Helper methods for raw values and alignment checks.
//! 3. **Diagnostics:** Hexadecimal display formatting for fault and trace output.
//!
//! Virtual addresses are deliberately absent: the pipeline operates on
//! already-translated physical addresses only.

use std::fmt;

use super::data::AccessWidth;

/// A physical address in the platform address space.
///
/// Physical addresses represent actual hardware memory locations. They are
/// produced by the surrounding simulator's address translation (or used
/// directly in bare-metal mode) before entering the access pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysAddr(pub u64);

impl PhysAddr {
    /// Creates a new physical address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 64-bit address value.
    ///
    /// # Returns
    ///
    /// A new `PhysAddr` instance wrapping the provided address.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    ///
    /// # Returns
    ///
    /// The underlying 64-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Returns whether this address is a multiple of the given access width.
    ///
    /// # Arguments
    ///
    /// * `width` - The access width the address must be aligned to.
    ///
    /// # Returns
    ///
    /// `true` if the address is naturally aligned for the width.
    #[inline(always)]
    pub const fn is_aligned(self, width: AccessWidth) -> bool {
        self.0 % width.bytes() == 0
    }

    /// Returns the first address past an access of the given width, or
    /// `None` if the access would wrap the address space.
    #[inline]
    pub const fn end_of(self, width: AccessWidth) -> Option<u64> {
        self.0.checked_add(width.bytes())
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
