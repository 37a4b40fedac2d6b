//! Memory access descriptors.
//!
//! This module defines the value types that describe a single memory access
//! before it is dispatched. These types are used for the following:
//! 1. **Fault Generation:** `AccessType` selects the fetch/load/store-AMO fault flavor.
//! 2. **Ordering Intent:** `OrderingFlags` carries raw acquire/release/reservation bits.
//! 3. **Width Validation:** `AccessWidth` is a runtime-checked 1..=8 byte width.
//! 4. **Tag Metadata:** `Meta` is the out-of-band tag value attached to each word.

use std::fmt;

/// Maximum number of bytes a single access may cover.
///
/// Matches the platform register width: one doubleword per access.
pub const MAX_ACCESS_WIDTH: u64 = 8;

/// Purpose of a data access beyond its direction.
///
/// The extended context distinguishes ordinary loads/stores from the read
/// and write halves of atomic read-modify-write operations, which fault
/// as store/AMO accesses even on their read half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemContext {
    /// Ordinary data payload access.
    Data,
    /// Access performed as part of an atomic read-modify-write.
    ReadWrite,
}

/// Type of memory access operation.
///
/// Used to distinguish instruction fetches, data loads, and data stores for
/// permission enforcement and fault synthesis. The fault flavor produced on
/// failure is fixed: `Execute` faults as a fetch access fault,
/// `Read(MemContext::Data)` as a load access fault, and everything else as
/// a store/AMO access fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    Execute,

    /// Data read access with its extended purpose.
    Read(MemContext),

    /// Data write access with its extended purpose.
    Write(MemContext),
}

/// Direction of a memory operation, used in diagnostics and to name the
/// side of the pipeline that rejected an ordering-flag combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDirection {
    /// Load side of the pipeline.
    Read,
    /// Store/AMO side of the pipeline.
    Write,
}

impl fmt::Display for AccessDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Raw memory-ordering intent of an access, not yet resolved to a kind.
///
/// The three booleans are independent as carried by the instruction
/// encoding; resolution to a concrete [`crate::pipeline::ReadKind`] or
/// [`crate::pipeline::WriteKind`] happens in the pipeline and may reject
/// combinations that have no defined semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderingFlags {
    /// Acquire ordering requested (`aq` bit).
    pub acquire: bool,
    /// Release ordering requested (`rl` bit).
    pub release: bool,
    /// Reservation involved (load-reserved / store-conditional).
    pub reservation: bool,
}

impl OrderingFlags {
    /// No ordering constraints: a plain access.
    pub const RELAXED: Self = Self {
        acquire: false,
        release: false,
        reservation: false,
    };

    /// Creates ordering flags from the three raw bits.
    #[inline]
    pub const fn new(acquire: bool, release: bool, reservation: bool) -> Self {
        Self {
            acquire,
            release,
            reservation,
        }
    }
}

impl fmt::Display for OrderingFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(acquire={}, release={}, reservation={})",
            self.acquire, self.release, self.reservation
        )
    }
}

/// Validated access width in bytes.
///
/// Construction enforces the platform precondition `1 <= bytes <= 8`, so a
/// held `AccessWidth` is proof of a legal width and the pipeline never
/// re-validates it. Widths need not be powers of two; alignment checks use
/// plain divisibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccessWidth(u8);

impl AccessWidth {
    /// One-byte access.
    pub const BYTE: Self = Self(1);
    /// Two-byte (halfword) access.
    pub const HALF: Self = Self(2);
    /// Four-byte (word) access.
    pub const WORD: Self = Self(4);
    /// Eight-byte (doubleword) access.
    pub const DOUBLE: Self = Self(8);

    /// Creates a validated access width.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Requested width in bytes.
    ///
    /// # Returns
    ///
    /// `Some(width)` when `1 <= bytes <= MAX_ACCESS_WIDTH`, else `None`.
    #[inline]
    pub const fn new(bytes: u64) -> Option<Self> {
        if bytes >= 1 && bytes <= MAX_ACCESS_WIDTH {
            Some(Self(bytes as u8))
        } else {
            None
        }
    }

    /// Returns the width in bytes.
    #[inline(always)]
    pub const fn bytes(self) -> u64 {
        self.0 as u64
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Out-of-band tag metadata attached to every memory word.
///
/// The payload is opaque to the pipeline; it travels alongside the data on
/// every physical-memory transfer (capability/tagging schemes store their
/// tag bits here). MMIO regions carry no tag storage and always produce
/// [`Meta::DEFAULT`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Meta(pub u64);

impl Meta {
    /// Platform default metadata, used when the caller does not supply one.
    pub const DEFAULT: Self = Self(0);
}
