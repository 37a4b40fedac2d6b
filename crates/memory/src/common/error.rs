//! Fault and pipeline error definitions.
//!
//! This module defines the two error tiers of the access pipeline:
//! 1. **Faults:** Recoverable, typed failures returned as data; the caller
//!    converts them into the simulated program's trap-handling path.
//! 2. **Pipeline Errors:** The top-level error for every public entry
//!    point, adding the distinguished unsupported-ordering condition that
//!    must never be coerced into a simulated trap.
//!
//! Fault synthesis from an access type is centralized here so the
//! fetch/load/store-AMO three-way split holds on every failure branch.

use thiserror::Error;

use super::addr::PhysAddr;
use super::data::{AccessDirection, AccessType, MemContext, OrderingFlags};

/// Recoverable memory access fault.
///
/// Each variant carries the faulting physical address. Faults are ordinary
/// data: the instruction-execution layer turns them into simulated traps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Instruction fetch violated routing or protection.
    #[error("instruction access fault at {0}")]
    FetchAccess(PhysAddr),

    /// Data load violated routing or protection.
    #[error("load access fault at {0}")]
    LoadAccess(PhysAddr),

    /// Data store or AMO violated routing or protection.
    #[error("store/AMO access fault at {0}")]
    StoreAmoAccess(PhysAddr),

    /// Load with acquire or reservation semantics to an unaligned address.
    #[error("load address misaligned at {0}")]
    LoadAddressMisaligned(PhysAddr),

    /// Store/AMO with release or conditional semantics to an unaligned address.
    #[error("store/AMO address misaligned at {0}")]
    StoreAmoAddressMisaligned(PhysAddr),

    /// Access rejected by the platform permission policy.
    #[error("permission violation at {0}")]
    PermissionViolation(PhysAddr),
}

impl Fault {
    /// Synthesizes the access fault matching an access type.
    ///
    /// The split is fixed: `Execute` surfaces as a fetch fault, plain data
    /// reads as load faults, and every other access type (stores, AMO
    /// halves, extended read purposes) as a store/AMO fault.
    ///
    /// # Arguments
    ///
    /// * `access` - The access type that failed.
    /// * `addr` - The faulting physical address.
    ///
    /// # Returns
    ///
    /// The access fault variant for this access type.
    pub const fn access_for(access: AccessType, addr: PhysAddr) -> Self {
        match access {
            AccessType::Execute => Self::FetchAccess(addr),
            AccessType::Read(MemContext::Data) => Self::LoadAccess(addr),
            AccessType::Read(MemContext::ReadWrite) | AccessType::Write(_) => {
                Self::StoreAmoAccess(addr)
            }
        }
    }

    /// Synthesizes the misalignment fault for one side of the pipeline.
    ///
    /// # Arguments
    ///
    /// * `direction` - Which side of the pipeline detected the misalignment.
    /// * `addr` - The misaligned physical address.
    ///
    /// # Returns
    ///
    /// A load or store/AMO address-misaligned fault.
    pub const fn misaligned_for(direction: AccessDirection, addr: PhysAddr) -> Self {
        match direction {
            AccessDirection::Read => Self::LoadAddressMisaligned(addr),
            AccessDirection::Write => Self::StoreAmoAddressMisaligned(addr),
        }
    }
}

/// Top-level error returned by every public pipeline entry point.
///
/// Callers must handle both tiers explicitly. `Fault` is the recoverable
/// tier; `UnsupportedOrdering` signals a modeling gap (an ordering-flag
/// combination with no defined semantics) and is deliberately *not* a
/// [`Fault`], so it cannot be silently converted into a simulated trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemError {
    /// Recoverable access fault; convert into the simulated trap path.
    #[error(transparent)]
    Fault(#[from] Fault),

    /// Ordering-flag combination the ordering model does not define.
    ///
    /// Reads reject release-without-acquire; writes reject
    /// acquire-without-release. The embedder must treat this as fatal to
    /// the simulation rather than downgrading it to a nearby kind.
    #[error("unsupported {direction} ordering combination {flags}")]
    UnsupportedOrdering {
        /// Side of the pipeline that rejected the combination.
        direction: AccessDirection,
        /// The raw flags as supplied by the caller.
        flags: OrderingFlags,
    },
}

/// Result type for every memory operation.
pub type MemResult<T> = Result<T, MemError>;
