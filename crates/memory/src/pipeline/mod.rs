//! The physical memory access pipeline.
//!
//! This module contains every stage between instruction execution and raw
//! storage. It provides:
//! 1. **Ordering:** Resolution of raw acquire/release/reservation flags into access kinds.
//! 2. **Classification:** The platform memory map seam and fixed-priority region decode.
//! 3. **Permission Gate:** The optional protection policy consulted before routing.
//! 4. **Backend Seam:** The storage trait the surrounding simulator's bus implements.
//! 5. **Dispatch:** The entry points that run each access to a value or a fault.
//! 6. **Tracing:** The passive observer hook for verification tooling.

/// Storage backend seam (physical memory and MMIO adapters).
pub mod backend;

/// Access dispatcher and public entry points.
pub mod dispatch;

/// Platform memory map and access classification.
pub mod map;

/// Atomicity and ordering kind resolution.
pub mod ordering;

/// Physical memory protection seam.
pub mod pmp;

/// Verification trace sink.
pub mod trace;

pub use backend::Backend;
pub use dispatch::MemoryPipeline;
pub use map::{AddrRange, MemoryMap, RangeMap, Region};
pub use ordering::{ReadKind, WriteKind};
pub use pmp::{AllowAll, PmpPolicy};
pub use trace::TraceSink;
