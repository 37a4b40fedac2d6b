//! Common types shared across the access pipeline.
//!
//! This module provides the fundamental value types every pipeline stage
//! consumes. It includes:
//! 1. **Address Types:** Strong typing for resolved physical addresses.
//! 2. **Access Descriptors:** Access types, widths, ordering flags, and tag metadata.
//! 3. **Error Handling:** Fault representations and the pipeline result type.
//! 4. **Privilege Modes:** The privilege levels consulted by the permission gate.

/// Physical address type definitions.
pub mod addr;

/// Memory access descriptors (types, widths, ordering flags, metadata).
pub mod data;

/// Fault and pipeline error definitions.
pub mod error;

/// Privilege mode definitions.
pub mod mode;

pub use addr::PhysAddr;
pub use data::{AccessDirection, AccessType, AccessWidth, MemContext, Meta, OrderingFlags};
pub use error::{Fault, MemError, MemResult};
pub use mode::PrivilegeMode;
