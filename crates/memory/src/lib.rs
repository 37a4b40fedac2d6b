//! Physical memory access pipeline for RISC-V instruction-set simulators.
//!
//! This crate implements the layer between instruction execution and raw
//! storage, with the following:
//! 1. **Ordering:** Deterministic mapping of acquire/release/reservation flags onto read/write kinds.
//! 2. **Classification:** Platform memory map decode with fixed MMIO-before-RAM priority.
//! 3. **Protection:** An optional physical memory protection gate that pre-empts routing.
//! 4. **Dispatch:** Entry points returning a validated value plus tag metadata, or a typed fault.
//! 5. **Observability:** Gated access logging and an injectable verification trace sink.
//!
//! The crate operates purely on already-resolved physical addresses;
//! translation, the register file, and the storage implementations stay
//! with the embedder.

/// Common types (addresses, access descriptors, faults, privilege modes).
pub mod common;
/// Pipeline configuration (defaults, map ranges, JSON deserialization).
pub mod config;
/// The access pipeline (ordering, classification, protection, dispatch, tracing).
pub mod pipeline;

/// Root configuration type; use `MemConfig::default()` or `MemConfig::from_json`.
pub use crate::config::MemConfig;
/// Main pipeline type; construct with `MemoryPipeline::new`.
pub use crate::pipeline::MemoryPipeline;
