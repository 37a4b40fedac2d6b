//! Configuration for the access pipeline.
//!
//! This module defines the configuration structure supplied by the
//! surrounding simulator. It provides:
//! 1. **Defaults:** Baseline platform constants (RAM range, MMIO regions).
//! 2. **Structure:** Gate enable, diagnostic logging, and memory map ranges.
//! 3. **Deserialization:** JSON input via serde, with per-field defaults.
//!
//! Configuration is supplied via JSON from the embedding simulator, or use
//! `MemConfig::default()` directly.

use serde::Deserialize;

use crate::pipeline::map::AddrRange;

/// Default platform constants for the pipeline configuration.
///
/// These values define the baseline memory map when not explicitly
/// overridden by the embedder.
mod defaults {
    /// Base address of main system RAM (2 GiB).
    ///
    /// This is the physical address where the main memory region begins.
    pub const RAM_BASE: u64 = 0x8000_0000;

    /// Total size of main system RAM (128 MiB).
    ///
    /// Accesses beyond `RAM_BASE + RAM_SIZE` fall outside physical memory
    /// and fault unless an MMIO region claims them.
    pub const RAM_SIZE: u64 = 128 * 1024 * 1024;

    /// Base address of the UART 16550-compatible serial port MMIO region.
    pub const UART_BASE: u64 = 0x1000_0000;

    /// Size of the UART MMIO region.
    pub const UART_SIZE: u64 = 0x100;

    /// Base address of the CLINT (Core Local Interruptor) MMIO region.
    pub const CLINT_BASE: u64 = 0x0200_0000;

    /// Size of the CLINT MMIO region.
    pub const CLINT_SIZE: u64 = 0x1_0000;
}

/// Pipeline configuration.
///
/// Deserializable from JSON; every field has a default so partial
/// configurations work. The map ranges feed
/// [`RangeMap::from_config`](crate::pipeline::RangeMap::from_config);
/// embedders with richer decode implement the map trait themselves and
/// ignore the range fields.
#[derive(Debug, Clone, Deserialize)]
pub struct MemConfig {
    /// Enable the physical memory protection gate.
    ///
    /// With this clear the gate is a no-op even when a policy is attached.
    #[serde(default)]
    pub enable_pmp: bool,

    /// Enable human-readable access logging (address, direction, data).
    ///
    /// Purely diagnostic; has no semantic effect on any access.
    #[serde(default)]
    pub trace_accesses: bool,

    /// Physical base address of main RAM.
    #[serde(default = "MemConfig::default_ram_base")]
    pub ram_base: u64,

    /// Size of main RAM in bytes.
    #[serde(default = "MemConfig::default_ram_size")]
    pub ram_size: u64,

    /// MMIO device regions (readable and writable).
    #[serde(default = "MemConfig::default_mmio")]
    pub mmio: Vec<AddrRange>,
}

impl MemConfig {
    /// Returns the default RAM base address.
    fn default_ram_base() -> u64 {
        defaults::RAM_BASE
    }

    /// Returns the default RAM size.
    fn default_ram_size() -> u64 {
        defaults::RAM_SIZE
    }

    /// Returns the default MMIO regions (UART and CLINT).
    fn default_mmio() -> Vec<AddrRange> {
        vec![
            AddrRange::new(defaults::CLINT_BASE, defaults::CLINT_SIZE),
            AddrRange::new(defaults::UART_BASE, defaults::UART_SIZE),
        ]
    }

    /// Parses a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON text to parse.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the document is malformed
    /// or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for MemConfig {
    fn default() -> Self {
        Self {
            enable_pmp: false,
            trace_accesses: false,
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
            mmio: Self::default_mmio(),
        }
    }
}
