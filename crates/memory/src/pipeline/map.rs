//! Platform memory map and access classification.
//!
//! This module decides whether a physical access targets a memory-mapped
//! I/O region, ordinary physical memory, or nothing. It provides:
//! 1. **Map Seam:** The `MemoryMap` trait the surrounding simulator implements.
//! 2. **Classification:** Fixed-priority decode (MMIO before physical memory before
//!    unmapped), with the access required to sit fully inside one region.
//! 3. **Range Map:** A concrete `MemoryMap` over configured address ranges,
//!    constructible from [`MemConfig`](crate::config::MemConfig).

use serde::Deserialize;

use crate::common::{AccessWidth, PhysAddr};
use crate::config::MemConfig;

/// Region class a physical access resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// Memory-mapped I/O device region.
    Mmio,
    /// Ordinary physical memory.
    Physical,
    /// No region claims the access.
    Unmapped,
}

/// Platform memory map consulted by the dispatcher.
///
/// The three predicates test whether an access of the given width sits
/// *fully inside* the corresponding region class; an access straddling a
/// region boundary satisfies none of them and classifies as unmapped.
/// MMIO-readable/writable and physical ranges are expected to be disjoint.
pub trait MemoryMap {
    /// Returns whether `[addr, addr + width)` lies fully inside an
    /// MMIO-readable region.
    fn within_mmio_readable(&self, addr: PhysAddr, width: AccessWidth) -> bool;

    /// Returns whether `[addr, addr + width)` lies fully inside an
    /// MMIO-writable region.
    fn within_mmio_writable(&self, addr: PhysAddr, width: AccessWidth) -> bool;

    /// Returns whether `[addr, addr + width)` lies fully inside physical
    /// memory.
    fn within_phys_mem(&self, addr: PhysAddr, width: AccessWidth) -> bool;

    /// Classifies a read access.
    ///
    /// The priority order models hardware decoding precedence and is
    /// fixed: MMIO first, then physical memory, then unmapped.
    fn classify_read(&self, addr: PhysAddr, width: AccessWidth) -> Region {
        if self.within_mmio_readable(addr, width) {
            Region::Mmio
        } else if self.within_phys_mem(addr, width) {
            Region::Physical
        } else {
            Region::Unmapped
        }
    }

    /// Classifies a write access, with the same fixed priority as
    /// [`classify_read`](Self::classify_read).
    fn classify_write(&self, addr: PhysAddr, width: AccessWidth) -> Region {
        if self.within_mmio_writable(addr, width) {
            Region::Mmio
        } else if self.within_phys_mem(addr, width) {
            Region::Physical
        } else {
            Region::Unmapped
        }
    }
}

/// A contiguous physical address range `[base, base + size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct AddrRange {
    /// First byte of the region.
    pub base: u64,
    /// Size of the region in bytes.
    pub size: u64,
}

impl AddrRange {
    /// Creates a new address range.
    pub const fn new(base: u64, size: u64) -> Self {
        Self { base, size }
    }

    /// Returns whether an access of `width` bytes at `addr` lies fully
    /// inside this range. Accesses that would wrap the address space are
    /// never contained.
    pub fn contains(&self, addr: PhysAddr, width: AccessWidth) -> bool {
        let Some(access_end) = addr.end_of(width) else {
            return false;
        };
        let Some(range_end) = self.base.checked_add(self.size) else {
            return false;
        };
        addr.val() >= self.base && access_end <= range_end
    }
}

/// Concrete [`MemoryMap`] over configured address ranges.
///
/// Holds separate range lists for physical memory, MMIO reads, and MMIO
/// writes; a device readable and writable at the same addresses appears in
/// both MMIO lists. Suitable for any platform whose decode is expressible
/// as range containment; platforms with richer decoding implement
/// `MemoryMap` themselves.
#[derive(Clone, Debug, Default)]
pub struct RangeMap {
    phys: Vec<AddrRange>,
    mmio_read: Vec<AddrRange>,
    mmio_write: Vec<AddrRange>,
}

impl RangeMap {
    /// Creates an empty map; every access classifies as unmapped.
    pub const fn new() -> Self {
        Self {
            phys: Vec::new(),
            mmio_read: Vec::new(),
            mmio_write: Vec::new(),
        }
    }

    /// Builds a map from configuration: one physical RAM range plus the
    /// configured MMIO regions (readable and writable).
    ///
    /// # Arguments
    ///
    /// * `config` - The memory configuration to read ranges from.
    pub fn from_config(config: &MemConfig) -> Self {
        let mut map = Self::new();
        map.add_phys(AddrRange::new(config.ram_base, config.ram_size));
        for region in &config.mmio {
            map.add_mmio(*region);
        }
        map
    }

    /// Adds a physical memory range.
    pub fn add_phys(&mut self, range: AddrRange) {
        self.phys.push(range);
    }

    /// Adds an MMIO range that is both readable and writable.
    pub fn add_mmio(&mut self, range: AddrRange) {
        self.mmio_read.push(range);
        self.mmio_write.push(range);
    }

    /// Adds a read-only MMIO range.
    pub fn add_mmio_readable(&mut self, range: AddrRange) {
        self.mmio_read.push(range);
    }

    /// Adds a write-only MMIO range.
    pub fn add_mmio_writable(&mut self, range: AddrRange) {
        self.mmio_write.push(range);
    }

    fn any_contains(ranges: &[AddrRange], addr: PhysAddr, width: AccessWidth) -> bool {
        ranges.iter().any(|r| r.contains(addr, width))
    }
}

impl MemoryMap for RangeMap {
    fn within_mmio_readable(&self, addr: PhysAddr, width: AccessWidth) -> bool {
        Self::any_contains(&self.mmio_read, addr, width)
    }

    fn within_mmio_writable(&self, addr: PhysAddr, width: AccessWidth) -> bool {
        Self::any_contains(&self.mmio_write, addr, width)
    }

    fn within_phys_mem(&self, addr: PhysAddr, width: AccessWidth) -> bool {
        Self::any_contains(&self.phys, addr, width)
    }
}
