//! Memory Map Classification Unit Tests.
//!
//! Verifies region containment, the fixed MMIO-before-physical decode
//! priority, straddle rejection, directional MMIO ranges, and the
//! disjointness precondition of the standard test map.

use physmem_core::common::{AccessWidth, PhysAddr};
use physmem_core::pipeline::{AddrRange, MemoryMap, RangeMap, Region};

use crate::common::harness::{MMIO_BASE, MMIO_SIZE, RAM_BASE, RAM_SIZE, test_map};

// ══════════════════════════════════════════════════════════
// 1. Basic classification
// ══════════════════════════════════════════════════════════

#[test]
fn interior_ram_word_is_physical() {
    let map = test_map();
    let region = map.classify_read(PhysAddr::new(0x1004), AccessWidth::WORD);
    assert_eq!(region, Region::Physical);
}

#[test]
fn interior_mmio_word_is_mmio() {
    let map = test_map();
    let region = map.classify_read(PhysAddr::new(0x3004), AccessWidth::WORD);
    assert_eq!(region, Region::Mmio);
}

#[test]
fn hole_between_regions_is_unmapped() {
    let map = test_map();
    let region = map.classify_read(PhysAddr::new(0x2800), AccessWidth::WORD);
    assert_eq!(region, Region::Unmapped);
}

#[test]
fn last_aligned_ram_word_is_physical() {
    let map = test_map();
    let region = map.classify_write(PhysAddr::new(0x1FFC), AccessWidth::WORD);
    assert_eq!(region, Region::Physical);
}

// ══════════════════════════════════════════════════════════
// 2. Straddling a region boundary is never supported
// ══════════════════════════════════════════════════════════

#[test]
fn word_straddling_ram_end_is_unmapped() {
    let map = test_map();
    // [0x2FFC, 0x3000) does not exist here, but [0x1FFE, 0x2002) straddles RAM.
    let region = map.classify_read(PhysAddr::new(0x1FFE), AccessWidth::WORD);
    assert_eq!(region, Region::Unmapped);
}

#[test]
fn word_straddling_mmio_end_is_unmapped() {
    let map = test_map();
    let region = map.classify_read(PhysAddr::new(0x300E), AccessWidth::WORD);
    assert_eq!(region, Region::Unmapped);
}

#[test]
fn byte_at_last_mmio_address_is_mmio() {
    let map = test_map();
    let region = map.classify_read(PhysAddr::new(0x300F), AccessWidth::BYTE);
    assert_eq!(region, Region::Mmio);
}

// ══════════════════════════════════════════════════════════
// 3. Decode priority: MMIO before physical memory
// ══════════════════════════════════════════════════════════

#[test]
fn overlapping_regions_decode_as_mmio() {
    // Not a legal platform map, but the decode priority must still be
    // fixed: MMIO wins.
    let mut map = RangeMap::new();
    map.add_phys(AddrRange::new(0x4000, 0x1000));
    map.add_mmio(AddrRange::new(0x4000, 0x1000));
    let region = map.classify_read(PhysAddr::new(0x4100), AccessWidth::WORD);
    assert_eq!(region, Region::Mmio);
}

// ══════════════════════════════════════════════════════════
// 4. Directional MMIO ranges
// ══════════════════════════════════════════════════════════

#[test]
fn read_only_mmio_region_is_unmapped_for_writes() {
    let mut map = RangeMap::new();
    map.add_mmio_readable(AddrRange::new(0x5000, 0x10));
    assert_eq!(
        map.classify_read(PhysAddr::new(0x5000), AccessWidth::WORD),
        Region::Mmio
    );
    assert_eq!(
        map.classify_write(PhysAddr::new(0x5000), AccessWidth::WORD),
        Region::Unmapped
    );
}

#[test]
fn write_only_mmio_region_is_unmapped_for_reads() {
    let mut map = RangeMap::new();
    map.add_mmio_writable(AddrRange::new(0x6000, 0x10));
    assert_eq!(
        map.classify_write(PhysAddr::new(0x6000), AccessWidth::WORD),
        Region::Mmio
    );
    assert_eq!(
        map.classify_read(PhysAddr::new(0x6000), AccessWidth::WORD),
        Region::Unmapped
    );
}

// ══════════════════════════════════════════════════════════
// 5. Disjointness precondition of the standard test map
// ══════════════════════════════════════════════════════════

#[test]
fn test_map_region_sets_are_disjoint() {
    let map = test_map();
    let ranges = [(RAM_BASE, RAM_SIZE), (MMIO_BASE, MMIO_SIZE)];
    for (base, size) in ranges {
        for addr in (base..base + size).step_by(4) {
            let addr = PhysAddr::new(addr);
            let phys = map.within_phys_mem(addr, AccessWidth::BYTE);
            let mmio = map.within_mmio_readable(addr, AccessWidth::BYTE)
                || map.within_mmio_writable(addr, AccessWidth::BYTE);
            assert!(
                !(phys && mmio),
                "address {addr} claimed by both region classes"
            );
        }
    }
}
