//! Permission Gate Unit Tests.
//!
//! Verifies the enable flag (disabled gate is a no-op), privilege
//! sensitivity, and the precedence property: a gate fault pre-empts
//! classification and dispatch entirely, so the backend is never invoked.

use physmem_core::MemoryPipeline;
use physmem_core::common::{
    AccessType, AccessWidth, Fault, MemContext, MemError, Meta, OrderingFlags, PhysAddr,
    PrivilegeMode,
};
use physmem_core::pipeline::AllowAll;

use crate::common::harness::{DenyUserAbove, TestBus, test_config, test_map};
use crate::common::mocks::backend::MockBus;

fn gated_pipeline(enable_pmp: bool) -> MemoryPipeline {
    let mut config = test_config();
    config.enable_pmp = enable_pmp;
    MemoryPipeline::new(config, Box::new(test_map()))
        .with_pmp(Box::new(DenyUserAbove { cutoff: 0 }))
}

// ══════════════════════════════════════════════════════════
// 1. Disabled gate is a no-op
// ══════════════════════════════════════════════════════════

#[test]
fn disabled_gate_ignores_attached_policy() {
    let mut pipeline = gated_pipeline(false);
    let mut bus = TestBus::new();
    let result = pipeline.read(
        &mut bus,
        AccessType::Read(MemContext::Data),
        PhysAddr::new(0x1004),
        AccessWidth::WORD,
        OrderingFlags::RELAXED,
        PrivilegeMode::User,
    );
    assert_eq!(result, Ok(0));
}

#[test]
fn enabled_gate_without_policy_is_permissive() {
    let mut config = test_config();
    config.enable_pmp = true;
    let mut pipeline = MemoryPipeline::new(config, Box::new(test_map()));
    let mut bus = TestBus::new();
    let result = pipeline.read(
        &mut bus,
        AccessType::Read(MemContext::Data),
        PhysAddr::new(0x1004),
        AccessWidth::WORD,
        OrderingFlags::RELAXED,
        PrivilegeMode::User,
    );
    assert_eq!(result, Ok(0));
}

// ══════════════════════════════════════════════════════════
// 2. Privilege sensitivity
// ══════════════════════════════════════════════════════════

#[test]
fn user_mode_access_is_rejected() {
    let mut pipeline = gated_pipeline(true);
    let mut bus = TestBus::new();
    let result = pipeline.read(
        &mut bus,
        AccessType::Read(MemContext::Data),
        PhysAddr::new(0x1004),
        AccessWidth::WORD,
        OrderingFlags::RELAXED,
        PrivilegeMode::from_u8(0),
    );
    assert_eq!(
        result,
        Err(MemError::Fault(Fault::PermissionViolation(PhysAddr::new(
            0x1004
        ))))
    );
}

#[test]
fn machine_mode_access_is_permitted() {
    let mut pipeline = gated_pipeline(true);
    let mut bus = TestBus::new();
    let result = pipeline.read(
        &mut bus,
        AccessType::Read(MemContext::Data),
        PhysAddr::new(0x1004),
        AccessWidth::WORD,
        OrderingFlags::RELAXED,
        PrivilegeMode::Machine,
    );
    assert_eq!(result, Ok(0));
}

#[test]
fn allow_all_policy_permits_user_mode() {
    let mut config = test_config();
    config.enable_pmp = true;
    let mut pipeline =
        MemoryPipeline::new(config, Box::new(test_map())).with_pmp(Box::new(AllowAll));
    let mut bus = TestBus::new();
    let result = pipeline.read(
        &mut bus,
        AccessType::Read(MemContext::Data),
        PhysAddr::new(0x1004),
        AccessWidth::WORD,
        OrderingFlags::RELAXED,
        PrivilegeMode::User,
    );
    assert_eq!(result, Ok(0));
}

// ══════════════════════════════════════════════════════════
// 3. Precedence: the backend is never invoked under a gate fault
// ══════════════════════════════════════════════════════════

#[test]
fn gate_fault_preempts_backend_read() {
    let mut pipeline = gated_pipeline(true);
    // No expectations: any backend call panics the test.
    let mut bus = MockBus::new();
    let result = pipeline.read_with_meta(
        &mut bus,
        AccessType::Read(MemContext::Data),
        PhysAddr::new(0x1004),
        AccessWidth::WORD,
        OrderingFlags::RELAXED,
        PrivilegeMode::User,
    );
    assert_eq!(
        result,
        Err(MemError::Fault(Fault::PermissionViolation(PhysAddr::new(
            0x1004
        ))))
    );
}

#[test]
fn gate_fault_preempts_backend_write() {
    let mut pipeline = gated_pipeline(true);
    let mut bus = MockBus::new();
    let result = pipeline.write_with_meta(
        &mut bus,
        AccessType::Write(MemContext::Data),
        PhysAddr::new(0x1004),
        AccessWidth::WORD,
        0xDEAD_BEEF,
        Meta::DEFAULT,
        OrderingFlags::RELAXED,
        PrivilegeMode::Supervisor,
    );
    assert_eq!(
        result,
        Err(MemError::Fault(Fault::PermissionViolation(PhysAddr::new(
            0x1004
        ))))
    );
}

#[test]
fn gate_fault_takes_precedence_over_unmapped() {
    // An unmapped address would fault as a load access fault, but the
    // gate's own fault must win because it runs first.
    let mut pipeline = gated_pipeline(true);
    let mut bus = MockBus::new();
    let result = pipeline.read(
        &mut bus,
        AccessType::Read(MemContext::Data),
        PhysAddr::new(0x9000),
        AccessWidth::WORD,
        OrderingFlags::RELAXED,
        PrivilegeMode::User,
    );
    assert_eq!(
        result,
        Err(MemError::Fault(Fault::PermissionViolation(PhysAddr::new(
            0x9000
        ))))
    );
}
