//! Physical memory protection seam.
//!
//! This module defines the permission-check layer consulted before any
//! routing occurs. The platform owns the actual protection state (PMP
//! entry registers, matching modes, lock bits); the pipeline only holds
//! the seam: a policy object plus an enable flag in configuration. When a
//! policy rejects an access, the resulting fault pre-empts classification
//! and dispatch entirely, so the backend is never invoked.

use crate::common::{AccessType, AccessWidth, Fault, PhysAddr, PrivilegeMode};

/// Platform permission policy consulted by the dispatcher.
///
/// Implemented by the surrounding simulator over its protection state.
/// `check` evaluates the platform rules for the effective privilege level
/// and access type; returning `Some(fault)` rejects the access before any
/// routing happens. The returned fault is typically the access fault
/// matching the access type ([`Fault::access_for`]) or
/// [`Fault::PermissionViolation`].
pub trait PmpPolicy {
    /// Checks whether an access is permitted.
    ///
    /// # Arguments
    ///
    /// * `addr` - Physical address of the access.
    /// * `width` - Access width in bytes.
    /// * `access` - The access type, including its extended purpose.
    /// * `privilege` - Effective privilege level of the access.
    ///
    /// # Returns
    ///
    /// `None` to permit the access, or `Some(fault)` to reject it.
    fn check(
        &self,
        addr: PhysAddr,
        width: AccessWidth,
        access: AccessType,
        privilege: PrivilegeMode,
    ) -> Option<Fault>;
}

/// Policy that permits every access.
///
/// Equivalent to a platform with no PMP entries configured; useful as a
/// placeholder while the enable flag is driven by configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl PmpPolicy for AllowAll {
    fn check(
        &self,
        _addr: PhysAddr,
        _width: AccessWidth,
        _access: AccessType,
        _privilege: PrivilegeMode,
    ) -> Option<Fault> {
        None
    }
}
