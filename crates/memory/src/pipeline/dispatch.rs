//! Access dispatcher and public entry points.
//!
//! This module implements the pipeline that turns an in-flight load,
//! store, or atomic operation into a validated result or a classified
//! fault. Each access runs to completion in a fixed sequence:
//! 1. **Alignment:** Required only when the ordering flags demand it.
//! 2. **Kind Resolution:** Raw flags become a read/write kind or the
//!    distinguished unsupported-ordering error.
//! 3. **Permission Gate:** An enabled policy fault pre-empts all routing.
//! 4. **Routing:** MMIO or physical backend per the map, with access
//!    faults synthesized for unmapped targets.
//! 5. **Observation:** Gated debug logging and the optional trace sink,
//!    on success only.

use std::fmt;

use tracing::debug;

use crate::common::{
    AccessDirection, AccessType, AccessWidth, Fault, MemError, MemResult, Meta, OrderingFlags,
    PhysAddr, PrivilegeMode,
};
use crate::config::MemConfig;

use super::backend::Backend;
use super::map::{MemoryMap, Region};
use super::ordering::{ReadKind, WriteKind};
use super::pmp::PmpPolicy;
use super::trace::TraceSink;

/// The physical memory access pipeline.
///
/// Holds the platform memory map, the optional permission policy, the
/// optional trace sink, and configuration. The storage backend stays with
/// the surrounding simulator and is lent to each call, so the pipeline
/// itself carries no storage state; the map and policy are treated as
/// immutable for the duration of each access.
pub struct MemoryPipeline {
    map: Box<dyn MemoryMap>,
    pmp: Option<Box<dyn PmpPolicy>>,
    sink: Option<Box<dyn TraceSink>>,
    config: MemConfig,
}

impl fmt::Debug for MemoryPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryPipeline")
            .field("config", &self.config)
            .field("pmp", &self.pmp.is_some())
            .field("sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl MemoryPipeline {
    /// Creates a pipeline over the given map and configuration, with no
    /// permission policy and no trace sink.
    ///
    /// # Arguments
    ///
    /// * `config` - Pipeline configuration (gate enable, access logging).
    /// * `map` - The platform memory map.
    pub fn new(config: MemConfig, map: Box<dyn MemoryMap>) -> Self {
        Self {
            map,
            pmp: None,
            sink: None,
            config,
        }
    }

    /// Attaches a permission policy.
    ///
    /// The policy is only consulted while `enable_pmp` is set in the
    /// configuration; with the flag clear the gate stays a no-op.
    #[must_use]
    pub fn with_pmp(mut self, policy: Box<dyn PmpPolicy>) -> Self {
        self.pmp = Some(policy);
        self
    }

    /// Attaches a verification trace sink.
    #[must_use]
    pub fn with_trace_sink(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &MemConfig {
        &self.config
    }

    /// Reads memory, discarding tag metadata.
    ///
    /// Equivalent to [`read_with_meta`](Self::read_with_meta) with the
    /// metadata dropped; backends may skip the tag lookup.
    ///
    /// # Errors
    ///
    /// Returns the faults and unsupported-ordering conditions described
    /// in [`read_with_meta`](Self::read_with_meta).
    pub fn read(
        &mut self,
        bus: &mut dyn Backend,
        access: AccessType,
        addr: PhysAddr,
        width: AccessWidth,
        flags: OrderingFlags,
        privilege: PrivilegeMode,
    ) -> MemResult<u64> {
        self.read_impl(bus, access, addr, width, flags, privilege, false)
            .map(|(value, _)| value)
    }

    /// Reads memory together with its tag metadata.
    ///
    /// MMIO reads carry [`Meta::DEFAULT`]; physical reads return whatever
    /// the backend stored alongside the data.
    ///
    /// # Errors
    ///
    /// * [`Fault::LoadAddressMisaligned`] when acquire or reservation is
    ///   set and the address is not a multiple of the width.
    /// * [`MemError::UnsupportedOrdering`] for release-without-acquire.
    /// * The permission policy's fault when the enabled gate rejects.
    /// * The access fault matching `access` when the address is unmapped
    ///   or the backend cannot honor the resolved kind.
    pub fn read_with_meta(
        &mut self,
        bus: &mut dyn Backend,
        access: AccessType,
        addr: PhysAddr,
        width: AccessWidth,
        flags: OrderingFlags,
        privilege: PrivilegeMode,
    ) -> MemResult<(u64, Meta)> {
        self.read_impl(bus, access, addr, width, flags, privilege, true)
    }

    fn read_impl(
        &mut self,
        bus: &mut dyn Backend,
        access: AccessType,
        addr: PhysAddr,
        width: AccessWidth,
        flags: OrderingFlags,
        privilege: PrivilegeMode,
        want_meta: bool,
    ) -> MemResult<(u64, Meta)> {
        // Alignment matters only to acquire/reservation semantics; plain
        // misaligned loads are legal here.
        if (flags.acquire || flags.reservation) && !addr.is_aligned(width) {
            return Err(Fault::misaligned_for(AccessDirection::Read, addr).into());
        }

        let kind = ReadKind::resolve(flags).ok_or(MemError::UnsupportedOrdering {
            direction: AccessDirection::Read,
            flags,
        })?;

        self.check_permission(addr, width, access, privilege)?;

        let (value, meta) = match self.map.classify_read(addr, width) {
            Region::Mmio => (bus.mmio_read(addr, width), Meta::DEFAULT),
            Region::Physical => bus
                .read_raw(kind, addr, width, want_meta)
                .ok_or_else(|| MemError::from(Fault::access_for(access, addr)))?,
            Region::Unmapped => return Err(Fault::access_for(access, addr).into()),
        };

        if self.config.trace_accesses {
            debug!("mem[{kind:?},{addr}] -> {value:#x} ({width} bytes)");
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.trace_read(addr, width, value);
        }

        Ok((value, meta))
    }

    /// Announces the effective address of an upcoming write.
    ///
    /// Runs before store data exists: alignment (for release/conditional
    /// semantics), kind resolution, and classification only. The
    /// permission gate and backend run when the value is written.
    ///
    /// # Errors
    ///
    /// * [`Fault::StoreAmoAddressMisaligned`] when release or reservation
    ///   is set and the address is not a multiple of the width.
    /// * [`MemError::UnsupportedOrdering`] for acquire-without-release.
    /// * [`Fault::StoreAmoAccess`] when no writable region claims the
    ///   access.
    pub fn write_ea(
        &mut self,
        addr: PhysAddr,
        width: AccessWidth,
        flags: OrderingFlags,
    ) -> MemResult<()> {
        if (flags.release || flags.reservation) && !addr.is_aligned(width) {
            return Err(Fault::misaligned_for(AccessDirection::Write, addr).into());
        }

        if WriteKind::resolve(flags).is_none() {
            return Err(MemError::UnsupportedOrdering {
                direction: AccessDirection::Write,
                flags,
            });
        }

        match self.map.classify_write(addr, width) {
            Region::Mmio | Region::Physical => Ok(()),
            Region::Unmapped => Err(Fault::StoreAmoAccess(addr).into()),
        }
    }

    /// Writes memory with explicit tag metadata.
    ///
    /// # Arguments
    ///
    /// * `bus` - Storage backend lent by the surrounding simulator.
    /// * `access` - Write access type with its full extended purpose.
    /// * `addr` - Physical address of the write.
    /// * `width` - Access width in bytes.
    /// * `value` - Data payload (low `width` bytes significant).
    /// * `meta` - Tag metadata to store with the data.
    /// * `flags` - Raw ordering flags.
    /// * `privilege` - Effective privilege level.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when the write took effect, `Ok(false)` for a failed
    /// store-conditional.
    ///
    /// # Errors
    ///
    /// * [`Fault::StoreAmoAddressMisaligned`] when release or reservation
    ///   is set and the address is not a multiple of the width.
    /// * [`MemError::UnsupportedOrdering`] for acquire-without-release.
    /// * The permission policy's fault when the enabled gate rejects.
    /// * The access fault matching `access` when the address is unmapped.
    pub fn write_with_meta(
        &mut self,
        bus: &mut dyn Backend,
        access: AccessType,
        addr: PhysAddr,
        width: AccessWidth,
        value: u64,
        meta: Meta,
        flags: OrderingFlags,
        privilege: PrivilegeMode,
    ) -> MemResult<bool> {
        if (flags.release || flags.reservation) && !addr.is_aligned(width) {
            return Err(Fault::misaligned_for(AccessDirection::Write, addr).into());
        }

        let kind = WriteKind::resolve(flags).ok_or(MemError::UnsupportedOrdering {
            direction: AccessDirection::Write,
            flags,
        })?;

        self.check_permission(addr, width, access, privilege)?;

        let performed = match self.map.classify_write(addr, width) {
            Region::Mmio => {
                // Devices carry no tag storage; metadata stops here.
                bus.mmio_write(addr, width, value);
                true
            }
            Region::Physical => bus.write_raw(kind, addr, width, value, meta),
            Region::Unmapped => return Err(Fault::access_for(access, addr).into()),
        };

        if performed {
            if self.config.trace_accesses {
                debug!("mem[{kind:?},{addr}] <- {value:#x} ({width} bytes)");
            }
            if let Some(sink) = self.sink.as_mut() {
                sink.trace_write(addr, width, value);
            }
        }

        Ok(performed)
    }

    /// Writes memory with the platform default metadata.
    ///
    /// Observably identical to [`write_with_meta`](Self::write_with_meta)
    /// called with [`Meta::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns the faults and unsupported-ordering conditions described
    /// in [`write_with_meta`](Self::write_with_meta).
    pub fn write(
        &mut self,
        bus: &mut dyn Backend,
        access: AccessType,
        addr: PhysAddr,
        width: AccessWidth,
        value: u64,
        flags: OrderingFlags,
        privilege: PrivilegeMode,
    ) -> MemResult<bool> {
        self.write_with_meta(
            bus,
            access,
            addr,
            width,
            value,
            Meta::DEFAULT,
            flags,
            privilege,
        )
    }

    /// Consults the permission gate: a no-op unless `enable_pmp` is set
    /// and a policy is attached. A policy fault pre-empts classification
    /// and dispatch.
    fn check_permission(
        &self,
        addr: PhysAddr,
        width: AccessWidth,
        access: AccessType,
        privilege: PrivilegeMode,
    ) -> MemResult<()> {
        if !self.config.enable_pmp {
            return Ok(());
        }
        match self.pmp.as_ref().and_then(|p| p.check(addr, width, access, privilege)) {
            Some(fault) => Err(fault.into()),
            None => Ok(()),
        }
    }
}
