//! Atomicity and ordering kind resolution.
//!
//! This module maps the raw `(acquire, release, reservation)` flag triple
//! onto the closed set of backend-facing access kinds. The mapping is
//! total over all eight combinations per direction but intentionally
//! partial in meaning: reads have no semantics for release-without-acquire
//! and writes have no semantics for acquire-without-release. Those
//! combinations resolve to `None` and the dispatcher surfaces them as a
//! distinguished unsupported-operation error, never as a downgraded kind.
//!
//! The asymmetry between the two rejected pairs reproduces the underlying
//! memory-ordering model and must not be "fixed".

use crate::common::OrderingFlags;

/// Resolved atomicity/ordering classification of a read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadKind {
    /// Plain load, no ordering constraint.
    Plain,
    /// Load with acquire ordering (`aq`).
    Acquire,
    /// Load with acquire and release ordering (`aq.rl`).
    StrongAcquire,
    /// Load-reserved without ordering constraint.
    Reserved,
    /// Load-reserved with acquire ordering.
    ReservedAcquire,
    /// Load-reserved with acquire and release ordering.
    ReservedStrongAcquire,
}

/// Resolved atomicity/ordering classification of a write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteKind {
    /// Plain store, no ordering constraint.
    Plain,
    /// Store with release ordering (`rl`).
    Release,
    /// Store with acquire and release ordering (`aq.rl`).
    StrongRelease,
    /// Store-conditional without ordering constraint.
    Conditional,
    /// Store-conditional with release ordering.
    ConditionalRelease,
    /// Store-conditional with acquire and release ordering.
    ConditionalStrongRelease,
}

impl ReadKind {
    /// Resolves raw ordering flags to a read kind.
    ///
    /// # Arguments
    ///
    /// * `flags` - The raw `(acquire, release, reservation)` triple.
    ///
    /// # Returns
    ///
    /// `Some(kind)` for the six defined combinations; `None` for the two
    /// release-without-acquire combinations, which reads do not support.
    pub const fn resolve(flags: OrderingFlags) -> Option<Self> {
        match (flags.acquire, flags.release, flags.reservation) {
            (false, false, false) => Some(Self::Plain),
            (true, false, false) => Some(Self::Acquire),
            (true, true, false) => Some(Self::StrongAcquire),
            (false, false, true) => Some(Self::Reserved),
            (true, false, true) => Some(Self::ReservedAcquire),
            (true, true, true) => Some(Self::ReservedStrongAcquire),
            // Release without acquire has no read semantics.
            (false, true, _) => None,
        }
    }
}

impl WriteKind {
    /// Resolves raw ordering flags to a write kind.
    ///
    /// # Arguments
    ///
    /// * `flags` - The raw `(acquire, release, reservation)` triple.
    ///
    /// # Returns
    ///
    /// `Some(kind)` for the six defined combinations; `None` for the two
    /// acquire-without-release combinations, which writes do not support.
    pub const fn resolve(flags: OrderingFlags) -> Option<Self> {
        match (flags.acquire, flags.release, flags.reservation) {
            (false, false, false) => Some(Self::Plain),
            (false, true, false) => Some(Self::Release),
            (true, true, false) => Some(Self::StrongRelease),
            (false, false, true) => Some(Self::Conditional),
            (false, true, true) => Some(Self::ConditionalRelease),
            (true, true, true) => Some(Self::ConditionalStrongRelease),
            // Acquire without release has no write semantics.
            (true, false, _) => None,
        }
    }
}
