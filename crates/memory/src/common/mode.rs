//! RISC-V privilege modes.
//!
//! This module defines the privilege levels consulted by the permission
//! gate. It implements the following:
//! 1. **Mode Classification:** Definitions for User (U), Supervisor (S), and Machine (M) modes.
//! 2. **Conversion:** Mapping between numeric encodings and enum variants.
//! 3. **Observability:** Human-readable naming for diagnostics.

/// RISC-V privilege mode levels.
///
/// The pipeline treats privilege as a per-access input: the surrounding
/// simulator supplies the *effective* privilege (after any
/// modify-privilege CSR logic) with each call. Machine mode is the highest
/// privilege level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrivilegeMode {
    /// User mode (U-mode), the lowest privilege level.
    User = 0,

    /// Supervisor mode (S-mode), for operating system kernels.
    Supervisor = 1,

    /// Machine mode (M-mode), the highest privilege level.
    Machine = 3,
}

impl PrivilegeMode {
    /// Converts a `u8` value to a privilege mode.
    ///
    /// # Arguments
    ///
    /// * `val` - The numeric privilege mode value (0, 1, or 3).
    ///
    /// # Returns
    ///
    /// The corresponding `PrivilegeMode`, defaulting to `Machine` for invalid values.
    pub const fn from_u8(val: u8) -> Self {
        match val {
            0 => Self::User,
            1 => Self::Supervisor,
            _ => Self::Machine,
        }
    }

    /// Converts a privilege mode to its `u8` representation.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns the human-readable name of the privilege mode.
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Supervisor => "Supervisor",
            Self::Machine => "Machine",
        }
    }
}
