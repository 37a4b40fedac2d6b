//! Unit tests for the pipeline components.



/// Memory map classification and range containment.
pub mod map;


/// Permission gate enable/disable and precedence.
pub mod pmp;
