//! Mock implementations of pipeline seams.
