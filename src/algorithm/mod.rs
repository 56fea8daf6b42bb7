//! The recursive generation algorithm

/// Recursive lattice expansion in four directions
pub mod expansion;
/// World generation orchestration
pub mod executor;
/// Drawing a single plus shape via recursive row construction
pub mod plus;
/// Seeded random tile selection
pub mod selection;
