//! # MemHier
//!
//! MemHier simulates the timing of a two-level cache hierarchy: split instruction and data caches
//! in front of a shared L2, backed by main memory with a fixed latency
//!
//! Only tags and replacement state are tracked, data values are never stored. Each access returns
//! its latency in cycles, and every level keeps counters for references, misses, and the penalty
//! cycles charged by the level beneath it

/// Contains the decoder splitting addresses into tags and set indices
pub mod address;

/// Contains a single cache level, and the trait for anything a miss can be forwarded to
pub mod cache;

/// Contains definitions for the JSON configuration format
pub mod config;

pub mod error;

/// Contains the hierarchy controller routing accesses between levels
pub mod hierarchy;

pub mod io;

/// Contains the set view and its LRU replacement
pub mod set;

/// Contains the simulator feeding traces into a hierarchy, and the report it produces
pub mod simulator;

pub mod stats;

/// Contains the trace record format
pub mod trace;

#[cfg(test)]
mod test;

pub use config::{HierarchyConfig, LevelConfig};
pub use error::{GeometryError, SimError};
pub use hierarchy::{Hierarchy, Level};
pub use simulator::{SimulationReport, Simulator};
