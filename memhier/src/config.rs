use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, SimError};
use crate::hierarchy::Level;

/// Geometry and timing of a single cache level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub sets: u32,
    #[serde(alias = "assoc")]
    pub associativity: u32,
    #[serde(alias = "hit")]
    pub hit_time: u32,
}

impl LevelConfig {
    pub fn new(sets: u32, associativity: u32, hit_time: u32) -> Self {
        Self { sets, associativity, hit_time }
    }

    /// Checks the geometry, reporting the first problem found
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.sets == 0 {
            return Err(GeometryError::ZeroSets);
        }
        if self.associativity == 0 {
            return Err(GeometryError::ZeroAssociativity);
        }
        if !self.sets.is_power_of_two() {
            return Err(GeometryError::SetsNotPowerOfTwo(self.sets));
        }
        Ok(())
    }

    /// Number of address bits used to select a set
    pub fn index_bits(&self) -> u32 {
        self.sets.checked_ilog2().unwrap_or(0)
    }
}

/// The full configuration of a split-L1 / shared-L2 hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyConfig {
    pub icache: LevelConfig,
    pub dcache: LevelConfig,
    pub l2cache: LevelConfig,
    /// Block size in bytes, shared by every level
    #[serde(alias = "blocksize")]
    pub block_size: u32,
    /// Fixed latency of main memory, charged on every L2 miss
    #[serde(alias = "memspeed")]
    pub memory_latency: u32,
    /// Recorded but not enforced, the L2 never back-invalidates the L1s
    #[serde(default)]
    pub inclusive: bool,
}

impl HierarchyConfig {
    /// Parses a configuration from JSON, without validating the geometry
    pub fn from_json(input: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn level(&self, level: Level) -> &LevelConfig {
        match level {
            Level::Instruction => &self.icache,
            Level::Data => &self.dcache,
            Level::L2 => &self.l2cache,
        }
    }

    /// Validates every level in the order icache, dcache, l2cache
    pub fn validate(&self) -> Result<(), SimError> {
        for level in Level::ALL {
            self.level(level)
                .validate()
                .map_err(|reason| SimError::InvalidGeometry { level, reason })?;
        }
        Ok(())
    }

    /// Number of block offset bits. Degenerate block sizes of 0 or 1 have none
    pub fn offset_bits(&self) -> u32 {
        self.block_size.checked_ilog2().unwrap_or(0)
    }
}
