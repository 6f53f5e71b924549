use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cache::{Backed, Cache, MainMemory, MemoryLevel};
use crate::config::HierarchyConfig;
use crate::error::SimError;
use crate::stats::CacheStats;

/// Selects one of the three cache levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(alias = "icache")]
    Instruction,
    #[serde(alias = "dcache")]
    Data,
    #[serde(alias = "l2cache")]
    L2,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Instruction, Level::Data, Level::L2];

    /// Short name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Level::Instruction => "icache",
            Level::Data => "dcache",
            Level::L2 => "l2cache",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split instruction and data caches in front of a shared L2, backed by fixed-latency memory
///
/// Each hierarchy owns all of its state, so independent simulations can run side by side. Accesses
/// take `&mut self`, a host sharing one hierarchy between threads has to serialise them itself
pub struct Hierarchy {
    icache: Cache,
    dcache: Cache,
    l2cache: Cache,
    memory: MainMemory,
    config: HierarchyConfig,
}

impl Hierarchy {
    /// Validates the configuration and builds an empty hierarchy with zeroed counters
    pub fn new(config: HierarchyConfig) -> Result<Self, SimError> {
        config.validate()?;
        let offset_bits = config.offset_bits();
        for level in Level::ALL {
            let geometry = config.level(level);
            log::info!(
                "{level}: {} sets x {} ways, {} index bits, {offset_bits} offset bits, hit time {}",
                geometry.sets,
                geometry.associativity,
                geometry.index_bits(),
                geometry.hit_time
            );
        }
        if config.inclusive {
            log::warn!("inclusive L2 requested, inclusion is recorded but not enforced");
        }
        Ok(Self {
            icache: Cache::new(Level::Instruction, config.icache, offset_bits),
            dcache: Cache::new(Level::Data, config.dcache, offset_bits),
            l2cache: Cache::new(Level::L2, config.l2cache, offset_bits),
            memory: MainMemory::new(config.memory_latency),
            config,
        })
    }

    /// Fetches an instruction, returning the latency in cycles
    pub fn access_instruction(&mut self, address: u32) -> u32 {
        self.access(Level::Instruction, address)
    }

    /// Loads or stores data, returning the latency in cycles
    pub fn access_data(&mut self, address: u32) -> u32 {
        self.access(Level::Data, address)
    }

    /// Routes an access to the selected level. L1 misses go to the L2, L2 misses go to memory
    pub fn access(&mut self, level: Level, address: u32) -> u32 {
        let mut l2 = Backed::new(&mut self.l2cache, &mut self.memory);
        match level {
            Level::Instruction => self.icache.access(address, &mut l2),
            Level::Data => self.dcache.access(address, &mut l2),
            Level::L2 => l2.access(address),
        }
    }

    pub fn cache(&self, level: Level) -> &Cache {
        match level {
            Level::Instruction => &self.icache,
            Level::Data => &self.dcache,
            Level::L2 => &self.l2cache,
        }
    }

    pub fn stats(&self, level: Level) -> &CacheStats {
        self.cache(level).stats()
    }

    pub fn icache_stats(&self) -> &CacheStats {
        self.icache.stats()
    }

    pub fn dcache_stats(&self) -> &CacheStats {
        self.dcache.stats()
    }

    pub fn l2cache_stats(&self) -> &CacheStats {
        self.l2cache.stats()
    }

    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    /// Whether the L2 was configured as inclusive. This has no effect on behaviour
    pub fn is_inclusive(&self) -> bool {
        self.config.inclusive
    }

    pub fn memory_latency(&self) -> u32 {
        self.memory.latency()
    }

    /// Vacant slots per level, in the order icache, dcache, l2cache
    pub fn vacant_line_counts(&self) -> Vec<usize> {
        Level::ALL.iter().map(|level| self.cache(*level).vacant_line_count()).collect()
    }
}
