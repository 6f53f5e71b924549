mod address;
mod set;

use crate::config::{HierarchyConfig, LevelConfig};

/// Direct-mapped, 4 sets, block size 1, icache hit 1, L2 hit 10, memory 100
pub(crate) fn scenario_config() -> HierarchyConfig {
    HierarchyConfig {
        icache: LevelConfig::new(4, 1, 1),
        dcache: LevelConfig::new(4, 1, 1),
        l2cache: LevelConfig::new(4, 1, 10),
        block_size: 1,
        memory_latency: 100,
        inclusive: false,
    }
}
