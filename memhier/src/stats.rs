use serde::{Deserialize, Serialize};

/// The running counters of one cache level. They only ever grow during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    references: u64,
    misses: u64,
    penalties: u64,
}

impl CacheStats {
    pub fn references(&self) -> u64 {
        self.references
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Sum of the latencies returned by the next level down for every miss
    pub fn penalties(&self) -> u64 {
        self.penalties
    }

    pub(crate) fn record_reference(&mut self) {
        self.references += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_penalty(&mut self, penalty: u32) {
        self.penalties += penalty as u64;
    }

    /// Fraction of references which missed, 0 if the level was never referenced
    pub fn miss_rate(&self) -> f64 {
        if self.references == 0 {
            return 0.0;
        }
        self.misses as f64 / self.references as f64
    }

    /// Average cycles per reference: the hit time plus the mean miss penalty per reference
    pub fn average_access_time(&self, hit_time: u32) -> f64 {
        if self.references == 0 {
            return 0.0;
        }
        hit_time as f64 + self.penalties as f64 / self.references as f64
    }
}
