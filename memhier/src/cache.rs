use crate::address::AddressDecoder;
use crate::config::LevelConfig;
use crate::hierarchy::Level;
use crate::set::{CacheSet, Slot};
use crate::stats::CacheStats;

/// Anything a cache can forward a miss to
///
/// Implemented by main memory, which always "hits" at a fixed latency, and by a cache paired with
/// whatever sits beneath it
pub trait MemoryLevel {
    /// Accesses the line holding `address`, returning the latency in cycles
    fn access(&mut self, address: u32) -> u32;
}

/// Main memory has no structure, every access costs the same
#[derive(Debug, Clone, Copy)]
pub struct MainMemory {
    latency: u32,
}

impl MainMemory {
    pub fn new(latency: u32) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> u32 {
        self.latency
    }
}

impl MemoryLevel for MainMemory {
    fn access(&mut self, _address: u32) -> u32 {
        self.latency
    }
}

/// One set-associative cache level with LRU replacement
///
/// The lines of every set live in a single buffer of `sets * associativity` slots, set `s` owning
/// the slots `s * associativity..(s + 1) * associativity`
pub struct Cache {
    level: Level,
    geometry: LevelConfig,
    decoder: AddressDecoder,
    lines: Vec<Slot>,
    stats: CacheStats,
}

impl Cache {
    /// Creates an empty level. The geometry is expected to have been validated already
    pub fn new(level: Level, geometry: LevelConfig, offset_bits: u32) -> Self {
        let line_count = geometry.sets as usize * geometry.associativity as usize;
        Self {
            level,
            geometry,
            decoder: AddressDecoder::new(offset_bits, geometry.index_bits()),
            lines: vec![Slot::default(); line_count],
            stats: CacheStats::default(),
        }
    }

    /// Accesses `address`, forwarding a miss to `next`, and returns the total latency
    ///
    /// A hit costs the hit time. A miss costs the hit time plus whatever `next` reports, which is
    /// also added to this level's penalties
    pub fn access<N: MemoryLevel + ?Sized>(&mut self, address: u32, next: &mut N) -> u32 {
        self.stats.record_reference();
        if self.lookup(address) {
            return self.geometry.hit_time;
        }
        self.stats.record_miss();
        let penalty = next.access(address);
        self.stats.record_penalty(penalty);
        self.geometry.hit_time.saturating_add(penalty)
    }

    /// Looks the address up in its set, inserting it on a miss. Counters are left untouched
    fn lookup(&mut self, address: u32) -> bool {
        let (tag, index) = self.decoder.decode(address);
        let hit = self.set_mut(index).lookup(tag);
        if !hit {
            log::trace!("{} miss: address {address:#010x}, set {index}, tag {tag:#x}", self.level);
        }
        hit
    }

    /// Checks whether the line holding `address` is resident, without updating recency
    pub fn contains(&self, address: u32) -> bool {
        let (tag, index) = self.decoder.decode(address);
        self.set(index).iter().any(|slot| slot.tag() == Some(tag))
    }

    /// The ways of one set
    pub fn set(&self, index: u32) -> &[Slot] {
        let ways = self.geometry.associativity as usize;
        let start = index as usize * ways;
        &self.lines[start..start + ways]
    }

    fn set_mut(&mut self, index: u32) -> CacheSet<'_> {
        let ways = self.geometry.associativity as usize;
        let start = index as usize * ways;
        CacheSet::new(&mut self.lines[start..start + ways])
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn geometry(&self) -> &LevelConfig {
        &self.geometry
    }

    pub fn decoder(&self) -> &AddressDecoder {
        &self.decoder
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Gets the number of slots which have never been filled. Useful for analysing cache
    /// performance or debugging
    pub fn vacant_line_count(&self) -> usize {
        self.lines.iter().filter(|slot| !slot.is_occupied()).count()
    }
}

/// A cache together with the level it forwards misses to
pub struct Backed<'a, N: ?Sized> {
    cache: &'a mut Cache,
    next: &'a mut N,
}

impl<'a, N: MemoryLevel + ?Sized> Backed<'a, N> {
    pub fn new(cache: &'a mut Cache, next: &'a mut N) -> Self {
        Self { cache, next }
    }
}

impl<N: MemoryLevel + ?Sized> MemoryLevel for Backed<'_, N> {
    fn access(&mut self, address: u32) -> u32 {
        self.cache.access(address, &mut *self.next)
    }
}
