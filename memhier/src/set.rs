/// A single way of a set. Only the tag is modelled, data values are never stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slot {
    tag: Option<u32>,
    /// 0 is the most recently used, larger values are older
    recency: u64,
}

impl Slot {
    pub fn tag(&self) -> Option<u32> {
        self.tag
    }

    pub fn recency(&self) -> u64 {
        self.recency
    }

    pub fn is_occupied(&self) -> bool {
        self.tag.is_some()
    }
}

/// A mutable view over the ways of one set, borrowed from the level's contiguous line buffer
///
/// Replacement is strict LRU. Empty ways are always filled, lowest index first, before anything
/// is evicted, and evictions are silent
pub struct CacheSet<'a> {
    slots: &'a mut [Slot],
}

impl<'a> CacheSet<'a> {
    pub fn new(slots: &'a mut [Slot]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &*self.slots
    }

    /// Looks up a tag, returning true on a hit and false on a miss
    ///
    /// On a miss the tag is inserted. Either way the way holding the tag becomes the most
    /// recently used and every other occupied way ages by one
    pub fn lookup(&mut self, tag: u32) -> bool {
        match self.find(tag) {
            Some(way) => {
                self.touch(way);
                true
            }
            None => {
                let way = self.insert(tag);
                self.touch(way);
                false
            }
        }
    }

    /// Places a tag into the set, returning the way it was placed in
    ///
    /// The victim's recency is left alone, callers follow up with [`CacheSet::touch`]
    pub fn insert(&mut self, tag: u32) -> usize {
        let way = self.victim();
        if let Some(evicted) = self.slots[way].tag {
            log::trace!("evicting tag {evicted:#x} from way {way} for tag {tag:#x}");
        }
        self.slots[way].tag = Some(tag);
        way
    }

    /// Marks a way as the most recently used, ageing every other occupied way
    pub fn touch(&mut self, way: usize) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if index == way {
                slot.recency = 0;
            } else if slot.is_occupied() {
                slot.recency += 1;
            }
        }
    }

    fn find(&self, tag: u32) -> Option<usize> {
        self.slots.iter().position(|slot| slot.tag == Some(tag))
    }

    /// The first empty way, otherwise the first way with the largest recency
    fn victim(&self) -> usize {
        if let Some(way) = self.slots.iter().position(|slot| !slot.is_occupied()) {
            return way;
        }
        let mut victim = 0;
        let mut oldest = 0;
        // Strictly greater keeps the lowest index on ties
        for (way, slot) in self.slots.iter().enumerate() {
            if way == 0 || slot.recency > oldest {
                victim = way;
                oldest = slot.recency;
            }
        }
        victim
    }
}
