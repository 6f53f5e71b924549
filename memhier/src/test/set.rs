use std::collections::HashSet;

use crate::set::{CacheSet, Slot};

fn occupied(slots: &[Slot]) -> Vec<u32> {
    slots.iter().filter_map(|slot| slot.tag()).collect()
}

fn assert_invariants(slots: &[Slot], ways: usize) {
    let tags = occupied(slots);
    assert!(tags.len() <= ways);
    assert_eq!(tags.iter().collect::<HashSet<_>>().len(), tags.len(), "duplicate tags in {slots:?}");
    let recencies: Vec<u64> = slots.iter().filter(|slot| slot.is_occupied()).map(|slot| slot.recency()).collect();
    assert_eq!(recencies.iter().collect::<HashSet<_>>().len(), recencies.len(), "recency tie in {slots:?}");
}

#[test]
fn miss_then_hit() {
    let mut slots = vec![Slot::default(); 2];
    let mut set = CacheSet::new(&mut slots);
    assert!(!set.lookup(7));
    assert!(set.lookup(7));
    assert_eq!(occupied(set.slots()), vec![7]);
}

#[test]
fn fills_empty_ways_lowest_first() {
    let mut slots = vec![Slot::default(); 4];
    let mut set = CacheSet::new(&mut slots);
    for tag in [10, 20, 30] {
        assert!(!set.lookup(tag));
    }
    assert_eq!(set.slots()[0].tag(), Some(10));
    assert_eq!(set.slots()[1].tag(), Some(20));
    assert_eq!(set.slots()[2].tag(), Some(30));
    assert_eq!(set.slots()[3].tag(), None);
}

#[test]
fn insert_into_a_set_with_room_never_evicts() {
    let mut slots = vec![Slot::default(); 4];
    let mut set = CacheSet::new(&mut slots);
    set.lookup(1);
    set.lookup(2);
    // Make way 1 the least recently used, it still must not be chosen while a way is empty
    set.lookup(1);
    let way = set.insert(3);
    assert_eq!(way, 2);
    assert_eq!(occupied(set.slots()), vec![1, 2, 3]);
}

#[test]
fn insert_leaves_recency_to_the_caller() {
    let mut slots = vec![Slot::default(); 2];
    let mut set = CacheSet::new(&mut slots);
    set.lookup(1);
    set.lookup(2);
    set.lookup(2);
    set.lookup(2);
    let way = set.insert(3);
    assert_eq!(way, 0);
    assert_eq!(set.slots()[0].recency(), 3);
    set.touch(way);
    assert_eq!(set.slots()[0].recency(), 0);
    assert_eq!(set.slots()[1].recency(), 1);
}

#[test]
fn hit_makes_the_way_most_recent_and_ages_the_others() {
    let mut slots = vec![Slot::default(); 3];
    let mut set = CacheSet::new(&mut slots);
    set.lookup(1);
    set.lookup(2);
    set.lookup(3);
    assert!(set.lookup(1));
    let recency: Vec<u64> = set.slots().iter().map(|slot| slot.recency()).collect();
    assert_eq!(recency, vec![0, 2, 1]);
}

#[test]
fn strict_lru_evicts_the_oldest_tag() {
    for ways in 1..=8usize {
        let mut slots = vec![Slot::default(); ways];
        let mut set = CacheSet::new(&mut slots);
        for tag in 0..=ways as u32 {
            assert!(!set.lookup(tag));
        }
        let tags = occupied(set.slots());
        assert!(!tags.contains(&0), "{ways} ways: first tag survived");
        for tag in 1..=ways as u32 {
            assert!(tags.contains(&tag));
        }
        assert!(!set.lookup(0));
        if ways > 1 {
            // Re-inserting 0 evicted 1, the rest are still resident
            for tag in 2..=ways as u32 {
                assert!(set.lookup(tag), "{ways} ways: tag {tag} should hit");
            }
        }
    }
}

#[test]
fn lru_respects_reuse() {
    let mut slots = vec![Slot::default(); 2];
    let mut set = CacheSet::new(&mut slots);
    set.lookup(1);
    set.lookup(2);
    set.lookup(1);
    // 2 is now the least recently used
    assert!(!set.lookup(3));
    assert_eq!(occupied(set.slots()), vec![1, 3]);
}

#[test]
fn invariants_hold_for_long_sequences() {
    for ways in [1usize, 2, 3, 4, 8] {
        let mut slots = vec![Slot::default(); ways];
        let mut set = CacheSet::new(&mut slots);
        // Deterministic pseudo-random tags from a small pool
        let mut state = 0x2545_f491u32;
        for _ in 0..2_000 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            set.lookup(state % 11);
            assert_invariants(set.slots(), ways);
        }
    }
}
