//! The generational slot table shared by the three adjacency containers.
//!
//! A `SlotTable<T>` gives out `(index, generation)` handles for inserted
//! values, reuses freed slots via an intrusive free-list, and keeps a
//! dense `live` index so `random_*`/`verts`/`edges` can sample or iterate
//! in O(1) / O(n) without scanning tombstones — the design-notes rationale
//! in spec.md §9 ("maintain a separate dense occupancy list for
//! sampling") applied directly.

use rand::{Rng, RngCore};

enum SlotState<T> {
    Occupied { value: T, live_pos: u32 },
    Free { next_free: u32 },
}

struct Slot<T> {
    generation: u32,
    state: SlotState<T>,
}

pub(crate) struct SlotTable<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    live: Vec<u32>,
}

impl<T> SlotTable<T> {
    pub(crate) fn new() -> Self {
        SlotTable {
            slots: Vec::new(),
            free_head: None,
            live: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        SlotTable {
            slots: Vec::with_capacity(cap),
            free_head: None,
            live: Vec::with_capacity(cap),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }

    /// Inserts `value`, returning its `(index, generation)` handle.
    pub(crate) fn insert(&mut self, value: T) -> (u32, u32) {
        let live_pos = self.live.len() as u32;
        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index as usize];
            self.free_head = match &slot.state {
                SlotState::Free { next_free } if *next_free != index => Some(*next_free),
                _ => None,
            };
            slot.state = SlotState::Occupied { value, live_pos };
            self.live.push(index);
            (index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                state: SlotState::Occupied { value, live_pos },
            });
            self.live.push(index);
            (index, 0)
        }
    }

    /// Looks up `index`/`generation`, returning `None` if the slot is out
    /// of range, free, or carries a different generation (a stale handle).
    pub(crate) fn get(&self, index: u32, generation: u32) -> Option<&T> {
        let slot = self.slots.get(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        match &slot.state {
            SlotState::Occupied { value, .. } => Some(value),
            SlotState::Free { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, index: u32, generation: u32) -> Option<&mut T> {
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        match &mut slot.state {
            SlotState::Occupied { value, .. } => Some(value),
            SlotState::Free { .. } => None,
        }
    }

    /// Removes the slot at `index`/`generation`, returning its value.
    /// Bumps the slot's generation so any other outstanding handle to it
    /// compares unequal from this point on.
    pub(crate) fn remove(&mut self, index: u32, generation: u32) -> Option<T> {
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        let (value, live_pos) = match core::mem::replace(
            &mut slot.state,
            SlotState::Free {
                next_free: self.free_head.unwrap_or(index),
            },
        ) {
            SlotState::Occupied { value, live_pos } => (value, live_pos),
            SlotState::Free { .. } => unreachable!("generation check already guards this"),
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = Some(index);

        // Fix up the dense `live` list with a swap-remove, then repair the
        // moved entry's recorded position.
        let last = self.live.len() - 1;
        self.live.swap_remove(live_pos as usize);
        if (live_pos as usize) < self.live.len() {
            let moved_index = self.live[live_pos as usize];
            if let SlotState::Occupied { live_pos: p, .. } =
                &mut self.slots[moved_index as usize].state
            {
                *p = live_pos;
            }
        }
        let _ = last;
        Some(value)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live.clear();
    }

    /// The dense indices of every occupied slot, in an unspecified but
    /// stable (between mutations) order.
    pub(crate) fn live_indices(&self) -> &[u32] {
        &self.live
    }

    pub(crate) fn generation_of(&self, index: u32) -> u32 {
        self.slots[index as usize].generation
    }

    /// Samples a uniformly random occupied index in O(1). `None` if
    /// empty.
    ///
    /// Uses `gen_range` rather than `next_u64() % len`, which would
    /// introduce modulo bias toward the low end of the live set.
    pub(crate) fn random_index(&self, rng: &mut dyn RngCore) -> Option<u32> {
        if self.live.is_empty() {
            return None;
        }
        let pick = rng.gen_range(0..self.live.len());
        Some(self.live[pick])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn insert_then_remove_bumps_generation() {
        let mut t: SlotTable<i32> = SlotTable::new();
        let (idx, gen0) = t.insert(10);
        assert_eq!(*t.get(idx, gen0).unwrap(), 10);
        t.remove(idx, gen0).unwrap();
        assert!(t.get(idx, gen0).is_none());

        let (idx2, gen1) = t.insert(20);
        assert_eq!(idx2, idx, "freed slot should be reused");
        assert_ne!(gen1, gen0, "reused slot must carry a new generation");
        assert!(t.get(idx, gen0).is_none(), "stale handle stays invalid");
        assert_eq!(*t.get(idx2, gen1).unwrap(), 20);
    }

    #[test]
    fn live_indices_track_swap_removal() {
        let mut t: SlotTable<&'static str> = SlotTable::new();
        let (a, ga) = t.insert("a");
        let (b, gb) = t.insert("b");
        let (c, gc) = t.insert("c");
        t.remove(a, ga).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(*t.get(b, gb).unwrap(), "b");
        assert_eq!(*t.get(c, gc).unwrap(), "c");
    }

    #[test]
    fn random_index_is_uniform_over_live_set() {
        let mut t: SlotTable<i32> = SlotTable::new();
        for i in 0..10 {
            t.insert(i);
        }
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let idx = t.random_index(&mut rng).unwrap();
            assert!((idx as usize) < 10);
        }
    }
}
