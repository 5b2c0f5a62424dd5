//! Generation-counted handles over index identity
//!
//! [`World`] identifies bodies by index, and an index changes whenever a
//! swap-remove moves a body. [`BodyHandles`] keeps a stable
//! [`BodyHandle`] per body and follows those moves, as long as every add
//! and remove on the world goes through it.

use serde::{Deserialize, Serialize};

use crate::body::{BodyDesc, RigidBody};
use crate::error::Result;
use crate::world::World;

/// Stable reference to a body tracked by [`BodyHandles`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle {
    slot: u32,
    generation: u32,
}

impl BodyHandle {
    #[inline]
    pub fn slot(&self) -> u32 {
        self.slot
    }

    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Maps stable handles to current world indices
#[derive(Debug, Clone, Default)]
pub struct BodyHandles {
    /// Generation per slot, bumped when the slot is freed
    generations: Vec<u32>,
    /// Current world index per slot, `None` once freed
    slot_to_index: Vec<Option<usize>>,
    /// Slot per world index, mirrors the world's ordering
    index_to_slot: Vec<u32>,
    free_list: Vec<u32>,
}

impl BodyHandles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue handles for every body already in `world`, in index order
    pub fn from_world(world: &World) -> Self {
        let mut handles = Self::new();
        for index in 0..world.count() {
            handles.track(index);
        }
        handles
    }

    /// Add a body to `world` and return its handle
    pub fn add(&mut self, world: &mut World, desc: BodyDesc) -> Result<BodyHandle> {
        let index = world.add_body(desc)?;
        Ok(self.track(index))
    }

    /// Remove the body behind `handle` from `world`.
    ///
    /// Returns the removed body, or `None` if the handle is stale. The
    /// handle of the body moved into the freed index keeps resolving.
    pub fn remove(&mut self, world: &mut World, handle: BodyHandle) -> Result<Option<RigidBody>> {
        let Some(index) = self.index(handle) else {
            return Ok(None);
        };
        let body = world.get(index)?;
        let moved = world.remove(index)?;

        self.index_to_slot.swap_remove(index);
        if let Some(slot) = moved.and_then(|i| self.index_to_slot.get(i).copied()) {
            self.slot_to_index[slot as usize] = Some(index);
        }

        let slot = handle.slot as usize;
        self.slot_to_index[slot] = None;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.free_list.push(handle.slot);
        Ok(Some(body))
    }

    /// Current world index of `handle`, `None` if stale
    pub fn index(&self, handle: BodyHandle) -> Option<usize> {
        let slot = handle.slot as usize;
        if self.generations.get(slot) != Some(&handle.generation) {
            return None;
        }
        self.slot_to_index.get(slot).copied().flatten()
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.index(handle).is_some()
    }

    /// Handle of the body currently at `index`
    pub fn handle_at(&self, index: usize) -> Option<BodyHandle> {
        let slot = *self.index_to_slot.get(index)?;
        Some(BodyHandle {
            slot,
            generation: self.generations[slot as usize],
        })
    }

    /// Borrow the body behind `handle`
    pub fn get<'w>(&self, world: &'w World, handle: BodyHandle) -> Option<&'w RigidBody> {
        world.body(self.index(handle)?).ok()
    }

    /// Number of live handles
    pub fn len(&self) -> usize {
        self.index_to_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_slot.is_empty()
    }

    fn track(&mut self, index: usize) -> BodyHandle {
        debug_assert_eq!(index, self.index_to_slot.len());
        let slot = match self.free_list.pop() {
            Some(slot) => slot,
            None => {
                self.generations.push(0);
                self.slot_to_index.push(None);
                (self.generations.len() - 1) as u32
            }
        };
        self.slot_to_index[slot as usize] = Some(index);
        self.index_to_slot.push(slot);
        BodyHandle {
            slot,
            generation: self.generations[slot as usize],
        }
    }
}
