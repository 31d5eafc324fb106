use std::fmt::Debug;
use num_traits::Float;

use crate::{Error, Result};

/// Marker stored in `positions` for nodes that do not occupy a slot
const ABSENT: usize = usize::MAX;

/// A node id paired with its current priority, stored in a heap slot
#[derive(Debug, Clone, Copy)]
struct Entry<P> {
    node: usize,
    priority: P,
}

/// Fixed-capacity binary min-heap over node ids with O(log n) decrease-priority.
///
/// Node ids are dense indices in `0..capacity`. The heap keeps its own table
/// mapping every node id to the slot it currently occupies, so a resident
/// node can be repositioned without scanning the slots.
///
/// The heap is loaded once and then drained: after the first call to
/// [`extract_min`](Self::extract_min) it becomes drain-only and any further
/// [`insert`](Self::insert) fails. Freed slots are never reused.
///
/// Ordering is the non-strict `a <= b`, so equal priorities still swap
/// during bubbling and sinking.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P>
where
    P: Float + Debug,
{
    /// Occupied slots, slot 0 holds the minimum
    slots: Vec<Entry<P>>,

    /// node id -> slot index, or `ABSENT`
    positions: Vec<usize>,

    /// Set by the first extraction
    drain_only: bool,
}

impl<P> IndexedMinHeap<P>
where
    P: Float + Debug,
{
    /// Creates an empty heap able to hold the node ids `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            slots: Vec::with_capacity(capacity),
            positions: vec![ABSENT; capacity],
            drain_only: false,
        }
    }

    /// Number of node ids this heap can address
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True once an extraction has happened; inserts are rejected from then on
    pub fn is_drain_only(&self) -> bool {
        self.drain_only
    }

    /// Returns true if `node` currently occupies a slot
    pub fn contains(&self, node: usize) -> bool {
        self.slot_of(node).is_some()
    }

    /// The slot `node` currently occupies, if any
    pub fn slot_of(&self, node: usize) -> Option<usize> {
        match self.positions.get(node) {
            Some(&slot) if slot != ABSENT => Some(slot),
            _ => None,
        }
    }

    /// The node stored at `slot`, if the slot is occupied
    pub fn node_at(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).map(|entry| entry.node)
    }

    /// Current priority of a resident node
    pub fn priority(&self, node: usize) -> Option<P> {
        self.slot_of(node).map(|slot| self.slots[slot].priority)
    }

    /// Returns the minimum node and its priority without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.slots.first().map(|entry| (entry.node, entry.priority))
    }

    /// Appends `node` to the next free slot and bubbles it toward the root.
    ///
    /// Fails once the heap is drain-only, when it is full, when `node` lies
    /// outside the capacity, when `node` was inserted before, or when
    /// `priority` is NaN.
    pub fn insert(&mut self, node: usize, priority: P) -> Result<()> {
        if self.drain_only {
            return Err(Error::InsertAfterExtraction);
        }
        if node >= self.capacity() {
            return Err(Error::NodeOutOfRange {
                node,
                capacity: self.capacity(),
            });
        }
        if self.slots.len() == self.capacity() {
            return Err(Error::HeapFull(self.capacity()));
        }
        if self.positions[node] != ABSENT {
            return Err(Error::DuplicateNode(node));
        }
        // NaN never orders against other keys
        if priority.is_nan() {
            return Err(Error::InvalidPriority(node));
        }

        let slot = self.slots.len();
        self.slots.push(Entry { node, priority });
        self.positions[node] = slot;
        self.bubble(slot);
        Ok(())
    }

    /// Removes and returns the node with the smallest priority.
    ///
    /// The root is exchanged with the last occupied slot, the heap shrinks by
    /// one, the removed node is marked absent and the new root sinks.
    pub fn extract_min(&mut self) -> Result<(usize, P)> {
        if self.slots.is_empty() {
            return Err(Error::EmptyHeap);
        }
        self.drain_only = true;

        let last = self.slots.len() - 1;
        self.exchange(0, last);
        let min = self.slots.pop().ok_or(Error::EmptyHeap)?;
        self.positions[min.node] = ABSENT;
        self.sink(0);

        Ok((min.node, min.priority))
    }

    /// Lowers the priority of a resident node and bubbles it toward the root.
    ///
    /// `priority` must be strictly smaller than the current one; equal or
    /// larger values are rejected and leave the heap untouched.
    pub fn decrease_priority(&mut self, node: usize, priority: P) -> Result<()> {
        let slot = self.slot_of(node).ok_or(Error::NodeNotInHeap(node))?;
        let current = self.slots[slot].priority;

        // Written so that a NaN request is rejected as well.
        if !(priority < current) {
            return Err(Error::NotImprovingPriority {
                node,
                current: current.to_f64().unwrap_or(f64::NAN),
                requested: priority.to_f64().unwrap_or(f64::NAN),
            });
        }

        self.slots[slot].priority = priority;
        self.bubble(slot);
        Ok(())
    }

    /// Checks the heap property and slot addressing in O(n).
    ///
    /// Intended for tests and diagnostics.
    pub fn validate(&self) -> Result<()> {
        let n = self.slots.len();
        for (slot, entry) in self.slots.iter().enumerate() {
            if self.positions.get(entry.node) != Some(&slot) {
                return Err(Error::HeapInvariant(format!(
                    "node {} at slot {} records slot {:?}",
                    entry.node,
                    slot,
                    self.positions.get(entry.node)
                )));
            }
            for child in [2 * slot + 1, 2 * slot + 2] {
                if child < n && !Self::smaller(entry, &self.slots[child]) {
                    return Err(Error::HeapInvariant(format!(
                        "slot {} is larger than its child slot {}",
                        slot, child
                    )));
                }
            }
        }

        let resident = self.positions.iter().filter(|&&slot| slot != ABSENT).count();
        if resident != n {
            return Err(Error::HeapInvariant(format!(
                "{} nodes record a slot but {} slots are occupied",
                resident, n
            )));
        }
        Ok(())
    }

    #[inline]
    fn smaller(a: &Entry<P>, b: &Entry<P>) -> bool {
        a.priority <= b.priority
    }

    /// Swaps two slots and updates both nodes' recorded positions
    fn exchange(&mut self, i: usize, j: usize) {
        self.slots.swap(i, j);
        self.positions[self.slots[i].node] = i;
        self.positions[self.slots[j].node] = j;
    }

    fn bubble(&mut self, mut curr: usize) {
        while curr > 0 {
            let parent = (curr - 1) / 2;
            if !Self::smaller(&self.slots[curr], &self.slots[parent]) {
                return;
            }
            self.exchange(curr, parent);
            curr = parent;
        }
    }

    fn sink(&mut self, mut curr: usize) {
        let n = self.slots.len();

        // Slots with two children; the left child wins ties.
        while 2 * curr + 2 < n {
            let left = 2 * curr + 1;
            let right = left + 1;
            let child = if Self::smaller(&self.slots[left], &self.slots[right]) {
                left
            } else {
                right
            };
            if !Self::smaller(&self.slots[child], &self.slots[curr]) {
                return;
            }
            self.exchange(curr, child);
            curr = child;
        }

        // The last parent may have only a left child.
        let left = 2 * curr + 1;
        if left < n && Self::smaller(&self.slots[left], &self.slots[curr]) {
            self.exchange(curr, left);
        }
    }
}
