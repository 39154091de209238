//! The growable array.
//!
//! [`DynamicArray`] owns a [`Storage`] buffer whose slot count is the
//! capacity, plus a logical length. Capacity changes go through a single
//! relocation path that also advances the epoch, which is what invalidates
//! outstanding [`Position`]s.
//!
//! # Concurrency
//!
//! The array has no internal synchronization. Mutation takes `&mut self`,
//! so sharing it between threads for writing requires the caller to wrap
//! it (e.g. in a `Mutex`).

use std::fmt;

use crate::capacity::CapacityPolicy;
use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::position::Position;
use crate::storage::Storage;
use crate::Element;

/// Contiguous, resizable array of [`Element`]s.
///
/// Live elements occupy `[0, len)`. Slots in `[len, capacity)` are
/// allocated and normally zero; only
/// [`with_capacity_and_value`](Self::with_capacity_and_value) leaves
/// non-zero values there.
#[derive(Clone, Debug)]
pub struct DynamicArray {
    storage: Storage,
    len: usize,
    policy: CapacityPolicy,
    /// Incremented on every relocation.
    epoch: u32,
}

impl DynamicArray {
    /// Create an empty array with the default configuration
    /// (capacity 4, growth factor 2).
    pub fn new() -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::default())
    }

    /// Create an empty array from an explicit configuration.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        let policy = CapacityPolicy::from_config(&config)?;
        let capacity = policy.normalize(config.initial_capacity)?;
        Ok(Self {
            storage: Storage::allocate(capacity)?,
            len: 0,
            policy,
            epoch: 0,
        })
    }

    /// Create an empty array with room for at least `capacity` elements.
    ///
    /// The capacity is normalized to the next power of two. A zero
    /// capacity is rejected with [`ArrayError::InvalidArgument`].
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Err(ArrayError::InvalidArgument {
                reason: "capacity must be 1 or greater".into(),
            });
        }
        Self::with_config(ArrayConfig::new(capacity))
    }

    /// Like [`with_capacity`](Self::with_capacity), but every allocated
    /// slot is pre-set to `value`.
    ///
    /// The length is still 0: the filled slots are allocated, not live.
    /// Growing the length always overwrites the slots it makes live, so
    /// the fill value is never observable through the element accessors.
    pub fn with_capacity_and_value(capacity: usize, value: Element) -> Result<Self, ArrayError> {
        let mut array = Self::with_capacity(capacity)?;
        array.storage.slots_mut().fill(value);
        Ok(array)
    }

    // ── Capacity queries ────────────────────────────────────────

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current relocation epoch.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// The capacity policy in force for this array.
    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    // ── Element access ──────────────────────────────────────────

    /// Element at `index`, or [`ArrayError::IndexOutOfRange`].
    pub fn at(&self, index: usize) -> Result<Element, ArrayError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Mutable reference to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Element, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// First live element.
    pub fn front(&self) -> Result<Element, ArrayError> {
        self.as_slice()
            .first()
            .copied()
            .ok_or(ArrayError::EmptyContainer)
    }

    /// Last live element.
    pub fn back(&self) -> Result<Element, ArrayError> {
        self.as_slice()
            .last()
            .copied()
            .ok_or(ArrayError::EmptyContainer)
    }

    /// Borrowed view of the live elements.
    pub fn as_slice(&self) -> &[Element] {
        self.storage.slice(self.len)
    }

    /// Mutable view of the live elements.
    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        self.storage.slice_mut(self.len)
    }

    /// Iterator over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.as_slice().iter()
    }

    // ── Positions ───────────────────────────────────────────────

    /// Position of the first slot.
    pub fn begin(&self) -> Position {
        Position::new(self.epoch, 0)
    }

    /// Position one past the last live element.
    pub fn end(&self) -> Position {
        Position::new(self.epoch, self.len)
    }

    /// Position of the live element at `index`.
    pub fn position(&self, index: usize) -> Result<Position, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::PositionOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(Position::new(self.epoch, index))
    }

    /// Element a position refers to.
    pub fn value_at(&self, pos: Position) -> Result<Element, ArrayError> {
        let index = self.resolve(pos)?;
        self.at(index)
    }

    fn resolve(&self, pos: Position) -> Result<usize, ArrayError> {
        if pos.epoch != self.epoch {
            return Err(ArrayError::StalePosition {
                position_epoch: pos.epoch,
                current_epoch: self.epoch,
            });
        }
        Ok(pos.index)
    }

    // ── Modifiers ───────────────────────────────────────────────

    /// Insert `value` at `index`, shifting `[index, len)` up by one.
    ///
    /// `index == len` appends. If the array is full, capacity grows to
    /// the next rung of the policy ladder first. Returns the position of
    /// the inserted element, valid in the post-insert epoch.
    pub fn insert(&mut self, index: usize, value: Element) -> Result<Position, ArrayError> {
        if index > self.len {
            return Err(ArrayError::PositionOutOfRange {
                index,
                len: self.len,
            });
        }
        let new_len = self.len + 1;
        if new_len > self.capacity() {
            let target = self.policy.grow_one(self.capacity())?;
            self.relocate(target)?;
        }
        let slots = self.storage.slots_mut();
        slots.copy_within(index..self.len, index + 1);
        slots[index] = value;
        self.len = new_len;
        self.debug_check();
        Ok(Position::new(self.epoch, index))
    }

    /// [`insert`](Self::insert) addressed by a position.
    pub fn insert_at(&mut self, pos: Position, value: Element) -> Result<Position, ArrayError> {
        let index = self.resolve(pos)?;
        self.insert(index, value)
    }

    /// Append `value`.
    pub fn push_back(&mut self, value: Element) -> Result<Position, ArrayError> {
        self.insert(self.len, value)
    }

    /// Remove the last element, zeroing its slot.
    ///
    /// Returns `None` (and does nothing) on an empty array. Capacity is
    /// never reduced.
    pub fn pop_back(&mut self) -> Option<Element> {
        if self.len == 0 {
            return None;
        }
        let last = self.len - 1;
        let value = std::mem::take(&mut self.storage.slots_mut()[last]);
        self.len = last;
        Some(value)
    }

    /// Remove the element at `index`, shifting `(index, len)` down by one.
    ///
    /// `index == len` is treated as [`pop_back`](Self::pop_back) and
    /// returns [`end`](Self::end). Otherwise returns the position now
    /// holding the element that followed the removed one.
    pub fn erase(&mut self, index: usize) -> Result<Position, ArrayError> {
        if index < self.len {
            let slots = self.storage.slots_mut();
            slots.copy_within(index + 1..self.len, index);
            slots[self.len - 1] = 0;
            self.len -= 1;
            Ok(Position::new(self.epoch, index))
        } else if index == self.len {
            self.pop_back();
            Ok(self.end())
        } else {
            Err(ArrayError::PositionOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// [`erase`](Self::erase) addressed by a position.
    pub fn erase_at(&mut self, pos: Position) -> Result<Position, ArrayError> {
        let index = self.resolve(pos)?;
        self.erase(index)
    }

    /// Set the length to `n`, zero-filling any newly live slots.
    ///
    /// Growing past capacity relocates to the normalized capacity for `n`.
    /// Shrinking zeroes the dropped slots but keeps the capacity.
    /// `resize(0)` on an already empty array reallocates fresh storage of
    /// the same capacity. `n == len` is otherwise a no-op.
    pub fn resize(&mut self, n: usize) -> Result<(), ArrayError> {
        self.resize_filled(n, 0)
    }

    /// Like [`resize`](Self::resize), but newly live slots get `value`.
    ///
    /// Slots dropped by shrinking are still zeroed.
    pub fn resize_with_value(&mut self, n: usize, value: Element) -> Result<(), ArrayError> {
        self.resize_filled(n, value)
    }

    fn resize_filled(&mut self, n: usize, value: Element) -> Result<(), ArrayError> {
        if n > self.capacity() {
            let target = self.policy.normalize(n)?;
            self.relocate(target)?;
            self.storage.slots_mut()[self.len..n].fill(value);
            self.len = n;
        } else if n > self.len {
            self.storage.slots_mut()[self.len..n].fill(value);
            self.len = n;
        } else if n < self.len {
            self.storage.slots_mut()[n..self.len].fill(0);
            self.len = n;
        } else if n == 0 {
            self.storage = Storage::allocate(self.capacity())?;
            self.advance_epoch();
        }
        self.debug_check();
        Ok(())
    }

    /// Ensure capacity for at least `n` elements.
    ///
    /// Relocates to the normalized capacity for `n` if it exceeds the
    /// current capacity; otherwise does nothing. Length and live contents
    /// are unchanged.
    pub fn reserve(&mut self, n: usize) -> Result<(), ArrayError> {
        if n > self.capacity() {
            let target = self.policy.normalize(n)?;
            self.relocate(target)?;
        }
        Ok(())
    }

    /// Reduce capacity to the normalized capacity for the current length.
    pub fn shrink_to_fit(&mut self) -> Result<(), ArrayError> {
        let target = self.policy.normalize(self.len)?;
        self.relocate(target)
    }

    /// Release all storage, consuming the array.
    ///
    /// Returns the number of bytes released.
    pub fn clear(self) -> usize {
        self.storage.memory_bytes()
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    fn relocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity == self.capacity() {
            return Ok(());
        }
        debug_assert!(new_capacity >= self.len);
        self.storage.relocate(new_capacity)?;
        self.advance_epoch();
        Ok(())
    }

    fn advance_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn debug_check(&self) {
        debug_assert!(self.len <= self.capacity());
        debug_assert!(self.policy.is_normalized(self.capacity()));
    }
}

impl fmt::Display for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for v in iter {
                write!(f, " {v}")?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
