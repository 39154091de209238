//! Owned slot storage and relocation.
//!
//! [`Storage`] is a fully initialised `Vec<Element>` whose length is the
//! array's capacity. Slots are zero-initialised on allocation and on
//! growth; there is no `MaybeUninit` and no `unsafe`.

use crate::error::ArrayError;
use crate::Element;

/// Contiguous, fully allocated slot buffer.
///
/// The backing `Vec` never holds spare capacity of its own that the array
/// could observe: `data.len()` *is* the array capacity. Relocation goes
/// through `try_reserve_exact` so allocator refusal surfaces as
/// [`ArrayError::AllocationFailed`] instead of aborting.
#[derive(Clone, Debug)]
pub struct Storage {
    data: Vec<Element>,
}

impl Storage {
    /// Allocate `capacity` zeroed slots.
    pub fn allocate(capacity: usize) -> Result<Self, ArrayError> {
        Self::allocate_filled(capacity, 0)
    }

    /// Allocate `capacity` slots, each set to `value`.
    pub fn allocate_filled(capacity: usize, value: Element) -> Result<Self, ArrayError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| ArrayError::AllocationFailed {
                requested: capacity,
            })?;
        data.resize(capacity, value);
        Ok(Self { data })
    }

    /// Move the contents into a buffer of `new_capacity` slots.
    ///
    /// The first `min(old, new)` slots keep their values; slots added by
    /// growth are zeroed. On error the storage is left untouched.
    pub fn relocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let old_capacity = self.data.len();
        if new_capacity > old_capacity {
            self.data
                .try_reserve_exact(new_capacity - old_capacity)
                .map_err(|_| ArrayError::AllocationFailed {
                    requested: new_capacity,
                })?;
            self.data.resize(new_capacity, 0);
        } else if new_capacity < old_capacity {
            self.data.truncate(new_capacity);
            self.data.shrink_to_fit();
        }
        Ok(())
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Shared view of `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the capacity.
    pub fn slice(&self, len: usize) -> &[Element] {
        &self.data[..len]
    }

    /// Mutable view of `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the capacity.
    pub fn slice_mut(&mut self, len: usize) -> &mut [Element] {
        &mut self.data[..len]
    }

    /// Every slot, live or not.
    pub fn slots(&self) -> &[Element] {
        &self.data
    }

    /// Mutable access to every slot.
    pub fn slots_mut(&mut self) -> &mut [Element] {
        &mut self.data
    }

    /// Address of the first slot, for diagnostics only.
    pub fn base_addr(&self) -> usize {
        self.data.as_ptr() as usize
    }

    /// Memory usage of the slots in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<Element>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_returns_zeroed_slots() {
        let storage = Storage::allocate(16).unwrap();
        assert_eq!(storage.capacity(), 16);
        assert!(storage.slots().iter().all(|&v| v == 0));
    }

    #[test]
    fn allocate_filled_sets_every_slot() {
        let storage = Storage::allocate_filled(8, -3).unwrap();
        assert!(storage.slots().iter().all(|&v| v == -3));
    }

    #[test]
    fn growth_preserves_prefix_and_zeroes_tail() {
        let mut storage = Storage::allocate_filled(4, 7).unwrap();
        storage.relocate(8).unwrap();
        assert_eq!(storage.capacity(), 8);
        assert_eq!(storage.slots(), &[7, 7, 7, 7, 0, 0, 0, 0]);
    }

    #[test]
    fn shrink_truncates() {
        let mut storage = Storage::allocate(8).unwrap();
        storage.slots_mut()[1] = 42;
        storage.relocate(2).unwrap();
        assert_eq!(storage.slots(), &[0, 42]);
    }

    #[test]
    fn slice_reads_written_data() {
        let mut storage = Storage::allocate(4).unwrap();
        storage.slice_mut(2).copy_from_slice(&[5, 6]);
        assert_eq!(storage.slice(2), &[5, 6]);
    }

    #[test]
    fn oversized_allocation_returns_error_not_panic() {
        let result = Storage::allocate(usize::MAX);
        assert!(matches!(
            result,
            Err(ArrayError::AllocationFailed { requested: usize::MAX })
        ));
    }

    #[test]
    fn failed_relocation_leaves_storage_intact() {
        let mut storage = Storage::allocate_filled(4, 1).unwrap();
        assert!(storage.relocate(usize::MAX).is_err());
        assert_eq!(storage.slots(), &[1, 1, 1, 1]);
    }

    #[test]
    fn memory_bytes_tracks_capacity() {
        let storage = Storage::allocate(32).unwrap();
        assert_eq!(storage.memory_bytes(), 32 * 4);
    }
}
