//! Diagnostic output.
//!
//! Presentation only: nothing here is relied on by the array itself.

use std::fmt;
use std::io::{self, Write};

use crate::array::DynamicArray;

/// Snapshot of an array's size, capacity and storage identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayReport {
    /// Live element count.
    pub len: usize,
    /// Allocated slot count.
    pub capacity: usize,
    /// Address of the first slot. Changes only on relocation.
    pub storage_addr: usize,
    /// Bytes held by the slot buffer.
    pub memory_bytes: usize,
    /// Relocation epoch.
    pub epoch: u32,
}

impl fmt::Display for ArrayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {}", self.len)?;
        writeln!(f, "Capacity: {}", self.capacity)?;
        writeln!(
            f,
            "Storage: {:#x} ({} bytes, epoch {})",
            self.storage_addr, self.memory_bytes, self.epoch
        )
    }
}

impl DynamicArray {
    /// Capture a diagnostic report.
    pub fn report(&self) -> ArrayReport {
        let storage = self.storage();
        ArrayReport {
            len: self.len(),
            capacity: self.capacity(),
            storage_addr: storage.base_addr(),
            memory_bytes: storage.memory_bytes(),
            epoch: self.epoch(),
        }
    }

    /// Write each live element followed by a space, then a newline.
    pub fn print_elements<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for v in self.iter() {
            write!(out, "{v} ")?;
        }
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_elements_has_trailing_space_and_newline() {
        let mut array = DynamicArray::new().unwrap();
        for v in [3, 1, 2] {
            array.push_back(v).unwrap();
        }
        let mut out = Vec::new();
        array.print_elements(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3 1 2 \n");
    }

    #[test]
    fn print_empty_is_bare_newline() {
        let array = DynamicArray::new().unwrap();
        let mut out = Vec::new();
        array.print_elements(&mut out).unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn report_tracks_relocation() {
        let mut array = DynamicArray::with_capacity(2).unwrap();
        let before = array.report();
        assert_eq!(before.len, 0);
        assert_eq!(before.capacity, 2);
        assert_eq!(before.memory_bytes, 8);
        assert_eq!(before.epoch, 0);

        array.reserve(100).unwrap();
        let after = array.report();
        assert_eq!(after.capacity, 128);
        assert_eq!(after.epoch, 1);
    }

    #[test]
    fn report_display_lists_fields() {
        let array = DynamicArray::new().unwrap();
        let text = array.report().to_string();
        assert!(text.starts_with("Size: 0\nCapacity: 4\nStorage: 0x"));
        assert!(text.ends_with("(16 bytes, epoch 0)\n"));
    }
}
