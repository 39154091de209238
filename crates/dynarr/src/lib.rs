//! Growable contiguous array of `i32` with power-of-two capacity management.
//!
//! [`DynamicArray`] keeps an explicit logical length and a physical
//! capacity. Capacities are always a power of the configured growth factor
//! (2 by default), and every relocation is tracked by an epoch counter so
//! that [`Position`]s taken before a capacity change are rejected rather
//! than silently reading moved storage.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray
//! ├── Storage         (Vec<i32>, len == capacity, zero-initialised)
//! ├── CapacityPolicy  (ceil to a power of the growth factor)
//! ├── len             (live prefix of Storage)
//! └── epoch           (bumped on every relocation)
//! ```
//!
//! # Errors
//!
//! All fallible operations return [`ArrayError`]. Argument and range
//! errors leave the array untouched; allocation failure is reported as its
//! own variant instead of aborting.
//!
//! # Threading
//!
//! Single-threaded by contract. The array is `Send` and `Sync`, but any
//! shared mutation must be synchronised by the caller.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod capacity;
pub mod config;
pub mod error;
pub mod position;
pub mod report;
pub mod storage;

/// The element type stored by [`DynamicArray`].
pub type Element = i32;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use capacity::CapacityPolicy;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use position::Position;
pub use report::ArrayReport;
