//! Tenure: generic memory-ownership primitives.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Tenure sub-crates. For most users, adding `tenure` as a
//! single dependency is sufficient.
//!
//! Three independent primitives cover the three canonical
//! manual-memory-management patterns:
//!
//! - [`ptr::Unique`]: exclusive ownership — exactly one live owner,
//!   transfer empties the source, destruction through a pluggable
//!   strategy.
//! - [`ptr::Shared`]: shared ownership — the resource lives until the
//!   last owner releases it, tracked by a per-resource
//!   [`ptr::RefCount`].
//! - [`array::DynArray`]: amortized-growth contiguous storage with
//!   element-wise construction and destruction.
//!
//! # Quick start
//!
//! ```rust
//! use tenure::prelude::*;
//!
//! // Amortized-growth contiguous storage.
//! let mut values = DynArray::new();
//! values.push(10);
//! values.push(20);
//! assert_eq!(values.as_slice(), &[10, 20]);
//! assert_eq!(values.capacity(), 2);
//! assert!(values.at(2).is_err());
//!
//! // Exclusive ownership: moves, never copies.
//! let mut owner = Unique::new(String::from("resource"));
//! let next = owner.take();
//! assert!(!owner.is_engaged());
//! assert_eq!(*next, "resource");
//!
//! // Shared ownership with deterministic destruction.
//! let first = Shared::new(7);
//! let second = first.clone();
//! assert_eq!(first.use_count(), 2);
//! drop(second);
//! assert_eq!(first.use_count(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`ptr`] | `tenure-ptr` | `Unique`, `Destroy` strategies, `Shared`, `RefCount` |
//! | [`array`] | `tenure-array` | `DynArray`, `ArrayError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Owning-pointer primitives (`tenure-ptr`).
///
/// Exclusive ownership via [`ptr::Unique`] with the [`ptr::Destroy`]
/// strategy seam, and shared ownership via [`ptr::Shared`] with its
/// per-resource [`ptr::RefCount`].
pub use tenure_ptr as ptr;

/// Growable contiguous storage (`tenure-array`).
///
/// [`array::DynArray`] plus its recoverable [`array::ArrayError`]
/// conditions.
pub use tenure_array as array;

/// Common imports for typical Tenure usage.
///
/// ```rust
/// use tenure::prelude::*;
/// ```
///
/// This imports the three primitives, the default destruction
/// strategies, and the array error type.
pub mod prelude {
    // Pointers
    pub use tenure_ptr::{BoxDestroy, Destroy, FnDestroy, RefCount, Shared, Unique};

    // Containers
    pub use tenure_array::{ArrayError, DynArray};
}
