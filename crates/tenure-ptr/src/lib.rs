//! Owning-pointer primitives: exclusive and reference-counted ownership.
//!
//! This crate provides the two pointer-shaped ownership patterns of the
//! Tenure workspace:
//!
//! ```text
//! Unique<T, D>              Shared<T> ── Shared<T> ── Shared<T>
//! └── resource (exactly         │            │            │
//!     one live owner)           └────────────┴────────────┘
//!                                      │
//!                               resource + RefCount
//!                               (destroyed when the count hits 0)
//! ```
//!
//! - [`Unique`] owns exactly one resource. Copying is a compile-time
//!   error; ownership transfers by move. Destruction goes through a
//!   pluggable [`Destroy`] strategy ([`BoxDestroy`] by default).
//! - [`Shared`] owns a resource jointly with its clones, coordinated
//!   through one [`RefCount`] per resource. The count is a plain
//!   non-atomic integer, so `Shared` is deliberately `!Send + !Sync`.
//!
//! The two types are independent: neither knows about the other, and
//! neither is built on the containers in `tenure-array`.
//!
//! # Safety
//!
//! This crate is one of two in the workspace that contain `unsafe` code
//! (along with `tenure-array`). Every `unsafe` block carries a
//! `// SAFETY:` comment stating the invariant it relies on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod shared;
pub mod unique;

// Public re-exports for the primary API surface.
pub use shared::{RefCount, Shared};
pub use unique::{BoxDestroy, Destroy, FnDestroy, Unique};
