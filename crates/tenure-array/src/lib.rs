//! Growable contiguous storage for the Tenure workspace.
//!
//! One public container, built from two layers:
//!
//! ```text
//! DynArray<T> (element discipline: construct / move / drop)
//! └── RawBuf<T> (allocation discipline: alloc / dealloc, nothing else)
//! ```
//!
//! [`DynArray`] owns a contiguous buffer of element slots; the slots
//! `[0, len)` hold constructed elements and `[len, capacity)` are
//! allocated but uninitialized. Growth doubles the capacity (starting
//! at 1), moving elements bitwise into the new allocation. Recoverable
//! failures — checked access out of range, removal from an empty
//! array — surface as [`ArrayError`].
//!
//! # Safety
//!
//! This crate is one of two in the workspace that contain `unsafe` code
//! (along with `tenure-ptr`). Every `unsafe` block carries a
//! `// SAFETY:` comment stating the invariant it relies on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod array;
pub mod error;
mod raw;

// Public re-exports for the primary API surface.
pub use array::DynArray;
pub use error::ArrayError;
