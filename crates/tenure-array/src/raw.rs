//! Raw backing-storage unit: allocation and deallocation only.
//!
//! [`RawBuf`] owns a contiguous allocation of `T` slots and nothing
//! else. It never constructs, reads, or drops elements — that
//! discipline lives entirely in [`DynArray`](crate::DynArray). Keeping
//! the split means the drop path can never double-free and never
//! double-drops elements: elements are the array's problem, the
//! allocation is this type's.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// An owned allocation of `cap` uninitialized `T` slots.
///
/// For zero-sized `T` no allocation is ever made and the capacity
/// reports `usize::MAX` — every slot fits in no storage.
pub(crate) struct RawBuf<T> {
    /// Start of the allocation; dangling when `cap == 0` or `T` is
    /// zero-sized.
    ptr: NonNull<T>,
    /// Number of slots allocated.
    cap: usize,
    /// Owns the `T` slots for drop-check purposes.
    _owns: PhantomData<T>,
}

// SAFETY: `RawBuf` owns its allocation outright; moving or sharing it
// shares no state beyond what `T` itself permits.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: `&RawBuf` exposes nothing but a pointer value and a capacity.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// An empty buffer: no allocation, dangling pointer.
    pub(crate) fn new() -> Self {
        let cap = if mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            0
        };
        Self {
            ptr: NonNull::dangling(),
            cap,
            _owns: PhantomData,
        }
    }

    /// Allocate storage for exactly `cap` slots.
    ///
    /// Zero-sized `T` and `cap == 0` allocate nothing. Allocation
    /// failure is propagated via [`alloc::handle_alloc_error`]; a
    /// capacity whose byte size overflows `isize::MAX` panics.
    pub(crate) fn allocate(cap: usize) -> Self {
        if mem::size_of::<T>() == 0 || cap == 0 {
            return Self::new();
        }
        let layout = Layout::array::<T>(cap).expect("capacity overflow");
        // SAFETY: `layout` has non-zero size — `cap > 0` and `T` is not
        // zero-sized on this path.
        let raw = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            alloc::handle_alloc_error(layout)
        };
        Self {
            ptr,
            cap,
            _owns: PhantomData,
        }
    }

    /// Start of the slot storage.
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Number of slots allocated (`usize::MAX` for zero-sized `T`).
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if mem::size_of::<T>() != 0 && self.cap != 0 {
            let layout = Layout::array::<T>(self.cap)
                .expect("layout already validated at allocation time");
            // SAFETY: `ptr` was returned by `alloc::alloc` with this
            // exact layout and has not been deallocated.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_has_no_capacity() {
        let buf: RawBuf<u64> = RawBuf::new();
        assert_eq!(buf.cap(), 0);
    }

    #[test]
    fn allocate_reports_requested_capacity() {
        let buf: RawBuf<u64> = RawBuf::allocate(12);
        assert_eq!(buf.cap(), 12);
    }

    #[test]
    fn allocate_zero_slots_does_not_allocate() {
        let buf: RawBuf<u64> = RawBuf::allocate(0);
        assert_eq!(buf.cap(), 0);
    }

    #[test]
    fn zero_sized_elements_fit_without_storage() {
        let fresh: RawBuf<()> = RawBuf::new();
        assert_eq!(fresh.cap(), usize::MAX);
        let allocated: RawBuf<()> = RawBuf::allocate(64);
        assert_eq!(allocated.cap(), usize::MAX);
    }

    #[test]
    fn allocation_is_writable_and_readable() {
        let buf: RawBuf<u32> = RawBuf::allocate(4);
        for i in 0..4 {
            // SAFETY: `i < cap`, so the slot is inside the allocation.
            unsafe { buf.ptr().add(i).write(i as u32 * 10) };
        }
        for i in 0..4 {
            // SAFETY: the slot was initialized just above.
            let value = unsafe { buf.ptr().add(i).read() };
            assert_eq!(value, i as u32 * 10);
        }
    }
}
