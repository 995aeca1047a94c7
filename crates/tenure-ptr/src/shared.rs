//! Reference-counted shared-owning pointer.
//!
//! A [`Shared<T>`] owns its resource jointly with every clone of itself,
//! coordinated through exactly one [`RefCount`] per resource. The count
//! always equals the number of live handles referencing the resource;
//! the handle that drops it to zero destroys the resource and the
//! counter in the same step.
//!
//! The count is a plain non-atomic integer. `Shared` is therefore
//! `!Send + !Sync` (inherited from its `NonNull` fields): cross-thread
//! shared ownership is rejected at compile time rather than documented
//! as a data race.

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::Deref;
use std::ptr::NonNull;

/// A strictly-positive-while-alive reference counter.
///
/// Created at 1 (the first owner) together with the first [`Shared`]
/// that owns a resource, and destroyed in the same step as the resource
/// when the count transitions to 0. The counter itself has no ownership
/// semantics; it is owned collectively by the handles that share it.
pub struct RefCount {
    /// Number of live owners. Non-atomic; see the module docs.
    count: Cell<usize>,
}

impl RefCount {
    /// Create a counter at 1, representing the first owner.
    pub fn new() -> Self {
        Self {
            count: Cell::new(1),
        }
    }

    /// Record one additional owner.
    ///
    /// # Panics
    ///
    /// Panics on counter overflow.
    pub fn increment(&self) {
        let count = self.count.get();
        assert!(count != usize::MAX, "reference count overflow");
        self.count.set(count + 1);
    }

    /// Record one owner fewer.
    ///
    /// # Panics
    ///
    /// Panics if the count is already 0 — a decrement without a matching
    /// owner is an invariant violation.
    pub fn decrement(&self) {
        let count = self.count.get();
        assert!(count > 0, "reference count underflow");
        self.count.set(count - 1);
    }

    /// The current number of live owners.
    pub fn get(&self) -> usize {
        self.count.get()
    }
}

impl Default for RefCount {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RefCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefCount").field(&self.get()).finish()
    }
}

/// A reference-counted shared-owning pointer.
///
/// Cloning adds an owner; dropping removes one; the last owner destroys
/// the resource. [`use_count`](Shared::use_count) observes the current
/// owner count.
///
/// Invariant: the counter reference is engaged iff the resource
/// reference is, and every live handle for a given resource shares the
/// same counter.
pub struct Shared<T> {
    /// The shared resource, if any.
    obj: Option<NonNull<T>>,
    /// The counter shared by all handles for `obj`. Engaged iff `obj` is.
    counter: Option<NonNull<RefCount>>,
    /// Owns a share of a `T` for drop-check purposes.
    _owns: PhantomData<T>,
}

impl<T> Shared<T> {
    /// Create a handle that owns nothing.
    pub fn empty() -> Self {
        Self {
            obj: None,
            counter: None,
            _owns: PhantomData,
        }
    }

    /// Allocate `value` on the heap and become its first owner.
    ///
    /// Allocates the resource and a fresh [`RefCount`] at 1.
    pub fn new(value: T) -> Self {
        let obj = NonNull::from(Box::leak(Box::new(value)));
        // SAFETY: `obj` comes from `Box::leak`, so it is valid, unaliased,
        // and was allocated by `Box` as `from_raw` requires.
        unsafe { Self::from_raw(obj) }
    }

    /// Become the first owner of a raw resource.
    ///
    /// Allocates a fresh [`RefCount`] at 1. A resource is never
    /// associated with more than one counter: calling this twice with
    /// the same pointer creates two disjoint owner groups and a double
    /// destruction.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live `Box`-allocated resource that no other
    /// owner (or owner group) will destroy.
    pub unsafe fn from_raw(ptr: NonNull<T>) -> Self {
        let counter = NonNull::from(Box::leak(Box::new(RefCount::new())));
        Self {
            obj: Some(ptr),
            counter: Some(counter),
            _owns: PhantomData,
        }
    }

    /// The number of live handles currently owning the resource
    /// (0 for an empty handle).
    pub fn use_count(&self) -> usize {
        self.counter().map_or(0, RefCount::get)
    }

    /// Borrow the shared resource, if any.
    pub fn get(&self) -> Option<&T> {
        // SAFETY: an engaged `obj` stays live until the count reaches 0,
        // which cannot happen while `self` holds its share; the borrow
        // is tied to `&self`.
        self.obj.map(|p| unsafe { &*p.as_ptr() })
    }

    /// Mutably borrow the resource, only while `self` is the sole owner.
    ///
    /// Returns `None` if the handle is empty or the resource is shared:
    /// handing out `&mut T` next to sibling handles would alias.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.use_count() != 1 {
            return None;
        }
        // SAFETY: count == 1 means no sibling handle exists, so `&mut
        // self` is the only path to the resource.
        self.obj.map(|p| unsafe { &mut *p.as_ptr() })
    }

    /// Whether a resource is currently owned.
    pub fn is_engaged(&self) -> bool {
        self.obj.is_some()
    }

    /// Give up this handle's share and become empty.
    ///
    /// Decrements the counter; if the count reaches 0, destroys the
    /// resource and the counter in the same step. Both local references
    /// are nulled afterward in every case.
    pub fn reset(&mut self) {
        if let Some(counter_ptr) = self.counter.take() {
            let remaining = {
                // SAFETY: the counter stays live while any handle holds a
                // share, and `self` still holds one.
                let counter = unsafe { counter_ptr.as_ref() };
                counter.decrement();
                counter.get()
            };
            if remaining == 0 {
                if let Some(obj) = self.obj {
                    // SAFETY: count reached 0, so `self` was the last
                    // owner; the resource was Box-allocated in
                    // `new`/`from_raw` and nobody can reach it anymore.
                    unsafe { drop(Box::from_raw(obj.as_ptr())) };
                }
                // SAFETY: same argument for the counter allocation; the
                // shared borrow above ended with the inner scope.
                unsafe { drop(Box::from_raw(counter_ptr.as_ptr())) };
            }
        }
        self.obj = None;
    }

    /// Transfer this handle's share out of `self`, leaving it empty.
    ///
    /// The count is unchanged: one handle's share simply moves. This is
    /// the observable form of move-assignment; plain Rust moves also
    /// apply.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }

    /// Exchange resources (and counters) with `other` in O(1).
    ///
    /// Never panics; no count changes, nothing is destroyed.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// The shared counter, if engaged.
    fn counter(&self) -> Option<&RefCount> {
        // SAFETY: an engaged counter stays live while any handle holds a
        // share; the borrow is tied to `&self`.
        self.counter.map(|c| unsafe { &*c.as_ptr() })
    }
}

impl<T> Clone for Shared<T> {
    /// Adopt the same resource and counter, adding one owner.
    fn clone(&self) -> Self {
        if let Some(counter) = self.counter() {
            counter.increment();
        }
        Self {
            obj: self.obj,
            counter: self.counter,
            _owns: PhantomData,
        }
    }

    /// Reassign `self` to `source`'s resource.
    ///
    /// When both handles already reference the same resource this is a
    /// no-op — release-then-re-adopt would drop the share before
    /// re-acquiring it. Identity is checked first.
    fn clone_from(&mut self, source: &Self) {
        if self.obj == source.obj && self.counter == source.counter {
            return;
        }
        self.reset();
        if let Some(counter) = source.counter() {
            counter.increment();
        }
        self.obj = source.obj;
        self.counter = source.counter;
    }
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the handle is empty — dereferencing without a resource
    /// is a precondition violation, not a recoverable state.
    fn deref(&self) -> &T {
        self.get().expect("dereferenced an empty Shared")
    }
}

impl<T> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("engaged", &self.is_engaged())
            .field("use_count", &self.use_count())
            .finish()
    }
}

impl<T> Drop for Shared<T> {
    fn drop(&mut self) {
        self.reset();
    }
}
