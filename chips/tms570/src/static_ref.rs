// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Wrapper type for safe pointers to static memory.

use core::ops::Deref;
use core::ptr::NonNull;

/// A pointer to statically allocated mutable data such as memory mapped I/O
/// registers.
///
/// This wraps a raw pointer and moves the unsafe dereference into the
/// constructor. Unlike a `&'static T`, a `StaticRef` can be built in a
/// `const` from an address that has no allocation at compile time, which is
/// exactly the situation for MMIO register blocks.
#[derive(Debug)]
pub struct StaticRef<T> {
    ptr: NonNull<T>,
}

impl<T> StaticRef<T> {
    /// Create a new `StaticRef` from a raw pointer.
    ///
    /// ## Safety
    ///
    /// Callers must pass a non-null pointer to memory that stays valid and
    /// correctly aligned for `T` for the rest of the program, and that is
    /// only ever accessed through interior mutability.
    pub const unsafe fn new(ptr: *const T) -> StaticRef<T> {
        StaticRef {
            // Safety: the caller promises `ptr` is non-null.
            ptr: unsafe { NonNull::new_unchecked(ptr.cast_mut()) },
        }
    }
}

impl<T> Clone for StaticRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StaticRef<T> {}

impl<T> Deref for StaticRef<T> {
    type Target = T;
    fn deref(&self) -> &T {
        // Safety: `new` requires the pointee to be valid for the program's
        // lifetime.
        unsafe { self.ptr.as_ref() }
    }
}
