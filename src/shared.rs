use core::borrow::Borrow;
use core::convert::AsRef;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::Deref;
use core::ptr::NonNull;

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        use std::boxed::Box;
    } else {
        use alloc::boxed::Box;
    }
}

use crate::block::{Alias, ControlBlock};
use crate::counter::Counter;
use crate::internal;
use crate::SharedOwner;

/********** impl Send + Sync **********************************************************************/

unsafe impl<T: ?Sized, C: Counter> Send for SharedOwner<T, C>
where
    T: Send + Sync,
    C: Sync,
{
}

unsafe impl<T: ?Sized, C: Counter> Sync for SharedOwner<T, C>
where
    T: Send + Sync,
    C: Sync,
{
}

/********** impl Clone ****************************************************************************/

impl<T: ?Sized, C: Counter> Clone for SharedOwner<T, C> {
    /// Creates a new alias of the same resource, incrementing the count if
    /// `self` is not empty.
    #[inline]
    fn clone(&self) -> Self {
        if let Some(alias) = &self.inner {
            unsafe { alias.block().count.increment() };
        }

        Self { inner: self.inner, _marker: PhantomData }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        Self::assign_clone(self, source);
    }
}

/********** impl inherent (sized) *****************************************************************/

impl<T, C: Counter> SharedOwner<T, C> {
    /// Allocates `value` on the heap together with a new control block.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::from_box(Box::new(value))
    }

    /// Returns the contained value, if `owner` is its only alias.
    ///
    /// Otherwise, the unchanged `owner` is returned as error.
    #[inline]
    pub fn try_unwrap(owner: Self) -> Result<T, Self> {
        Self::try_into_box(owner).map(|boxed| *boxed)
    }
}

/********** impl inherent *************************************************************************/

impl<T: ?Sized, C: Counter> SharedOwner<T, C> {
    /// Creates an empty handle that does not own anything.
    #[inline]
    pub const fn empty() -> Self {
        Self { inner: None, _marker: PhantomData }
    }

    /// Takes custody of the heap allocated `resource` and allocates a new
    /// control block with a count of one for it.
    #[inline]
    pub fn from_box(resource: Box<T>) -> Self {
        Self { inner: Some(Alias::new(resource)), _marker: PhantomData }
    }

    /// Takes custody of the resource behind the raw `ptr`, which may be null
    /// to create an empty handle.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must have been obtained from [`Box::into_raw`] and
    /// must not be owned by anything else.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut T) -> Self {
        if ptr.is_null() {
            Self::empty()
        } else {
            Self::from_box(Box::from_raw(ptr))
        }
    }

    impl_state_queries!();

    /// Returns the number of live aliases sharing the resource of `owner`,
    /// or zero if `owner` is empty.
    #[inline]
    pub fn use_count(owner: &Self) -> usize {
        match &owner.inner {
            Some(alias) => unsafe { alias.block() }.count.get(),
            None => 0,
        }
    }

    /// Returns `true` if both handles alias the same control block or are
    /// both empty.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        a.inner.map(|alias| alias.block) == b.inner.map(|alias| alias.block)
    }

    /// Releases the claim of `owner` and makes it an alias of `other`.
    ///
    /// Assigning a handle that already aliases the same control block
    /// (including a handle to itself) does nothing at all.
    /// Otherwise, the previous claim is released first, which de-allocates
    /// the previous resource if `owner` was its last alias.
    #[inline]
    pub fn assign_clone(owner: &mut Self, other: &Self) {
        if Self::ptr_eq(owner, other) {
            return;
        }

        Self::release(owner);
        owner.inner = ManuallyDrop::new(other.clone()).inner;
    }

    /// Transfers the claim of `owner` into a new handle without changing the
    /// count, leaving `owner` empty.
    #[inline]
    pub fn take(owner: &mut Self) -> Self {
        Self { inner: owner.inner.take(), _marker: PhantomData }
    }

    /// Releases the claim of `owner` and takes over the claim of `other`
    /// without changing its count.
    ///
    /// If both alias the same block, the count is at least two before the
    /// release, so the resource is kept alive by the incoming claim.
    #[inline]
    pub fn assign(owner: &mut Self, other: Self) {
        Self::release(owner);
        owner.inner = ManuallyDrop::new(other).inner;
    }

    /// Releases the claim of `owner` and moves the claim of `source` into it,
    /// leaving `source` empty.
    #[inline]
    pub fn transfer_from(owner: &mut Self, source: &mut Self) {
        Self::assign(owner, Self::take(source));
    }

    /// Relinquishes the claim of `owner` on its resource and leaves it empty.
    ///
    /// If `owner` was the last alias, the resource and the control block are
    /// de-allocated.
    /// Releasing an empty handle does nothing.
    #[inline]
    pub fn release(owner: &mut Self) {
        if let Some(alias) = owner.inner.take() {
            unsafe {
                if alias.block().count.decrement() {
                    log::trace!("releasing last alias of shared resource at {:p}", alias.resource);
                    ControlBlock::dealloc(alias.block);
                }
            }
        }
    }

    /// Returns a reference to the shared resource or `None` if `owner` is
    /// empty.
    #[inline]
    pub fn get(owner: &Self) -> Option<&T> {
        owner.inner.map(|alias| unsafe { &*alias.resource.as_ptr() })
    }

    /// Returns a reference to the shared resource without checking for
    /// emptiness.
    ///
    /// # Safety
    ///
    /// `owner` must not be empty.
    #[inline]
    pub unsafe fn get_unchecked(owner: &Self) -> &T {
        debug_assert!(owner.inner.is_some(), "`get_unchecked` called on empty handle");
        match owner.inner {
            Some(alias) => &*alias.resource.as_ptr(),
            None => core::hint::unreachable_unchecked(),
        }
    }

    /// Returns a mutable reference to the resource, if `owner` is its only
    /// alias.
    #[inline]
    pub fn get_mut(owner: &mut Self) -> Option<&mut T> {
        match owner.inner {
            Some(alias) if unsafe { alias.block() }.count.get() == 1 => {
                Some(unsafe { &mut *alias.resource.as_ptr() })
            }
            _ => None,
        }
    }

    /// Returns the resource as a [`Box`], if `owner` is its only alias, and
    /// de-allocates the control block.
    ///
    /// Otherwise, the unchanged `owner` is returned as error.
    /// An empty `owner` is always returned as error.
    #[inline]
    pub fn try_into_box(owner: Self) -> Result<Box<T>, Self> {
        let alias = match owner.inner {
            Some(alias) => alias,
            None => return Err(owner),
        };

        if unsafe { alias.block() }.count.try_claim_unique() {
            mem::forget(owner);
            Ok(unsafe { ControlBlock::dealloc_block(alias.block) })
        } else {
            Err(owner)
        }
    }

    #[inline]
    fn resource_ptr(&self) -> Option<NonNull<T>> {
        self.inner.map(|alias| alias.resource)
    }
}

/********** impl AsRef ****************************************************************************/

impl<T: ?Sized, C: Counter> AsRef<T> for SharedOwner<T, C> {
    #[inline]
    fn as_ref(&self) -> &T {
        self.deref()
    }
}

/********** impl Borrow ***************************************************************************/

impl<T: ?Sized, C: Counter> Borrow<T> for SharedOwner<T, C> {
    #[inline]
    fn borrow(&self) -> &T {
        self.deref()
    }
}

/********** impl Debug ****************************************************************************/

impl<T: ?Sized + fmt::Debug, C: Counter> fmt::Debug for SharedOwner<T, C> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match Self::get(self) {
            Some(value) => f
                .debug_struct("SharedOwner")
                .field("value", &value)
                .field("use_count", &Self::use_count(self))
                .finish(),
            None => f.write_str("SharedOwner(<empty>)"),
        }
    }
}

/********** impl Default **************************************************************************/

impl<T: ?Sized, C: Counter> Default for SharedOwner<T, C> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/********** impl Deref ****************************************************************************/

impl<T: ?Sized, C: Counter> Deref for SharedOwner<T, C> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the handle is empty.
    #[inline]
    fn deref(&self) -> &Self::Target {
        match self.inner {
            Some(alias) => unsafe { &*alias.resource.as_ptr() },
            None => internal::empty_deref("SharedOwner"),
        }
    }
}

/********** impl Pointer **************************************************************************/

impl<T: ?Sized, C: Counter> fmt::Pointer for SharedOwner<T, C> {
    impl_fmt_pointer!();
}

/********** impl Drop *****************************************************************************/

impl<T: ?Sized, C: Counter> Drop for SharedOwner<T, C> {
    #[inline]
    fn drop(&mut self) {
        Self::release(self);
    }
}

/********** impl From (T) *************************************************************************/

impl<T, C: Counter> From<T> for SharedOwner<T, C> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/********** impl From (Box<T>) ********************************************************************/

impl<T: ?Sized, C: Counter> From<Box<T>> for SharedOwner<T, C> {
    #[inline]
    fn from(resource: Box<T>) -> Self {
        Self::from_box(resource)
    }
}

/********** impl From (ExclusiveOwner<T>) *********************************************************/

impl<T: ?Sized, C: Counter> From<crate::ExclusiveOwner<T>> for SharedOwner<T, C> {
    /// Converts an exclusive handle into a shared one, an empty handle stays
    /// empty.
    #[inline]
    fn from(owner: crate::ExclusiveOwner<T>) -> Self {
        match crate::ExclusiveOwner::into_box(owner) {
            Some(resource) => Self::from_box(resource),
            None => Self::empty(),
        }
    }
}
