use core::borrow::{Borrow, BorrowMut};
use core::convert::{AsMut, AsRef};
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        use std::boxed::Box;
    } else {
        use alloc::boxed::Box;
    }
}

use crate::internal;
use crate::ExclusiveOwner;

/********** impl Send + Sync **********************************************************************/

unsafe impl<T: ?Sized> Send for ExclusiveOwner<T> where T: Send {}
unsafe impl<T: ?Sized> Sync for ExclusiveOwner<T> where T: Sync {}

/********** impl inherent (sized) *****************************************************************/

impl<T> ExclusiveOwner<T> {
    /// Allocates `value` on the heap and returns an owning handle to it.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::from_box(Box::new(value))
    }

    /// Consumes the [`ExclusiveOwner`], de-allocates its memory and extracts
    /// the contained value, if there is one.
    #[inline]
    #[allow(clippy::wrong_self_convention)]
    pub fn into_inner(owner: Self) -> Option<T> {
        Self::into_box(owner).map(|boxed| *boxed)
    }

    /// Replaces the owned value with `value`, returning the previous one.
    #[inline]
    pub fn replace(owner: &mut Self, value: T) -> Option<T> {
        Self::into_inner(mem::replace(owner, Self::new(value)))
    }
}

/********** impl inherent *************************************************************************/

impl<T: ?Sized> ExclusiveOwner<T> {
    /// Creates an empty handle that does not own anything.
    #[inline]
    pub const fn empty() -> Self {
        Self { inner: None, _marker: PhantomData }
    }

    /// Takes custody of the heap allocated `resource`.
    ///
    /// No allocation is performed, the resource stays at its address.
    #[inline]
    pub fn from_box(resource: Box<T>) -> Self {
        Self { inner: Some(NonNull::from(Box::leak(resource))), _marker: PhantomData }
    }

    /// Takes custody of the resource behind the raw `ptr`, which may be null
    /// to create an empty handle.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must have been obtained from [`Box::into_raw`] or
    /// [`ExclusiveOwner::into_raw`] and must not be owned by anything else.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut T) -> Self {
        Self { inner: NonNull::new(ptr), _marker: PhantomData }
    }

    impl_state_queries!();

    /// Transfers the resource out of `owner` into a new handle, leaving
    /// `owner` empty.
    #[inline]
    pub fn take(owner: &mut Self) -> Self {
        Self { inner: owner.inner.take(), _marker: PhantomData }
    }

    /// Drops the resource currently owned by `owner`, if any, and then takes
    /// over the resource of `other`.
    ///
    /// An `owner` can never be assigned to itself, since the borrow rules
    /// forbid moving a value that is mutably borrowed.
    #[inline]
    pub fn assign(owner: &mut Self, other: Self) {
        Self::reset(owner);
        let other = ManuallyDrop::new(other);
        owner.inner = other.inner;
    }

    /// Drops the resource currently owned by `owner`, if any, and moves the
    /// resource of `source` into it, leaving `source` empty.
    #[inline]
    pub fn transfer_from(owner: &mut Self, source: &mut Self) {
        Self::assign(owner, Self::take(source));
    }

    /// Drops and de-allocates the owned resource, leaving `owner` empty.
    ///
    /// Resetting an empty handle does nothing.
    #[inline]
    pub fn reset(owner: &mut Self) {
        if let Some(ptr) = owner.inner.take() {
            log::trace!("dropping exclusively owned resource at {:p}", ptr);
            unsafe { mem::drop(Box::from_raw(ptr.as_ptr())) };
        }
    }

    /// Returns a reference to the owned resource or `None` if `owner` is
    /// empty.
    #[inline]
    pub fn get(owner: &Self) -> Option<&T> {
        owner.inner.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// Returns a mutable reference to the owned resource or `None` if `owner`
    /// is empty.
    #[inline]
    pub fn get_mut(owner: &mut Self) -> Option<&mut T> {
        owner.inner.map(|ptr| unsafe { &mut *ptr.as_ptr() })
    }

    /// Returns a reference to the owned resource without checking for
    /// emptiness.
    ///
    /// # Safety
    ///
    /// `owner` must not be empty.
    #[inline]
    pub unsafe fn get_unchecked(owner: &Self) -> &T {
        debug_assert!(owner.inner.is_some(), "`get_unchecked` called on empty handle");
        match owner.inner {
            Some(ptr) => &*ptr.as_ptr(),
            None => core::hint::unreachable_unchecked(),
        }
    }

    /// Consumes `owner` and returns the owned resource as a [`Box`].
    #[inline]
    #[allow(clippy::wrong_self_convention)]
    pub fn into_box(owner: Self) -> Option<Box<T>> {
        let owner = ManuallyDrop::new(owner);
        owner.inner.map(|ptr| unsafe { Box::from_raw(ptr.as_ptr()) })
    }

    /// Consumes `owner` and returns the raw pointer to the owned resource,
    /// which is `None` for an empty handle.
    ///
    /// The caller becomes responsible for de-allocating the resource, e.g. by
    /// passing it back to [`from_raw`][ExclusiveOwner::from_raw].
    #[inline]
    #[allow(clippy::wrong_self_convention)]
    pub fn into_raw(owner: Self) -> Option<NonNull<T>> {
        let owner = ManuallyDrop::new(owner);
        owner.inner
    }

    /// Returns `true` if both handles own the same resource or are both
    /// empty.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        match (a.inner, b.inner) {
            (Some(a), Some(b)) => ptr::eq(a.as_ptr() as *const u8, b.as_ptr() as *const u8),
            (None, None) => true,
            _ => false,
        }
    }

    #[inline]
    fn resource_ptr(&self) -> Option<NonNull<T>> {
        self.inner
    }
}

/********** impl AsRef ****************************************************************************/

impl<T: ?Sized> AsRef<T> for ExclusiveOwner<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        self.deref()
    }
}

/********** impl AsMut ****************************************************************************/

impl<T: ?Sized> AsMut<T> for ExclusiveOwner<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut T {
        self.deref_mut()
    }
}

/********** impl Borrow ***************************************************************************/

impl<T: ?Sized> Borrow<T> for ExclusiveOwner<T> {
    #[inline]
    fn borrow(&self) -> &T {
        self.deref()
    }
}

/********** impl BorrowMut ************************************************************************/

impl<T: ?Sized> BorrowMut<T> for ExclusiveOwner<T> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut T {
        self.deref_mut()
    }
}

/********** impl Debug ****************************************************************************/

impl<T: ?Sized + fmt::Debug> fmt::Debug for ExclusiveOwner<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match Self::get(self) {
            Some(value) => f.debug_tuple("ExclusiveOwner").field(&value).finish(),
            None => f.write_str("ExclusiveOwner(<empty>)"),
        }
    }
}

/********** impl Default **************************************************************************/

impl<T: ?Sized> Default for ExclusiveOwner<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/********** impl Deref ****************************************************************************/

impl<T: ?Sized> Deref for ExclusiveOwner<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the handle is empty.
    #[inline]
    fn deref(&self) -> &Self::Target {
        match self.inner {
            Some(ptr) => unsafe { &*ptr.as_ptr() },
            None => internal::empty_deref("ExclusiveOwner"),
        }
    }
}

/********** impl DerefMut *************************************************************************/

impl<T: ?Sized> DerefMut for ExclusiveOwner<T> {
    /// # Panics
    ///
    /// Panics if the handle is empty.
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self.inner {
            Some(ptr) => unsafe { &mut *ptr.as_ptr() },
            None => internal::empty_deref("ExclusiveOwner"),
        }
    }
}

/********** impl Pointer **************************************************************************/

impl<T: ?Sized> fmt::Pointer for ExclusiveOwner<T> {
    impl_fmt_pointer!();
}

/********** impl Drop *****************************************************************************/

impl<T: ?Sized> Drop for ExclusiveOwner<T> {
    #[inline]
    fn drop(&mut self) {
        Self::reset(self);
    }
}

/********** impl From (T) *************************************************************************/

impl<T> From<T> for ExclusiveOwner<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/********** impl From (Box<T>) ********************************************************************/

impl<T: ?Sized> From<Box<T>> for ExclusiveOwner<T> {
    #[inline]
    fn from(resource: Box<T>) -> Self {
        Self::from_box(resource)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::ExclusiveOwner;

    struct Tracked(Rc<Cell<u32>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn drop_after_reset_is_noop() {
        let drops = Rc::new(Cell::new(0));
        let mut owner = ExclusiveOwner::new(Tracked(Rc::clone(&drops)));
        ExclusiveOwner::reset(&mut owner);
        assert_eq!(drops.get(), 1);
        assert!(ExclusiveOwner::is_empty(&owner));
        drop(owner);
        assert_eq!(drops.get(), 1);

        let owner = ExclusiveOwner::new(Tracked(Rc::clone(&drops)));
        drop(owner);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn empty_handle() {
        let owner = ExclusiveOwner::<i32>::empty();
        assert!(ExclusiveOwner::is_empty(&owner));
        assert!(!ExclusiveOwner::is_owning(&owner));
        assert_eq!(ExclusiveOwner::get(&owner), None);
        assert_eq!(format!("{:?}", owner), "ExclusiveOwner(<empty>)");
    }

    #[test]
    fn raw_round_trip() {
        let owner = ExclusiveOwner::new(String::from("raw"));
        let ptr = ExclusiveOwner::into_raw(owner).unwrap();
        let owner = unsafe { ExclusiveOwner::from_raw(ptr.as_ptr()) };
        assert_eq!(&*owner, "raw");

        let null = unsafe { ExclusiveOwner::<String>::from_raw(core::ptr::null_mut()) };
        assert!(ExclusiveOwner::is_empty(&null));
    }

    #[test]
    fn replace_returns_previous() {
        let mut owner = ExclusiveOwner::new(1);
        assert_eq!(ExclusiveOwner::replace(&mut owner, 2), Some(1));
        assert_eq!(*owner, 2);

        let mut empty = ExclusiveOwner::empty();
        assert_eq!(ExclusiveOwner::replace(&mut empty, 3), None);
        assert_eq!(*empty, 3);
    }

    #[test]
    fn unsized_slice() {
        let boxed: Box<[u8]> = vec![1, 2, 3].into_boxed_slice();
        let mut owner = ExclusiveOwner::from_box(boxed);
        owner[0] = 4;
        assert_eq!(&*owner, &[4, 2, 3]);
        assert_eq!(ExclusiveOwner::into_box(owner).unwrap().len(), 3);
    }

    #[test]
    #[should_panic(expected = "empty `ExclusiveOwner`")]
    fn empty_deref_panics() {
        let owner = ExclusiveOwner::<u32>::empty();
        let value: u32 = *owner;
        assert_eq!(value, 0);
    }
}
