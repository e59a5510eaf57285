use core::fmt;
use core::mem;
use core::ptr::NonNull;

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        use std::boxed::Box;
    } else {
        use alloc::boxed::Box;
    }
}

use crate::counter::Counter;

////////////////////////////////////////////////////////////////////////////////////////////////////
// ControlBlock
////////////////////////////////////////////////////////////////////////////////////////////////////

/// The shared bookkeeping record all aliases of one resource point at.
///
/// The block is allocated separately from the resource, which is handed over
/// as an existing heap allocation (a [`Box`]) and is never moved.
/// Neither the block nor the resource belong to any individual alias, they
/// are de-allocated together by whichever alias drops the count to zero.
pub(crate) struct ControlBlock<T: ?Sized, C> {
    /// The number of live aliases.
    pub(crate) count: C,
    /// The shared resource.
    resource: NonNull<T>,
}

/********** impl inherent *************************************************************************/

impl<T: ?Sized, C: Counter> ControlBlock<T, C> {
    /// Allocates a new control block with a count of one for `resource`.
    #[inline]
    pub(crate) fn alloc(resource: NonNull<T>) -> NonNull<Self> {
        let block = Box::leak(Box::new(Self { count: C::one(), resource }));
        NonNull::from(block)
    }

    /// De-allocates the resource and then the block itself.
    ///
    /// # Safety
    ///
    /// The count of `block` must have been brought to zero by the caller and
    /// no other alias may access either allocation afterwards.
    #[inline]
    pub(crate) unsafe fn dealloc(block: NonNull<Self>) {
        let block = Box::from_raw(block.as_ptr());
        mem::drop(Box::from_raw(block.resource.as_ptr()));
    }

    /// De-allocates only the block and returns ownership of the resource.
    ///
    /// # Safety
    ///
    /// See [`dealloc`][ControlBlock::dealloc].
    #[inline]
    pub(crate) unsafe fn dealloc_block(block: NonNull<Self>) -> Box<T> {
        let block = Box::from_raw(block.as_ptr());
        Box::from_raw(block.resource.as_ptr())
    }
}

/********** impl Debug ****************************************************************************/

impl<T: ?Sized, C: fmt::Debug> fmt::Debug for ControlBlock<T, C> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ControlBlock")
            .field("count", &self.count)
            .field("resource", &self.resource)
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Alias
////////////////////////////////////////////////////////////////////////////////////////////////////

/// The pair of pointers held by every non-empty
/// [`SharedOwner`][crate::SharedOwner].
///
/// The resource pointer duplicates the one stored in the block, so that
/// de-referencing does not need to go through the block.
pub(crate) struct Alias<T: ?Sized, C> {
    pub(crate) resource: NonNull<T>,
    pub(crate) block: NonNull<ControlBlock<T, C>>,
}

/********** impl inherent *************************************************************************/

impl<T: ?Sized, C: Counter> Alias<T, C> {
    /// Allocates a new control block for the heap allocated `resource`.
    #[inline]
    pub(crate) fn new(resource: Box<T>) -> Self {
        let resource = NonNull::from(Box::leak(resource));
        Self { resource, block: ControlBlock::alloc(resource) }
    }

    /// Returns a reference to the alias' control block.
    ///
    /// # Safety
    ///
    /// The alias must hold an unreleased claim on its block.
    #[inline]
    pub(crate) unsafe fn block(&self) -> &ControlBlock<T, C> {
        self.block.as_ref()
    }
}

/********** impl Clone ****************************************************************************/

impl<T: ?Sized, C> Clone for Alias<T, C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

/********** impl Copy *****************************************************************************/

impl<T: ?Sized, C> Copy for Alias<T, C> {}
