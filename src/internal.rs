//! Internal macros and traits which may appear in public interfaces, but are
//! not actually exported by the crate.

////////////////////////////////////////////////////////////////////////////////////////////////////
// Internal (trait)
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A general purpose sealed marker trait for all relevant types of this crate.
pub trait Internal {}

/********** helpers *******************************************************************************/

/// Aborts a de-reference of an empty handle.
#[cold]
#[inline(never)]
pub(crate) fn empty_deref(ty_name: &'static str) -> ! {
    panic!("attempted to de-reference an empty `{}`", ty_name)
}

/********** implementation macros *****************************************************************/

/// Implements the emptiness queries shared by all handle types, which must
/// have an `inner: Option<_>` field.
macro_rules! impl_state_queries {
    () => {
        /// Returns `true` if the handle currently owns a resource.
        #[inline]
        pub fn is_owning(owner: &Self) -> bool {
            owner.inner.is_some()
        }

        /// Returns `true` if the handle does not own any resource, i.e. it
        /// has been moved out of, released or was constructed empty.
        #[inline]
        pub fn is_empty(owner: &Self) -> bool {
            owner.inner.is_none()
        }
    };
}

macro_rules! impl_fmt_pointer {
    () => {
        #[inline]
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self.resource_ptr() {
                Some(ptr) => fmt::Pointer::fmt(&ptr, f),
                None => fmt::Pointer::fmt(&core::ptr::null::<()>(), f),
            }
        }
    };
}
