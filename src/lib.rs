//! Manual ownership primitives: an exclusive, move-only owning pointer and a
//! reference-counted shared owning pointer with a separately allocated
//! control block.
//!
//! Both pointer types can be *empty*. Emptiness is the observable state a
//! handle is left in after its resource has been moved out or released and it
//! can always be queried up front ([`ExclusiveOwner::is_owning`],
//! [`SharedOwner::is_owning`]).
//! De-referencing an empty handle through [`Deref`][core::ops::Deref] panics,
//! the `get` methods return an [`Option`] instead.
//!
//! Whether a [`SharedOwner`] may cross thread boundaries is decided by its
//! [`Counter`] parameter: the default [`Atomic`] counter is thread-safe,
//! whereas [`Local`] counting is statically restricted to a single thread.
//!
//! # Example
//!
//! ```
//! use conquer_owner::{ExclusiveOwner, SharedOwner};
//!
//! let mut first = ExclusiveOwner::new(1);
//! let second = ExclusiveOwner::take(&mut first);
//! assert!(ExclusiveOwner::is_empty(&first));
//! assert_eq!(*second, 1);
//!
//! let shared: SharedOwner<_> = SharedOwner::new(2.2);
//! let alias = shared.clone();
//! assert_eq!(SharedOwner::use_count(&shared), 2);
//! assert_eq!(*alias, 2.2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod internal;

mod block;
mod counter;
mod exclusive;
mod shared;

pub mod local;
pub mod sync;

#[cfg(feature = "patterns")]
pub mod patterns;

use core::marker::PhantomData;
use core::ptr::NonNull;

pub use crate::counter::{Atomic, Counter, Local};

use crate::block::Alias;

////////////////////////////////////////////////////////////////////////////////////////////////////
// ExclusiveOwner (impl in exclusive.rs)
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A move-only pointer type that is the sole owner of a heap allocated value,
/// similar to [`Box`] but with an explicit *empty* state.
///
/// An `ExclusiveOwner` never implements [`Clone`] or [`Copy`], so the only way
/// to hand its resource to another handle is a transfer, which leaves the
/// source empty ([`take`][ExclusiveOwner::take],
/// [`transfer_from`][ExclusiveOwner::transfer_from]) or consumes it
/// altogether (plain moves, [`assign`][ExclusiveOwner::assign]).
///
/// `T` may be unsized, e.g. a trait object created from a [`Box`] through
/// [`from_box`][ExclusiveOwner::from_box].
///
/// The owned resource is dropped and de-allocated exactly once, either when a
/// non-empty handle is dropped, when it is [`reset`][ExclusiveOwner::reset]
/// or when it is overwritten by an assignment.
///
/// # Examples
///
/// Copying a handle is rejected at compile time:
///
/// ```compile_fail
/// use conquer_owner::ExclusiveOwner;
///
/// fn duplicate<T: Clone>(value: &T) -> T {
///     value.clone()
/// }
///
/// let owner = ExclusiveOwner::new(1);
/// let copy = duplicate(&owner);
/// ```
///
/// A moved-from binding can no longer be used:
///
/// ```compile_fail
/// use conquer_owner::ExclusiveOwner;
///
/// let owner = ExclusiveOwner::new(1);
/// let moved = owner;
/// assert_eq!(*owner, 1);
/// ```
///
/// Transfers leave the source empty:
///
/// ```
/// use conquer_owner::ExclusiveOwner;
///
/// let mut owner = ExclusiveOwner::new(1);
/// let moved = ExclusiveOwner::take(&mut owner);
/// assert!(ExclusiveOwner::is_empty(&owner));
/// assert_eq!(*moved, 1);
/// ```
pub struct ExclusiveOwner<T: ?Sized> {
    inner: Option<NonNull<T>>,
    _marker: PhantomData<T>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// SharedOwner (impl in shared.rs)
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A reference-counted pointer type sharing the ownership of a heap allocated
/// value among all of its aliases.
///
/// Each non-empty `SharedOwner` points at the resource itself and at a
/// separately allocated control block, which stores the resource pointer and
/// the number of live aliases.
/// Cloning a handle increments that count, moving it leaves the count as is
/// and [`release`][SharedOwner::release] (which is also called on drop)
/// decrements it.
/// The release that brings the count to zero de-allocates both the resource
/// and the control block.
///
/// The counter strategy `C` defaults to the thread-safe [`Atomic`] counter.
/// Handles using the [`Local`] counter are neither [`Send`] nor [`Sync`].
pub struct SharedOwner<T: ?Sized, C: Counter = Atomic> {
    inner: Option<Alias<T, C>>,
    _marker: PhantomData<T>,
}
