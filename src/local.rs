//! Specializations of the pointer types confined to a single thread, using
//! the non-atomic [`Local`] counter.
//!
//! ```compile_fail
//! let owner = conquer_owner::local::SharedOwner::new(1);
//! std::thread::spawn(move || drop(owner));
//! ```

use crate::counter::Local;

/// A specialization of the [`SharedOwner`](crate::SharedOwner) type using the
/// [`Local`] counter.
pub type SharedOwner<T> = crate::SharedOwner<T, Local>;
