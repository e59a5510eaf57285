//! Reference counter strategies for [`SharedOwner`][crate::SharedOwner].

use core::cell::Cell;
use core::fmt;
use core::sync::atomic::{self, AtomicUsize, Ordering};

use crate::internal::Internal;

/// Counts beyond this limit are treated as a leak of handles, which would
/// otherwise eventually overflow the count and cause a use-after-free.
const MAX_COUNT: usize = isize::MAX as usize;

////////////////////////////////////////////////////////////////////////////////////////////////////
// Counter (trait)
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A sealed trait for the reference count stored in each control block.
///
/// # Safety
///
/// Implementations must report exactly one transition to zero per control
/// block through [`decrement`][Counter::decrement] or
/// [`try_claim_unique`][Counter::try_claim_unique], and that transition must
/// happen-after every other decrement of the same counter.
pub unsafe trait Counter: Internal + Sized {
    /// Creates a counter for a freshly allocated control block (count = 1).
    fn one() -> Self;
    /// Increments the count by one for a new alias.
    fn increment(&self);
    /// Decrements the count by one and returns `true` if it reached zero.
    fn decrement(&self) -> bool;
    /// Sets the count from one to zero, if the count is exactly one, and
    /// returns `true` on success.
    fn try_claim_unique(&self) -> bool;
    /// Returns the current count.
    ///
    /// For an [`Atomic`] counter the value may be outdated by the time it is
    /// returned.
    fn get(&self) -> usize;
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Atomic
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A thread-safe atomic reference count.
///
/// Increments, decrements and the zero check each happen as a single atomic
/// read-modify-write operation, so aliases may be cloned and released
/// concurrently from different threads.
pub struct Atomic(AtomicUsize);

/********** impl Counter **************************************************************************/

unsafe impl Counter for Atomic {
    #[inline]
    fn one() -> Self {
        Self(AtomicUsize::new(1))
    }

    #[inline]
    fn increment(&self) {
        // a new alias can only be created from an existing one, which keeps
        // the block alive, so no synchronization is required
        let prev = self.0.fetch_add(1, Ordering::Relaxed);
        if prev > MAX_COUNT {
            overflow();
        }
    }

    #[inline]
    fn decrement(&self) -> bool {
        if self.0.fetch_sub(1, Ordering::Release) != 1 {
            return false;
        }

        // synchronizes with all previous releasing decrements, so that all
        // accesses through other aliases happen-before the de-allocation
        atomic::fence(Ordering::Acquire);
        true
    }

    #[inline]
    fn try_claim_unique(&self) -> bool {
        self.0.compare_exchange(1, 0, Ordering::Acquire, Ordering::Relaxed).is_ok()
    }

    #[inline]
    fn get(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }
}

/********** impl Debug ****************************************************************************/

impl fmt::Debug for Atomic {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Atomic").field(&self.get()).finish()
    }
}

/********** impl Internal *************************************************************************/

impl Internal for Atomic {}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Local
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A plain, non-atomic reference count.
///
/// The counter is not [`Sync`], which makes every
/// [`SharedOwner`][crate::SharedOwner] using it neither [`Send`] nor
/// [`Sync`], so all aliases of a resource are confined to the thread that
/// created it.
pub struct Local(Cell<usize>);

/********** impl Counter **************************************************************************/

unsafe impl Counter for Local {
    #[inline]
    fn one() -> Self {
        Self(Cell::new(1))
    }

    #[inline]
    fn increment(&self) {
        let count = self.0.get();
        if count > MAX_COUNT {
            overflow();
        }

        self.0.set(count + 1);
    }

    #[inline]
    fn decrement(&self) -> bool {
        let count = self.0.get() - 1;
        self.0.set(count);
        count == 0
    }

    #[inline]
    fn try_claim_unique(&self) -> bool {
        if self.0.get() == 1 {
            self.0.set(0);
            true
        } else {
            false
        }
    }

    #[inline]
    fn get(&self) -> usize {
        self.0.get()
    }
}

/********** impl Debug ****************************************************************************/

impl fmt::Debug for Local {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Local").field(&self.get()).finish()
    }
}

/********** impl Internal *************************************************************************/

impl Internal for Local {}

/********** helpers *******************************************************************************/

#[cold]
#[inline(never)]
fn overflow() -> ! {
    #[cfg(feature = "std")]
    {
        log::error!("reference count overflow, aborting");
        std::process::abort();
    }

    #[cfg(not(feature = "std"))]
    panic!("reference count overflow");
}

#[cfg(test)]
mod tests {
    use super::{Atomic, Counter, Local};

    fn cycle<C: Counter>() {
        let counter = C::one();
        counter.increment();
        counter.increment();
        assert_eq!(counter.get(), 3);
        assert!(!counter.decrement());
        assert!(!counter.try_claim_unique());
        assert!(!counter.decrement());
        assert_eq!(counter.get(), 1);
        assert!(counter.decrement());
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn atomic_cycle() {
        cycle::<Atomic>();
    }

    #[test]
    fn local_cycle() {
        cycle::<Local>();
    }

    #[test]
    fn claim_unique() {
        let counter = Atomic::one();
        assert!(counter.try_claim_unique());
        assert_eq!(counter.get(), 0);

        let counter = Local::one();
        assert!(counter.try_claim_unique());
        assert_eq!(counter.get(), 0);
    }
}
