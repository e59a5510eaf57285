//! A process-wide instance that is created exactly once, on first access.

use std::sync::atomic::{AtomicUsize, Ordering};

use lazy_static::lazy_static;

use crate::ExclusiveOwner;

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    // the initializer runs behind a `Once` barrier, so concurrent first
    // accesses block until the single construction is complete
    static ref INSTANCE: ExclusiveOwner<Singleton> = {
        CONSTRUCTIONS.fetch_add(1, Ordering::Relaxed);
        log::debug!("constructing process-wide singleton");
        ExclusiveOwner::new(Singleton { _private: () })
    };
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Singleton
////////////////////////////////////////////////////////////////////////////////////////////////////

/// The one and only instance, which can neither be constructed, cloned nor
/// moved out of its static storage.
#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

/********** impl inherent *************************************************************************/

impl Singleton {
    /// Returns the process-wide instance, constructing it on first access.
    #[inline]
    pub fn get() -> &'static Singleton {
        &**INSTANCE
    }

    /// Returns how many times the instance has been constructed, which is
    /// zero before the first access and one afterwards.
    #[inline]
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::Relaxed)
    }

    /// Greets.
    #[inline]
    pub fn hi(&self) -> &'static str {
        log::info!("Hi");
        "Hi"
    }
}
