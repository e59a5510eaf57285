//! Specializations of the pointer types for sharing resources across
//! threads, using the [`Atomic`] counter.

use crate::counter::Atomic;

/// A specialization of the [`SharedOwner`](crate::SharedOwner) type using the
/// [`Atomic`] counter.
pub type SharedOwner<T> = crate::SharedOwner<T, Atomic>;

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::SharedOwner;

    struct Tracked(Arc<AtomicUsize>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn concurrent_clone_and_release() {
        const THREADS: usize = 8;
        const CLONES: usize = 1_000;

        let drops = Arc::new(AtomicUsize::new(0));
        let owner = SharedOwner::new(Tracked(Arc::clone(&drops)));

        crossbeam::scope(|scope| {
            for _ in 0..THREADS {
                let owner = owner.clone();
                scope.spawn(move |_| {
                    let mut aliases: Vec<_> = (0..CLONES).map(|_| owner.clone()).collect();
                    aliases.iter_mut().for_each(SharedOwner::release);
                    assert!(aliases.iter().all(SharedOwner::is_empty));
                });
            }
        })
        .unwrap();

        assert_eq!(SharedOwner::use_count(&owner), 1);
        assert_eq!(drops.load(Ordering::SeqCst), 0);
        drop(owner);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }
}
