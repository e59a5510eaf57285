mod common;

use conquer_owner::{local, sync, Local, SharedOwner};

use crate::common::{init_logging, Tracked};

#[test]
fn copies_release_in_any_order() {
    init_logging();
    let (tracked, drops) = Tracked::new(1.0);
    let original: sync::SharedOwner<_> = SharedOwner::new(tracked);
    let mut handles: Vec<_> = (0..4).map(|_| original.clone()).collect();
    handles.insert(2, original);
    assert!(handles.iter().all(|handle| SharedOwner::use_count(handle) == 5));

    for &idx in &[3, 0, 4, 1] {
        assert!(SharedOwner::is_owning(&handles[idx]));
        SharedOwner::release(&mut handles[idx]);
        assert!(SharedOwner::is_empty(&handles[idx]));
        assert_eq!(drops.get(), 0);
    }

    assert_eq!(SharedOwner::use_count(&handles[2]), 1);
    SharedOwner::release(&mut handles[2]);
    assert_eq!(drops.get(), 1);

    assert!(handles.iter().all(SharedOwner::is_empty));
    drop(handles);
    assert_eq!(drops.get(), 1);
}

#[test]
fn copy_assign_frees_previous_and_shares_new() {
    let (a, a_drops) = Tracked::new(1.0);
    let (b, b_drops) = Tracked::new(2.0);

    let mut owner: local::SharedOwner<_> = SharedOwner::new(a);
    let other = SharedOwner::new(b);
    assert_eq!(SharedOwner::use_count(&other), 1);

    SharedOwner::assign_clone(&mut owner, &other);
    assert_eq!(a_drops.get(), 1);
    assert_eq!(SharedOwner::use_count(&other), 2);
    assert!(SharedOwner::ptr_eq(&owner, &other));
    assert_eq!(owner.value, 2.0);

    drop(other);
    assert_eq!(b_drops.get(), 0);
    drop(owner);
    assert_eq!(b_drops.get(), 1);
}

#[test]
fn copy_assign_of_alias_is_noop() {
    let (tracked, drops) = Tracked::new(1.0);
    let mut owner: sync::SharedOwner<_> = SharedOwner::new(tracked);
    let alias = owner.clone();

    SharedOwner::assign_clone(&mut owner, &alias);
    assert_eq!(SharedOwner::use_count(&owner), 2);

    owner.clone_from(&alias);
    assert_eq!(SharedOwner::use_count(&owner), 2);
    assert_eq!(drops.get(), 0);
}

#[test]
fn move_does_not_change_count() {
    let mut source: sync::SharedOwner<_> = SharedOwner::new(5u32);
    let alias = source.clone();
    let destination = SharedOwner::take(&mut source);

    assert!(SharedOwner::is_empty(&source));
    assert_eq!(SharedOwner::use_count(&source), 0);
    assert_eq!(SharedOwner::use_count(&destination), 2);
    assert_eq!(*destination, 5);
    assert_eq!(*alias, 5);
}

#[test]
fn move_assign_releases_previous() {
    let (a, a_drops) = Tracked::new(1.0);
    let (b, b_drops) = Tracked::new(2.0);

    let mut owner: SharedOwner<_, Local> = SharedOwner::new(a);
    let mut other = SharedOwner::new(b);
    SharedOwner::transfer_from(&mut owner, &mut other);

    assert_eq!(a_drops.get(), 1);
    assert!(SharedOwner::is_empty(&other));
    assert_eq!(SharedOwner::use_count(&owner), 1);
    assert_eq!(owner.value, 2.0);

    drop(owner);
    assert_eq!(b_drops.get(), 1);
}

#[test]
fn move_assign_from_alias_keeps_resource() {
    let (tracked, drops) = Tracked::new(1.0);
    let mut owner: sync::SharedOwner<_> = SharedOwner::new(tracked);
    let alias = owner.clone();

    SharedOwner::assign(&mut owner, alias);
    assert_eq!(drops.get(), 0);
    assert_eq!(SharedOwner::use_count(&owner), 1);
    assert_eq!(owner.value, 1.0);
}

#[test]
fn release_is_idempotent() {
    let (tracked, drops) = Tracked::new(1.0);
    let mut owner: sync::SharedOwner<_> = SharedOwner::new(tracked);
    SharedOwner::release(&mut owner);
    SharedOwner::release(&mut owner);
    assert_eq!(drops.get(), 1);

    let mut empty = sync::SharedOwner::<u8>::empty();
    SharedOwner::release(&mut empty);
    assert!(SharedOwner::is_empty(&empty));
}

#[test]
fn distinct_values_in_sequence() {
    let owners: Vec<sync::SharedOwner<f64>> =
        vec![SharedOwner::new(1.1), SharedOwner::new(2.2), SharedOwner::new(3.3)];
    let values: Vec<f64> = owners.iter().map(|owner| **owner).collect();
    assert_eq!(values, [1.1, 2.2, 3.3]);
}

#[test]
fn copies_in_sequence_release_once() {
    let (tracked, drops) = Tracked::new(1.1);
    let mut original: sync::SharedOwner<_> = SharedOwner::new(tracked);
    let mut copies: Vec<_> = (0..3).map(|_| original.clone()).collect();
    assert_eq!(SharedOwner::use_count(&original), 4);
    assert!(copies.iter().all(|copy| copy.value == 1.1));

    copies.iter_mut().for_each(SharedOwner::release);
    assert_eq!(drops.get(), 0);
    SharedOwner::release(&mut original);
    assert_eq!(drops.get(), 1);

    assert!(SharedOwner::is_empty(&original));
    assert!(copies.iter().all(SharedOwner::is_empty));
}

#[test]
fn unsized_resources() {
    let owner: sync::SharedOwner<[u32]> = SharedOwner::from_box(vec![1, 2, 3].into_boxed_slice());
    let alias = owner.clone();
    assert_eq!(alias.len(), 3);
    assert_eq!(&*owner, &[1, 2, 3]);
}

#[test]
fn raw_resources() {
    let (tracked, drops) = Tracked::new(8.0);
    let raw = Box::into_raw(Box::new(tracked));
    let owner: local::SharedOwner<_> = unsafe { SharedOwner::from_raw(raw) };
    let alias = owner.clone();
    drop(owner);
    drop(alias);
    assert_eq!(drops.get(), 1);

    let null: local::SharedOwner<Tracked> = unsafe { SharedOwner::from_raw(std::ptr::null_mut()) };
    assert!(SharedOwner::is_empty(&null));
}

#[test]
fn concurrent_copies_and_releases() {
    const THREADS: usize = 16;

    let (tracked, drops) = Tracked::new(1.0);
    let mut owner: sync::SharedOwner<_> = SharedOwner::new(tracked);

    crossbeam::scope(|scope| {
        for _ in 0..THREADS {
            let owner = &owner;
            scope.spawn(move |_| {
                for _ in 0..500 {
                    let mut alias = owner.clone();
                    let nested = alias.clone();
                    SharedOwner::release(&mut alias);
                    assert_eq!(nested.value, 1.0);
                }
            });
        }
    })
    .unwrap();

    assert_eq!(SharedOwner::use_count(&owner), 1);
    assert_eq!(drops.get(), 0);
    SharedOwner::release(&mut owner);
    assert_eq!(drops.get(), 1);
}

#[test]
fn last_release_on_other_thread() {
    let (tracked, drops) = Tracked::new(1.0);
    let owner: sync::SharedOwner<_> = SharedOwner::new(tracked);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let alias = owner.clone();
            std::thread::spawn(move || drop(alias))
        })
        .collect();

    drop(owner);
    handles.into_iter().for_each(|handle| handle.join().unwrap());
    assert_eq!(drops.get(), 1);
}
