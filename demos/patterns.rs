use std::ptr;

use conquer_owner::patterns::factory::{RectangleFactory, ShapeFactory, TriangleFactory};
use conquer_owner::patterns::singleton::Singleton;
use conquer_owner::sync::SharedOwner;

type Factory = dyn ShapeFactory + Send + Sync;

fn main() {
    env_logger::init();

    let first = Singleton::get();
    println!("{}", first.hi());

    let second = Singleton::get();
    assert!(ptr::eq(first, second), "singleton pattern failed");
    println!("{}", second.hi());

    let factories = vec![
        SharedOwner::<Factory>::from_box(Box::new(TriangleFactory)),
        SharedOwner::<Factory>::from_box(Box::new(RectangleFactory)),
    ];

    for factory in &factories {
        let alias = factory.clone();
        println!("{} (use count: {})", alias.do_work(), SharedOwner::use_count(&alias));
    }
}
