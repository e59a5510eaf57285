//! Classic object-oriented design patterns expressed on top of the pointer
//! types of this crate.
//!
//! Every polymorphic value is handed around as an
//! [`ExclusiveOwner<dyn Trait>`][crate::ExclusiveOwner].

pub mod adapter;
pub mod builder;
pub mod factory;
pub mod prototype;
pub mod proxy;
pub mod singleton;

mod error;

pub use self::error::{Error, Result};
