//! The prototype pattern: new objects are created by cloning registered
//! template instances through a type-erased interface.

use std::collections::HashMap;

use crate::patterns::{Error, Result};
use crate::ExclusiveOwner;

////////////////////////////////////////////////////////////////////////////////////////////////////
// Prototype (trait)
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A type-erased clonable template.
pub trait Prototype {
    /// Returns a new exclusively owned copy of `self`.
    fn clone_box(&self) -> ExclusiveOwner<dyn Prototype>;
    /// Describes the prototype's state.
    fn representation(&self) -> String;
}

/// The state common to all prototypes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Base {
    name: String,
    val: i32,
}

impl Base {
    #[inline]
    fn representation(&self) -> String {
        format!("Name: {} Val: {}", self.name, self.val)
    }
}

/********** PrototypeA ****************************************************************************/

/// A prototype with an additional `A` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrototypeA {
    base: Base,
    val_a: i32,
}

impl PrototypeA {
    /// Creates a new prototype.
    #[inline]
    pub fn new(name: impl Into<String>, val: i32, val_a: i32) -> Self {
        Self { base: Base { name: name.into(), val }, val_a }
    }
}

impl Prototype for PrototypeA {
    #[inline]
    fn clone_box(&self) -> ExclusiveOwner<dyn Prototype> {
        ExclusiveOwner::<dyn Prototype>::from_box(Box::new(self.clone()))
    }

    #[inline]
    fn representation(&self) -> String {
        format!("{} ValA: {}", self.base.representation(), self.val_a)
    }
}

/********** PrototypeB ****************************************************************************/

/// A prototype with an additional `B` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrototypeB {
    base: Base,
    val_b: i32,
}

impl PrototypeB {
    /// Creates a new prototype.
    #[inline]
    pub fn new(name: impl Into<String>, val: i32, val_b: i32) -> Self {
        Self { base: Base { name: name.into(), val }, val_b }
    }
}

impl Prototype for PrototypeB {
    #[inline]
    fn clone_box(&self) -> ExclusiveOwner<dyn Prototype> {
        ExclusiveOwner::<dyn Prototype>::from_box(Box::new(self.clone()))
    }

    #[inline]
    fn representation(&self) -> String {
        format!("{} ValB: {}", self.base.representation(), self.val_b)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// PrototypeKind
////////////////////////////////////////////////////////////////////////////////////////////////////

/// The keys under which prototypes are registered.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum PrototypeKind {
    /// Key for [`PrototypeA`] templates.
    A,
    /// Key for [`PrototypeB`] templates.
    B,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// PrototypeRegistry
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A registry of templates, which creates new objects by cloning them.
pub struct PrototypeRegistry {
    prototypes: HashMap<PrototypeKind, ExclusiveOwner<dyn Prototype>>,
}

/********** impl inherent *************************************************************************/

impl PrototypeRegistry {
    /// Creates a registry without any templates.
    #[inline]
    pub fn empty() -> Self {
        Self { prototypes: HashMap::new() }
    }

    /// Creates a registry with the default `A` and `B` templates.
    #[inline]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(PrototypeKind::A, PrototypeA::new("PrototypeA", 1, 1));
        registry.register(PrototypeKind::B, PrototypeB::new("PrototypeB", 2, 2));
        registry
    }

    /// Registers `prototype` as template for `kind` and returns the template
    /// it replaces, if any.
    #[inline]
    pub fn register(
        &mut self,
        kind: PrototypeKind,
        prototype: impl Prototype + 'static,
    ) -> Option<ExclusiveOwner<dyn Prototype>> {
        let prototype = ExclusiveOwner::<dyn Prototype>::from_box(Box::new(prototype));
        self.prototypes.insert(kind, prototype)
    }

    /// Removes the template for `kind`.
    #[inline]
    pub fn unregister(&mut self, kind: PrototypeKind) -> Option<ExclusiveOwner<dyn Prototype>> {
        self.prototypes.remove(&kind)
    }

    /// Creates a new object by cloning the template registered for `kind`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnknownPrototype`] if no template is registered
    /// for `kind`.
    #[inline]
    pub fn create(&self, kind: PrototypeKind) -> Result<ExclusiveOwner<dyn Prototype>> {
        self.prototypes
            .get(&kind)
            .map(|prototype| prototype.clone_box())
            .ok_or(Error::UnknownPrototype(kind))
    }
}

/********** impl Default **************************************************************************/

impl Default for PrototypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
