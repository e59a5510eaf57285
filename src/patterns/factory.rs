//! The factory method pattern: subclasses decide which concrete [`Shape`] a
//! shared algorithm works on.

use crate::ExclusiveOwner;

/// A drawable shape.
pub trait Shape {
    /// Returns the shape's name.
    fn draw(&self) -> String;
}

/// A [`Shape`] with three corners.
#[derive(Debug, Default, Clone, Copy)]
pub struct Triangle;

impl Shape for Triangle {
    #[inline]
    fn draw(&self) -> String {
        "triangle".into()
    }
}

/// A [`Shape`] with four right angles.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rectangle;

impl Shape for Rectangle {
    #[inline]
    fn draw(&self) -> String {
        "rectangle".into()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// ShapeFactory (trait)
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A creator of [`Shape`]s, whose provided [`do_work`][ShapeFactory::do_work]
/// operates on whatever the factory method [`create`][ShapeFactory::create]
/// returns.
pub trait ShapeFactory {
    /// The factory method.
    fn create(&self) -> ExclusiveOwner<dyn Shape>;

    /// Creates a shape and describes it.
    #[inline]
    fn do_work(&self) -> String {
        let shape = self.create();
        format!("name: {}", shape.draw())
    }
}

/// Creates [`Triangle`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct TriangleFactory;

impl ShapeFactory for TriangleFactory {
    #[inline]
    fn create(&self) -> ExclusiveOwner<dyn Shape> {
        ExclusiveOwner::<dyn Shape>::from_box(Box::new(Triangle))
    }
}

/// Creates [`Rectangle`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct RectangleFactory;

impl ShapeFactory for RectangleFactory {
    #[inline]
    fn create(&self) -> ExclusiveOwner<dyn Shape> {
        ExclusiveOwner::<dyn Shape>::from_box(Box::new(Rectangle))
    }
}
