//! The builder pattern: a director drives a step-wise builder, which hands
//! out the finished product and starts over.

use crate::ExclusiveOwner;

////////////////////////////////////////////////////////////////////////////////////////////////////
// DinnerMenu
////////////////////////////////////////////////////////////////////////////////////////////////////

/// The product: an ordered list of courses.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DinnerMenu {
    items: Vec<String>,
}

impl DinnerMenu {
    /// Appends a course.
    #[inline]
    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Returns all courses separated by `;`.
    #[inline]
    pub fn menu(&self) -> String {
        self.items.join(";")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Builder (trait)
////////////////////////////////////////////////////////////////////////////////////////////////////

/// The step-wise construction interface for [`DinnerMenu`]s.
pub trait Builder {
    /// Adds an appetizer.
    fn make_appetizer(&mut self);
    /// Adds an entree.
    fn make_entry(&mut self);
    /// Adds a dessert.
    fn make_dessert(&mut self);
    /// Hands out the menu built so far and starts a new, empty one.
    fn take_dinner(&mut self) -> ExclusiveOwner<DinnerMenu>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// BbqDinnerBuilder
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Builds barbecue dinners.
#[derive(Debug)]
pub struct BbqDinnerBuilder {
    dinner: ExclusiveOwner<DinnerMenu>,
}

impl BbqDinnerBuilder {
    /// Creates a builder with an empty menu.
    #[inline]
    pub fn new() -> Self {
        Self { dinner: ExclusiveOwner::new(DinnerMenu::default()) }
    }
}

impl Default for BbqDinnerBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for BbqDinnerBuilder {
    #[inline]
    fn make_appetizer(&mut self) {
        self.dinner.add("shrimp cocktail");
    }

    #[inline]
    fn make_entry(&mut self) {
        self.dinner.add("bbq ribs");
    }

    #[inline]
    fn make_dessert(&mut self) {
        self.dinner.add("ice cream");
    }

    #[inline]
    fn take_dinner(&mut self) -> ExclusiveOwner<DinnerMenu> {
        let dinner = ExclusiveOwner::take(&mut self.dinner);
        ExclusiveOwner::assign(&mut self.dinner, ExclusiveOwner::new(DinnerMenu::default()));
        dinner
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// DinnerDirector
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Drives a [`Builder`] through predefined sequences of steps.
pub struct DinnerDirector<'b> {
    builder: &'b mut dyn Builder,
}

impl<'b> DinnerDirector<'b> {
    /// Creates a director for `builder`.
    #[inline]
    pub fn new(builder: &'b mut dyn Builder) -> Self {
        Self { builder }
    }

    /// A dinner consisting only of an entree.
    #[inline]
    pub fn lite_dinner(&mut self) {
        self.builder.make_entry();
    }

    /// A three course dinner.
    #[inline]
    pub fn full_dinner(&mut self) {
        self.builder.make_appetizer();
        self.builder.make_entry();
        self.builder.make_dessert();
    }
}

#[cfg(test)]
mod tests {
    use super::DinnerMenu;

    #[test]
    fn empty_menu() {
        assert_eq!(DinnerMenu::default().menu(), "");
    }
}
