//! Picker trait definition
//!
//! A generic trait for list-based selection components.

/// A generic picker trait for list selection
///
/// # Example
///
/// ```ignore
/// struct MyPicker {
///     items: Vec<u32>,
///     selected: usize,
/// }
///
/// impl Picker for MyPicker {
///     type Item = u32;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.items
///     }
///
///     fn selected_index(&self) -> usize {
///         self.selected
///     }
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the current selected index
    fn selected_index(&self) -> usize;

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }
}
