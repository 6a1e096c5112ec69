use crate::domain::Category;

/// External surface that lets the user choose a category.
///
/// Returning `None` means the picker was dismissed without a choice.
pub trait CategoryPicker {
    fn select_category(&mut self) -> Option<Category>;
}

impl<F> CategoryPicker for F
where
    F: FnMut() -> Option<Category>,
{
    fn select_category(&mut self) -> Option<Category> {
        self()
    }
}
