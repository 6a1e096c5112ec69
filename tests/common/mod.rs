#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use once_cell::sync::Lazy;
use ranko_forms::domain::{Category, Rgb, TierListDetails};

/// Shared categories so clones compare equal across a test.
pub static CATEGORY_X: Lazy<Category> = Lazy::new(|| {
    Category::new("Movies", "film.fill", "Entertainment").with_color(Rgb::new(0.0, 0.5, 1.0))
});
pub static CATEGORY_Y: Lazy<Category> = Lazy::new(|| {
    Category::new("Albums", "opticaldisc.fill", "Music").with_color(Rgb::new(1.0, 0.0, 0.0))
});

pub fn category_x() -> Category {
    CATEGORY_X.clone()
}

pub fn category_y() -> Category {
    CATEGORY_Y.clone()
}

/// Records every commit callback invocation.
#[derive(Clone, Default)]
pub struct CommitLog {
    calls: Rc<RefCell<Vec<TierListDetails>>>,
}

impl CommitLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> impl FnOnce(TierListDetails) + 'static {
        let calls = Rc::clone(&self.calls);
        move |details| calls.borrow_mut().push(details)
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn only(&self) -> TierListDetails {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one commit");
        calls[0].clone()
    }
}
