pub mod category;
pub mod tier_list;

pub use category::{Category, Rgb};
pub use tier_list::TierListDetails;
