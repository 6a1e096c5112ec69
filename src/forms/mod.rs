//! The tier list edit-details form and the pieces hosts use to drive it.

pub mod edit_details;
pub mod feedback;
pub mod fields;
pub mod picker;
pub mod session;

pub use edit_details::{
    BoxedCommit, CloseReason, EditDetailsForm, FormState, FormView, SubmitOutcome,
    ValidationIssue,
};
pub use feedback::InvalidPulse;
pub use fields::{edit_details_descriptor, FieldDescriptor, FieldKind, FormDescriptor};
pub use picker::CategoryPicker;
pub use session::{FormEngine, FormEvent, FormInteraction, FormResult};
