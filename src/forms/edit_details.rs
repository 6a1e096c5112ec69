//! Controller behind the tier list "Edit Details" sheet.
//!
//! The form keeps an immutable snapshot of the values it was opened with and
//! a draft the user edits. Submitting a valid draft hands it to the commit
//! callback and closes the form; cancelling restores the snapshot and closes
//! without calling back. An invalid submission keeps the form open and bumps
//! the pulse counter of each offending field.

use std::fmt;

use crate::config::FieldLimits;
use crate::domain::{Category, TierListDetails};
use crate::forms::feedback::InvalidPulse;
use crate::forms::fields::{edit_details_descriptor, FormDescriptor};
use crate::forms::picker::CategoryPicker;
use crate::utils::text::{char_count, truncate_graphemes};

/// Boxed commit callback for hosts that need a nameable form type.
pub type BoxedCommit = Box<dyn FnOnce(TierListDetails)>;

/// Why a form stopped accepting edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Committed,
    Discarded,
}

/// Lifecycle of a single form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Open,
    Closed(CloseReason),
}

/// A reason a submission was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingName,
    MissingCategory,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationIssue::MissingName => "Name cannot be empty",
            ValidationIssue::MissingCategory => "Select a category",
        };
        f.write_str(message)
    }
}

/// Result of [`EditDetailsForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was handed to the commit callback and the form closed.
    Committed,
    /// The draft failed validation; the form stays open.
    Rejected(Vec<ValidationIssue>),
    /// The form had already closed; nothing happened.
    Closed(CloseReason),
}

impl SubmitOutcome {
    pub fn closes_form(&self) -> bool {
        !matches!(self, SubmitOutcome::Rejected(_))
    }
}

/// Read-only snapshot handed to hosts for rendering.
#[derive(Debug, Clone, Copy)]
pub struct FormView<'a> {
    pub draft: &'a TierListDetails,
    pub descriptor: &'a FormDescriptor,
    pub can_submit: bool,
    pub name_invalid_pulse: u32,
    pub category_invalid_pulse: u32,
}

/// Draft, snapshot, and lifecycle of one edit-details sheet.
pub struct EditDetailsForm<F = BoxedCommit>
where
    F: FnOnce(TierListDetails),
{
    original: TierListDetails,
    draft: TierListDetails,
    limits: FieldLimits,
    descriptor: FormDescriptor,
    name_invalid_pulse: InvalidPulse,
    category_invalid_pulse: InvalidPulse,
    state: FormState,
    on_commit: Option<F>,
}

impl<F> EditDetailsForm<F>
where
    F: FnOnce(TierListDetails),
{
    /// Opens the form seeded with the entity's current values.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        is_private: bool,
        category: Option<Category>,
        on_commit: F,
    ) -> Self {
        Self::with_limits(
            name,
            description,
            is_private,
            category,
            FieldLimits::default(),
            on_commit,
        )
    }

    /// Opens the form with caller-supplied field limits.
    pub fn with_limits(
        name: impl Into<String>,
        description: impl Into<String>,
        is_private: bool,
        category: Option<Category>,
        limits: FieldLimits,
        on_commit: F,
    ) -> Self {
        let details = TierListDetails::new(name, description, is_private, category);
        Self::from_details_with_limits(details, limits, on_commit)
    }

    /// Opens the form from an existing details snapshot.
    pub fn from_details(details: TierListDetails, on_commit: F) -> Self {
        Self::from_details_with_limits(details, FieldLimits::default(), on_commit)
    }

    /// Opens the form from a snapshot and limits.
    ///
    /// Values are taken as given; limits only apply to later edits.
    pub fn from_details_with_limits(
        details: TierListDetails,
        limits: FieldLimits,
        on_commit: F,
    ) -> Self {
        tracing::debug!(name = %details.name, "edit details form opened");
        Self {
            draft: details.clone(),
            original: details,
            limits,
            descriptor: edit_details_descriptor(limits),
            name_invalid_pulse: InvalidPulse::new(),
            category_invalid_pulse: InvalidPulse::new(),
            state: FormState::Open,
            on_commit: Some(on_commit),
        }
    }

    pub fn draft(&self) -> &TierListDetails {
        &self.draft
    }

    pub fn original(&self) -> &TierListDetails {
        &self.original
    }

    pub fn limits(&self) -> FieldLimits {
        self.limits
    }

    pub fn descriptor(&self) -> &FormDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == FormState::Open
    }

    pub fn name_invalid_pulse(&self) -> u32 {
        self.name_invalid_pulse.count()
    }

    pub fn category_invalid_pulse(&self) -> u32 {
        self.category_invalid_pulse.count()
    }

    pub fn set_name(&mut self, text: impl AsRef<str>) {
        if self.ignore_closed("set_name") {
            return;
        }
        self.draft.name = truncate_graphemes(text.as_ref(), self.limits.name);
    }

    pub fn set_description(&mut self, text: impl AsRef<str>) {
        if self.ignore_closed("set_description") {
            return;
        }
        self.draft.description = truncate_graphemes(text.as_ref(), self.limits.description);
    }

    pub fn set_private(&mut self, flag: bool) {
        if self.ignore_closed("set_private") {
            return;
        }
        self.draft.is_private = flag;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        if self.ignore_closed("set_category") {
            return;
        }
        let label = category
            .as_ref()
            .map(Category::display_label)
            .unwrap_or_else(|| "<none>".to_string());
        tracing::debug!(category = %label, "category changed");
        self.draft.category = category;
    }

    /// Asks `picker` for a category and applies it.
    ///
    /// Returns `true` when a category was applied. A dismissed picker leaves
    /// the current selection in place.
    pub fn pick_category<P>(&mut self, picker: &mut P) -> bool
    where
        P: CategoryPicker + ?Sized,
    {
        if self.ignore_closed("pick_category") {
            return false;
        }
        match picker.select_category() {
            Some(category) => {
                self.set_category(Some(category));
                true
            }
            None => false,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.draft.name.is_empty() && self.draft.category.is_some()
    }

    /// Whether the save action should be offered as enabled.
    pub fn can_submit(&self) -> bool {
        self.is_open() && self.is_valid()
    }

    pub fn validation_issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.draft.name.is_empty() {
            issues.push(ValidationIssue::MissingName);
        }
        if self.draft.category.is_none() {
            issues.push(ValidationIssue::MissingCategory);
        }
        issues
    }

    /// Whether the draft differs from the values the form opened with.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    pub fn name_counter(&self) -> String {
        format!("{}/{}", char_count(&self.draft.name), self.limits.name)
    }

    pub fn description_counter(&self) -> String {
        format!(
            "{}/{}",
            char_count(&self.draft.description),
            self.limits.description
        )
    }

    pub fn view(&self) -> FormView<'_> {
        FormView {
            draft: &self.draft,
            descriptor: &self.descriptor,
            can_submit: self.can_submit(),
            name_invalid_pulse: self.name_invalid_pulse(),
            category_invalid_pulse: self.category_invalid_pulse(),
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if let FormState::Closed(reason) = self.state {
            tracing::warn!(?reason, "submit ignored, form already closed");
            return SubmitOutcome::Closed(reason);
        }

        let issues = self.validation_issues();
        if !issues.is_empty() {
            for issue in &issues {
                match issue {
                    ValidationIssue::MissingName => self.name_invalid_pulse.bump(),
                    ValidationIssue::MissingCategory => self.category_invalid_pulse.bump(),
                }
            }
            tracing::debug!(?issues, "submission rejected");
            return SubmitOutcome::Rejected(issues);
        }

        self.state = FormState::Closed(CloseReason::Committed);
        if let Some(on_commit) = self.on_commit.take() {
            on_commit(self.draft.clone());
        }
        tracing::info!(name = %self.draft.name, "tier list details committed");
        SubmitOutcome::Committed
    }

    pub fn cancel(&mut self) -> CloseReason {
        if let FormState::Closed(reason) = self.state {
            tracing::warn!(?reason, "cancel ignored, form already closed");
            return reason;
        }
        self.draft = self.original.clone();
        self.on_commit = None;
        self.state = FormState::Closed(CloseReason::Discarded);
        tracing::info!("tier list edits discarded");
        CloseReason::Discarded
    }

    fn ignore_closed(&self, operation: &'static str) -> bool {
        if self.is_open() {
            return false;
        }
        tracing::debug!(operation, "edit ignored, form closed");
        true
    }
}

impl<F> fmt::Debug for EditDetailsForm<F>
where
    F: FnOnce(TierListDetails),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditDetailsForm")
            .field("original", &self.original)
            .field("draft", &self.draft)
            .field("limits", &self.limits)
            .field("name_invalid_pulse", &self.name_invalid_pulse)
            .field("category_invalid_pulse", &self.category_invalid_pulse)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
