//! Event-driven runner that feeds host interactions into an
//! [`EditDetailsForm`] until it closes.

use crate::domain::{Category, TierListDetails};
use crate::forms::edit_details::{
    CloseReason, EditDetailsForm, FormState, FormView, SubmitOutcome, ValidationIssue,
};

/// High-level lifecycle states emitted by the form runner.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

/// A single user interaction with the edit-details sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SetName(String),
    SetDescription(String),
    SetPrivate(bool),
    SetCategory(Option<Category>),
    /// Open the host's category picker and apply whatever it returns.
    PickCategory,
    Submit,
    Cancel,
}

/// Interaction surface used by the form engine.
pub trait FormInteraction {
    /// Produces the next user event for the form as currently shown.
    fn next_event(&mut self, view: &FormView<'_>) -> FormEvent;

    /// Presents the category picker. Returning `None` means it was dismissed.
    fn pick_category(&mut self) -> Option<Category> {
        None
    }

    /// Called after a submission was turned down so the host can shake the
    /// offending fields.
    fn rejected(&mut self, _issues: &[ValidationIssue], _view: &FormView<'_>) {}
}

/// Drives an [`EditDetailsForm`] using a [`FormInteraction`] implementation.
pub struct FormEngine<'a, F>
where
    F: FnOnce(TierListDetails),
{
    form: &'a mut EditDetailsForm<F>,
}

impl<'a, F> FormEngine<'a, F>
where
    F: FnOnce(TierListDetails),
{
    pub fn new(form: &'a mut EditDetailsForm<F>) -> Self {
        Self { form }
    }

    /// Pumps events until the form closes.
    ///
    /// Returns the committed details, or `Cancelled` when the edits were
    /// discarded. A form that is already closed returns immediately.
    pub fn run<I: FormInteraction>(&mut self, interaction: &mut I) -> FormResult<TierListDetails> {
        loop {
            if let FormState::Closed(reason) = self.form.state() {
                return self.finish(reason);
            }

            let event = interaction.next_event(&self.form.view());
            match event {
                FormEvent::SetName(text) => self.form.set_name(text),
                FormEvent::SetDescription(text) => self.form.set_description(text),
                FormEvent::SetPrivate(flag) => self.form.set_private(flag),
                FormEvent::SetCategory(category) => self.form.set_category(category),
                FormEvent::PickCategory => {
                    let mut picker = || interaction.pick_category();
                    self.form.pick_category(&mut picker);
                }
                FormEvent::Submit => {
                    if let SubmitOutcome::Rejected(issues) = self.form.submit() {
                        interaction.rejected(&issues, &self.form.view());
                    }
                }
                FormEvent::Cancel => {
                    self.form.cancel();
                }
            }
        }
    }

    fn finish(&self, reason: CloseReason) -> FormResult<TierListDetails> {
        match reason {
            CloseReason::Committed => FormResult::Completed(self.form.draft().clone()),
            CloseReason::Discarded => FormResult::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct MockInteraction {
        events: VecDeque<FormEvent>,
        picks: VecDeque<Option<Category>>,
        rejections: Vec<Vec<ValidationIssue>>,
        shakes: Vec<(u32, u32)>,
    }

    impl MockInteraction {
        fn new(events: Vec<FormEvent>) -> Self {
            Self {
                events: events.into(),
                picks: VecDeque::new(),
                rejections: Vec::new(),
                shakes: Vec::new(),
            }
        }

        fn with_picks(mut self, picks: Vec<Option<Category>>) -> Self {
            self.picks = picks.into();
            self
        }
    }

    impl FormInteraction for MockInteraction {
        fn next_event(&mut self, _view: &FormView<'_>) -> FormEvent {
            self.events.pop_front().unwrap_or(FormEvent::Cancel)
        }

        fn pick_category(&mut self) -> Option<Category> {
            self.picks.pop_front().flatten()
        }

        fn rejected(&mut self, issues: &[ValidationIssue], view: &FormView<'_>) {
            self.rejections.push(issues.to_vec());
            self.shakes.push((view.name_invalid_pulse, view.category_invalid_pulse));
        }
    }

    fn movies() -> Category {
        Category::new("Movies", "film.fill", "Entertainment")
    }

    #[test]
    fn engine_completes_successfully() {
        let mut form = EditDetailsForm::new("Draft", "", false, None, |_| {});
        let mut interaction = MockInteraction::new(vec![
            FormEvent::SetName("Top 10 Movies".into()),
            FormEvent::SetCategory(Some(movies())),
            FormEvent::SetPrivate(true),
            FormEvent::Submit,
        ]);

        let result = FormEngine::new(&mut form).run(&mut interaction);
        match result {
            FormResult::Completed(details) => {
                assert_eq!(details.name, "Top 10 Movies");
                assert!(details.is_private);
                assert_eq!(
                    details.category.as_ref().map(|c| c.name.as_str()),
                    Some("Movies")
                );
            }
            other => panic!("Unexpected result: {:?}", other),
        }
        assert!(interaction.rejections.is_empty());
    }

    #[test]
    fn engine_reports_rejections_then_recovers() {
        let mut form = EditDetailsForm::new("", "", false, None, |_| {});
        let mut interaction = MockInteraction::new(vec![
            FormEvent::Submit,
            FormEvent::SetName("Rent".into()),
            FormEvent::Submit,
            FormEvent::PickCategory,
            FormEvent::Submit,
        ])
        .with_picks(vec![Some(movies())]);

        let result = FormEngine::new(&mut form).run(&mut interaction);
        assert!(matches!(result, FormResult::Completed(_)));
        assert_eq!(
            interaction.rejections,
            vec![
                vec![ValidationIssue::MissingName, ValidationIssue::MissingCategory],
                vec![ValidationIssue::MissingCategory],
            ]
        );
        assert_eq!(interaction.shakes, vec![(1, 1), (1, 2)]);
    }

    #[test]
    fn engine_cancelled_midway() {
        let mut committed = false;
        let mut form = EditDetailsForm::new("Old", "", false, Some(movies()), |_| committed = true);
        let mut interaction = MockInteraction::new(vec![
            FormEvent::SetName("New".into()),
            FormEvent::Cancel,
            FormEvent::Submit,
        ]);

        let result = FormEngine::new(&mut form).run(&mut interaction);
        assert_eq!(result, FormResult::Cancelled);
        assert_eq!(form.draft().name, "Old");
        assert_eq!(interaction.events.len(), 1);
        drop(form);
        assert!(!committed);
    }

    #[test]
    fn dismissed_picker_leaves_form_open() {
        let mut form = EditDetailsForm::new("Name", "", false, None, |_| {});
        let mut interaction = MockInteraction::new(vec![FormEvent::PickCategory, FormEvent::Submit])
            .with_picks(vec![None]);

        let result = FormEngine::new(&mut form).run(&mut interaction);
        assert_eq!(result, FormResult::Cancelled);
        assert_eq!(
            interaction.rejections,
            vec![vec![ValidationIssue::MissingCategory]]
        );
    }

    #[test]
    fn closed_form_returns_immediately() {
        let mut form = EditDetailsForm::new("Name", "", false, Some(movies()), |_| {});
        form.submit();
        let mut interaction = MockInteraction::new(vec![FormEvent::SetName("ignored".into())]);
        let result = FormEngine::new(&mut form).run(&mut interaction);
        assert!(matches!(result, FormResult::Completed(ref details) if details.name == "Name"));
        assert_eq!(interaction.events.len(), 1);
    }
}
