//! Form State
//!
//! The full UI state of the entry form and its transitions, kept free of
//! signals and `JsValue` so the submit lifecycle is testable on the host.

use std::collections::BTreeMap;

use crate::models::{Field, Record};
use crate::validate::validate;

/// Transient banner raised after a submission attempt completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Failure,
}

/// Everything the form view renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Field values being edited. Reset to empty only on success.
    pub record: Record,
    /// One message per currently-invalid field.
    pub errors: BTreeMap<Field, String>,
    /// True strictly while a submission is in flight.
    pub busy: bool,
    /// Currently visible banner, if any.
    pub notice: Option<Notice>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field's value and clear that field's error, leaving
    /// every other field and error untouched.
    pub fn edit(&mut self, field: Field, value: String) {
        self.record.set(field, value);
        self.errors.remove(&field);
    }

    /// Restore the all-empty record and drop any errors.
    pub fn reset(&mut self) {
        self.record = Record::default();
        self.errors.clear();
    }

    /// Run validation and, if the record is submittable, enter the busy
    /// state and hand back the payload for the network call. On failure
    /// the error map is replaced wholesale and no payload is produced.
    pub fn begin_submit(&mut self) -> Option<Record> {
        match validate(&self.record) {
            Ok(()) => {
                self.errors.clear();
                self.busy = true;
                self.notice = None;
                Some(self.record.clone())
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Complete a submission attempt. Busy always clears, on both arms.
    /// Success resets the record; failure keeps the user's input so a
    /// retry needs no retyping.
    pub fn finish_submit(&mut self, ok: bool) {
        self.busy = false;
        if ok {
            self.reset();
            self.notice = Some(Notice::Success);
        } else {
            self.notice = Some(Notice::Failure);
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> FormState {
        let mut state = FormState::new();
        state.edit(Field::Tag, "a".to_string());
        state.edit(Field::Code, "b".to_string());
        state.edit(Field::Category, "c".to_string());
        state.edit(Field::Title, "d".to_string());
        state.edit(Field::Date, "2024-01-01".to_string());
        state.edit(Field::Description, "e".to_string());
        state.edit(Field::Content, "f".to_string());
        state
    }

    #[test]
    fn test_begin_submit_valid_returns_payload_and_sets_busy() {
        let mut state = filled_state();
        let payload = state.begin_submit().expect("record should be submittable");

        assert_eq!(payload, state.record);
        assert!(state.busy);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_begin_submit_invalid_blocks_and_populates_errors() {
        let mut state = filled_state();
        state.edit(Field::Content, String::new());

        assert!(state.begin_submit().is_none());
        assert!(!state.busy);
        assert_eq!(state.errors.len(), 1);
        assert!(state.errors.contains_key(&Field::Content));
    }

    #[test]
    fn test_edit_clears_exactly_that_fields_error() {
        let mut state = FormState::new();
        assert!(state.begin_submit().is_none());
        let all = state.errors.len();

        state.edit(Field::Title, "d".to_string());
        assert!(!state.errors.contains_key(&Field::Title));
        assert_eq!(state.errors.len(), all - 1);
    }

    #[test]
    fn test_edit_with_empty_value_still_clears_the_error() {
        // Errors clear on any edit; they only come back on the next
        // validation pass.
        let mut state = FormState::new();
        assert!(state.begin_submit().is_none());

        state.edit(Field::Tag, String::new());
        assert!(!state.errors.contains_key(&Field::Tag));
    }

    #[test]
    fn test_success_resets_record_and_raises_notice() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.finish_submit(true);

        assert_eq!(state.record, Record::default());
        assert!(!state.busy);
        assert_eq!(state.notice, Some(Notice::Success));
    }

    #[test]
    fn test_failure_keeps_record_and_raises_failure_notice() {
        let mut state = filled_state();
        let before = state.record.clone();
        state.begin_submit().unwrap();
        state.finish_submit(false);

        assert_eq!(state.record, before);
        assert!(!state.busy);
        assert_eq!(state.notice, Some(Notice::Failure));
    }

    #[test]
    fn test_busy_is_true_strictly_between_begin_and_finish() {
        let mut state = filled_state();
        assert!(!state.busy);

        state.begin_submit().unwrap();
        assert!(state.busy);

        state.finish_submit(true);
        assert!(!state.busy);

        // A second attempt goes through the same lifecycle.
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.finish_submit(false);
        assert!(!state.busy);
    }

    #[test]
    fn test_new_submission_clears_visible_notice() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.finish_submit(true);
        assert_eq!(state.notice, Some(Notice::Success));

        let mut state2 = filled_state();
        state2.notice = state.notice;
        state2.begin_submit().unwrap();
        assert_eq!(state2.notice, None);
    }

    #[test]
    fn test_dismiss_notice() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.finish_submit(true);
        state.dismiss_notice();
        assert_eq!(state.notice, None);
    }
}
