//! Application Context
//!
//! Shared form state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::form::FormState;
use crate::models::Field;

/// How long a success/failure banner stays visible.
pub const NOTICE_MS: u32 = 3000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct FormContext {
    /// Current form state - read
    pub state: ReadSignal<FormState>,
    /// Current form state - write
    set_state: WriteSignal<FormState>,
    /// Bumped each time a notice is raised, so a stale dismiss timer
    /// from an earlier notice cannot hide a newer one - read
    notice_epoch: ReadSignal<u32>,
    set_notice_epoch: WriteSignal<u32>,
}

impl FormContext {
    pub fn new(
        state: (ReadSignal<FormState>, WriteSignal<FormState>),
        notice_epoch: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            state: state.0,
            set_state: state.1,
            notice_epoch: notice_epoch.0,
            set_notice_epoch: notice_epoch.1,
        }
    }

    /// Update one field from an input event.
    pub fn edit(&self, field: Field, value: String) {
        self.set_state.update(|s| s.edit(field, value));
    }

    /// Validate and, if submittable, enter the busy state. Returns the
    /// payload to POST, or `None` when inline errors were raised instead.
    pub fn begin_submit(&self) -> Option<crate::models::Record> {
        let mut payload = None;
        self.set_state.update(|s| payload = s.begin_submit());
        payload
    }

    /// Complete a submission and arm the banner's auto-dismiss timer.
    pub fn finish_submit(&self, ok: bool) {
        self.set_state.update(|s| s.finish_submit(ok));

        let epoch = self.notice_epoch.get_untracked() + 1;
        self.set_notice_epoch.set(epoch);

        let state = self.set_state;
        let current_epoch = self.notice_epoch;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            // A newer notice re-armed the timer; leave it alone.
            if current_epoch.get_untracked() == epoch {
                state.update(|s| s.dismiss_notice());
            }
        });
    }
}

/// Get the form context from any component under `App`.
pub fn use_form_context() -> FormContext {
    use_context::<FormContext>().expect("FormContext should be provided")
}
