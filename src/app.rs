//! Data-Entry Frontend App
//!
//! Root component: owns the form state signals and composes the page.

use leptos::prelude::*;

use crate::components::{BackToTop, EntryForm, NoticeToast};
use crate::context::FormContext;
use crate::form::FormState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let state = signal(FormState::new());
    let notice_epoch = signal(0u32);

    // Provide context to all children
    provide_context(FormContext::new(state, notice_epoch));

    view! {
        <div class="page">
            <NoticeToast />

            <header class="page-header">
                <h1>"Nhập dữ liệu"</h1>
                <p class="page-subtitle">
                    "Điền thông tin để thêm dữ liệu mới vào hệ thống"
                </p>
            </header>

            <EntryForm />

            <BackToTop />
        </div>
    }
}
