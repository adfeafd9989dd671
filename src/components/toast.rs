//! Notice Toast Component
//!
//! Transient banner in the top-right corner after a submission attempt.
//! Dismissal is armed by `FormContext::finish_submit`.

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::form::Notice;

/// Success/failure banner, visible while a notice is raised
#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_form_context();
    let notice = move || ctx.state.get().notice;

    let wrapper_class = move || {
        if notice().is_some() { "toast visible" } else { "toast" }
    };

    view! {
        <div class=wrapper_class>
            {move || match notice() {
                Some(Notice::Success) => view! {
                    <div class="toast-card success">
                        <p class="toast-title">"Thành công!"</p>
                        <p class="toast-body">"Dữ liệu đã được thêm vào hệ thống."</p>
                    </div>
                }.into_any(),
                Some(Notice::Failure) => view! {
                    <div class="toast-card failure">
                        <p class="toast-title">"Gửi thất bại!"</p>
                        <p class="toast-body">"Không thể gửi dữ liệu, vui lòng thử lại."</p>
                    </div>
                }.into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}
