//! Entry Form Component
//!
//! The form card: six labeled inputs, the content textarea, and the
//! submit button with its busy spinner.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FieldInput;
use crate::context::use_form_context;
use crate::models::Field;
use crate::submit;

/// Form for entering and submitting one record
#[component]
pub fn EntryForm() -> impl IntoView {
    let ctx = use_form_context();
    let busy = move || ctx.state.get().busy;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = ctx.begin_submit() else { return };

        spawn_local(async move {
            let ok = match submit::send_record(&payload).await {
                Ok(ack) => {
                    web_sys::console::log_2(&"[SUBMIT] ack:".into(), &ack);
                    true
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[SUBMIT] {err}").into());
                    false
                }
            };
            ctx.finish_submit(ok);
        });
    };

    let content_error = move || ctx.state.get().errors.get(&Field::Content).cloned();
    let content_class = move || {
        if content_error().is_some() { "field-input invalid" } else { "field-input" }
    };

    view! {
        <div class="form-card">
            <form class="entry-form" on:submit=on_submit>
                <div class="field-grid">
                    {Field::ALL
                        .iter()
                        .filter(|field| **field != Field::Content)
                        .map(|field| view! { <FieldInput field=*field /> })
                        .collect_view()}
                </div>

                <div class="field-group content-group">
                    <label for=Field::Content.name() class="field-label">
                        {Field::Content.label()}
                    </label>
                    <textarea
                        id=Field::Content.name()
                        name=Field::Content.name()
                        placeholder=Field::Content.placeholder()
                        rows=6
                        class=content_class
                        prop:value=move || ctx.state.get().record.content.clone()
                        on:input=move |ev| ctx.edit(Field::Content, event_target_value(&ev))
                    ></textarea>
                    {move || content_error().map(|msg| view! { <p class="field-error">{msg}</p> })}
                </div>

                <div class="submit-row">
                    <button type="submit" class="submit-btn" disabled=busy>
                        <Show when=move || !busy()>
                            <span>"Thêm dữ liệu"</span>
                        </Show>
                        <Show when=move || busy()>
                            <span class="spinner"></span>
                            <span>"Đang gửi..."</span>
                        </Show>
                    </button>
                </div>
            </form>
        </div>
    }
}
