//! Field Input Component
//!
//! Reusable labeled input bound to one record field.

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::models::Field;

/// Labeled single-line input for one field of the record.
///
/// Shows the field's inline validation message when present; the message
/// disappears as soon as the field is edited.
///
/// # Arguments
/// * `field` - which record field this input edits
#[component]
pub fn FieldInput(field: Field) -> impl IntoView {
    let ctx = use_form_context();

    let error = move || ctx.state.get().errors.get(&field).cloned();
    let input_class = move || {
        if error().is_some() { "field-input invalid" } else { "field-input" }
    };
    let input_type = if field == Field::Date { "date" } else { "text" };

    view! {
        <div class="field-group">
            <label for=field.name() class="field-label">{field.label()}</label>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                placeholder=field.placeholder()
                class=input_class
                prop:value=move || ctx.state.get().record.get(field).to_string()
                on:input=move |ev| ctx.edit(field, event_target_value(&ev))
            />
            {move || error().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}
