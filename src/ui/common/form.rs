use leptos::prelude::*;

use crate::core::selectors::{self, tokens};

/// Inline validation message below a field
#[component]
fn FieldErrorMessage(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <div
                    class=selectors::FIELD_ERROR_CLASS
                    style:color=tokens::ERROR_COLOR
                    style:font-size="var(--font-size-sm)"
                    style:margin-top="var(--spacing-xs)"
                >
                    {err}
                </div>
            }
        })
    }
}

/// Border color for a field, depending on its error state
fn border_color(error: Signal<Option<String>>) -> impl Fn() -> &'static str {
    move || {
        if error.get().is_some() {
            tokens::ERROR_COLOR
        } else {
            tokens::BORDER_COLOR
        }
    }
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Value of the input's `name` attribute
    name: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Error message to display, if any
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=name>{label}</label>
            <input
                id=name
                name=name
                type=input_type
                class="form__input"
                style:border-color=border_color(error)
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldErrorMessage error=error />
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// Value of the textarea's `name` attribute
    name: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    /// Error message to display, if any
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=name>{label}</label>
            <textarea
                id=name
                name=name
                class="form__input form__textarea"
                style:border-color=border_color(error)
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldErrorMessage error=error />
        </div>
    }
}
