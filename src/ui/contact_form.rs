//! Contact form with inline validation and a simulated submission
//!
//! Submitting a valid form sends nothing: the button confirms for a few
//! seconds, then the form returns to its original state.

use std::time::Duration;

use leptos::prelude::*;

use crate::core::contact::{
    ContactField, ContactForm as ContactFormValues, SUCCESS_DISPLAY_MS, SubmitConfirmations,
    SubmitFace, ValidationReport, validate_contact_form,
};
use crate::ui::common::{FormField, TextAreaField};

const SUBMIT_LABEL: &str = "Send Message";

/// Contact form component
#[component]
pub fn ContactForm() -> impl IntoView {
    let values = RwSignal::new(ContactFormValues::default());
    let report = RwSignal::new(None::<ValidationReport>);
    let face = RwSignal::new(SubmitFace::Original);
    let confirmations = StoredValue::new(SubmitConfirmations::default());

    let value_of = move |field: ContactField| {
        Signal::derive(move || values.with(|v| v.value(field).to_string()))
    };
    let error_of = move |field: ContactField| {
        Signal::derive(move || {
            report.with(|r| {
                r.as_ref()
                    .and_then(|r| r.error(field))
                    .map(|err| err.to_string())
            })
        })
    };
    let input_for = move |field: ContactField| {
        Callback::new(move |value: String| values.update(|v| v.set_value(field, value)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let result = validate_contact_form(&values.get_untracked());
        let is_valid = result.is_valid();
        report.set(Some(result));

        if !is_valid {
            return;
        }

        let mut ticket = 0;
        confirmations.update_value(|c| ticket = c.confirm());
        face.set(SubmitFace::Confirmed);
        set_timeout(
            move || {
                // A later submission owns the confirmation now
                if !confirmations.with_value(|c| c.is_current(ticket)) {
                    return;
                }
                face.set(SubmitFace::after(u64::from(SUCCESS_DISPLAY_MS)));
                values.update(|v| v.reset());
                report.set(None);
            },
            Duration::from_millis(u64::from(SUCCESS_DISPLAY_MS)),
        );
    };

    view! {
        <form class="form" novalidate=true on:submit=on_submit>
            <div class="form__row">
                <FormField
                    label=ContactField::Name.label()
                    name=ContactField::Name.input_name()
                    placeholder="Your name"
                    value=value_of(ContactField::Name)
                    on_input=input_for(ContactField::Name)
                    error=error_of(ContactField::Name)
                />
                <FormField
                    label=ContactField::Email.label()
                    name=ContactField::Email.input_name()
                    input_type="email"
                    placeholder="you@company.com"
                    value=value_of(ContactField::Email)
                    on_input=input_for(ContactField::Email)
                    error=error_of(ContactField::Email)
                />
            </div>
            <FormField
                label=ContactField::Subject.label()
                name=ContactField::Subject.input_name()
                placeholder="How can we help?"
                value=value_of(ContactField::Subject)
                on_input=input_for(ContactField::Subject)
                error=error_of(ContactField::Subject)
            />
            <TextAreaField
                label=ContactField::Message.label()
                name=ContactField::Message.input_name()
                placeholder="Tell us about your project"
                value=value_of(ContactField::Message)
                on_input=input_for(ContactField::Message)
                error=error_of(ContactField::Message)
            />
            <button
                type="submit"
                class="btn btn--primary form__submit"
                style:background=move || face.get().background().unwrap_or_default()
            >
                {move || face.get().label(SUBMIT_LABEL)}
            </button>
        </form>
    }
}
