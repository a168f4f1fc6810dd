//! Contact form with per-keystroke validation and a confirmation display.

use leptos::prelude::*;

use crate::components::submission_summary::SubmissionSummary;
use crate::state::form::ContactFormState;
use crate::state::validation::Field;

/// Contact form component.
///
/// Edits re-validate the edited field immediately, so errors appear and
/// clear while the user types. Submit re-checks every field and, when all
/// pass, replaces the submission snapshot rendered below the form.
#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = form.write().submit();
        if submitted {
            log::info!("contact form submitted");
        }
    };

    view! {
        <section class="contact-form">
            <h1>"Contact Form"</h1>
            <form on:submit=on_submit>
                <LabeledField form=form field=Field::FirstName label="First Name"/>
                <LabeledField form=form field=Field::LastName label="Last Name"/>
                <LabeledField form=form field=Field::Email label="Email"/>
                <LabeledField form=form field=Field::Message label="Message"/>
                <button type="submit" class="btn btn--primary">
                    "Submit"
                </button>
            </form>
            {move || {
                form.with(|f| f.submission().cloned())
                    .map(|submission| view! { <SubmissionSummary submission=submission/> })
            }}
        </section>
    }
}

/// One label-wrapped controlled input (a textarea for the message field)
/// plus its inline error, if any. The label wraps its control, so the
/// label-to-input association is structural.
#[component]
fn LabeledField(
    form: RwSignal<ContactFormState>,
    field: Field,
    label: &'static str,
) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| f.set_field(field, event_target_value(&ev)));
    };

    let value = move || form.with(|f| f.value(field).to_owned());

    let error = move || {
        form.with(|f| f.error(field).map(ToOwned::to_owned))
            .map(|message| view! { <p class="contact-form__error">{message}</p> })
    };

    view! {
        <div class="contact-form__field">
            <label class="contact-form__label">
                {label}
                {if field == Field::Message {
                    view! {
                        <textarea
                            class="contact-form__input"
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    }
                        .into_any()
                } else {
                    view! {
                        <input
                            class="contact-form__input"
                            type="text"
                            prop:value=value
                            on:input=on_input
                        />
                    }
                        .into_any()
                }}
            </label>
            {error}
        </div>
    }
}
