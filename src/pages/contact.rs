//! Contact page hosting the form.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;

/// Contact page — the form and everything it renders after submission.
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <main class="contact-page">
            <ContactForm/>
        </main>
    }
}
