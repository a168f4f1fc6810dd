//! Confirmation display for the last submitted form values.

use leptos::prelude::*;

use crate::state::form::Submission;

/// Summary rendered after a passing submit.
///
/// Each submitted value is its own element with a stable `data-testid`, so
/// the exact submitted text can be located independently. The message row
/// only appears when a message was actually submitted.
#[component]
pub fn SubmissionSummary(submission: Submission) -> impl IntoView {
    let message = (!submission.message.is_empty()).then(|| {
        let text = submission.message.clone();
        view! { <p data-testid="messageDisplay">"Message: " {text}</p> }
    });

    view! {
        <section class="submission-summary">
            <h2>"You Submitted:"</h2>
            <p data-testid="firstnameDisplay">"First Name: " {submission.first_name}</p>
            <p data-testid="lastnameDisplay">"Last Name: " {submission.last_name}</p>
            <p data-testid="emailDisplay">"Email: " {submission.email}</p>
            {message}
        </section>
    }
}
