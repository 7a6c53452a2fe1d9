use leptos::prelude::*;
use shootsync::contact::{
    BudgetRange, ContactDraft, ContactInquiry, Field, InquiryErrors, ServiceInterest,
};
use shootsync::content::{CONTACT_CHANNELS, CONTACT_INTRO, SOCIAL_LINKS};
use web_sys::{FormData, SubmitEvent};

use crate::components::Reveal;
use crate::site::use_site;

/// What the form does with a submit attempt.
#[derive(Debug, Clone, PartialEq)]
enum Submission {
    /// Block the submit and mark the fields.
    Invalid(InquiryErrors),
    /// Let the browser post to the form service.
    Send,
    /// No form service configured: thank the visitor and show the address.
    Notice(ContactInquiry),
}

fn decide(draft: &ContactDraft, endpoint: Option<&str>) -> Submission {
    match draft.validate() {
        Err(errors) => Submission::Invalid(errors),
        Ok(_) if endpoint.is_some() => Submission::Send,
        Ok(inquiry) => Submission::Notice(inquiry),
    }
}

/// Field errors and status line to show after a submit attempt. Each
/// attempt replaces both.
fn feedback(submission: &Submission, contact_email: &str) -> (Option<InquiryErrors>, Option<String>) {
    match submission {
        Submission::Invalid(found) => (Some(found.clone()), None),
        Submission::Send => (None, None),
        Submission::Notice(inquiry) => (
            None,
            Some(format!(
                "Thanks, {}! Email us at {} and we'll get back to you within 24 hours.",
                inquiry.first_name, contact_email
            )),
        ),
    }
}

fn draft_from(get: impl Fn(Field) -> String) -> ContactDraft {
    ContactDraft {
        first_name: get(Field::FirstName),
        last_name: get(Field::LastName),
        email: get(Field::Email),
        phone: get(Field::Phone),
        service: get(Field::Service),
        budget: get(Field::Budget),
        message: get(Field::Message),
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let site = use_site();
    let endpoint = site.form_endpoint.clone();
    let contact_email = site.contact_email.clone();
    let form = NodeRef::<leptos::html::Form>::new();
    let errors = RwSignal::new(None::<InquiryErrors>);
    let notice = RwSignal::new(None::<String>);

    let on_submit = {
        let endpoint = endpoint.clone();
        move |ev: SubmitEvent| {
            let Some(form) = form.get() else {
                return;
            };
            let data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!("could not read contact form: {e:?}");
                    return;
                }
            };
            let draft = draft_from(|field| data.get(field.name()).as_string().unwrap_or_default());
            let submission = decide(&draft, endpoint.as_deref());
            match &submission {
                Submission::Invalid(found) => {
                    ev.prevent_default();
                    tracing::debug!("contact form rejected: {found}");
                }
                Submission::Send => tracing::info!("posting contact form"),
                Submission::Notice(_) => {
                    ev.prevent_default();
                    form.reset();
                }
            }
            let (found, message) = feedback(&submission, &contact_email);
            errors.set(found);
            notice.set(message);
        }
    };

    let error_for = move |field: Field| {
        move || {
            errors.with(|found| {
                found
                    .as_ref()
                    .and_then(|e| e.for_field(field))
                    .map(|message| view! { <span class="field-error">{message.to_string()}</span> })
            })
        }
    };

    view! {
        <Reveal class="contact-form-wrap">
            <h2 class="section-title">"SEND US A " <span class="section-emphasis">"MESSAGE"</span></h2>
            <p class="section-description">{CONTACT_INTRO}</p>
            <form
                node_ref=form
                class="contact-form"
                method="post"
                action=endpoint.unwrap_or_default()
                novalidate=true
                on:submit=on_submit
            >
                <div class="form-row">
                    <label class="form-field">
                        "First Name *"
                        <input type="text" name=Field::FirstName.name() required=true />
                        {error_for(Field::FirstName)}
                    </label>
                    <label class="form-field">
                        "Last Name *"
                        <input type="text" name=Field::LastName.name() required=true />
                        {error_for(Field::LastName)}
                    </label>
                </div>
                <label class="form-field">
                    "Email Address *"
                    <input type="email" name=Field::Email.name() required=true />
                    {error_for(Field::Email)}
                </label>
                <label class="form-field">
                    "Phone Number"
                    <input type="tel" name=Field::Phone.name() />
                    {error_for(Field::Phone)}
                </label>
                <label class="form-field">
                    "Service Interested In *"
                    <select name=Field::Service.name() required=true>
                        <option value="">"Select a service"</option>
                        {ServiceInterest::ALL
                            .into_iter()
                            .map(|svc| view! { <option value=svc.key()>{svc.label()}</option> })
                            .collect_view()}
                    </select>
                    {error_for(Field::Service)}
                </label>
                <label class="form-field">
                    "Project Budget"
                    <select name=Field::Budget.name()>
                        <option value="">"Select budget range"</option>
                        {BudgetRange::ALL
                            .into_iter()
                            .map(|band| view! { <option value=band.key()>{band.label()}</option> })
                            .collect_view()}
                    </select>
                    {error_for(Field::Budget)}
                </label>
                <label class="form-field">
                    "Project Details *"
                    <textarea
                        name=Field::Message.name()
                        rows="6"
                        placeholder="Tell us about your project, goals, and timeline..."
                        required=true
                    ></textarea>
                    {error_for(Field::Message)}
                </label>
                <button type="submit" class="btn btn-primary btn-block">"Send Message"</button>
                {move || notice.get().map(|text| view! { <p class="form-notice" role="status">{text}</p> })}
            </form>
        </Reveal>
    }
}

/// Channels, social links and the reply-time promise beside the form.
#[component]
pub fn ContactDetails() -> impl IntoView {
    view! {
        <div class="contact-details">
            <Reveal>
                <h2 class="section-title">"GET IN " <span class="section-emphasis">"TOUCH"</span></h2>
            </Reveal>
            {CONTACT_CHANNELS
                .iter()
                .enumerate()
                .map(|(index, channel)| view! {
                    <Reveal index=index class="contact-channel">
                        <h3 class="contact-channel-title">{channel.title}</h3>
                        {channel.lines.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                    </Reveal>
                })
                .collect_view()}
            <Reveal index=CONTACT_CHANNELS.len() class="contact-social">
                <h3 class="contact-channel-title">"Follow Us"</h3>
                <div class="social-links">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| view! {
                            <a href=social.href target="_blank" rel="noopener" class="social-link" aria-label=social.platform>
                                {social.initial().to_string()}
                            </a>
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(field: Field) -> String {
        match field {
            Field::FirstName => "Ada",
            Field::LastName => "Lovelace",
            Field::Email => "ada@example.com",
            Field::Phone => "",
            Field::Service => "brand_strategy",
            Field::Budget => "over_50k",
            Field::Message => "A full rebrand for our analytical engine company.",
        }
        .to_string()
    }

    #[test]
    fn valid_draft_posts_only_with_endpoint() {
        let draft = draft_from(complete);
        assert_eq!(decide(&draft, Some("https://forms.example.com/f/1")), Submission::Send);
        match decide(&draft, None) {
            Submission::Notice(inquiry) => assert_eq!(inquiry.full_name(), "Ada Lovelace"),
            other => panic!("expected notice, got {other:?}"),
        }
    }

    #[test]
    fn later_attempts_replace_the_thank_you_notice() {
        let email = "hello@shootsync.com";
        let (errors, notice) = feedback(&decide(&draft_from(complete), None), email);
        assert!(errors.is_none());
        assert!(notice.is_some_and(|text| text.starts_with("Thanks, Ada!") && text.contains(email)));

        let bad = draft_from(|field| match field {
            Field::Message => String::new(),
            other => complete(other),
        });
        let (errors, notice) = feedback(&decide(&bad, None), email);
        assert_eq!(errors.map(|e| e.fields()), Some(vec![Field::Message]));
        assert_eq!(notice, None);

        let sent = feedback(&decide(&draft_from(complete), Some("https://forms.example.com/f/1")), email);
        assert_eq!(sent, (None, None));
    }

    #[test]
    fn invalid_draft_is_blocked() {
        let draft = draft_from(|field| match field {
            Field::Email => "ada@".to_string(),
            other => complete(other),
        });
        match decide(&draft, Some("https://forms.example.com/f/1")) {
            Submission::Invalid(errors) => assert_eq!(errors.fields(), vec![Field::Email]),
            other => panic!("expected errors, got {other:?}"),
        }
    }
}
