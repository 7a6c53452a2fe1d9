use crate::sections::{ContactDetails, ContactForm, FaqList, Hero};
use leptos::prelude::*;
use shootsync::content::CONTACT_HERO;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Hero hero=&CONTACT_HERO />
        <section class="contact">
            <div class="container contact-grid">
                <ContactForm />
                <ContactDetails />
            </div>
        </section>
        <FaqList />
    }
}
