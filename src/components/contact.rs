use gloo::console::log;
use yew::prelude::*;

use super::SectionProps;

#[function_component(ContactSection)]
pub fn contact_section(props: &SectionProps) -> Html {
    let config = &props.config;
    let mailto = config.contact.mailto();

    // No backend yet: the form is display only.
    let on_submit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        log!("contact form submit suppressed; nothing was sent");
    });

    html! {
        <section id="contact" class="wrap-narrow section">
          <div class="card card-lg">
            <h2 class="h2">{ "Let’s talk about your goals" }</h2>
            <p class="card-p">
              { "Prefer email? " }
              <a class="link" href={mailto.clone()}>{ config.contact.email.clone() }</a>
            </p>

            <form class="form" onsubmit={on_submit}>
              <div class="grid-2">
                <label class="field">
                  <span>{ "Name" }</span>
                  <input placeholder="Your name" />
                </label>
                <label class="field">
                  <span>{ "Email" }</span>
                  <input type="email" placeholder="you@example.com" />
                </label>
              </div>
              <label class="field">
                <span>{ "What are you aiming for?" }</span>
                <textarea placeholder="e.g., Lose 20 lb, add 100 lb to my total, first show in 2026…" />
              </label>
              <div class="row">
                <a class="btn btn-primary" href={config.contact.calendly.clone()}>{ "Book free consult" }</a>
                <a class="btn btn-ghost" href={mailto}>{ "Email me instead" }</a>
              </div>
              <p class="fine">
                { "Submitting doesn’t start billing. Payments will be handled securely via Stripe once enabled." }
              </p>
            </form>
          </div>
        </section>
    }
}
