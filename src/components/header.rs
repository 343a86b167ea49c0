use yew::prelude::*;

use super::{BrandMark, SectionProps};

#[function_component(Header)]
pub fn header(props: &SectionProps) -> Html {
    let config = &props.config;

    html! {
        <header class="topbar">
          <div class="wrap topbar-in">
            <a href="#top" class="brand">
              <BrandMark />
              <span class="brand-name">{ config.brand.name.clone() }</span>
            </a>
            <nav class="nav" aria-label="Sections">
              <a href="#pricing">{ "Pricing" }</a>
              <a href="#faq">{ "FAQ" }</a>
              <a href="#contact">{ "Contact" }</a>
              <a class="btn btn-primary btn-sm" href={config.contact.calendly.clone()}>{ "Free consult" }</a>
            </nav>
          </div>
        </header>
    }
}
