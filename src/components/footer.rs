use yew::prelude::*;

use super::{BrandMark, SectionProps};

#[function_component(SiteFooter)]
pub fn site_footer(props: &SectionProps) -> Html {
    let config = &props.config;

    html! {
        <footer class="footer">
          <div class="wrap footer-in">
            <div class="brand">
              <BrandMark />
              <span>{ config.brand.name.clone() }</span>
            </div>
            <nav class="nav">
              <a href="#pricing">{ "Pricing" }</a>
              <a href="#faq">{ "FAQ" }</a>
              <a href="#contact">{ "Contact" }</a>
            </nav>
            <nav class="nav" aria-label="Social">
              { for config.social.links().into_iter().map(|(label, href)| html! {
                  <a href={href.to_string()} target="_blank" rel="noopener noreferrer">{ label }</a>
              })}
            </nav>
          </div>
        </footer>
    }
}
