use yew::prelude::*;

use super::SectionProps;

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    let config = &props.config;
    let image = &config.media.hero;

    html! {
        <section class="hero">
          <div class="glow glow-a" aria-hidden="true"></div>
          <div class="glow glow-b" aria-hidden="true"></div>

          <div class="wrap hero-grid">
            <div>
              <h1 class="h1">{ config.brand.tagline.clone() }</h1>
              <p class="sub">{ config.brand.sub.clone() }</p>
              <div class="row">
                <a class="btn btn-primary" href="#pricing">{ "See pricing" }</a>
                <a class="btn btn-ghost" href={config.contact.calendly.clone()}>{ "Book a free consult" }</a>
              </div>
              <div class="tip">{ "Tip: Toggle billing to preview annual pricing." }</div>
            </div>

            <div class="hero-media">
              <div class="frame">
                <img src={image.src.clone()} alt={image.alt.clone()} />
              </div>
              <div class="badge">{ "Trusted by lifters, athletes, and busy professionals." }</div>
            </div>
          </div>
        </section>
    }
}
