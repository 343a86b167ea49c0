// src/main.rs
mod components;
mod config;
mod error;
mod pricing;

use std::rc::Rc;

use gloo::console;
use yew::prelude::*;

use components::{ContactSection, Faq, Header, Hero, PricingGrid, SiteFooter};
use config::SiteConfig;
use pricing::PricingState;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    // Billing cycle selection; every dispatch re-derives the tier views.
    let pricing = {
        let config = config.clone();
        use_reducer(move || PricingState::new(config))
    };

    html! {
        <div class="page" id="top">
          <Header config={config.clone()} />
          <main>
            <Hero config={config.clone()} />
            <PricingGrid config={config.clone()} {pricing} />
            <Faq config={config.clone()} />
            <ContactSection config={config.clone()} />
          </main>
          <SiteFooter {config} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ConfigErrorProps {
    message: AttrValue,
}

#[function_component(ConfigErrorPanel)]
fn config_error_panel(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="wrap-narrow section">
          <div class="card">
            <h1 class="h2">{ "Site configuration error" }</h1>
            <p class="card-p">{ "Fix site.json and rebuild." }</p>
            <span class="code">{ format!("ERROR: {}", props.message) }</span>
          </div>
        </div>
    }
}

fn main() {
    match SiteConfig::embedded() {
        Ok(config) => {
            console::log!(format!(
                "{}: {} tiers, default billing {}",
                config.brand.name,
                config.tiers.len(),
                config.pricing.default_cycle()
            ));
            if config.highlighted_count() > 1 {
                console::warn!(format!(
                    "{} tiers are highlighted; the grid will emphasize all of them",
                    config.highlighted_count()
                ));
            }
            yew::Renderer::<App>::with_props(AppProps {
                config: Rc::new(config),
            })
            .render();
        }
        Err(e) => {
            console::error!(format!("site config rejected: {e}"));
            yew::Renderer::<ConfigErrorPanel>::with_props(ConfigErrorProps {
                message: e.to_string().into(),
            })
            .render();
        }
    }
}
