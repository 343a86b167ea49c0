use std::rc::Rc;

use gloo::console::log;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::pricing::{BillingCycle, DerivedTierView, PricingState};

// Dispatching a cycle re-derives every tier view; unknown cycles keep the same Rc.
impl Reducible for PricingState {
    type Action = BillingCycle;

    fn reduce(self: Rc<Self>, cycle: BillingCycle) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.select(cycle) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingGridProps {
    pub config: Rc<SiteConfig>,
    pub pricing: UseReducerHandle<PricingState>,
}

#[function_component(PricingGrid)]
pub fn pricing_grid(props: &PricingGridProps) -> Html {
    let contact = &props.config.contact;

    html! {
        <section id="pricing" class="wrap section">
          <div class="section-head">
            <div>
              <h2 class="h2">{ "Simple, transparent pricing" }</h2>
              <p class="muted">{ "No contracts. Cancel anytime." }</p>
            </div>
            <BillingToggle pricing={props.pricing.clone()} />
          </div>

          <div class="grid-3">
            { for props.pricing.views().iter().map(|view| html! {
                <TierCard
                  key={view.tier.name.clone()}
                  view={view.clone()}
                  cta_href={view.tier.cta_target(contact).to_string()}
                />
            })}
          </div>

          <div class="fine">
            { "Prices shown are estimates; actual billing handled via invoice or Stripe when enabled." }
          </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct BillingToggleProps {
    pricing: UseReducerHandle<PricingState>,
}

#[function_component(BillingToggle)]
fn billing_toggle(props: &BillingToggleProps) -> Html {
    let active = props.pricing.cycle();

    let on_select = {
        let pricing = props.pricing.clone();
        Callback::from(move |cycle: BillingCycle| {
            log!(format!("billing cycle -> {cycle}"));
            pricing.dispatch(cycle);
        })
    };

    html! {
        <div class="toggle" role="group" aria-label="Billing cycle">
          { for props.pricing.options().iter().copied().map(|cycle| {
              let onclick = on_select.reform(move |_: MouseEvent| cycle);
              html! {
                <button
                  key={cycle.name()}
                  class={classes!("toggle-opt", (cycle == active).then_some("on"))}
                  aria-pressed={(cycle == active).to_string()}
                  {onclick}
                >
                  { cycle.name() }
                </button>
              }
          })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TierCardProps {
    view: DerivedTierView,
    cta_href: AttrValue,
}

#[function_component(TierCard)]
fn tier_card(props: &TierCardProps) -> Html {
    let tier = &props.view.tier;

    html! {
        <article class={classes!("card", "tier", tier.highlight.then_some("tier-hot"))}>
          <div class="tier-head">
            <h3 class="card-t">{ tier.name.clone() }</h3>
            if tier.highlight {
              <span class="pill">{ "Most popular" }</span>
            }
          </div>
          <p class="card-p">{ tier.blurb.clone() }</p>

          <div class="price">
            <div class="price-big">{ props.view.display_price.clone() }</div>
            <div class="price-sub">{ props.view.sub_caption.clone() }</div>
          </div>

          <ul class="features">
            { for tier.features.iter().map(|f| html! {
                <li key={f.clone()}>
                  <svg class="check" viewBox="0 0 24 24" aria-hidden="true">
                    <path d="M20.285 6.708a1 1 0 0 1 .007 1.414l-9.193 9.28a1 1 0 0 1-1.433 0l-5.96-6.018a1 1 0 1 1 1.44-1.387l5.245 5.294 8.478-8.557a1 1 0 0 1 1.416-.026z" />
                  </svg>
                  <span>{ f.clone() }</span>
                </li>
            })}
          </ul>

          <a
            class={classes!("btn", if tier.highlight { "btn-primary" } else { "btn-ghost" })}
            href={props.cta_href.clone()}
          >
            { tier.cta_label.clone() }
          </a>
          <p class="fine">{ "Checkout coming soon — we’ll integrate Stripe or invoices here." }</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_state() -> Rc<PricingState> {
        let config = SiteConfig::embedded().expect("embedded config");
        Rc::new(PricingState::new(Rc::new(config)))
    }

    #[test]
    fn dispatch_switches_cycle_and_keeps_old_state() {
        let state = embedded_state();
        let annual = state.clone().reduce(BillingCycle::Annual);

        assert_eq!(annual.cycle(), BillingCycle::Annual);
        assert_eq!(annual.views()[0].display_price, "$5,988/yr");
        assert_eq!(state.views()[0].display_price, "$499/mo");
    }

    #[test]
    fn dispatch_of_unconfigured_cycle_is_a_no_op() {
        let mut config = SiteConfig::embedded().expect("embedded config");
        config.pricing.billing_cycles = vec![BillingCycle::Monthly];
        let state = Rc::new(PricingState::new(Rc::new(config)));

        let next = state.clone().reduce(BillingCycle::Annual);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn repeated_dispatch_is_idempotent() {
        let once = embedded_state().reduce(BillingCycle::Annual);
        let twice = once.clone().reduce(BillingCycle::Annual);
        assert_eq!(once.views(), twice.views());
    }
}
