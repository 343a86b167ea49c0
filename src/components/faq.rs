use yew::prelude::*;

use super::SectionProps;

#[function_component(Faq)]
pub fn faq(props: &SectionProps) -> Html {
    let config = &props.config;

    html! {
        <section id="faq" class="wrap section">
          <h2 class="h2">{ "FAQ" }</h2>
          <div class="grid-2">
            { for config.faqs.iter().map(|f| html! {
                <div class="card" key={f.q.clone()}>
                  <h3 class="card-t">{ f.q.clone() }</h3>
                  <p class="card-p">{ f.a.clone() }</p>
                </div>
            })}
          </div>
        </section>
    }
}
