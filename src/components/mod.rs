mod contact;
mod faq;
mod footer;
mod header;
mod hero;
mod pricing;

pub use contact::ContactSection;
pub use faq::Faq;
pub use footer::SiteFooter;
pub use header::Header;
pub use hero::Hero;
pub use pricing::PricingGrid;

use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;

// Sections only read the config; App owns the one Rc.
#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(BrandMark)]
pub fn brand_mark() -> Html {
    html! { <div class="brand-mark" aria-hidden="true"></div> }
}
