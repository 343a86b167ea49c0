use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::pricing::{annual_base, BillingCycle};

// Baked in at build time; edit site.json and rebuild.
const EMBEDDED_SITE_JSON: &str = include_str!("../site.json");

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub sub: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Contact {
    pub email: String,
    // external scheduling link; every CTA falls back to it
    pub calendly: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub x: Option<String>,
}

impl SocialLinks {
    /// (label, href) for every link that is set.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [("Instagram", &self.instagram), ("X", &self.x)]
            .into_iter()
            .filter_map(|(label, href)| href.as_deref().map(|h| (label, h)))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Media {
    pub hero: Image,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PricingPolicy {
    pub billing_cycles: Vec<BillingCycle>,
    // display only; nothing here enforces what gets billed
    pub annual_discount_pct: Decimal,
}

impl PricingPolicy {
    pub fn default_cycle(&self) -> BillingCycle {
        self.billing_cycles
            .first()
            .copied()
            .unwrap_or(BillingCycle::Monthly)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Tier {
    pub name: String,
    pub monthly: Decimal,
    #[serde(default)]
    pub highlight: bool,
    pub blurb: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub cta_label: String,
    #[serde(default)]
    pub cta_href: Option<String>,
    #[serde(default)]
    pub price_suffix: Option<String>,
}

impl Tier {
    pub fn cta_target<'a>(&'a self, contact: &'a Contact) -> &'a str {
        self.cta_href.as_deref().unwrap_or(&contact.calendly)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Faq {
    pub q: String,
    pub a: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub brand: Brand,
    pub contact: Contact,
    #[serde(default)]
    pub social: SocialLinks,
    pub media: Media,
    pub pricing: PricingPolicy,
    pub tiers: Vec<Tier>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SITE_JSON)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tiers.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut names = HashSet::new();
        for tier in &self.tiers {
            if !names.insert(tier.name.as_str()) {
                return Err(ConfigError::DuplicateTier(tier.name.clone()));
            }
            if tier.monthly <= Decimal::ZERO {
                return Err(ConfigError::InvalidPrice {
                    tier: tier.name.clone(),
                    price: tier.monthly,
                });
            }
            if annual_base(tier.monthly).is_none() {
                return Err(ConfigError::PriceTooLarge {
                    tier: tier.name.clone(),
                    price: tier.monthly,
                });
            }
        }

        let pct = self.pricing.annual_discount_pct;
        if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
            return Err(ConfigError::DiscountOutOfRange(pct));
        }

        if self.pricing.billing_cycles.is_empty() {
            return Err(ConfigError::NoBillingCycles);
        }
        let mut seen = HashSet::new();
        for cycle in &self.pricing.billing_cycles {
            if !seen.insert(*cycle) {
                return Err(ConfigError::DuplicateBillingCycle(*cycle));
            }
        }

        Ok(())
    }

    // More than one is allowed, just odd-looking.
    pub fn highlighted_count(&self) -> usize {
        self.tiers.iter().filter(|t| t.highlight).count()
    }
}
