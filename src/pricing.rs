use std::fmt;
use std::rc::Rc;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;

use crate::config::{PricingPolicy, SiteConfig, Tier};

const MONTHS_PER_YEAR: i64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum BillingCycle {
    Monthly,
    Annual,
}

impl BillingCycle {
    pub fn name(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Annual => "Annual",
        }
    }

    fn unit(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/mo",
            BillingCycle::Annual => "/yr",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tier as the pricing grid shows it for one billing cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTierView {
    pub tier: Tier,
    pub display_price: String,
    pub sub_caption: String,
}

// Whole dollars, half away from zero, for both cycles.
fn round_dollars(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an amount as whole US dollars: `5988` -> `"$5,988"`.
///
/// Negative amounts clamp to `$0`; validated configs never produce them.
pub fn format_usd(amount: Decimal) -> String {
    let whole = round_dollars(amount).max(Decimal::ZERO);
    format!("${}", group_thousands(&whole.trunc().to_string()))
}

/// `monthly * 12`, or `None` when that doesn't fit in a `Decimal`.
pub fn annual_base(monthly: Decimal) -> Option<Decimal> {
    monthly.checked_mul(Decimal::from(MONTHS_PER_YEAR))
}

/// `monthly * 12`, discounted, then rounded.
///
/// Validated configs always have an `annual_base`; anything larger saturates.
pub fn discounted_annual(monthly: Decimal, policy: &PricingPolicy) -> Decimal {
    let base_year = annual_base(monthly).unwrap_or(Decimal::MAX);
    let keep = Decimal::ONE - policy.annual_discount_pct / Decimal::ONE_HUNDRED;
    round_dollars(base_year * keep)
}

pub fn display_price(tier: &Tier, cycle: BillingCycle, policy: &PricingPolicy) -> String {
    let amount = match cycle {
        BillingCycle::Monthly => tier.monthly,
        BillingCycle::Annual => discounted_annual(tier.monthly, policy),
    };
    let base = format!("{}{}", format_usd(amount), cycle.unit());

    match tier.price_suffix.as_deref().map(str::trim) {
        Some(suffix) if !suffix.is_empty() => format!("{base} {suffix}"),
        _ => base,
    }
}

pub fn sub_caption(cycle: BillingCycle, policy: &PricingPolicy) -> String {
    match cycle {
        BillingCycle::Monthly => "Billed monthly".to_string(),
        BillingCycle::Annual => format!("{}% off annual", policy.annual_discount_pct.normalize()),
    }
}

/// Derives one view per tier, in catalog order. Never touches `tiers`.
pub fn present_tiers(
    tiers: &[Tier],
    cycle: BillingCycle,
    policy: &PricingPolicy,
) -> Vec<DerivedTierView> {
    let caption = sub_caption(cycle, policy);
    tiers
        .iter()
        .map(|t| DerivedTierView {
            tier: t.clone(),
            display_price: display_price(t, cycle, policy),
            sub_caption: caption.clone(),
        })
        .collect()
}

/// Billing cycle selection plus the tier views derived from it.
///
/// Every accepted selection recomputes the full view list.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingState {
    config: Rc<SiteConfig>,
    cycle: BillingCycle,
    views: Vec<DerivedTierView>,
}

impl PricingState {
    pub fn new(config: Rc<SiteConfig>) -> Self {
        let cycle = config.pricing.default_cycle();
        let views = present_tiers(&config.tiers, cycle, &config.pricing);
        Self { config, cycle, views }
    }

    pub fn cycle(&self) -> BillingCycle {
        self.cycle
    }

    pub fn views(&self) -> &[DerivedTierView] {
        &self.views
    }

    pub fn options(&self) -> &[BillingCycle] {
        &self.config.pricing.billing_cycles
    }

    /// Returns false (and leaves the state alone) for a cycle that isn't configured.
    pub fn select(&mut self, cycle: BillingCycle) -> bool {
        if !self.options().contains(&cycle) {
            return false;
        }
        self.cycle = cycle;
        self.views = present_tiers(&self.config.tiers, cycle, &self.config.pricing);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tier(name: &str, monthly: Decimal, suffix: Option<&str>) -> Tier {
        Tier {
            name: name.to_string(),
            monthly,
            highlight: false,
            blurb: String::new(),
            features: vec!["Weekly check-in".to_string()],
            cta_label: "Apply now".to_string(),
            cta_href: None,
            price_suffix: suffix.map(str::to_string),
        }
    }

    fn policy(pct: Decimal) -> PricingPolicy {
        PricingPolicy {
            billing_cycles: vec![BillingCycle::Monthly, BillingCycle::Annual],
            annual_discount_pct: pct,
        }
    }

    #[test]
    fn monthly_price_and_caption() {
        let t = tier("1 on 1", Decimal::from(499), None);
        let p = policy(Decimal::ZERO);
        assert_eq!(display_price(&t, BillingCycle::Monthly, &p), "$499/mo");
        assert_eq!(sub_caption(BillingCycle::Monthly, &p), "Billed monthly");
    }

    #[test]
    fn annual_without_discount() {
        let t = tier("1 on 1", Decimal::from(499), None);
        let p = policy(Decimal::ZERO);
        assert_eq!(display_price(&t, BillingCycle::Annual, &p), "$5,988/yr");
        assert_eq!(sub_caption(BillingCycle::Annual, &p), "0% off annual");
    }

    #[test]
    fn suffix_is_joined_with_single_space() {
        let t = tier("Executive", Decimal::from(4999), Some(" + room/board"));
        let p = policy(Decimal::ZERO);
        assert_eq!(
            display_price(&t, BillingCycle::Monthly, &p),
            "$4,999/mo + room/board"
        );
        assert_eq!(
            display_price(&t, BillingCycle::Annual, &p),
            "$59,988/yr + room/board"
        );
    }

    #[test]
    fn blank_suffix_is_ignored() {
        let t = tier("Plain", Decimal::from(50), Some("   "));
        assert_eq!(
            display_price(&t, BillingCycle::Monthly, &policy(Decimal::ZERO)),
            "$50/mo"
        );
    }

    #[test]
    fn full_discount_is_zero_dollars() {
        let t = tier("Free year", Decimal::from(499), None);
        let p = policy(Decimal::ONE_HUNDRED);
        assert_eq!(display_price(&t, BillingCycle::Annual, &p), "$0/yr");
        assert_eq!(sub_caption(BillingCycle::Annual, &p), "100% off annual");
    }

    #[test]
    fn ties_round_away_from_zero() {
        // 5988 * 0.875 = 5239.5
        let t = tier("Tie", Decimal::from(499), None);
        let p = policy(Decimal::new(125, 1));
        assert_eq!(display_price(&t, BillingCycle::Annual, &p), "$5,240/yr");
        assert_eq!(sub_caption(BillingCycle::Annual, &p), "12.5% off annual");

        let half = tier("Half", Decimal::new(995, 1), None);
        assert_eq!(display_price(&half, BillingCycle::Monthly, &p), "$100/mo");
    }

    #[test]
    fn fractional_monthly_rounds_to_whole_dollars() {
        // 100.04 * 12 = 1200.48
        let t = tier("Odd", Decimal::new(10004, 2), None);
        let p = policy(Decimal::ZERO);
        assert_eq!(display_price(&t, BillingCycle::Monthly, &p), "$100/mo");
        assert_eq!(display_price(&t, BillingCycle::Annual, &p), "$1,200/yr");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_usd(Decimal::from(0)), "$0");
        assert_eq!(format_usd(Decimal::from(999)), "$999");
        assert_eq!(format_usd(Decimal::from(1000)), "$1,000");
        assert_eq!(format_usd(Decimal::from(1_234_567)), "$1,234,567");
        assert_eq!(format_usd(Decimal::from(-5)), "$0");
    }

    #[test]
    fn selector_starts_on_first_configured_cycle() {
        let config = Rc::new(SiteConfig::embedded().expect("embedded config"));
        let state = PricingState::new(config.clone());
        assert_eq!(state.cycle(), config.pricing.billing_cycles[0]);
        assert_eq!(state.views().len(), config.tiers.len());
    }

    #[test]
    fn selector_recomputes_on_change() {
        let config = Rc::new(SiteConfig::embedded().expect("embedded config"));
        let mut state = PricingState::new(config);
        assert_eq!(state.views()[0].display_price, "$499/mo");

        assert!(state.select(BillingCycle::Annual));
        assert_eq!(state.cycle(), BillingCycle::Annual);
        assert_eq!(state.views()[0].display_price, "$5,988/yr");
        assert_eq!(state.views()[2].display_price, "$59,988/yr + room/board");
    }

    #[test]
    fn selector_ignores_unconfigured_cycle() {
        let mut config = SiteConfig::embedded().expect("embedded config");
        config.pricing.billing_cycles = vec![BillingCycle::Monthly];
        let mut state = PricingState::new(Rc::new(config));
        let before = state.clone();

        assert!(!state.select(BillingCycle::Annual));
        assert_eq!(state, before);
    }

    fn cycle_strategy() -> impl Strategy<Value = BillingCycle> {
        prop_oneof![Just(BillingCycle::Monthly), Just(BillingCycle::Annual)]
    }

    fn catalog_strategy() -> impl Strategy<Value = Vec<Tier>> {
        prop::collection::vec((1u32..100_000, 0u32..100), 1..8).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (dollars, cents))| {
                    let monthly = Decimal::from(dollars) + Decimal::new(i64::from(cents), 2);
                    tier(&format!("Tier {i}"), monthly, None)
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn presenting_is_deterministic(
            tiers in catalog_strategy(),
            cycle in cycle_strategy(),
            pct in 0u32..=100,
        ) {
            let p = policy(Decimal::from(pct));
            let before = tiers.clone();
            let first = present_tiers(&tiers, cycle, &p);
            let second = present_tiers(&tiers, cycle, &p);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&tiers, &before);
        }

        #[test]
        fn catalog_order_is_preserved(
            tiers in catalog_strategy(),
            cycle in cycle_strategy(),
        ) {
            let views = present_tiers(&tiers, cycle, &policy(Decimal::from(15)));
            let names: Vec<_> = views.iter().map(|v| v.tier.name.as_str()).collect();
            let expected: Vec<_> = tiers.iter().map(|t| t.name.as_str()).collect();
            prop_assert_eq!(names, expected);
        }

        #[test]
        fn annual_price_stays_within_bounds(
            dollars in 1u32..1_000_000,
            pct in 0u32..=100,
        ) {
            let monthly = Decimal::from(dollars);
            let p = policy(Decimal::from(pct));
            let annual = discounted_annual(monthly, &p);
            prop_assert!(annual >= Decimal::ZERO);
            prop_assert!(annual <= monthly * Decimal::from(12));
            if pct == 100 {
                prop_assert_eq!(annual, Decimal::ZERO);
            }
        }

        #[test]
        fn oversized_price_saturates_instead_of_panicking(pct in 0u32..=100) {
            let annual = discounted_annual(Decimal::MAX, &policy(Decimal::from(pct)));
            prop_assert!(annual >= Decimal::ZERO);
        }

        #[test]
        fn reselecting_same_cycle_is_idempotent(cycle in cycle_strategy()) {
            let config = Rc::new(SiteConfig::embedded().expect("embedded config"));
            let mut once = PricingState::new(config);
            once.select(cycle);
            let mut twice = once.clone();
            twice.select(cycle);
            prop_assert_eq!(once.views(), twice.views());
            prop_assert_eq!(once.cycle(), twice.cycle());
        }
    }
}
