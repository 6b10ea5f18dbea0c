use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    #[default]
    Yearly,
}

impl BillingCycle {
    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            BillingCycle::Yearly => "Save 20% with yearly billing",
            BillingCycle::Monthly => "Monthly billing",
        }
    }
}

/// Yearly total for a monthly price with the yearly discount, rounded to whole dollars.
pub fn yearly_total(monthly: u32) -> u32 {
    (monthly as f64 * 12.0 * (1.0 - config::YEARLY_DISCOUNT)).round() as u32
}

/// Display string for a tier price. Tiers without a list price read "Custom".
pub fn format_price(monthly: Option<u32>, cycle: BillingCycle) -> String {
    match (monthly, cycle) {
        (None, _) => "Custom".to_string(),
        (Some(m), BillingCycle::Monthly) => format!("${}/mo", m),
        (Some(m), BillingCycle::Yearly) => format!("${}/yr", yearly_total(m)),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub monthly_price: Option<u32>,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub highlighted: bool,
}

pub const TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        monthly_price: Some(49),
        features: &["Landing page", "Basic SEO", "Email support"],
        cta: "Start now",
        highlighted: false,
    },
    PricingTier {
        name: "Growth",
        monthly_price: Some(99),
        features: &[
            "Multi-page site",
            "Blog & CMS",
            "Analytics setup",
            "Priority support",
        ],
        cta: "Choose Growth",
        highlighted: true,
    },
    PricingTier {
        name: "Custom",
        monthly_price: None,
        features: &["Scoping workshop", "Tailored roadmap", "Dedicated team"],
        cta: "Contact sales",
        highlighted: false,
    },
];

/// Plans offered on the pricing page, keyed by `id` for selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub badge: Option<&'static str>,
    pub highlighted: bool,
    pub accent_class: &'static str,
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "community",
        name: "Community",
        subtitle: "Perfect for personal projects and learning",
        price: "Free",
        features: &[
            "Basic website template",
            "Community support",
            "Documentation access",
            "Limited features",
        ],
        cta: "Get Started",
        badge: None,
        highlighted: false,
        accent_class: "accent-yellow",
    },
    Plan {
        id: "wordpress",
        name: "WordPress Solution",
        subtitle: "Tailored WordPress sites for businesses",
        price: "Custom Pricing",
        features: &[
            "Professional WordPress site",
            "Custom design & branding",
            "Responsive & mobile-friendly",
            "SEO optimization",
            "Content management system",
        ],
        cta: "Request Quote",
        badge: Some("Most Popular"),
        highlighted: true,
        accent_class: "accent-green",
    },
    Plan {
        id: "enterprise",
        name: "Enterprise",
        subtitle: "Complete digital solutions for organizations",
        price: "Let's Talk",
        features: &[
            "Full-scale digital ecosystem",
            "Custom web applications",
            "Advanced integrations",
            "Dedicated support team",
            "Scalable infrastructure",
        ],
        cta: "Contact Sales",
        badge: None,
        highlighted: false,
        accent_class: "accent-blue",
    },
];

pub const DEFAULT_PLAN: &str = "wordpress";

pub fn plan_by_id(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.id == id)
}

/// One row of the plan comparison table: inclusion per plan, in `PLANS` order.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub included: [bool; 3],
}

pub const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow { feature: "Basic website template", included: [true, false, false] },
    ComparisonRow { feature: "Professional WordPress site", included: [false, true, true] },
    ComparisonRow { feature: "Custom design & branding", included: [false, true, true] },
    ComparisonRow { feature: "Responsive & mobile-friendly", included: [false, true, true] },
    ComparisonRow { feature: "SEO optimization", included: [false, true, true] },
    ComparisonRow { feature: "Content management system", included: [false, true, true] },
    ComparisonRow { feature: "Full-scale digital ecosystem", included: [false, false, true] },
    ComparisonRow { feature: "Custom web applications", included: [false, false, true] },
    ComparisonRow { feature: "Advanced integrations", included: [false, false, true] },
    ComparisonRow { feature: "Dedicated support & services", included: [false, true, true] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_price_applies_discount_and_rounds() {
        assert_eq!(format_price(Some(99), BillingCycle::Yearly), "$950/yr");
        assert_eq!(format_price(Some(49), BillingCycle::Yearly), "$470/yr");
    }

    #[test]
    fn monthly_price_is_shown_as_is() {
        assert_eq!(format_price(Some(99), BillingCycle::Monthly), "$99/mo");
        assert_eq!(format_price(Some(49), BillingCycle::Monthly), "$49/mo");
    }

    #[test]
    fn unpriced_tier_reads_custom() {
        assert_eq!(format_price(None, BillingCycle::Yearly), "Custom");
        assert_eq!(format_price(None, BillingCycle::Monthly), "Custom");
    }

    #[test]
    fn yearly_total_matches_formula() {
        for m in [1u32, 5, 10, 49, 99, 250, 1000] {
            let expected = (m as f64 * 12.0 * 0.8).round() as u32;
            assert_eq!(yearly_total(m), expected);
        }
    }

    #[test]
    fn yearly_is_the_default_cycle() {
        assert_eq!(BillingCycle::default(), BillingCycle::Yearly);
        assert_eq!(BillingCycle::Yearly.subtitle(), "Save 20% with yearly billing");
        assert_eq!(BillingCycle::Yearly.toggled().subtitle(), "Monthly billing");
    }

    #[test]
    fn exactly_one_tier_is_highlighted() {
        assert_eq!(TIERS.iter().filter(|t| t.highlighted).count(), 1);
        assert_eq!(PLANS.iter().filter(|p| p.highlighted).count(), 1);
    }

    #[test]
    fn default_plan_exists() {
        assert_eq!(plan_by_id(DEFAULT_PLAN).map(|p| p.name), Some("WordPress Solution"));
        assert!(plan_by_id("platinum").is_none());
    }
}
