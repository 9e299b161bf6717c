//! Plan recommendation and ROI estimation for the pricing calculator
//!
//! The tier table is validated once when it is built. After that,
//! [`TierTable::recommend`] always finds a match because the last tier is
//! unbounded on every dimension.

use serde::{Deserialize, Serialize};

/// Upper bound on one usage dimension. `None` means "no limit".
pub type Limit = Option<u32>;

/// Whether the customer pays month to month or yearly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCadence {
    Monthly,
    #[default]
    Annual,
}

impl BillingCadence {
    pub fn is_annual(&self) -> bool {
        matches!(self, BillingCadence::Annual)
    }

    pub fn toggled(&self) -> Self {
        match self {
            BillingCadence::Monthly => BillingCadence::Annual,
            BillingCadence::Annual => BillingCadence::Monthly,
        }
    }
}

/// A pricing plan with usage caps and two price points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub max_team_size: Limit,
    pub max_content_volume: Limit,
    pub max_campaign_count: Limit,
    /// Price per month when billed monthly
    pub monthly_price: f64,
    /// Price per month when billed annually
    pub annual_price: f64,
}

impl PricingTier {
    pub fn new(
        name: impl Into<String>,
        max_team_size: Limit,
        max_content_volume: Limit,
        max_campaign_count: Limit,
        monthly_price: f64,
        annual_price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            max_team_size,
            max_content_volume,
            max_campaign_count,
            monthly_price,
            annual_price,
        }
    }

    /// Whether the usage fits under every cap of this tier
    pub fn accepts(&self, usage: &UsageInput) -> bool {
        within(usage.team_size, self.max_team_size)
            && within(usage.content_volume, self.max_content_volume)
            && within(usage.campaign_count, self.max_campaign_count)
    }

    pub fn effective_price(&self, cadence: BillingCadence) -> f64 {
        match cadence {
            BillingCadence::Annual => self.annual_price,
            BillingCadence::Monthly => self.monthly_price,
        }
    }

    /// Yearly amount saved by choosing annual billing
    pub fn annual_savings(&self) -> f64 {
        (self.monthly_price - self.annual_price) * 12.0
    }

    /// Amount charged over a year at the given cadence
    pub fn billed_per_year(&self, cadence: BillingCadence) -> f64 {
        self.effective_price(cadence) * 12.0
    }

    /// Annual discount as a whole percentage of the monthly price
    pub fn savings_percent(&self) -> u32 {
        if self.monthly_price <= 0.0 {
            return 0;
        }
        let percent = (self.monthly_price - self.annual_price) / self.monthly_price * 100.0;
        percent.round().max(0.0) as u32
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_team_size.is_none()
            && self.max_content_volume.is_none()
            && self.max_campaign_count.is_none()
    }
}

fn within(value: u32, limit: Limit) -> bool {
    limit.is_none_or(|max| value <= max)
}

/// `None` sorts above every finite bound
fn limit_le(lower: Limit, upper: Limit) -> bool {
    match (lower, upper) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(a), Some(b)) => a <= b,
    }
}

/// Tier table errors, raised once when the table is built
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TierTableError {
    #[error("tier table is empty")]
    Empty,
    #[error("tier '{name}' has an invalid price (monthly {monthly}, annual {annual})")]
    InvalidPrice {
        name: String,
        monthly: f64,
        annual: f64,
    },
    #[error("tier '{name}' charges more per month on annual billing than on monthly billing")]
    AnnualAboveMonthly { name: String },
    #[error("tier '{name}' has a lower {dimension} limit than the tier before it")]
    DecreasingLimit {
        name: String,
        dimension: &'static str,
    },
    #[error("last tier '{name}' must be unlimited on every dimension")]
    BoundedLastTier { name: String },
    #[error("tier name '{name}' appears more than once")]
    DuplicateName { name: String },
}

/// Ordered, validated list of pricing tiers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierTable {
    tiers: Vec<PricingTier>,
}

impl TierTable {
    /// Validate and wrap an ordered tier list
    pub fn new(tiers: Vec<PricingTier>) -> Result<Self, TierTableError> {
        let last = tiers.last().ok_or(TierTableError::Empty)?;
        if !last.is_unbounded() {
            return Err(TierTableError::BoundedLastTier {
                name: last.name.clone(),
            });
        }

        for (i, tier) in tiers.iter().enumerate() {
            let prices_ok = tier.monthly_price.is_finite()
                && tier.annual_price.is_finite()
                && tier.monthly_price > 0.0
                && tier.annual_price > 0.0;
            if !prices_ok {
                return Err(TierTableError::InvalidPrice {
                    name: tier.name.clone(),
                    monthly: tier.monthly_price,
                    annual: tier.annual_price,
                });
            }
            if tier.annual_price > tier.monthly_price {
                return Err(TierTableError::AnnualAboveMonthly {
                    name: tier.name.clone(),
                });
            }
            if tiers[..i].iter().any(|t| t.name == tier.name) {
                return Err(TierTableError::DuplicateName {
                    name: tier.name.clone(),
                });
            }
            if i > 0 {
                let prev = &tiers[i - 1];
                let checks = [
                    ("team size", prev.max_team_size, tier.max_team_size),
                    ("content volume", prev.max_content_volume, tier.max_content_volume),
                    ("campaign count", prev.max_campaign_count, tier.max_campaign_count),
                ];
                if let Some((dimension, _, _)) =
                    checks.iter().find(|(_, lower, upper)| !limit_le(*lower, *upper))
                {
                    return Err(TierTableError::DecreasingLimit {
                        name: tier.name.clone(),
                        dimension: *dimension,
                    });
                }
            }
        }

        Ok(Self { tiers })
    }

    /// First (cheapest) tier whose caps accommodate the usage
    pub fn recommend(&self, usage: &UsageInput) -> &PricingTier {
        self.tiers
            .iter()
            .find(|tier| tier.accepts(usage))
            .unwrap_or_else(|| self.top())
    }

    /// Highest-capacity tier
    pub fn top(&self) -> &PricingTier {
        // `new` rejects empty tables
        &self.tiers[self.tiers.len() - 1]
    }

    pub fn find(&self, name: &str) -> Option<&PricingTier> {
        self.tiers.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricingTier> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

/// Free-function form of [`TierTable::recommend`]
pub fn recommend_tier<'a>(usage: &UsageInput, tiers: &'a TierTable) -> &'a PricingTier {
    tiers.recommend(usage)
}

/// Range of one calculator slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl SliderBounds {
    pub const fn new(min: u32, max: u32, step: u32) -> Self {
        Self { min, max, step }
    }

    /// Clamp into `[min, max]` and snap down onto the step grid starting at `min`
    pub fn clamp(&self, value: u32) -> u32 {
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 1 {
            return clamped;
        }
        self.min + (clamped - self.min) / self.step * self.step
    }

    fn is_valid(&self) -> bool {
        self.min <= self.max && self.step > 0
    }
}

/// Usage figures entered in the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageInput {
    pub team_size: u32,
    pub content_volume: u32,
    pub campaign_count: u32,
    pub billing_cadence: BillingCadence,
}

impl Default for UsageInput {
    fn default() -> Self {
        Self {
            team_size: 5,
            content_volume: 1000,
            campaign_count: 10,
            billing_cadence: BillingCadence::Annual,
        }
    }
}

impl UsageInput {
    pub fn new(team_size: u32, content_volume: u32, campaign_count: u32) -> Self {
        Self {
            team_size,
            content_volume,
            campaign_count,
            ..Self::default()
        }
    }

    pub fn with_cadence(mut self, cadence: BillingCadence) -> Self {
        self.billing_cadence = cadence;
        self
    }

    /// Clamp every dimension into its slider range
    pub fn clamped(&self, config: &CalculatorConfig) -> Self {
        Self {
            team_size: config.team_bounds.clamp(self.team_size),
            content_volume: config.content_bounds.clamp(self.content_volume),
            campaign_count: config.campaign_bounds.clamp(self.campaign_count),
            billing_cadence: self.billing_cadence,
        }
    }
}

/// Derived return-on-investment figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiEstimate {
    pub hours_saved_per_month: f64,
    pub monthly_savings: f64,
    /// Never negative
    pub roi_percent: f64,
}

/// Estimate the monthly return of a plan costing `effective_price`
pub fn estimate_roi(
    usage: &UsageInput,
    effective_price: f64,
    hours_factor: f64,
    cost_per_hour: f64,
) -> RoiEstimate {
    let hours_saved_per_month = f64::from(usage.team_size) * hours_factor;
    let monthly_savings = hours_saved_per_month * cost_per_hour;
    let roi_percent = if effective_price > 0.0 {
        ((monthly_savings - effective_price) / effective_price * 100.0).max(0.0)
    } else {
        0.0
    };

    RoiEstimate {
        hours_saved_per_month,
        monthly_savings,
        roi_percent,
    }
}

/// Calculator configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorConfigError {
    #[error(transparent)]
    Tiers(#[from] TierTableError),
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidFactor { name: &'static str, value: f64 },
    #[error("{name} slider bounds are invalid (min {min}, max {max}, step {step})")]
    InvalidBounds {
        name: &'static str,
        min: u32,
        max: u32,
        step: u32,
    },
}

/// Constants feeding the pricing calculator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorConfig {
    pub tiers: TierTable,
    /// Hours saved per team member per month
    pub hours_saved_per_seat: f64,
    /// Average hourly cost of a marketing professional
    pub cost_per_hour: f64,
    pub team_bounds: SliderBounds,
    pub content_bounds: SliderBounds,
    pub campaign_bounds: SliderBounds,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            tiers: TierTable {
                tiers: default_tiers(),
            },
            hours_saved_per_seat: 10.0,
            cost_per_hour: 50.0,
            team_bounds: SliderBounds::new(1, 100, 1),
            content_bounds: SliderBounds::new(100, 50_000, 100),
            campaign_bounds: SliderBounds::new(1, 200, 1),
        }
    }
}

/// Starter, Professional and Enterprise, in ascending capacity
pub fn default_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier::new("Starter", Some(5), Some(1_000), Some(5), 29.0, 24.0),
        PricingTier::new("Professional", Some(25), Some(10_000), Some(50), 79.0, 65.0),
        PricingTier::new("Enterprise", None, None, None, 199.0, 165.0),
    ]
}

impl CalculatorConfig {
    /// Build a config from a raw tier list, validating everything
    pub fn new(
        tiers: Vec<PricingTier>,
        hours_saved_per_seat: f64,
        cost_per_hour: f64,
    ) -> Result<Self, CalculatorConfigError> {
        let config = Self {
            tiers: TierTable::new(tiers)?,
            hours_saved_per_seat,
            cost_per_hour,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_bounds(
        mut self,
        team: SliderBounds,
        content: SliderBounds,
        campaigns: SliderBounds,
    ) -> Result<Self, CalculatorConfigError> {
        self.team_bounds = team;
        self.content_bounds = content;
        self.campaign_bounds = campaigns;
        self.validate()?;
        Ok(self)
    }

    /// Check every invariant; meant to run once at startup
    pub fn validate(&self) -> Result<(), CalculatorConfigError> {
        TierTable::new(self.tiers.tiers.clone())?;

        for (name, value) in [
            ("hours_saved_per_seat", self.hours_saved_per_seat),
            ("cost_per_hour", self.cost_per_hour),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CalculatorConfigError::InvalidFactor { name, value });
            }
        }

        for (name, bounds) in [
            ("team", self.team_bounds),
            ("content", self.content_bounds),
            ("campaign", self.campaign_bounds),
        ] {
            if !bounds.is_valid() {
                return Err(CalculatorConfigError::InvalidBounds {
                    name,
                    min: bounds.min,
                    max: bounds.max,
                    step: bounds.step,
                });
            }
        }

        Ok(())
    }

    /// Recommendation plus derived figures for one set of inputs
    pub fn quote(&self, usage: &UsageInput) -> Quote {
        let tier = self.tiers.recommend(usage).clone();
        let effective_price = tier.effective_price(usage.billing_cadence);
        let roi = estimate_roi(
            usage,
            effective_price,
            self.hours_saved_per_seat,
            self.cost_per_hour,
        );

        Quote {
            annual_savings: tier.annual_savings(),
            billed_per_year: tier.billed_per_year(usage.billing_cadence),
            effective_price,
            cadence: usage.billing_cadence,
            tier,
            roi,
        }
    }
}

/// Everything the calculator shows for the current inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub tier: PricingTier,
    pub cadence: BillingCadence,
    pub effective_price: f64,
    pub annual_savings: f64,
    pub billed_per_year: f64,
    pub roi: RoiEstimate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TierTable {
        TierTable::new(default_tiers()).unwrap()
    }

    #[test]
    fn test_small_usage_gets_starter() {
        let usage = UsageInput::new(3, 500, 2);
        assert_eq!(table().recommend(&usage).name, "Starter");
    }

    #[test]
    fn test_campaigns_push_to_professional() {
        // team and content fit Starter, campaigns do not
        let usage = UsageInput::new(5, 1000, 10);
        assert_eq!(recommend_tier(&usage, &table()).name, "Professional");
    }

    #[test]
    fn test_limits_are_inclusive() {
        let usage = UsageInput::new(5, 1000, 5);
        assert_eq!(table().recommend(&usage).name, "Starter");

        let usage = UsageInput::new(25, 10_000, 50);
        assert_eq!(table().recommend(&usage).name, "Professional");

        let usage = UsageInput::new(26, 10_000, 50);
        assert_eq!(table().recommend(&usage).name, "Enterprise");
    }

    #[test]
    fn test_huge_usage_gets_enterprise() {
        let usage = UsageInput::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(table().recommend(&usage).name, "Enterprise");
    }

    #[test]
    fn test_overlapping_tiers_pick_first() {
        let tiers = TierTable::new(vec![
            PricingTier::new("A", Some(10), Some(10), Some(10), 10.0, 9.0),
            PricingTier::new("B", Some(10), Some(10), Some(10), 20.0, 19.0),
            PricingTier::new("C", None, None, None, 30.0, 29.0),
        ])
        .unwrap();
        assert_eq!(tiers.recommend(&UsageInput::new(1, 1, 1)).name, "A");
    }

    #[test]
    fn test_effective_price_and_savings() {
        let table = table();
        let pro = table.find("Professional").unwrap();
        assert_eq!(pro.effective_price(BillingCadence::Monthly), 79.0);
        assert_eq!(pro.effective_price(BillingCadence::Annual), 65.0);
        assert_eq!(pro.annual_savings(), 168.0);
        assert_eq!(pro.billed_per_year(BillingCadence::Annual), 780.0);
        assert_eq!(pro.savings_percent(), 18);
    }

    #[test]
    fn test_roi_matches_reference_numbers() {
        let usage = UsageInput::new(5, 1000, 10);
        let roi = estimate_roi(&usage, 65.0, 10.0, 50.0);
        assert_eq!(roi.hours_saved_per_month, 50.0);
        assert_eq!(roi.monthly_savings, 2500.0);
        assert!((roi.roi_percent - 3746.153846).abs() < 1e-3);
    }

    #[test]
    fn test_roi_is_never_negative() {
        let usage = UsageInput::new(1, 100, 1);
        let roi = estimate_roi(&usage, 1_000_000.0, 10.0, 50.0);
        assert_eq!(roi.roi_percent, 0.0);

        let roi = estimate_roi(&usage, 0.0, 10.0, 50.0);
        assert_eq!(roi.roi_percent, 0.0);

        let roi = estimate_roi(&UsageInput::new(0, 0, 0), 29.0, 0.0, 0.0);
        assert_eq!(roi.roi_percent, 0.0);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(TierTable::new(vec![]), Err(TierTableError::Empty));
    }

    #[test]
    fn test_bounded_last_tier_rejected() {
        let err = TierTable::new(vec![PricingTier::new(
            "Solo",
            Some(1),
            None,
            None,
            10.0,
            8.0,
        )])
        .unwrap_err();
        assert!(matches!(err, TierTableError::BoundedLastTier { .. }));
    }

    #[test]
    fn test_decreasing_limit_rejected() {
        let err = TierTable::new(vec![
            PricingTier::new("Big", Some(50), Some(10), Some(10), 10.0, 8.0),
            PricingTier::new("Small", Some(5), Some(10), Some(10), 20.0, 18.0),
            PricingTier::new("Top", None, None, None, 30.0, 28.0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            TierTableError::DecreasingLimit {
                name: "Small".to_string(),
                dimension: "team size",
            }
        );
    }

    #[test]
    fn test_unbounded_middle_tier_rejected() {
        let err = TierTable::new(vec![
            PricingTier::new("A", None, Some(10), Some(10), 10.0, 8.0),
            PricingTier::new("B", Some(100), None, None, 20.0, 18.0),
            PricingTier::new("C", None, None, None, 30.0, 28.0),
        ])
        .unwrap_err();
        assert!(matches!(err, TierTableError::DecreasingLimit { .. }));
    }

    #[test]
    fn test_bad_prices_rejected() {
        let err = TierTable::new(vec![PricingTier::new("X", None, None, None, 0.0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, TierTableError::InvalidPrice { .. }));

        let err = TierTable::new(vec![PricingTier::new("X", None, None, None, 10.0, 12.0)])
            .unwrap_err();
        assert!(matches!(err, TierTableError::AnnualAboveMonthly { .. }));

        let err = TierTable::new(vec![PricingTier::new(
            "X",
            None,
            None,
            None,
            f64::NAN,
            1.0,
        )])
        .unwrap_err();
        assert!(matches!(err, TierTableError::InvalidPrice { .. }));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = TierTable::new(vec![
            PricingTier::new("Same", Some(1), Some(1), Some(1), 10.0, 8.0),
            PricingTier::new("Same", None, None, None, 20.0, 18.0),
        ])
        .unwrap_err();
        assert!(matches!(err, TierTableError::DuplicateName { .. }));
    }

    #[test]
    fn test_slider_clamp() {
        let content = SliderBounds::new(100, 50_000, 100);
        assert_eq!(content.clamp(0), 100);
        assert_eq!(content.clamp(1_050), 1_000);
        assert_eq!(content.clamp(99_999), 50_000);

        let team = SliderBounds::new(1, 100, 1);
        assert_eq!(team.clamp(0), 1);
        assert_eq!(team.clamp(42), 42);
        assert_eq!(team.clamp(500), 100);
    }

    #[test]
    fn test_usage_clamped_into_config_ranges() {
        let config = CalculatorConfig::default();
        let usage = UsageInput::new(0, 70_000, 999).clamped(&config);
        assert_eq!(usage, UsageInput::new(1, 50_000, 200));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(CalculatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_factor() {
        let err = CalculatorConfig::new(default_tiers(), -1.0, 50.0).unwrap_err();
        assert!(matches!(
            err,
            CalculatorConfigError::InvalidFactor {
                name: "hours_saved_per_seat",
                ..
            }
        ));
    }

    #[test]
    fn test_config_rejects_bad_bounds() {
        let err = CalculatorConfig::default()
            .with_bounds(
                SliderBounds::new(10, 1, 1),
                SliderBounds::new(100, 50_000, 100),
                SliderBounds::new(1, 200, 1),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CalculatorConfigError::InvalidBounds { name: "team", .. }
        ));
    }

    #[test]
    fn test_config_wraps_tier_errors() {
        let err = CalculatorConfig::new(vec![], 10.0, 50.0).unwrap_err();
        assert_eq!(err, CalculatorConfigError::Tiers(TierTableError::Empty));
        assert_eq!(err.to_string(), "tier table is empty");
    }

    #[test]
    fn test_quote_for_defaults() {
        let config = CalculatorConfig::default();
        let quote = config.quote(&UsageInput::default());
        assert_eq!(quote.tier.name, "Professional");
        assert_eq!(quote.effective_price, 65.0);
        assert_eq!(quote.annual_savings, 168.0);
        assert_eq!(quote.billed_per_year, 780.0);

        let monthly = config.quote(&UsageInput::default().with_cadence(BillingCadence::Monthly));
        assert_eq!(monthly.effective_price, 79.0);
        assert!(monthly.roi.roi_percent < quote.roi.roi_percent);
    }

    #[test]
    fn test_cadence_toggle() {
        assert_eq!(BillingCadence::Annual.toggled(), BillingCadence::Monthly);
        assert_eq!(BillingCadence::Monthly.toggled(), BillingCadence::Annual);
        assert!(BillingCadence::default().is_annual());
    }
}
