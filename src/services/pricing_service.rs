use crate::models::catalog::AddonService;
use crate::models::rental::RentalQuote;

/// Discount percentage per loyalty tier. Fixed table, not configurable at
/// runtime.
const TIER_DISCOUNTS: [f64; 5] = [0.0, 5.0, 10.0, 15.0, 20.0];

pub struct PricingService;

impl PricingService {
    /// Base vehicle cost over the rental period.
    pub fn calculate_car_cost(days: u32, daily_rate: f64) -> f64 {
        f64::from(days) * daily_rate
    }

    /// Total cost of the selected add-on services over the rental period.
    ///
    /// Daily services accrue per rental day, one-time services charge their
    /// flat rate once. Selected ids missing from the catalog contribute
    /// nothing, so a quote stays valid while the catalog is still loading.
    pub fn calculate_services_cost(
        days: u32,
        selected: &[String],
        catalog: &[AddonService],
    ) -> f64 {
        selected
            .iter()
            .filter_map(|id| catalog.iter().find(|s| &s.id == id))
            .map(|s| {
                if s.daily {
                    s.rate * f64::from(days)
                } else {
                    s.rate
                }
            })
            .sum()
    }

    /// Discount percentage for a loyalty tier.
    ///
    /// Precondition: `tier <= 4`. Out-of-range tiers are a caller error and
    /// are not defended against.
    pub fn tier_discount_percent(tier: u8) -> f64 {
        TIER_DISCOUNTS[tier as usize]
    }

    /// Full price breakdown for one rental configuration.
    ///
    /// Pure: identical inputs always produce an identical quote, so it can
    /// be re-run on every form change and again right before submission.
    pub fn quote(
        days: u32,
        daily_rate: f64,
        selected: &[String],
        catalog: &[AddonService],
        tier: u8,
    ) -> RentalQuote {
        let car_cost = Self::calculate_car_cost(days, daily_rate);
        let services_cost = Self::calculate_services_cost(days, selected, catalog);
        let subtotal = car_cost + services_cost;
        let discount_amount = subtotal * Self::tier_discount_percent(tier) / 100.0;

        RentalQuote {
            days,
            car_cost,
            services_cost,
            subtotal,
            discount_amount,
            final_price: subtotal - discount_amount,
        }
    }
}
