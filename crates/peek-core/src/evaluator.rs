//! Display facts derived from a successful comparison.
//!
//! Every function here is pure and recomputes from the [`Comparison`] it is
//! given; nothing is cached. The service's `cheaper_platform` is treated as
//! authoritative, so on equal prices whichever platform it names is "best".
//! Currency formatting is left to the presentation layer.

use schemars::JsonSchema;
use serde::Serialize;

use crate::enums::Platform;
use crate::response::Comparison;

/// Price on the platform the service named as cheaper.
#[must_use]
pub const fn cheaper_price(comparison: &Comparison) -> f64 {
    comparison.listing(comparison.cheaper_platform).price
}

/// Absolute difference between the two prices. Zero on a tie.
#[must_use]
pub fn savings(comparison: &Comparison) -> f64 {
    (comparison.amazon.price - comparison.flipkart.price).abs()
}

/// Whether `platform` should be highlighted as the best price.
///
/// True for exactly one platform per comparison.
#[must_use]
pub fn is_best_price(comparison: &Comparison, platform: Platform) -> bool {
    platform == comparison.cheaper_platform
}

/// Everything the presentation layer needs to highlight a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ComparisonFacts {
    pub cheaper_platform: Platform,
    pub cheaper_price: f64,
    pub savings_amount: f64,
    pub best_price: [(Platform, bool); 2],
}

impl ComparisonFacts {
    /// Highlight flag for `platform`.
    #[must_use]
    pub fn is_best_price(&self, platform: Platform) -> bool {
        self.best_price
            .iter()
            .any(|(candidate, best)| *candidate == platform && *best)
    }
}

/// Derive all display facts in one pass.
#[must_use]
pub fn facts(comparison: &Comparison) -> ComparisonFacts {
    ComparisonFacts {
        cheaper_platform: comparison.cheaper_platform,
        cheaper_price: cheaper_price(comparison),
        savings_amount: savings(comparison),
        best_price: Platform::ALL
            .map(|platform| (platform, is_best_price(comparison, platform))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Listing;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn comparison(amazon: f64, flipkart: f64, cheaper: Platform) -> Comparison {
        Comparison {
            product_name: "Sony WH-1000XM5".to_string(),
            cheaper_platform: cheaper,
            amazon: Listing {
                platform: Platform::Amazon,
                price: amazon,
                url: "https://www.amazon.in/dp/B09XS7JWHH".to_string(),
            },
            flipkart: Listing {
                platform: Platform::Flipkart,
                price: flipkart,
                url: "https://www.flipkart.com/p/itmsony".to_string(),
            },
            message: None,
        }
    }

    #[test]
    fn iphone_scenario() {
        let c = comparison(79900.0, 78999.0, Platform::Flipkart);
        assert_eq!(savings(&c), 901.0);
        assert_eq!(cheaper_price(&c), 78999.0);
        assert!(is_best_price(&c, Platform::Flipkart));
        assert!(!is_best_price(&c, Platform::Amazon));
    }

    #[rstest]
    #[case(29990.0, 26990.0, Platform::Flipkart, 26990.0, 3000.0)]
    #[case(26990.0, 29990.0, Platform::Amazon, 26990.0, 3000.0)]
    #[case(499.0, 499.0, Platform::Amazon, 499.0, 0.0)]
    #[case(499.0, 499.0, Platform::Flipkart, 499.0, 0.0)]
    #[case(0.0, 1.0, Platform::Amazon, 0.0, 1.0)]
    fn derives_price_and_savings(
        #[case] amazon: f64,
        #[case] flipkart: f64,
        #[case] cheaper: Platform,
        #[case] expected_price: f64,
        #[case] expected_savings: f64,
    ) {
        let c = comparison(amazon, flipkart, cheaper);
        assert_eq!(cheaper_price(&c), expected_price);
        assert_eq!(savings(&c), expected_savings);
    }

    #[test]
    fn cheaper_price_follows_service_not_arithmetic() {
        // The service is authoritative even when its pick is not the lower
        // price.
        let c = comparison(100.0, 200.0, Platform::Flipkart);
        assert_eq!(cheaper_price(&c), 200.0);
        assert_eq!(savings(&c), 100.0);
    }

    #[rstest]
    #[case(Platform::Amazon)]
    #[case(Platform::Flipkart)]
    fn exactly_one_platform_is_best(#[case] cheaper: Platform) {
        let c = comparison(1000.0, 1000.0, cheaper);
        let best: Vec<Platform> = Platform::ALL
            .into_iter()
            .filter(|platform| is_best_price(&c, *platform))
            .collect();
        assert_eq!(best, vec![cheaper]);
    }

    #[test]
    fn facts_bundle_matches_individual_functions() {
        let c = comparison(79900.0, 78999.0, Platform::Flipkart);
        let facts = facts(&c);
        assert_eq!(
            facts,
            ComparisonFacts {
                cheaper_platform: Platform::Flipkart,
                cheaper_price: 78999.0,
                savings_amount: 901.0,
                best_price: [(Platform::Amazon, false), (Platform::Flipkart, true)],
            }
        );
        assert!(facts.is_best_price(Platform::Flipkart));
        assert!(!facts.is_best_price(Platform::Amazon));
    }
}
