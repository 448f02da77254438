//! Wire contract of the remote comparison service and its validated form.
//!
//! [`ComparisonResponse`] mirrors the JSON body of `GET /compare/<query>`
//! field for field and accepts partial bodies, so an error-only answer such as
//! `{"error": "No matching product found"}` still parses. [`Comparison`] is
//! what a successful body becomes once every field the display relies on has
//! been checked.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Platform;
use crate::errors::ContractError;

/// Body returned by the comparison service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ComparisonResponse {
    /// Human-readable label of the matched product.
    pub product_name: Option<String>,
    /// Deep link to the Amazon listing.
    pub amazon_url: Option<String>,
    /// Deep link to the Flipkart listing.
    pub flipkart_url: Option<String>,
    /// Amazon price in whole rupees.
    pub amazon_price: Option<f64>,
    /// Flipkart price in whole rupees.
    pub flipkart_price: Option<f64>,
    /// Platform the service considers cheaper (`"Amazon"` or `"Flipkart"`).
    pub cheaper_platform: Option<String>,
    /// Informational note, e.g. a partial-match caveat.
    pub message: Option<String>,
    /// Failure message. When non-empty the rest of the body is meaningless.
    pub error: Option<String>,
}

impl ComparisonResponse {
    /// The service-supplied failure message, if this body reports one.
    ///
    /// Any non-empty `error` counts, whitespace included; only `""` or an
    /// absent field means no error.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.error.as_deref().filter(|error| !error.is_empty())
    }

    /// Build an error-only body.
    #[must_use]
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

/// One platform's side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Listing {
    pub platform: Platform,
    pub price: f64,
    pub url: String,
}

/// A validated, successful comparison.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Comparison {
    pub product_name: String,
    pub cheaper_platform: Platform,
    pub amazon: Listing,
    pub flipkart: Listing,
    pub message: Option<String>,
}

impl Comparison {
    /// The listing for `platform`.
    #[must_use]
    pub const fn listing(&self, platform: Platform) -> &Listing {
        match platform {
            Platform::Amazon => &self.amazon,
            Platform::Flipkart => &self.flipkart,
        }
    }

    /// Both listings in display order.
    #[must_use]
    pub const fn listings(&self) -> [&Listing; 2] {
        [&self.amazon, &self.flipkart]
    }
}

impl TryFrom<ComparisonResponse> for Comparison {
    type Error = ContractError;

    /// Validate a body whose `error` is empty.
    ///
    /// Both prices must be present, finite and non-negative, and
    /// `cheaper_platform` must name a known platform. The service's choice of
    /// cheaper platform is taken as given, including on ties.
    fn try_from(body: ComparisonResponse) -> Result<Self, Self::Error> {
        let amazon_price = price("amazon_price", body.amazon_price)?;
        let flipkart_price = price("flipkart_price", body.flipkart_price)?;
        let cheaper_platform = body
            .cheaper_platform
            .as_deref()
            .ok_or(ContractError::MissingPlatform)?
            .parse::<Platform>()?;

        Ok(Self {
            product_name: body.product_name.unwrap_or_default(),
            cheaper_platform,
            amazon: Listing {
                platform: Platform::Amazon,
                price: amazon_price,
                url: body.amazon_url.unwrap_or_default(),
            },
            flipkart: Listing {
                platform: Platform::Flipkart,
                price: flipkart_price,
                url: body.flipkart_url.unwrap_or_default(),
            },
            message: body.message.filter(|message| !message.trim().is_empty()),
        })
    }
}

fn price(field: &'static str, value: Option<f64>) -> Result<f64, ContractError> {
    let value = value.ok_or(ContractError::MissingPrice { field })?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ContractError::InvalidPrice {
            field,
            value: value.to_string(),
        })
    }
}
