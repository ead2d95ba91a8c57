//! Currency selection and tri-currency price display.
//!
//! Each product carries three independently set amounts (INR, USD, EUR);
//! no FX conversion happens anywhere in the system. Formatting selects one
//! amount verbatim and renders it with the currency symbol and exactly two
//! fraction digits. If an admin enters inconsistent values across currencies,
//! they are displayed faithfully.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three currencies the storefront displays.
///
/// The UI default is INR; the selection is per-request state and is never
/// persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
    Eur,
}

impl Currency {
    /// ISO 4217 currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    /// Display symbol prefixed to formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error parsing a currency code from a string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown currency code: {0}")]
pub struct CurrencyParseError(pub String);

impl FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            other => Err(CurrencyParseError(other.to_string())),
        }
    }
}

/// A product's price in all three supported currencies.
///
/// Serializes with the backend's column names (`price_inr`, `price_usd`,
/// `price_eur`) so it can be flattened into product and cart-item records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PriceSet {
    #[serde(rename = "price_inr")]
    pub inr: Decimal,
    #[serde(rename = "price_usd")]
    pub usd: Decimal,
    #[serde(rename = "price_eur")]
    pub eur: Decimal,
}

impl PriceSet {
    /// Create a price set from the three per-currency amounts.
    #[must_use]
    pub const fn new(inr: Decimal, usd: Decimal, eur: Decimal) -> Self {
        Self { inr, usd, eur }
    }

    /// The amount stored for the selected currency, verbatim.
    #[must_use]
    pub const fn amount(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Inr => self.inr,
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
        }
    }

    /// Format the selected currency's amount as `symbol` + two fraction
    /// digits, e.g. `₹1499.00`.
    ///
    /// Pure selection and rendering; no rounding beyond the two-digit
    /// display and no conversion between currencies.
    #[must_use]
    pub fn display(&self, currency: Currency) -> String {
        format!("{}{:.2}", currency.symbol(), self.amount(currency))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_currency_is_inr() {
        assert_eq!(Currency::default(), Currency::Inr);
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Currency::Inr.symbol(), "₹");
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Eur.symbol(), "€");
    }

    #[test]
    fn test_currency_parse_roundtrip() {
        for currency in [Currency::Inr, Currency::Usd, Currency::Eur] {
            assert_eq!(currency.code().parse::<Currency>().unwrap(), currency);
        }
        assert!("GBP".parse::<Currency>().is_err());
    }

    #[test]
    fn test_display_two_fraction_digits() {
        let prices = PriceSet::new(dec("1499"), dec("17.9"), dec("16.55"));
        assert_eq!(prices.display(Currency::Inr), "₹1499.00");
        assert_eq!(prices.display(Currency::Usd), "$17.90");
        assert_eq!(prices.display(Currency::Eur), "€16.55");
    }

    #[test]
    fn test_display_is_idempotent() {
        // Formatting twice, or switching currency and back, reproduces the
        // original string since amounts are selected verbatim.
        let prices = PriceSet::new(dec("100.5"), dec("1.21"), dec("1.11"));
        let first = prices.display(Currency::Inr);
        let _ = prices.display(Currency::Usd);
        assert_eq!(prices.display(Currency::Inr), first);
        assert_eq!(prices.display(Currency::Inr), "₹100.50");
    }

    #[test]
    fn test_inconsistent_amounts_displayed_faithfully() {
        // No FX relationship is enforced between the three amounts.
        let prices = PriceSet::new(dec("1"), dec("9999"), dec("0"));
        assert_eq!(prices.display(Currency::Inr), "₹1.00");
        assert_eq!(prices.display(Currency::Usd), "$9999.00");
        assert_eq!(prices.display(Currency::Eur), "€0.00");
    }

    #[test]
    fn test_price_set_serde_field_names() {
        let prices = PriceSet::new(dec("10"), dec("0.12"), dec("0.11"));
        let json = serde_json::to_value(prices).unwrap();
        assert!(json.get("price_inr").is_some());
        assert!(json.get("price_usd").is_some());
        assert!(json.get("price_eur").is_some());
    }
}
