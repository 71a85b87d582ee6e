//! Pricing plan extraction from the free text `terms.billing` field.
//!
//! The billing text has no structure of its own. It is read as up to three
//! whitespace separated tokens, `<price> <currency> <unit>`, by position
//! only: nothing checks that the price is a number or the currency a code.
//! Everything after the second token is kept as the unit, so
//! `"5 EUR per month"` gives the unit `"per month"`. Missing positions are
//! `None`. The parse never fails.

use crate::PricingPlan;

/// Builds a pricing plan from a billing string.
///
/// # Example
///
/// ```rust
/// use contracts_odps::parse_billing;
///
/// let plan = parse_billing("9.95 USD megabyte");
/// assert_eq!(plan.price.as_deref(), Some("9.95"));
/// assert_eq!(plan.price_currency.as_deref(), Some("USD"));
/// assert_eq!(plan.unit.as_deref(), Some("megabyte"));
/// ```
pub fn parse_billing(billing: &str) -> PricingPlan {
    let [price, currency, unit] = split_billing(billing);

    PricingPlan {
        name: None,
        price_currency: currency.map(str::to_string),
        price: price.map(str::to_string),
        unit: unit.map(str::to_string),
    }
}

/// Splits into at most three tokens, the last one taking the remainder.
fn split_billing(billing: &str) -> [Option<&str>; 3] {
    let mut tokens = [None; 3];
    let mut rest = billing.trim();

    for (position, slot) in tokens.iter_mut().enumerate() {
        if rest.is_empty() {
            break;
        }

        if position == 2 {
            *slot = Some(rest);
            break;
        }

        match rest.split_once(char::is_whitespace) {
            Some((token, tail)) => {
                *slot = Some(token);
                rest = tail.trim_start();
            }
            None => {
                *slot = Some(rest);
                rest = "";
            }
        }
    }

    tokens
}
