//! Currency formatting is delegated to an implementation of [CurrencyFormatter].
//!
//! The table engine only ever hands over the raw amount together with the
//! currency code from the [crate::ViewContext].

use numfmt::{Formatter, Precision};

/// Renders an amount of money as display text.
pub trait CurrencyFormatter {
    /// Format `amount` in the currency identified by the ISO 4217 `currency_code`.
    fn format(&self, currency_code: &str, amount: f64) -> String;
}

impl<F> CurrencyFormatter for F
where
    F: Fn(&str, f64) -> String,
{
    fn format(&self, currency_code: &str, amount: f64) -> String {
        self(currency_code, amount)
    }
}

/// The default formatter, e.g. `$1,234.50` for USD and `€12.00` for EUR.
///
/// Currencies without a known symbol are prefixed with their code, e.g. `CHF 3.20`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumfmtCurrencyFormatter;

impl CurrencyFormatter for NumfmtCurrencyFormatter {
    fn format(&self, currency_code: &str, amount: f64) -> String {
        let symbol = currency_symbol(currency_code);

        if amount == 0.0 {
            // Zero is hardcoded as "0", so we must specify the formatted string for zero
            return format!("{symbol}0.00");
        }

        let prefix = if amount < 0.0 {
            format!("-{symbol}")
        } else {
            symbol
        };

        let formatter = match Formatter::currency(&prefix) {
            Ok(formatter) => formatter.precision(Precision::Decimals(2)),
            Err(error) => {
                tracing::debug!("Could not create a formatter for \"{prefix}\": {error}");
                return format!("{prefix}{:.2}", amount.abs());
            }
        };

        pad_decimals(formatter.fmt_string(amount.abs()))
    }
}

fn currency_symbol(currency_code: &str) -> String {
    match currency_code.to_uppercase().as_str() {
        "USD" | "NZD" | "AUD" | "CAD" => "$".to_owned(),
        "EUR" => "€".to_owned(),
        "GBP" => "£".to_owned(),
        "JPY" => "¥".to_owned(),
        "INR" => "₹".to_owned(),
        code => format!("{code} "),
    }
}

/// numfmt omits trailing zeros, e.g. "12.30" is rendered as "12.3", so they are added back.
fn pad_decimals(formatted: String) -> String {
    match formatted.rfind('.') {
        None => format!("{formatted}.00"),
        Some(index) => {
            let decimals = formatted.len() - index - 1;
            format!("{formatted}{}", "0".repeat(2usize.saturating_sub(decimals)))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::currency::{CurrencyFormatter, NumfmtCurrencyFormatter, pad_decimals};

    #[test]
    fn formats_dollars_with_two_decimals() {
        let formatter = NumfmtCurrencyFormatter;

        assert_eq!(formatter.format("USD", 12.5), "$12.50");
        assert_eq!(formatter.format("usd", 1234.56), "$1,234.56");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(NumfmtCurrencyFormatter.format("EUR", 0.0), "€0.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(NumfmtCurrencyFormatter.format("GBP", -3.25), "-£3.25");
    }

    #[test]
    fn unknown_currency_uses_code_prefix() {
        assert_eq!(NumfmtCurrencyFormatter.format("CHF", 3.2), "CHF 3.20");
    }

    #[test]
    fn closures_are_formatters() {
        let formatter = |code: &str, amount: f64| format!("{amount} {code}");

        assert_eq!(formatter.format("NZD", 4.0), "4 NZD");
    }

    #[test]
    fn pad_decimals_adds_missing_zeros() {
        assert_eq!(pad_decimals("$12".to_owned()), "$12.00");
        assert_eq!(pad_decimals("$12.3".to_owned()), "$12.30");
        assert_eq!(pad_decimals("$12.34".to_owned()), "$12.34");
    }
}
