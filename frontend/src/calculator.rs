//! Discount quote math and pt-BR currency formatting.

use thiserror::Error;

use crate::config;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalculatorError {
    #[error("Por favor, insira um orçamento válido (mínimo R$ 1.000)")]
    InvalidBudget,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscountQuote {
    pub original: f64,
    pub discount: f64,
    pub final_amount: f64,
}

impl DiscountQuote {
    pub fn for_budget(budget: f64) -> Self {
        let discount = budget * (config::DISCOUNT_PERCENT / 100.0);
        Self {
            original: budget,
            discount,
            final_amount: budget - discount,
        }
    }

    /// Display strings for the original, discount and final values.
    pub fn formatted(&self) -> (String, String, String) {
        (
            format_brl(self.original),
            format_brl(self.discount),
            format_brl(self.final_amount),
        )
    }
}

/// Reads a number the way `parseFloat` does: leading whitespace is skipped
/// and the longest decimal prefix wins. `None` stands in for NaN.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        return text[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        if mantissa_digits > 0 {
            end = fraction_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// Parses the calculator input and computes the quote.
///
/// Zero, NaN, non-finite values and anything under the minimum budget are
/// rejected.
pub fn quote(input: &str) -> Result<DiscountQuote, CalculatorError> {
    match parse_float_prefix(input) {
        Some(budget) if budget != 0.0 && budget.is_finite() && budget >= config::MIN_BUDGET => {
            Ok(DiscountQuote::for_budget(budget))
        }
        _ => Err(CalculatorError::InvalidBudget),
    }
}

/// Formats a value as Brazilian Real, e.g. `R$ 1.234,56` with a no-break
/// space after the symbol.
pub fn format_brl(value: f64) -> String {
    let digits = round_to_cents(value.abs());
    let (whole, cents) = digits.split_at(digits.len() - 2);

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let is_zero = digits.bytes().all(|d| d == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}R$\u{a0}{grouped},{cents}")
}

/// Digits of `value` rounded half away from zero to two decimals, with the
/// decimal point dropped (`150.015` becomes `"15002"`).
///
/// Rounding works on the shortest decimal that round-trips to `value`, not
/// on its binary expansion, and never goes through a fixed-width integer.
fn round_to_cents(value: f64) -> String {
    // `Display` for f64 is the shortest round-trip form and never uses an
    // exponent.
    let shortest = value.to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((&shortest, ""));
    let fraction = fraction.as_bytes();

    let mut digits: Vec<u8> = whole.bytes().collect();
    digits.extend((0..2).map(|i| fraction.get(i).copied().unwrap_or(b'0')));

    if fraction.get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    digits.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_thousand_budget_scenario() {
        let quote = quote("2000").expect("valid budget");
        let (original, discount, final_amount) = quote.formatted();
        assert_eq!(original, "R$\u{a0}2.000,00");
        assert_eq!(discount, "R$\u{a0}300,00");
        assert_eq!(final_amount, "R$\u{a0}1.700,00");
    }

    #[test]
    fn budgets_under_minimum_are_rejected() {
        for input in ["999.99", "0", "", "abc", "-5000", "1e400", "  "] {
            assert_eq!(quote(input), Err(CalculatorError::InvalidBudget), "input {input:?}");
        }
    }

    #[test]
    fn minimum_budget_is_accepted() {
        let q = quote("1000").unwrap();
        assert_eq!(q.discount, 150.0);
        assert_eq!(q.final_amount, 850.0);
    }

    #[test]
    fn exponent_budgets_are_accepted() {
        assert_eq!(quote("1e3").unwrap().original, 1000.0);
        assert_eq!(quote("2.5E3").unwrap().discount, 375.0);
    }

    #[test]
    fn parse_float_takes_longest_prefix() {
        assert_eq!(parse_float_prefix("  1500abc"), Some(1500.0));
        assert_eq!(parse_float_prefix("2.5e3x"), Some(2500.0));
        assert_eq!(parse_float_prefix("3e"), Some(3.0));
        assert_eq!(parse_float_prefix(".75"), Some(0.75));
        assert_eq!(parse_float_prefix("12."), Some(12.0));
        assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("R$ 2000"), None);
    }

    #[test]
    fn brl_grouping_and_rounding() {
        assert_eq!(format_brl(0.0), "R$\u{a0}0,00");
        assert_eq!(format_brl(999.5), "R$\u{a0}999,50");
        assert_eq!(format_brl(1_234_567.891), "R$\u{a0}1.234.567,89");
        assert_eq!(format_brl(187.5), "R$\u{a0}187,50");
    }

    #[test]
    fn huge_budgets_keep_every_digit() {
        let (original, _, _) = quote("1e20").unwrap().formatted();
        assert_eq!(original, "R$\u{a0}100.000.000.000.000.000.000,00");
        assert_eq!(format_brl(2e17), "R$\u{a0}200.000.000.000.000.000,00");
    }

    #[test]
    fn half_cents_round_away_from_zero_on_the_shortest_decimal() {
        let q = quote("1000.1").unwrap();
        assert_eq!(q.discount.to_string(), "150.015");
        assert_eq!(format_brl(q.discount), "R$\u{a0}150,02");
        assert_eq!(format_brl(1.005), "R$\u{a0}1,01");
        assert_eq!(format_brl(999.995), "R$\u{a0}1.000,00");
        assert_eq!(format_brl(0.004), "R$\u{a0}0,00");
        assert_eq!(format_brl(-0.004), "R$\u{a0}0,00");
        assert_eq!(format_brl(-12.5), "-R$\u{a0}12,50");
    }

    #[test]
    fn error_message_matches_alert_text() {
        assert_eq!(
            CalculatorError::InvalidBudget.to_string(),
            "Por favor, insira um orçamento válido (mínimo R$ 1.000)"
        );
    }
}
