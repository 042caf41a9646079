//! Input-shape checks shared by the storage services.
//!
//! Every helper returns `AppError::BadRequest` naming the offending field so
//! the rejection happens before anything is written.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

pub fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

pub fn optional_text(field: &str, value: Option<&str>) -> AppResult<()> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}

pub fn email(field: &str, value: &str) -> AppResult<()> {
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid {
        return Err(AppError::BadRequest(format!("{field} is not a valid email")));
    }
    Ok(())
}

pub fn optional_email(field: &str, value: Option<&str>) -> AppResult<()> {
    match value {
        Some(v) if !v.trim().is_empty() => email(field, v),
        _ => Ok(()),
    }
}

/// Codes must be non-blank and appear at most once.
pub fn code_set(field: &str, values: &[String], allow_empty: bool) -> AppResult<()> {
    if values.is_empty() && !allow_empty {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    let mut seen = HashSet::new();
    for value in values {
        let code = value.trim();
        if code.is_empty() {
            return Err(AppError::BadRequest(format!(
                "{field} must not contain blank entries"
            )));
        }
        if !seen.insert(code) {
            return Err(AppError::BadRequest(format!(
                "{field} contains duplicate entry {code}"
            )));
        }
    }
    Ok(())
}

pub fn non_negative(field: &str, value: i32) -> AppResult<()> {
    if value < 0 {
        return Err(AppError::BadRequest(format!("{field} must not be negative")));
    }
    Ok(())
}

pub fn in_range(field: &str, value: i32, range: RangeInclusive<i32>) -> AppResult<()> {
    if !range.contains(&value) {
        return Err(AppError::BadRequest(format!(
            "{field} must be between {} and {}",
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

/// Largest value a NUMERIC(10,2) money column holds.
// 9_999_999_999 * 10^-2, built from its 96-bit parts since `Decimal::new` is not const.
pub const MAX_MONEY: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Non-negative amount that fits a money column once rounded to cents.
pub fn money(field: &str, value: Decimal) -> AppResult<()> {
    if value < Decimal::ZERO {
        return Err(AppError::BadRequest(format!("{field} must not be negative")));
    }
    if value.round_dp(2) > MAX_MONEY {
        return Err(AppError::BadRequest(format!(
            "{field} must not exceed {MAX_MONEY}"
        )));
    }
    Ok(())
}

pub fn positive_money(field: &str, value: Decimal) -> AppResult<()> {
    if value <= Decimal::ZERO {
        return Err(AppError::BadRequest(format!("{field} must be greater than 0")));
    }
    money(field, value)
}

pub fn amount_in_range(field: &str, value: Decimal, min: Decimal, max: Decimal) -> AppResult<()> {
    if value < min || value > max {
        return Err(AppError::BadRequest(format!(
            "{field} must be between {min} and {max}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("name", "  ").is_err());
        assert!(require_text("name", "Tech Solutions").is_ok());
        assert!(optional_text("notes", None).is_ok());
        assert!(optional_text("notes", Some("")).is_err());
    }

    #[test]
    fn email_needs_local_part_and_domain() {
        assert!(email("email", "admin@emunah.com").is_ok());
        assert!(email("email", "admin").is_err());
        assert!(email("email", "@emunah.com").is_err());
        assert!(email("email", "a@b@c").is_err());
        assert!(optional_email("email", Some("")).is_ok());
    }

    #[test]
    fn size_codes_must_be_unique_and_present() {
        assert!(code_set("sizes", &codes(&["P", "M", "G"]), false).is_ok());
        assert!(code_set("sizes", &[], false).is_err());
        assert!(code_set("colors", &[], true).is_ok());
        assert!(code_set("sizes", &codes(&["P", "P"]), false).is_err());
        assert!(code_set("sizes", &codes(&["P", " "]), false).is_err());
    }

    #[test]
    fn numeric_bounds() {
        assert!(in_range("progress", 100, 0..=100).is_ok());
        assert!(in_range("progress", 101, 0..=100).is_err());
        assert!(non_negative("stock", -1).is_err());
        assert!(money("basePrice", Decimal::ZERO).is_ok());
        assert!(money("basePrice", Decimal::new(-1, 2)).is_err());
        assert!(positive_money("amount", Decimal::ZERO).is_err());
        assert!(
            amount_in_range("rating", Decimal::new(51, 1), Decimal::ZERO, Decimal::new(5, 0))
                .is_err()
        );
    }

    #[test]
    fn money_fits_numeric_10_2() {
        assert_eq!(MAX_MONEY.to_string(), "99999999.99");
        assert!(money("totalValue", MAX_MONEY).is_ok());
        assert!(money("totalValue", Decimal::new(99_999_999_994, 3)).is_ok());
        assert!(money("totalValue", Decimal::new(99_999_999_996, 3)).is_err());
        assert!(money("basePrice", Decimal::new(100_000_000_000, 0)).is_err());
        assert!(money("totalValue", Decimal::MAX).is_err());
        assert!(positive_money("amount", Decimal::MAX).is_err());
        assert!(positive_money("amount", Decimal::new(1, 2)).is_ok());
    }
}
