use crate::utils::error::{GestureError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 座標必須是有限數值，NaN/∞ 不得進入正規化運算
pub fn validate_finite_point(x: f64, y: f64) -> Result<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(GestureError::invalid_input(format!(
            "point ({}, {}) has a non-finite coordinate",
            x, y
        )));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(GestureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_positive_float(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GestureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number greater than 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative_float(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GestureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number not below 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // 用 !(a <= b) 形式讓 NaN 也被擋下
    if !(value >= min && value <= max) {
        return Err(GestureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GestureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_labels<'a, I>(field_name: &str, labels: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label) {
            return Err(GestureError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: label.to_string(),
                reason: "Duplicate gesture label".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_finite_point() {
        assert!(validate_finite_point(1.0, -2.5).is_ok());
        assert!(validate_finite_point(f64::NAN, 0.0).is_err());
        assert!(validate_finite_point(0.0, f64::INFINITY).is_err());
        assert!(validate_finite_point(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("resample_count", 64, 2).is_ok());
        assert!(validate_positive_number("resample_count", 1, 2).is_err());
    }

    #[test]
    fn test_validate_floats() {
        assert!(validate_positive_float("reference_square_side", 100.0).is_ok());
        assert!(validate_positive_float("reference_square_side", 0.0).is_err());
        assert!(validate_positive_float("reference_square_side", f64::NAN).is_err());
        assert!(validate_non_negative_float("match_threshold", 0.0).is_ok());
        assert!(validate_non_negative_float("match_threshold", -0.1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("narrow_axis_ratio", 0.3, 0.0, 1.0).is_ok());
        assert!(validate_range("narrow_axis_ratio", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range("narrow_axis_ratio", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_validate_unique_labels() {
        assert!(validate_unique_labels("gestures", ["lr", "rl"]).is_ok());
        assert!(validate_unique_labels("gestures", ["lr", "rl", "lr"]).is_err());
    }
}
