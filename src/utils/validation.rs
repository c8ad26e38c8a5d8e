use crate::utils::error::{TallyError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TallyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TallyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(TallyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TallyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
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
    if value < min || value > max {
        return Err(TallyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// `low` must lie strictly above `high` on screen, i.e. have a smaller y.
pub fn validate_ordered(field_name: &str, low: u32, high: u32) -> Result<()> {
    if low >= high {
        return Err(TallyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", low, high),
            reason: "Start must be smaller than end".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.svg_path", "./histogram.svg").is_ok());
        assert!(validate_path("output.svg_path", "").is_err());
        assert!(validate_path("output.svg_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("chart.bar_width", 100, 1).is_ok());
        assert!(validate_positive_number("chart.bar_width", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range_and_order() {
        assert!(validate_range("chart.band_bottom", 450, 0, 600).is_ok());
        assert!(validate_range("chart.band_bottom", 700, 0, 600).is_err());
        assert!(validate_ordered("chart.band", 100, 450).is_ok());
        assert!(validate_ordered("chart.band", 450, 450).is_err());
        assert!(validate_non_empty_string("chart.title", "  ").is_err());
    }
}
