//! Region record validation

use geowhere_core::Region;

/// Validation result with details
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validation error naming the offending field
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(ValidationError { field: field.into(), reason: reason.into() });
    }

    /// All errors joined into a single line
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.reason))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validate a single catalog record
pub fn validate_region(region: &Region) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if region.code.as_str().trim().is_empty() {
        result.add_error("code", "must not be empty");
    }

    if region.provider.trim().is_empty() {
        result.add_error("provider", "must not be empty");
    }

    validate_coordinate(&mut result, "latitude", region.latitude, 90.0);
    validate_coordinate(&mut result, "longitude", region.longitude, 180.0);

    result
}

fn validate_coordinate(result: &mut ValidationResult, field: &str, value: f64, bound: f64) {
    if !value.is_finite() {
        result.add_error(field, "must be finite");
    } else if value < -bound || value > bound {
        result.add_error(field, format!("{} is outside [-{}, {}]", value, bound, bound));
    }
}
