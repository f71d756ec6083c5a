use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ValidationError;
use super::fields::FormFields;

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn validate(fields: &FormFields) -> Result<(), ValidationError> {
    for name in REQUIRED_FIELDS {
        let filled = fields.get(name).map_or(false, |v| !v.trim().is_empty());
        if !filled {
            return Err(ValidationError::MissingField(name));
        }
    }

    let email = fields.get("email").unwrap_or_default().trim();
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
