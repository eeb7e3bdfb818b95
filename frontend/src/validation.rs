//! Form validation.
//!
//! Thin wrapper over the `validator` derive on [`LeadInput`] that flattens
//! the crate's nested error map into one message per field, ordered the
//! way the form renders its inputs.

use crate::types::{Field, FieldError, LeadInput};
use validator::Validate;

/// Validate a lead, returning one error per invalid field.
///
/// Empty when the lead is acceptable. Only the first failed rule per
/// field is reported, so a blank email says "required" rather than
/// also complaining about the address syntax.
pub fn validate_lead(lead: &LeadInput) -> Vec<FieldError> {
    let errors = match lead.validate() {
        Ok(()) => return Vec::new(),
        Err(errors) => errors,
    };

    let mut found = Vec::new();
    for (name, field_errors) in errors.field_errors() {
        let field = match Field::from_name(name) {
            Some(field) => field,
            None => continue,
        };
        let message = match field_errors.first().and_then(|e| e.message.as_ref()) {
            Some(message) => message.to_string(),
            None => format!("Invalid value for {}", field),
        };
        found.push(FieldError { field, message });
    }
    // field_errors() iterates a HashMap; sort for stable rendering.
    found.sort_by_key(|e| e.field);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> LeadInput {
        LeadInput {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            industry: "finance".to_string(),
        }
    }

    #[test]
    fn test_valid_lead_passes() {
        assert!(validate_lead(&valid_lead()).is_empty());
    }

    #[test]
    fn test_blank_fields_each_get_an_error() {
        let errors = validate_lead(&LeadInput::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, Field::Name);
        assert_eq!(errors[0].message, "Name is required");
        assert_eq!(errors[1].field, Field::Email);
        assert_eq!(errors[1].message, "Email is required");
        assert_eq!(errors[2].field, Field::Industry);
        assert_eq!(errors[2].message, "Select your industry");
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut lead = valid_lead();
        lead.email = "not-an-address".to_string();
        let errors = validate_lead(&lead);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Email);
        assert_eq!(errors[0].message, "Enter a valid email address");
    }

    #[test]
    fn test_errors_sorted_by_field() {
        let lead = LeadInput {
            name: "Ana".to_string(),
            email: String::new(),
            industry: String::new(),
        };
        let errors = validate_lead(&lead);
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Email, Field::Industry]);
    }
}
