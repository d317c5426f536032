use thiserror::Error;

use crate::api::models::{Feature, Lead};
use crate::session::SessionAction;

pub const MIN_PHONE_DIGITS: usize = 10;
pub const PHONE_INPUT_MAX_LEN: u32 = 15;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("Please enter your name.")]
    EmptyName,
    #[error("Please enter a valid 10-digit mobile number.")]
    InvalidPhone,
}

/// Keep only the ASCII digits of a phone number as typed.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check the gate inputs in order (name first, then phone) and build the lead.
pub fn validate_lead(name: &str, phone: &str, feature: Feature) -> Result<Lead, LeadError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LeadError::EmptyName);
    }

    let phone = phone_digits(phone);
    if phone.len() < MIN_PHONE_DIGITS {
        return Err(LeadError::InvalidPhone);
    }

    Ok(Lead {
        name: name.to_string(),
        phone,
        feature,
    })
}

/// What a press of "Continue" on the gate leads to.
#[derive(Clone, Debug, PartialEq)]
pub enum GateOutcome {
    /// Unlock right away, then save the lead in the background.
    Unlock(Lead),
    /// Stay locked, send nothing, show the message inline.
    Rejected(String),
}

impl GateOutcome {
    pub fn session_action(&self) -> Option<SessionAction> {
        match self {
            GateOutcome::Unlock(_) => Some(SessionAction::Unlock),
            GateOutcome::Rejected(_) => None,
        }
    }

    /// The record to hand to the backend, if any.
    pub fn lead_to_save(&self) -> Option<&Lead> {
        match self {
            GateOutcome::Unlock(lead) => Some(lead),
            GateOutcome::Rejected(_) => None,
        }
    }
}

pub fn submit_gate(name: &str, phone: &str, feature: Feature) -> GateOutcome {
    match validate_lead(name, phone, feature) {
        Ok(lead) => GateOutcome::Unlock(lead),
        Err(e) => GateOutcome::Rejected(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashed_ten_digit_number_passes() {
        let lead = validate_lead("Priya", "98765-43210", Feature::Guidance).unwrap();
        assert_eq!(lead.phone, "9876543210");
        assert_eq!(lead.feature, Feature::Guidance);
    }

    #[test]
    fn short_number_is_rejected() {
        assert_eq!(
            validate_lead("Priya", "98765", Feature::Palm),
            Err(LeadError::InvalidPhone)
        );
    }

    #[test]
    fn formatting_characters_do_not_count_as_digits() {
        assert_eq!(
            validate_lead("Priya", "+91 (98) 765-43", Feature::Palm),
            Err(LeadError::InvalidPhone)
        );
        assert!(validate_lead("Priya", "+91 98765 43210", Feature::Palm).is_ok());
    }

    #[test]
    fn name_is_checked_before_phone() {
        assert_eq!(
            validate_lead("   ", "123", Feature::Palm),
            Err(LeadError::EmptyName)
        );
    }

    #[test]
    fn name_is_trimmed() {
        let lead = validate_lead("  Rajesh Gupta ", "9876543210", Feature::Palm).unwrap();
        assert_eq!(lead.name, "Rajesh Gupta");
    }

    #[test]
    fn errors_read_as_inline_messages() {
        assert_eq!(LeadError::EmptyName.to_string(), "Please enter your name.");
        assert_eq!(
            LeadError::InvalidPhone.to_string(),
            "Please enter a valid 10-digit mobile number."
        );
    }

    #[test]
    fn rejected_gate_stays_locked_and_sends_nothing() {
        let outcome = submit_gate("Priya", "98765", Feature::Palm);
        assert_eq!(
            outcome,
            GateOutcome::Rejected("Please enter a valid 10-digit mobile number.".to_string())
        );
        assert_eq!(outcome.session_action(), None);
        assert_eq!(outcome.lead_to_save(), None);

        let outcome = submit_gate("", "9876543210", Feature::Guidance);
        assert_eq!(outcome.session_action(), None);
        assert_eq!(outcome.lead_to_save(), None);
    }

    #[test]
    fn accepted_gate_unlocks_and_saves_the_digits() {
        let outcome = submit_gate(" Anita ", "+91 98765 43210", Feature::Guidance);
        assert_eq!(outcome.session_action(), Some(SessionAction::Unlock));
        assert_eq!(
            outcome.lead_to_save(),
            Some(&Lead {
                name: "Anita".to_string(),
                phone: "919876543210".to_string(),
                feature: Feature::Guidance,
            })
        );
    }
}
