use thiserror::Error;

use crate::api::client::ApiError;
use crate::api::models::{Feature, GuidanceResponse, PalmReadingResponse};
use crate::session::SessionAction;

pub const MAX_QUESTION_CHARS: usize = 500;
pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

pub const CONNECTION_ERROR: &str =
    "Could not connect to the astrology service. Please ensure the server is running.";
pub const GUIDANCE_FALLBACK_ERROR: &str = "Unable to get guidance. Please try again.";
pub const PALM_FALLBACK_ERROR: &str = "Unable to read palm. Please try again.";

/// Where an AI widget is in its request cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success(String),
    Failure(String),
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Phase::Success(_))
    }

    /// Result text worth rendering, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Phase::Success(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Failure(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// The `{success, <text>?, error?}` shape both AI endpoints answer with.
pub trait ServiceReply {
    fn into_parts(self) -> (bool, Option<String>, Option<String>);
}

impl ServiceReply for GuidanceResponse {
    fn into_parts(self) -> (bool, Option<String>, Option<String>) {
        (self.success, self.response, self.error)
    }
}

impl ServiceReply for PalmReadingResponse {
    fn into_parts(self) -> (bool, Option<String>, Option<String>) {
        (self.success, self.reading, self.error)
    }
}

/// Map a finished request to the phase the widget lands in.
///
/// Only `Phase::Success` may count against the usage limit.
pub fn settle<R: ServiceReply>(result: Result<R, ApiError>, fallback: &str) -> Phase {
    match result {
        Ok(reply) => {
            let (success, text, error) = reply.into_parts();
            if success {
                Phase::Success(text.unwrap_or_default())
            } else {
                let message = error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| fallback.to_string());
                log::warn!("astrology service declined the request: {}", message);
                Phase::Failure(message)
            }
        }
        Err(e) => {
            log::error!("astrology service unreachable: {}", e);
            Phase::Failure(CONNECTION_ERROR.to_string())
        }
    }
}

/// The session update a settled request earns. Declined replies and
/// transport failures leave the counter alone.
pub fn usage_for(feature: Feature, phase: &Phase) -> Option<SessionAction> {
    phase.is_success().then_some(SessionAction::RecordUse(feature))
}

/// Cut typed or pasted questions down to the input cap.
///
/// Counts Unicode scalar values, so an emoji or a Devanagari letter is one
/// character here even where a browser counts two UTF-16 units.
pub fn truncate_question(text: &str) -> String {
    text.chars().take(MAX_QUESTION_CHARS).collect()
}

pub fn question_len(text: &str) -> usize {
    text.chars().count()
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Please upload a valid image file (JPG, PNG, etc.)")]
    InvalidType,
    #[error("Image must be under 5MB")]
    TooLarge,
}

/// Accept a picked or dropped file by its MIME type and size in bytes.
pub fn validate_image(mime: &str, size_bytes: f64) -> Result<(), ImageError> {
    if !mime.starts_with("image/") {
        return Err(ImageError::InvalidType);
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: f64 = 1024.0 * 1024.0;

    fn guidance(success: bool, response: Option<&str>, error: Option<&str>) -> GuidanceResponse {
        GuidanceResponse {
            success,
            response: response.map(str::to_string),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn successful_reply_shows_its_text() {
        let phase = settle(Ok(guidance(true, Some("Jupiter favours you."), None)), GUIDANCE_FALLBACK_ERROR);
        assert_eq!(phase, Phase::Success("Jupiter favours you.".to_string()));
        assert_eq!(phase.text(), Some("Jupiter favours you."));
    }

    #[test]
    fn success_without_text_still_counts_but_renders_nothing() {
        let phase = settle(Ok(guidance(true, None, None)), GUIDANCE_FALLBACK_ERROR);
        assert!(phase.is_success());
        assert_eq!(phase.text(), None);
    }

    #[test]
    fn declined_reply_uses_server_error() {
        let phase = settle(Ok(guidance(false, None, Some("Question too vague"))), GUIDANCE_FALLBACK_ERROR);
        assert_eq!(phase.error(), Some("Question too vague"));
    }

    #[test]
    fn declined_reply_without_error_uses_feature_default() {
        let phase = settle(
            Ok(PalmReadingResponse { success: false, reading: None, error: Some(String::new()) }),
            PALM_FALLBACK_ERROR,
        );
        assert_eq!(phase.error(), Some(PALM_FALLBACK_ERROR));
    }

    #[test]
    fn transport_failure_shows_connection_message() {
        let phase = settle::<GuidanceResponse>(Err(ApiError::Status(503)), GUIDANCE_FALLBACK_ERROR);
        assert_eq!(phase, Phase::Failure(CONNECTION_ERROR.to_string()));
        assert!(!phase.is_success());
    }

    #[test]
    fn only_a_successful_reply_uses_up_a_turn() {
        let declined = settle(Ok(guidance(false, None, Some("quota"))), GUIDANCE_FALLBACK_ERROR);
        assert_eq!(usage_for(Feature::Guidance, &declined), None);

        let unreachable = settle::<PalmReadingResponse>(Err(ApiError::Status(500)), PALM_FALLBACK_ERROR);
        assert_eq!(usage_for(Feature::Palm, &unreachable), None);

        let empty = settle(Ok(guidance(true, Some(""), None)), GUIDANCE_FALLBACK_ERROR);
        assert_eq!(empty, Phase::Success(String::new()));
        assert_eq!(
            usage_for(Feature::Guidance, &empty),
            Some(SessionAction::RecordUse(Feature::Guidance))
        );

        assert_eq!(usage_for(Feature::Palm, &Phase::Loading), None);
        assert_eq!(usage_for(Feature::Palm, &Phase::Failure(CONNECTION_ERROR.to_string())), None);
    }

    #[test]
    fn failed_requests_leave_the_counter_unchanged() {
        use crate::session::Session;
        use std::rc::Rc;
        use yew::functional::Reducible;

        let mut session = Rc::new(Session::default()).reduce(SessionAction::Unlock);
        let outcomes = [
            settle(Ok(guidance(false, None, None)), GUIDANCE_FALLBACK_ERROR),
            settle::<GuidanceResponse>(Err(ApiError::Status(502)), GUIDANCE_FALLBACK_ERROR),
            settle(Ok(guidance(true, Some("Venus is strong."), None)), GUIDANCE_FALLBACK_ERROR),
        ];
        for phase in &outcomes {
            if let Some(action) = usage_for(Feature::Guidance, phase) {
                session = session.reduce(action);
            }
        }
        assert_eq!(session.guidance_uses, 1);
        assert_eq!(session.palm_uses, 0);
    }

    #[test]
    fn question_is_truncated_not_rejected() {
        let long = "a".repeat(620);
        let cut = truncate_question(&long);
        assert_eq!(question_len(&cut), MAX_QUESTION_CHARS);
        assert_eq!(truncate_question("When should I marry?"), "When should I marry?");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "ॐ".repeat(501);
        assert_eq!(question_len(&truncate_question(&long)), 500);
    }

    #[test]
    fn image_checks() {
        assert_eq!(validate_image("image/png", 6.0 * MIB), Err(ImageError::TooLarge));
        assert_eq!(validate_image("text/plain", 120.0), Err(ImageError::InvalidType));
        assert_eq!(validate_image("image/jpeg", 2.0 * MIB), Ok(()));
        assert_eq!(validate_image("image/jpeg", 5.0 * MIB), Ok(()));
        assert_eq!(validate_image("", 10.0), Err(ImageError::InvalidType));
    }

    #[test]
    fn phases_report_loading() {
        assert!(Phase::Loading.is_loading());
        assert!(!Phase::Idle.is_loading());
        assert_eq!(Phase::Idle.error(), None);
    }
}
