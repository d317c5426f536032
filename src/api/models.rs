use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Which AI widget a visitor unlocked from.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Palm,
    Guidance,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Palm => "palm",
            Feature::Guidance => "guidance",
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PalmStyle {
    #[default]
    Mystic,
    Modern,
    Vedic,
}

impl PalmStyle {
    pub const ALL: [PalmStyle; 3] = [PalmStyle::Mystic, PalmStyle::Modern, PalmStyle::Vedic];

    /// Value sent in the `style` multipart field.
    pub fn as_str(&self) -> &'static str {
        match self {
            PalmStyle::Mystic => "mystic",
            PalmStyle::Modern => "modern",
            PalmStyle::Vedic => "vedic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PalmStyle::Mystic => "🔮 Mystic",
            PalmStyle::Modern => "✨ Modern",
            PalmStyle::Vedic => "🌙 Vedic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PalmStyle::Mystic => "Ancient spiritual wisdom",
            PalmStyle::Modern => "Contemporary insight",
            PalmStyle::Vedic => "Traditional Indian palmistry",
        }
    }
}

/// A visitor's contact record, created once the gate accepts their details.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Lead {
    pub name: String,
    pub phone: String, // digits only
    pub feature: Feature,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GuidanceRequest {
    pub question: String,
}

// Replies are read leniently: anything missing, null or of the wrong type
// counts as absent or false. Only `success: true` is a success.

fn loose_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    loose_text(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SaveLeadResponse {
    #[serde(deserialize_with = "loose_flag")]
    pub success: bool,
    #[serde(deserialize_with = "loose_text")]
    pub error: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GuidanceResponse {
    #[serde(deserialize_with = "loose_flag")]
    pub success: bool,
    #[serde(deserialize_with = "loose_text")]
    pub response: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub error: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PalmReadingResponse {
    #[serde(deserialize_with = "loose_flag")]
    pub success: bool,
    #[serde(deserialize_with = "loose_text")]
    pub reading: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub error: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct HealthResponse {
    #[serde(deserialize_with = "loose_string")]
    pub status: String,
    #[serde(deserialize_with = "loose_flag")]
    pub agent_available: bool,
}

impl HealthResponse {
    pub fn is_ready(&self) -> bool {
        self.status == "ok" && self.agent_available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lead_serializes_with_lowercase_feature() {
        let lead = Lead {
            name: "Priya".to_string(),
            phone: "9876543210".to_string(),
            feature: Feature::Palm,
        };
        assert_eq!(
            serde_json::to_value(&lead).unwrap(),
            json!({"name": "Priya", "phone": "9876543210", "feature": "palm"})
        );
    }

    #[test]
    fn guidance_reply_with_missing_fields_reads_as_failure() {
        let reply: GuidanceResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.response, None);
        assert_eq!(reply.error, None);
    }

    #[test]
    fn palm_reply_ignores_unknown_fields() {
        let reply: PalmReadingResponse = serde_json::from_value(json!({
            "success": true,
            "reading": "Your heart line is deep.",
            "model": "whatever"
        }))
        .unwrap();
        assert!(reply.success);
        assert_eq!(reply.reading.as_deref(), Some("Your heart line is deep."));
    }

    #[test]
    fn health_ready_needs_ok_status_and_agent() {
        let ready: HealthResponse =
            serde_json::from_value(json!({"status": "ok", "agent_available": true})).unwrap();
        assert!(ready.is_ready());

        let degraded: HealthResponse =
            serde_json::from_value(json!({"status": "ok", "agent_available": false})).unwrap();
        assert!(!degraded.is_ready());

        let empty: HealthResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!empty.is_ready());
    }

    #[test]
    fn null_or_odd_fields_read_as_a_declined_reply() {
        let reply: GuidanceResponse =
            serde_json::from_value(json!({"success": null, "error": "quota"})).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.error.as_deref(), Some("quota"));

        let reply: GuidanceResponse = serde_json::from_value(json!({
            "success": false,
            "error": {"message": "Question too vague"}
        }))
        .unwrap();
        assert!(!reply.success);
        assert_eq!(reply.error, None);

        let reply: PalmReadingResponse =
            serde_json::from_value(json!({"success": false, "error": 42, "reading": null})).unwrap();
        assert_eq!(reply, PalmReadingResponse::default());
    }

    #[test]
    fn only_a_literal_true_counts_as_success() {
        let reply: GuidanceResponse =
            serde_json::from_value(json!({"success": "yes", "response": "Saturn returns."})).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.response.as_deref(), Some("Saturn returns."));

        let saved: SaveLeadResponse = serde_json::from_value(json!({"success": 1})).unwrap();
        assert!(!saved.success);
    }

    #[test]
    fn health_with_null_agent_reads_as_busy_not_offline() {
        let reply: HealthResponse =
            serde_json::from_value(json!({"status": "ok", "agent_available": null})).unwrap();
        assert_eq!(reply.status, "ok");
        assert!(!reply.is_ready());

        let reply: HealthResponse = serde_json::from_value(json!({"status": 200})).unwrap();
        assert_eq!(reply.status, "");
    }

    #[test]
    fn palm_style_defaults_to_mystic() {
        assert_eq!(PalmStyle::default(), PalmStyle::Mystic);
        assert_eq!(PalmStyle::Vedic.as_str(), "vedic");
        assert_eq!(serde_json::to_value(PalmStyle::Modern).unwrap(), json!("modern"));
    }
}
