use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub email_content: String,
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Request payload for the Gemini generateContent endpoint. The service only
// ever sends a single user turn with a single text part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

impl GeminiRequest {
    pub fn from_prompt(prompt: String) -> Self {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_request_wraps_prompt_in_single_part() {
        let request = GeminiRequest::from_prompt("Write a reply".to_string());

        let payload = serde_json::to_value(&request).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({"contents": [{"parts": [{"text": "Write a reply"}]}]})
        );
    }

    #[test]
    fn email_request_uses_camel_case_field_names() {
        let request: EmailRequest =
            serde_json::from_str(r#"{"emailContent":"Hi there","tone":"formal"}"#).unwrap();

        assert_eq!(request.email_content, "Hi there");
        assert_eq!(request.tone.as_deref(), Some("formal"));
    }

    #[test]
    fn tone_may_be_omitted() {
        let request: EmailRequest = serde_json::from_str(r#"{"emailContent":"Hi"}"#).unwrap();

        assert_eq!(request.email_content, "Hi");
        assert!(request.tone.is_none());
    }
}
