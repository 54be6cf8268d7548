use crate::{
    config::Config,
    dto::{EmailRequest, GeminiRequest},
    prompt::build_prompt,
};

const TEXT_KEY: &str = "\"text\"";
const EXTRACTION_FAILED: &str = "Failed to extract response";

pub struct EmailGeneratorService {
    api_url: String,
    api_key: String,
    strict_extraction: bool,
    client: reqwest::Client,
}

#[derive(Debug, thiserror::Error)]
pub enum EmailGeneratorError {
    #[error("Request to Gemini API failed: {0}")]
    Request(reqwest::Error),

    #[error("Gemini API returned status {0}: {1}")]
    UpstreamStatus(reqwest::StatusCode, String),

    #[error("No generated text found in Gemini response")]
    Extraction,
}

// Transport errors echo the request URL, which embeds the API key. The URL
// is stripped before the error can reach a log line or a response body.
impl From<reqwest::Error> for EmailGeneratorError {
    fn from(e: reqwest::Error) -> Self {
        EmailGeneratorError::Request(e.without_url())
    }
}

impl EmailGeneratorService {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        EmailGeneratorService {
            api_url: config.gemini_api_url.clone(),
            api_key: config.gemini_api_key.clone(),
            strict_extraction: config.strict_extraction,
            client,
        }
    }

    pub async fn generate_email_reply(
        &self,
        request: EmailRequest,
    ) -> Result<String, EmailGeneratorError> {
        let prompt = build_prompt(&request.email_content, request.tone.as_deref());
        let body = GeminiRequest::from_prompt(prompt);

        let response = self.call_gemini_api(&body).await?;

        match extract_reply_text(&response) {
            Some(text) => Ok(text),
            None if self.strict_extraction => Err(EmailGeneratorError::Extraction),
            None => Ok(EXTRACTION_FAILED.to_string()),
        }
    }

    async fn call_gemini_api(&self, body: &GeminiRequest) -> Result<String, EmailGeneratorError> {
        let url = format!("{}?key={}", self.api_url, self.api_key);

        tracing::info!("Requesting generated reply from {}", self.api_url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API returned status {}: {}", status, error_body);
            return Err(EmailGeneratorError::UpstreamStatus(status, error_body));
        }

        Ok(response.text().await?)
    }
}

// The upstream body is never deserialized: the first literal "text" key is
// located, the next two quote characters delimit the value, and "\n" escape
// sequences become newlines. An escaped quote inside the value cuts it short;
// any scan miss yields None.
fn extract_reply_text(body: &str) -> Option<String> {
    let key_idx = body.find(TEXT_KEY)?;

    // Skip the key and the colon that follows it
    let after_key = key_idx + TEXT_KEY.len() + 1;
    let tail = body.get(after_key..)?;

    let start_quote = after_key + tail.find('"')?;
    let end_quote = start_quote + 1 + body[start_quote + 1..].find('"')?;

    Some(body[start_quote + 1..end_quote].replace("\\n", "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_and_unescapes_newlines() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hello\nWorld"}]},"finishReason":"STOP"}]}"#;

        assert_eq!(extract_reply_text(body).as_deref(), Some("Hello\nWorld"));
    }

    #[test]
    fn missing_text_key_is_a_scan_miss() {
        let body = r#"{"error":{"code":503,"message":"overloaded"}}"#;

        assert_eq!(extract_reply_text(body), None);
    }

    #[test]
    fn truncated_value_is_a_scan_miss() {
        // Body cut off before the closing quote of the value
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hel"#;

        assert_eq!(extract_reply_text(body), None);
    }

    #[test]
    fn body_ending_right_after_the_key_is_a_scan_miss() {
        assert_eq!(extract_reply_text(r#"{"text""#), None);
        assert_eq!(extract_reply_text(r#""text""#), None);
    }

    #[test]
    fn first_text_occurrence_wins() {
        let body = r#"{"parts":[{"text":"first"},{"text":"second"}]}"#;

        assert_eq!(extract_reply_text(body).as_deref(), Some("first"));
    }

    #[test]
    fn empty_value_extracts_as_empty_string() {
        assert_eq!(extract_reply_text(r#"{"text":""}"#).as_deref(), Some(""));
    }

    #[test]
    fn escaped_quote_cuts_the_value_short() {
        // The scanner does not understand JSON escapes other than \n, so the
        // value ends at the first quote byte
        let body = r#"{"text":"say \"hi\" now"}"#;

        assert_eq!(extract_reply_text(body).as_deref(), Some("say \\"));
    }

    #[test]
    fn whitespace_around_the_colon_is_tolerated() {
        let body = r#"{ "text" : "Hello" }"#;

        assert_eq!(extract_reply_text(body).as_deref(), Some("Hello"));
    }

    #[test]
    fn only_newline_escapes_are_decoded() {
        let body = r#"{"text":"a\nb\tc"}"#;

        assert_eq!(extract_reply_text(body).as_deref(), Some("a\nb\\tc"));
    }
}
