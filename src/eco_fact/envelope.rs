use serde::{Deserialize, Serialize};

use super::error::FetchError;

pub const ECO_FACT_PROMPT: &str = "Share one short, positive and surprising fact about protecting our planet, \
recycling or sustainability that a child would enjoy. Answer in one or two friendly sentences without markdown.";

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RequestContent {
    pub role: String,
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn user_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }

    pub fn eco_fact() -> Self {
        Self::user_prompt(ECO_FACT_PROMPT)
    }
}

// Every level is optional so a partial envelope still deserializes and the
// missing piece is reported by `extract_text`.
#[derive(Debug, Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize, Default)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Pulls `candidates[0].content.parts[0].text` out of a success body.
pub fn extract_text(body: &str) -> Result<String, FetchError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|_| FetchError::MalformedResponse)?;

    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(FetchError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_has_the_expected_shape() {
        let body = serde_json::to_value(GenerateContentRequest::user_prompt("hello")).unwrap();
        assert_eq!(
            body,
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn eco_fact_request_carries_the_fixed_prompt() {
        let request = GenerateContentRequest::eco_fact();
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].parts[0].text, ECO_FACT_PROMPT);
    }

    #[test]
    fn extracts_first_text_verbatim() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "  Bees love wildflowers.\n" }, { "text": "ignored" }] } },
                { "content": { "parts": [{ "text": "second candidate" }] } }
            ]
        })
        .to_string();
        assert_eq!(extract_text(&body).unwrap(), "  Bees love wildflowers.\n");
    }

    #[test]
    fn missing_levels_are_malformed() {
        let bodies = [
            json!({}),
            json!({ "candidates": null }),
            json!({ "candidates": [] }),
            json!({ "candidates": [{}] }),
            json!({ "candidates": [{ "content": {} }] }),
            json!({ "candidates": [{ "content": { "parts": [] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{}] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": "   " }] } }] }),
        ];
        for body in bodies {
            assert_eq!(
                extract_text(&body.to_string()),
                Err(FetchError::MalformedResponse),
                "body: {body}"
            );
        }
    }

    #[test]
    fn non_json_and_wrong_types_are_malformed() {
        assert_eq!(extract_text("<html>oops</html>"), Err(FetchError::MalformedResponse));
        assert_eq!(extract_text(""), Err(FetchError::MalformedResponse));
        let wrong = json!({ "candidates": [{ "content": { "parts": [{ "text": 42 }] } }] });
        assert_eq!(extract_text(&wrong.to_string()), Err(FetchError::MalformedResponse));
    }
}
