//! Wiktionary `action=parse` response model.
//!
//! Successful responses nest the rendered HTML at `parse.text["*"]`; missing
//! pages come back with HTTP 200 and a top-level `error` object.

use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, LexiconResult};

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    parse: Option<ParsePayload>,
}

#[derive(Debug, Deserialize)]
struct ParsePayload {
    title: String,
    #[serde(default)]
    revid: Option<u64>,
    text: ParseText,
}

#[derive(Debug, Deserialize)]
struct ParseText {
    #[serde(rename = "*")]
    html: String,
}

/// A rendered wiki page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiPage {
    /// Normalized title as reported by the API
    pub title: String,
    pub revid: Option<u64>,
    pub html: String,
}

/// Outcome of a page request that reached the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResponse {
    Found(WikiPage),
    /// The API reported an error for this title (usually `missingtitle`)
    Missing { code: String, info: String },
}

impl PageResponse {
    /// Decode a response body
    ///
    /// An `error` field wins over everything else and means "not found".
    pub fn decode(body: &str) -> LexiconResult<Self> {
        let response: ApiResponse = serde_json::from_str(body)?;

        if let Some(error) = response.error {
            let field = |name: &str| {
                error
                    .get(name)
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            return Ok(Self::Missing {
                code: field("code"),
                info: field("info"),
            });
        }

        match response.parse {
            Some(parse) => Ok(Self::Found(WikiPage {
                title: parse.title,
                revid: parse.revid,
                html: parse.text.html,
            })),
            None => Err(LexiconError::MalformedResponse(
                "response has neither 'error' nor 'parse'".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_page_text() {
        let body = r#"{"parse":{"title":"rosa","pageid":1,"revid":42,"text":{"*":"<div class=\"mw-parser-output\"></div>"}}}"#;
        let PageResponse::Found(page) = PageResponse::decode(body).unwrap() else {
            panic!("expected a page");
        };
        assert_eq!(page.title, "rosa");
        assert_eq!(page.revid, Some(42));
        assert!(page.html.contains("mw-parser-output"));
    }

    #[test]
    fn error_field_means_missing() {
        let body = r#"{"error":{"code":"missingtitle","info":"The page you specified doesn't exist.","*":"..."},"servedby":"mw"}"#;
        assert_eq!(
            PageResponse::decode(body).unwrap(),
            PageResponse::Missing {
                code: "missingtitle".to_string(),
                info: "The page you specified doesn't exist.".to_string(),
            }
        );
    }

    #[test]
    fn empty_object_is_malformed() {
        assert!(matches!(
            PageResponse::decode("{}"),
            Err(LexiconError::MalformedResponse(_))
        ));
        assert!(matches!(PageResponse::decode("<html>"), Err(LexiconError::Decode(_))));
    }
}
