//! What the output region can show.

use html_escape::encode_text;
use serde::Serialize;

use crate::utils::{IDLE_MESSAGE, REQUEST_ERROR_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rendering {
    /// A processed entry; `html` is trusted pipeline output
    Entry { label: String, html: String },
    NotFound { query: String, target_label: String },
    /// Failed request; the response body or error message is shown escaped
    RequestError { body: String },
    Idle,
}

impl Rendering {
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Entry { label, html } => format!(
                "<div id=\"output\"><h1>{}</h1>{html}</div>",
                encode_text(label)
            ),
            Self::NotFound { query, target_label } => format!(
                "<h2>No {} results matching {} were found</h2>",
                encode_text(target_label),
                encode_text(query)
            ),
            Self::RequestError { body } => format!(
                "<h2>{REQUEST_ERROR_MESSAGE}</h2><p>{}</p>",
                encode_text(body)
            ),
            Self::Idle => IDLE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_query() {
        let rendering = Rendering::NotFound {
            query: "qwzx".to_string(),
            target_label: "Latin".to_string(),
        };
        assert_eq!(
            rendering.to_html(),
            "<h2>No Latin results matching qwzx were found</h2>"
        );
    }

    #[test]
    fn error_body_is_escaped() {
        let html = Rendering::RequestError {
            body: "<b>503</b>".to_string(),
        }
        .to_html();
        assert!(html.starts_with("<h2>There was an error with your request</h2>"));
        assert!(html.contains("&lt;b&gt;503&lt;/b&gt;"));
    }

    #[test]
    fn entry_escapes_label_only() {
        let html = Rendering::Entry {
            label: "a<b".to_string(),
            html: "<div class=\"entry\"></div>".to_string(),
        }
        .to_html();
        assert_eq!(
            html,
            "<div id=\"output\"><h1>a&lt;b</h1><div class=\"entry\"></div></div>"
        );
    }
}
