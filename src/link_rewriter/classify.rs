//! Pure href classification.
//!
//! The decision table is evaluated top to bottom and the first matching rule
//! wins:
//!
//! | href                              | class            |
//! |-----------------------------------|------------------|
//! | `http://…`, `https://…`           | `External`       |
//! | `/wiki/<word>#<label>`            | `CrossReference` |
//! | `/wiki/Appendix:<name>`           | `Appendix`       |
//! | `/…`                              | `SiteRelative`   |
//! | `#…`, `javascript:void(0)`        | `Ignored`        |
//! | anything else, including empty    | `Downgrade`      |
//!
//! The reduced rule set used for appendix pages disables the cross-reference,
//! appendix and downgrade rows.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::config::PipelineConfig;
use crate::utils::{NOOP_HREF, decode_page_name, is_absolute_http, resolve_against_origin};

static APPENDIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/wiki/Appendix:([^#?]+)$").expect("APPENDIX_RE: hardcoded regex is valid")
});

/// Classification of a single href
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkClass {
    /// Absolute http(s) link, opened in a new surface
    External,
    /// Link to another entry's section in the same language
    CrossReference { word: String },
    /// Link to an appendix page, shown in a secondary surface
    Appendix { name: String },
    /// Other site-relative link, made absolute and treated as external
    SiteRelative { absolute: String },
    /// Fragment or placeholder link, left untouched
    Ignored,
    /// Unsupported link, replaced by its inner content
    Downgrade,
}

/// Which rows of the decision table are active
#[derive(Debug, Clone)]
pub struct LinkRules {
    origin: String,
    /// `^/wiki/<word>#<label>$`, present when cross-references are enabled
    cross_reference: Option<Regex>,
    appendix: bool,
    downgrade: bool,
}

impl LinkRules {
    /// Full rule set for entry pages
    #[must_use]
    pub fn for_entries(pipeline: &PipelineConfig, origin: impl Into<String>) -> Self {
        let pattern = format!(
            r"^/wiki/([^/#?:]+)#{}$",
            regex::escape(&pipeline.target_label)
        );
        // The label is escaped, so the pattern always compiles
        let cross_reference = match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                log::warn!("Cross-reference pattern for '{}' rejected: {e}", pipeline.target_label);
                None
            }
        };
        Self {
            origin: origin.into(),
            cross_reference,
            appendix: pipeline.enable_cross_reference_appendix,
            downgrade: true,
        }
    }

    /// Reduced rule set for appendix pages: external, anchor and absolute rewrite only
    #[must_use]
    pub fn for_appendix(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            cross_reference: None,
            appendix: false,
            downgrade: false,
        }
    }

    fn fallback(&self) -> LinkClass {
        if self.downgrade {
            LinkClass::Downgrade
        } else {
            LinkClass::Ignored
        }
    }
}

/// Classify an href against the active rules
///
/// Pure: the result depends only on `href` and `rules`.
#[must_use]
pub fn classify_href(href: &str, rules: &LinkRules) -> LinkClass {
    if is_absolute_http(href) {
        return LinkClass::External;
    }

    if let Some(re) = &rules.cross_reference
        && let Some(caps) = re.captures(href)
    {
        return LinkClass::CrossReference {
            word: decode_page_name(&caps[1]),
        };
    }

    if rules.appendix
        && let Some(caps) = APPENDIX_RE.captures(href)
    {
        return LinkClass::Appendix {
            name: decode_page_name(&caps[1]),
        };
    }

    if href.starts_with('/') {
        return match resolve_against_origin(&rules.origin, href) {
            Ok(absolute) => LinkClass::SiteRelative { absolute },
            Err(e) => {
                log::debug!("Unresolvable site-relative link '{href}': {e}");
                rules.fallback()
            }
        };
    }

    if href.starts_with('#') || href == NOOP_HREF {
        return LinkClass::Ignored;
    }

    rules.fallback()
}
