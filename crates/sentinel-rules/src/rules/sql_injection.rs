//! R2: SQL injection detection.
//!
//! Matches a case-insensitive pattern over SQL keywords and comment tokens
//! against the request URL and the JSON-serialized request body. Comment
//! tokens (`--`, `#`, `/*`) are matched literally, so innocuous fragments
//! can trip this rule; that is the accepted baseline behavior.

use once_cell::sync::Lazy;
use regex::Regex;
use sentinel_types::{AlertDraft, RuleId, Severity};

use crate::error::RuleResult;
use crate::rules::RuleContext;

const MESSAGE: &str = "SQL Injection attempt detected";

static SQL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(UNION|SELECT|INSERT|UPDATE|DELETE|DROP TABLE|--|#|/\*)")
        .expect("SQL injection pattern is valid")
});

pub(crate) fn evaluate<S>(ctx: &RuleContext<'_, S>) -> RuleResult<Option<AlertDraft>> {
    if SQL_PATTERN.is_match(&ctx.event.url) {
        return Ok(Some(draft()));
    }

    if let Some(body) = ctx.body {
        let serialized = serde_json::to_string(body)?;
        if SQL_PATTERN.is_match(&serialized) {
            return Ok(Some(draft()));
        }
    }

    Ok(None)
}

fn draft() -> AlertDraft {
    AlertDraft::new(RuleId::SqlInjection, MESSAGE, Severity::High)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;
    use sentinel_store::MemoryStore;
    use sentinel_types::{LogEvent, LogId, ProjectId};
    use test_case::test_case;

    use crate::config::{DetectionConfig, GeoConfig};
    use crate::geo::GeoClient;

    fn event_with_url(url: &str) -> LogEvent {
        LogEvent {
            id: LogId(1),
            project_id: ProjectId::new(),
            user_id: None,
            ip: None,
            method: "GET".to_string(),
            url: url.to_string(),
            status: 200,
            duration_ms: 5,
            user_agent: None,
            timestamp: Utc::now(),
        }
    }

    fn check(url: &str, body: Option<serde_json::Value>) -> bool {
        let event = event_with_url(url);
        let store = MemoryStore::new();
        let geo = GeoClient::new(&GeoConfig::default()).unwrap();
        let config = DetectionConfig::default();
        let ctx = RuleContext {
            event: &event,
            body: body.as_ref(),
            store: &store,
            geo: &geo,
            config: &config,
        };
        evaluate(&ctx).unwrap().is_some()
    }

    #[test_case("/search?q=1%20UNION%20SELECT%20*" => true; "encoded union select")]
    #[test_case("/search?q=union select" => true; "lowercase keywords")]
    #[test_case("/items?filter=DROP TABLE users" => true; "drop table")]
    #[test_case("/posts?note=a--b" => true; "line comment token")]
    #[test_case("/posts?note=/*hidden*/" => true; "block comment token")]
    #[test_case("/search?q=hello" => false; "benign query")]
    #[test_case("/products/42" => false; "benign path")]
    fn url_matching(url: &str) -> bool {
        check(url, None)
    }

    #[test]
    fn body_is_inspected_serialized() {
        let body = serde_json::json!({"comment": "1; DELETE FROM users"});
        assert!(check("/comments", Some(body)));
    }

    #[test]
    fn nested_body_values_are_inspected() {
        let body = serde_json::json!({"filters": [{"clause": "x UNION y"}]});
        assert!(check("/comments", Some(body)));
    }

    #[test]
    fn benign_body_does_not_fire() {
        let body = serde_json::json!({"comment": "great product"});
        assert!(!check("/comments", Some(body)));
    }

    #[test]
    fn fired_draft_shape() {
        let event = event_with_url("/search?q=SELECT%20*");
        let store = MemoryStore::new();
        let geo = GeoClient::new(&GeoConfig::default()).unwrap();
        let config = DetectionConfig::default();
        let ctx = RuleContext {
            event: &event,
            body: None,
            store: &store,
            geo: &geo,
            config: &config,
        };

        let draft = evaluate(&ctx).unwrap().expect("rule should fire");
        assert_eq!(draft.rule_id, RuleId::SqlInjection);
        assert_eq!(draft.severity, Severity::High);
        assert_eq!(draft.message, "SQL Injection attempt detected");
    }

    proptest! {
        #[test]
        fn keyword_free_urls_never_fire(path in "/[0-9/?=&.]{1,24}") {
            // No letters, no '-', '#' or '*': the pattern cannot match.
            prop_assert!(!check(&path, None));
        }

        #[test]
        fn union_anywhere_always_fires(prefix in "[a-z]{0,8}", suffix in "[a-z]{0,8}") {
            let url = format!("/q?v={prefix}UNION{suffix}");
            prop_assert!(check(&url, None));
        }
    }
}
