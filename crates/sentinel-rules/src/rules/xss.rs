//! R3: XSS payload detection.
//!
//! Looks for the literal substring `<script` — case-sensitive — in the
//! JSON serialization of the full event and the transient request body.
//! Matching the whole serialized event mirrors the upstream detector: it can
//! flag a payload smuggled through any field (user agent, URL, body), at the
//! cost of baseline-level precision against obfuscated payloads.

use sentinel_types::{AlertDraft, RuleId, Severity};

use crate::error::RuleResult;
use crate::rules::RuleContext;

const MESSAGE: &str = "XSS Payload Detected";
const NEEDLE: &str = "<script";

pub(crate) fn evaluate<S>(ctx: &RuleContext<'_, S>) -> RuleResult<Option<AlertDraft>> {
    let mut haystack = serde_json::to_string(ctx.event)?;
    if let Some(body) = ctx.body {
        haystack.push_str(&serde_json::to_string(body)?);
    }

    if haystack.contains(NEEDLE) {
        Ok(Some(AlertDraft::new(
            RuleId::XssPayload,
            MESSAGE,
            Severity::High,
        )))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sentinel_store::MemoryStore;
    use sentinel_types::{LogEvent, LogId, ProjectId};

    use crate::config::{DetectionConfig, GeoConfig};
    use crate::geo::GeoClient;

    fn make_event() -> LogEvent {
        LogEvent {
            id: LogId(1),
            project_id: ProjectId::new(),
            user_id: None,
            ip: None,
            method: "POST".to_string(),
            url: "/comments".to_string(),
            status: 201,
            duration_ms: 9,
            user_agent: Some("Mozilla/5.0".to_string()),
            timestamp: Utc::now(),
        }
    }

    fn check(event: &LogEvent, body: Option<serde_json::Value>) -> Option<AlertDraft> {
        let store = MemoryStore::new();
        let geo = GeoClient::new(&GeoConfig::default()).unwrap();
        let config = DetectionConfig::default();
        let ctx = RuleContext {
            event,
            body: body.as_ref(),
            store: &store,
            geo: &geo,
            config: &config,
        };
        evaluate(&ctx).unwrap()
    }

    #[test]
    fn script_tag_in_body_fires() {
        let body = serde_json::json!({"comment": "<script>alert(1)</script>"});
        let draft = check(&make_event(), Some(body)).expect("rule should fire");

        assert_eq!(draft.rule_id, RuleId::XssPayload);
        assert_eq!(draft.severity, Severity::High);
        assert_eq!(draft.message, "XSS Payload Detected");
    }

    #[test]
    fn bare_word_script_does_not_fire() {
        let body = serde_json::json!({"comment": "this movie script is great"});
        assert!(check(&make_event(), Some(body)).is_none());
    }

    #[test]
    fn script_tag_in_url_fires() {
        let mut event = make_event();
        event.url = "/search?q=<script>steal()</script>".to_string();
        assert!(check(&event, None).is_some());
    }

    #[test]
    fn script_tag_in_user_agent_fires() {
        let mut event = make_event();
        event.user_agent = Some("<script src=x>".to_string());
        assert!(check(&event, None).is_some());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let body = serde_json::json!({"comment": "<SCRIPT>alert(1)</SCRIPT>"});
        assert!(check(&make_event(), Some(body)).is_none());
    }

    #[test]
    fn clean_event_stays_quiet() {
        assert!(check(&make_event(), None).is_none());
    }
}
