//! R1: brute-force login detection.
//!
//! Fires when a failed login arrives from an IP that has accumulated at
//! least the threshold number of failures — this event included, since it is
//! persisted before evaluation — inside the trailing window. The count comes
//! from a time-ranged store query keyed by `ip` and the failure status.
//!
//! The window is anchored at the event's own timestamp, which equals
//! ingestion time on the live path and keeps replayed evaluation
//! deterministic.

use sentinel_store::EventStore;
use sentinel_types::{AlertDraft, RuleId, Severity};

use crate::error::RuleResult;
use crate::rules::RuleContext;

const MESSAGE: &str = "Multiple failed login attempts";

pub(crate) async fn evaluate<S: EventStore>(
    ctx: &RuleContext<'_, S>,
) -> RuleResult<Option<AlertDraft>> {
    let event = ctx.event;
    let config = ctx.config;

    if !event.url.contains(&config.login_path) || event.status != config.login_failure_status {
        return Ok(None);
    }
    let Some(ip) = event.ip.as_deref() else {
        return Ok(None);
    };

    let since = event.timestamp - config.brute_force_window();
    let count = ctx
        .store
        .count_failures_since(ip, config.login_failure_status, since)
        .await?;

    if count >= config.brute_force_threshold {
        Ok(Some(AlertDraft::new(
            RuleId::BruteForceLogin,
            MESSAGE,
            Severity::High,
        )))
    } else {
        Ok(None)
    }
}
