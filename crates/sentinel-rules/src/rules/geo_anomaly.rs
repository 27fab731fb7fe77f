//! R4: geographic login anomaly detection.
//!
//! On a successful login, resolves the client IP to a country through the
//! enrichment client and fires when the country differs from the configured
//! home country. Resolution failures and unknown countries stay quiet — the
//! upstream service is unreliable by contract and must never fail a request.

use sentinel_store::EventStore;
use sentinel_types::{AlertDraft, RuleId, Severity};

use crate::error::RuleResult;
use crate::geo::CountryLookup;
use crate::rules::RuleContext;

pub(crate) async fn evaluate<S: EventStore>(
    ctx: &RuleContext<'_, S>,
) -> RuleResult<Option<AlertDraft>> {
    let event = ctx.event;
    let config = ctx.config;

    if !event.url.contains(&config.login_path) || event.status != config.login_success_status {
        return Ok(None);
    }
    let Some(ip) = event.ip.as_deref() else {
        return Ok(None);
    };

    match ctx.geo.country_for(ip).await {
        CountryLookup::Found(country) if country != config.home_country => {
            Ok(Some(AlertDraft::new(
                RuleId::GeoAnomaly,
                format!("Login from new country: {country}"),
                Severity::Medium,
            )))
        }
        CountryLookup::Found(_) | CountryLookup::Unknown => Ok(None),
    }
}
