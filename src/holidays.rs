//! Holiday feed fetch.

use std::collections::HashMap;
use std::time::Duration;

use tracing::warn;

use shiftcal_core::HolidaySet;

const FETCH_TIMEOUT_SECS: u64 = 5;

/// Fetch the holiday feed.
///
/// The feed is reference data for styling only, so any failure degrades to
/// an empty set with a warning instead of failing the command.
pub async fn fetch(url: &str) -> HolidaySet {
    let client = reqwest::Client::new();

    let resp = client
        .get(url)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .send()
        .await;

    let resp = match resp {
        Ok(resp) if resp.status().is_success() => resp,
        Ok(resp) => {
            warn!(status = %resp.status(), "holiday feed returned an error status");
            return HolidaySet::default();
        }
        Err(e) => {
            warn!(error = %e, "holiday feed unreachable");
            return HolidaySet::default();
        }
    };

    match resp.json::<HashMap<String, String>>().await {
        Ok(raw) => HolidaySet::from_feed(raw),
        Err(e) => {
            warn!(error = %e, "holiday feed body was not a date map");
            HolidaySet::default()
        }
    }
}
