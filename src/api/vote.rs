//! Vote Status Endpoints

use serde::Deserialize;

use crate::config::AppConfig;
use super::get_json;

#[derive(Deserialize)]
struct VoteStatus {
    #[serde(default)]
    success: bool,
}

/// Whether the session user already voted; any failure reads as "no"
pub async fn has_voted(config: &AppConfig, token: &str) -> bool {
    let url = config.endpoint("votos/estado");
    match get_json::<VoteStatus>(&url, Some(token)).await {
        Ok(status) => status.success,
        Err(e) => {
            log::warn!("[API] Vote status unavailable: {}", e);
            false
        }
    }
}
