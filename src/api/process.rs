//! Electoral Process Endpoints

use crate::config::AppConfig;
use crate::models::{ApiEnvelope, ElectoralProcess};
use super::{get_json, ApiResult};

/// Active electoral process with its candidacies
pub async fn fetch_active_process(config: &AppConfig, token: Option<&str>) -> ApiResult<ElectoralProcess> {
    let url = config.endpoint("procesos/activo");
    log::debug!("[API] GET {}", url);
    let envelope: ApiEnvelope<ElectoralProcess> = get_json(&url, token).await?;
    envelope.into_data()
}
