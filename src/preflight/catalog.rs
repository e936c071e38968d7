//! Catalog website preflight check.

use super::CheckResult;
use crate::models::config::Config;
use crate::services::catalog::CatalogClient;

/// Check if the catalog website is reachable.
pub async fn check(config: &Config) -> CheckResult {
    let client = match CatalogClient::new(&config.http) {
        Ok(client) => client,
        Err(e) => {
            return CheckResult::fail(
                "Catalog",
                &format!("client setup failed ({})", e),
                "Check the http section of your config",
            )
        }
    };

    match client.health_check().await {
        Ok(true) => CheckResult::ok("Catalog", &format!("reachable ({})", client.base_url())),
        Ok(false) | Err(_) => CheckResult::fail(
            "Catalog",
            &format!("{} not reachable", client.base_url()),
            "Check your network connection or http.base_url",
        ),
    }
}
