//! Preflight checks module.

mod catalog;

use crate::models::config::Config;
use crate::Result;
use colored::Colorize;

/// Result of a preflight check.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub success: bool,
    pub message: String,
    pub hint: Option<String>,
}

impl CheckResult {
    pub fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            message: message.to_string(),
            hint: None,
        }
    }

    pub fn fail(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }
}

/// Run all preflight checks.
pub async fn run_preflight_checks(config: &Config) -> Result<Vec<CheckResult>> {
    let mut results = Vec::new();

    // Check configuration
    let config_check = check_config(config);
    let config_ok = config_check.success;
    results.push(config_check);

    // Check catalog reachability
    if config_ok {
        results.push(catalog::check(config).await);
    }

    Ok(results)
}

/// Check that the configuration is usable.
fn check_config(config: &Config) -> CheckResult {
    match config.validate() {
        Ok(()) => CheckResult::ok(
            "Config",
            &format!(
                "search type {}, good score {}",
                config.search_type,
                config.good_score()
            ),
        ),
        Err(e) => CheckResult::fail("Config", &e.to_string(), "Fix the config file or run `ade-agent config`"),
    }
}

/// Print preflight check results.
pub fn print_results(results: &[CheckResult]) {
    for result in results {
        if result.success {
            println!(
                "{} {}: {}",
                "[OK]".green(),
                result.name.bold(),
                result.message
            );
        } else {
            println!(
                "{} {}: {}",
                "[FAIL]".red(),
                result.name.bold(),
                result.message
            );
            if let Some(ref hint) = result.hint {
                println!("  {} {}", "->".yellow(), hint);
            }
        }
    }
}

/// Check if all preflight checks passed.
pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.success)
}
