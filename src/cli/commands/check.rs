use anyhow::{bail, Result};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::path::Path;
use tower::ServiceExt;
use tracing::{debug, info};

use crate::config::{initialize_app_state, HostConfig};
use crate::router::create_router;
use crate::schemas::AppState;

/// Outcome of a readiness run.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub passed: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl CheckReport {
    pub fn is_ready(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.passed {
            out.push_str(&format!("✓ {}\n", line));
        }
        if !self.errors.is_empty() {
            out.push_str(&format!("\n✗ Found {} errors:\n", self.errors.len()));
            for error in &self.errors {
                out.push_str(&format!("  - {}\n", error));
            }
        }
        if !self.warnings.is_empty() {
            out.push_str(&format!("\n⚠ Found {} warnings:\n", self.warnings.len()));
            for warning in &self.warnings {
                out.push_str(&format!("  - {}\n", warning));
            }
        }
        if self.is_ready() {
            out.push_str("\n✓ Deployment ready!\n");
        }
        out
    }
}

fn has_extension(dir: &Path, extension: &str) -> bool {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .any(|entry| entry.path().extension().is_some_and(|ext| ext == extension))
        })
        .unwrap_or(false)
}

/// Checks the frontend bundle, the page route and the model service.
pub async fn run_checks(state: AppState) -> CheckReport {
    let mut report = CheckReport::default();
    let static_dir = state.static_dir.clone();

    if !static_dir.is_dir() {
        report.errors.push(format!("Missing bundle directory: {}", static_dir.display()));
    } else {
        if static_dir.join("index.html").is_file() {
            report.passed.push("index.html".to_string());
        } else {
            report.errors.push("Missing file: index.html".to_string());
        }
        for (extension, what) in [("wasm", "WebAssembly module"), ("js", "JavaScript loader")] {
            if has_extension(&static_dir, extension) {
                report.passed.push(format!("{} (*.{})", what, extension));
            } else {
                report.errors.push(format!("Missing {} (*.{})", what, extension));
            }
        }
    }

    let model = state.model.clone();
    debug!("Requesting home route in-process");
    let request = Request::get("/").body(Body::empty());
    match request {
        Ok(request) => match create_router(state).oneshot(request).await {
            Ok(response) if response.status() == StatusCode::OK => {
                report.passed.push("Home route works".to_string());
            }
            Ok(response) => {
                report.errors.push(format!("Home route returned {}", response.status().as_u16()));
            }
            Err(e) => report.errors.push(format!("Home route failed: {}", e)),
        },
        Err(e) => report.errors.push(format!("Home route failed: {}", e)),
    }

    if model.is_reachable().await {
        report.passed.push(format!("Model service reachable at {}", model.base_url()));
    } else {
        report
            .warnings
            .push(format!("Model service not reachable at {}", model.base_url()));
    }

    report
}

pub async fn check(config: &HostConfig) -> Result<()> {
    info!("Checking deployment readiness");
    let state = initialize_app_state(config)?;
    let report = run_checks(state).await;

    print!("{}", report.render());
    if !report.is_ready() {
        bail!("{} readiness check(s) failed", report.errors.len());
    }
    Ok(())
}
