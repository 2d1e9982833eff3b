use anyhow::{anyhow, Result};
use clap::Args;
use common::{run_optimize, OptimizeRequest, OptimizeView};
use std::time::Duration;
use tracing::info;

use super::predict::render_metrics;
use crate::config;
use crate::model_client::ModelClient;

/// Command-line twin of the optimize form.
#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// Target milk yield (L/day)
    #[arg(long, default_value_t = 15.0)]
    pub target_milk: f64,
    /// Maximum daily feed cost (UGX)
    #[arg(long, default_value_t = 10000.0)]
    pub max_cost: f64,

    /// Server answering /api/optimize (this host or the model service itself)
    #[arg(long, env = "DAIRYFEED_API_URL", default_value = "http://127.0.0.1:5000")]
    pub api_url: String,
}

pub fn render_optimization(view: &OptimizeView) -> String {
    let mut out = format!("{}\n", OptimizeView::TITLE);

    for feed in &view.feeds {
        out.push_str(&format!("  {:<22} {} {}\n", feed.name, feed.amount, feed.unit));
    }
    out.push('\n');
    out.push_str(&render_metrics(&view.metrics));

    out.push_str("\nNutrient Analysis\n");
    let headings = OptimizeView::NUTRIENT_HEADINGS;
    out.push_str(&format!(
        "  {:<10} {:>14} {:>14} {:>14}  {}\n",
        headings[0], headings[1], headings[2], headings[3], headings[4]
    ));
    for row in &view.nutrients {
        out.push_str(&format!(
            "  {:<10} {:>14} {:>14} {:>14}  {}\n",
            row.nutrient,
            format!("{} {}", row.required, row.unit),
            format!("{} {}", row.provided, row.unit),
            format!("{} {}", row.balance, row.unit),
            row.status
        ));
    }
    out
}

pub async fn optimize(args: OptimizeArgs) -> Result<()> {
    let client = ModelClient::new(
        &args.api_url,
        Duration::from_secs(config::DEFAULT_UPSTREAM_TIMEOUT_SECS),
    )?;
    let request = OptimizeRequest {
        target_milk: args.target_milk,
        max_cost: args.max_cost,
    };

    info!(
        "Requesting optimization from {} (target {} L, budget {} UGX)",
        client.base_url(),
        request.target_milk,
        request.max_cost
    );
    let view = run_optimize(&client, request)
        .await
        .map_err(|e| anyhow!(e.display_message()))?;

    print!("{}", render_optimization(&view));
    Ok(())
}
