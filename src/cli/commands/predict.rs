use anyhow::{anyhow, Result};
use clap::Args;
use common::{run_predict, Metric, PredictRequest, PredictView};
use std::time::Duration;
use tracing::{debug, info};

use crate::config;
use crate::model_client::ModelClient;

/// Command-line twin of the predict form.
#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Maize bran (kg/day)
    #[arg(long)]
    pub maize_bran: f64,
    /// Cottonseed cake (kg/day)
    #[arg(long)]
    pub cottonseed: f64,
    /// Brewers grain (kg/day)
    #[arg(long)]
    pub brewers_grain: f64,
    /// Grass silage (kg/day)
    #[arg(long)]
    pub grass_silage: f64,
    /// Net energy for lactation (Mcal/kg)
    #[arg(long, default_value_t = 6.0)]
    pub nel: f64,
    /// Crude protein (%)
    #[arg(long, default_value_t = 13.8)]
    pub cp: f64,
    /// Lysine (%)
    #[arg(long, default_value_t = 0.63)]
    pub lysine: f64,
    #[arg(long, default_value_t = 150.0)]
    pub days_in_milk: f64,

    /// Server answering /api/predict (this host or the model service itself)
    #[arg(long, env = "DAIRYFEED_API_URL", default_value = "http://127.0.0.1:5000")]
    pub api_url: String,
}

impl From<&PredictArgs> for PredictRequest {
    fn from(args: &PredictArgs) -> Self {
        Self {
            maize_bran: args.maize_bran,
            cottonseed: args.cottonseed,
            brewers_grain: args.brewers_grain,
            grass_silage: args.grass_silage,
            nel: args.nel,
            cp: args.cp,
            lysine: args.lysine,
            days_in_milk: args.days_in_milk,
        }
    }
}

pub(crate) fn render_metrics(metrics: &[Metric]) -> String {
    metrics
        .iter()
        .map(|metric| format!("  {:<22} {} {}\n", metric.label, metric.value, metric.unit))
        .collect()
}

pub fn render_prediction(view: &PredictView) -> String {
    format!("{}\n{}", PredictView::TITLE, render_metrics(&view.metrics))
}

pub async fn predict(args: PredictArgs) -> Result<()> {
    let client = ModelClient::new(
        &args.api_url,
        Duration::from_secs(config::DEFAULT_UPSTREAM_TIMEOUT_SECS),
    )?;
    let request = PredictRequest::from(&args);
    debug!(?request, "Prediction request");

    info!("Requesting prediction from {}", client.base_url());
    let view = run_predict(&client, request)
        .await
        .map_err(|e| anyhow!(e.display_message()))?;

    print!("{}", render_prediction(&view));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use common::{PipelineError, Prediction};

    #[test]
    fn test_render_prediction_lists_metrics() {
        let view = PredictView::from(&Prediction {
            milk_yield: 14.256,
            feed_efficiency: 1.4,
            total_dm: 10.0,
        });
        let text = render_prediction(&view);

        assert!(text.starts_with("Prediction Results\n"));
        assert!(text.contains("Predicted Milk Yield"));
        assert!(text.contains("14.26 Liters"));
        assert!(text.contains("1.40 L/kg DM"));
        assert!(text.contains("10.00 kg"));
    }

    fn parse(extra: &[&str]) -> PredictArgs {
        let mut argv = vec![
            "dairyfeed", "predict",
            "--maize-bran", "3.5",
            "--cottonseed", "1.5",
            "--grass-silage", "3.0",
        ];
        argv.extend_from_slice(extra);
        match crate::cli::Cli::try_parse_from(argv).expect("arguments parse").command {
            crate::cli::Commands::Predict(args) => args,
            _ => panic!("expected the predict command"),
        }
    }

    #[tokio::test]
    async fn test_non_finite_flag_is_rejected_before_sending() {
        let args = parse(&["--brewers-grain", "2.0", "--days-in-milk", "NaN", "--api-url", "http://127.0.0.1:9"]);
        let client = ModelClient::new(&args.api_url, Duration::from_secs(1)).unwrap();

        let err = run_predict(&client, PredictRequest::from(&args)).await.unwrap_err();

        assert!(matches!(err, PipelineError::Invalid(_)), "got {:?}", err);
        assert_eq!(err.display_message(), "Error: days_in_milk must be a number (got \"NaN\")");
    }

    #[test]
    fn test_maize_bran_nan_fails_validation() {
        let cli = crate::cli::Cli::try_parse_from([
            "dairyfeed", "predict",
            "--maize-bran", "NaN",
            "--cottonseed", "1.0",
            "--brewers-grain", "2.0",
            "--grass-silage", "3.0",
        ])
        .expect("clap accepts NaN for f64 flags");
        let crate::cli::Commands::Predict(args) = cli.command else {
            panic!("expected the predict command");
        };

        let err = PredictRequest::from(&args).validate().unwrap_err();
        assert_eq!(err.to_string(), "maize_bran must be a number (got \"NaN\")");
    }
}
