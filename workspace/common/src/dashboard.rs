//! Fixed demo charts shown on the dashboard tab.
//!
//! The data never comes from a request. Rendering goes through
//! [`ChartRenderer`] so the browser can use Plotly and tests can use a fake.

use crate::error::ChartError;

pub const FEED_CHART_ID: &str = "feedChart";
pub const EFFICIENCY_CHART_ID: &str = "efficiencyChart";

pub const FEED_LABELS: [&str; 4] = ["Maize Bran", "Cottonseed", "Brewers Grain", "Grass Silage"];
pub const FEED_COMPOSITION_KG: [f64; 4] = [4.0, 1.5, 2.0, 3.5];
pub const FEED_COLORS: [&str; 4] = ["#667eea", "#764ba2", "#f093fb", "#4facfe"];

pub const MONTHLY_EFFICIENCY: [f64; 12] = [
    1.45, 1.52, 1.48, 1.55, 1.50, 1.58, 1.53, 1.60, 1.55, 1.62, 1.58, 1.65,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    /// One color per bar, or the fill under a line.
    pub background_colors: Vec<&'static str>,
    pub border_color: Option<&'static str>,
    /// Line smoothing, 0 for straight segments.
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: &'static str,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// A chart and the element it mounts on.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub element_id: &'static str,
    pub kind: ChartKind,
    pub config: ChartConfig,
}

pub fn feed_composition_chart() -> ChartSpec {
    ChartSpec {
        element_id: FEED_CHART_ID,
        kind: ChartKind::Bar,
        config: ChartConfig {
            title: "Feed Composition Overview",
            labels: FEED_LABELS.iter().map(|l| l.to_string()).collect(),
            datasets: vec![Dataset {
                label: "Typical Feed Composition (kg)",
                data: FEED_COMPOSITION_KG.to_vec(),
                background_colors: FEED_COLORS.to_vec(),
                border_color: None,
                tension: 0.0,
            }],
        },
    }
}

pub fn efficiency_trend_chart() -> ChartSpec {
    ChartSpec {
        element_id: EFFICIENCY_CHART_ID,
        kind: ChartKind::Line,
        config: ChartConfig {
            title: "Feed Efficiency Trends",
            labels: (1..=MONTHLY_EFFICIENCY.len()).map(|m| format!("Month {}", m)).collect(),
            datasets: vec![Dataset {
                label: "Feed Efficiency (L/kg DM)",
                data: MONTHLY_EFFICIENCY.to_vec(),
                background_colors: vec!["rgba(102, 126, 234, 0.1)"],
                border_color: Some("#667eea"),
                tension: 0.4,
            }],
        },
    }
}

pub fn dashboard_charts() -> [ChartSpec; 2] {
    [feed_composition_chart(), efficiency_trend_chart()]
}

/// The charting engine seen as a capability.
pub trait ChartRenderer {
    type Handle;

    fn render(
        &mut self,
        element_id: &str,
        kind: ChartKind,
        config: &ChartConfig,
    ) -> Result<Self::Handle, ChartError>;

    fn dispose(&mut self, handle: Self::Handle);
}

/// Renders nothing. For hosts without a charting engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl ChartRenderer for NoopRenderer {
    type Handle = ();

    fn render(&mut self, _element_id: &str, _kind: ChartKind, _config: &ChartConfig) -> Result<(), ChartError> {
        Ok(())
    }

    fn dispose(&mut self, _handle: ()) {}
}

/// Owns the mounted dashboard charts and replaces them on every visit.
pub struct DashboardSeeder<R: ChartRenderer> {
    renderer: R,
    mounted: Vec<R::Handle>,
}

impl<R: ChartRenderer> DashboardSeeder<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer, mounted: Vec::new() }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn mounted(&self) -> usize {
        self.mounted.len()
    }

    /// Disposes whatever is mounted, then renders both charts. Returns how
    /// many rendered.
    pub fn seed(&mut self) -> usize {
        for handle in self.mounted.drain(..) {
            self.renderer.dispose(handle);
        }

        for spec in dashboard_charts() {
            match self.renderer.render(spec.element_id, spec.kind, &spec.config) {
                Ok(handle) => self.mounted.push(handle),
                Err(err) => tracing::warn!(error = %err, "dashboard chart not rendered"),
            }
        }
        tracing::debug!(charts = self.mounted.len(), "dashboard seeded");
        self.mounted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRenderer {
        next: u32,
        rendered: Vec<(u32, String, ChartKind, Vec<f64>)>,
        disposed: Vec<u32>,
        fail_on: Option<&'static str>,
    }

    impl ChartRenderer for RecordingRenderer {
        type Handle = u32;

        fn render(&mut self, element_id: &str, kind: ChartKind, config: &ChartConfig) -> Result<u32, ChartError> {
            if self.fail_on == Some(element_id) {
                return Err(ChartError { element_id: element_id.to_string(), reason: "no canvas".to_string() });
            }
            self.next += 1;
            self.rendered.push((self.next, element_id.to_string(), kind, config.datasets[0].data.clone()));
            Ok(self.next)
        }

        fn dispose(&mut self, handle: u32) {
            self.disposed.push(handle);
        }
    }

    #[test]
    fn test_seed_renders_fixed_datasets() {
        let mut seeder = DashboardSeeder::new(RecordingRenderer::default());

        assert_eq!(seeder.seed(), 2);

        let rendered = &seeder.renderer().rendered;
        assert_eq!(rendered[0].1, "feedChart");
        assert_eq!(rendered[0].2, ChartKind::Bar);
        assert_eq!(rendered[0].3, vec![4.0, 1.5, 2.0, 3.5]);
        assert_eq!(rendered[1].1, "efficiencyChart");
        assert_eq!(rendered[1].2, ChartKind::Line);
        assert_eq!(rendered[1].3.len(), 12);
    }

    #[test]
    fn test_reseeding_disposes_previous_charts() {
        let mut seeder = DashboardSeeder::new(RecordingRenderer::default());

        seeder.seed();
        seeder.seed();

        assert_eq!(seeder.renderer().disposed, vec![1, 2]);
        assert_eq!(seeder.mounted(), 2);
        assert_eq!(seeder.renderer().rendered[2].3, seeder.renderer().rendered[0].3);
    }

    #[test]
    fn test_failed_chart_does_not_stop_the_other() {
        let renderer = RecordingRenderer { fail_on: Some(FEED_CHART_ID), ..Default::default() };
        let mut seeder = DashboardSeeder::new(renderer);

        assert_eq!(seeder.seed(), 1);
        assert_eq!(seeder.renderer().rendered[0].1, EFFICIENCY_CHART_ID);
    }

    #[test]
    fn test_efficiency_labels() {
        let chart = efficiency_trend_chart();

        assert_eq!(chart.config.labels.first().map(String::as_str), Some("Month 1"));
        assert_eq!(chart.config.labels.last().map(String::as_str), Some("Month 12"));
    }

    #[test]
    fn test_noop_renderer_mounts_both() {
        let mut seeder = DashboardSeeder::new(NoopRenderer);
        assert_eq!(seeder.seed(), 2);
    }
}
