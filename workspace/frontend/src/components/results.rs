use common::{FeedRow, Metric, NutrientRow, OptimizeView, Panel, PanelState, PredictView};
use yew::prelude::*;

use super::feedback::{ErrorDisplay, Loading};

/// Projects a panel state into its results region.
fn results_region<V>(panel: Panel, state: &PanelState<V>, render: impl Fn(&V) -> Html) -> Html {
    let body = match state {
        PanelState::Hidden => html! {},
        PanelState::Calculating => html! { <Loading text={panel.placeholder()} /> },
        PanelState::Failed(message) => html! { <ErrorDisplay message={message.clone()} /> },
        PanelState::Ready(view) => render(view),
    };

    html! {
        <div
            id={panel.results_id()}
            class={classes!("results", matches!(state, PanelState::Hidden).then_some("hidden"))}
        >
            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricCardsProps {
    pub metrics: Vec<Metric>,
}

#[function_component(MetricCards)]
pub fn metric_cards(props: &MetricCardsProps) -> Html {
    html! {
        <div class="metrics">
            { for props.metrics.iter().map(|metric| html! {
                <div class="metric">
                    <span class="metric-label">{metric.label}</span>
                    <span class="metric-value">{&metric.value}</span>
                    <span class="metric-unit">{metric.unit}</span>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeedBreakdownProps {
    pub feeds: Vec<FeedRow>,
}

#[function_component(FeedBreakdown)]
pub fn feed_breakdown(props: &FeedBreakdownProps) -> Html {
    html! {
        <div class="feed-breakdown">
            { for props.feeds.iter().map(|feed| html! {
                <div class="feed-item">
                    <span class="feed-name">{feed.name}</span>
                    <span class="feed-amount">{&feed.amount}</span>
                    <span class="feed-unit">{feed.unit}</span>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NutrientAnalysisProps {
    pub rows: Vec<NutrientRow>,
}

#[function_component(NutrientAnalysis)]
pub fn nutrient_analysis(props: &NutrientAnalysisProps) -> Html {
    html! {
        <div class="nutrients-table">
            <h4>{"Nutrient Analysis"}</h4>
            <table>
                <thead>
                    <tr>
                        { for OptimizeView::NUTRIENT_HEADINGS.iter().map(|h| html! { <th>{*h}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <tr>
                            <td><strong>{&row.nutrient}</strong></td>
                            <td>{format!("{} {}", row.required, row.unit)}</td>
                            <td>{format!("{} {}", row.provided, row.unit)}</td>
                            <td>{format!("{} {}", row.balance, row.unit)}</td>
                            <td>
                                <span class={classes!("status-badge", row.status.css_class())}>
                                    {row.status.as_str()}
                                </span>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PredictResultsProps {
    pub state: PanelState<PredictView>,
}

#[function_component(PredictResults)]
pub fn predict_results(props: &PredictResultsProps) -> Html {
    results_region(Panel::Predict, &props.state, |view| html! {
        <div class="result-card">
            <h3>{PredictView::TITLE}</h3>
            <MetricCards metrics={view.metrics.clone()} />
        </div>
    })
}

#[derive(Properties, PartialEq)]
pub struct OptimizeResultsProps {
    pub state: PanelState<OptimizeView>,
}

#[function_component(OptimizeResults)]
pub fn optimize_results(props: &OptimizeResultsProps) -> Html {
    results_region(Panel::Optimize, &props.state, |view| html! {
        <div class="result-card">
            <h3>{OptimizeView::TITLE}</h3>
            <FeedBreakdown feeds={view.feeds.clone()} />
            <MetricCards metrics={view.metrics.clone()} />
            <NutrientAnalysis rows={view.nutrients.clone()} />
        </div>
    })
}
