use common::dashboard::{EFFICIENCY_CHART_ID, FEED_CHART_ID};
use common::DashboardSeeder;
use yew::prelude::*;

use crate::charts::PlotlyRenderer;

#[derive(Properties, PartialEq)]
pub struct DashboardPanelProps {
    /// Bumped each time the dashboard tab is opened.
    pub seed_requests: u64,
}

#[function_component(DashboardPanel)]
pub fn dashboard_panel(props: &DashboardPanelProps) -> Html {
    let seeder = use_mut_ref(|| DashboardSeeder::new(PlotlyRenderer));

    use_effect_with(props.seed_requests, move |&seed_requests| {
        if seed_requests > 0 {
            let drawn = seeder.borrow_mut().seed();
            log::debug!("Dashboard seeded ({} charts, visit {})", drawn, seed_requests);
        }
        || ()
    });

    html! {
        <div class="panel">
            <h2>{"Farm Dashboard"}</h2>
            <div class="chart-grid">
                <div class="chart-card"><div id={FEED_CHART_ID} class="chart"></div></div>
                <div class="chart-card"><div id={EFFICIENCY_CHART_ID} class="chart"></div></div>
            </div>
        </div>
    }
}
