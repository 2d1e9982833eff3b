use yew::prelude::*;

pub mod api_client;
pub mod charts;
mod components;
pub mod hooks;
pub mod settings;

use common::{AppEvent, Tab};
use components::dashboard::DashboardPanel;
use components::optimize::OptimizePanel;
use components::predict::PredictPanel;
use components::tabs::{TabBar, TabPanel};
use hooks::AppStore;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(AppStore::default);
    let active = store.state.tabs.active();

    let on_select = {
        let dispatch = store.dispatcher();
        Callback::from(move |tab: Tab| {
            log::debug!("Switching to tab: {}", tab);
            dispatch.dispatch(AppEvent::TabClicked(tab));
        })
    };

    html! {
        <div class="container">
            <header class="header">
                <h1>{"Dairy Feed Optimizer"}</h1>
                <p>{"Predict milk yield and formulate least-cost rations"}</p>
            </header>
            <TabBar {active} {on_select} />
            <TabPanel tab={Tab::Dashboard} {active}>
                <DashboardPanel seed_requests={store.seed_requests} />
            </TabPanel>
            <TabPanel tab={Tab::Predict} {active}>
                <PredictPanel state={store.state.predict.state().clone()} dispatch={store.dispatcher()} />
            </TabPanel>
            <TabPanel tab={Tab::Optimize} {active}>
                <OptimizePanel state={store.state.optimize.state().clone()} dispatch={store.dispatcher()} />
            </TabPanel>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Dairy Feed Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
