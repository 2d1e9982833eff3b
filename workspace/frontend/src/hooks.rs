use std::rc::Rc;

use common::{AppEvent, AppState, Effect, FormSource};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

/// Page state as seen by Yew.
///
/// `seed_requests` counts dashboard seeding effects; the dashboard panel
/// reseeds whenever it changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppStore {
    pub state: AppState,
    pub seed_requests: u64,
}

impl Reducible for AppStore {
    type Action = AppEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let (state, effect) = self.state.clone().reduce(action);
        let seed_requests = match effect {
            Some(Effect::SeedDashboard) => self.seed_requests + 1,
            None => self.seed_requests,
        };
        Rc::new(Self { state, seed_requests })
    }
}

/// Submitted form fields, readable by name.
pub struct FormFields(FormData);

impl FormFields {
    pub fn read(form_ref: &NodeRef) -> Option<Self> {
        let form = form_ref.cast::<HtmlFormElement>()?;
        match FormData::new_with_form(&form) {
            Ok(data) => Some(Self(data)),
            Err(e) => {
                log::error!("Failed to read form data: {:?}", e);
                None
            }
        }
    }
}

impl FormSource for FormFields {
    fn field(&self, name: &str) -> Option<String> {
        self.0.get(name).as_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Panel, Tab};

    fn dispatch(store: Rc<AppStore>, event: AppEvent) -> Rc<AppStore> {
        store.reduce(event)
    }

    #[test]
    fn test_each_dashboard_click_requests_a_reseed() {
        let store = Rc::new(AppStore::default());
        assert_eq!(store.seed_requests, 0);

        let store = dispatch(store, AppEvent::TabClicked(Tab::Dashboard));
        assert_eq!(store.seed_requests, 1);

        let store = dispatch(store, AppEvent::TabClicked(Tab::Dashboard));
        assert_eq!(store.seed_requests, 2);
        assert_eq!(store.state.tabs.active(), Tab::Dashboard);
    }

    #[test]
    fn test_other_events_leave_seed_counter_alone() {
        let store = dispatch(Rc::new(AppStore::default()), AppEvent::TabClicked(Tab::Dashboard));

        let store = dispatch(store, AppEvent::TabClicked(Tab::Optimize));
        let store = dispatch(store, AppEvent::Submitted { panel: Panel::Optimize, seq: 1 });
        let store = dispatch(store, AppEvent::TabClicked(Tab::Predict));

        assert_eq!(store.seed_requests, 1);
        assert!(store.state.optimize.state().is_calculating());
    }
}
