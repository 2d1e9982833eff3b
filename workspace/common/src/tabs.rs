use std::fmt;
use std::str::FromStr;

use crate::error::UnknownTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    Dashboard,
    #[default]
    Predict,
    Optimize,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Predict, Tab::Optimize];

    /// Value of the button's `data-tab` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Predict => "predict",
            Tab::Optimize => "optimize",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Predict => "Predict Yield",
            Tab::Optimize => "Optimize Feed",
        }
    }

    /// Id of the panel this tab shows.
    pub fn panel_id(self) -> String {
        format!("{}-tab", self.name())
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.name() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Side effect requested by a tab transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEffect {
    SeedDashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    active: Tab,
    dashboard_visits: u64,
}

impl TabState {
    pub fn new(initial: Tab) -> Self {
        Self { active: initial, dashboard_visits: 0 }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Number of clicks on the dashboard tab so far.
    pub fn dashboard_visits(&self) -> u64 {
        self.dashboard_visits
    }

    /// Every click on the dashboard tab reseeds the charts, even when it is
    /// already the active tab.
    pub fn activate(self, tab: Tab) -> (Self, Option<TabEffect>) {
        tracing::debug!(from = %self.active, to = %tab, "switching tab");
        match tab {
            Tab::Dashboard => (
                Self { active: tab, dashboard_visits: self.dashboard_visits + 1 },
                Some(TabEffect::SeedDashboard),
            ),
            _ => (Self { active: tab, ..self }, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_ids() {
        assert_eq!(Tab::Dashboard.panel_id(), "dashboard-tab");
        assert_eq!(Tab::Optimize.panel_id(), "optimize-tab");
    }

    #[test]
    fn test_parse_data_attribute() {
        assert_eq!("predict".parse::<Tab>(), Ok(Tab::Predict));
        assert_eq!("reports".parse::<Tab>(), Err(UnknownTab("reports".to_string())));
    }

    #[test]
    fn test_exactly_one_tab_active() {
        let (state, _) = TabState::new(Tab::Predict).activate(Tab::Optimize);

        let active: Vec<_> = Tab::ALL.into_iter().filter(|t| state.is_active(*t)).collect();
        assert_eq!(active, vec![Tab::Optimize]);
    }

    #[test]
    fn test_dashboard_reseeds_on_every_click() {
        let state = TabState::new(Tab::Predict);

        let (state, effect) = state.activate(Tab::Dashboard);
        assert_eq!(effect, Some(TabEffect::SeedDashboard));

        let (state, effect) = state.activate(Tab::Dashboard);
        assert_eq!(effect, Some(TabEffect::SeedDashboard));
        assert_eq!(state.dashboard_visits(), 2);
    }

    #[test]
    fn test_other_tabs_have_no_effect() {
        let (state, effect) = TabState::new(Tab::Dashboard).activate(Tab::Predict);

        assert_eq!(effect, None);
        assert_eq!(state.active(), Tab::Predict);
        assert_eq!(state.dashboard_visits(), 0);
    }
}
