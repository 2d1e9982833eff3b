use common::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <nav class="tabs">
            { for Tab::ALL.into_iter().map(|tab| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(tab));
                html! {
                    <button
                        type="button"
                        class={classes!("tab-btn", (props.active == tab).then_some("active"))}
                        data-tab={tab.name()}
                        {onclick}
                    >
                        {tab.label()}
                    </button>
                }
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabPanelProps {
    pub tab: Tab,
    pub active: Tab,
    pub children: Children,
}

/// A `${tab}-tab` content region, marked active when its tab is.
#[function_component(TabPanel)]
pub fn tab_panel(props: &TabPanelProps) -> Html {
    html! {
        <section
            id={props.tab.panel_id()}
            class={classes!("tab-content", (props.active == props.tab).then_some("active"))}
        >
            { for props.children.iter() }
        </section>
    }
}
