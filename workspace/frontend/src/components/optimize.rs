use common::{run_optimize, AppEvent, OptimizeRequest, OptimizeView, Panel, PanelState, RequestSequence};
use yew::prelude::*;

use super::field::NumberField;
use super::results::OptimizeResults;
use crate::api_client::HttpModelService;
use crate::hooks::{AppStore, FormFields};

#[derive(Properties, PartialEq)]
pub struct OptimizePanelProps {
    pub state: PanelState<OptimizeView>,
    pub dispatch: UseReducerDispatcher<AppStore>,
}

#[function_component(OptimizePanel)]
pub fn optimize_panel(props: &OptimizePanelProps) -> Html {
    let form_ref = use_node_ref();
    let sequence = use_mut_ref(RequestSequence::new);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(fields) = FormFields::read(&form_ref) else {
                return;
            };
            let seq = sequence.borrow_mut().issue();

            let request = match OptimizeRequest::from_form(&fields) {
                Ok(request) => request,
                Err(error) => {
                    log::warn!("Optimization #{} rejected: {}", seq, error);
                    dispatch.dispatch(AppEvent::Invalid { panel: Panel::Optimize, seq, error });
                    return;
                }
            };

            dispatch.dispatch(AppEvent::Submitted { panel: Panel::Optimize, seq });
            let dispatch = dispatch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                log::info!(
                    "Requesting optimization #{} (target {} L, budget {} UGX)",
                    seq,
                    request.target_milk,
                    request.max_cost
                );
                let outcome = run_optimize(&HttpModelService, request).await;
                if let Err(e) = &outcome {
                    log::error!("Optimization #{} failed: {}", seq, e);
                }
                dispatch.dispatch(AppEvent::OptimizeSettled { seq, outcome });
            });
        })
    };

    html! {
        <div class="panel">
            <h2>{"Optimize Feed Formulation"}</h2>
            <form id={Panel::Optimize.form_id()} ref={form_ref} {onsubmit}>
                <div class="form-grid">
                    <NumberField name="target_milk" label="Target Milk Yield (L/day)" value="15" />
                    <NumberField
                        name="max_cost"
                        label="Maximum Daily Cost (UGX)"
                        value="10000"
                        hint={Some("Cheapest ration meeting the target within this budget")}
                    />
                </div>
                <button type="submit" class="btn-primary" disabled={props.state.is_calculating()}>
                    {"Optimize Feed"}
                </button>
            </form>
            <OptimizeResults state={props.state.clone()} />
        </div>
    }
}
