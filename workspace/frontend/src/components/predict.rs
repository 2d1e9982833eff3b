use common::{run_predict, AppEvent, Panel, PanelState, PredictRequest, PredictView, RequestSequence};
use yew::prelude::*;

use super::field::NumberField;
use super::results::PredictResults;
use crate::api_client::HttpModelService;
use crate::hooks::{AppStore, FormFields};

/// (name, label, default) for each input, in `PredictRequest::FIELDS` order.
const INPUTS: [(&str, &str, &str); 8] = [
    ("maize_bran", "Maize Bran (kg/day)", "3.5"),
    ("cottonseed", "Cottonseed Cake (kg/day)", "1.5"),
    ("brewers_grain", "Brewers Grain (kg/day)", "2.0"),
    ("grass_silage", "Grass Silage (kg/day)", "3.0"),
    ("nel", "Net Energy for Lactation (Mcal/kg)", "6.0"),
    ("cp", "Crude Protein (%)", "13.8"),
    ("lysine", "Lysine (%)", "0.63"),
    ("days_in_milk", "Days in Milk", "150"),
];

#[derive(Properties, PartialEq)]
pub struct PredictPanelProps {
    pub state: PanelState<PredictView>,
    pub dispatch: UseReducerDispatcher<AppStore>,
}

#[function_component(PredictPanel)]
pub fn predict_panel(props: &PredictPanelProps) -> Html {
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

            let request = match PredictRequest::from_form(&fields) {
                Ok(request) => request,
                Err(error) => {
                    log::warn!("Prediction #{} rejected: {}", seq, error);
                    dispatch.dispatch(AppEvent::Invalid { panel: Panel::Predict, seq, error });
                    return;
                }
            };

            dispatch.dispatch(AppEvent::Submitted { panel: Panel::Predict, seq });
            let dispatch = dispatch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Requesting prediction #{}", seq);
                let outcome = run_predict(&HttpModelService, request).await;
                if let Err(e) = &outcome {
                    log::error!("Prediction #{} failed: {}", seq, e);
                }
                dispatch.dispatch(AppEvent::PredictSettled { seq, outcome });
            });
        })
    };

    html! {
        <div class="panel">
            <h2>{"Predict Milk Yield"}</h2>
            <form id={Panel::Predict.form_id()} ref={form_ref} {onsubmit}>
                <div class="form-grid">
                    { for INPUTS.iter().map(|(name, label, value)| html! {
                        <NumberField name={*name} label={*label} value={*value} />
                    }) }
                </div>
                <button type="submit" class="btn-primary" disabled={props.state.is_calculating()}>
                    {"Predict Yield"}
                </button>
            </form>
            <PredictResults state={props.state.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_cover_request_fields_in_order() {
        let names: Vec<&str> = INPUTS.iter().map(|(name, _, _)| *name).collect();
        assert_eq!(names, PredictRequest::FIELDS);
    }

    #[test]
    fn test_defaults_parse_into_request() {
        let form: Vec<(&str, &str)> = INPUTS.iter().map(|(name, _, value)| (*name, *value)).collect();
        let request = PredictRequest::from_form(form.as_slice()).expect("defaults are numeric");
        assert_eq!(request.days_in_milk, 150.0);
    }
}
