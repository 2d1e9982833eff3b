use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    /// Form field name, also the input id.
    pub name: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    #[prop_or_default]
    pub hint: Option<&'static str>,
}

#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.name}>{props.label}</label>
            <input type="number" step="any" id={props.name} name={props.name} value={props.value} required=true />
            if let Some(hint) = props.hint {
                <small class="hint">{hint}</small>
            }
        </div>
    }
}
