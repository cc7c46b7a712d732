use yew::prelude::*;

/// Labelled form control wrapper.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Field)]
pub fn field(p: &Props) -> Html {
    html! {
        <div class="field">
            <div class="field-label">{ p.label.clone() }</div>
            { for p.children.iter() }
        </div>
    }
}
