use yew::prelude::*;

/// Bordered panel with a bold title, the basic layout unit of every page.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(p: &Props) -> Html {
    html! {
        <div class="card">
            <div class="card-title">{ p.title.clone() }</div>
            { for p.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn card_renders_title_and_children() {
        #[function_component(Harness)]
        fn harness() -> Html {
            html! { <Card title="Inputs"><p>{ "body" }</p></Card> }
        }
        let html = block_on(LocalServerRenderer::<Harness>::new().render());
        assert!(html.contains("Inputs"));
        assert!(html.contains("body"));
    }
}
