use yew::prelude::*;

/// One output line: label, computed value, and a short explanation.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    pub value: AttrValue,
    pub desc: AttrValue,
}

#[function_component(StatRow)]
pub fn stat_row(p: &Props) -> Html {
    html! {
        <div class="stat-row">
            <div class="stat-label">{ p.label.clone() }</div>
            <div class="stat-value">{ p.value.clone() }</div>
            <div class="stat-desc">{ p.desc.clone() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn stat_row_renders_all_three_cells() {
        let props = Props {
            label: AttrValue::from("Odds per hit"),
            value: AttrValue::from("92.02% \u{2022} 1 in 1"),
            desc: AttrValue::from("Chance a single pulled card is your player."),
        };
        let html = block_on(LocalServerRenderer::<StatRow>::with_props(props).render());
        assert!(html.contains("Odds per hit"));
        assert!(html.contains("92.02%"));
        assert!(html.contains("single pulled card"));
    }
}
