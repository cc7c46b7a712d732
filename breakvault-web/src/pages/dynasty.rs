//! The Topps Dynasty UEFA calculator: player/team selection, break
//! quantities, and the derived odds, recomputed on every input change.

use std::rc::Rc;

use breakvault_odds::format::group_thousands;
use breakvault_odds::{ChecklistDataset, OddsReport, Selection, compute, one_in, pct};
use yew::prelude::*;

use crate::components::{Card, Field, StatRow};
use crate::dom;

/// Outer page: owns the one-shot dataset fetch. While the dataset is
/// missing (still loading, or the fetch failed) the page shows the loading
/// state; there is no retry.
#[function_component(DynastyPage)]
pub fn dynasty_page() -> Html {
    let dataset = use_state(|| None::<Rc<ChecklistDataset>>);

    #[cfg(target_arch = "wasm32")]
    {
        let dataset = dataset.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(loaded) = crate::data::load_checklist().await {
                    dataset.set(Some(Rc::new(loaded)));
                }
            });
            || {}
        });
    }

    match &*dataset {
        Some(data) => html! { <Calculator dataset={data.clone()} /> },
        None => html! {
            <main class="page" data-testid="dynasty-loading">
                { "Loading\u{2026}" }
            </main>
        },
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct CalculatorProps {
    pub dataset: Rc<ChecklistDataset>,
}

/// Inner calculator over an already-loaded dataset. Split out from the
/// page so it can be rendered (and tested) without any fetch machinery.
#[function_component(Calculator)]
pub fn calculator(props: &CalculatorProps) -> Html {
    let selection = {
        let first_player = props.dataset.players.first().cloned().unwrap_or_default();
        use_state(move || Selection::for_player(first_player))
    };

    let teams = props.dataset.teams_for_player(&selection.player);

    // A team left over from a previous player falls back to "all teams".
    let current = if !selection.team.is_empty() && !teams.contains(&selection.team) {
        Selection {
            team: String::new(),
            ..(*selection).clone()
        }
    } else {
        (*selection).clone()
    };

    let report = compute(&props.dataset, &current);

    let on_player = dom::on_select_value({
        let selection = selection.clone();
        Callback::from(move |player: String| {
            selection.set(Selection {
                player,
                team: String::new(),
                ..(*selection).clone()
            });
        })
    });
    let on_team = dom::on_select_value({
        let selection = selection.clone();
        Callback::from(move |team: String| {
            selection.set(Selection {
                team,
                ..(*selection).clone()
            });
        })
    });
    let on_cards_per_box = dom::on_quantity_value({
        let selection = selection.clone();
        Callback::from(move |cards_per_box: u32| {
            selection.set(Selection {
                cards_per_box,
                ..(*selection).clone()
            });
        })
    });
    let on_boxes_opened = dom::on_quantity_value({
        let selection = selection.clone();
        Callback::from(move |boxes_opened: u32| {
            selection.set(Selection {
                boxes_opened,
                ..(*selection).clone()
            });
        })
    });
    let on_boxes_per_case = dom::on_quantity_value({
        let selection = selection.clone();
        Callback::from(move |boxes_per_case: u32| {
            selection.set(Selection {
                boxes_per_case,
                ..(*selection).clone()
            });
        })
    });

    html! {
        <main class="page" data-testid="dynasty-screen">
            <header class="page-header">
                <div>
                    <div class="brand">{ "BREAKVAULT" }</div>
                    <h1>{ "Break Calculator" }</h1>
                    <p class="page-blurb">{ "Checklist-based odds \u{2022} Updates instantly" }</p>
                </div>
                <a
                    class="btn btn-accent"
                    href="https://www.instagram.com/breakvault"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { "Follow Breakvault" }
                </a>
            </header>

            <div class="card-grid">
                <Card title="Inputs">
                    <Field label="Player">
                        <select
                            class="input"
                            onchange={on_player}
                            data-testid="player-select"
                        >
                            { for props.dataset.players.iter().map(|player| html! {
                                <option
                                    value={player.clone()}
                                    selected={*player == current.player}
                                >
                                    { player }
                                </option>
                            }) }
                        </select>
                    </Field>

                    <Field label="Team (optional)">
                        <select
                            class="input"
                            onchange={on_team}
                            data-testid="team-select"
                        >
                            <option value="" selected={current.team.is_empty()}>
                                { "All teams" }
                            </option>
                            { for teams.iter().map(|team| html! {
                                <option
                                    value={team.clone()}
                                    selected={*team == current.team}
                                >
                                    { team }
                                </option>
                            }) }
                        </select>
                    </Field>

                    <div class="field-row">
                        <Field label="Cards per box">
                            <input
                                class="input"
                                type="number"
                                min="1"
                                value={current.cards_per_box.to_string()}
                                oninput={on_cards_per_box}
                                data-testid="cards-per-box"
                            />
                        </Field>
                        <Field label="Boxes opened">
                            <input
                                class="input"
                                type="number"
                                min="1"
                                value={current.boxes_opened.to_string()}
                                oninput={on_boxes_opened}
                                data-testid="boxes-opened"
                            />
                        </Field>
                        <Field label="Boxes per case">
                            <input
                                class="input"
                                type="number"
                                min="1"
                                value={current.boxes_per_case.to_string()}
                                oninput={on_boxes_per_case}
                                data-testid="boxes-per-case"
                            />
                        </Field>
                    </div>

                    <p class="field-hint">
                        { "Leave Team as \u{201c}All teams\u{201d} to calculate player odds across every team." }
                    </p>
                </Card>

                <Card title="Outputs">
                    <StatRow
                        label="Matching checklist lines"
                        value={report.matching_lines.to_string()}
                        desc="How many checklist rows match your selection."
                    />
                    <StatRow
                        label="Total cards printed (player/team)"
                        value={group_thousands(report.selection_total)}
                        desc="Estimated print-run for your selection across all variations."
                    />
                    <StatRow
                        label="Product total print-run"
                        value={group_thousands(report.product_total)}
                        desc="Estimated total print-run of the full product (denominator)."
                    />
                    <StatRow
                        label="Odds per hit"
                        value={odds_cell(report.p_hit)}
                        desc="Chance a single pulled card is your player/team."
                    />
                    <StatRow
                        label="Odds per box"
                        value={odds_cell(report.p_box)}
                        desc="Chance you hit at least one across Cards per box."
                    />
                    <StatRow
                        label="Odds in opened boxes"
                        value={odds_cell(report.p_opened)}
                        desc="Chance you hit at least one across Boxes opened."
                    />
                    <StatRow
                        label="Odds per case"
                        value={odds_cell(report.p_case)}
                        desc="Chance you hit at least one in one full case."
                    />
                </Card>
            </div>

            <Card title="Variation breakdown">
                { variation_table(&report) }
            </Card>
        </main>
    }
}

fn odds_cell(p: f64) -> String {
    format!("{} \u{2022} {}", pct(p), one_in(p))
}

fn variation_table(report: &OddsReport) -> Html {
    html! {
        <div class="table-scroll">
            <table class="variation-table" data-testid="variation-table">
                <thead>
                    <tr>
                        <th>{ "Variation" }</th>
                        <th>{ "Estimated print-run" }</th>
                        <th>{ "Odds per hit" }</th>
                        <th>{ "Odds per box" }</th>
                        <th>{ "Odds in opened boxes" }</th>
                        <th>{ "Meaning" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for report.tiers.iter().map(|tier| html! {
                        <tr>
                            <td class="tier-label">{ tier.tier.label() }</td>
                            <td>{ group_thousands(tier.print_run) }</td>
                            <td>{ odds_cell(tier.p_hit) }</td>
                            <td>{ pct(tier.p_box) }</td>
                            <td>{ pct(tier.p_opened) }</td>
                            <td class="tier-meaning">
                                { format!(
                                    "Chance of pulling the {} version of the selected player/team.",
                                    tier.tier.label()
                                ) }
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
