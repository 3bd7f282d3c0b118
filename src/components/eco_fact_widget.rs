use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::eco_fact::{FactRequestState, FactStatus, InFlightGuard, WebFactFetcher};

#[function_component(EcoFactWidget)]
pub fn eco_fact_widget() -> Html {
    let fact = use_reducer(FactRequestState::default);
    let guard = use_state(InFlightGuard::default);

    let generate = {
        let dispatcher = fact.dispatcher();
        let guard = (*guard).clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let dispatcher = dispatcher.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let fetcher = WebFactFetcher::from_config();
                let started = fetcher
                    .trigger(&guard, move |action| dispatcher.dispatch(action))
                    .await;
                if !started {
                    debug!("Eco-fact already generating, ignoring click");
                }
            });
        })
    };

    let busy = fact.is_in_flight() || guard.is_held();
    let text_class = match fact.status {
        FactStatus::Idle => "eco-fact__text",
        FactStatus::InFlight => "eco-fact__text pending",
        FactStatus::Succeeded => "eco-fact__text fresh",
        FactStatus::Failed => "eco-fact__text failed",
    };

    html! {
        <section id="eco-fact" class="eco-fact">
            <div class="eco-fact__card">
                <h2>{"Eco-Fact of the Day"}</h2>
                <p class={text_class}>{ fact.text.clone() }</p>
                <button class="cta-button" onclick={generate} disabled={busy}>
                    { if busy { "Generating..." } else { "Get a New Eco-Fact ✨" } }
                </button>
            </div>
            <style>
                {r#"
                .eco-fact {
                    padding: 5rem 1.5rem;
                    background: #ecfdf5;
                    display: flex;
                    justify-content: center;
                }
                .eco-fact__card {
                    max-width: 640px;
                    width: 100%;
                    text-align: center;
                    background: #ffffff;
                    border-radius: 24px;
                    padding: 2.5rem 2rem;
                    box-shadow: 0 12px 30px rgba(16, 185, 129, 0.15);
                }
                .eco-fact__card h2 {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                    color: #047857;
                }
                .eco-fact__text {
                    font-size: 1.2rem;
                    line-height: 1.6;
                    min-height: 3.2em;
                    color: #374151;
                    margin-bottom: 2rem;
                }
                .eco-fact__text.pending {
                    color: #6b7280;
                    font-style: italic;
                }
                .eco-fact__text.failed {
                    color: #b91c1c;
                }
                .eco-fact__card .cta-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                "#}
            </style>
        </section>
    }
}
