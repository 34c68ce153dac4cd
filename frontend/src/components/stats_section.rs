use log::{debug, error};
use stylist::css;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::counter::{self, StatItem};
use crate::watcher::{VisibilityWatcher, WatchMode, WatchOptions};

pub struct StatDefinition {
    pub target: u32,
    pub label: &'static str,
}

pub static STATS: [StatDefinition; 4] = [
    StatDefinition { target: 150, label: "Clientes Atendidos" },
    StatDefinition { target: 300, label: "% Aumento Médio" },
    StatDefinition { target: 5, label: "Anos de Experiência" },
    StatDefinition { target: 98, label: "% Satisfação" },
];

/// Statistics band placed right before the contact section. Numbers count up
/// the first time at least half of the section is on screen.
#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let section_ref = use_node_ref();
    let values = use_state(|| vec![0u32; STATS.len()]);

    {
        let section_ref = section_ref.clone();
        let setter = values.setter();
        use_effect_with_deps(
            move |_| {
                let options = WatchOptions {
                    threshold: config::STATS_THRESHOLD,
                    root_margin: None,
                    mode: WatchMode::Once,
                };
                let watcher = VisibilityWatcher::new(options, move |_: Element| {
                    debug!("Stats section visible, starting counters");
                    let setter = setter.clone();
                    let targets = STATS.iter().map(|s| s.target).collect();
                    counter::animate(targets, config::COUNTER_DURATION_MS, move |items: Vec<StatItem>| {
                        setter.set(items.iter().map(|i| i.current).collect());
                    });
                });

                let watcher = match watcher {
                    Ok(watcher) => {
                        if let Some(section) = section_ref.cast::<Element>() {
                            watcher.observe(&section);
                        }
                        Some(watcher)
                    }
                    Err(e) => {
                        error!("Could not observe stats section: {:?}", e);
                        None
                    }
                };
                move || drop(watcher)
            },
            (),
        );
    }

    let class = css!(
        r#"
        background: var(--gradient-primary);
        color: white;
        padding: 60px 0;
        text-align: center;

        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 2rem;
        }
    "#
    );

    html! {
        <section class={classes!("stats", class)} ref={section_ref}>
            <div class="container">
                <div class="stats-grid">
                    { for STATS.iter().zip(values.iter()).map(|(stat, value)| html! {
                        <div class="stat-item">
                            <div class="stat-number" data-target={stat.target.to_string()}>{ value.to_string() }</div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
