use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderPhase {
    #[default]
    Pending,
    Visible,
    Fading,
    Gone,
}

fn document_loaded() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false)
}

/// Full-screen overlay shown once every page resource has loaded, then faded
/// out and removed.
#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    let phase = use_state_eq(LoaderPhase::default);
    let started = use_mut_ref(|| false);

    let start = {
        let phase = phase.clone();
        Callback::from(move |_: ()| {
            if started.replace(true) {
                return;
            }
            debug!("Page loaded, showing loader");
            phase.set(LoaderPhase::Visible);

            let setter = phase.setter();
            Timeout::new(config::LOADER_HOLD_MS, move || {
                setter.set(LoaderPhase::Fading);
                Timeout::new(config::LOADER_FADE_MS, move || setter.set(LoaderPhase::Gone)).forget();
            })
            .forget();
        })
    };

    {
        let start = start.clone();
        use_event_with_window("load", move |_: Event| start.emit(()));
    }

    // The module may start after `load` already fired.
    {
        use_effect_with_deps(
            move |_| {
                if document_loaded() {
                    start.emit(());
                }
                || ()
            },
            (),
        );
    }

    let opacity = match *phase {
        LoaderPhase::Pending | LoaderPhase::Gone => return html! {},
        LoaderPhase::Visible => 1,
        LoaderPhase::Fading => 0,
    };

    html! {
        <div class="page-loader" style={format!(
            "position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: white; \
             display: flex; justify-content: center; align-items: center; z-index: 9999; \
             transition: opacity 0.5s ease; opacity: {};",
            opacity
        )}>
            <style>
                {r#"
                    @keyframes spin {
                        0% { transform: rotate(0deg); }
                        100% { transform: rotate(360deg); }
                    }
                "#}
            </style>
            <div style="text-align: center;">
                <div style="width: 50px; height: 50px; border: 3px solid #f3f3f3; border-top: 3px solid var(--primary-color); border-radius: 50%; animation: spin 1s linear infinite; margin: 0 auto 20px;"></div>
                <p style="color: var(--text-secondary);">{"Carregando..."}</p>
            </div>
        </div>
    }
}
