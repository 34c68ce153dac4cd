use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::calculator::{self, DiscountQuote};
use crate::config;

/// Result panel lifecycle. `Entering` is the first frame at opacity 0 before
/// the slide-in transition starts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum ResultPanel {
    #[default]
    Hidden,
    Entering(DiscountQuote),
    Shown(DiscountQuote),
}

impl ResultPanel {
    fn style(&self) -> &'static str {
        match self {
            ResultPanel::Hidden => "display: none;",
            ResultPanel::Entering(_) => {
                "display: block; transition: opacity 0.5s ease, transform 0.5s ease; opacity: 0; transform: translateY(20px);"
            }
            ResultPanel::Shown(_) => {
                "display: block; transition: opacity 0.5s ease, transform 0.5s ease; opacity: 1; transform: translateY(0);"
            }
        }
    }

    fn quote(&self) -> Option<DiscountQuote> {
        match self {
            ResultPanel::Hidden => None,
            ResultPanel::Entering(q) | ResultPanel::Shown(q) => Some(*q),
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            warn!("alert() failed: {}", message);
        }
    }
}

#[function_component(DiscountCalculator)]
pub fn discount_calculator() -> Html {
    // Uncontrolled. Partial number text such as "1e" reads back as "".
    let budget_ref = use_node_ref();
    let panel = use_state(ResultPanel::default);

    let calculate = {
        let budget_ref = budget_ref.clone();
        let panel = panel.clone();
        Callback::from(move |_: ()| {
            let budget = budget_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            match calculator::quote(&budget) {
                Ok(quote) => {
                    debug!("Discount quote for {}: final {}", quote.original, quote.final_amount);
                    panel.set(ResultPanel::Entering(quote));
                    let setter = panel.setter();
                    Timeout::new(config::RESULT_REVEAL_DELAY_MS, move || {
                        setter.set(ResultPanel::Shown(quote));
                    })
                    .forget();
                }
                Err(e) => alert(&e.to_string()),
            }
        })
    };

    let on_click = {
        let calculate = calculate.clone();
        Callback::from(move |_: MouseEvent| calculate.emit(()))
    };

    let on_keypress = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            calculate.emit(());
        }
    });

    let (original, discount, final_amount) = panel
        .quote()
        .map(|q| q.formatted())
        .unwrap_or_default();

    html! {
        <div class="calculator-card">
            <div class="calculator-input">
                <label for="calculatorBudget">{"Seu orçamento mensal (R$)"}</label>
                <input type="number" id="calculatorBudget" placeholder="Ex: 5000" min="1000"
                    ref={budget_ref}
                    onkeypress={on_keypress} />
                <button id="calculateDiscount" class="btn btn-primary" onclick={on_click}>
                    {"Calcular Desconto"}
                </button>
            </div>
            <div id="discountResult" class="discount-result" style={panel.style()}>
                <div class="result-row">
                    <span>{"Valor original:"}</span>
                    <span id="originalValue">{ original }</span>
                </div>
                <div class="result-row discount">
                    <span>{"Desconto (15%):"}</span>
                    <span id="discountValue">{ discount }</span>
                </div>
                <div class="result-row total">
                    <span>{"Valor final:"}</span>
                    <span id="finalValue">{ final_amount }</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_keeps_its_transition_between_calculations() {
        let quote = DiscountQuote::for_budget(2000.0);
        for panel in [ResultPanel::Entering(quote), ResultPanel::Shown(quote)] {
            assert!(panel.style().contains("transition: opacity 0.5s ease"), "{panel:?}");
            assert_eq!(panel.quote(), Some(quote));
        }
        assert_eq!(ResultPanel::Hidden.style(), "display: none;");
        assert_eq!(ResultPanel::Hidden.quote(), None);
    }
}
