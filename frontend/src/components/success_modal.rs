use wasm_bindgen::JsValue;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

impl ModalState {
    pub fn display(self) -> &'static str {
        match self {
            ModalState::Hidden => "display: none;",
            ModalState::Visible => "display: block;",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub state: ModalState,
    pub on_close: Callback<()>,
}

/// Confirmation shown after a contact form submission. Closes on the close
/// button or a click on the backdrop itself.
#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let backdrop_ref = backdrop_ref.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let target: Option<JsValue> = e.target().map(Into::into);
            let backdrop: Option<JsValue> = backdrop_ref.get().map(Into::into);
            if target.is_some() && target == backdrop {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id="successModal" class="modal" ref={backdrop_ref} style={props.state.display()} onclick={on_backdrop_click}>
            <div class="modal-content">
                <span class="close" onclick={on_close_click}>{"×"}</span>
                <div class="modal-body">
                    <i class="fas fa-check-circle"></i>
                    <h3>{"Mensagem Enviada!"}</h3>
                    <p>{"Obrigado pelo contato! Nossa equipe retornará em até 24 horas."}</p>
                </div>
            </div>
        </div>
    }
}
