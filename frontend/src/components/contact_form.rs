use std::collections::BTreeMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::validation::{self, Field, FieldError, FormDraft};

const SUBMIT_LABEL: &str = "Enviar Mensagem";
const SENDING_LABEL: &str = "Enviando...";
const ERROR_BORDER: &str = "border-color: #ef4444;";
const DEFAULT_BORDER: &str = "border-color: #e5e7eb;";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub values: FormDraft,
    pub errors: BTreeMap<Field, FieldError>,
    pub phase: SubmitPhase,
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.values.name,
            Field::Email => &self.values.email,
            Field::Phone => &self.values.phone,
            Field::Budget => &self.values.budget,
            Field::Message => &self.values.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.values.name,
            Field::Email => &mut self.values.email,
            Field::Phone => &mut self.values.phone,
            Field::Budget => &mut self.values.budget,
            Field::Message => &mut self.values.message,
        }
    }

    /// What the submit handler reads off the form.
    pub fn draft(&self) -> FormDraft {
        let v = &self.values;
        FormDraft::capture(&v.name, &v.email, &v.phone, &v.budget, &v.message)
    }

    pub fn error_text(&self, field: Field) -> String {
        self.errors.get(&field).map(ToString::to_string).unwrap_or_default()
    }

    pub fn border(&self, field: Field) -> &'static str {
        if self.errors.contains_key(&field) {
            ERROR_BORDER
        } else {
            DEFAULT_BORDER
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => SUBMIT_LABEL,
            SubmitPhase::Sending => SENDING_LABEL,
        }
    }
}

pub enum FormAction {
    Edit(Field, String),
    ShowError(FieldError),
    ClearError(Field),
    ClearAll,
    BeginSending,
    /// Simulated send finished: fields reset, button restored.
    Finish,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => *next.value_mut(field) = value,
            FormAction::ShowError(error) => {
                next.errors.insert(error.field(), error);
            }
            FormAction::ClearError(field) => {
                next.errors.remove(&field);
            }
            FormAction::ClearAll => next.errors.clear(),
            FormAction::BeginSending => next.phase = SubmitPhase::Sending,
            FormAction::Finish => {
                next.values = FormDraft::default();
                next.phase = SubmitPhase::Idle;
            }
        }
        next.into()
    }
}

/// Shows an error and schedules its removal. Earlier timers are left running,
/// so an older one may clear a newer error for the same field.
fn show_error(dispatcher: &UseReducerDispatcher<FormState>, error: FieldError) {
    let field = error.field();
    debug!("{} error: {}", field.id(), error);
    dispatcher.dispatch(FormAction::ShowError(error));

    let dispatcher = dispatcher.clone();
    Timeout::new(config::ERROR_CLEAR_MS, move || {
        dispatcher.dispatch(FormAction::ClearError(field));
    })
    .forget();
}

fn log_submission(draft: &FormDraft) {
    match serde_wasm_bindgen::to_value(draft) {
        Ok(value) => gloo_console::log!("Dados do formulário:", value),
        Err(e) => gloo_console::error!("Could not serialize form data:", e.to_string()),
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_success: Callback<()>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let state = use_reducer(FormState::default);
    let budget_ref = use_node_ref();

    let on_input = |field: Field| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let on_message_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(Field::Message, input.value()));
        })
    };

    let on_email_blur = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(error) = validation::validate_email_on_blur(&input.value()) {
                show_error(&dispatcher, error);
            }
        })
    };

    let on_phone_blur = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(error) = validation::validate_phone_on_blur(&input.value()) {
                show_error(&dispatcher, error);
            }
        })
    };

    let on_submit = {
        let state = state.clone();
        let budget_ref = budget_ref.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // A second submit while sending is ignored; the button is disabled.
            if state.phase == SubmitPhase::Sending {
                return;
            }

            let dispatcher = state.dispatcher();
            dispatcher.dispatch(FormAction::ClearAll);

            let draft = state.draft();
            let errors = validation::validate_submission(&draft);
            if !errors.is_empty() {
                debug!("Contact form rejected with {} error(s)", errors.len());
                for error in errors {
                    show_error(&dispatcher, error);
                }
                return;
            }

            dispatcher.dispatch(FormAction::BeginSending);
            let on_success = on_success.clone();
            let budget_ref = budget_ref.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                dispatcher.dispatch(FormAction::Finish);
                if let Some(input) = budget_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                on_success.emit(());
                log_submission(&draft);
            });
        })
    };

    let sending = state.phase == SubmitPhase::Sending;

    html! {
        <form id="contactForm" class="contact-form" onsubmit={on_submit} novalidate={true}>
            <div class="form-group">
                <label for="name">{"Nome *"}</label>
                <input type="text" id="name" name="name"
                    value={state.value(Field::Name).to_string()}
                    style={state.border(Field::Name)}
                    oninput={on_input(Field::Name)} />
                <span class="error-message" id={Field::Name.error_id()}>{ state.error_text(Field::Name) }</span>
            </div>
            <div class="form-group">
                <label for="email">{"E-mail *"}</label>
                <input type="email" id="email" name="email"
                    value={state.value(Field::Email).to_string()}
                    style={state.border(Field::Email)}
                    oninput={on_input(Field::Email)}
                    onblur={on_email_blur} />
                <span class="error-message" id={Field::Email.error_id()}>{ state.error_text(Field::Email) }</span>
            </div>
            <div class="form-group">
                <label for="phone">{"Telefone *"}</label>
                <input type="tel" id="phone" name="phone"
                    value={state.value(Field::Phone).to_string()}
                    style={state.border(Field::Phone)}
                    oninput={on_input(Field::Phone)}
                    onblur={on_phone_blur} />
                <span class="error-message" id={Field::Phone.error_id()}>{ state.error_text(Field::Phone) }</span>
            </div>
            <div class="form-group">
                <label for="budget">{"Orçamento mensal (R$)"}</label>
                // No `value` binding: partial number text such as "1e" reads
                // back as "" and must not be written into the input.
                <input type="number" id="budget" name="budget" min="0" placeholder="Ex: 5000"
                    ref={budget_ref}
                    style={state.border(Field::Budget)}
                    oninput={on_input(Field::Budget)} />
                <span class="error-message" id={Field::Budget.error_id()}>{ state.error_text(Field::Budget) }</span>
            </div>
            <div class="form-group">
                <label for="message">{"Mensagem *"}</label>
                <textarea id="message" name="message" rows="5"
                    value={state.value(Field::Message).to_string()}
                    style={state.border(Field::Message)}
                    oninput={on_message_input}></textarea>
                <span class="error-message" id={Field::Message.error_id()}>{ state.error_text(Field::Message) }</span>
            </div>
            <button type="submit" class="btn btn-primary btn-full" disabled={sending}>
                { state.submit_label() }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: FormState, action: FormAction) -> FormState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn filled() -> FormState {
        let mut state = FormState::default();
        for (field, value) in [
            (Field::Name, "Ana Souza"),
            (Field::Email, "ana@loja.com"),
            (Field::Phone, "(21) 98888-7777"),
            (Field::Budget, ""),
            (Field::Message, "Preciso de ajuda com anúncios pagos."),
        ] {
            state = reduce(state, FormAction::Edit(field, value.to_string()));
        }
        state
    }

    #[test]
    fn errors_are_shown_and_cleared_per_field() {
        let state = reduce(FormState::default(), FormAction::ShowError(FieldError::EmailInvalid));
        let state = reduce(state, FormAction::ShowError(FieldError::PhoneRequired));
        assert_eq!(state.error_text(Field::Email), "Por favor, insira um e-mail válido");
        assert_eq!(state.border(Field::Email), ERROR_BORDER);

        let state = reduce(state, FormAction::ClearError(Field::Email));
        assert_eq!(state.error_text(Field::Email), "");
        assert_eq!(state.border(Field::Email), DEFAULT_BORDER);
        assert_eq!(state.border(Field::Phone), ERROR_BORDER);

        let state = reduce(state, FormAction::ClearAll);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn clearing_a_field_twice_is_harmless() {
        let state = reduce(FormState::default(), FormAction::ShowError(FieldError::NameTooShort));
        let state = reduce(state, FormAction::ClearError(Field::Name));
        let state = reduce(state, FormAction::ClearError(Field::Name));
        assert!(state.errors.is_empty());
    }

    #[test]
    fn short_message_scenario_keeps_form_idle() {
        let mut state = filled();
        state = reduce(state, FormAction::Edit(Field::Name, "Jo".into()));
        state = reduce(state, FormAction::Edit(Field::Email, "a@b.co".into()));
        state = reduce(state, FormAction::Edit(Field::Phone, "11999999999".into()));
        state = reduce(state, FormAction::Edit(Field::Message, "short".into()));

        let errors = validation::validate_submission(&state.draft());
        assert_eq!(errors, vec![FieldError::MessageTooShort]);
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert_eq!(state.submit_label(), "Enviar Mensagem");
    }

    #[test]
    fn successful_send_resets_values_and_restores_button() {
        let state = filled();
        assert!(validation::validate_submission(&state.draft()).is_empty());

        let sending = reduce(state, FormAction::BeginSending);
        assert_eq!(sending.submit_label(), "Enviando...");

        let done = reduce(sending, FormAction::Finish);
        assert_eq!(done.phase, SubmitPhase::Idle);
        assert_eq!(done.values, FormDraft::default());
        assert_eq!(done.submit_label(), "Enviar Mensagem");
    }

    #[test]
    fn draft_trims_text_but_not_budget() {
        let state = reduce(FormState::default(), FormAction::Edit(Field::Name, "  Ana  ".into()));
        let state = reduce(state, FormAction::Edit(Field::Budget, " 2000 ".into()));
        let draft = state.draft();
        assert_eq!(draft.name, "Ana");
        assert_eq!(draft.budget, " 2000 ");
    }

    #[test]
    fn partial_exponent_budget_settles_on_the_final_value() {
        let mut state = filled();
        for typed in ["1", "", "1e3"] {
            state = reduce(state, FormAction::Edit(Field::Budget, typed.into()));
        }
        assert_eq!(state.value(Field::Budget), "1e3");
        assert!(validation::validate_submission(&state.draft()).is_empty());
    }
}
