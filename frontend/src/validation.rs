//! Contact form rules.
//!
//! Submit-time checks cover presence, minimum lengths, the email/phone
//! patterns and the minimum budget. Blur-time checks only run the email and
//! phone patterns; the two depths are intentionally not unified.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[()\s+0-9-]{10,}$").unwrap());

const NAME_MIN_LEN: usize = 2;
const MESSAGE_MIN_LEN: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Budget,
    Message,
}

impl Field {
    /// DOM id of the input.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Budget => "budget",
            Field::Message => "message",
        }
    }

    /// DOM id of the element holding this field's error text.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Phone => "phoneError",
            Field::Budget => "budgetError",
            Field::Message => "messageError",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Nome é obrigatório")]
    NameRequired,
    #[error("Nome deve ter pelo menos 2 caracteres")]
    NameTooShort,
    #[error("E-mail é obrigatório")]
    EmailRequired,
    #[error("Por favor, insira um e-mail válido")]
    EmailInvalid,
    #[error("Telefone é obrigatório")]
    PhoneRequired,
    #[error("Por favor, insira um telefone válido")]
    PhoneInvalid,
    #[error("Mensagem é obrigatória")]
    MessageRequired,
    #[error("Mensagem deve ter pelo menos 10 caracteres")]
    MessageTooShort,
    #[error("Orçamento mínimo é R$ 1.000")]
    BudgetBelowMinimum,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired | FieldError::NameTooShort => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::PhoneRequired | FieldError::PhoneInvalid => Field::Phone,
            FieldError::MessageRequired | FieldError::MessageTooShort => Field::Message,
            FieldError::BudgetBelowMinimum => Field::Budget,
        }
    }
}

/// Values captured from the form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub budget: String,
    pub message: String,
}

impl FormDraft {
    /// Builds the draft the way the form reads it: every text field trimmed,
    /// budget left as typed.
    pub fn capture(name: &str, email: &str, phone: &str, budget: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            budget: budget.to_string(),
            message: message.trim().to_string(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

// Browsers measure `.length` in UTF-16 code units.
fn js_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Numeric coercion of a text input the way `Number(text)` does it.
///
/// Blank text is zero. Anything that is not a plain decimal literal or an
/// `Infinity` spelling is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust also accepts "inf" and "nan", which the browser does not.
    if text.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Validates a full submission. Errors come back in form order.
pub fn validate_submission(draft: &FormDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.name.is_empty() {
        errors.push(FieldError::NameRequired);
    } else if js_length(&draft.name) < NAME_MIN_LEN {
        errors.push(FieldError::NameTooShort);
    }

    if draft.email.is_empty() {
        errors.push(FieldError::EmailRequired);
    } else if !is_valid_email(&draft.email) {
        errors.push(FieldError::EmailInvalid);
    }

    if draft.phone.is_empty() {
        errors.push(FieldError::PhoneRequired);
    } else if !is_valid_phone(&draft.phone) {
        errors.push(FieldError::PhoneInvalid);
    }

    if draft.message.is_empty() {
        errors.push(FieldError::MessageRequired);
    } else if js_length(&draft.message) < MESSAGE_MIN_LEN {
        errors.push(FieldError::MessageTooShort);
    }

    // NaN compares false, so non-numeric budgets pass
    if !draft.budget.is_empty() && coerce_number(&draft.budget) < config::MIN_BUDGET {
        errors.push(FieldError::BudgetBelowMinimum);
    }

    errors
}

pub fn validate_email_on_blur(value: &str) -> Option<FieldError> {
    (!value.is_empty() && !is_valid_email(value)).then_some(FieldError::EmailInvalid)
}

pub fn validate_phone_on_blur(value: &str) -> Option<FieldError> {
    (!value.is_empty() && !is_valid_phone(value)).then_some(FieldError::PhoneInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> FormDraft {
        FormDraft::capture(
            "Maria Silva",
            "maria@empresa.com.br",
            "(11) 99999-9999",
            "5000",
            "Quero aumentar minhas vendas online.",
        )
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate_submission(&valid_draft()).is_empty());
    }

    #[test]
    fn email_pattern() {
        for ok in ["a@b.co", "nome.sobrenome@dominio.com.br", "x@y.z"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in ["", "plain", "a@b", "a@.", "a b@c.d", "a@b@c.d", "@b.co", "a@b.", "a@.co"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn phone_pattern() {
        assert!(is_valid_phone("11999999999"));
        assert!(is_valid_phone("+55 (11) 9999-9999"));
        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone("11 9999-99x9"));
    }

    #[test]
    fn short_name_and_message_scenario() {
        let draft = FormDraft::capture("Jo", "a@b.co", "11999999999", "", "short");
        assert_eq!(validate_submission(&draft), vec![FieldError::MessageTooShort]);
        assert_eq!(FieldError::MessageTooShort.to_string(), "Mensagem deve ter pelo menos 10 caracteres");
    }

    #[test]
    fn required_fields_report_in_form_order() {
        let errors = validate_submission(&FormDraft::default());
        assert_eq!(
            errors,
            vec![
                FieldError::NameRequired,
                FieldError::EmailRequired,
                FieldError::PhoneRequired,
                FieldError::MessageRequired,
            ]
        );
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let draft = FormDraft::capture("   ", " ", "\t", "", "  ");
        assert_eq!(validate_submission(&draft).len(), 4);
    }

    #[test]
    fn one_character_name_is_too_short() {
        let mut draft = valid_draft();
        draft.name = "J".into();
        assert_eq!(validate_submission(&draft), vec![FieldError::NameTooShort]);
    }

    #[test]
    fn budget_below_minimum_is_rejected() {
        for budget in ["999.99", "0", "-5", " 500 ", "   "] {
            let mut draft = valid_draft();
            draft.budget = budget.into();
            assert_eq!(
                validate_submission(&draft),
                vec![FieldError::BudgetBelowMinimum],
                "budget {budget:?}"
            );
        }
    }

    #[test]
    fn budget_at_minimum_or_non_numeric_passes() {
        for budget in ["", "1000", "1e3", "abc", "inf", "Infinity"] {
            let mut draft = valid_draft();
            draft.budget = budget.into();
            assert!(validate_submission(&draft).is_empty(), "budget {budget:?}");
        }
    }

    #[test]
    fn coerce_number_follows_browser_rules() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number(" 42 "), 42.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_number("nan").is_nan());
        assert!(coerce_number("12abc").is_nan());
    }

    #[test]
    fn blur_checks_skip_empty_values_and_length_rules() {
        assert_eq!(validate_email_on_blur(""), None);
        assert_eq!(validate_email_on_blur("nope"), Some(FieldError::EmailInvalid));
        assert_eq!(validate_email_on_blur("a@b.co"), None);
        assert_eq!(validate_phone_on_blur(""), None);
        assert_eq!(validate_phone_on_blur("123"), Some(FieldError::PhoneInvalid));
    }

    #[test]
    fn errors_map_to_their_fields() {
        assert_eq!(FieldError::BudgetBelowMinimum.field(), Field::Budget);
        assert_eq!(FieldError::PhoneInvalid.field().error_id(), "phoneError");
    }

    #[test]
    fn message_length_counts_utf16_units() {
        let mut draft = valid_draft();
        // five chars, ten code units
        draft.message = "🚀🚀🚀🚀🚀".into();
        assert!(validate_submission(&draft).is_empty());
    }
}
