//! Form validation.
//!
//! Validators never fail: they return the offending fields mapped to a
//! localised message, and an empty map means the form is good.

use std::collections::BTreeMap;

use crate::i18n::{Lang, translate};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_CLIENT_NAME_LEN: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, field: &'static str, lang: Lang, key: &str) {
        self.0.insert(field, translate(lang, key, &[]));
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

fn check_email(errors: &mut FieldErrors, lang: Lang, email: &str) {
    if email.is_empty() {
        errors.insert("email", lang, "auth.validation.emailRequired");
    } else if !validate_email(email) {
        errors.insert("email", lang, "auth.validation.emailInvalid");
    }
}

fn check_password(errors: &mut FieldErrors, lang: Lang, password: &str) {
    if password.is_empty() {
        errors.insert("password", lang, "auth.validation.passwordRequired");
    } else if !validate_password(password) {
        errors.insert("password", lang, "auth.validation.passwordTooShort");
    }
}

pub fn validate_login(lang: Lang, email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, lang, email);
    check_password(&mut errors, lang, password);
    errors
}

pub fn validate_signup(lang: Lang, name: &str, email: &str, password: &str, confirm: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if name.trim().is_empty() {
        errors.insert("name", lang, "auth.validation.nameRequired");
    }
    check_email(&mut errors, lang, email);
    check_password(&mut errors, lang, password);

    if confirm.is_empty() {
        errors.insert("confirmPassword", lang, "auth.validation.confirmRequired");
    } else if !password.is_empty() && confirm != password {
        errors.insert("confirmPassword", lang, "auth.validation.passwordMismatch");
    }
    errors
}

pub fn validate_forgot_password(lang: Lang, email: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, lang, email);
    errors
}

pub fn validate_client_name(lang: Lang, name: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if name.trim().chars().count() < MIN_CLIENT_NAME_LEN {
        errors.insert("name", lang, "clients.validation.nameTooShort");
    }
    errors
}

pub fn validate_service(lang: Lang, name: &str, duration_min: i64, price_rub: i64) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if name.trim().is_empty() {
        errors.insert("name", lang, "services.validation.nameRequired");
    }
    if duration_min <= 0 {
        errors.insert("durationMin", lang, "services.validation.durationPositive");
    }
    if price_rub < 0 {
        errors.insert("priceRub", lang, "services.validation.priceNegative");
    }
    errors
}

/// Settings form: name required, email required and well formed.
pub fn validate_profile(lang: Lang, name: &str, email: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if name.trim().is_empty() {
        errors.insert("name", lang, "settings.validation.nameRequired");
    }
    let email = email.trim();
    if email.is_empty() {
        errors.insert("email", lang, "settings.validation.emailRequired");
    } else if !validate_email(email) {
        errors.insert("email", lang, "settings.validation.emailInvalid");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        for ok in ["anna@example.com", "a.b@c.d", "x@y.co.uk"] {
            assert!(validate_email(ok), "{ok}");
        }
        for bad in ["", "anna", "@example.com", "anna@", "anna@example", "a b@c.d", "a@@c.d", "a@b@c.d", "a@.com", "a@com."] {
            assert!(!validate_email(bad), "{bad}");
        }
    }

    #[test]
    fn password_length_counts_chars() {
        assert!(!validate_password("12345"));
        assert!(validate_password("123456"));
        assert!(validate_password("пароль"));
    }

    #[test]
    fn login_errors() {
        let errors = validate_login(Lang::En, "", "123");
        assert!(!errors.is_valid());
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));

        let errors = validate_login(Lang::En, "nope", "");
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        assert!(validate_login(Lang::En, "anna@example.com", "secret1").is_valid());
    }

    #[test]
    fn signup_confirm_rules() {
        let errors = validate_signup(Lang::En, " ", "anna@example.com", "secret1", "secret2");
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));

        let errors = validate_signup(Lang::En, "Anna", "anna@example.com", "", "x");
        assert_eq!(errors.get("confirmPassword"), None);

        let errors = validate_signup(Lang::Ru, "Anna", "anna@example.com", "secret1", "");
        assert_eq!(errors.get("confirmPassword"), Some("Подтвердите пароль"));
    }

    #[test]
    fn forgot_password_only_checks_email() {
        assert!(validate_forgot_password(Lang::En, "anna@example.com").is_valid());
        assert_eq!(
            validate_forgot_password(Lang::En, "").iter().collect::<Vec<_>>(),
            vec![("email", "Email is required")]
        );
    }

    #[test]
    fn client_name_needs_two_chars() {
        assert!(!validate_client_name(Lang::En, " A ").is_valid());
        assert!(validate_client_name(Lang::En, "Ян").is_valid());
        assert_eq!(
            validate_client_name(Lang::Ru, "").get("name"),
            Some("Введите имя клиента (минимум 2 символа).")
        );
    }

    #[test]
    fn service_rules() {
        let errors = validate_service(Lang::En, "", 0, -1);
        let fields: Vec<_> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["durationMin", "name", "priceRub"]);
        assert!(validate_service(Lang::En, "Cut", 60, 0).is_valid());
    }

    #[test]
    fn profile_rules() {
        assert!(validate_profile(Lang::En, "Anna", " anna@example.com ").is_valid());
        let errors = validate_profile(Lang::Ru, "", "bad");
        assert_eq!(errors.get("name"), Some("Введите имя"));
        assert_eq!(errors.get("email"), Some("Введите корректный email"));
    }
}
