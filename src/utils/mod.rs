use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::{
    api::error,
    constants::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, PASSWORD_SYMBOLS},
};

/// Runs the model's validators and reports the first failure, walking `fields`
/// in order so earlier rules win over later ones.
pub fn validate_in_order<T: Validate>(
    model: &T,
    fields: &[&str],
) -> Result<(), error::SystemError> {
    let Err(errors) = model.validate() else {
        return Ok(());
    };

    let field_errors = errors.field_errors();
    let first = fields
        .iter()
        .filter_map(|field| field_errors.get(*field).and_then(|errs| errs.first()))
        .next();

    let message: Cow<'static, str> = match first {
        Some(err) => err.message.clone().unwrap_or_else(|| err.code.clone()),
        None => errors.to_string().into(),
    };

    Err(error::SystemError::Validation(message))
}

/// Password rules checked at account creation: length first, then one
/// uppercase letter, one digit and one symbol, each reported on its own.
pub fn validate_password_policy(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(ValidationError::new("password_length").with_message(
            format!("Password not within {PASSWORD_MIN_LEN}-{PASSWORD_MAX_LEN} characters").into(),
        ));
    }

    if !password.chars().any(char::is_uppercase) {
        return Err(ValidationError::new("password_uppercase")
            .with_message("Password requires an uppercase character".into()));
    }

    if !password.chars().any(char::is_numeric) {
        return Err(ValidationError::new("password_digit")
            .with_message("Password requires a numerical value".into()));
    }

    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(&c)) {
        let symbols: String = PASSWORD_SYMBOLS.iter().collect();
        return Err(ValidationError::new("password_symbol")
            .with_message(format!("Password requires one of these symbols [{symbols}]").into()));
    }

    Ok(())
}

/// Orders a pair of usernames the way friendship rows are stored.
pub fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

pub fn group_name<S: AsRef<str>>(admin: &str, friends: &[S]) -> String {
    std::iter::once(admin).chain(friends.iter().map(AsRef::as_ref)).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(password: &str) -> String {
        validate_password_policy(password)
            .err()
            .and_then(|e| e.message)
            .map(|m| m.into_owned())
            .unwrap_or_default()
    }

    #[test]
    fn password_rules_report_the_first_missing_class() {
        assert_eq!(message_of("Ab1!"), "Password not within 8-25 characters");
        assert_eq!(message_of("Aa1!Aa1!Aa1!Aa1!Aa1!Aa1!Aa"), "Password not within 8-25 characters");
        assert_eq!(message_of("abcdefg1!"), "Password requires an uppercase character");
        assert_eq!(message_of("Abcdefgh!"), "Password requires a numerical value");
        assert_eq!(
            message_of("Abcdefgh1"),
            "Password requires one of these symbols [!@#$%^&*-_+=]"
        );
        assert!(validate_password_policy("dfhwIof7*").is_ok());
        assert!(validate_password_policy("Abcdefg\u{663}!").is_ok());
    }

    #[test]
    fn canonical_pair_is_order_independent() {
        assert_eq!(canonical_pair("bob", "alice"), ("alice", "bob"));
        assert_eq!(canonical_pair("alice", "bob"), ("alice", "bob"));
    }

    #[test]
    fn group_name_lists_admin_first() {
        assert_eq!(group_name("alice", &["bob", "carol"]), "alice, bob, carol");
        assert_eq!(group_name::<&str>("alice", &[]), "alice");
    }
}
