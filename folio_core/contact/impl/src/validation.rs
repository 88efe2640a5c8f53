use folio_models::contact::{ContactFormData, ValidationError, EMAIL_REGEX, MESSAGE_MIN_LENGTH};

/// Checks the contact form and returns every problem found, in the order
/// name, email, message. The subject is never checked.
///
/// Leading and trailing whitespace, including the byte order mark `U+FEFF`,
/// is ignored. The message length is counted in Unicode scalar values, so a
/// character outside the Basic Multilingual Plane (most emoji) counts once,
/// not as the two UTF-16 units a browser would count.
pub fn validate(form: &ContactFormData) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if trim(&form.name).is_empty() {
        errors.push(ValidationError::NameRequired);
    }

    if trim(&form.email).is_empty() {
        errors.push(ValidationError::EmailRequired);
    } else if !EMAIL_REGEX.is_match(&form.email) {
        errors.push(ValidationError::EmailInvalid);
    }

    let message = trim(&form.message);
    if message.is_empty() {
        errors.push(ValidationError::MessageRequired);
    } else if message.chars().count() < MESSAGE_MIN_LENGTH {
        errors.push(ValidationError::MessageTooShort);
    }

    errors
}

fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use folio_demo::contact::{ADA, ADA_WITHOUT_SUBJECT, INVALID};
    use folio_models::contact::ErrorField;
    use pretty_assertions::assert_eq;

    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactFormData {
        ContactFormData {
            name: name.into(),
            email: email.into(),
            subject: String::new(),
            message: message.into(),
        }
    }

    fn errors_for(form: &ContactFormData, field: ErrorField) -> Vec<ValidationError> {
        validate(form)
            .into_iter()
            .filter(|err| err.field() == field)
            .collect()
    }

    #[test]
    fn valid() {
        assert!(validate(&ADA).is_empty());
        assert!(validate(&ADA_WITHOUT_SUBJECT).is_empty());
    }

    #[test]
    fn everything_wrong() {
        assert_eq!(
            validate(&INVALID),
            [
                ValidationError::NameRequired,
                ValidationError::EmailInvalid,
                ValidationError::MessageTooShort,
            ]
        );
    }

    #[test]
    fn everything_missing() {
        assert_eq!(
            validate(&ContactFormData::default()),
            [
                ValidationError::NameRequired,
                ValidationError::EmailRequired,
                ValidationError::MessageRequired,
            ]
        );
    }

    #[test]
    fn name() {
        for (name, expected) in [
            ("", vec![ValidationError::NameRequired]),
            ("   ", vec![ValidationError::NameRequired]),
            ("\t\n", vec![ValidationError::NameRequired]),
            ("\u{FEFF}", vec![ValidationError::NameRequired]),
            (" \u{FEFF}\u{a0}", vec![ValidationError::NameRequired]),
            ("A", vec![]),
            ("  Ada  ", vec![]),
        ] {
            let form = form(name, "bad", "");
            assert_eq!(errors_for(&form, ErrorField::Name), expected, "{name:?}");
            // other checks still run
            assert_eq!(errors_for(&form, ErrorField::Email).len(), 1);
            assert_eq!(errors_for(&form, ErrorField::Message).len(), 1);
        }
    }

    #[test]
    fn email() {
        for (email, expected) in [
            ("", Some(ValidationError::EmailRequired)),
            ("  ", Some(ValidationError::EmailRequired)),
            ("bad", Some(ValidationError::EmailInvalid)),
            ("ada@x", Some(ValidationError::EmailInvalid)),
            ("ada@@x.com", Some(ValidationError::EmailInvalid)),
            ("ada lovelace@x.com", Some(ValidationError::EmailInvalid)),
            (" ada@x.com", Some(ValidationError::EmailInvalid)),
            ("\u{FEFF}", Some(ValidationError::EmailRequired)),
            ("ada\u{FEFF}@x.com", Some(ValidationError::EmailInvalid)),
            ("ada@x.com", None),
            ("ada.lovelace@analytical.engine.org", None),
        ] {
            let form = form("Ada", email, "Hello there, this works");
            assert_eq!(
                errors_for(&form, ErrorField::Email),
                Vec::from_iter(expected),
                "{email:?}"
            );
        }
    }

    #[test]
    fn message() {
        for (message, expected) in [
            ("", Some(ValidationError::MessageRequired)),
            ("          ", Some(ValidationError::MessageRequired)),
            ("hi", Some(ValidationError::MessageTooShort)),
            ("123456789", Some(ValidationError::MessageTooShort)),
            ("   123456789   ", Some(ValidationError::MessageTooShort)),
            ("äöüßéèêëï", Some(ValidationError::MessageTooShort)),
            ("äöüßéèêëïî", None),
            ("\u{FEFF}123456789\u{FEFF}", Some(ValidationError::MessageTooShort)),
            ("😀😀😀😀😀", Some(ValidationError::MessageTooShort)),
            ("1234567890", None),
            ("Hello there, this works", None),
        ] {
            let form = form("Ada", "ada@x.com", message);
            assert_eq!(
                errors_for(&form, ErrorField::Message),
                Vec::from_iter(expected),
                "{message:?}"
            );
        }
    }

    #[test]
    fn subject_is_ignored() {
        let form = ContactFormData {
            subject: " ".repeat(3),
            ..ADA.clone()
        };
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn deterministic_and_pure() {
        let form = INVALID.clone();
        let first = validate(&form);
        let second = validate(&form);
        assert_eq!(first, second);
        assert_eq!(form, *INVALID);
    }
}
