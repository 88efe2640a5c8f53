use std::sync::LazyLock;

use folio_models::contact::ContactFormData;

pub static ADA: LazyLock<ContactFormData> = LazyLock::new(|| ContactFormData {
    name: "Ada".into(),
    email: "ada@x.com".into(),
    subject: "Hello".into(),
    message: "Hello there, this works".into(),
});

pub static ADA_WITHOUT_SUBJECT: LazyLock<ContactFormData> = LazyLock::new(|| ContactFormData {
    subject: String::new(),
    ..ADA.clone()
});

/// Refused by the delivery testing server.
pub static ADA_REJECTED: LazyLock<ContactFormData> = LazyLock::new(|| ContactFormData {
    subject: "reject".into(),
    ..ADA.clone()
});

/// Answered with a server error by the delivery testing server.
pub static ADA_FAILING: LazyLock<ContactFormData> = LazyLock::new(|| ContactFormData {
    subject: "fail".into(),
    ..ADA.clone()
});

/// Fails every rule of the validator.
pub static INVALID: LazyLock<ContactFormData> = LazyLock::new(|| ContactFormData {
    name: String::new(),
    email: "bad".into(),
    subject: String::new(),
    message: "hi".into(),
});
