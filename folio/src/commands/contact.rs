use std::fmt::Write;

use anyhow::ensure;
use clap::{Args, Subcommand};
use folio_config::Config;
use folio_core_contact_contracts::{ContactFormService, ContactSubmitError};
use folio_core_contact_impl::validate;
use folio_models::contact::{ContactFormData, FormField, FormState, ValidationError};
use tracing::{info, warn};

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Validate a contact message without sending it
    #[command(aliases(["v"]))]
    Validate {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Validate and deliver a contact message using the configured backend
    #[command(aliases(["s"]))]
    Send {
        #[command(flatten)]
        form: FormArgs,
    },
}

#[derive(Debug, Args)]
pub struct FormArgs {
    /// Name of the sender
    #[arg(long, default_value_t)]
    name: String,
    /// Email address of the sender
    #[arg(long, default_value_t)]
    email: String,
    /// Optional subject line
    #[arg(long, default_value_t)]
    subject: String,
    /// The message itself, at least 10 characters
    #[arg(long, default_value_t)]
    message: String,
}

impl From<FormArgs> for ContactFormData {
    fn from(args: FormArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            subject: args.subject,
            message: args.message,
        }
    }
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Validate { form } => validate_form(form.into()),
            ContactCommand::Send { form } => send(config, form.into()).await,
        }
    }
}

fn validate_form(data: ContactFormData) -> anyhow::Result<()> {
    let errors = validate(&data);
    print!("{}", render_errors(&errors));
    ensure!(errors.is_empty(), "The contact form is invalid");
    Ok(())
}

async fn send(config: Config, data: ContactFormData) -> anyhow::Result<()> {
    let form = environment::contact_form(&config)?;
    let state = fill_and_submit(&form, data).await;
    print!("{}", render_state(&state));
    ensure!(state.is_success(), "The contact message has not been sent");
    Ok(())
}

/// Types `data` into the form field by field, submits it once and returns the
/// resulting state.
pub async fn fill_and_submit(form: &impl ContactFormService, data: ContactFormData) -> FormState {
    for field in FormField::ALL {
        form.edit(field, data.get(field).to_owned());
    }

    match form.submit().await {
        Ok(()) => info!("contact message sent"),
        Err(ContactSubmitError::Invalid(_)) => info!("contact form is invalid"),
        Err(err) => warn!("Failed to submit contact form: {err}"),
    }

    form.state()
}

pub fn render_state(state: &FormState) -> String {
    if state.is_success() {
        "Thank you! Your message has been sent.\n".into()
    } else if state.is_submitting() {
        "Sending...\n".into()
    } else {
        render_errors(state.errors())
    }
}

fn render_errors(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return "ok\n".into();
    }

    errors.iter().fold(String::new(), |mut out, err| {
        let _ = writeln!(out, "{}: {err}", err.field());
        out
    })
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use folio_core_contact_contracts::MockContactFormService;
    use folio_demo::contact::ADA;
    use folio_extern_contracts::deliver::DeliverError;

    use super::*;

    #[tokio::test]
    async fn fill_and_submit_ok() {
        // Arrange
        let form = MockContactFormService::new()
            .with_edit(FormField::Name, ADA.name.clone())
            .with_edit(FormField::Email, ADA.email.clone())
            .with_edit(FormField::Subject, ADA.subject.clone())
            .with_edit(FormField::Message, ADA.message.clone())
            .with_submit(Ok(()))
            .with_state(FormState::success());

        // Act
        let result = fill_and_submit(&form, ADA.clone()).await;

        // Assert
        assert_eq!(result, FormState::success());
    }

    #[tokio::test]
    async fn fill_and_submit_deliver_fails() {
        // Arrange
        let form = MockContactFormService::new()
            .with_edit(FormField::Name, ADA.name.clone())
            .with_edit(FormField::Email, ADA.email.clone())
            .with_edit(FormField::Subject, ADA.subject.clone())
            .with_edit(FormField::Message, ADA.message.clone())
            .with_submit(Err(ContactSubmitError::Deliver(DeliverError::Rejected(
                "422".into(),
            ))))
            .with_state(FormState::failed());

        // Act
        let result = fill_and_submit(&form, ADA.clone()).await;

        // Assert
        assert_eq!(result, FormState::failed());
    }

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(subcommand)]
        command: ContactCommand,
    }

    #[test]
    fn every_form_argument_is_documented() {
        let cli = Cli::command();
        for name in ["validate", "send"] {
            let subcommand = cli.find_subcommand(name).unwrap();
            for field in FormField::ALL {
                let arg = subcommand
                    .get_arguments()
                    .find(|arg| arg.get_id() == field.as_str())
                    .unwrap();
                assert!(arg.get_help().is_some(), "{name} --{field}");
            }
        }
    }

    #[test]
    fn render_invalid_state() {
        let state = FormState::invalid(vec![
            ValidationError::NameRequired,
            ValidationError::EmailInvalid,
            ValidationError::MessageTooShort,
        ]);

        assert_eq!(
            render_state(&state),
            "name: Name is required\n\
             email: Please enter a valid email address\n\
             message: Message must be at least 10 characters long\n"
        );
    }

    #[test]
    fn render_other_states() {
        assert_eq!(render_state(&FormState::idle()), "ok\n");
        assert_eq!(render_state(&FormState::submitting()), "Sending...\n");
        assert_eq!(
            render_state(&FormState::success()),
            "Thank you! Your message has been sent.\n"
        );
        assert_eq!(
            render_state(&FormState::failed()),
            "general: Something went wrong. Please try again.\n"
        );
    }
}
