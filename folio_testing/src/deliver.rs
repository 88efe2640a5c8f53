use std::{
    net::IpAddr,
    sync::{Arc, Mutex, PoisonError},
};

use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_models::contact::ContactFormData;
use tokio::net::TcpListener;
use tracing::info;

pub const DELIVER_ROUTE: &str = "/contact";

/// Messages with this subject are refused with `422 Unprocessable Entity`.
pub const REJECT_SUBJECT: &str = "reject";

/// Messages with this subject fail with `500 Internal Server Error`.
pub const FAIL_SUBJECT: &str = "fail";

/// Messages accepted by the testing server.
///
/// The default inbox records every message; [`Inbox::discard`] creates one
/// that only logs them.
#[derive(Debug, Clone)]
pub struct Inbox(Option<Arc<Mutex<Vec<ContactFormData>>>>);

impl Default for Inbox {
    fn default() -> Self {
        Self(Some(Default::default()))
    }
}

impl Inbox {
    pub fn discard() -> Self {
        Self(None)
    }

    pub fn messages(&self) -> Vec<ContactFormData> {
        self.0
            .as_ref()
            .map(|messages| {
                messages
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone()
            })
            .unwrap_or_default()
    }

    fn push(&self, message: ContactFormData) {
        if let Some(messages) = &self.0 {
            messages
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(message);
        }
    }
}

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    info!("Starting contact delivery testing server on {host}:{port}");
    info!("Delivery endpoint: http://{host}:{port}{DELIVER_ROUTE}");
    info!(
        "All messages are accepted, except those with the subject {REJECT_SUBJECT:?} \
         (422) or {FAIL_SUBJECT:?} (500)."
    );

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(Inbox::discard()))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(inbox: Inbox) -> Router<()> {
    Router::new()
        .route(DELIVER_ROUTE, routing::post(deliver))
        .with_state(inbox)
}

async fn deliver(inbox: State<Inbox>, Json(message): Json<ContactFormData>) -> Response {
    if message.subject == REJECT_SUBJECT {
        info!(email = %message.email, "rejecting contact message");
        return (StatusCode::UNPROCESSABLE_ENTITY, "Message rejected").into_response();
    }
    if message.subject == FAIL_SUBJECT {
        info!(email = %message.email, "failing contact message");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Delivery failed").into_response();
    }

    info!(
        name = %message.name,
        email = %message.email,
        subject = %message.subject,
        "received contact message:\n{}",
        message.message
    );
    inbox.push(message);

    Json(true).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactFormData {
        ContactFormData {
            name: "Ada".into(),
            email: "ada@x.com".into(),
            subject: String::new(),
            message: "Hello there, this works".into(),
        }
    }

    #[test]
    fn recording_inbox() {
        let inbox = Inbox::default();
        inbox.push(message());
        assert_eq!(inbox.clone().messages(), [message()]);
    }

    #[test]
    fn discarding_inbox() {
        let inbox = Inbox::discard();
        inbox.push(message());
        assert!(inbox.messages().is_empty());
    }
}
