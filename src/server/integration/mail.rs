//! Mail sending.
//!
//! [`MailService`] is the contract the service layer calls. [`RestMailService`]
//! delivers through an HTTP mail gateway that accepts
//! `{ sender, subject, content, recipients }` as JSON.

use async_trait::async_trait;
use serde::Serialize;

use crate::server::{error::transport::TransportError, integration::rest::RestRepository};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailService: Send + Sync {
    async fn send_mail(
        &self,
        subject: &str,
        content: &str,
        recipients: &[String],
    ) -> Result<(), TransportError>;
}

/// Mail gateway endpoint and sender address.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_url: String,
    pub sender: String,
    pub recipients: Vec<String>,
}

#[derive(Serialize)]
struct MailRequest<'a> {
    sender: &'a str,
    subject: &'a str,
    content: &'a str,
    recipients: &'a [String],
}

pub struct RestMailService {
    rest: RestRepository,
    api_url: String,
    sender: String,
}

impl RestMailService {
    pub fn new(rest: RestRepository, config: &MailConfig) -> Self {
        Self {
            rest,
            api_url: config.api_url.clone(),
            sender: config.sender.clone(),
        }
    }
}

#[async_trait]
impl MailService for RestMailService {
    async fn send_mail(
        &self,
        subject: &str,
        content: &str,
        recipients: &[String],
    ) -> Result<(), TransportError> {
        let request = MailRequest {
            sender: &self.sender,
            subject,
            content,
            recipients,
        };

        let _: serde_json::Value = self.rest.api(&self.api_url, None, Some(&request)).await?;

        tracing::info!("Sent mail '{}' to {} recipient(s)", subject, recipients.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    /// Expected: the gateway receives sender, subject, content and recipients
    #[tokio::test]
    async fn posts_mail_to_gateway() {
        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let router = Router::new().route(
            "/mail",
            post(move |Json(body): Json<serde_json::Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Some(body);
                    Json(serde_json::json!({ "accepted": true }))
                }
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let config = MailConfig {
            api_url: format!("http://{}/mail", addr),
            sender: "noreply@example.com".to_string(),
            recipients: vec![],
        };
        let mail = RestMailService::new(RestRepository::new(reqwest::Client::new()), &config);

        mail.send_mail("Subject", "Body", &["ops@example.com".to_string()])
            .await
            .unwrap();

        let body = received.lock().unwrap().clone().unwrap();
        assert_eq!(body["sender"], "noreply@example.com");
        assert_eq!(body["subject"], "Subject");
        assert_eq!(body["content"], "Body");
        assert_eq!(body["recipients"][0], "ops@example.com");
    }
}
