use harvest_domain::{impl_wire_name_conversions, HttpVerb, Record, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Collection;
use crate::api::Transport;

/// State changes recorded as invoice messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceMessageAction {
    MarkAsSent,
    MarkAsClosed,
    ReOpen,
    MarkAsDraft,
}

impl_wire_name_conversions!(InvoiceMessageAction {
    MarkAsSent => "mark_as_sent",
    MarkAsClosed => "mark_as_closed",
    ReOpen => "re_open",
    MarkAsDraft => "mark_as_draft",
});

/// Messages sent for one invoice (`/invoices/{invoice_id}/messages`).
#[derive(Debug, Clone, Copy)]
pub struct InvoiceMessages<'a> {
    transport: &'a Transport,
}

impl<'a> InvoiceMessages<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    fn collection(&self, invoice_id: u64) -> Collection<'a> {
        Collection::new(self.transport, messages_path(invoice_id), "invoice message")
    }

    pub async fn list(&self, invoice_id: u64) -> Result<Value> {
        self.collection(invoice_id).list().await
    }

    pub async fn get(&self, invoice_id: u64, record: &Record) -> Result<Value> {
        self.collection(invoice_id).get(record).await
    }

    /// Email the invoice. `record` carries the message (recipients, body).
    pub async fn send(&self, invoice_id: u64, record: &Record) -> Result<Value> {
        self.collection(invoice_id).create(record).await
    }

    pub async fn delete(&self, invoice_id: u64, record: &Record) -> Result<Value> {
        self.collection(invoice_id).delete(record).await
    }

    /// POST `/invoices/{invoice_id}/messages/{action}` with the record's
    /// fields as an optional note.
    pub async fn apply(
        &self,
        invoice_id: u64,
        action: InvoiceMessageAction,
        record: &Record,
    ) -> Result<Value> {
        let path = format!("{}/{action}", messages_path(invoice_id));
        self.transport.request(HttpVerb::Post, &path, Some(&record.body())).await
    }

    pub async fn mark_as_sent(&self, invoice_id: u64, record: &Record) -> Result<Value> {
        self.apply(invoice_id, InvoiceMessageAction::MarkAsSent, record).await
    }

    pub async fn mark_as_closed(&self, invoice_id: u64, record: &Record) -> Result<Value> {
        self.apply(invoice_id, InvoiceMessageAction::MarkAsClosed, record).await
    }

    pub async fn reopen(&self, invoice_id: u64, record: &Record) -> Result<Value> {
        self.apply(invoice_id, InvoiceMessageAction::ReOpen, record).await
    }

    pub async fn mark_as_draft(&self, invoice_id: u64, record: &Record) -> Result<Value> {
        self.apply(invoice_id, InvoiceMessageAction::MarkAsDraft, record).await
    }
}

fn messages_path(invoice_id: u64) -> String {
    format!("/invoices/{invoice_id}/messages")
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::{Credential, CredentialSlot};
    use crate::http::HttpClient;

    #[test]
    fn action_wire_names() {
        assert_eq!(InvoiceMessageAction::ReOpen.to_string(), "re_open");
        assert_eq!(
            "mark_as_closed".parse::<InvoiceMessageAction>().unwrap(),
            InvoiceMessageAction::MarkAsClosed
        );
        assert_eq!(
            serde_json::to_string(&InvoiceMessageAction::MarkAsDraft).unwrap(),
            "\"mark_as_draft\""
        );
    }

    #[tokio::test]
    async fn reopen_posts_to_action_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/invoices/12/messages/re_open"))
            .and(body_json(json!({"message": {"body": "reopening"}})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let transport = Transport::new(
            HttpClient::new().unwrap(),
            server.uri(),
            CredentialSlot::new(Credential::Anonymous),
        );
        let record = Record::new().field("message", json!({"body": "reopening"}));

        InvoiceMessages::new(&transport).reopen(12, &record).await.unwrap();
    }
}
