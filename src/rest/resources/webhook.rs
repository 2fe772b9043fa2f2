//! Webhook subscriptions.
//!
//! The API calls `url` when entities of `entity_type` are created, updated or
//! deleted (`entity/webhook`), or when stock changes (`entity/webhookstock`).

use serde::{Deserialize, Serialize};

use crate::rest::{Entity, EntityRef, Meta};

/// Event that fires an entity webhook.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookAction {
    Create,
    Update,
    Delete,
    Processed,
}

/// Content of an `UPDATE` notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiffType {
    #[default]
    None,
    Fields,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<WebhookAction>,
    /// Watched entity type (e.g., "customerorder").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_type: Option<DiffType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing)]
    pub method: Option<String>,
    #[serde(skip_serializing)]
    pub author_application: Option<EntityRef>,
}

impl Webhook {
    /// Creates an enabled subscription.
    #[must_use]
    pub fn new(url: impl Into<String>, entity_type: impl Into<String>, action: WebhookAction) -> Self {
        Self {
            url: Some(url.into()),
            entity_type: Some(entity_type.into()),
            action: Some(action),
            enabled: Some(true),
            ..Self::default()
        }
    }
}

impl Entity for Webhook {
    const NAME: &'static str = "Webhook";
    const TYPE: &'static str = "webhook";
    const PATH: &'static str = "entity/webhook";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookStock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Report to push, `all` or `bystore`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_type: Option<String>,
}

impl WebhookStock {
    #[must_use]
    pub fn new(url: impl Into<String>, report_type: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            report_type: Some(report_type.into()),
            stock_type: Some("stock".to_string()),
            enabled: Some(true),
            ..Self::default()
        }
    }
}

impl Entity for WebhookStock {
    const NAME: &'static str = "WebhookStock";
    const TYPE: &'static str = "webhookstock";
    const PATH: &'static str = "entity/webhookstock";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
