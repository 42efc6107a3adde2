use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::validate::{non_empty, required, required_str, ValidationError};

/// Entity selector for a subscription subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntityRef")]
pub struct EntityRef {
    #[serde(rename = "idPattern")]
    id_pattern: String,
    #[serde(rename = "type")]
    entity_type: String,
}

#[derive(Deserialize)]
struct RawEntityRef {
    #[serde(rename = "idPattern")]
    id_pattern: Option<String>,
    #[serde(rename = "type")]
    entity_type: Option<String>,
}

impl EntityRef {
    pub fn new(
        id_pattern: impl Into<String>,
        entity_type: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id_pattern: non_empty("idPattern", id_pattern.into())?,
            entity_type: non_empty("type", entity_type.into())?,
        })
    }

    pub fn id_pattern(&self) -> &str {
        &self.id_pattern
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }
}

impl TryFrom<RawEntityRef> for EntityRef {
    type Error = ValidationError;

    fn try_from(raw: RawEntityRef) -> Result<Self, Self::Error> {
        Ok(Self {
            id_pattern: required_str("idPattern", raw.id_pattern)?,
            entity_type: required_str("type", raw.entity_type)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    entities: Vec<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    condition: Option<Map<String, Value>>,
}

impl Subject {
    pub fn new(entities: Vec<EntityRef>) -> Self {
        Self {
            entities,
            condition: None,
        }
    }

    /// Sets the trigger condition, e.g. `{"attrs": ["temperature"]}`.
    pub fn with_condition(mut self, condition: Map<String, Value>) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn entities(&self) -> &[EntityRef] {
        &self.entities
    }

    pub fn condition(&self) -> Option<&Map<String, Value>> {
        self.condition.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNotificationHttp")]
pub struct NotificationHttp {
    url: String,
}

#[derive(Deserialize)]
struct RawNotificationHttp {
    url: Option<String>,
}

impl NotificationHttp {
    pub fn new(url: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            url: non_empty("url", url.into())?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TryFrom<RawNotificationHttp> for NotificationHttp {
    type Error = ValidationError;

    fn try_from(raw: RawNotificationHttp) -> Result<Self, Self::Error> {
        Ok(Self {
            url: required_str("url", raw.url)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    http: NotificationHttp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attrs: Option<Vec<String>>,
}

impl Notification {
    pub fn new(http: NotificationHttp) -> Self {
        Self { http, attrs: None }
    }

    /// Restricts the notified attributes.
    pub fn with_attrs(mut self, attrs: Vec<String>) -> Self {
        self.attrs = Some(attrs);
        self
    }

    pub fn http(&self) -> &NotificationHttp {
        &self.http
    }

    pub fn attrs(&self) -> Option<&[String]> {
        self.attrs.as_deref()
    }
}

/// Orion NGSIv2 subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SubscriptionBuilder")]
pub struct Subscription {
    description: String,
    subject: Subject,
    notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    throttling: Option<u32>,
}

impl Subscription {
    pub fn builder() -> SubscriptionBuilder {
        SubscriptionBuilder::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Minimum seconds between two notifications.
    pub fn throttling(&self) -> Option<u32> {
        self.throttling
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionBuilder {
    description: Option<String>,
    subject: Option<Subject>,
    notification: Option<Notification>,
    throttling: Option<u32>,
}

impl SubscriptionBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn subject(mut self, subject: Subject) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn throttling(mut self, seconds: u32) -> Self {
        self.throttling = Some(seconds);
        self
    }

    pub fn build(self) -> Result<Subscription, ValidationError> {
        Ok(Subscription {
            description: required_str("description", self.description)?,
            subject: required("subject", self.subject)?,
            notification: required("notification", self.notification)?,
            throttling: self.throttling,
        })
    }
}

impl TryFrom<SubscriptionBuilder> for Subscription {
    type Error = ValidationError;

    fn try_from(builder: SubscriptionBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
