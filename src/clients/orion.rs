use serde_json::Value;

use super::{check_response, parse_body};
use crate::config::{ClientConfig, Settings};
use crate::constants::{headers, paths};
use crate::error::OrionError;
use crate::interfaces::http::FiwareConn;
use crate::models::Subscription;

/// Entity reads/deletes and subscription management against Orion.
///
/// Entities are created and updated through the IoT Agent, never here.
pub struct OrionClient {
    conn: FiwareConn,
}

impl OrionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            conn: FiwareConn::new(config),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.orion_config())
    }

    pub fn config(&self) -> &ClientConfig {
        self.conn.config()
    }

    /// Liveness probe: true only on HTTP 200, false on any transport failure.
    pub fn check_status(&self) -> bool {
        match self.conn.probe(paths::ORION_VERSION) {
            Ok(status) => status == 200,
            Err(err) => {
                log::error!("Error checking Orion status: {err}");
                false
            }
        }
    }

    pub fn get_entity(&self, entity_id: &str) -> Result<Value, OrionError> {
        let response = check_response::<OrionError>(
            self.conn.get(&entity_path(entity_id)),
            "get_entity",
            Some(entity_id),
        )?;
        parse_body(response, "get_entity")
    }

    /// Orion answers with a bare array here, unlike the IoT Agent envelopes.
    pub fn list_entities(&self) -> Result<Vec<Value>, OrionError> {
        let response = check_response::<OrionError>(
            self.conn.get(paths::ORION_ENTITIES),
            "list_entities",
            None,
        )?;
        parse_body(response, "list_entities")
    }

    pub fn delete_entity(&self, entity_id: &str) -> Result<(), OrionError> {
        check_response::<OrionError>(
            self.conn.delete(&entity_path(entity_id)),
            "delete_entity",
            Some(entity_id),
        )?;
        log::info!("Entity deleted successfully: {entity_id}");
        Ok(())
    }

    /// Creates the subscription and returns the id Orion assigned to it.
    ///
    /// The id is the last segment of the `Location` header; an empty string
    /// is returned when the header is missing.
    pub fn create_subscription(&self, subscription: &Subscription) -> Result<String, OrionError> {
        let response = check_response::<OrionError>(
            self.conn
                .post_json(paths::ORION_SUBSCRIPTIONS, subscription),
            "create_subscription",
            None,
        )?;

        let location = response
            .headers()
            .get(headers::LOCATION)
            .and_then(|value| value.to_str().ok());
        let subscription_id = subscription_id_from_location(location);
        if subscription_id.is_empty() {
            log::warn!("No subscription id in Location header: {location:?}");
        } else {
            log::info!("Subscription created successfully: {subscription_id}");
        }
        Ok(subscription_id)
    }

    pub fn get_subscription(&self, subscription_id: &str) -> Result<Value, OrionError> {
        let response = check_response::<OrionError>(
            self.conn.get(&subscription_path(subscription_id)),
            "get_subscription",
            Some(subscription_id),
        )?;
        parse_body(response, "get_subscription")
    }

    pub fn list_subscriptions(&self) -> Result<Vec<Value>, OrionError> {
        let response = check_response::<OrionError>(
            self.conn.get(paths::ORION_SUBSCRIPTIONS),
            "list_subscriptions",
            None,
        )?;
        parse_body(response, "list_subscriptions")
    }

    /// Partial update (PATCH): only the given fields change.
    pub fn update_subscription(
        &self,
        subscription_id: &str,
        updates: &Value,
    ) -> Result<(), OrionError> {
        check_response::<OrionError>(
            self.conn
                .patch_json(&subscription_path(subscription_id), updates),
            "update_subscription",
            Some(subscription_id),
        )?;
        log::info!("Subscription updated successfully: {subscription_id}");
        Ok(())
    }

    pub fn delete_subscription(&self, subscription_id: &str) -> Result<(), OrionError> {
        check_response::<OrionError>(
            self.conn.delete(&subscription_path(subscription_id)),
            "delete_subscription",
            Some(subscription_id),
        )?;
        log::info!("Subscription deleted successfully: {subscription_id}");
        Ok(())
    }
}

fn entity_path(entity_id: &str) -> String {
    format!("{}/{entity_id}", paths::ORION_ENTITIES)
}

fn subscription_path(subscription_id: &str) -> String {
    format!("{}/{subscription_id}", paths::ORION_SUBSCRIPTIONS)
}

fn subscription_id_from_location(location: Option<&str>) -> String {
    location
        .and_then(|location| location.trim_end_matches('/').rsplit('/').next())
        .unwrap_or_default()
        .to_string()
}
