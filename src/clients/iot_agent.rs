use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

use super::{check_response, parse_body};
use crate::config::{ClientConfig, Settings};
use crate::constants::paths;
use crate::error::IotAgentError;
use crate::interfaces::http::FiwareConn;
use crate::models::{Device, IotService};

#[derive(Serialize, Deserialize)]
struct Services<T> {
    #[serde(default)]
    services: Vec<T>,
}

#[derive(Serialize, Deserialize)]
struct Devices<T> {
    #[serde(default)]
    devices: Vec<T>,
}

/// Service group and device provisioning against the IoT Agent.
pub struct IotAgentClient {
    conn: FiwareConn,
}

impl IotAgentClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            conn: FiwareConn::new(config),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.iot_agent_config())
    }

    pub fn config(&self) -> &ClientConfig {
        self.conn.config()
    }

    /// Liveness probe: true only on HTTP 200, false on any transport failure.
    pub fn check_status(&self) -> bool {
        match self.conn.probe(paths::IOTA_ABOUT) {
            Ok(status) => status == 200,
            Err(err) => {
                log::error!("Error checking IoT Agent status: {err}");
                false
            }
        }
    }

    pub fn create_service_group(&self, service: &IotService) -> Result<(), IotAgentError> {
        let payload = Services {
            services: vec![service],
        };
        check_response::<IotAgentError>(
            self.conn.post_json(paths::IOTA_SERVICES, &payload),
            "create_service_group",
            None,
        )?;
        log::info!("Service group created successfully: {}", service.apikey());
        Ok(())
    }

    pub fn get_service_groups(&self) -> Result<Vec<Value>, IotAgentError> {
        let response = check_response::<IotAgentError>(
            self.conn.get(paths::IOTA_SERVICES),
            "get_service_groups",
            None,
        )?;
        let envelope: Services<Value> =
            parse_body::<_, IotAgentError>(response, "get_service_groups")?;
        Ok(envelope.services)
    }

    pub fn update_service_group(
        &self,
        resource: &str,
        apikey: &str,
        updates: &Value,
    ) -> Result<(), IotAgentError> {
        let group_id = format!("{resource}:{apikey}");
        check_response::<IotAgentError>(
            self.conn.put_json(&service_group_path(resource, apikey), updates),
            "update_service_group",
            Some(group_id.as_str()),
        )?;
        log::info!("Service group updated successfully: {apikey}");
        Ok(())
    }

    pub fn delete_service_group(&self, resource: &str, apikey: &str) -> Result<(), IotAgentError> {
        let group_id = format!("{resource}:{apikey}");
        check_response::<IotAgentError>(
            self.conn.delete(&service_group_path(resource, apikey)),
            "delete_service_group",
            Some(group_id.as_str()),
        )?;
        log::info!("Service group deleted successfully: {apikey}");
        Ok(())
    }

    pub fn create_device(&self, device: &Device) -> Result<(), IotAgentError> {
        let payload = Devices {
            devices: vec![device],
        };
        check_response::<IotAgentError>(
            self.conn.post_json(paths::IOTA_DEVICES, &payload),
            "create_device",
            None,
        )?;
        log::info!("Device created successfully: {}", device.device_id());
        Ok(())
    }

    pub fn get_device(&self, device_id: &str) -> Result<Value, IotAgentError> {
        let response = check_response::<IotAgentError>(
            self.conn.get(&device_path(device_id)),
            "get_device",
            Some(device_id),
        )?;
        parse_body(response, "get_device")
    }

    pub fn list_devices(&self) -> Result<Vec<Value>, IotAgentError> {
        let response = check_response::<IotAgentError>(
            self.conn.get(paths::IOTA_DEVICES),
            "list_devices",
            None,
        )?;
        let envelope: Devices<Value> = parse_body::<_, IotAgentError>(response, "list_devices")?;
        Ok(envelope.devices)
    }

    pub fn update_device(&self, device_id: &str, updates: &Value) -> Result<(), IotAgentError> {
        check_response::<IotAgentError>(
            self.conn.put_json(&device_path(device_id), updates),
            "update_device",
            Some(device_id),
        )?;
        log::info!("Device updated successfully: {device_id}");
        Ok(())
    }

    pub fn delete_device(&self, device_id: &str) -> Result<(), IotAgentError> {
        check_response::<IotAgentError>(
            self.conn.delete(&device_path(device_id)),
            "delete_device",
            Some(device_id),
        )?;
        log::info!("Device deleted successfully: {device_id}");
        Ok(())
    }
}

fn service_group_path(resource: &str, apikey: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("resource", resource)
        .append_pair("apikey", apikey)
        .finish();
    format!("{}?{query}", paths::IOTA_SERVICES)
}

fn device_path(device_id: &str) -> String {
    format!("{}/{device_id}", paths::IOTA_DEVICES)
}
