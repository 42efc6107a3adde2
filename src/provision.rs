use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::{IotAgentClient, OrionClient};
use crate::error::{IotAgentError, OrionError};
use crate::models::{Device, IotService, Subscription};

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("could not parse provisioning plan JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error(transparent)]
    IotAgent(#[from] IotAgentError),
    #[error(transparent)]
    Orion(#[from] OrionError),
}

/// Everything to set up for a deployment, in creation order.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ProvisioningPlan {
    #[serde(default)]
    pub services: Vec<IotService>,
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

impl FromStr for ProvisioningPlan {
    type Err = ProvisionError;

    fn from_str(plan_raw: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(plan_raw).map_err(Into::into)
    }
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionReport {
    pub services: usize,
    pub devices: usize,
    pub subscription_ids: Vec<String>,
}

/// Creates service groups, then devices, then subscriptions. Stops at the first failure.
pub fn apply(
    plan: &ProvisioningPlan,
    iota: &IotAgentClient,
    orion: &OrionClient,
) -> Result<ProvisionReport, ProvisionError> {
    let mut report = ProvisionReport::default();

    for service in &plan.services {
        iota.create_service_group(service)?;
        report.services += 1;
    }

    for device in &plan.devices {
        if !plan.services.is_empty()
            && !plan.services.iter().any(|s| s.apikey() == device.apikey())
        {
            log::warn!(
                "Device {} uses apikey {} which matches no service group in this plan",
                device.device_id(),
                device.apikey()
            );
        }
        iota.create_device(device)?;
        report.devices += 1;
    }

    for subscription in &plan.subscriptions {
        report
            .subscription_ids
            .push(orion.create_subscription(subscription)?);
    }

    log::info!(
        "Provisioned {} service groups, {} devices and {} subscriptions",
        report.services,
        report.devices,
        report.subscription_ids.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::Server;

    use super::*;
    use crate::config::ClientConfig;

    static PLAN: &str = r#"
    {
        "services": [
            {"apikey": "k1", "cbroker": "http://orion:1026", "entity_type": "Actuator", "resource": "/iot/d"}
        ],
        "devices": [
            {
                "device_id": "actuator001",
                "entity_name": "urn:ngsi-ld:Actuator:001",
                "entity_type": "Actuator",
                "transport": "HTTP",
                "protocol": "PDI-IoTA-UltraLight",
                "apikey": "k1",
                "commands": [{"name": "on"}, {"name": "off"}]
            }
        ],
        "subscriptions": [
            {
                "description": "Actuator changes",
                "subject": {"entities": [{"idPattern": "urn:ngsi-ld:Actuator:.*", "type": "Actuator"}]},
                "notification": {"http": {"url": "http://listener:3000/notify"}}
            }
        ]
    }
    "#;

    fn config(base_url: String) -> ClientConfig {
        ClientConfig::new(base_url, "openiot", "/", Duration::from_secs(5))
    }

    #[test]
    fn test_parse_plan() {
        let plan: ProvisioningPlan = PLAN.parse().unwrap();
        assert_eq!(plan.services.len(), 1);
        assert_eq!(plan.devices[0].commands().len(), 2);
        assert_eq!(plan.subscriptions[0].description(), "Actuator changes");
    }

    #[test]
    fn test_parse_partial_plan() {
        let plan: ProvisioningPlan = r#"{"subscriptions": []}"#.parse().unwrap();
        assert_eq!(plan, ProvisioningPlan::default());
    }

    #[test]
    fn test_parse_plan_rejects_invalid_models() {
        let err = r#"{"services": [{"apikey": "", "cbroker": "c", "entity_type": "t", "resource": "/iot/d"}]}"#
            .parse::<ProvisioningPlan>()
            .unwrap_err();
        assert!(matches!(err, ProvisionError::ParseJson(_)));
        assert!(err.to_string().contains("`apikey` must not be empty"));
    }

    #[test]
    fn test_apply_plan() {
        let mut iota_server = Server::new();
        let mut orion_server = Server::new();
        let m_service = iota_server
            .mock("POST", "/iot/services")
            .with_status(201)
            .expect(1)
            .create();
        let m_device = iota_server
            .mock("POST", "/iot/devices")
            .match_body(mockito::Matcher::Regex(
                r#""device_id":\s*"actuator001""#.to_string(),
            ))
            .with_status(201)
            .expect(1)
            .create();
        let m_subscription = orion_server
            .mock("POST", "/v2/subscriptions")
            .with_status(201)
            .with_header("Location", "/v2/subscriptions/5f1e0e0c")
            .expect(1)
            .create();

        let plan: ProvisioningPlan = PLAN.parse().unwrap();
        let report = apply(
            &plan,
            &IotAgentClient::new(config(iota_server.url())),
            &OrionClient::new(config(orion_server.url())),
        )
        .unwrap();

        assert_eq!(
            report,
            ProvisionReport {
                services: 1,
                devices: 1,
                subscription_ids: vec!["5f1e0e0c".into()],
            }
        );
        m_service.assert();
        m_device.assert();
        m_subscription.assert();
    }

    #[test]
    fn test_apply_stops_at_first_failure() {
        let mut iota_server = Server::new();
        let orion_server = Server::new();
        let _m_service = iota_server
            .mock("POST", "/iot/services")
            .with_status(409)
            .create();
        let m_device = iota_server
            .mock("POST", "/iot/devices")
            .expect(0)
            .create();

        let plan: ProvisioningPlan = PLAN.parse().unwrap();
        let err = apply(
            &plan,
            &IotAgentClient::new(config(iota_server.url())),
            &OrionClient::new(config(orion_server.url())),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ProvisionError::IotAgent(IotAgentError::Client { status_code: 409, .. })
        ));
        m_device.assert();
    }
}
