use serde::{Deserialize, Serialize};

use super::validate::{required_str, ValidationError};

/// IoT Agent service group: devices sharing an API key, entity type and broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IotServiceBuilder")]
pub struct IotService {
    apikey: String,
    cbroker: String,
    entity_type: String,
    resource: String,
}

impl IotService {
    pub fn builder() -> IotServiceBuilder {
        IotServiceBuilder::default()
    }

    pub fn apikey(&self) -> &str {
        &self.apikey
    }

    pub fn cbroker(&self) -> &str {
        &self.cbroker
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IotServiceBuilder {
    apikey: Option<String>,
    cbroker: Option<String>,
    entity_type: Option<String>,
    resource: Option<String>,
}

impl IotServiceBuilder {
    pub fn apikey(mut self, apikey: impl Into<String>) -> Self {
        self.apikey = Some(apikey.into());
        self
    }

    pub fn cbroker(mut self, cbroker: impl Into<String>) -> Self {
        self.cbroker = Some(cbroker.into());
        self
    }

    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn build(self) -> Result<IotService, ValidationError> {
        Ok(IotService {
            apikey: required_str("apikey", self.apikey)?,
            cbroker: required_str("cbroker", self.cbroker)?,
            entity_type: required_str("entity_type", self.entity_type)?,
            resource: required_str("resource", self.resource)?,
        })
    }
}

impl TryFrom<IotServiceBuilder> for IotService {
    type Error = ValidationError;

    fn try_from(builder: IotServiceBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
