use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::validate::{non_empty, required, required_str, ValidationError};

/// Free-form device attribute, e.g. `{"object_id": "t", "name": "temperature", "type": "Number"}`.
pub type Attribute = Map<String, Value>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    #[default]
    Command,
}

/// An actuator command exposed through the IoT Agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCommand")]
pub struct Command {
    name: String,
    #[serde(rename = "type")]
    kind: CommandType,
}

#[derive(Deserialize)]
struct RawCommand {
    name: Option<String>,
    #[serde(rename = "type", default)]
    kind: CommandType,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_empty("name", name.into())?,
            kind: CommandType::Command,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CommandType {
        self.kind
    }
}

impl TryFrom<RawCommand> for Command {
    type Error = ValidationError;

    fn try_from(raw: RawCommand) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_str("name", raw.name)?,
            kind: raw.kind,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Transport {
    Http,
    Mqtt,
}

impl Transport {
    const PATTERN: &'static str = "^(HTTP|MQTT)$";

    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Http => "HTTP",
            Transport::Mqtt => "MQTT",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTTP" => Ok(Transport::Http),
            "MQTT" => Ok(Transport::Mqtt),
            other => Err(ValidationError::Pattern {
                field: "transport",
                pattern: Self::PATTERN,
                value: other.to_string(),
            }),
        }
    }
}

/// Actuator device provisioned in the IoT Agent.
///
/// The `apikey` is expected to match the service group the device belongs to;
/// that link is not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DeviceBuilder")]
pub struct Device {
    device_id: String,
    entity_name: String,
    entity_type: String,
    transport: Transport,
    protocol: String,
    apikey: String,
    commands: Vec<Command>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<Vec<Attribute>>,
}

impl Device {
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn apikey(&self) -> &str {
        &self.apikey
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn attributes(&self) -> Option<&[Attribute]> {
        self.attributes.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceBuilder {
    device_id: Option<String>,
    entity_name: Option<String>,
    entity_type: Option<String>,
    transport: Option<String>,
    protocol: Option<String>,
    apikey: Option<String>,
    commands: Option<Vec<Command>>,
    attributes: Option<Vec<Attribute>>,
}

impl DeviceBuilder {
    pub fn device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn entity_name(mut self, entity_name: impl Into<String>) -> Self {
        self.entity_name = Some(entity_name.into());
        self
    }

    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    pub fn transport(mut self, transport: impl Into<String>) -> Self {
        self.transport = Some(transport.into());
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn apikey(mut self, apikey: impl Into<String>) -> Self {
        self.apikey = Some(apikey.into());
        self
    }

    /// Appends one command.
    pub fn command(mut self, command: Command) -> Self {
        self.commands.get_or_insert_with(Vec::new).push(command);
        self
    }

    /// Replaces the whole command list.
    pub fn commands(mut self, commands: Vec<Command>) -> Self {
        self.commands = Some(commands);
        self
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.get_or_insert_with(Vec::new).push(attribute);
        self
    }

    pub fn build(self) -> Result<Device, ValidationError> {
        let transport = required_str("transport", self.transport)?.parse()?;
        let commands = required("commands", self.commands)?;
        let device = Device {
            device_id: required_str("device_id", self.device_id)?,
            entity_name: required_str("entity_name", self.entity_name)?,
            entity_type: required_str("entity_type", self.entity_type)?,
            transport,
            protocol: required_str("protocol", self.protocol)?,
            apikey: required_str("apikey", self.apikey)?,
            commands,
            attributes: self.attributes,
        };
        if device.commands.is_empty() {
            return Err(ValidationError::NoCommands);
        }
        Ok(device)
    }
}

impl TryFrom<DeviceBuilder> for Device {
    type Error = ValidationError;

    fn try_from(builder: DeviceBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
