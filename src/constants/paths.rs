// IoT Agent
pub const IOTA_ABOUT: &str = "/iot/about";
pub const IOTA_SERVICES: &str = "/iot/services";
pub const IOTA_DEVICES: &str = "/iot/devices";

// Orion Context Broker (NGSIv2)
pub const ORION_VERSION: &str = "/version";
pub const ORION_ENTITIES: &str = "/v2/entities";
pub const ORION_SUBSCRIPTIONS: &str = "/v2/subscriptions";
