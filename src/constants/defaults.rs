use std::time::Duration;

pub const IOTA_BASE_URL: &str = "http://localhost:4061";
pub const ORION_BASE_URL: &str = "http://localhost:1026";
pub const FIWARE_SERVICE: &str = "openiot";
pub const FIWARE_SERVICEPATH: &str = "/";
pub const FIWARE_RESOURCE: &str = "/iot/d";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
pub const LOG_LEVEL: &str = "INFO";
