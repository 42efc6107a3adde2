pub const IOTA_URL: &str = "IOTA_URL";
pub const ORION_URL: &str = "ORION_URL";

pub const FIWARE_SERVICE: &str = "FIWARE_SERVICE";
pub const FIWARE_SERVICEPATH: &str = "FIWARE_SERVICEPATH";
pub const FIWARE_RESOURCE: &str = "FIWARE_RESOURCE";

pub const API_TOKEN: &str = "MY_TOKEN";
pub const REQUEST_TIMEOUT: &str = "TIMEOUT";

pub const LOG_LEVEL: &str = "LOGGING_LEVEL";
pub const ENV_FILE: &str = "FIWARE_SETUP_ENV_FILE";
