pub const FIWARE_SERVICE: &str = "fiware-service";
pub const FIWARE_SERVICEPATH: &str = "fiware-servicepath";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const LOCATION: &str = "Location";

pub const APPLICATION_JSON: &str = "application/json";
