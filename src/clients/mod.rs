mod iot_agent;
mod orion;

pub use iot_agent::IotAgentClient;
pub use orion::OrionClient;

use serde::de::DeserializeOwned;
use ureq::http::Response;
use ureq::Body;

use crate::error::HttpStatusError;

/// Turns the outcome of one call into either a successful response or a taxonomy error.
///
/// Transport failures are logged and passed through unchanged.
fn check_response<E: HttpStatusError>(
    result: Result<Response<Body>, ureq::Error>,
    operation: &str,
    resource: Option<&str>,
) -> Result<Response<Body>, E> {
    let mut response = result.map_err(|err| {
        log::error!("Request failed during {operation}: {err}");
        E::from(err)
    })?;

    let status = response.status().as_u16();
    if status < 400 {
        return Ok(response);
    }
    let response_body = response.body_mut().read_to_string().ok();
    Err(E::from_status(status, operation, resource, response_body))
}

fn parse_body<T: DeserializeOwned, E: HttpStatusError>(
    mut response: Response<Body>,
    operation: &str,
) -> Result<T, E> {
    response.body_mut().read_json::<T>().map_err(|err| {
        log::error!("Could not parse response of {operation}: {err}");
        E::from(err)
    })
}
