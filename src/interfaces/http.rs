use std::time::Duration;

use serde::Serialize;
use ureq::http::Response;
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::{Agent, Body, RequestBuilder};

use crate::config::ClientConfig;
use crate::constants::headers;

pub fn get_ureq_agent(timeout: Duration) -> Agent {
    // Status codes are mapped by the clients, so 4xx/5xx must come back as responses
    Agent::config_builder()
        .tls_config(TlsConfig::builder().provider(TlsProvider::NativeTls).build())
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// One FIWARE backend: base URL, agent and the header set sent on every data call.
pub struct FiwareConn {
    config: ClientConfig,
    agent: Agent,
    headers: Vec<(&'static str, String)>,
}

impl FiwareConn {
    pub fn new(mut config: ClientConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let mut fixed_headers = vec![
            (headers::FIWARE_SERVICE, config.fiware_service.clone()),
            (headers::FIWARE_SERVICEPATH, config.fiware_servicepath.clone()),
            (headers::CONTENT_TYPE, headers::APPLICATION_JSON.to_string()),
        ];
        if let Some(token) = &config.api_token {
            fixed_headers.push((headers::AUTHORIZATION, format!("Bearer {token}")));
        }

        Self {
            agent: get_ureq_agent(config.request_timeout),
            config,
            headers: fixed_headers,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Bare GET used for liveness checks: no FIWARE headers, status only.
    pub fn probe(&self, path: &str) -> Result<u16, ureq::Error> {
        let response = self.agent.get(self.url(path)).call()?;
        Ok(response.status().as_u16())
    }

    pub fn get(&self, path: &str) -> Result<Response<Body>, ureq::Error> {
        self.with_headers(self.agent.get(self.url(path))).call()
    }

    pub fn delete(&self, path: &str) -> Result<Response<Body>, ureq::Error> {
        self.with_headers(self.agent.delete(self.url(path))).call()
    }

    pub fn post_json(
        &self,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<Response<Body>, ureq::Error> {
        self.with_headers(self.agent.post(self.url(path)))
            .send_json(payload)
    }

    pub fn put_json(
        &self,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<Response<Body>, ureq::Error> {
        self.with_headers(self.agent.put(self.url(path)))
            .send_json(payload)
    }

    pub fn patch_json(
        &self,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<Response<Body>, ureq::Error> {
        self.with_headers(self.agent.patch(self.url(path)))
            .send_json(payload)
    }

    fn with_headers<B>(&self, mut request: RequestBuilder<B>) -> RequestBuilder<B> {
        for (name, value) in &self.headers {
            request = request.header(*name, value.as_str());
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config(base_url: &str) -> ClientConfig {
        ClientConfig::new(base_url, "openiot", "/", Duration::from_secs(5))
    }

    #[test]
    fn test_strips_trailing_slash() {
        let conn = FiwareConn::new(sample_config("http://orion:1026/"));
        assert_eq!(conn.config().base_url, "http://orion:1026");
        assert_eq!(conn.url("/version"), "http://orion:1026/version");
    }

    #[test]
    fn test_fixed_headers() {
        let conn = FiwareConn::new(sample_config("http://iot-agent:4061"));
        assert_eq!(
            conn.headers,
            vec![
                ("fiware-service", "openiot".to_string()),
                ("fiware-servicepath", "/".to_string()),
                ("Content-Type", "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn test_bearer_token_header() {
        let conn = FiwareConn::new(sample_config("http://iot-agent:4061").with_api_token("abc"));
        assert!(conn
            .headers
            .contains(&("Authorization", "Bearer abc".to_string())));
    }

    #[test]
    fn test_data_calls_send_headers() {
        let mut server = mockito::Server::new();
        let m = server
            .mock("GET", "/iot/devices")
            .match_header("fiware-service", "openiot")
            .match_header("fiware-servicepath", "/")
            .match_header("content-type", "application/json")
            .with_body("{}")
            .expect(1)
            .create();

        let conn = FiwareConn::new(sample_config(&server.url()));
        let response = conn.get("/iot/devices").unwrap();
        assert_eq!(response.status().as_u16(), 200);
        m.assert();
    }

    #[test]
    fn test_probe_returns_status() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/version").with_status(503).create();

        let conn = FiwareConn::new(sample_config(&server.url()));
        assert_eq!(conn.probe("/version").unwrap(), 503);
    }
}
