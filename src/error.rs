use thiserror::Error;

/// Maps a failed HTTP status onto a backend's error taxonomy.
///
/// 404 becomes not-found, the rest of 4xx a client error and 5xx a server
/// error. Anything else is handed back as the transport's own
/// `StatusCode` error.
pub trait HttpStatusError: From<ureq::Error> {
    fn not_found(resource: String, response_body: Option<String>) -> Self;
    fn client(status_code: u16, message: String, response_body: Option<String>) -> Self;
    fn server(status_code: u16, message: String, response_body: Option<String>) -> Self;

    fn from_status(
        status_code: u16,
        operation: &str,
        resource: Option<&str>,
        response_body: Option<String>,
    ) -> Self {
        match status_code {
            404 => {
                let resource = resource.unwrap_or(operation);
                log::error!("Resource not found during {operation}: {resource}");
                Self::not_found(resource.to_string(), response_body)
            }
            400..=499 => {
                log::error!("Client error during {operation}: {status_code}");
                Self::client(status_code, format!("{operation} failed"), response_body)
            }
            500..=599 => {
                log::error!("Server error during {operation}: {status_code}");
                Self::server(status_code, format!("{operation} failed"), response_body)
            }
            _ => ureq::Error::StatusCode(status_code).into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum IotAgentError {
    #[error("Client error 404: Resource not found: {resource}")]
    NotFound {
        resource: String,
        response_body: Option<String>,
    },
    #[error("Client error {status_code}: {message}")]
    Client {
        status_code: u16,
        message: String,
        response_body: Option<String>,
    },
    #[error("Server error {status_code}: {message}")]
    Server {
        status_code: u16,
        message: String,
        response_body: Option<String>,
    },
    #[error(transparent)]
    Transport(#[from] ureq::Error),
}

impl IotAgentError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            IotAgentError::NotFound { .. } => Some(404),
            IotAgentError::Client { status_code, .. } | IotAgentError::Server { status_code, .. } => {
                Some(*status_code)
            }
            IotAgentError::Transport(_) => None,
        }
    }

    pub fn response_body(&self) -> Option<&str> {
        match self {
            IotAgentError::NotFound { response_body, .. }
            | IotAgentError::Client { response_body, .. }
            | IotAgentError::Server { response_body, .. } => response_body.as_deref(),
            IotAgentError::Transport(_) => None,
        }
    }

    /// True for every 4xx, not-found included.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            IotAgentError::NotFound { .. } | IotAgentError::Client { .. }
        )
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, IotAgentError::Server { .. })
    }
}

impl HttpStatusError for IotAgentError {
    fn not_found(resource: String, response_body: Option<String>) -> Self {
        IotAgentError::NotFound {
            resource,
            response_body,
        }
    }

    fn client(status_code: u16, message: String, response_body: Option<String>) -> Self {
        IotAgentError::Client {
            status_code,
            message,
            response_body,
        }
    }

    fn server(status_code: u16, message: String, response_body: Option<String>) -> Self {
        IotAgentError::Server {
            status_code,
            message,
            response_body,
        }
    }
}

#[derive(Error, Debug)]
pub enum OrionError {
    #[error("Client error 404: Entity not found: {entity_id}")]
    NotFound {
        entity_id: String,
        response_body: Option<String>,
    },
    #[error("Client error {status_code}: {message}")]
    Client {
        status_code: u16,
        message: String,
        response_body: Option<String>,
    },
    #[error("Server error {status_code}: {message}")]
    Server {
        status_code: u16,
        message: String,
        response_body: Option<String>,
    },
    #[error(transparent)]
    Transport(#[from] ureq::Error),
}

impl OrionError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            OrionError::NotFound { .. } => Some(404),
            OrionError::Client { status_code, .. } | OrionError::Server { status_code, .. } => {
                Some(*status_code)
            }
            OrionError::Transport(_) => None,
        }
    }

    pub fn response_body(&self) -> Option<&str> {
        match self {
            OrionError::NotFound { response_body, .. }
            | OrionError::Client { response_body, .. }
            | OrionError::Server { response_body, .. } => response_body.as_deref(),
            OrionError::Transport(_) => None,
        }
    }

    /// True for every 4xx, not-found included.
    pub fn is_client_error(&self) -> bool {
        matches!(self, OrionError::NotFound { .. } | OrionError::Client { .. })
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, OrionError::Server { .. })
    }
}

impl HttpStatusError for OrionError {
    fn not_found(entity_id: String, response_body: Option<String>) -> Self {
        OrionError::NotFound {
            entity_id,
            response_body,
        }
    }

    fn client(status_code: u16, message: String, response_body: Option<String>) -> Self {
        OrionError::Client {
            status_code,
            message,
            response_body,
        }
    }

    fn server(status_code: u16, message: String, response_body: Option<String>) -> Self {
        OrionError::Server {
            status_code,
            message,
            response_body,
        }
    }
}
