/// Gateway errors for the remote catalog service.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.request_failed")]
    RequestFailed,
    #[error("gateway.unexpected_status")]
    UnexpectedStatus(u16),
    #[error("gateway.invalid_response")]
    InvalidResponse,
}

impl GatewayError {
    pub fn request_failed() -> Self {
        GatewayError::RequestFailed
    }
    pub fn unexpected_status(status: u16) -> Self {
        GatewayError::UnexpectedStatus(status)
    }
    pub fn invalid_response() -> Self {
        GatewayError::InvalidResponse
    }
}
