use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `blog-client`.
pub enum BlogClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Токен отсутствует или отклонён сервером (HTTP 403).
    #[error("unauthorized")]
    Unauthorized,

    /// Некорректный запрос или ошибка обновления/чтения поста (HTTP 411).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Внутренняя ошибка сервера (HTTP 5xx).
    #[error("server error: {0}")]
    Server(String),
}

/// Результат операций `blog-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| format!("http status {status}"));
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Self::Unauthorized
            }
            status if status.is_server_error() => Self::Server(message),
            _ => Self::InvalidRequest(message),
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::BlogClientError;

    #[test]
    fn forbidden_maps_to_unauthorized() {
        let err = BlogClientError::from_http_status(reqwest::StatusCode::FORBIDDEN, None);
        assert!(matches!(err, BlogClientError::Unauthorized));
    }

    #[test]
    fn length_required_keeps_server_message() {
        let err = BlogClientError::from_http_status(
            reqwest::StatusCode::LENGTH_REQUIRED,
            Some("Inputs not correct".to_string()),
        );
        match err {
            BlogClientError::InvalidRequest(message) => assert_eq!(message, "Inputs not correct"),
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn server_errors_are_separated() {
        let err = BlogClientError::from_http_status(reqwest::StatusCode::BAD_GATEWAY, None);
        assert!(matches!(err, BlogClientError::Server(_)));
    }
}
