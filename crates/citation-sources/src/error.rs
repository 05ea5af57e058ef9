//! Adapter error kinds. `Display` is for logs; [`LookupError::user_message`] and friends give the short
//! text shown to the chat user.

use thiserror::Error;

/// Crossref lookup failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Invalid DOI: {0}")]
    InvalidDoi(String),

    #[error("Crossref request failed: {0}")]
    Request(String),

    #[error("Crossref returned HTTP {0}")]
    Status(u16),

    #[error("Unexpected Crossref response format: {0}")]
    MalformedResponse(String),
}

impl LookupError {
    pub fn user_message(&self) -> String {
        match self {
            LookupError::InvalidDoi(doi) => format!("Некорректный DOI: {}", doi),
            LookupError::Request(e) => format!("Ошибка запроса к CrossRef: {}", e),
            LookupError::Status(404) => "DOI не найден в CrossRef".to_string(),
            LookupError::Status(status) => {
                format!("Ошибка запроса к CrossRef (status={})", status)
            }
            LookupError::MalformedResponse(_) => {
                "Неожиданный формат ответа от CrossRef".to_string()
            }
        }
    }
}

/// eLibrary page fetch failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid page URL: {0}")]
    InvalidUrl(String),

    #[error("Page request failed: {0}")]
    Request(String),

    #[error("Page returned HTTP {0}")]
    Status(u16),
}

impl FetchError {
    pub fn user_message(&self) -> String {
        match self {
            FetchError::InvalidUrl(url) => format!("Некорректная ссылка: {}", url),
            FetchError::Request(e) => format!("Ошибка запроса к eLibrary: {}", e),
            FetchError::Status(status) => {
                format!("Страница eLibrary не доступна (status={})", status)
            }
        }
    }
}

/// Any failure to turn a message into metadata.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Input is neither a DOI nor a URL: {0}")]
    Unrecognized(String),
}

impl SourceError {
    pub fn user_message(&self) -> String {
        match self {
            SourceError::Lookup(e) => e.user_message(),
            SourceError::Fetch(e) => e.user_message(),
            SourceError::Unrecognized(_) => {
                "Не удалось распознать DOI. Пример: 10.1038/nphys1170".to_string()
            }
        }
    }
}
