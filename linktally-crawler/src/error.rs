use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("malformed URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("unsupported content type: {}", content_type.as_deref().unwrap_or("<missing>"))]
    UnsupportedContentType { content_type: Option<String> },
}

pub type Result<T> = std::result::Result<T, CrawlError>;
