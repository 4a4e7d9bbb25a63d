use http::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum IdentityError {
    #[error("invalid identity provider url: {0}")]
    Url(#[from] url::ParseError),
    #[error("identity provider url has no host: {0}")]
    MissingHost(String),
    #[error("unsupported url scheme {0:?}")]
    UnsupportedScheme(String),
    #[error("invalid dns name: {0}")]
    InvalidDnsName(#[from] tokio_rustls::rustls::pki_types::InvalidDnsNameError),
    #[error("io {0}")]
    Io(#[from] std::io::Error),
    #[error("hyper {0}")]
    Hyper(#[from] hyper::Error),
    #[error("http {0}")]
    Http(#[from] http::Error),
    #[error("identity provider answered {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("invalid identity provider response: {0}")]
    Json(#[from] serde_json::Error),
}
