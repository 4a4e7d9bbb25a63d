use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use bifrost_config::IdentityConfig;
use bytes::Bytes;
use http::{header, Method, Request, StatusCode};
use http_body_util::{BodyExt, Empty};
use hyper_util::rt::TokioIo;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_rustls::rustls::pki_types::ServerName;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;
use tracing::debug;
use url::{Host, Position, Url};

use crate::error::IdentityError;
use crate::{IdentityProvider, UserProfile};

/// Client for the REST user directory of the identity provider.
///
/// Every request opens its own connection, there is no pooling, caching or
/// retrying.
pub struct DirectoryClient {
    api_url: Url,
    secret_key: String,
    tls: TlsConnector,
}

impl DirectoryClient {
    pub fn new(api_url: &str, secret_key: impl Into<String>) -> Result<Self, IdentityError> {
        let mut api_url = Url::parse(api_url)?;
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        let mut root_cert_store = RootCertStore::empty();
        root_cert_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let config = ClientConfig::builder()
            .with_root_certificates(root_cert_store)
            .with_no_client_auth();

        Ok(Self {
            api_url,
            secret_key: secret_key.into(),
            tls: TlsConnector::from(Arc::new(config)),
        })
    }

    pub fn from_config(config: &IdentityConfig) -> Result<Self, IdentityError> {
        Self::new(&config.api_url, config.secret_key.clone())
    }

    fn users_endpoint(&self) -> Result<Url, IdentityError> {
        Ok(self.api_url.join("v1/users")?)
    }

    /// `None` for ids that cannot name a single path segment, these would
    /// address the listing endpoint instead of a user.
    fn user_url(&self, user_id: &str) -> Result<Option<Url>, IdentityError> {
        if matches!(user_id, "" | "." | "..") {
            return Ok(None);
        }
        let mut url = self.users_endpoint()?;
        url.path_segments_mut()
            .map_err(|()| IdentityError::MissingHost(self.api_url.to_string()))?
            .push(user_id);
        Ok(Some(url))
    }

    fn users_url(&self, user_ids: &[String]) -> Result<Url, IdentityError> {
        let mut url = self.users_endpoint()?;
        {
            let mut query = url.query_pairs_mut();
            for user_id in user_ids {
                query.append_pair("user_id", user_id);
            }
            query.append_pair("limit", &user_ids.len().to_string());
        }
        Ok(url)
    }

    async fn get(&self, url: &Url) -> Result<(StatusCode, Bytes), IdentityError> {
        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(IdentityError::UnsupportedScheme(scheme.to_owned()));
        }
        let (Some(host), Some(authority)) = (url.host(), url.host_str()) else {
            return Err(IdentityError::MissingHost(url.to_string()));
        };
        let port = url
            .port_or_known_default()
            .ok_or_else(|| IdentityError::MissingHost(url.to_string()))?;
        let authority = url
            .port()
            .map_or_else(|| authority.to_owned(), |port| format!("{authority}:{port}"));

        let request = Request::builder()
            .method(Method::GET)
            .uri(&url[Position::BeforePath..])
            .header(header::HOST, authority)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.secret_key))
            .header(header::ACCEPT, "application/json")
            .body(Empty::<Bytes>::new())?;

        debug!(%host, path = url.path(), "identity provider request");
        let stream = match &host {
            Host::Domain(domain) => TcpStream::connect((*domain, port)).await?,
            Host::Ipv4(address) => TcpStream::connect((*address, port)).await?,
            Host::Ipv6(address) => TcpStream::connect((*address, port)).await?,
        };
        if scheme == "https" {
            let server_name = match host {
                Host::Domain(domain) => ServerName::try_from(domain.to_owned())?,
                Host::Ipv4(address) => ServerName::IpAddress(IpAddr::V4(address).into()),
                Host::Ipv6(address) => ServerName::IpAddress(IpAddr::V6(address).into()),
            };
            let stream = self.tls.connect(server_name, stream).await?;
            send_request(stream, request).await
        } else {
            send_request(stream, request).await
        }
    }
}

async fn send_request<T>(
    io: T,
    request: Request<Empty<Bytes>>,
) -> Result<(StatusCode, Bytes), IdentityError>
where
    T: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let (mut sender, connection) = hyper::client::conn::http1::handshake(TokioIo::new(io)).await?;
    tokio::task::spawn(async move {
        if let Err(error) = connection.await {
            debug!(%error, "identity provider connection closed");
        }
    });

    let response = sender.send_request(request).await?;
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();
    Ok((status, body))
}

fn unexpected_status(status: StatusCode, body: &[u8]) -> IdentityError {
    IdentityError::UnexpectedStatus {
        status,
        body: String::from_utf8_lossy(body).into_owned(),
    }
}

#[async_trait]
impl IdentityProvider for DirectoryClient {
    async fn get_user(&self, user_id: &str) -> Result<Option<UserProfile>, IdentityError> {
        let Some(url) = self.user_url(user_id)? else {
            debug!(%user_id, "not a user id");
            return Ok(None);
        };
        let (status, body) = self.get(&url).await?;
        match status {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(serde_json::from_slice(&body)?)),
            status => Err(unexpected_status(status, &body)),
        }
    }

    /// One request for all ids. Ids missing from the answer resolve to `None`.
    async fn get_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<Option<UserProfile>>, IdentityError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.users_url(user_ids)?;
        let (status, body) = self.get(&url).await?;
        if !status.is_success() {
            return Err(unexpected_status(status, &body));
        }
        let profiles: Vec<UserProfile> = serde_json::from_slice(&body)?;
        let by_id: HashMap<&str, &UserProfile> = profiles
            .iter()
            .map(|profile| (profile.id.as_str(), profile))
            .collect();
        Ok(user_ids
            .iter()
            .map(|user_id| by_id.get(user_id.as_str()).map(|profile| (*profile).clone()))
            .collect())
    }
}
