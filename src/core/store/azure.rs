//! Azure Key Vault backend.
//!
//! Talks to the Key Vault REST API. Enable with `--features azure`.
//!
//! ## Authentication
//!
//! Tokens come from the Azure default credential chain
//! (`azure_identity::create_credential`): service principal environment
//! variables, managed identity, or the Azure CLI (`az login`). Nothing is
//! cached between invocations.
//!
//! ## Transport
//!
//! TLS 1.2 or newer. Certificate verification follows
//! [`Config::verify_tls`], so it is skipped for internal vault hosts and
//! when `DISABLE_SSL_VERIFY=true`.

use std::sync::Arc;

use azure_core::auth::TokenCredential;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};
use url::Url;

use super::SecretStore;
use crate::core::config::Config;
use crate::core::constants::{KEYVAULT_API_VERSION, KEYVAULT_SCOPE};
use crate::core::types::{SecretName, SecretValue};
use crate::error::{Error, Result, StoreError};

/// Secret store backed by an Azure Key Vault.
///
/// The async SDK and HTTP client run on a private current-thread runtime,
/// so every call blocks until the vault answers.
pub struct AzureKeyVault {
    vault_url: Url,
    http: reqwest::Client,
    credential: Arc<dyn TokenCredential>,
    runtime: tokio::runtime::Runtime,
}

#[derive(Debug, Deserialize)]
struct SecretBundle {
    value: Option<String>,
}

#[derive(Debug, Serialize)]
struct SetSecretRequest<'a> {
    value: &'a str,
}

#[derive(Debug, Deserialize)]
struct SecretListPage {
    #[serde(default)]
    value: Vec<SecretItem>,
    #[serde(rename = "nextLink")]
    next_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SecretItem {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl AzureKeyVault {
    /// Connect to the vault described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Authentication` if no credential source is
    /// available, or `StoreError::Runtime`/`StoreError::Connection` if the
    /// runtime or HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        info!(url = %config.vault_url(), "connecting to Key Vault");

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Runtime(format!("failed to create runtime: {}", e)))?;

        let credential = azure_identity::create_credential().map_err(|e| {
            StoreError::Authentication(format!("no valid credentials found: {}", e))
        })?;

        let http = reqwest::Client::builder()
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .danger_accept_invalid_certs(!config.verify_tls())
            .build()
            .map_err(|e| StoreError::Connection(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            vault_url: config.vault_url().clone(),
            http,
            credential,
            runtime,
        })
    }

    /// `<vault>/secrets[/<name>]?api-version=...`
    fn secrets_url(&self, name: Option<&str>) -> Result<Url> {
        let mut url = self.vault_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                StoreError::Unsupported(format!("vault url cannot be a base: {}", self.vault_url))
            })?;
            segments.pop_if_empty().push("secrets");
            if let Some(name) = name {
                segments.push(name);
            }
        }
        url.query_pairs_mut()
            .append_pair("api-version", KEYVAULT_API_VERSION);
        Ok(url)
    }

    async fn token(&self) -> Result<String> {
        let token = self
            .credential
            .get_token(&[KEYVAULT_SCOPE])
            .await
            .map_err(|e| StoreError::Authentication(e.to_string()))?;
        Ok(token.token.secret().to_string())
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let token = self.token().await?;
        request.bearer_auth(token).send().await.map_err(transport_error)
    }

    async fn fetch(&self, name: &str) -> Result<Option<SecretValue>> {
        let url = self.secrets_url(Some(name))?;
        let response = self.send(self.http.get(url)).await?;

        if is_missing(response.status()) {
            debug!(secret = %name, "secret not found");
            return Ok(None);
        }

        let bundle: SecretBundle = check(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;
        Ok(bundle.value)
    }

    async fn store(&self, name: &str, value: &str) -> Result<()> {
        let url = self.secrets_url(Some(name))?;
        let response = self
            .send(self.http.put(url).json(&SetSecretRequest { value }))
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn names(&self) -> Result<Vec<SecretName>> {
        let mut names = Vec::new();
        let mut next = Some(self.secrets_url(None)?);

        while let Some(url) = next.take() {
            trace!(url = %url, "listing secrets page");
            let page: SecretListPage = check(self.send(self.http.get(url)).await?)
                .await?
                .json()
                .await
                .map_err(transport_error)?;

            names.extend(
                page.value
                    .iter()
                    .filter_map(|item| secret_name_from_id(&item.id)),
            );

            next = match page.next_link.filter(|link| !link.is_empty()) {
                Some(link) => Some(next_page_url(&self.vault_url, &link)?),
                None => None,
            };
        }

        Ok(names)
    }
}

impl SecretStore for AzureKeyVault {
    fn backend(&self) -> &'static str {
        "azure"
    }

    fn get_secret(&self, name: &str) -> Result<Option<SecretValue>> {
        self.runtime.block_on(self.fetch(name))
    }

    fn set_secret(&self, name: &str, value: &str) -> Result<()> {
        self.runtime.block_on(self.store(name, value))
    }

    fn list_secret_names(&self) -> Result<Vec<SecretName>> {
        self.runtime.block_on(self.names())
    }
}

/// Map a non-success response to a `StoreError`.
async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = error_detail(&body).unwrap_or_else(|| status.to_string());

    match status_error(status, &detail) {
        Some(err) => Err(err.into()),
        None => Ok(response),
    }
}

/// Whether a secret lookup answered "no such secret".
fn is_missing(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND
}

/// The error for a response status, or `None` on success.
fn status_error(status: StatusCode, detail: &str) -> Option<StoreError> {
    if status.is_success() {
        return None;
    }

    Some(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            StoreError::Authentication(format!("{} ({})", detail, status))
        }
        _ => StoreError::Backend(format!("{} ({})", detail, status)),
    })
}

/// Parse a paging `nextLink`, refusing links that leave the vault.
///
/// The bearer token goes out with every page request, so the link must
/// share the vault's scheme, host and port.
fn next_page_url(vault_url: &Url, link: &str) -> Result<Url> {
    let url = Url::parse(link)
        .map_err(|e| StoreError::Backend(format!("invalid nextLink '{}': {}", link, e)))?;

    let same_origin = url.scheme() == vault_url.scheme()
        && url.host_str() == vault_url.host_str()
        && url.port_or_known_default() == vault_url.port_or_known_default();
    if !same_origin {
        return Err(StoreError::Backend(format!(
            "nextLink '{}' points outside the vault {}",
            link, vault_url
        ))
        .into());
    }

    Ok(url)
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_connect() || e.is_timeout() {
        StoreError::Connection(e.to_string()).into()
    } else {
        StoreError::Backend(e.to_string()).into()
    }
}

/// `code: message` from a Key Vault error body.
fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(body).ok()?;
    match (parsed.error.code, parsed.error.message) {
        (Some(code), Some(message)) => Some(format!("{}: {}", code, message)),
        (None, Some(message)) => Some(message),
        (Some(code), None) => Some(code),
        (None, None) => None,
    }
}

/// Secret name from an item id such as
/// `https://demo.vault.azure.net/secrets/AI-key[/<version>]`.
fn secret_name_from_id(id: &str) -> Option<SecretName> {
    let url = Url::parse(id).ok()?;
    let mut segments = url.path_segments()?;
    segments.find(|segment| *segment == "secrets")?;
    segments
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
