// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Connection, session, and raw method invocation

use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;
use vim_api::{
    DEFAULT_API_RELEASE, LoginRequest, ManagedObjectReference, MethodFault, SERVICE_INSTANCE,
    SESSION_HEADER, ServiceContent, UserSession,
};

use crate::error::{Error, Result};

/// Default per-request HTTP timeout
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// How to reach and authenticate against a vCenter or ESXi endpoint
#[derive(Debug)]
pub struct ConnectConfig {
    /// Service URL, e.g. `https://vcenter.example.com/sdk`
    pub url: String,
    pub username: String,
    pub password: SecretString,
    /// VI/JSON release segment of every path
    pub api_release: String,
    /// Accept invalid or self-signed certificates
    pub insecure: bool,
    pub request_timeout: Duration,
}

impl ConnectConfig {
    pub fn new(url: impl Into<String>, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password,
            api_release: DEFAULT_API_RELEASE.to_string(),
            insecure: false,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_api_release(mut self, release: impl Into<String>) -> Self {
        self.api_release = release.into();
        self
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Authenticated VI/JSON session
///
/// Holds the service content read at connect time and the session token
/// handed out by `Login`. Call [`VimClient::logout`] when done; the server
/// otherwise keeps the session until it idles out.
pub struct VimClient {
    http: reqwest::Client,
    base: Url,
    content: ServiceContent,
    session: Option<String>,
}

impl std::fmt::Debug for VimClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VimClient")
            .field("base", &self.base.as_str())
            .field("logged_in", &self.session.is_some())
            .finish()
    }
}

/// Turn a user-supplied service URL into the VI/JSON base for `release`
///
/// A trailing `/sdk` (the SOAP endpoint users are used to typing) is
/// dropped; query and fragment are discarded.
pub(crate) fn api_base(url: &str, release: &str) -> Result<Url> {
    let invalid = |reason: &str| Error::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let mut base = Url::parse(url).map_err(|e| invalid(&e.to_string()))?;
    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(invalid("scheme must be http or https"));
    }
    if base.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if release.is_empty() || release.contains('/') {
        return Err(invalid("API release must be a single path segment"));
    }

    let prefix = base.path().trim_end_matches('/');
    let prefix = prefix.strip_suffix("/sdk").unwrap_or(prefix).to_string();
    base.set_path(&format!("{}/sdk/vim25/{}/", prefix, release));
    base.set_query(None);
    base.set_fragment(None);
    Ok(base)
}

impl VimClient {
    /// Read the service content and log in
    pub async fn connect(config: &ConnectConfig) -> Result<Self> {
        crate::tls::install_crypto_provider();

        let base = api_base(&config.url, &config.api_release)?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("vim-client/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(config.insecure)
            .build()?;

        tracing::debug!(base = %base, "Connecting");

        let content = read_service_content(&http, &base).await?;
        tracing::debug!(
            product = %content.about.full_name,
            api_version = %content.about.api_version,
            "Read service content"
        );

        let mut client = Self {
            http,
            base,
            content,
            session: None,
        };

        let session = client.login(&config.username, &config.password).await?;
        tracing::debug!(user = %session.user_name, "Logged in");

        Ok(client)
    }

    /// Service content read at connect time
    pub fn service_content(&self) -> &ServiceContent {
        &self.content
    }

    async fn login(&mut self, username: &str, password: &SecretString) -> Result<UserSession> {
        let session_manager = self.session_manager()?.clone();
        let body = LoginRequest {
            user_name: username.to_string(),
            password: password.expose_secret().to_string(),
            locale: None,
        };

        let url = self.endpoint(&session_manager, "Login")?;
        let response = self.http.post(url).json(&body).send().await?;
        let status = response.status();
        let token = response
            .headers()
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response.text().await?;

        if !status.is_success() {
            return Err(failure("Login", status, text));
        }

        let session = decode("Login", &text)?;
        self.session = Some(token.ok_or(Error::MissingSessionToken)?);
        Ok(session)
    }

    /// End the session
    pub async fn logout(self) -> Result<()> {
        let session_manager = self.session_manager()?.clone();
        self.invoke_void(&session_manager, "Logout").await?;
        tracing::debug!("Logged out");
        Ok(())
    }

    fn session_manager(&self) -> Result<&ManagedObjectReference> {
        self.content
            .session_manager
            .as_ref()
            .ok_or(Error::MissingManager("session manager"))
    }

    pub(crate) fn view_manager(&self) -> Result<&ManagedObjectReference> {
        self.content
            .view_manager
            .as_ref()
            .ok_or(Error::MissingManager("view manager"))
    }

    /// `{base}/{type}/{id}/{member}`
    fn endpoint(&self, moref: &ManagedObjectReference, member: &str) -> Result<Url> {
        let relative = format!(
            "{}/{}/{}",
            urlencoding::encode(&moref.kind),
            urlencoding::encode(&moref.value),
            member
        );
        self.base.join(&relative).map_err(|e| Error::InvalidUrl {
            url: format!("{}{}", self.base, relative),
            reason: e.to_string(),
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session {
            Some(token) => request.header(SESSION_HEADER, token),
            None => request,
        }
    }

    /// Send a request and return the body of a 2xx response
    async fn send(&self, request: RequestBuilder, method: &str) -> Result<String> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            Ok(text)
        } else {
            Err(failure(method, status, text))
        }
    }

    /// Invoke a method that returns a value
    pub(crate) async fn invoke<B, R>(
        &self,
        moref: &ManagedObjectReference,
        method: &str,
        body: &B,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        tracing::debug!(method, object = %moref, "Invoking");
        let request = self.http.post(self.endpoint(moref, method)?).json(body);
        let text = self.send(request, method).await?;
        decode(method, &text)
    }

    /// Invoke a method whose result may be unset (empty body or `null`)
    pub(crate) async fn invoke_optional<B, R>(
        &self,
        moref: &ManagedObjectReference,
        method: &str,
        body: &B,
    ) -> Result<Option<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        tracing::debug!(method, object = %moref, "Invoking");
        let request = self.http.post(self.endpoint(moref, method)?).json(body);
        let text = self.send(request, method).await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        decode(method, &text)
    }

    /// Invoke a method that takes no parameters and returns nothing
    pub(crate) async fn invoke_void(
        &self,
        moref: &ManagedObjectReference,
        method: &str,
    ) -> Result<()> {
        tracing::debug!(method, object = %moref, "Invoking");
        let request = self.http.post(self.endpoint(moref, method)?);
        self.send(request, method).await?;
        Ok(())
    }

    /// Read one property of a managed object
    pub(crate) async fn property<R: DeserializeOwned>(
        &self,
        moref: &ManagedObjectReference,
        name: &str,
    ) -> Result<R> {
        tracing::debug!(property = name, object = %moref, "Reading");
        let request = self.http.get(self.endpoint(moref, name)?);
        let text = self.send(request, name).await?;
        decode(name, &text)
    }
}

/// `ServiceInstance.content` is readable without a session
async fn read_service_content(http: &reqwest::Client, base: &Url) -> Result<ServiceContent> {
    let url = base
        .join(&format!("{0}/{0}/content", SERVICE_INSTANCE))
        .map_err(|e| Error::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
    let response = http.get(url).send().await?;
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(failure("content", status, text));
    }
    decode("content", &text)
}

fn decode<R: DeserializeOwned>(method: &str, text: &str) -> Result<R> {
    serde_json::from_str(text).map_err(|source| Error::Decode {
        method: method.to_string(),
        source,
    })
}

/// Map a non-2xx response to a fault, or to a raw error if the body is not one
fn failure(method: &str, status: StatusCode, body: String) -> Error {
    match serde_json::from_str::<MethodFault>(&body) {
        Ok(fault) => Error::Fault {
            method: method.to_string(),
            status: status.as_u16(),
            fault,
        },
        Err(_) => Error::UnexpectedResponse {
            method: method.to_string(),
            status: status.as_u16(),
            body,
        },
    }
}
