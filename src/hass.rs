//! Home Assistant REST collaborators: entity state reads, the `remote.send_command`
//! session and the default operation source.

use std::{str::FromStr, time::Duration};

use reqwest::{header::{self, HeaderMap, HeaderValue}, StatusCode};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::climate::{DefaultModeSource, Mode};
use crate::ir::Waveform;
use crate::sensor::EntityState;
use crate::transmit::{DeviceSession, TransmitError};


#[derive(Error, Debug)]
pub enum HaError {
    #[error("invalid access token")]
    Token,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String
    },
}

impl From<HaError> for TransmitError {
    fn from(err: HaError) -> Self {
        match err {
            HaError::Http(err) if err.is_timeout() => TransmitError::Timeout,
            HaError::Token => TransmitError::Authentication,
            HaError::Status { status, .. } if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN => {
                TransmitError::Authentication
            },
            HaError::Status { status, body, .. } if status == StatusCode::BAD_REQUEST => TransmitError::InvalidPayload(body),
            other => TransmitError::Transport(other.to_string())
        }
    }
}


#[derive(Clone, Debug)]
pub struct HaClient {
    client: reqwest::Client,
    base_url: String,
}

impl HaClient {
    pub fn new(url: &str, token: &str, timeout: Duration) -> Result<Self, HaError> {
        let mut headers = HeaderMap::new();

        let mut auth_value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| HaError::Token)?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_owned(),
        })
    }

    /// Current state of an entity; `None` if Home Assistant doesn't know it.
    #[instrument(skip(self))]
    pub async fn get_state(&self, entity_id: &str) -> Result<Option<EntityState>, HaError> {
        let url = format!("{}/api/states/{}", self.base_url, entity_id);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            status if status == StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json::<EntityState>().await?)),
            status => Err(HaError::Status { url, status, body: response.text().await.unwrap_or_default() })
        }
    }

    #[instrument(skip(self, service_data))]
    pub async fn call_service(&self, domain: &str, service: &str, service_data: serde_json::Value) -> Result<(), HaError> {
        let url = format!("{}/api/services/{}/{}", self.base_url, domain, service);

        debug!("calling service {url}");

        let response = self.client.post(&url).json(&service_data).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HaError::Status { url, status, body: response.text().await.unwrap_or_default() });
        }

        Ok(())
    }
}


/// A `remote` entity managed by Home Assistant. Authentication with the transceiver is
/// Home Assistant's business, so this session never authenticates.
pub struct RemoteEntity {
    client: HaClient,
    entity_id: String
}

impl RemoteEntity {
    pub fn new(client: HaClient, entity_id: impl Into<String>) -> Self {
        Self { client, entity_id: entity_id.into() }
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    /// Service data for `remote.send_command`.
    pub fn command_data(&self, waveform: &Waveform) -> serde_json::Value {
        json!({
            "entity_id": self.entity_id,
            "command": waveform.remote_command()
        })
    }
}

impl DeviceSession for RemoteEntity {
    async fn authenticate(&mut self) -> Result<(), TransmitError> {
        Ok(())
    }

    async fn transmit(&mut self, waveform: &Waveform) -> Result<(), TransmitError> {
        let data = self.command_data(waveform);

        self.client.call_service("remote", "send_command", data).await?;

        Ok(())
    }

    fn requires_authentication(&self) -> bool {
        false
    }
}


/// Default operation read from an entity (typically an `input_select`) whose state names a mode.
pub struct HaModeSource {
    client: HaClient,
    entity_id: String
}

impl HaModeSource {
    pub fn new(client: HaClient, entity_id: impl Into<String>) -> Self {
        Self { client, entity_id: entity_id.into() }
    }
}

impl DefaultModeSource for HaModeSource {
    async fn default_mode(&mut self) -> Option<Mode> {
        let state = match self.client.get_state(&self.entity_id).await {
            Ok(Some(state)) => state.state_text(),
            Ok(None) => {
                warn!(entity_id = %self.entity_id, "default operation entity not found");
                return None;
            },
            Err(err) => {
                warn!(entity_id = %self.entity_id, %err, "failed to read default operation");
                return None;
            }
        };

        match Mode::from_str(&state) {
            Ok(mode) => {
                info!(entity_id = %self.entity_id, %mode, "default operation");
                Some(mode)
            },
            Err(_) => {
                warn!(entity_id = %self.entity_id, %state, "default operation is not a mode");
                None
            }
        }
    }
}
