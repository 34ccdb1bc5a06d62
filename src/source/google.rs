//! Google Sheets v4 values API client

use super::SheetSource;
use crate::error::{GslocError, GslocResult};
use crate::types::{CellValue, SheetData};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets/";
const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
const TIMEOUT_SECS: u64 = 60;

/// Reads a whole tab through `spreadsheets.values.get`.
///
/// With a service-account key the request carries a bearer token; without
/// one it goes out unauthenticated, which only works for public sheets.
pub struct GoogleSheetsClient {
    client: Client,
    service_account_json: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl GoogleSheetsClient {
    pub fn new(service_account_json: Option<PathBuf>) -> GslocResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(concat!("gsloc/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GslocError::DataSource(format!("unable to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            service_account_json,
        })
    }

    /// `.../spreadsheets/{id}/values/{sheet}` with both segments percent-encoded
    pub fn values_url(spreadsheet_id: &str, sheet_name: &str) -> GslocResult<Url> {
        let mut url = Url::parse(SHEETS_API_BASE)
            .map_err(|e| GslocError::DataSource(format!("invalid API URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| GslocError::DataSource("invalid API URL".to_string()))?
            .pop_if_empty()
            .push(spreadsheet_id)
            .push("values")
            .push(sheet_name);
        Ok(url)
    }

    /// Exchange the service-account key for an access token.
    ///
    /// yup-oauth2 is async-only, so the exchange runs on a throwaway
    /// current-thread runtime that is gone before the blocking fetch starts.
    fn access_token(&self) -> GslocResult<Option<String>> {
        let Some(key_path) = &self.service_account_json else {
            debug!("no service account configured, sending unauthenticated request");
            return Ok(None);
        };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let token = runtime.block_on(fetch_token(key_path))?;

        debug!(key = %key_path.display(), "obtained service account token");
        Ok(Some(token))
    }
}

impl SheetSource for GoogleSheetsClient {
    fn fetch_values(&self, spreadsheet_id: &str, sheet_name: &str) -> GslocResult<SheetData> {
        let url = Self::values_url(spreadsheet_id, sheet_name)?;
        info!(spreadsheet_id, sheet_name, "fetching sheet values");

        let mut request = self.client.get(url).query(&[("majorDimension", "ROWS")]);
        if let Some(token) = self.access_token()? {
            request = request.bearer_auth(token);
        }

        let resp = request.send().map_err(|e| {
            GslocError::DataSource(format!("unable to retrieve data from sheet: {e}"))
        })?;

        let status = resp.status();
        let body = resp.text().map_err(|e| {
            GslocError::DataSource(format!("unable to read sheet response: {e}"))
        })?;

        if !status.is_success() {
            return Err(GslocError::DataSource(extract_error_message(status, &body)));
        }

        let rows = parse_values(&body)?;
        debug!(rows = rows.len(), "sheet values received");
        Ok(rows)
    }
}

/// Service-account JWT grant for the read-only Sheets scope
async fn fetch_token(key_path: &Path) -> GslocResult<String> {
    let key = yup_oauth2::read_service_account_key(key_path)
        .await
        .map_err(|e| {
            GslocError::DataSource(format!(
                "can't read service account key '{}': {e}",
                key_path.display()
            ))
        })?;

    let auth = yup_oauth2::ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| GslocError::DataSource(format!("unable to create authenticator: {e}")))?;

    let token = auth
        .token(&[READONLY_SCOPE])
        .await
        .map_err(|e| GslocError::DataSource(format!("unable to obtain access token: {e}")))?;

    token
        .token()
        .map(str::to_string)
        .ok_or_else(|| GslocError::DataSource("service account returned no access token".to_string()))
}

/// Decode a `ValueRange` body into typed cells
fn parse_values(body: &str) -> GslocResult<SheetData> {
    let range: ValueRange = serde_json::from_str(body)?;
    Ok(range
        .values
        .into_iter()
        .map(|row| row.into_iter().map(CellValue::from).collect())
        .collect())
}

/// Prefer the API's own `error.message`, fall back to the raw body
fn extract_error_message(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    if message.is_empty() {
        format!("Sheets API returned {status}")
    } else {
        format!("Sheets API returned {status}: {message}")
    }
}
