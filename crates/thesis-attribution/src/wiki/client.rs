//! MediaWiki page fetching
//!
//! API docs: https://www.mediawiki.org/wiki/API:Parsing_wikitext
//! Uses `action=parse&prop=wikitext` with `formatversion=2`, which returns the
//! wikitext as a plain string.

use dspace_client::{HttpClient, TransportError};
use serde::Deserialize;

use crate::error::{AttributionError, Result};

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParsedPage>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    wikitext: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

/// API error codes meaning the page is not there
const MISSING_CODES: &[&str] = &["missingtitle", "invalidtitle", "nosuchpageid"];

pub struct WikiClient {
    http: HttpClient,
    api_url: String,
}

impl WikiClient {
    pub fn new(api_url: &str, http: HttpClient) -> Self {
        Self {
            http,
            api_url: api_url.trim().to_string(),
        }
    }

    /// Raw wikitext of `page`
    pub async fn page_wikitext(&self, page: &str) -> Result<String> {
        tracing::debug!(api = %self.api_url, page, "Fetching wiki page");

        let response = self
            .http
            .get_with_params(
                &self.api_url,
                &[
                    ("action", "parse"),
                    ("page", page),
                    ("prop", "wikitext"),
                    ("format", "json"),
                    ("formatversion", "2"),
                ],
            )
            .await?
            .error_for_status()?;

        Self::parse_wikitext_response(&response.body, page)
    }

    /// Extract the wikitext from a parse API response
    pub fn parse_wikitext_response(json: &str, page: &str) -> Result<String> {
        let response: ParseResponse =
            serde_json::from_str(json).map_err(TransportError::from)?;

        if let Some(error) = response.error {
            if MISSING_CODES.contains(&error.code.as_str()) {
                return Err(AttributionError::NotFound(format!("wiki page \"{}\"", page)));
            }
            return Err(TransportError::Request {
                message: format!("wiki API error {}: {}", error.code, error.info),
            }
            .into());
        }

        response
            .parse
            .and_then(|p| p.wikitext)
            .ok_or_else(|| AttributionError::NotFound(format!("wikitext of \"{}\"", page)))
    }
}
