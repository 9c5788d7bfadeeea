//! DSpace `find-by-metadata-field` client
//!
//! API docs: https://wiki.lyrasis.org/display/DSDOC6x/REST+API
//! The repository does the initial match; callers narrow the result with
//! [`crate::filter`].

use crate::error::TransportError;
use crate::http::HttpClient;
use crate::model::{Document, MetadataQuery};
use url::Url;

pub const FIND_BY_METADATA_PATH: &str = "/rest/items/find-by-metadata-field";

/// Anything that can answer a metadata query with candidate items
#[allow(async_fn_in_trait)]
pub trait MetadataSource {
    async fn find_by_metadata(&self, query: &MetadataQuery)
        -> Result<Vec<Document>, TransportError>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    async fn find_by_metadata(
        &self,
        query: &MetadataQuery,
    ) -> Result<Vec<Document>, TransportError> {
        (**self).find_by_metadata(query).await
    }
}

pub struct DspaceClient {
    http: HttpClient,
    endpoint: Url,
}

impl DspaceClient {
    /// Client for the repository at `base_url` with the default transport
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_http(base_url, HttpClient::with_defaults()?)
    }

    pub fn with_http(base_url: &str, http: HttpClient) -> Result<Self, TransportError> {
        Ok(Self {
            http,
            endpoint: find_by_metadata_url(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Decode a `find-by-metadata-field` response body.
    ///
    /// A `null` body is an empty result.
    pub fn parse_items_response(json: &str) -> Result<Vec<Document>, TransportError> {
        let items: Option<Vec<Document>> = serde_json::from_str(json)?;
        Ok(items.unwrap_or_default())
    }
}

impl MetadataSource for DspaceClient {
    async fn find_by_metadata(
        &self,
        query: &MetadataQuery,
    ) -> Result<Vec<Document>, TransportError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            key = %query.key,
            value = %query.value,
            "Querying repository"
        );

        let response = self
            .http
            .post_json(self.endpoint.as_str(), query)
            .await?
            .error_for_status()?;
        let items = Self::parse_items_response(&response.body)?;

        tracing::debug!(count = items.len(), key = %query.key, "Repository returned candidates");
        Ok(items)
    }
}

/// `{base}/rest/items/find-by-metadata-field?expand=metadata`
fn find_by_metadata_url(base_url: &str) -> Result<Url, TransportError> {
    let raw = format!(
        "{}{}?expand=metadata",
        base_url.trim().trim_end_matches('/'),
        FIND_BY_METADATA_PATH
    );
    Url::parse(&raw).map_err(|_| TransportError::InvalidUrl { url: raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://dspace.ut.ee")]
    #[case("https://dspace.ut.ee/")]
    #[case("https://dspace.ut.ee///")]
    fn test_endpoint_strips_trailing_slashes(#[case] base: &str) {
        let client = DspaceClient::new(base).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://dspace.ut.ee/rest/items/find-by-metadata-field?expand=metadata"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            DspaceClient::new("not a url"),
            Err(TransportError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_parse_null_response() {
        assert!(DspaceClient::parse_items_response("null").unwrap().is_empty());
        assert!(DspaceClient::parse_items_response("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_response() {
        assert!(matches!(
            DspaceClient::parse_items_response("<html>Service Unavailable</html>"),
            Err(TransportError::Decode { .. })
        ));
        assert!(matches!(
            DspaceClient::parse_items_response(r#"{"items": []}"#),
            Err(TransportError::Decode { .. })
        ));
    }
}
