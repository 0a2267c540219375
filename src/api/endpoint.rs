//! Endpoint URL construction.

use reqwest::Url;

use crate::api::error::{ApiError, ApiResult};
use crate::network::Network;

/// Builds fully-qualified endpoint URLs of the form
/// `{base_url}/{coin}/{chain}{path}?token={token}`.
#[derive(Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
    network: Network,
    token: Option<String>,
}

impl UrlBuilder {
    pub fn new(base_url: impl Into<String>, network: Network, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            network,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build the URL for `path`, which must start with `/`.
    pub fn build(&self, path: &str) -> ApiResult<Url> {
        let raw = format!(
            "{}/{}/{}{}",
            self.base_url,
            self.network.coin(),
            self.network.chain(),
            path
        );
        let mut url =
            Url::parse(&raw).map_err(|e| ApiError::UrlBuild(format!("{}: {}", raw, e)))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::UrlBuild(format!("{}: not a base URL", raw)));
        }
        if let Some(token) = &self.token {
            url.query_pairs_mut().append_pair("token", token);
        }
        Ok(url)
    }
}

// Keeps the token out of `{:?}` output.
impl std::fmt::Debug for UrlBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlBuilder")
            .field("base_url", &self.base_url)
            .field("network", &self.network)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Render a URL for logs with the token query value masked.
pub(crate) fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "token" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    if pairs.is_empty() {
        return shown.to_string();
    }
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_token() {
        let builder = UrlBuilder::new("https://api.blockcypher.com/v1/", Network::BitcoinMain, None);
        let url = builder.build("/oap/addrs").unwrap();
        assert_eq!(url.as_str(), "https://api.blockcypher.com/v1/btc/main/oap/addrs");
    }

    #[test]
    fn test_build_with_token() {
        let builder = UrlBuilder::new(
            "https://api.blockcypher.com/v1",
            Network::BlockCypherTest,
            Some("secret".to_string()),
        );
        let url = builder.build("/oap/abc123/txs/deadbeef").unwrap();
        assert_eq!(url.path(), "/v1/bcy/test/oap/abc123/txs/deadbeef");
        assert_eq!(url.query(), Some("token=secret"));
    }

    #[test]
    fn test_empty_token_ignored() {
        let builder = UrlBuilder::new("http://localhost", Network::BitcoinMain, Some(String::new()));
        assert!(!builder.has_token());
        assert_eq!(builder.build("/oap/issue").unwrap().query(), None);
    }

    #[test]
    fn test_malformed_base_url() {
        let builder = UrlBuilder::new("not a url", Network::BitcoinMain, None);
        assert!(matches!(builder.build("/oap/addrs"), Err(ApiError::UrlBuild(_))));
    }

    #[test]
    fn test_redacted_hides_token() {
        let builder =
            UrlBuilder::new("http://localhost", Network::BitcoinMain, Some("secret".into()));
        let url = builder.build("/oap/addrs").unwrap();
        let shown = redacted(&url);
        assert!(!shown.contains("secret"));
        assert!(shown.ends_with("token=***"));
    }

    #[test]
    fn test_debug_hides_token() {
        let builder =
            UrlBuilder::new("http://localhost", Network::BitcoinMain, Some("secret".into()));
        assert!(!format!("{:?}", builder).contains("secret"));
    }
}
