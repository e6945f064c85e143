//! Font fetching over HTTP.
//!
//! One blocking GET per font through a curl easy handle; the whole body is
//! buffered in memory, then handed to the caller together with the status.

use crate::config::HttpConfig;
use crate::url_model::validate_remote_url;
use std::time::Duration;
use thiserror::Error;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Only `200 OK` counts as a downloaded font.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// A GET that produced no HTTP status at all.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("{0}")]
    Curl(#[from] curl::Error),
}

/// Source of font bytes. The localizer only talks to this seam so tests can
/// substitute canned responses.
pub trait FontFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// [`FontFetcher`] backed by libcurl.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: String,
}

impl CurlFetcher {
    pub fn new(http: &HttpConfig) -> Self {
        Self {
            connect_timeout: http.connect_timeout(),
            timeout: http.timeout(),
            user_agent: http.user_agent.clone(),
        }
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

impl FontFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        validate_remote_url(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.low_speed_limit(1024)?;
        easy.low_speed_time(Duration::from_secs(30))?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(url, status, bytes = body.len(), "GET finished");
        Ok(FetchResponse { status, body })
    }
}
