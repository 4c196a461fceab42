/// Byte loaders the rover client fetches through
mod mock;

pub use mock::{MockLoader, RecordedRequest};

use crate::errors::{LoaderError, LoaderResult};
use async_trait::async_trait;
use reqwest::{Client, Method, Request, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches raw bytes for a request or a plain URL.
///
/// Every call resolves exactly once, with either the body or an error.
/// Nothing is retried.
#[async_trait]
pub trait DataLoader: Send + Sync {
    async fn load_request(&self, request: Request) -> LoaderResult<Vec<u8>>;

    /// GET `url`
    async fn load_url(&self, url: &Url) -> LoaderResult<Vec<u8>> {
        self.load_request(Request::new(Method::GET, url.clone()))
            .await
    }
}

/// Production loader backed by `reqwest`
pub struct HttpLoader {
    client: Client,
}

impl HttpLoader {
    pub fn new(timeout: Duration) -> LoaderResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("mars-rover-client/1.0")
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DataLoader for HttpLoader {
    async fn load_request(&self, request: Request) -> LoaderResult<Vec<u8>> {
        let url = request.url().clone();
        debug!(method = %request.method(), %url, "loading");

        let resp = self.client.execute(request).await?;

        if !resp.status().is_success() {
            warn!(status = resp.status().as_u16(), %url, "upstream returned error status");
            return Err(LoaderError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.bytes().await?;
        debug!(%url, bytes = body.len(), "loaded");
        Ok(body.to_vec())
    }
}
