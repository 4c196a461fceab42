/// Mars rover API client
use crate::config::{AppConfig, DEFAULT_API_KEY, DEFAULT_API_URL};
use crate::domain::{ManifestEnvelope, MarsPhotoReference, MarsRover, PhotosEnvelope};
use crate::errors::{ClientError, ClientResult};
use crate::loader::DataLoader;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const FETCH_ROVER: &str = "fetch_mars_rover";
const FETCH_PHOTOS: &str = "fetch_photos";

/// Client for the rover manifest and photo listing endpoints.
///
/// Stateless between calls; the only shared piece is the injected loader.
pub struct MarsRoverClient<L> {
    loader: Arc<L>,
    base_url: String,
    api_key: String,
}

impl<L> Clone for MarsRoverClient<L> {
    fn clone(&self) -> Self {
        Self {
            loader: Arc::clone(&self.loader),
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

impl<L: DataLoader + 'static> MarsRoverClient<L> {
    /// Client for the public NASA endpoint with the demo key
    pub fn new(loader: Arc<L>) -> Self {
        Self::with_endpoint(loader, DEFAULT_API_URL, DEFAULT_API_KEY)
    }

    pub fn with_endpoint(
        loader: Arc<L>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            loader,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(loader: Arc<L>, config: &AppConfig) -> Self {
        Self::with_endpoint(loader, &config.mars_api_url, &config.nasa_api_key)
    }

    /// Fetch the photo manifest of the rover called `name`
    pub async fn fetch_mars_rover(&self, name: &str) -> ClientResult<MarsRover> {
        let url = self
            .endpoint(&["manifests", name], &[])
            .map_err(|e| ClientError::failed(FETCH_ROVER, e))?;

        let envelope: ManifestEnvelope = self.load_json(FETCH_ROVER, &url).await?;
        debug!(
            rover = %envelope.photo_manifest.name,
            sols = envelope.photo_manifest.sol_descriptions.len(),
            "decoded manifest"
        );
        Ok(envelope.photo_manifest)
    }

    /// Fetch the photos `rover` took on `sol`, in API order
    pub async fn fetch_photos(
        &self,
        rover: &MarsRover,
        sol: u32,
    ) -> ClientResult<Vec<MarsPhotoReference>> {
        let url = self
            .endpoint(
                &["rovers", rover.name.as_str(), "photos"],
                &[("sol", sol.to_string())],
            )
            .map_err(|e| ClientError::failed(FETCH_PHOTOS, e))?;

        let envelope: PhotosEnvelope = self.load_json(FETCH_PHOTOS, &url).await?;
        debug!(rover = %rover.name, sol, photos = envelope.photos.len(), "decoded photos");
        Ok(envelope.photos)
    }

    /// Run `fetch_mars_rover` on the runtime and hand the result to `completion`
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime; panics otherwise.
    pub fn fetch_mars_rover_then<F>(&self, name: impl Into<String>, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(ClientResult<MarsRover>) + Send + 'static,
    {
        let client = self.clone();
        let name = name.into();
        tokio::spawn(async move {
            let result = client.fetch_mars_rover(&name).await;
            completion(result);
        })
    }

    /// Run `fetch_photos` on the runtime and hand the result to `completion`
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime; panics otherwise.
    pub fn fetch_photos_then<F>(&self, rover: MarsRover, sol: u32, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(ClientResult<Vec<MarsPhotoReference>>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let result = client.fetch_photos(&rover, sol).await;
            completion(result);
        })
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, String> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| format!("invalid base URL {}: {}", self.base_url, e))?;

        url.path_segments_mut()
            .map_err(|_| format!("{} cannot be a base URL", self.base_url))?
            .pop_if_empty()
            .extend(segments);

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            if !self.api_key.is_empty() {
                pairs.append_pair("api_key", &self.api_key);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }

    async fn load_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &Url,
    ) -> ClientResult<T> {
        debug!(operation, %url, "fetching");

        let bytes = self.loader.load_url(url).await.map_err(|e| {
            warn!(operation, status = ?e.status(), error = %e, "load failed");
            ClientError::failed(operation, e)
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(operation, error = %e, "decode failed");
            ClientError::failed(operation, e)
        })
    }
}
