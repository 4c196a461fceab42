use super::DataLoader;
use crate::errors::{LoaderError, LoaderResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::{Method, Request, Url};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const DEFAULT_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
enum Script {
    Data(Vec<u8>),
    Error(String),
}

/// What a `MockLoader` saw of the last `load_request` call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
}

/// Scripted loader that answers every call with the same bytes or the same
/// error, after a fixed delay.
#[derive(Debug)]
pub struct MockLoader {
    script: Script,
    delay: Duration,
    request: Mutex<Option<RecordedRequest>>,
    url: Mutex<Option<Url>>,
    calls: AtomicUsize,
}

impl MockLoader {
    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        Self::scripted(Script::Data(data.into()))
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self::scripted(Script::Error(message.into()))
    }

    fn scripted(script: Script) -> Self {
        Self {
            script,
            delay: DEFAULT_DELAY,
            request: Mutex::new(None),
            url: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Last URL passed to `load_url`
    pub fn url(&self) -> Option<Url> {
        self.url.lock().clone()
    }

    /// Last request passed to `load_request`
    pub fn request(&self) -> Option<RecordedRequest> {
        self.request.lock().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> LoaderResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Always suspend at least once so the answer is never delivered inline.
        tokio::time::sleep(self.delay).await;
        tokio::task::yield_now().await;

        match &self.script {
            Script::Data(data) => Ok(data.clone()),
            Script::Error(message) => Err(LoaderError::Scripted(message.clone())),
        }
    }
}

#[async_trait]
impl DataLoader for MockLoader {
    async fn load_request(&self, request: Request) -> LoaderResult<Vec<u8>> {
        *self.request.lock() = Some(RecordedRequest {
            method: request.method().clone(),
            url: request.url().clone(),
        });
        self.respond().await
    }

    async fn load_url(&self, url: &Url) -> LoaderResult<Vec<u8>> {
        *self.url.lock() = Some(url.clone());
        self.respond().await
    }
}
