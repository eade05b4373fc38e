use pf_profile::{CollaboratorError, CollaboratorResult, ImageLoader};

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;

/// Downloads an avatar and decodes it, the terminal's stand-in for a
/// browser image preload.
#[derive(Debug, Clone, Default)]
pub struct HttpImageLoader {
    client: ReqwestClient,
}

impl HttpImageLoader {
    pub fn new(client: ReqwestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn preload(&self, url: &str) -> CollaboratorResult<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CollaboratorError::image(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::image(format!("{url} returned {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CollaboratorError::image(format!("body read failed: {e}")))?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| CollaboratorError::image(format!("decode failed: {e}")))?;

        debug!(
            "Preloaded {url} ({}x{})",
            decoded.width(),
            decoded.height()
        );
        Ok(())
    }
}
