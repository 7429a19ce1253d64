//! Product images
//!
//! A product's `image` reference is resolved once into an [`ImageSource`].
//! Remote images are downloaded in the background with `reqwest` and kept as
//! iced handles in an [`ImageCache`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use reqwest::Client;

/// Where a product image can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Local(PathBuf),
    Remote(String),
    /// Empty reference or a local path that does not exist.
    Missing,
}

impl ImageSource {
    pub fn resolve(reference: &str) -> Self {
        let reference = reference.trim();

        if reference.starts_with("http://") || reference.starts_with("https://") {
            ImageSource::Remote(reference.to_string())
        } else if !reference.is_empty() && Path::new(reference).is_file() {
            ImageSource::Local(PathBuf::from(reference))
        } else {
            ImageSource::Missing
        }
    }

    pub fn remote_url(&self) -> Option<&str> {
        match self {
            ImageSource::Remote(url) => Some(url),
            _ => None,
        }
    }
}

/// Download state of one remote image.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(Handle),
    Failed,
}

/// Remote images keyed by URL.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: HashMap<String, Thumbnail>,
}

impl ImageCache {
    /// Mark remote sources as loading and return the URLs that still need a download.
    pub fn request<'a>(&mut self, sources: impl IntoIterator<Item = &'a ImageSource>) -> Vec<String> {
        let mut pending = Vec::new();
        for url in sources.into_iter().filter_map(ImageSource::remote_url) {
            if !self.entries.contains_key(url) {
                self.entries.insert(url.to_string(), Thumbnail::Loading);
                pending.push(url.to_string());
            }
        }
        pending
    }

    /// Record the outcome of a download.
    pub fn finish(&mut self, url: &str, result: Result<Vec<u8>, String>) {
        let thumbnail = match result {
            Ok(bytes) => Thumbnail::Ready(Handle::from_bytes(bytes)),
            Err(e) => {
                tracing::warn!("Could not load image {}: {}", url, e);
                Thumbnail::Failed
            }
        };
        self.entries.insert(url.to_string(), thumbnail);
    }

    pub fn get(&self, url: &str) -> Option<&Thumbnail> {
        self.entries.get(url)
    }

    /// Handle to draw for `source`, if one is available yet.
    pub fn handle_for(&self, source: &ImageSource) -> Option<Handle> {
        match source {
            ImageSource::Local(path) => Some(Handle::from_path(path.clone())),
            ImageSource::Remote(url) => match self.get(url) {
                Some(Thumbnail::Ready(handle)) => Some(handle.clone()),
                _ => None,
            },
            ImageSource::Missing => None,
        }
    }
}

/// Download one image.
pub async fn fetch(client: Client, url: String) -> Result<Vec<u8>, String> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}
