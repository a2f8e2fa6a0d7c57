use std::sync::Arc;

use eframe::egui::{self, load::BytesPoll, load::Bytes};

use crate::data::model::PuppyRecord;

// ---------------------------------------------------------------------------
// Image load state
// ---------------------------------------------------------------------------

/// Where a single image request stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    Loading,
    Success(Arc<[u8]>),
    Error(String),
    /// Nothing to load (the record has no image reference).
    Empty,
}

/// Anything that can turn an image URL into an [`ImageState`].
///
/// Loaders are polled once per frame; successive polls form the state stream
/// for a URL. A loader must never block.
pub trait ImageLoader {
    fn load(&self, url: &str) -> ImageState;
}

/// Resolve a puppy to the image reference its screens display.
pub fn image_url(record: &PuppyRecord) -> &str {
    &record.image_url
}

// ---------------------------------------------------------------------------
// egui-backed loader
// ---------------------------------------------------------------------------

/// Reads through egui's byte loaders (installed by `egui_extras`), which fetch
/// and cache the bytes in the background.
pub struct EguiImageLoader<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiImageLoader<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl ImageLoader for EguiImageLoader<'_> {
    fn load(&self, url: &str) -> ImageState {
        if url.trim().is_empty() {
            return ImageState::Empty;
        }
        match self.ctx.try_load_bytes(url) {
            Ok(BytesPoll::Pending { .. }) => ImageState::Loading,
            Ok(BytesPoll::Ready { bytes, .. }) => ImageState::Success(match bytes {
                Bytes::Static(b) => Arc::from(b),
                Bytes::Shared(b) => b,
            }),
            Err(e) => {
                log::debug!("Image load failed for {url}: {e}");
                ImageState::Error(e.to_string())
            }
        }
    }
}
