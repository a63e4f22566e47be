use async_trait::async_trait;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;

use crate::media::application::ports::outgoing::{ThumbnailError, ThumbnailGenerator};

pub const THUMBNAIL_MAX_EDGE: u32 = 400;

#[derive(Debug, Clone, Copy)]
pub struct ImageThumbnailGenerator {
    max_edge: u32,
}

impl Default for ImageThumbnailGenerator {
    fn default() -> Self {
        Self {
            max_edge: THUMBNAIL_MAX_EDGE,
        }
    }
}

impl ImageThumbnailGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThumbnailGenerator for ImageThumbnailGenerator {
    async fn generate(&self, image_bytes: Vec<u8>) -> Result<Vec<u8>, ThumbnailError> {
        let max_edge = self.max_edge;

        // Decode and resize are CPU-bound
        tokio::task::spawn_blocking(move || render_thumbnail(&image_bytes, max_edge))
            .await
            .map_err(|e| ThumbnailError::Task(e.to_string()))?
    }
}

fn render_thumbnail(bytes: &[u8], max_edge: u32) -> Result<Vec<u8>, ThumbnailError> {
    let img = image::load_from_memory(bytes).map_err(|e| ThumbnailError::Decode(e.to_string()))?;

    let (width, height) = img.dimensions();
    let resized: DynamicImage = if width.max(height) > max_edge {
        img.thumbnail(max_edge, max_edge)
    } else {
        img
    };

    let mut out = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|e| ThumbnailError::Encode(e.to_string()))?;

    Ok(out)
}
