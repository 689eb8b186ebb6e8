//! Photo viewer app
//!
//! A configured gallery and a single preview slot; selecting a thumbnail
//! swaps the preview.

use tracing::debug;

use crate::config::PhotosConfig;

/// Photo viewer state
#[derive(Debug)]
pub struct PhotoViewer {
    gallery: Vec<String>,
    preview: Option<String>,
}

impl PhotoViewer {
    pub fn new(config: &PhotosConfig) -> Self {
        Self {
            preview: config.gallery.first().cloned(),
            gallery: config.gallery.clone(),
        }
    }

    /// Swap the preview to `src`
    pub fn select(&mut self, src: &str) {
        debug!("Photo preview: {}", src);
        self.preview = Some(src.to_string());
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn gallery(&self) -> &[String] {
        &self.gallery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_gallery_entry_is_preselected() {
        let photos = PhotoViewer::new(&PhotosConfig::default());
        assert_eq!(photos.preview(), Some("sunset.jpg"));
        assert_eq!(photos.gallery().len(), 3);
    }

    #[test]
    fn selecting_swaps_the_preview() {
        let mut photos = PhotoViewer::new(&PhotosConfig::default());
        photos.select("mountains.jpg");
        assert_eq!(photos.preview(), Some("mountains.jpg"));
    }

    #[test]
    fn empty_gallery_has_no_preview() {
        let photos = PhotoViewer::new(&PhotosConfig { gallery: vec![] });
        assert_eq!(photos.preview(), None);
    }
}
