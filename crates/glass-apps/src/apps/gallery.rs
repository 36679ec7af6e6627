//! Gallery Application
//!
//! A static grid of remote images. The host fetches and lays them out.

use super::{ContentProvider, ContentView, RenderContext};
use crate::catalog::AppKind;
use serde::Serialize;

/// Images shown in the gallery grid
pub static GALLERY_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?w=600",
    "https://images.unsplash.com/photo-1482192596544-9eb780fc7f66?w=600",
    "https://images.unsplash.com/photo-1500534314209-a25ddb2bd429?w=600",
    "https://images.unsplash.com/photo-1472214103451-9374bd1c798e?w=600",
    "https://images.unsplash.com/photo-1495567720989-cebdbdd97913?w=600",
    "https://images.unsplash.com/photo-1470770841072-f978cf4d019e?w=600",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryApp;

/// Gallery content view
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GalleryView {
    pub images: &'static [&'static str],
}

impl ContentProvider for GalleryApp {
    fn kind(&self) -> AppKind {
        AppKind::Gallery
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> ContentView {
        ContentView::Gallery(GalleryView { images: &GALLERY_IMAGES })
    }
}
