//! Music Application
//!
//! A player mockup over a fixed playlist. Each window remembers its own
//! current track; Play does not produce audio.

use super::{ContentProvider, ContentView, RenderContext};
use crate::catalog::AppKind;
use alloc::vec::Vec;
use serde::Serialize;

/// A playlist entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub length: &'static str,
}

/// The built-in playlist
pub static PLAYLIST: [Track; 3] = [
    Track { title: "Night Drive", artist: "Luna", length: "3:22" },
    Track { title: "Glass Skies", artist: "Aero", length: "2:58" },
    Track { title: "Soft Neon", artist: "Kite", length: "4:05" },
];

/// Music player state (per window)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MusicApp {
    current: usize,
    playlist: &'static [Track],
}

impl Default for MusicApp {
    fn default() -> Self {
        Self::with_playlist(&PLAYLIST)
    }
}

impl MusicApp {
    /// Player over a custom playlist, starting at the first track.
    ///
    /// An empty playlist is replaced by the built-in one so that the
    /// current index always points at a track.
    pub fn with_playlist(playlist: &'static [Track]) -> Self {
        let playlist = if playlist.is_empty() { &PLAYLIST[..] } else { playlist };
        Self { current: 0, playlist }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> &'static Track {
        &self.playlist[self.current]
    }

    /// Step back one track, wrapping from the first to the last
    pub fn prev(&mut self) {
        let len = self.playlist.len();
        self.current = (self.current + len - 1) % len;
    }

    /// Step forward one track, wrapping from the last to the first
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.playlist.len();
    }

    /// Jump to a playlist row
    ///
    /// Returns `false` and keeps the current track for out-of-range rows.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.playlist.len() {
            return false;
        }
        self.current = index;
        true
    }

    /// Placeholder for playback
    pub fn play(&self) {
        log::debug!("music: play requested for '{}'", self.current_track().title);
    }
}

/// A playlist row
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrackRow {
    #[serde(flatten)]
    pub track: Track,
    pub active: bool,
}

/// Music content view
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicView {
    pub now_playing: Track,
    pub current: usize,
    pub tracks: Vec<TrackRow>,
}

impl ContentProvider for MusicApp {
    fn kind(&self) -> AppKind {
        AppKind::Music
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> ContentView {
        let tracks = self
            .playlist
            .iter()
            .enumerate()
            .map(|(i, track)| TrackRow { track: *track, active: i == self.current })
            .collect();

        ContentView::Music(MusicView {
            now_playing: *self.current_track(),
            current: self.current,
            tracks,
        })
    }
}
