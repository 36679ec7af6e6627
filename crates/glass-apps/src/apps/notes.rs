//! Notes Application
//!
//! A single text area bound to the shell-owned notes buffer. The window
//! itself keeps no state: every Notes window edits the same buffer.

use super::{ContentProvider, ContentView, RenderContext};
use crate::catalog::AppKind;
use alloc::string::{String, ToString};
use serde::Serialize;

/// Placeholder shown while the buffer is empty
pub const NOTES_PLACEHOLDER: &str = "Yahan likho... cute thoughts, to-do, ya shayari ✨";

/// Notes window marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotesApp;

/// Notes content view
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NotesView {
    pub value: String,
    pub placeholder: &'static str,
}

impl ContentProvider for NotesApp {
    fn kind(&self) -> AppKind {
        AppKind::Notes
    }

    fn render(&self, ctx: &RenderContext<'_>) -> ContentView {
        ContentView::Notes(NotesView {
            value: ctx.notes.to_string(),
            placeholder: NOTES_PLACEHOLDER,
        })
    }
}
