//! Window registry for lifecycle and flags

use glass_apps::AppKind;

use crate::math::Vec2;
use super::{SpawnCascade, WindowId, WindowRecord};

/// Ordered collection of window records
///
/// Insertion order is preserved; it is the order `list_open` reports and the
/// order windows are rendered in. Closed records stay in place as tombstones
/// until [`compact`](Self::compact) is called.
#[derive(Clone, Debug)]
pub struct WindowRegistry {
    /// All records, oldest first
    records: Vec<WindowRecord>,
    /// Next window ID
    next_id: WindowId,
    /// Spawn position generator
    cascade: SpawnCascade,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new(SpawnCascade::default())
    }
}

impl WindowRegistry {
    /// Create an empty registry spawning windows along `cascade`
    pub fn new(cascade: SpawnCascade) -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            cascade,
        }
    }

    /// Create a new window record and return its id
    pub fn launch(&mut self, app: AppKind) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let position = self.cascade.next();
        self.records.push(WindowRecord::new(id, app, position));

        log::debug!("launched {} as window {} at ({}, {})", app, id, position.x, position.y);
        id
    }

    /// Tombstone a window
    pub fn close(&mut self, id: WindowId) {
        if let Some(record) = self.open_mut(id) {
            record.closed = true;
            log::debug!("closed window {}", id);
        }
    }

    /// Flip the minimized flag
    pub fn toggle_minimize(&mut self, id: WindowId) {
        if let Some(record) = self.open_mut(id) {
            record.minimized = !record.minimized;
        }
    }

    /// Flip the maximized flag
    pub fn toggle_maximize(&mut self, id: WindowId) {
        if let Some(record) = self.open_mut(id) {
            record.maximized = !record.maximized;
        }
    }

    /// Move a window
    pub fn set_position(&mut self, id: WindowId, position: Vec2) {
        if let Some(record) = self.open_mut(id) {
            record.position = position;
        }
    }

    /// Get a record by ID, tombstones included
    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Mutable access to an open record. Closed records are frozen.
    fn open_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.records.iter_mut().find(|r| r.id == id && r.is_open())
    }

    /// Check whether a window exists and is not closed
    #[inline]
    pub fn is_open(&self, id: WindowId) -> bool {
        self.get(id).is_some_and(WindowRecord::is_open)
    }

    /// All non-closed records in insertion order
    pub fn list_open(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.iter().filter(|r| r.is_open())
    }

    /// First open instance of an app, in insertion order
    pub fn first_open(&self, app: AppKind) -> Option<&WindowRecord> {
        self.list_open().find(|r| r.app == app)
    }

    /// Number of records, tombstones included
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop tombstoned records, returning their ids
    ///
    /// Ids are never reused, so compaction does not affect future launches.
    pub fn compact(&mut self) -> Vec<WindowId> {
        let removed: Vec<WindowId> = self
            .records
            .iter()
            .filter(|r| r.closed)
            .map(|r| r.id)
            .collect();
        self.records.retain(|r| !r.closed);
        removed
    }
}
