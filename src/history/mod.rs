// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Snapshot-based undo/redo for the diagram store.
//!
//! A [`Snapshot`] is an immutable copy of every class and link record at
//! one instant; the two history stacks hold whole snapshots, so a pop
//! restores exactly one atomic group. Restores go through
//! [`Diagram::restore`], which replaces the diagram wholesale — callers
//! do not clear first.
//!
//! Checkpointing is a caller contract: collaborators call
//! [`History::save_undo_state`] *before* a destructive edit (capturing
//! the state to return to) and [`History::clear_redo_state`] on any fresh
//! edit after an undo.

use crate::model::{ClassRecord, Diagram, LinkRecord};

/// A full copy of the diagram store's contents at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    classes: Vec<ClassRecord>,
    links: Vec<LinkRecord>,
}

impl Snapshot {
    pub fn capture(diagram: &Diagram) -> Self {
        Self {
            classes: diagram.classes().to_vec(),
            links: diagram.links().to_vec(),
        }
    }

    pub fn classes(&self) -> &[ClassRecord] {
        &self.classes
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

/// Undo/redo history over whole-diagram snapshots.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    during_undo: bool,
    during_redo: bool,
    just_restored: bool,
    just_undid: bool,
    just_redid: bool,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a snapshot of the current state onto the undo stack.
    ///
    /// No-op when the diagram has no classes, so an empty diagram never
    /// records a vacuous checkpoint. The flip side is that the very
    /// first add onto an empty diagram is not undoable.
    pub fn save_undo_state(&mut self, diagram: &Diagram) {
        if diagram.class_count() == 0 {
            return;
        }
        self.undo.push(Snapshot::capture(diagram));
        self.just_restored = false;
        self.just_undid = false;
        self.just_redid = false;
    }

    /// Empties the redo stack. Collaborators call this on every fresh
    /// edit so stale redo history cannot resurrect overwritten state.
    pub fn clear_redo_state(&mut self) {
        self.redo.clear();
    }

    /// Restores the most recent undo snapshot, first checkpointing the
    /// current state onto the redo stack. An empty undo stack is a
    /// silent no-op (`false`).
    pub fn undo(&mut self, diagram: &mut Diagram) -> bool {
        if self.undo.is_empty() {
            return false;
        }
        self.during_undo = true;
        self.redo.push(Snapshot::capture(diagram));
        if let Some(snapshot) = self.undo.pop() {
            diagram.restore(snapshot.classes(), snapshot.links());
        }
        self.during_undo = false;
        self.just_restored = true;
        self.just_undid = true;
        self.just_redid = false;
        true
    }

    /// Restores the most recent redo snapshot. Pushes nothing back onto
    /// the undo stack; the prior undo snapshot stays available. An empty
    /// redo stack is a silent no-op (`false`).
    pub fn redo(&mut self, diagram: &mut Diagram) -> bool {
        if self.redo.is_empty() {
            return false;
        }
        self.during_redo = true;
        if let Some(snapshot) = self.redo.pop() {
            diagram.restore(snapshot.classes(), snapshot.links());
        }
        self.during_redo = false;
        self.just_restored = true;
        self.just_undid = false;
        self.just_redid = true;
        true
    }

    /// False while a restore is in flight, letting a collaborator avoid
    /// re-entrantly pushing a history entry mid-restore.
    pub fn safe_to_save(&self) -> bool {
        !(self.during_undo || self.during_redo)
    }

    /// Whether the most recent history action was a restore.
    pub fn just_restored(&self) -> bool {
        self.just_restored
    }

    pub fn just_undid(&self) -> bool {
        self.just_undid
    }

    pub fn just_redid(&self) -> bool {
        self.just_redid
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drops all history in both directions.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
        self.just_restored = false;
        self.just_undid = false;
        self.just_redid = false;
    }
}
