// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::grid::{snap, snap_position};

/// One UML class box: grid-snapped geometry plus four free-text fields.
///
/// `index` mirrors the record's position in the diagram's class collection
/// and is stamped by [`Diagram::add_class`](super::Diagram::add_class).
/// The name/attributes/operations/description fields are the observable
/// ones; edit them through the [`Diagram`](super::Diagram) setters so
/// subscribers see the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    index: usize,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    name: String,
    attributes: String,
    operations: String,
    description: String,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            index: 0,
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            name: name.into(),
            attributes: String::new(),
            operations: String::new(),
            description: String::new(),
        }
    }

    pub fn new_with(
        name: impl Into<String>,
        attributes: impl Into<String>,
        operations: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            index: 0,
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            name: name.into(),
            attributes: attributes.into(),
            operations: operations.into(),
            description: description.into(),
        }
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Snaps to the grid; negative positions clamp to 0.
    pub fn set_x(&mut self, x: i32) {
        self.x = snap_position(x);
    }

    /// Snaps to the grid; negative positions clamp to 0.
    pub fn set_y(&mut self, y: i32) {
        self.y = snap_position(y);
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.set_x(x);
        self.set_y(y);
    }

    /// Snaps to the grid without clamping; a negative width stays negative.
    pub fn set_width(&mut self, width: i32) {
        self.width = snap(width);
    }

    /// Snaps to the grid without clamping; a negative height stays negative.
    pub fn set_height(&mut self, height: i32) {
        self.height = snap(height);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_attributes(&mut self, attributes: impl Into<String>) {
        self.attributes = attributes.into();
    }

    pub fn set_operations(&mut self, operations: impl Into<String>) {
        self.operations = operations.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &str {
        &self.attributes
    }

    pub fn operations(&self) -> &str {
        &self.operations
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
