// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: class/link records and the diagram store.
//!
//! A diagram is two ordered, index-addressed collections — class boxes
//! and the links between them — with field-granular change events for
//! rendering collaborators.

pub mod class_record;
pub mod diagram;
pub mod events;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod grid;
pub mod link_record;

pub use class_record::ClassRecord;
pub use diagram::{ClassRemovalPolicy, Diagram, InvalidLinkEndpoint};
pub use events::{ClassField, LinkEndpoint, ModelEvent, SubscriberId};
pub use grid::{snap, snap_position, GRID_STEP};
pub use link_record::{Cardinality, LinkKind, LinkRecord, ParseCardinalityError};
