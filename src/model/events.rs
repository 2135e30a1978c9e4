// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Change events emitted by the [`Diagram`](super::Diagram).
//!
//! Notification is field-granular: only the originally observable fields
//! signal (class name/attributes/operations/description, link
//! source/dest). Geometry, kind, cardinalities, and labels mutate
//! silently. Events fire inline on the mutating call; there is no queue
//! and no cross-thread delivery.

/// An observable free-text field on a class record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassField {
    Name,
    Attributes,
    Operations,
    Description,
}

/// An observable endpoint field on a link record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkEndpoint {
    Source,
    Dest,
}

/// One change to the diagram store, delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    ClassAdded {
        index: usize,
    },
    ClassRemoved {
        index: usize,
    },
    ClassFieldChanged {
        index: usize,
        field: ClassField,
        old: String,
        new: String,
    },
    LinkAdded {
        index: usize,
    },
    /// Fired immediately before a link is destroyed, carrying both
    /// endpoints so a rendering collaborator can detach the handles it
    /// attached to them.
    LinkDestroying {
        index: usize,
        source: usize,
        dest: usize,
    },
    LinkRemoved {
        index: usize,
    },
    LinkEndpointChanged {
        index: usize,
        endpoint: LinkEndpoint,
        old: usize,
        new: usize,
    },
    Cleared,
}

/// Handle returned by [`Diagram::subscribe`](super::Diagram::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub(crate) usize);
