// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::class_record::ClassRecord;
use super::events::{ClassField, LinkEndpoint, ModelEvent, SubscriberId};
use super::link_record::LinkRecord;

/// What removing a class does to the rest of the store.
///
/// The legacy behavior is asymmetric with link removal: the record
/// disappears but nothing else is touched — no renumbering of the other
/// classes' `index` fields and no cascade to links, so a link can be left
/// referencing a class index that no longer exists. `Cascade` is the
/// opt-in symmetric behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassRemovalPolicy {
    #[default]
    Legacy,
    Cascade,
}

/// A link endpoint that was out of range when the link was added.
///
/// The store is left unchanged when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLinkEndpoint {
    endpoint: LinkEndpoint,
    index: usize,
    class_count: usize,
}

impl InvalidLinkEndpoint {
    pub fn endpoint(&self) -> LinkEndpoint {
        self.endpoint
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }
}

impl fmt::Display for InvalidLinkEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "link {:?} index {} is out of range (class count {})",
            self.endpoint, self.index, self.class_count
        )
    }
}

impl std::error::Error for InvalidLinkEndpoint {}

type Subscriber = Box<dyn FnMut(&ModelEvent)>;

/// The diagram store: ordered, index-addressed collections of class and
/// link records.
///
/// Every record's `index` field mirrors its position. Link removal
/// re-stamps subsequent links to keep that true; class removal follows
/// the configured [`ClassRemovalPolicy`]. Mutations fire [`ModelEvent`]s
/// to subscribers inline, on the calling thread.
///
/// Observable free-text and endpoint fields should be edited through the
/// `set_class_*` / `set_link_*` methods here so subscribers see the
/// change; `class_mut`/`link_mut` are for the non-observable fields
/// (geometry, kind, cardinalities, label).
pub struct Diagram {
    classes: Vec<ClassRecord>,
    links: Vec<LinkRecord>,
    removal_policy: ClassRemovalPolicy,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: usize,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagram")
            .field("classes", &self.classes)
            .field("links", &self.links)
            .field("removal_policy", &self.removal_policy)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Diagram {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            links: Vec::new(),
            removal_policy: ClassRemovalPolicy::Legacy,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    pub fn removal_policy(&self) -> ClassRemovalPolicy {
        self.removal_policy
    }

    pub fn set_removal_policy(&mut self, policy: ClassRemovalPolicy) {
        self.removal_policy = policy;
    }

    /// Registers a change subscriber. Subscribers run inline on every
    /// mutating call, in registration order.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriberId
    where
        F: FnMut(&ModelEvent) + 'static,
    {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns true when the subscriber was present and removed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn emit(&mut self, event: ModelEvent) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&event);
        }
    }

    pub fn classes(&self) -> &[ClassRecord] {
        &self.classes
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn class(&self, index: usize) -> Option<&ClassRecord> {
        self.classes.get(index)
    }

    pub fn class_mut(&mut self, index: usize) -> Option<&mut ClassRecord> {
        self.classes.get_mut(index)
    }

    pub fn link(&self, index: usize) -> Option<&LinkRecord> {
        self.links.get(index)
    }

    pub fn link_mut(&mut self, index: usize) -> Option<&mut LinkRecord> {
        self.links.get_mut(index)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// The smallest index not presently storing a class record.
    pub fn class_tail(&self) -> usize {
        self.classes.len()
    }

    /// The smallest index not presently storing a link record.
    pub fn link_tail(&self) -> usize {
        self.links.len()
    }

    /// The largest class index a link endpoint may reference, used by
    /// link-creation dialogs to range-check source/dest input.
    pub fn max_link_endpoint(&self) -> Option<usize> {
        self.classes.len().checked_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.links.is_empty()
    }

    /// Appends a class record, stamping its `index` with its position.
    pub fn add_class(&mut self, mut record: ClassRecord) -> usize {
        let index = self.classes.len();
        record.set_index(index);
        self.classes.push(record);
        self.emit(ModelEvent::ClassAdded { index });
        index
    }

    /// Appends a link record after range-checking both endpoints against
    /// the current class collection. On `Err` the store is unchanged.
    pub fn add_link(&mut self, mut record: LinkRecord) -> Result<usize, InvalidLinkEndpoint> {
        let class_count = self.classes.len();
        if record.source() >= class_count {
            return Err(InvalidLinkEndpoint {
                endpoint: LinkEndpoint::Source,
                index: record.source(),
                class_count,
            });
        }
        if record.dest() >= class_count {
            return Err(InvalidLinkEndpoint {
                endpoint: LinkEndpoint::Dest,
                index: record.dest(),
                class_count,
            });
        }

        let index = self.links.len();
        record.set_index(index);
        self.links.push(record);
        self.emit(ModelEvent::LinkAdded { index });
        Ok(index)
    }

    /// Removes the class at `index`; out-of-range is a silent no-op.
    ///
    /// Under [`ClassRemovalPolicy::Legacy`] only the record goes away.
    /// Under [`ClassRemovalPolicy::Cascade`] subsequent classes are
    /// renumbered, links touching the class are destroyed (with the
    /// destroy warning), and surviving endpoints shift down.
    pub fn remove_class(&mut self, index: usize) -> Option<ClassRecord> {
        if index >= self.classes.len() {
            return None;
        }

        if self.removal_policy == ClassRemovalPolicy::Cascade {
            self.cascade_class_removal(index);
        }

        let removed = self.classes.remove(index);
        if self.removal_policy == ClassRemovalPolicy::Cascade {
            for pos in index..self.classes.len() {
                self.classes[pos].set_index(pos);
            }
        }
        self.emit(ModelEvent::ClassRemoved { index });
        Some(removed)
    }

    fn cascade_class_removal(&mut self, class_index: usize) {
        // Highest first so earlier removals don't shift pending ones.
        let touching: Vec<usize> = (0..self.links.len())
            .rev()
            .filter(|&pos| {
                self.links[pos].source() == class_index || self.links[pos].dest() == class_index
            })
            .collect();
        for pos in touching {
            self.remove_link(pos);
        }

        for pos in 0..self.links.len() {
            let source = self.links[pos].source();
            if source > class_index {
                self.set_link_source(pos, source - 1);
            }
            let dest = self.links[pos].dest();
            if dest > class_index {
                self.set_link_dest(pos, dest - 1);
            }
        }
    }

    /// Removes the link at `index`; out-of-range is a silent no-op.
    ///
    /// Fires [`ModelEvent::LinkDestroying`] first so rendering
    /// collaborators can detach from the endpoints, then re-stamps every
    /// subsequent link's `index` to its new position.
    pub fn remove_link(&mut self, index: usize) -> Option<LinkRecord> {
        if index >= self.links.len() {
            return None;
        }

        let (source, dest) = {
            let link = &self.links[index];
            (link.source(), link.dest())
        };
        self.emit(ModelEvent::LinkDestroying {
            index,
            source,
            dest,
        });

        let removed = self.links.remove(index);
        for pos in index..self.links.len() {
            self.links[pos].set_index(pos);
        }
        self.emit(ModelEvent::LinkRemoved { index });
        Some(removed)
    }

    /// Destroys every link (with the destroy warning), then empties both
    /// collections.
    pub fn clear(&mut self) {
        for index in 0..self.links.len() {
            let (source, dest) = {
                let link = &self.links[index];
                (link.source(), link.dest())
            };
            self.emit(ModelEvent::LinkDestroying {
                index,
                source,
                dest,
            });
        }
        self.classes.clear();
        self.links.clear();
        self.emit(ModelEvent::Cleared);
    }

    /// Replaces the whole diagram with the given records as one atomic
    /// operation: current links are destroy-warned, both collections are
    /// emptied, and every record is re-appended. Class records keep their
    /// stored `index` verbatim; links are re-stamped to their position.
    /// Used by the undo/redo engine; no caller clear-first discipline is
    /// needed.
    pub fn restore(&mut self, classes: &[ClassRecord], links: &[LinkRecord]) {
        self.clear();
        for (index, record) in classes.iter().enumerate() {
            // Verbatim, including a stored index != position left by a
            // legacy-policy class removal.
            self.classes.push(record.clone());
            self.emit(ModelEvent::ClassAdded { index });
        }
        for record in links {
            let index = self.links.len();
            let mut record = record.clone();
            record.set_index(index);
            self.links.push(record);
            self.emit(ModelEvent::LinkAdded { index });
        }
    }

    pub fn set_class_name(&mut self, index: usize, name: impl Into<String>) -> bool {
        self.set_class_text(index, ClassField::Name, name.into())
    }

    pub fn set_class_attributes(&mut self, index: usize, attributes: impl Into<String>) -> bool {
        self.set_class_text(index, ClassField::Attributes, attributes.into())
    }

    pub fn set_class_operations(&mut self, index: usize, operations: impl Into<String>) -> bool {
        self.set_class_text(index, ClassField::Operations, operations.into())
    }

    pub fn set_class_description(&mut self, index: usize, description: impl Into<String>) -> bool {
        self.set_class_text(index, ClassField::Description, description.into())
    }

    /// Returns true when the field actually changed (and the event fired).
    fn set_class_text(&mut self, index: usize, field: ClassField, new: String) -> bool {
        let Some(class) = self.classes.get_mut(index) else {
            return false;
        };
        let current = match field {
            ClassField::Name => class.name(),
            ClassField::Attributes => class.attributes(),
            ClassField::Operations => class.operations(),
            ClassField::Description => class.description(),
        };
        if current == new {
            return false;
        }
        let old = current.to_owned();
        match field {
            ClassField::Name => class.set_name(new.clone()),
            ClassField::Attributes => class.set_attributes(new.clone()),
            ClassField::Operations => class.set_operations(new.clone()),
            ClassField::Description => class.set_description(new.clone()),
        }
        self.emit(ModelEvent::ClassFieldChanged {
            index,
            field,
            old,
            new,
        });
        true
    }

    pub fn set_link_source(&mut self, index: usize, source: usize) -> bool {
        self.set_link_endpoint(index, LinkEndpoint::Source, source)
    }

    pub fn set_link_dest(&mut self, index: usize, dest: usize) -> bool {
        self.set_link_endpoint(index, LinkEndpoint::Dest, dest)
    }

    fn set_link_endpoint(&mut self, index: usize, endpoint: LinkEndpoint, new: usize) -> bool {
        let Some(link) = self.links.get_mut(index) else {
            return false;
        };
        let old = match endpoint {
            LinkEndpoint::Source => link.source(),
            LinkEndpoint::Dest => link.dest(),
        };
        if old == new {
            return false;
        }
        match endpoint {
            LinkEndpoint::Source => link.set_source(new),
            LinkEndpoint::Dest => link.set_dest(new),
        }
        self.emit(ModelEvent::LinkEndpointChanged {
            index,
            endpoint,
            old,
            new,
        });
        true
    }

    /// Codec-only insertion: no events, and the record's `index` is kept
    /// verbatim — a legacy file may carry `index != position` after a
    /// class removal under [`ClassRemovalPolicy::Legacy`].
    pub(crate) fn push_class_raw(&mut self, record: ClassRecord) {
        self.classes.push(record);
    }

    pub(crate) fn push_link_raw(&mut self, mut record: LinkRecord) {
        record.set_index(self.links.len());
        self.links.push(record);
    }
}
