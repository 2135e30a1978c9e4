// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// The relationship a link draws between two class boxes.
///
/// The discriminants are the legacy wire codes (0–5) used by the save
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    General,
    Association,
    Aggregation,
    Composition,
    Generalization,
    Dependency,
}

impl LinkKind {
    pub fn code(self) -> i32 {
        match self {
            Self::General => 0,
            Self::Association => 1,
            Self::Aggregation => 2,
            Self::Composition => 3,
            Self::Generalization => 4,
            Self::Dependency => 5,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::General),
            1 => Some(Self::Association),
            2 => Some(Self::Aggregation),
            3 => Some(Self::Composition),
            4 => Some(Self::Generalization),
            5 => Some(Self::Dependency),
            _ => None,
        }
    }
}

/// One multiplicity bound on a link endpoint.
///
/// The legacy format encodes these as bare integers: `-1` (historically any
/// negative) for "unbounded", `-2` for a dialog field left blank, `n >= 0`
/// for an exact bound. The sentinels exist only at the codec boundary; the
/// model always carries the tagged form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    Exact(u32),
    /// Shown to the user as `*`.
    Unbounded,
    /// The dialog field was left blank; distinct from `*`.
    Unspecified,
}

impl Cardinality {
    /// Converts the legacy integer sentinel. Any negative other than `-2`
    /// means unbounded.
    pub fn from_legacy(value: i32) -> Self {
        if value == -2 {
            Self::Unspecified
        } else if value < 0 {
            Self::Unbounded
        } else {
            Self::Exact(value as u32)
        }
    }

    pub fn to_legacy(self) -> i32 {
        match self {
            Self::Exact(bound) => bound as i32,
            Self::Unbounded => -1,
            Self::Unspecified => -2,
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(bound) => write!(f, "{bound}"),
            Self::Unbounded => f.write_str("*"),
            Self::Unspecified => Ok(()),
        }
    }
}

/// Dialog text that is neither blank, asterisks, nor digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCardinalityError {
    text: String,
}

impl ParseCardinalityError {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ParseCardinalityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid multiplicity {:?} (expected blank, '*', or digits)",
            self.text
        )
    }
}

impl std::error::Error for ParseCardinalityError {}

impl FromStr for Cardinality {
    type Err = ParseCardinalityError;

    /// Parses a multiplicity dialog field: blank means unspecified, one or
    /// more `*` means unbounded, digits mean an exact bound.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::Unspecified);
        }
        if s.chars().all(|c| c == '*') {
            return Ok(Self::Unbounded);
        }
        s.parse::<u32>()
            .map(Self::Exact)
            .map_err(|_| ParseCardinalityError { text: s.to_owned() })
    }
}

/// One UML relationship edge: endpoints, kind, cardinality bounds, label.
///
/// `source` and `dest` are indices into the diagram's class collection.
/// They must be in range when the link is added; the store does not keep
/// them valid afterward (a removed class can leave a dangling endpoint
/// under the legacy removal policy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    index: usize,
    kind: LinkKind,
    source: usize,
    dest: usize,
    source_min: Cardinality,
    source_max: Cardinality,
    dest_min: Cardinality,
    dest_max: Cardinality,
    label: String,
}

impl LinkRecord {
    pub fn new(kind: LinkKind, source: usize, dest: usize) -> Self {
        Self {
            index: 0,
            kind,
            source,
            dest,
            source_min: Cardinality::Unspecified,
            source_max: Cardinality::Unspecified,
            dest_min: Cardinality::Unspecified,
            dest_max: Cardinality::Unspecified,
            label: String::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_with(
        kind: LinkKind,
        source: usize,
        dest: usize,
        source_min: Cardinality,
        source_max: Cardinality,
        dest_min: Cardinality,
        dest_max: Cardinality,
        label: impl Into<String>,
    ) -> Self {
        Self {
            index: 0,
            kind,
            source,
            dest,
            source_min,
            source_max,
            dest_min,
            dest_max,
            label: label.into(),
        }
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn set_kind(&mut self, kind: LinkKind) {
        self.kind = kind;
    }

    pub fn set_source(&mut self, source: usize) {
        self.source = source;
    }

    pub fn set_dest(&mut self, dest: usize) {
        self.dest = dest;
    }

    pub fn set_source_min(&mut self, bound: Cardinality) {
        self.source_min = bound;
    }

    pub fn set_source_max(&mut self, bound: Cardinality) {
        self.source_max = bound;
    }

    pub fn set_dest_min(&mut self, bound: Cardinality) {
        self.dest_min = bound;
    }

    pub fn set_dest_max(&mut self, bound: Cardinality) {
        self.dest_max = bound;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn dest(&self) -> usize {
        self.dest
    }

    pub fn source_min(&self) -> Cardinality {
        self.source_min
    }

    pub fn source_max(&self) -> Cardinality {
        self.source_max
    }

    pub fn dest_min(&self) -> Cardinality {
        self.dest_min
    }

    pub fn dest_max(&self) -> Cardinality {
        self.dest_max
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
