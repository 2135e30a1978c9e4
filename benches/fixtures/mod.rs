// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use naiad::model::{Cardinality, ClassRecord, Diagram, LinkKind, LinkRecord};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("naiad_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    DiagramSmall,
    DiagramMedium,
}

impl Case {
    fn class_count(self) -> usize {
        match self {
            Self::DiagramSmall => 10,
            Self::DiagramMedium => 100,
        }
    }
}

const LINK_KINDS: [LinkKind; 6] = [
    LinkKind::General,
    LinkKind::Association,
    LinkKind::Aggregation,
    LinkKind::Composition,
    LinkKind::Generalization,
    LinkKind::Dependency,
];

/// Builds a densely populated diagram: `n` classes laid out on a grid,
/// with a link from every class to its successor and one back to class 0.
pub fn diagram(case: Case) -> Diagram {
    let n = case.class_count();
    let mut out = Diagram::new();

    for i in 0..n {
        let mut class = ClassRecord::new_with(
            format!("Class{i}"),
            format!("field_a: int\nfield_b: String\ncount_{i}: u64"),
            format!("get_{i}(): int\nset_{i}(v: int)"),
            format!("benchmark class number {i}"),
        );
        class.set_position((i as i32 % 10) * 150, (i as i32 / 10) * 100);
        class.set_width(120);
        class.set_height(80);
        out.add_class(class);
    }

    for i in 0..n.saturating_sub(1) {
        let link = LinkRecord::new_with(
            LINK_KINDS[i % LINK_KINDS.len()],
            i,
            i + 1,
            Cardinality::Exact(1),
            Cardinality::Unbounded,
            Cardinality::Exact(0),
            Cardinality::Unspecified,
            format!("edge{i}"),
        );
        out.add_link(link).expect("successor link");
    }
    if n > 1 {
        out.add_link(LinkRecord::new(LinkKind::Dependency, n - 1, 0))
            .expect("closing link");
    }

    out
}

pub fn checksum_diagram(diagram: &Diagram) -> u64 {
    let mut acc = 0u64;
    for class in diagram.classes() {
        acc = acc.wrapping_mul(131).wrapping_add(class.index() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(class.x() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(class.name().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(class.attributes().len() as u64);
    }
    for link in diagram.links() {
        acc = acc.wrapping_mul(131).wrapping_add(link.source() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(link.dest() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(link.kind().code() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(link.label().len() as u64);
    }
    acc
}
