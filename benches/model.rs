// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use naiad::history::{History, Snapshot};

mod fixtures;
mod profiler;

fn checksum_undo_cycle(diagram: &naiad::model::Diagram) -> u64 {
    let mut working = naiad::model::Diagram::new();
    working.restore(diagram.classes(), diagram.links());

    let mut history = History::new();
    history.save_undo_state(&working);
    let removed = working.class_count() - 1;
    working.remove_class(black_box(removed)).expect("remove_class");
    history.undo(&mut working);
    history.redo(&mut working);
    history.undo(&mut working);

    fixtures::checksum_diagram(&working)
}

// Benchmark identity (keep stable):
// - Group name in this file: `model.snapshot`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `capture_small`, `undo_cycle_medium`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("model.snapshot");

    let small = fixtures::diagram(fixtures::Case::DiagramSmall);
    group.bench_function("capture_small", |b| {
        b.iter(|| black_box(Snapshot::capture(black_box(&small))).class_count())
    });
    group.bench_function("undo_cycle_small", |b| {
        b.iter(|| black_box(checksum_undo_cycle(black_box(&small))))
    });

    let medium = fixtures::diagram(fixtures::Case::DiagramMedium);
    group.bench_function("capture_medium", |b| {
        b.iter(|| black_box(Snapshot::capture(black_box(&medium))).class_count())
    });
    group.bench_function("undo_cycle_medium", |b| {
        b.iter(|| black_box(checksum_undo_cycle(black_box(&medium))))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_model
}
criterion_main!(benches);
