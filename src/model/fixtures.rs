// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::class_record::ClassRecord;
use super::diagram::Diagram;
use super::link_record::{Cardinality, LinkKind, LinkRecord};

fn class(name: &str, x: i32, y: i32) -> ClassRecord {
    let mut record = ClassRecord::new(name);
    record.set_position(x, y);
    record.set_width(100);
    record.set_height(60);
    record
}

/// Three classes A/B/C with an A->B association and a B->C aggregation.
pub(crate) fn diagram_three_classes_two_links() -> Diagram {
    let mut diagram = Diagram::new();
    diagram.add_class(class("A", 0, 0));
    diagram.add_class(class("B", 200, 0));
    diagram.add_class(class("C", 400, 100));

    let mut first = LinkRecord::new(LinkKind::Association, 0, 1);
    first.set_label("uses");
    diagram.add_link(first).expect("A->B link");

    let second = LinkRecord::new_with(
        LinkKind::Aggregation,
        1,
        2,
        Cardinality::Unbounded,
        Cardinality::Exact(1),
        Cardinality::Exact(0),
        Cardinality::Unbounded,
        "holds",
    );
    diagram.add_link(second).expect("B->C link");

    diagram
}

pub(crate) fn diagram_two_classes() -> Diagram {
    let mut diagram = Diagram::new();
    diagram.add_class(class("Customer", 10, 10));
    diagram.add_class(class("Order", 250, 10));
    diagram
}
