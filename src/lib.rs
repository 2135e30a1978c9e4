// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad — UML class diagram data core.
//!
//! Class and link records with grid-snapped geometry, an observable
//! diagram store, snapshot-based undo/redo, and the legacy line-oriented
//! save format.

pub mod format;
pub mod history;
pub mod model;
pub mod store;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
