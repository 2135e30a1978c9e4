// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grid-snapping arithmetic for stored geometry.
//!
//! Every geometry value a [`ClassRecord`](super::ClassRecord) stores is a
//! multiple of [`GRID_STEP`]. Snapping is a data-normalization rule, not a
//! rendering concern.

/// The rounding quantum applied to all stored geometry values.
pub const GRID_STEP: i32 = 10;

/// Rounds `value` to the nearest multiple of [`GRID_STEP`], ties rounding up.
///
/// Holds for negative input as well: `snap(-19) == -20`, `snap(-15) == -10`.
/// Within [`GRID_STEP`] of the `i32` range ends the result rounds toward
/// zero instead of overflowing; it is still a multiple of the step.
pub fn snap(value: i32) -> i32 {
    let rem = value.rem_euclid(GRID_STEP);
    if rem < GRID_STEP / 2 {
        value
            .checked_sub(rem)
            .unwrap_or_else(|| value + (GRID_STEP - rem))
    } else {
        value
            .checked_add(GRID_STEP - rem)
            .unwrap_or_else(|| value - rem)
    }
}

/// Snaps a position value. Negative positions clamp to 0.
pub fn snap_position(value: i32) -> i32 {
    if value >= 0 {
        snap(value)
    } else {
        0
    }
}
