// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Primcore Inc.

//! Affine-geometry value types backing the primitives

mod transform;
mod vector;

pub use transform::Transform;
pub use vector::{Axis, Vector, X, Y, Z};

/// Absolute tolerance under which two floating-point coordinates are
/// treated as equal. Geometry is expressed in millimeters; transforms
/// accumulate rounding through upstream composition, so exact equality
/// would spuriously reject identical placements.
pub const TOLERANCE: f64 = 1e-8;
