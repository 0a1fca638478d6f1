// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Primcore Inc.

//! 3-component geometric vector with tolerance-aware equality

use super::TOLERANCE;
use crate::error::{GeomError, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Coordinate axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

pub const X: Axis = Axis::X;
pub const Y: Axis = Axis::Y;
pub const Z: Axis = Axis::Z;

/// A 3-component geometric quantity (per-axis spacing, direction, offset).
///
/// Storage is reference-counted: [`Vector::from_shared`] aliases a buffer
/// supplied by the caller, [`Vector::from_owned`] allocates fresh storage.
/// Components are immutable after construction except through
/// [`Vector::set`], which detaches shared storage first. Single-threaded,
/// single-owner usage is assumed throughout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vector {
    data: Arc<Vector3<f64>>,
}

impl Vector {
    /// Build from three components, always allocating fresh storage.
    pub fn from_owned(components: [f64; 3]) -> Self {
        Self {
            data: Arc::new(Vector3::new(components[0], components[1], components[2])),
        }
    }

    /// Alias storage supplied by the caller instead of copying it.
    ///
    /// The buffer stays alive for as long as any holder of the `Arc` does;
    /// the caller keeps its own handle and both see the same components.
    pub fn from_shared(data: Arc<Vector3<f64>>) -> Self {
        Self { data }
    }

    /// Arity-checked construction from loosely-shaped record data.
    pub fn try_from_slice(components: &[f64]) -> Result<Self> {
        if components.len() != 3 {
            return Err(GeomError::MalformedGeometry(format!(
                "expected 3 vector components, got {}",
                components.len()
            )));
        }
        Ok(Self::from_owned([components[0], components[1], components[2]]))
    }

    /// Deep copy with independently owned storage.
    pub fn detach(&self) -> Self {
        Self {
            data: Arc::new(*self.data),
        }
    }

    /// True when both vectors alias the same underlying buffer.
    pub fn shares_storage(&self, other: &Vector) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    pub fn x(&self) -> f64 {
        self.data.x
    }

    pub fn y(&self) -> f64 {
        self.data.y
    }

    pub fn z(&self) -> f64 {
        self.data.z
    }

    pub fn component(&self, axis: Axis) -> f64 {
        self.data[axis as usize]
    }

    /// Overwrite one component. Shared storage is detached first, so the
    /// write is never visible through other handles to the old buffer.
    pub fn set(&mut self, axis: Axis, value: f64) {
        Arc::make_mut(&mut self.data)[axis as usize] = value;
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.data.x, self.data.y, self.data.z]
    }

    /// Component-wise equality under the fixed tolerance.
    ///
    /// Commutative and reflexive; an absolute-difference test with no
    /// relative-scale adjustment.
    pub fn is_same(&self, other: &Vector) -> bool {
        self.is_same_eps(other, TOLERANCE)
    }

    /// Component-wise equality under an explicit tolerance.
    pub fn is_same_eps(&self, other: &Vector, epsilon: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.data.x, self.data.y, self.data.z)
    }
}

impl From<[f64; 3]> for Vector {
    fn from(components: [f64; 3]) -> Self {
        Self::from_owned(components)
    }
}
