// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Primcore Inc.

//! 4x4 affine placement matrix

use super::TOLERANCE;
use crate::error::{GeomError, Result};
use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A 4x4 affine map (rotation + translation + scale) placing a primitive's
/// local geometry in model space.
///
/// Storage follows the same owned/shared scheme as
/// [`Vector`](crate::vmath::Vector): [`Transform::from_shared`] aliases a
/// caller-supplied matrix, everything else allocates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transform {
    data: Arc<Matrix4<f64>>,
}

impl Transform {
    /// The canonical unit placement: the identity matrix.
    pub fn unit() -> Self {
        Self {
            data: Arc::new(Matrix4::identity()),
        }
    }

    /// Build from row-major entries, always allocating fresh storage.
    pub fn from_owned(rows: [[f64; 4]; 4]) -> Self {
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Self {
            data: Arc::new(Matrix4::from_row_slice(&flat)),
        }
    }

    /// Alias a matrix owned by the caller instead of copying it.
    pub fn from_shared(data: Arc<Matrix4<f64>>) -> Self {
        Self { data }
    }

    /// Shape-checked construction from loosely-shaped record data.
    ///
    /// Expects exactly 4 rows of 4 entries each.
    pub fn try_from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.len() != 4 {
            return Err(GeomError::MalformedGeometry(format!(
                "expected 4 matrix rows, got {}",
                rows.len()
            )));
        }
        let mut flat = Vec::with_capacity(16);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != 4 {
                return Err(GeomError::MalformedGeometry(format!(
                    "matrix row {} has {} entries, expected 4",
                    i,
                    row.len()
                )));
            }
            flat.extend_from_slice(row);
        }
        Ok(Self {
            data: Arc::new(Matrix4::from_row_slice(&flat)),
        })
    }

    /// Deep copy with independently owned storage.
    pub fn detach(&self) -> Self {
        Self {
            data: Arc::new(*self.data),
        }
    }

    /// True when both transforms alias the same underlying matrix.
    pub fn shares_storage(&self, other: &Transform) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    /// Overwrite one entry. Shared storage is detached first.
    pub fn set_entry(&mut self, row: usize, col: usize, value: f64) {
        Arc::make_mut(&mut self.data)[(row, col)] = value;
    }

    /// Row-major copy of all 16 entries.
    pub fn to_rows(&self) -> [[f64; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, entry) in row.iter_mut().enumerate() {
                *entry = self.data[(r, c)];
            }
        }
        rows
    }

    /// Element-wise equality over all 16 entries under the fixed tolerance.
    pub fn is_same(&self, other: &Transform) -> bool {
        self.is_same_eps(other, TOLERANCE)
    }

    /// Element-wise equality under an explicit tolerance.
    pub fn is_same_eps(&self, other: &Transform, epsilon: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::unit()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.to_rows();
        for row in rows {
            writeln!(f, "[{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
