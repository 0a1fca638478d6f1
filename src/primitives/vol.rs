// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Primcore Inc.

//! VOL: volumetric-grid solid primitive

use super::{all_match, CmpRule, FieldCmp, FieldPair, Primitive};
use crate::error::{GeomError, Result};
use crate::vmath::{Transform, Vector, TOLERANCE};
use crate::wdb::{ParamMap, WdbRecord};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// A volumetric sampled solid: a grid of density samples read from an
/// external voxel data file, thresholded into solid/empty cells and placed
/// in model space by an affine transform.
///
/// `file_name` is opaque here; whether the file exists or parses is the
/// concern of the database layer. `low_thresh <= high_thresh` is expected
/// but not validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vol {
    name: String,
    pub file_name: String,
    pub x_dim: u32,
    pub y_dim: u32,
    pub z_dim: u32,
    pub low_thresh: f64,
    pub high_thresh: f64,
    pub cell_size: Vector,
    pub mat: Transform,
}

impl Vol {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        file_name: &str,
        x_dim: u32,
        y_dim: u32,
        z_dim: u32,
        low_thresh: f64,
        high_thresh: f64,
        cell_size: Vector,
        mat: Transform,
    ) -> Self {
        Self {
            name: name.to_string(),
            file_name: file_name.to_string(),
            x_dim,
            y_dim,
            z_dim,
            low_thresh,
            high_thresh,
            cell_size,
            mat,
        }
    }

    /// Ingest a raw database record.
    ///
    /// The single entry point from the external-record boundary. Field
    /// lookups report [`GeomError::MissingField`]; shape problems in
    /// `cell_size`/`mat` report [`GeomError::MalformedGeometry`]. No
    /// validation happens beyond what construction itself requires.
    pub fn from_wdb(name: &str, record: &WdbRecord) -> Result<Self> {
        Ok(Self::new(
            name,
            record.text("file_name")?,
            record.uint("x_dim")?,
            record.uint("y_dim")?,
            record.uint("z_dim")?,
            record.number("low_thresh")?,
            record.number("high_thresh")?,
            record.vec3("cell_size")?,
            record.mat4("mat")?,
        ))
    }

    /// Deep copy with detached vector and transform storage.
    pub fn copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            file_name: self.file_name.clone(),
            x_dim: self.x_dim,
            y_dim: self.y_dim,
            z_dim: self.z_dim,
            low_thresh: self.low_thresh,
            high_thresh: self.high_thresh,
            cell_size: self.cell_size.detach(),
            mat: self.mat.detach(),
        }
    }

    /// Every geometry-defining field with its comparison rule. File name
    /// and grid scalars are identity-bearing and compare exactly; cell size
    /// and placement are continuous and compare under tolerance.
    fn comparison_table<'a>(&'a self, other: &'a Vol) -> [FieldCmp<'a>; 8] {
        [
            FieldCmp {
                field: "file_name",
                rule: CmpRule::Exact,
                pair: FieldPair::Text(&self.file_name, &other.file_name),
            },
            FieldCmp {
                field: "x_dim",
                rule: CmpRule::Exact,
                pair: FieldPair::Dim(self.x_dim, other.x_dim),
            },
            FieldCmp {
                field: "y_dim",
                rule: CmpRule::Exact,
                pair: FieldPair::Dim(self.y_dim, other.y_dim),
            },
            FieldCmp {
                field: "z_dim",
                rule: CmpRule::Exact,
                pair: FieldPair::Dim(self.z_dim, other.z_dim),
            },
            FieldCmp {
                field: "low_thresh",
                rule: CmpRule::Exact,
                pair: FieldPair::Scalar(self.low_thresh, other.low_thresh),
            },
            FieldCmp {
                field: "high_thresh",
                rule: CmpRule::Exact,
                pair: FieldPair::Scalar(self.high_thresh, other.high_thresh),
            },
            FieldCmp {
                field: "cell_size",
                rule: CmpRule::Tolerant(TOLERANCE),
                pair: FieldPair::Vec3(&self.cell_size, &other.cell_size),
            },
            FieldCmp {
                field: "mat",
                rule: CmpRule::Tolerant(TOLERANCE),
                pair: FieldPair::Mat4(&self.mat, &other.mat),
            },
        ]
    }
}

impl Primitive for Vol {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "vol"
    }

    fn export_params(&self) -> ParamMap {
        let mut params = ParamMap::new();
        params.insert("x_dim", self.x_dim);
        params.insert("y_dim", self.y_dim);
        params.insert("z_dim", self.z_dim);
        params.insert("low_thresh", self.low_thresh);
        params.insert("high_thresh", self.high_thresh);
        params.insert("cell_size", &self.cell_size);
        params.insert("mat", &self.mat);
        params
    }

    fn clone_prim(&self) -> Box<dyn Primitive> {
        Box::new(self.copy())
    }

    fn has_same_data(&self, other: &dyn Primitive) -> Result<bool> {
        let other = other.as_any().downcast_ref::<Vol>().ok_or_else(|| {
            GeomError::TypeMismatch(format!(
                "cannot compare vol `{}` with {} `{}`",
                self.name,
                other.kind(),
                other.name()
            ))
        })?;
        Ok(all_match(&self.comparison_table(other)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for Vol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VOL({}, file_name={}, x_dim={}, y_dim={}, z_dim={}, low_thresh={}, high_thresh={}, cell_size={}, mat={:?})",
            self.name,
            self.file_name,
            self.x_dim,
            self.y_dim,
            self.z_dim,
            self.low_thresh,
            self.high_thresh,
            self.cell_size,
            self.mat.to_rows(),
        )
    }
}
