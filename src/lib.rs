// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Primcore Inc.

//! Primcore solid-primitive data model
//!
//! In-memory CAD solid primitives that are built from raw database
//! records, compared for semantic equality under floating-point tolerance,
//! and exported as flat attribute mappings for persistence. Database file
//! I/O and the native CAD-engine binding live outside this crate; they
//! talk to it through [`WdbRecord`] ingestion and [`ParamMap`] export.
//!
//! ```
//! use primcore::{ParamMap, Primitive, Transform, Vector, Vol, WdbRecord};
//!
//! # fn main() -> primcore::Result<()> {
//! let record = WdbRecord::new()
//!     .with("file_name", "density.raw")
//!     .with("x_dim", 64.0)
//!     .with("y_dim", 64.0)
//!     .with("z_dim", 64.0)
//!     .with("low_thresh", 0.0)
//!     .with("high_thresh", 1.0)
//!     .with("cell_size", &Vector::from_owned([1.0, 1.0, 1.0]))
//!     .with("mat", &Transform::unit());
//!
//! let vol = Vol::from_wdb("vol.s", &record)?;
//! assert_eq!(vol.name(), "vol.s");
//!
//! let mut params = ParamMap::new();
//! params.merge(vol.export_params());
//! assert!(params.contains_key("cell_size"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod primitives;
pub mod vmath;
pub mod wdb;

pub use error::{GeomError, Result};
pub use primitives::{CmpRule, FieldCmp, FieldPair, Primitive, Vol};
pub use vmath::{Axis, Transform, Vector, TOLERANCE, X, Y, Z};
pub use wdb::{ParamMap, ParamValue, WdbRecord};
