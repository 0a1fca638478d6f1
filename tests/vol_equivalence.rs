// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Primcore Inc.

//! Geometric-equivalence properties of the VOL primitive

use anyhow::Result;
use approx::assert_abs_diff_eq;
use primcore::{
    GeomError, ParamMap, ParamValue, Primitive, Transform, Vector, Vol, WdbRecord, TOLERANCE, X,
};
use std::any::Any;

fn density_record() -> WdbRecord {
    WdbRecord::new()
        .with("file_name", "density.raw")
        .with("x_dim", 64.0)
        .with("y_dim", 64.0)
        .with("z_dim", 64.0)
        .with("low_thresh", 0.0)
        .with("high_thresh", 1.0)
        .with("cell_size", &Vector::from_owned([1.0, 1.0, 1.0]))
        .with("mat", &Transform::unit())
}

#[test]
fn test_reflexivity() -> Result<()> {
    let vol = Vol::from_wdb("vol.s", &density_record())?;
    assert!(vol.has_same_data(&vol)?);
    Ok(())
}

#[test]
fn test_identity_factory_example() -> Result<()> {
    let record = density_record();
    let a = Vol::from_wdb("vol.s", &record)?;
    let b = Vol::from_wdb("vol.s", &record)?;

    assert_eq!(a.name(), "vol.s");
    assert!(a.has_same_data(&b)?);
    assert!(b.has_same_data(&a)?);
    Ok(())
}

#[test]
fn test_tolerance_boundary_on_placement() -> Result<()> {
    let vol = Vol::from_wdb("vol.s", &density_record())?;

    let mut nudged = vol.copy();
    nudged.mat.set_entry(0, 3, TOLERANCE / 2.0);
    assert!(vol.has_same_data(&nudged)?);

    let mut shifted = vol.copy();
    shifted.mat.set_entry(0, 3, TOLERANCE * 2.0);
    assert!(!vol.has_same_data(&shifted)?);
    Ok(())
}

#[test]
fn test_exact_field_strictness() -> Result<()> {
    let vol = Vol::from_wdb("vol.s", &density_record())?;
    let mut wider = vol.copy();
    wider.x_dim += 1;
    assert!(!vol.has_same_data(&wider)?);
    Ok(())
}

#[test]
fn test_copy_independence() -> Result<()> {
    let vol = Vol::from_wdb("vol.s", &density_record())?;
    let mut copied = vol.copy();

    copied.cell_size.set(X, 99.0);
    assert_eq!(copied.cell_size.x(), 99.0);
    assert_abs_diff_eq!(vol.cell_size.x(), 1.0);
    assert!(!vol.has_same_data(&copied)?);
    Ok(())
}

#[test]
fn test_record_export_round_trip() -> Result<()> {
    let record = density_record();
    let vol = Vol::from_wdb("vol.s", &record)?;

    let mut params = ParamMap::new();
    params.merge(vol.export_params());

    for key in ["x_dim", "y_dim", "z_dim"] {
        assert_eq!(params.get(key), Some(&ParamValue::Number(64.0)), "{key}");
    }
    assert_eq!(params.get("low_thresh"), Some(&ParamValue::Number(0.0)));
    assert_eq!(params.get("high_thresh"), Some(&ParamValue::Number(1.0)));

    let exported_cell = match params.get("cell_size") {
        Some(ParamValue::Vec3(components)) => Vector::try_from_slice(components)?,
        other => panic!("cell_size exported as {other:?}"),
    };
    assert!(exported_cell.is_same(&record.vec3("cell_size")?));

    let exported_mat = match params.get("mat") {
        Some(ParamValue::Mat4(rows)) => Transform::try_from_rows(rows)?,
        other => panic!("mat exported as {other:?}"),
    };
    assert!(exported_mat.is_same(&record.mat4("mat")?));
    Ok(())
}

#[test]
fn test_merge_preserves_caller_keys() -> Result<()> {
    let vol = Vol::from_wdb("vol.s", &density_record())?;

    let mut params = ParamMap::new();
    params.insert("region", "r.1");
    params.merge(vol.export_params());

    assert_eq!(params.get("region"), Some(&ParamValue::Text("r.1".into())));
    assert_eq!(params.len(), 8);
    Ok(())
}

#[test]
fn test_exported_params_serialize_to_json() -> Result<()> {
    let vol = Vol::from_wdb("vol.s", &density_record())?;
    let json = serde_json::to_value(vol.export_params())?;

    assert_eq!(json["x_dim"], 64.0);
    assert_eq!(json["cell_size"], serde_json::json!([1.0, 1.0, 1.0]));
    assert_eq!(json["mat"][0][0], 1.0);
    Ok(())
}

#[test]
fn test_missing_record_field() {
    // A truncated record without high_thresh.
    let record = WdbRecord::new()
        .with("file_name", "density.raw")
        .with("x_dim", 64.0)
        .with("y_dim", 64.0)
        .with("z_dim", 64.0)
        .with("low_thresh", 0.0)
        .with("cell_size", &Vector::from_owned([1.0, 1.0, 1.0]))
        .with("mat", &Transform::unit());

    match Vol::from_wdb("vol.s", &record) {
        Err(GeomError::MissingField(field)) => assert_eq!(field, "high_thresh"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn test_malformed_cell_size() {
    let record = density_record().with("cell_size", ParamValue::Vec3(vec![1.0, 1.0]));
    assert!(matches!(
        Vol::from_wdb("vol.s", &record),
        Err(GeomError::MalformedGeometry(_))
    ));
}

/// A stand-in for some other primitive kind, to exercise the cross-kind
/// comparison path.
struct Flatland {
    name: String,
}

impl Primitive for Flatland {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "flatland"
    }

    fn export_params(&self) -> ParamMap {
        ParamMap::new()
    }

    fn clone_prim(&self) -> Box<dyn Primitive> {
        Box::new(Flatland {
            name: self.name.clone(),
        })
    }

    fn has_same_data(&self, _other: &dyn Primitive) -> primcore::Result<bool> {
        Ok(false)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn test_cross_kind_comparison_is_type_mismatch() -> Result<()> {
    let vol = Vol::from_wdb("vol.s", &density_record())?;
    let other = Flatland {
        name: "flat.s".to_string(),
    };

    match vol.has_same_data(&other) {
        Err(GeomError::TypeMismatch(message)) => {
            assert!(message.contains("flatland"));
            Ok(())
        }
        unexpected => panic!("expected TypeMismatch, got {unexpected:?}"),
    }
}
