// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Primcore Inc.

//! Ingestion and export boundary
//!
//! Raw records come in from an external database reader; attribute maps go
//! out to an external serializer. Both sides speak [`ParamValue`], the only
//! value shapes the core exchanges: numbers, text, 3-sequences, and 4x4
//! matrices.

use crate::error::{GeomError, Result};
use crate::vmath::{Transform, Vector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single attribute value crossing the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
    Vec3(Vec<f64>),
    Mat4(Vec<Vec<f64>>),
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&Vector> for ParamValue {
    fn from(value: &Vector) -> Self {
        Self::Vec3(value.as_array().to_vec())
    }
}

impl From<&Transform> for ParamValue {
    fn from(value: &Transform) -> Self {
        Self::Mat4(value.to_rows().iter().map(|row| row.to_vec()).collect())
    }
}

/// Immutable-in-spirit attribute mapping produced by a primitive's export.
///
/// A primitive returns a fresh `ParamMap`; the caller merges it into its
/// own map with [`ParamMap::merge`], which never removes or overwrites
/// unrelated keys already present on the caller's side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamMap {
    entries: BTreeMap<String, ParamValue>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Absorb `other`, keeping every key this map already holds that
    /// `other` does not mention.
    pub fn merge(&mut self, other: ParamMap) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// An opaque raw record from which a primitive is ingested.
///
/// The record's provenance (a parsed database file, a network call, a test
/// fixture) is irrelevant here; it only has to expose the fields a
/// primitive's factory asks for, with shapes coercible to the constructor
/// arguments. Typed accessors report [`GeomError::MissingField`] for an
/// absent key and [`GeomError::MalformedGeometry`] for a present key of the
/// wrong shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WdbRecord {
    fields: BTreeMap<String, ParamValue>,
}

impl WdbRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion for upstream parsers and fixtures.
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    fn field(&self, key: &str) -> Result<&ParamValue> {
        self.fields
            .get(key)
            .ok_or_else(|| GeomError::MissingField(key.to_string()))
    }

    pub fn text(&self, key: &str) -> Result<&str> {
        match self.field(key)? {
            ParamValue::Text(s) => Ok(s),
            other => Err(malformed(key, "text", other)),
        }
    }

    pub fn number(&self, key: &str) -> Result<f64> {
        match self.field(key)? {
            ParamValue::Number(n) => Ok(*n),
            other => Err(malformed(key, "number", other)),
        }
    }

    /// A number coerced to a non-negative integer grid extent.
    pub fn uint(&self, key: &str) -> Result<u32> {
        let n = self.number(key)?;
        if n < 0.0 || n.fract() != 0.0 || n > u32::MAX as f64 {
            return Err(GeomError::MalformedGeometry(format!(
                "field `{key}` is not a valid grid extent: {n}"
            )));
        }
        Ok(n as u32)
    }

    pub fn vec3(&self, key: &str) -> Result<Vector> {
        match self.field(key)? {
            ParamValue::Vec3(components) => Vector::try_from_slice(components),
            other => Err(malformed(key, "3-sequence", other)),
        }
    }

    pub fn mat4(&self, key: &str) -> Result<Transform> {
        match self.field(key)? {
            ParamValue::Mat4(rows) => Transform::try_from_rows(rows),
            other => Err(malformed(key, "4x4 matrix", other)),
        }
    }
}

fn malformed(key: &str, expected: &str, got: &ParamValue) -> GeomError {
    let shape = match got {
        ParamValue::Number(_) => "number",
        ParamValue::Text(_) => "text",
        ParamValue::Vec3(_) => "3-sequence",
        ParamValue::Mat4(_) => "4x4 matrix",
    };
    GeomError::MalformedGeometry(format!("field `{key}` holds a {shape}, expected {expected}"))
}
