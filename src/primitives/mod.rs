// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Primcore Inc.

//! Primitive contract and structural-equality machinery

mod vol;

pub use vol::Vol;

use crate::error::Result;
use crate::vmath::{Transform, Vector};
use crate::wdb::ParamMap;
use std::any::Any;

/// The contract every concrete solid type satisfies.
///
/// A primitive is a named value object: it can export its attributes for
/// serialization, deep-copy itself, and compare its geometry-defining data
/// against another primitive of the same kind.
pub trait Primitive {
    /// Unique name within a database scope. Uniqueness is assumed by
    /// callers, not enforced here.
    fn name(&self) -> &str;

    /// Short kind label for diagnostics ("vol", ...).
    fn kind(&self) -> &'static str;

    /// Exportable attributes as a fresh mapping the caller merges.
    ///
    /// Returning a new map instead of mutating a caller-supplied one keeps
    /// unrelated keys on the caller's side untouched.
    fn export_params(&self) -> ParamMap;

    /// Deep copy: value-identical, with independently owned vector and
    /// transform storage, so mutating the copy never affects the original.
    fn clone_prim(&self) -> Box<dyn Primitive>;

    /// Structural equality over all geometry-defining attributes.
    ///
    /// Returns `Ok(false)` for same-kind primitives known to differ and
    /// `Err(TypeMismatch)` when `other` is a different kind, so "known to
    /// differ" is never conflated with "cannot compare".
    fn has_same_data(&self, other: &dyn Primitive) -> Result<bool>;

    fn as_any(&self) -> &dyn Any;
}

/// How one geometry-defining field participates in structural equality.
///
/// Discrete, identity-bearing fields (names, dimensions, file references)
/// compare exactly; continuous fields (vectors, transforms) compare under
/// tolerance. Each concrete primitive lists every field with its rule in
/// one table, so a new field cannot silently skip comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CmpRule {
    Exact,
    Tolerant(f64),
}

/// One field's values drawn from two primitives of the same kind.
pub enum FieldPair<'a> {
    Text(&'a str, &'a str),
    Dim(u32, u32),
    Scalar(f64, f64),
    Vec3(&'a Vector, &'a Vector),
    Mat4(&'a Transform, &'a Transform),
}

/// A table entry: field name, comparison rule, and the paired values.
pub struct FieldCmp<'a> {
    pub field: &'static str,
    pub rule: CmpRule,
    pub pair: FieldPair<'a>,
}

impl FieldCmp<'_> {
    /// Evaluate this entry's rule against its value pair. Total over every
    /// rule/shape combination: `Exact` on a continuous shape degenerates to
    /// zero tolerance, `Tolerant` on a discrete shape to exact equality.
    pub fn matches(&self) -> bool {
        match (self.rule, &self.pair) {
            (CmpRule::Exact, FieldPair::Text(a, b)) => a == b,
            (CmpRule::Exact, FieldPair::Dim(a, b)) => a == b,
            (CmpRule::Exact, FieldPair::Scalar(a, b)) => a == b,
            (CmpRule::Exact, FieldPair::Vec3(a, b)) => a.is_same_eps(b, 0.0),
            (CmpRule::Exact, FieldPair::Mat4(a, b)) => a.is_same_eps(b, 0.0),
            (CmpRule::Tolerant(eps), FieldPair::Scalar(a, b)) => (a - b).abs() <= eps,
            (CmpRule::Tolerant(eps), FieldPair::Vec3(a, b)) => a.is_same_eps(b, eps),
            (CmpRule::Tolerant(eps), FieldPair::Mat4(a, b)) => a.is_same_eps(b, eps),
            (CmpRule::Tolerant(_), FieldPair::Text(a, b)) => a == b,
            (CmpRule::Tolerant(_), FieldPair::Dim(a, b)) => a == b,
        }
    }
}

/// Conjunction over a comparator table; any mismatch short-circuits.
pub fn all_match(table: &[FieldCmp<'_>]) -> bool {
    table.iter().all(FieldCmp::matches)
}
