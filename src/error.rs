// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Primcore Inc.

//! Error taxonomy for the primitive data model

use thiserror::Error;

/// Errors raised by construction, ingestion, and comparison.
///
/// Construction-time errors are never recovered locally: a malformed
/// primitive must not enter a comparison or export path, so they propagate
/// to the caller immediately. All operations are deterministic, so there is
/// no retry path; the corrective action is caller-side data fixing.
#[derive(Debug, Error)]
pub enum GeomError {
    /// A vector or matrix was built from data of the wrong shape or arity.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    /// Two incomparable objects were compared. Distinguishes "cannot
    /// compare" from "known to differ", which returns `false` instead.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// An ingestion record lacks a required attribute.
    #[error("missing field `{0}` in record")]
    MissingField(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeomError>;
