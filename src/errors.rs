// ABOUTME: Unified error handling for the Cognia engine
// ABOUTME: Defines standard error codes, the AppError type, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

//! # Unified Error Handling
//!
//! Central error types for the engine. Error codes are grouped by concern so
//! callers can branch on categories without string-matching messages. Scoring
//! functions never construct errors (they operate on well-formed runner
//! output); errors surface from plan editing and the persistence port.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3001,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Plan Scheduling (4100-4199)
    #[serde(rename = "PLAN_CAPACITY_EXCEEDED")]
    PlanCapacityExceeded = 4100,
    #[serde(rename = "PLAN_DOMAIN_CONFLICT")]
    PlanDomainConflict = 4101,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a human-readable description for this error code
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is out of acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::PlanCapacityExceeded => "The training day has reached its exercise capacity",
            Self::PlanDomainConflict => "The training day already covers this cognitive domain",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal engine error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether this code represents a plan-editing rejection that should be
    /// surfaced to the user as a warning rather than a failure
    #[must_use]
    pub const fn is_plan_warning(&self) -> bool {
        matches!(self, Self::PlanCapacityExceeded | Self::PlanDomainConflict)
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("Resource not found: {}", resource.into()),
        )
    }

    /// Training day is at its per-day exercise capacity
    pub fn plan_capacity(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PlanCapacityExceeded, message)
    }

    /// Training day already has an exercise for the domain
    pub fn plan_domain_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PlanDomainConflict, message)
    }

    /// Storage operation failed
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal engine error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("JSON serialization failed: {err}"),
        )
        .with_source(err)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
