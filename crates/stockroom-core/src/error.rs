//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                      │
//! │  ├── CoreError        - Not found / product state failures              │
//! │  └── ValidationError  - Bad constructor or mutator arguments            │
//! │                                                                         │
//! │  stockroom-cli errors (app crate)                                       │
//! │  └── CliError         - I/O and configuration failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → menu message on stdout             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::product::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every failure in this crate is one of these. The CLI is the only layer
/// that turns them into user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product is not a member of the store.
    ///
    /// ## When This Occurs
    /// - Removing a product that was never added (or already removed)
    /// - Ordering a product that belongs to a different store
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Product has been deactivated (explicitly or by selling out).
    #[error("Product '{name}' is not active")]
    ProductInactive { name: String },

    /// Requested more units than are on hand.
    ///
    /// ## User Workflow
    /// ```text
    /// Order: 2 × Pixel 7 + 2 × Pixel 7
    ///      │
    ///      ▼
    /// Check stock: available=3, requested=4
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Pixel 7", available: 3, requested: 4 }
    ///      │
    ///      ▼
    /// Menu shows: "Error making order: Not enough stock for 'Pixel 7': ..."
    /// ```
    #[error("Not enough stock for '{name}': available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A charge, order total or stock total does not fit in 64 bits.
    #[error("Amount too large: {what}")]
    AmountOverflow { what: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// True for failures caused by the product's current state rather than
    /// by the caller's arguments.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            CoreError::ProductInactive { .. } | CoreError::InsufficientStock { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustNotBeNegative { field: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
