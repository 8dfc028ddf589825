//! Error types for cut list optimization.

use crate::config::Unit;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes for cut list processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed job document (-3)
    InvalidJob = -3,
    /// No frames in the job (E100)
    NoFramesProvided = 100,
    /// Standard profile length not positive (E101)
    InvalidProfileLength = 101,
    /// Blade size negative or not a number (E102)
    InvalidBladeSize = 102,
    /// Frame width/height/reference invalid (E103)
    InvalidFrameDimensions = 103,
    /// Sub-component name/length/quantity invalid (E104)
    InvalidSubComponent = 104,
    /// A single piece is longer than the stock (E105)
    PieceExceedsStockLength = 105,
    /// Packer contract broken (E900)
    Internal = 900,
}

/// Input problems detected before any packing happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("No frames provided")]
    NoFramesProvided,

    #[error("Invalid profile length: {length}")]
    InvalidProfileLength { length: f64 },

    #[error("Invalid blade size: {blade_size}")]
    InvalidBladeSize { blade_size: f64 },

    #[error("Frame '{ref_no}': invalid dimensions ({width} x {height}) or missing reference number")]
    InvalidFrameDimensions {
        ref_no: String,
        width: f64,
        height: f64,
    },

    #[error("Frame '{ref_no}': invalid sub-component '{name}' (length {length}, quantity {quantity})")]
    InvalidSubComponent {
        ref_no: String,
        name: String,
        length: f64,
        quantity: u32,
    },

    #[error("Frame '{ref_no}': {piece} of {length}{unit} exceeds stock length {stock_length}{unit}")]
    PieceExceedsStockLength {
        ref_no: String,
        piece: String,
        length: f64,
        stock_length: f64,
        unit: Unit,
    },
}

/// Main error type for the optimizer.
#[derive(Debug, Error)]
pub enum CutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A piece reached the packer although validation should have rejected it.
    #[error("Internal error: piece of {length}mm from frame '{ref_no}' is longer than stock {stock_length}mm")]
    PieceLongerThanStock {
        ref_no: String,
        length: f64,
        stock_length: f64,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid job document: {message}")]
    InvalidJob { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ValidationError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::NoFramesProvided => ErrorCode::NoFramesProvided,
            ValidationError::InvalidProfileLength { .. } => ErrorCode::InvalidProfileLength,
            ValidationError::InvalidBladeSize { .. } => ErrorCode::InvalidBladeSize,
            ValidationError::InvalidFrameDimensions { .. } => ErrorCode::InvalidFrameDimensions,
            ValidationError::InvalidSubComponent { .. } => ErrorCode::InvalidSubComponent,
            ValidationError::PieceExceedsStockLength { .. } => ErrorCode::PieceExceedsStockLength,
        }
    }
}

impl CutError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CutError::Validation(err) => err.code(),
            CutError::PieceLongerThanStock { .. } => ErrorCode::Internal,
            CutError::FileNotFound { .. } => ErrorCode::FileNotFound,
            CutError::EmptyFile { .. } => ErrorCode::EmptyFile,
            CutError::InvalidJob { .. } => ErrorCode::InvalidJob,
            CutError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether this error was caused by user input rather than a broken invariant.
    pub fn is_validation(&self) -> bool {
        matches!(self, CutError::Validation(_))
    }
}

/// Result type alias for optimizer operations.
pub type Result<T> = std::result::Result<T, CutError>;
