//! Error types for the pulse network simulator.
//!
//! This module provides a unified error type [`PulseError`] that covers
//! all error conditions that can occur during DSL parsing, network wiring,
//! and campaign simulation.

use thiserror::Error;

/// Result type alias using [`PulseError`].
pub type Result<T> = std::result::Result<T, PulseError>;

/// Unified error type for all pulse network operations.
#[derive(Error, Debug)]
pub enum PulseError {
    // ============ DSL Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Module definition without a known kind prefix
    #[error("Unknown module type for '{name}' at line {line} (expected '%', '&' or 'broadcaster')")]
    UnknownModuleType { name: String, line: usize },

    /// Duplicate module name
    #[error("Duplicate module name '{name}' at line {line}")]
    DuplicateModule { name: String, line: usize },

    /// The same destination listed twice in one definition
    #[error("Module '{module}' lists destination '{destination}' twice at line {line}")]
    DuplicateDestination {
        module: String,
        destination: String,
        line: usize,
    },

    // ============ Network Errors ============
    /// Entry module is not defined
    #[error("Network has no entry module '{name}'")]
    MissingEntry { name: String },

    /// Module not found in network
    #[error("Module '{name}' not found in network")]
    ModuleNotFound { name: String },

    /// Invalid network topology
    #[error("Invalid network topology: {message}")]
    InvalidTopology { message: String },

    // ============ Simulation Errors ============
    /// Periodic search ran out of presses
    #[error("Press ceiling of {presses} reached with {found} of {expected} periods found")]
    PressCeilingExceeded {
        presses: u64,
        found: usize,
        expected: usize,
    },

    /// A counter or combined period does not fit in 64 bits
    #[error("Arithmetic overflow while computing {what}")]
    CountOverflow { what: String },

    /// Invalid campaign parameter
    #[error("Invalid campaign parameter: {message}")]
    InvalidCampaignParam { message: String },

    // ============ I/O Errors ============
    /// Error reading network file
    #[error("Failed to read network file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PulseError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a module-not-found error
    pub fn module_not_found(name: impl Into<String>) -> Self {
        Self::ModuleNotFound { name: name.into() }
    }

    /// Create an overflow error
    pub fn overflow(what: impl Into<String>) -> Self {
        Self::CountOverflow { what: what.into() }
    }

    /// Create an invalid campaign parameter error
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::InvalidCampaignParam {
            message: message.into(),
        }
    }
}
