//! # greeter-core
//!
//! Core library for the greeter demo window.
//!
//! This crate holds everything that does not need a display:
//! - Validating the entered name
//! - Deciding which modal dialog a greet click produces
//! - The fixed window geometry, fonts and literal UI strings
//!
//! ## Modules
//!
//! - [`config`] - Window geometry and font settings
//! - [`dialog`] - Modal dialog model
//! - [`error`] - Error types and Result alias
//! - [`greeting`] - Name validation and the greet operation
//! - [`text`] - Literal UI strings
//!
//! ## Example
//!
//! ```
//! use greeter_core::{greet, Severity};
//!
//! let dialog = greet("  Alice  ");
//! assert_eq!(dialog.severity, Severity::Info);
//! assert_eq!(dialog.message, "你好，Alice！");
//! ```

pub mod config;
pub mod dialog;
pub mod error;
pub mod greeting;
pub mod text;

pub use config::WindowConfig;
pub use dialog::{Dialog, Severity};
pub use error::{Error, Result};
pub use greeting::{greet, Name};
