//! stencil-util - Shared foundation types for the Stencil template toolchain
//!
//! This crate holds the pieces every other Stencil crate agrees on:
//!
//! - [`location`] - zero-indexed row/column positions and source files that
//!   map those positions back to lines of text
//! - [`diagnostic`] - levels, codes, snippets, builders and a collecting
//!   [`Handler`] used to report problems found in templates
//! - [`error`] - error types for the lookups above
//!
//! # Example
//!
//! ```
//! use stencil_util::{DiagnosticBuilder, Location, SourceFile, SourceSnippet};
//!
//! let file = SourceFile::new("page.html", "<p>{{ name }</p>");
//! let at = Location::new(0, 12);
//! let diag = DiagnosticBuilder::error("unterminated expansion block")
//!     .location(at)
//!     .snippet(SourceSnippet::from_source(&file, at).unwrap())
//!     .build();
//!
//! assert!(diag.render(Some(file.name()), false).contains("page.html:1:13"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod location;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{LocationError, LocationResult};
pub use location::{Location, SourceFile};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
