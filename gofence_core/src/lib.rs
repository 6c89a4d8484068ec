//! `gofence_core` turns the markdown produced by
//! [godocdown](https://github.com/robertkrimen/godocdown) into markdown with
//! fenced, language-tagged code blocks.
//!
//! godocdown renders code as indented blocks:
//!
//! ```text
//! another line of text
//!     code1
//!
//!     code2
//!
//! documentation resume
//! ```
//!
//! which becomes:
//!
//! ````text
//! another line of text
//! ```go
//! code1
//!
//! code2
//! ```
//!
//! documentation resume
//! ````
//!
//! ## Pipeline
//!
//! ```text
//! Producer (godocdown process, file or stdin)
//!   → PeekReader (lines + one byte of lookahead)
//!   → FenceRewriter (in-block / out-of-block state machine)
//!   → output sink
//! ```
//!
//! ## Modules
//!
//! - [`config`] — `gofence.toml` discovery and parsing.
//! - [`producer`] — the [`Producer`] trait and its generator, file and stdin
//!   implementations.
//!
//! ## Quick Start
//!
//! ```rust
//! use gofence_core::FenceOptions;
//! use gofence_core::rewrite_str;
//!
//! let output = rewrite_str("para\n\n    code1\n\npara2\n", &FenceOptions::default()).unwrap();
//! assert_eq!(output, "para\n\n```go\ncode1\n```\n\npara2\n");
//! ```

pub use config::*;
pub use error::*;
pub use producer::*;
pub use reader::*;
pub use rewriter::*;

pub mod config;
#[allow(unused_assignments)]
mod error;
pub mod producer;
mod reader;
mod rewriter;

#[cfg(test)]
mod __fixtures;
