#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # lexpath
//!
//! A self-contained, portable hierarchical-path value type for
//! build-configuration tooling.
//!
//! The crate decomposes, normalizes, compares and re-roots paths without
//! depending on a platform path library: every operation is a purely
//! lexical traversal of the stored string, driven by a small parsing
//! state machine. Which root syntaxes exist — none, drive letters and
//! UNC servers, or double-slash network roots — is decided by the
//! [`Grammar`] chosen when a path is constructed, so all platform
//! flavors can be exercised in one binary.
//!
//! ## Core Types
//!
//! - [`PurePath`]: the owned path value with the lexical algebra
//! - [`Components`]: bidirectional iteration over path components
//! - [`Grammar`]: the root-naming grammar strategy
//! - [`ParseGrammarError`]: error for grammar selection from text
//!
//! ## Examples
//!
//! ```
//! use lexpath::{Grammar, PurePath};
//!
//! let mut path = PurePath::with_grammar("/projects", Grammar::Posix);
//! path.push("demo/src/../lib");
//! assert_eq!(path.lexically_normal().as_str(), "/projects/demo/lib");
//!
//! let unc = PurePath::with_grammar("//server/share/x", Grammar::Windows);
//! assert_eq!(unc.root_name(), "//server");
//! assert!(unc.is_absolute());
//! ```
//!
//! No operation here performs filesystem I/O; existence checks and
//! canonicalization through symlinks belong to the calling tool.

mod encoding;
pub mod grammar;
pub mod path;

// Re-export key types at crate root for convenience
pub use grammar::{Grammar, ParseGrammarError};
pub use path::{Components, PurePath};
