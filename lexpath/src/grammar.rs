//! Root-naming grammar selection for path parsing.
//!
//! Paths do not carry one universal syntax: plain POSIX paths have no
//! root-name at all, Windows paths accept drive-letter (`C:`) and UNC
//! (`//server`) roots with two separator bytes, and some POSIX platforms
//! reserve a leading `//server` as a network root. This module captures
//! those differences as a small value, [`Grammar`], chosen once when a
//! path is constructed and threaded through the parser so the state
//! machine itself stays platform-agnostic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a grammar name cannot be parsed.
///
/// # Examples
///
/// ```
/// use lexpath::Grammar;
///
/// let err = "vms".parse::<Grammar>().unwrap_err();
/// assert!(err.to_string().contains("vms"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown path grammar '{value}': expected 'posix', 'windows' or 'posix-network'")]
pub struct ParseGrammarError {
    /// The string that failed to parse.
    pub value: String,
}

/// The root-naming grammar a path is parsed under.
///
/// The grammar decides which bytes act as separators, which prefixes form
/// a root-name, and which separator is emitted when a path is rebuilt
/// (normalization, append).
///
/// # Examples
///
/// ```
/// use lexpath::Grammar;
///
/// assert!(Grammar::Windows.is_separator(b'\\'));
/// assert!(!Grammar::Posix.is_separator(b'\\'));
/// assert_eq!(Grammar::Posix.preferred_separator(), '/');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grammar {
    /// Plain POSIX: `/` separates, nothing forms a root-name.
    Posix,
    /// Windows: `/` and `\` separate; `X:` and `//server` are root-names.
    Windows,
    /// POSIX with network roots: `/` separates; `//server` is a root-name.
    PosixNetwork,
}

impl Grammar {
    /// Returns the grammar of the platform the crate was compiled for.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Grammar;
    ///
    /// #[cfg(unix)]
    /// assert_eq!(Grammar::native(), Grammar::Posix);
    /// #[cfg(windows)]
    /// assert_eq!(Grammar::native(), Grammar::Windows);
    /// ```
    #[must_use]
    pub const fn native() -> Self {
        #[cfg(windows)]
        {
            Self::Windows
        }
        #[cfg(not(windows))]
        {
            Self::Posix
        }
    }

    /// Returns `true` if `byte` is a separator under this grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Grammar;
    ///
    /// assert!(Grammar::Posix.is_separator(b'/'));
    /// assert!(Grammar::Windows.is_separator(b'\\'));
    /// assert!(!Grammar::PosixNetwork.is_separator(b'\\'));
    /// ```
    #[must_use]
    pub const fn is_separator(self, byte: u8) -> bool {
        match self {
            Self::Posix | Self::PosixNetwork => byte == b'/',
            Self::Windows => byte == b'/' || byte == b'\\',
        }
    }

    /// Returns the separator emitted when a path is rebuilt.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Grammar;
    ///
    /// assert_eq!(Grammar::Windows.preferred_separator(), '\\');
    /// assert_eq!(Grammar::PosixNetwork.preferred_separator(), '/');
    /// ```
    #[must_use]
    pub const fn preferred_separator(self) -> char {
        match self {
            Self::Posix | Self::PosixNetwork => '/',
            Self::Windows => '\\',
        }
    }

    /// Returns `true` if this grammar recognizes drive-letter roots.
    #[must_use]
    pub(crate) const fn has_drive_roots(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Returns `true` if this grammar recognizes `//server` roots.
    #[must_use]
    pub(crate) const fn has_server_roots(self) -> bool {
        matches!(self, Self::Windows | Self::PosixNetwork)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
            Self::PosixNetwork => write!(f, "posix-network"),
        }
    }
}

impl FromStr for Grammar {
    type Err = ParseGrammarError;

    /// Parses a grammar name.
    ///
    /// Recognizes `"posix"`, `"windows"` and `"posix-network"`
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            "posix-network" => Ok(Self::PosixNetwork),
            _ => Err(ParseGrammarError {
                value: s.to_string(),
            }),
        }
    }
}
