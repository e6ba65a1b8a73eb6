//! The path value type and its lexical algebra.
//!
//! [`PurePath`] owns a single string buffer in the grammar chosen at
//! construction; everything else — root decomposition, component
//! iteration, normalization, relativization, ordering and hashing — is
//! recomputed on demand by running the parsing cursor over that buffer.
//! No operation in this module touches the filesystem.
//!
//! # Key Concepts
//!
//! ## Decomposition
//!
//! A path splits into at most three regions: an optional *root-name*
//! (`C:`, `//server`), an optional *root-directory* (the separator that
//! marks the path as rooted), and the *relative path* (everything after).
//! Accessors return borrowed views; nothing is cached.
//!
//! ## Lexical operations
//!
//! `lexically_normal` removes redundant `.` components and resolves `..`
//! against preceding components; `lexically_relative` expresses one path
//! relative to another. Both work purely on the strings — a path that
//! escapes through symlinks will still relativize by spelling alone.
//!
//! # Examples
//!
//! ```
//! use lexpath::{Grammar, PurePath};
//!
//! let path = PurePath::with_grammar("/a/b/../c", Grammar::Posix);
//! assert_eq!(path.lexically_normal().as_str(), "/a/c");
//!
//! let target = PurePath::with_grammar("/a/b/c", Grammar::Posix);
//! let base = PurePath::with_grammar("/a/b", Grammar::Posix);
//! let relative = target.lexically_relative(&base).unwrap();
//! assert_eq!(relative.as_str(), "c");
//! ```

mod cursor;
mod iter;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use iter::Components;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::encoding;
use crate::grammar::Grammar;
use cursor::{Cursor, Seek};

/// A hierarchical path value with purely lexical semantics.
///
/// The buffer is stored verbatim; queries parse it on demand under the
/// path's [`Grammar`]. Equality, ordering and hashing are component-wise,
/// so incidental separator repetition does not distinguish paths:
///
/// ```
/// use lexpath::{Grammar, PurePath};
///
/// let a = PurePath::with_grammar("a//b", Grammar::Posix);
/// let b = PurePath::with_grammar("a/b", Grammar::Posix);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct PurePath {
    raw: String,
    grammar: Grammar,
}

impl PurePath {
    /// Creates a path under the platform's native grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::PurePath;
    ///
    /// let path = PurePath::new("src/main.rs");
    /// assert_eq!(path.as_str(), "src/main.rs");
    /// ```
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_grammar(path, Grammar::native())
    }

    /// Creates a path under an explicit grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let path = PurePath::with_grammar("C:/tools", Grammar::Windows);
    /// assert_eq!(path.root_name(), "C:");
    /// ```
    #[must_use]
    pub fn with_grammar(path: impl Into<String>, grammar: Grammar) -> Self {
        Self {
            raw: path.into(),
            grammar,
        }
    }

    /// Builds a path from UTF-16 code units under the native grammar.
    ///
    /// Unpaired surrogates decode as U+FFFD rather than failing.
    #[must_use]
    pub fn from_wide(units: &[u16]) -> Self {
        Self::new(encoding::wide_to_narrow(units))
    }

    /// Converts the path to UTF-16 code units.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::PurePath;
    ///
    /// let path = PurePath::new("a/b");
    /// let wide = path.to_wide();
    /// assert_eq!(PurePath::from_wide(&wide), path);
    /// ```
    #[must_use]
    pub fn to_wide(&self) -> Vec<u16> {
        encoding::narrow_to_wide(self.raw.as_bytes())
    }

    /// The grammar this path is parsed under.
    #[must_use]
    pub const fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// The path text exactly as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consumes the path, returning the underlying buffer.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }

    /// Returns `true` if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Empties the buffer in place.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Iterates over the path's components.
    ///
    /// See [`Components`] for the yielded sequence.
    #[must_use]
    pub fn components(&self) -> Components<'_> {
        Components::new(&self.raw, self.grammar)
    }

    // ------------------------------------------------------------------
    // Decomposition
    // ------------------------------------------------------------------

    /// The root-name view (`C:`, `//server`), or `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let path = PurePath::with_grammar("//server/share", Grammar::Windows);
    /// assert_eq!(path.root_name(), "//server");
    /// assert_eq!(PurePath::with_grammar("/usr", Grammar::Posix).root_name(), "");
    /// ```
    #[must_use]
    pub fn root_name(&self) -> &str {
        root_name_in(&self.raw, self.grammar)
    }

    /// The root-directory view, or `""` if the path is not rooted.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// assert_eq!(PurePath::with_grammar("C:/x", Grammar::Windows).root_directory(), "/");
    /// assert_eq!(PurePath::with_grammar("C:x", Grammar::Windows).root_directory(), "");
    /// ```
    #[must_use]
    pub fn root_directory(&self) -> &str {
        root_directory_in(&self.raw, self.grammar)
    }

    /// Everything after the root-name and root-directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let path = PurePath::with_grammar("C:/a//b", Grammar::Windows);
    /// assert_eq!(path.relative_path(), "a//b");
    /// ```
    #[must_use]
    pub fn relative_path(&self) -> &str {
        relative_path_in(&self.raw, self.grammar)
    }

    /// The path minus its final component.
    ///
    /// A path with no relative part is its own parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// assert_eq!(PurePath::with_grammar("/a/b", Grammar::Posix).parent_path(), "/a");
    /// assert_eq!(PurePath::with_grammar("/", Grammar::Posix).parent_path(), "/");
    /// assert_eq!(PurePath::with_grammar("a", Grammar::Posix).parent_path(), "");
    /// ```
    #[must_use]
    pub fn parent_path(&self) -> &str {
        if !self.has_relative_path() {
            return &self.raw;
        }
        let mut cursor = Cursor::new_at_end(&self.raw, self.grammar);
        cursor.decrement();
        if cursor.at_start() {
            return "";
        }
        cursor.decrement();
        cursor.peek_consumed()
    }

    /// The final component, or `""` for a path ending in a separator or
    /// consisting only of a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// assert_eq!(PurePath::with_grammar("a/b.txt", Grammar::Posix).file_name(), "b.txt");
    /// assert_eq!(PurePath::with_grammar("a/b/", Grammar::Posix).file_name(), "");
    /// assert_eq!(PurePath::with_grammar("/", Grammar::Posix).file_name(), "");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &str {
        {
            let mut cursor = Cursor::new(&self.raw, self.grammar);
            cursor.seek(Seek::RootDirectory);
            if cursor.at_end() {
                return "";
            }
        }
        let mut cursor = Cursor::new_at_end(&self.raw, self.grammar);
        cursor.decrement();
        cursor.entry()
    }

    /// The filename with its extension removed.
    ///
    /// `"."` and `".."` are their own stems; a leading dot does not start
    /// an extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// assert_eq!(PurePath::with_grammar("a/b.txt", Grammar::Posix).stem(), "b");
    /// assert_eq!(PurePath::with_grammar(".profile", Grammar::Posix).stem(), ".profile");
    /// assert_eq!(PurePath::with_grammar("..", Grammar::Posix).stem(), "..");
    /// ```
    #[must_use]
    pub fn stem(&self) -> &str {
        self.filename_fragment(true)
    }

    /// The filename's extension including the dot, or `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// assert_eq!(PurePath::with_grammar("a/b.tar.gz", Grammar::Posix).extension(), ".gz");
    /// assert_eq!(PurePath::with_grammar(".profile", Grammar::Posix).extension(), "");
    /// ```
    #[must_use]
    pub fn extension(&self) -> &str {
        self.filename_fragment(false)
    }

    fn filename_fragment(&self, want_stem: bool) -> &str {
        let file = self.file_name();
        if file.is_empty() || file == "." || file == ".." {
            return if want_stem { file } else { "" };
        }
        match file.rfind('.') {
            None | Some(0) => {
                if want_stem {
                    file
                } else {
                    ""
                }
            }
            Some(pos) => {
                if want_stem {
                    &file[..pos]
                } else {
                    &file[pos..]
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    /// Returns `true` if the path carries a root-name.
    #[must_use]
    pub fn has_root_name(&self) -> bool {
        !self.root_name().is_empty()
    }

    /// Returns `true` if the path carries a root-directory.
    #[must_use]
    pub fn has_root_directory(&self) -> bool {
        !self.root_directory().is_empty()
    }

    /// Returns `true` if anything follows the root.
    #[must_use]
    pub fn has_relative_path(&self) -> bool {
        !self.relative_path().is_empty()
    }

    /// Returns `true` if the path ends in a non-empty filename.
    #[must_use]
    pub fn has_file_name(&self) -> bool {
        !self.file_name().is_empty()
    }

    /// Returns `true` if the path is absolute under its grammar.
    ///
    /// Under [`Grammar::Windows`] a path needs both a root-name and a
    /// root-directory; elsewhere a root-directory suffices.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// assert!(PurePath::with_grammar("/usr", Grammar::Posix).is_absolute());
    /// assert!(!PurePath::with_grammar("/usr", Grammar::Windows).is_absolute());
    /// assert!(PurePath::with_grammar("C:/x", Grammar::Windows).is_absolute());
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        is_absolute_parts(self.root_name(), self.root_directory(), self.grammar)
    }

    /// Returns `true` if the path is not absolute.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Appends `path` with directory-separator semantics.
    ///
    /// An absolute right-hand side (or one carrying a different
    /// root-name) replaces the receiver entirely; a right-hand side with
    /// its own root-directory re-roots below the receiver's root-name;
    /// otherwise a separator is inserted when the receiver ends in a
    /// filename.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let mut path = PurePath::with_grammar("/a", Grammar::Posix);
    /// path.push("b");
    /// assert_eq!(path.as_str(), "/a/b");
    ///
    /// path.push("/etc");
    /// assert_eq!(path.as_str(), "/etc");
    ///
    /// let mut drive = PurePath::with_grammar("C:", Grammar::Windows);
    /// drive.push("temp");
    /// assert_eq!(drive.as_str(), "C:temp");
    /// ```
    pub fn push(&mut self, path: impl AsRef<str>) {
        let p = path.as_ref();
        let grammar = self.grammar;
        let p_root_name = root_name_in(p, grammar);
        let p_root_dir = root_directory_in(p, grammar);

        if is_absolute_parts(p_root_name, p_root_dir, grammar)
            || (!p_root_name.is_empty() && p_root_name != self.root_name())
        {
            self.raw.clear();
            self.raw.push_str(p);
            return;
        }

        if !p_root_dir.is_empty() {
            let mut next = String::with_capacity(self.root_name().len() + p.len());
            next.push_str(self.root_name());
            next.push_str(p_root_dir);
            self.raw = next;
        } else if self.has_file_name() {
            self.raw.push(grammar.preferred_separator());
        } else if self.has_root_name() && !self.has_root_directory() {
            // "//host" / "b" must give "//host/b", not "//hostb"
            let bytes = self.raw.as_bytes();
            if grammar.has_server_roots()
                && bytes.len() >= 3
                && grammar.is_separator(bytes[0])
                && grammar.is_separator(bytes[1])
                && !grammar.is_separator(bytes[2])
            {
                self.raw.push(grammar.preferred_separator());
            }
        }

        self.raw.push_str(relative_path_in(p, grammar));
    }

    /// Returns `self` appended with `path`; see [`PurePath::push`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let base = PurePath::with_grammar("//host", Grammar::Windows);
    /// assert_eq!(base.join("share").as_str(), "//host\\share");
    /// ```
    #[must_use]
    pub fn join(&self, path: impl AsRef<str>) -> Self {
        let mut result = self.clone();
        result.push(path);
        result
    }

    /// Removes the filename component, keeping any trailing separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let mut path = PurePath::with_grammar("/a/b", Grammar::Posix);
    /// path.remove_file_name();
    /// assert_eq!(path.as_str(), "/a/");
    /// ```
    pub fn remove_file_name(&mut self) {
        let len = self.file_name().len();
        if len > 0 {
            let keep = self.raw.len() - len;
            self.raw.truncate(keep);
        }
    }

    /// Replaces the filename component, if one is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let mut path = PurePath::with_grammar("/a/old.txt", Grammar::Posix);
    /// path.replace_file_name("new.txt");
    /// assert_eq!(path.as_str(), "/a/new.txt");
    /// ```
    pub fn replace_file_name(&mut self, file_name: impl AsRef<str>) {
        if self.has_file_name() {
            self.remove_file_name();
            self.push(file_name);
        }
    }

    /// Replaces the extension, adding a leading dot when missing.
    ///
    /// An empty replacement removes the extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let mut path = PurePath::with_grammar("build/out.o", Grammar::Posix);
    /// path.replace_extension("d");
    /// assert_eq!(path.as_str(), "build/out.d");
    ///
    /// path.replace_extension("");
    /// assert_eq!(path.as_str(), "build/out");
    /// ```
    pub fn replace_extension(&mut self, extension: impl AsRef<str>) {
        let ext = extension.as_ref();
        let len = self.extension().len();
        if len > 0 {
            let keep = self.raw.len() - len;
            self.raw.truncate(keep);
        }
        if !ext.is_empty() {
            if !ext.starts_with('.') {
                self.raw.push('.');
            }
            self.raw.push_str(ext);
        }
    }

    // ------------------------------------------------------------------
    // Lexical operations
    // ------------------------------------------------------------------

    /// Removes redundant `.` components and resolves `..` against
    /// preceding components, without touching the filesystem.
    ///
    /// Separators are rewritten to the grammar's preferred separator. An
    /// empty result becomes `"."`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let normal = |s: &str| PurePath::with_grammar(s, Grammar::Posix)
    ///     .lexically_normal()
    ///     .into_string();
    ///
    /// assert_eq!(normal("/a/b/../c"), "/a/c");
    /// assert_eq!(normal("a/./b"), "a/b");
    /// assert_eq!(normal(""), ".");
    /// assert_eq!(normal("../a/.."), "..");
    /// ```
    #[must_use]
    pub fn lexically_normal(&self) -> Self {
        let mut root_parts: Vec<&str> = Vec::new();
        let mut parts: Vec<&str> = Vec::new();
        let mut root_directory_defined = false;
        let mut need_final_separator = false;

        let mut cursor = Cursor::new(&self.raw, self.grammar);
        cursor.increment();
        while !cursor.at_end() {
            let part = cursor.entry();

            if cursor.in_root_name() || cursor.in_root_directory() {
                if cursor.in_root_directory() {
                    root_directory_defined = true;
                }
                root_parts.push(part);
            } else if part == ".." {
                if parts.last().map_or(false, |last| *last != "..") {
                    need_final_separator = true;
                    parts.pop();
                } else if parts.last().map_or(true, |last| *last == "..")
                    && !root_directory_defined
                {
                    parts.push("..");
                }
            } else if part == "." || part.is_empty() {
                need_final_separator = true;
                if part.is_empty() {
                    parts.push(part);
                }
            } else {
                need_final_separator = false;
                parts.push(part);
            }
            cursor.increment();
        }

        // no final separator when the path ends in a kept ".."
        need_final_separator =
            need_final_separator && parts.last().map_or(false, |last| *last != "..");

        let separator = self.grammar.preferred_separator();
        let mut normal = String::with_capacity(self.raw.len() + 1);
        for part in &root_parts {
            normal.push_str(part);
        }
        if separator != '/' {
            normal = normal
                .chars()
                .map(|c| if c == '/' { separator } else { c })
                .collect();
        }
        for part in &parts {
            if !part.is_empty() {
                normal.push_str(part);
                normal.push(separator);
            }
        }
        if !parts.is_empty() && !need_final_separator {
            normal.pop();
        }
        if normal.is_empty() {
            normal.push('.');
        }

        Self::with_grammar(normal, self.grammar)
    }

    /// Expresses this path relative to `base`, purely lexically.
    ///
    /// Returns `None` when relativization is impossible: the roots are
    /// incomparable, too many `..` components remain in `base`, or (under
    /// [`Grammar::Windows`]) a drive-shaped component sits where a plain
    /// filename is required.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let path = PurePath::with_grammar("/a/b/c", Grammar::Posix);
    /// let relative = path.lexically_relative("/a/b").unwrap();
    /// assert_eq!(relative.as_str(), "c");
    ///
    /// // A rooted path has no lexical relation to an unrooted one.
    /// assert!(path.lexically_relative("a/b").is_none());
    /// ```
    #[must_use]
    pub fn lexically_relative(&self, base: impl AsRef<str>) -> Option<Self> {
        let base = base.as_ref();
        let grammar = self.grammar;

        let mut parser = Cursor::new(&self.raw, grammar);
        parser.increment();
        let mut parser_base = Cursor::new(base, grammar);
        parser_base.increment();

        let mut this_root_name = "";
        let mut this_root_dir = "";
        let mut base_root_name = "";
        let mut base_root_dir = "";
        if parser.in_root_name() {
            this_root_name = parser.entry();
            parser.increment();
        }
        if parser.in_root_directory() {
            this_root_dir = parser.entry();
            parser.increment();
        }
        if parser_base.in_root_name() {
            base_root_name = parser_base.entry();
            parser_base.increment();
        }
        if parser_base.in_root_directory() {
            base_root_dir = parser_base.entry();
            parser_base.increment();
        }

        if this_root_name != base_root_name
            || is_absolute_parts(this_root_name, this_root_dir, grammar)
                != is_absolute_parts(base_root_name, base_root_dir, grammar)
            || (this_root_dir.is_empty() && !base_root_dir.is_empty())
        {
            log::debug!(
                "cannot relativize {:?} against {base:?}: incomparable roots",
                self.raw
            );
            return None;
        }

        if grammar.has_drive_roots() {
            // a drive-shaped filename would re-root the rebuilt path
            let drive_shaped = |item: &str| item.len() == 2 && item.as_bytes()[1] == b':';
            parser.reset();
            parser.seek(Seek::RootDirectory);
            while !parser.at_end() {
                if drive_shaped(parser.entry()) {
                    return None;
                }
                parser.increment();
            }
            parser_base.reset();
            parser_base.seek(Seek::RootDirectory);
            while !parser_base.at_end() {
                if drive_shaped(parser_base.entry()) {
                    return None;
                }
                parser_base.increment();
            }
        }

        let mut a = self.components().peekable();
        let mut b = Components::new(base, grammar).peekable();
        loop {
            match (a.peek(), b.peek()) {
                (Some(x), Some(y)) if x == y => {
                    a.next();
                    b.next();
                }
                _ => break,
            }
        }

        let mut count: i64 = 0;
        for part in b {
            if part == ".." {
                count -= 1;
            } else if part != "." && !part.is_empty() {
                count += 1;
            }
        }

        if count == 0 && a.peek().map_or(true, |part| part.is_empty()) {
            return Some(Self::with_grammar(".", grammar));
        }
        if count < 0 {
            return None;
        }

        let mut result = Self::with_grammar("", grammar);
        for _ in 0..count {
            result.push("..");
        }
        for part in a {
            result.push(part);
        }
        Some(result)
    }

    /// Like [`PurePath::lexically_relative`], falling back to a copy of
    /// `self` when relativization is impossible.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let path = PurePath::with_grammar("/a/b", Grammar::Posix);
    /// assert_eq!(path.lexically_proximate("c/d").as_str(), "/a/b");
    /// ```
    #[must_use]
    pub fn lexically_proximate(&self, base: impl AsRef<str>) -> Self {
        self.lexically_relative(base)
            .unwrap_or_else(|| self.clone())
    }

    /// Re-roots a relative path below `base`; absolute paths are
    /// returned unchanged. Purely lexical.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let path = PurePath::with_grammar("build/out", Grammar::Posix);
    /// assert_eq!(path.absolute("/src").as_str(), "/src/build/out");
    /// ```
    #[must_use]
    pub fn absolute(&self, base: impl AsRef<str>) -> Self {
        if self.is_absolute() {
            return self.clone();
        }
        let mut result = Self::with_grammar(base.as_ref(), self.grammar);
        result.push(&self.raw);
        result
    }

    /// The path in generic form: forward slashes, duplicate separators
    /// collapsed, double-slash server roots preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let path = PurePath::with_grammar("C:\\a\\\\b", Grammar::Windows);
    /// assert_eq!(path.generic_string(), "C:/a/b");
    ///
    /// let unc = PurePath::with_grammar("//server//share", Grammar::Windows);
    /// assert_eq!(unc.generic_string(), "//server/share");
    /// ```
    #[must_use]
    pub fn generic_string(&self) -> String {
        let generic = if self.grammar.preferred_separator() == '/' {
            self.raw.clone()
        } else {
            self.raw.replace('\\', "/")
        };

        let bytes = generic.as_bytes();
        let keep = if self.grammar.has_server_roots()
            && bytes.len() > 2
            && bytes[0] == b'/'
            && bytes[1] == b'/'
            && bytes[2] != b'/'
        {
            2
        } else {
            0
        };

        let mut out = String::with_capacity(generic.len());
        out.push_str(&generic[..keep]);
        let mut previous_slash = false;
        for c in generic[keep..].chars() {
            if c == '/' && previous_slash {
                continue;
            }
            previous_slash = c == '/';
            out.push(c);
        }
        out
    }

    /// Compares component sequences: root-name lexicographically, then
    /// root-directory presence (absence sorts first), then each remaining
    /// component pairwise; the shorter path sorts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use lexpath::{Grammar, PurePath};
    ///
    /// let a = PurePath::with_grammar("a/b", Grammar::Posix);
    /// assert_eq!(a.compare("a//b"), Ordering::Equal);
    /// assert_eq!(a.compare("/a/b"), Ordering::Less);
    /// assert_eq!(a.compare("a"), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn compare(&self, other: impl AsRef<str>) -> Ordering {
        let other = other.as_ref();
        let grammar = self.grammar;
        let mut this_cursor = Cursor::new(&self.raw, grammar);
        this_cursor.increment();
        let mut other_cursor = Cursor::new(other, grammar);
        other_cursor.increment();

        // root-name
        {
            let mut this_root = "";
            let mut other_root = "";
            if this_cursor.in_root_name() {
                this_root = this_cursor.entry();
                this_cursor.increment();
            }
            if other_cursor.in_root_name() {
                other_root = other_cursor.entry();
                other_cursor.increment();
            }
            match this_root.cmp(other_root) {
                Ordering::Equal => {}
                ordering => return ordering,
            }
        }

        // root-directory presence
        match (
            this_cursor.in_root_directory(),
            other_cursor.in_root_directory(),
        ) {
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (true, true) => {
                this_cursor.increment();
                other_cursor.increment();
            }
            (false, false) => {}
        }

        while !this_cursor.at_end() && !other_cursor.at_end() {
            match this_cursor.entry().cmp(other_cursor.entry()) {
                Ordering::Equal => {}
                ordering => return ordering,
            }
            this_cursor.increment();
            other_cursor.increment();
        }

        match (this_cursor.at_end(), other_cursor.at_end()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

fn root_name_in(path: &str, grammar: Grammar) -> &str {
    let mut cursor = Cursor::new(path, grammar);
    cursor.increment();
    if cursor.in_root_name() {
        cursor.entry()
    } else {
        ""
    }
}

fn root_directory_in(path: &str, grammar: Grammar) -> &str {
    let mut cursor = Cursor::new(path, grammar);
    cursor.seek(Seek::RootName);
    if cursor.in_root_directory() {
        cursor.entry()
    } else {
        ""
    }
}

fn relative_path_in(path: &str, grammar: Grammar) -> &str {
    let mut cursor = Cursor::new(path, grammar);
    cursor.seek(Seek::RootDirectory);
    if cursor.at_end() {
        ""
    } else {
        cursor.peek_remainder()
    }
}

fn is_absolute_parts(root_name: &str, root_directory: &str, grammar: Grammar) -> bool {
    match grammar {
        Grammar::Windows => !root_name.is_empty() && !root_directory.is_empty(),
        Grammar::Posix | Grammar::PosixNetwork => !root_directory.is_empty(),
    }
}

impl Default for PurePath {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Display for PurePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for PurePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for PurePath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl AsRef<str> for PurePath {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for PurePath {
    fn eq(&self, other: &Self) -> bool {
        self.grammar == other.grammar && self.compare(&other.raw) == Ordering::Equal
    }
}

impl Eq for PurePath {}

impl PartialOrd for PurePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PurePath {
    fn cmp(&self, other: &Self) -> Ordering {
        // grammar first so ordering stays consistent with equality
        self.grammar
            .cmp(&other.grammar)
            .then_with(|| self.compare(&other.raw))
    }
}

impl Hash for PurePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grammar.hash(state);
        let mut cursor = Cursor::new(&self.raw, self.grammar);
        cursor.increment();
        while !cursor.at_end() {
            cursor.entry().hash(state);
            cursor.increment();
        }
    }
}

impl Serialize for PurePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for PurePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posix(s: &str) -> PurePath {
        PurePath::with_grammar(s, Grammar::Posix)
    }

    fn windows(s: &str) -> PurePath {
        PurePath::with_grammar(s, Grammar::Windows)
    }

    #[test]
    fn test_decomposition_posix() {
        let path = posix("/usr/lib/libm.so");
        assert_eq!(path.root_name(), "");
        assert_eq!(path.root_directory(), "/");
        assert_eq!(path.relative_path(), "usr/lib/libm.so");
        assert_eq!(path.parent_path(), "/usr/lib");
        assert_eq!(path.file_name(), "libm.so");
        assert_eq!(path.stem(), "libm");
        assert_eq!(path.extension(), ".so");
    }

    #[test]
    fn test_decomposition_windows_drive() {
        let path = windows("C:/foo");
        assert_eq!(path.root_name(), "C:");
        assert_eq!(path.root_directory(), "/");
        assert_eq!(path.relative_path(), "foo");
        assert!(path.is_absolute());

        // drive-relative: a root-name with no root-directory
        let drive_relative = windows("C:foo");
        assert_eq!(drive_relative.root_name(), "C:");
        assert_eq!(drive_relative.root_directory(), "");
        assert!(!drive_relative.is_absolute());
    }

    #[test]
    fn test_decomposition_windows_server() {
        let path = windows("//server/share");
        assert_eq!(path.root_name(), "//server");
        assert_eq!(path.root_directory(), "/");
        assert_eq!(path.relative_path(), "share");
    }

    #[test]
    fn test_parent_of_root_is_root() {
        assert_eq!(posix("/").parent_path(), "/");
        assert_eq!(windows("C:/").parent_path(), "C:/");
        assert_eq!(windows("C:").parent_path(), "C:");
    }

    #[test]
    fn test_file_name_absent_after_trailing_separator() {
        let path = posix("a/b/");
        assert_eq!(path.file_name(), "");
        assert!(!path.has_file_name());
    }

    #[test]
    fn test_stem_edge_cases() {
        assert_eq!(posix("a/.").stem(), ".");
        assert_eq!(posix("a/..").stem(), "..");
        assert_eq!(posix("a/..").extension(), "");
        assert_eq!(posix("archive.tar.gz").stem(), "archive.tar");
    }

    #[test]
    fn test_push_inserts_single_separator() {
        let mut path = posix("a");
        path.push("b");
        assert_eq!(path.as_str(), "a/b");
    }

    #[test]
    fn test_push_absolute_replaces() {
        let mut path = posix("a/b");
        path.push("/etc");
        assert_eq!(path.as_str(), "/etc");

        let mut path = windows("C:/x");
        path.push("D:/y");
        assert_eq!(path.as_str(), "D:/y");
    }

    #[test]
    fn test_push_same_drive_relative() {
        let mut path = windows("C:/x");
        path.push("C:y");
        assert_eq!(path.as_str(), "C:/x\\y");
    }

    #[test]
    fn test_push_rooted_rhs_keeps_root_name() {
        let mut path = windows("C:/x/y");
        path.push("/z");
        assert_eq!(path.as_str(), "C:/z");
    }

    #[test]
    fn test_push_onto_bare_server_root() {
        let mut path = windows("//host");
        path.push("b");
        assert_eq!(path.as_str(), "//host\\b");

        let mut path = PurePath::with_grammar("//host", Grammar::PosixNetwork);
        path.push("b");
        assert_eq!(path.as_str(), "//host/b");
    }

    #[test]
    fn test_push_empty_adds_trailing_separator() {
        let mut path = posix("a");
        path.push("");
        assert_eq!(path.as_str(), "a/");
    }

    #[test]
    fn test_remove_and_replace_file_name() {
        let mut path = posix("/a/b.txt");
        path.remove_file_name();
        assert_eq!(path.as_str(), "/a/");

        let mut path = posix("/a/b.txt");
        path.replace_file_name("c.rs");
        assert_eq!(path.as_str(), "/a/c.rs");

        // nothing to replace
        let mut path = posix("/a/");
        path.replace_file_name("c.rs");
        assert_eq!(path.as_str(), "/a/");
    }

    #[test]
    fn test_replace_extension() {
        let mut path = posix("out.o");
        path.replace_extension(".d");
        assert_eq!(path.as_str(), "out.d");

        path.replace_extension("tmp");
        assert_eq!(path.as_str(), "out.tmp");

        path.replace_extension("");
        assert_eq!(path.as_str(), "out");

        let mut dotfile = posix(".profile");
        dotfile.replace_extension("bak");
        assert_eq!(dotfile.as_str(), ".profile.bak");
    }

    #[test]
    fn test_lexically_normal_examples() {
        assert_eq!(posix("/a/b/../c").lexically_normal().as_str(), "/a/c");
        assert_eq!(posix("a/./b").lexically_normal().as_str(), "a/b");
        assert_eq!(posix("").lexically_normal().as_str(), ".");
        assert_eq!(posix("a/..").lexically_normal().as_str(), ".");
        assert_eq!(posix("../../a").lexically_normal().as_str(), "../../a");
        assert_eq!(posix("/..").lexically_normal().as_str(), "/");
        assert_eq!(posix("a/b/").lexically_normal().as_str(), "a/b/");
        assert_eq!(posix("a/b/.").lexically_normal().as_str(), "a/b/");
        assert_eq!(posix("a/b/c/../..").lexically_normal().as_str(), "a/");
    }

    #[test]
    fn test_lexically_normal_rewrites_separators() {
        let path = windows("C:/a/b/../c");
        assert_eq!(path.lexically_normal().as_str(), "C:\\a\\c");
    }

    #[test]
    fn test_lexically_normal_idempotent() {
        for raw in ["/a/b/../c", "a/./b", "", "../a/..", "a//b///c/", "/.."] {
            let once = posix(raw).lexically_normal();
            let twice = once.lexically_normal();
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_lexically_relative_examples() {
        assert_eq!(
            posix("/a/b/c").lexically_relative("/a/b").unwrap().as_str(),
            "c"
        );
        assert_eq!(
            posix("/a/b").lexically_relative("/a/b/c").unwrap().as_str(),
            ".."
        );
        assert_eq!(
            posix("a/b").lexically_relative("c/d").unwrap().as_str(),
            "../../a/b"
        );
        assert_eq!(posix("a/b").lexically_relative("a/b").unwrap().as_str(), ".");
    }

    #[test]
    fn test_lexically_relative_incomparable_roots() {
        assert!(posix("/a").lexically_relative("a").is_none());
        assert!(posix("a").lexically_relative("/a").is_none());
        assert!(windows("C:/a").lexically_relative("D:/a").is_none());
    }

    #[test]
    fn test_lexically_relative_excess_parent_components() {
        assert!(posix("a").lexically_relative("../b").is_none());
    }

    #[test]
    fn test_lexically_relative_drive_shaped_component() {
        assert!(windows("/x/C:/y").lexically_relative("/x").is_none());
    }

    #[test]
    fn test_lexically_proximate_falls_back_to_self() {
        let path = posix("/a/b");
        assert_eq!(path.lexically_proximate("c").as_str(), "/a/b");
        assert_eq!(path.lexically_proximate("/a").as_str(), "b");
    }

    #[test]
    fn test_absolute_reroots_relative_paths() {
        assert_eq!(posix("x/y").absolute("/base").as_str(), "/base/x/y");
        assert_eq!(posix("/x").absolute("/base").as_str(), "/x");
    }

    #[test]
    fn test_generic_string() {
        assert_eq!(windows("C:\\a\\b").generic_string(), "C:/a/b");
        assert_eq!(posix("a//b///c").generic_string(), "a/b/c");
        assert_eq!(
            PurePath::with_grammar("//server//x", Grammar::PosixNetwork).generic_string(),
            "//server/x"
        );
    }

    #[test]
    fn test_compare_orders_components_not_bytes() {
        // "/" sorts before any rooted child, regardless of raw bytes
        assert_eq!(posix("/a/b").compare("/a/b/c"), Ordering::Less);
        assert_eq!(posix("/a/c").compare("/a/b"), Ordering::Greater);
        assert_eq!(posix("a///b").compare("a/b"), Ordering::Equal);
        // absence of a root-directory sorts first
        assert_eq!(posix("a").compare("/a"), Ordering::Less);
    }

    #[test]
    fn test_equality_ignores_separator_repetition() {
        assert_eq!(posix("a//b"), posix("a/b"));
        assert_ne!(posix("a/b/"), posix("a/b"));
        assert_ne!(posix("a/b"), PurePath::with_grammar("a/b", Grammar::PosixNetwork));
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(path: &PurePath) -> u64 {
            let mut hasher = DefaultHasher::new();
            path.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(hash_of(&posix("a//b")), hash_of(&posix("a/b")));
        assert_ne!(hash_of(&posix("a/b")), hash_of(&posix("a/c")));
    }

    #[test]
    fn test_round_trip_through_components() {
        for raw in ["/a/b/c", "a/b/", "C:/x/y", "//server/share", "C:x"] {
            let path = windows(raw);
            let mut rebuilt = PurePath::with_grammar("", Grammar::Windows);
            for part in path.components() {
                rebuilt.push(part);
            }
            assert_eq!(
                rebuilt.lexically_normal(),
                path.lexically_normal(),
                "round trip failed for {raw:?}"
            );
        }
    }

    #[test]
    fn test_wide_round_trip() {
        let path = posix("src/héllo/日本語.txt");
        assert_eq!(PurePath::from_wide(&path.to_wide()).as_str(), path.as_str());
    }

    #[test]
    fn test_serde_round_trip() {
        let path = posix("a/b/c");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"a/b/c\"");
        let back: PurePath = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "a/b/c");
    }

    #[test]
    fn test_display_shows_raw_text() {
        assert_eq!(posix("a//b").to_string(), "a//b");
    }
}
