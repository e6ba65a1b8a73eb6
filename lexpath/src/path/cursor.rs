//! The path-parsing state machine.
//!
//! A [`Cursor`] scans a borrowed path string one component at a time,
//! classifying each token as root-name, root-directory, filename or
//! trailing separator. It walks in both directions with the same three
//! consuming primitives, parameterized by the [`Grammar`] chosen when the
//! owning path was built. Entry positions are byte offsets into the
//! borrowed buffer, so the borrow checker enforces that a cursor never
//! outlives the path it scans.

use crate::grammar::Grammar;

/// Syntactic role of the current token, ordered by position in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum State {
    BeforeBegin,
    InRootName,
    InRootDir,
    InFilename,
    TrailingSeparator,
    AtEnd,
}

/// Milestone for [`Cursor::seek`]: advance until the state has passed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Seek {
    RootName,
    RootDirectory,
}

/// A transient scanner over a borrowed path string.
///
/// The cursor yields one component view at a time; `entry` is defined
/// exactly while the state is one of root-name, root-directory, filename
/// or trailing-separator.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    path: &'a str,
    grammar: Grammar,
    state: State,
    entry: Option<(usize, usize)>,
}

/// Two-byte drive designator test (`X:`), used by the Windows grammar.
fn is_drive_name(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(path: &'a str, grammar: Grammar) -> Self {
        Self {
            path,
            grammar,
            state: State::BeforeBegin,
            entry: None,
        }
    }

    pub(crate) fn new_at_end(path: &'a str, grammar: Grammar) -> Self {
        Self {
            path,
            grammar,
            state: State::AtEnd,
            entry: None,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.set_state(State::BeforeBegin);
    }

    /// The current component view; empty at the sentinels and for a
    /// trailing separator.
    pub(crate) fn entry(&self) -> &'a str {
        match self.state {
            State::BeforeBegin | State::AtEnd | State::TrailingSeparator => "",
            State::InRootName | State::InRootDir | State::InFilename => {
                let (lo, hi) = self.entry.expect("entry defined in this state");
                &self.path[lo..hi]
            }
        }
    }

    pub(crate) fn in_root_name(&self) -> bool {
        self.state == State::InRootName
    }

    pub(crate) fn in_root_directory(&self) -> bool {
        self.state == State::InRootDir
    }

    pub(crate) fn at_end(&self) -> bool {
        self.state == State::AtEnd
    }

    pub(crate) fn before_begin(&self) -> bool {
        self.state == State::BeforeBegin
    }

    /// `true` while the current entry starts at the very first byte.
    pub(crate) fn at_start(&self) -> bool {
        self.entry.map_or(false, |(lo, _)| lo == 0)
    }

    /// Whether two cursors over the same buffer denote the same token.
    ///
    /// Root-name, root-directory and trailing-separator tokens occur at
    /// most once per path, so state equality identifies them even when
    /// forward and backward scans anchored their entries at different
    /// ends of a separator run. Filenames repeat and need the offset.
    pub(crate) fn same_position(&self, other: &Self) -> bool {
        self.state == other.state
            && (self.state != State::InFilename
                || self.entry.map(|(lo, _)| lo) == other.entry.map(|(lo, _)| lo))
    }

    /// The unconsumed remainder from the current entry onward.
    pub(crate) fn peek_remainder(&self) -> &'a str {
        let (lo, _) = self.entry.expect("peek requires a current entry");
        &self.path[lo..]
    }

    /// The consumed prefix up to and including the current entry.
    pub(crate) fn peek_consumed(&self) -> &'a str {
        let (_, hi) = self.entry.expect("peek requires a current entry");
        &self.path[..hi]
    }

    /// Advances until the state has passed the requested milestone.
    pub(crate) fn seek(&mut self, target: Seek) {
        let milestone = match target {
            Seek::RootName => State::InRootName,
            Seek::RootDirectory => State::InRootDir,
        };
        while self.state <= milestone {
            self.increment();
        }
    }

    pub(crate) fn increment(&mut self) {
        let start = self.next_token_start();
        let end = self.path.len();

        if start == end {
            self.set_state(State::AtEnd);
            return;
        }

        match self.state {
            State::BeforeBegin => {
                if self.consume_root_name_fwd(start, false).is_some() {
                    self.set_state(State::InRootName);
                } else if self.consume_separator_fwd(start).is_some() {
                    self.set_state(State::InRootDir);
                } else {
                    self.consume_filename_fwd(start);
                    self.set_state(State::InFilename);
                }
            }
            State::InRootName => {
                if self.consume_separator_fwd(start).is_some() {
                    self.set_state(State::InRootDir);
                } else {
                    self.consume_filename_fwd(start);
                    self.set_state(State::InFilename);
                }
            }
            State::InRootDir => {
                self.consume_filename_fwd(start);
                self.set_state(State::InFilename);
            }
            State::InFilename => {
                let after_sep = self
                    .consume_separator_fwd(start)
                    .expect("a separator follows every non-final filename");
                if after_sep != end && self.consume_filename_fwd(after_sep).is_some() {
                    // another filename; entry already updated
                    return;
                }
                self.set_state(State::TrailingSeparator);
            }
            State::TrailingSeparator => self.set_state(State::AtEnd),
            State::AtEnd => unreachable!("increment past the end of the path"),
        }
    }

    pub(crate) fn decrement(&mut self) {
        // `limit` is the number of bytes strictly before the current token.
        let limit = self.current_token_start();

        if limit == 0 {
            self.set_state(State::BeforeBegin);
            return;
        }

        match self.state {
            State::AtEnd => {
                if let Some(after_sep) = self.consume_separator_back(limit) {
                    if after_sep == 0 || self.consume_root_name_back(after_sep, true) == Some(0) {
                        self.set_state(State::InRootDir);
                    } else {
                        self.set_state(State::TrailingSeparator);
                    }
                } else if self.consume_root_name_back(limit, false) == Some(0) {
                    self.set_state(State::InRootName);
                } else {
                    self.consume_filename_back(limit);
                    self.set_state(State::InFilename);
                }
            }
            State::TrailingSeparator => {
                self.consume_filename_back(limit);
                self.set_state(State::InFilename);
            }
            State::InFilename => match self.consume_separator_back(limit) {
                Some(0) => self.set_state(State::InRootDir),
                Some(after_sep) => {
                    if self.consume_root_name_back(after_sep, true) == Some(0) {
                        self.set_state(State::InRootDir);
                    } else {
                        self.consume_filename_back(after_sep);
                        self.set_state(State::InFilename);
                    }
                }
                None => {
                    // only a drive-letter root can abut a filename
                    if self.consume_root_name_back(limit, false) == Some(0) {
                        self.set_state(State::InRootName);
                    } else {
                        unreachable!("filename preceded by neither separator nor root name");
                    }
                }
            },
            State::InRootDir => {
                if self.consume_root_name_back(limit, false).is_some() {
                    self.set_state(State::InRootName);
                }
            }
            State::InRootName | State::BeforeBegin => {
                unreachable!("decrement before the start of the path")
            }
        }
    }

    fn set_state(&mut self, state: State) {
        self.state = state;
        if matches!(state, State::BeforeBegin | State::AtEnd) {
            self.entry = None;
        }
    }

    fn byte(&self, index: usize) -> u8 {
        self.path.as_bytes()[index]
    }

    fn is_sep(&self, byte: u8) -> bool {
        self.grammar.is_separator(byte)
    }

    /// Offset where the next forward token begins.
    fn next_token_start(&self) -> usize {
        match self.state {
            State::BeforeBegin => 0,
            State::InRootName | State::InRootDir | State::InFilename => {
                self.entry.expect("entry defined in this state").1
            }
            State::TrailingSeparator | State::AtEnd => self.path.len(),
        }
    }

    /// Offset where the current token begins.
    fn current_token_start(&self) -> usize {
        match self.state {
            State::BeforeBegin | State::InRootName => 0,
            State::InRootDir | State::InFilename | State::TrailingSeparator => {
                self.entry.expect("entry defined in this state").0
            }
            State::AtEnd => self.path.len(),
        }
    }

    fn consume_separator_fwd(&mut self, start: usize) -> Option<usize> {
        let bytes = self.path.as_bytes();
        if start >= bytes.len() || !self.is_sep(bytes[start]) {
            return None;
        }
        let mut pos = start + 1;
        while pos < bytes.len() && self.is_sep(bytes[pos]) {
            pos += 1;
        }
        self.entry = Some((pos - 1, pos));
        Some(pos)
    }

    /// Consumes a trailing separator run ending at `limit`; the entry is
    /// anchored at the run's first byte. Returns the remaining length.
    fn consume_separator_back(&mut self, limit: usize) -> Option<usize> {
        if limit == 0 || !self.is_sep(self.byte(limit - 1)) {
            return None;
        }
        let mut lo = limit - 1;
        while lo > 0 && self.is_sep(self.byte(lo - 1)) {
            lo -= 1;
        }
        self.entry = Some((lo, lo + 1));
        Some(lo)
    }

    fn consume_filename_fwd(&mut self, start: usize) -> Option<usize> {
        let bytes = self.path.as_bytes();
        if start >= bytes.len() || self.is_sep(bytes[start]) {
            return None;
        }
        let mut pos = start + 1;
        while pos < bytes.len() && !self.is_sep(bytes[pos]) {
            pos += 1;
        }
        self.entry = Some((start, pos));
        Some(pos)
    }

    fn consume_filename_back(&mut self, limit: usize) -> Option<usize> {
        if limit == 0 || self.is_sep(self.byte(limit - 1)) {
            return None;
        }
        let mut lo = limit - 1;
        while lo > 0 && !self.is_sep(self.byte(lo - 1)) {
            lo -= 1;
        }
        if self.grammar.has_drive_roots() && limit - lo >= 2 && lo == 0 {
            // roll back a drive-letter root mis-consumed as filename bytes
            if is_drive_name(self.path.as_bytes()) {
                lo = 2;
            }
            if lo == limit {
                return None;
            }
        }
        self.entry = Some((lo, limit));
        Some(lo)
    }

    fn consume_root_name_fwd(&mut self, start: usize, probe_only: bool) -> Option<usize> {
        let bytes = self.path.as_bytes();
        let len = bytes.len();

        if self.grammar.has_drive_roots() && len - start >= 2 && is_drive_name(&bytes[start..]) {
            if !probe_only {
                self.entry = Some((start, start + 2));
            }
            return Some(start + 2);
        }
        if self.grammar.has_server_roots()
            && len - start > 2
            && self.is_sep(bytes[start])
            && self.is_sep(bytes[start + 1])
            && !self.is_sep(bytes[start + 2])
        {
            let pos = (start + 2..len)
                .find(|&i| self.is_sep(bytes[i]))
                .unwrap_or(len);
            if !probe_only {
                self.entry = Some((start, pos));
            }
            return Some(pos);
        }
        None
    }

    /// Matches a root-name ending at `limit` when scanning backward.
    /// Returns the remaining length; `Some(0)` means the root-name fills
    /// the whole region.
    fn consume_root_name_back(&mut self, limit: usize, probe_only: bool) -> Option<usize> {
        let bytes = self.path.as_bytes();

        if self.grammar.has_drive_roots() && limit >= 2 && is_drive_name(&bytes[limit - 2..]) {
            if !probe_only {
                self.entry = Some((limit - 2, limit));
            }
            return Some(limit - 2);
        }
        if self.grammar.has_server_roots() && limit > 2 && !self.is_sep(bytes[limit - 1]) {
            let mut sep_at = None;
            let mut i = limit - 1;
            while i > 0 {
                i -= 1;
                if self.is_sep(bytes[i]) {
                    sep_at = Some(i);
                    break;
                }
            }
            if let Some(q) = sep_at {
                if q >= 1 && self.is_sep(bytes[q - 1]) {
                    if !probe_only {
                        self.entry = Some((q - 1, limit));
                    }
                    return Some(q - 1);
                }
            }
        }
        None
    }
}
