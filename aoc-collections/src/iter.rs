//! Stateful cursors over already materialized sequences
//!
//! A cursor starts *before* the first element. Each call to `advance` steps
//! one element forward and reports whether the cursor now points at a valid
//! element; `value` reads that element.
//!
//! ```text
//! unstarted --advance--> positioned --advance--> ... --advance--> exhausted
//!     ^                                                              |
//!     +----------------------------- reset --------------------------+
//! ```
//!
//! Cursors borrow their backing data, so the data cannot change underneath
//! them while they are alive.

/// A forward cursor over a slice.
///
/// # Example
///
/// ```
/// use aoc_collections::Cursor;
///
/// let data = [10, 20];
/// let mut cursor = Cursor::new(&data);
/// assert_eq!(cursor.value(), None);
///
/// assert!(cursor.advance());
/// assert_eq!(cursor.value(), Some(&10));
/// assert!(cursor.advance());
/// assert!(!cursor.advance());
///
/// cursor.reset();
/// assert!(cursor.advance());
/// assert_eq!(cursor.value(), Some(&10));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    data: &'a [T],
    /// Number of `advance` calls since construction or the last reset.
    /// The current element, if any, sits at `pos - 1`.
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data, pos: 0 }
    }

    /// Steps forward, returning `true` if the cursor now points at an element.
    pub fn advance(&mut self) -> bool {
        // Saturate once exhausted so repeated calls stay exhausted.
        if self.pos <= self.data.len() {
            self.pos += 1;
        }
        self.is_positioned()
    }

    /// Skips `n` elements forward without reading them.
    pub fn move_by(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len() + 1);
    }

    /// The current element, `None` before the first `advance` or once
    /// exhausted.
    pub fn value(&self) -> Option<&'a T> {
        self.pos.checked_sub(1).and_then(|idx| self.data.get(idx))
    }

    /// Number of elements that later `advance` calls will still visit.
    pub fn remaining_len(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns to the unstarted state.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn is_positioned(&self) -> bool {
        (1..=self.data.len()).contains(&self.pos)
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos > self.data.len()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() { self.value() } else { None }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining_len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

/// A cursor that wraps around to the first element after the last one.
///
/// On a non-empty slice `advance` always returns `true`, which makes the
/// cursor an endless, restartable walk over a finite sequence. On an empty
/// slice it never yields anything.
///
/// # Example
///
/// ```
/// use aoc_collections::CycleCursor;
///
/// let moves = ['L', 'R'];
/// let picked: String = CycleCursor::new(&moves).take(5).collect();
/// assert_eq!(picked, "LRLRL");
/// ```
#[derive(Debug, Clone)]
pub struct CycleCursor<'a, T> {
    data: &'a [T],
    idx: Option<usize>,
}

impl<'a, T> CycleCursor<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data, idx: None }
    }

    /// Steps forward, wrapping to the start after the last element.
    pub fn advance(&mut self) -> bool {
        if self.data.is_empty() {
            return false;
        }
        self.idx = Some(match self.idx {
            Some(idx) if idx + 1 < self.data.len() => idx + 1,
            _ => 0,
        });
        true
    }

    /// The current element, `None` only before the first `advance`.
    pub fn value(&self) -> Option<&'a T> {
        self.idx.map(|idx| &self.data[idx])
    }

    /// Position of the current element in the backing slice.
    pub fn index(&self) -> Option<usize> {
        self.idx
    }

    pub fn reset(&mut self) {
        self.idx = None;
    }
}

impl<'a, T> Iterator for CycleCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() { self.value() } else { None }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.data.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}

/// A forward cursor over the characters of a string.
///
/// # Example
///
/// ```
/// use aoc_collections::StrCursor;
///
/// let mut cursor = StrCursor::new("move 12");
/// while cursor.advance() && cursor.value() != Some(' ') {}
/// assert_eq!(cursor.remaining(), " 12");
/// assert!(!cursor.advance());
/// ```
#[derive(Debug, Clone)]
pub struct StrCursor<'a> {
    s: &'a str,
    /// Byte offset of the character the next `advance` will land on.
    next_offset: usize,
    current: Option<char>,
}

impl<'a> StrCursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            next_offset: 0,
            current: None,
        }
    }

    /// Steps to the next character, returning `false` once past the end.
    pub fn advance(&mut self) -> bool {
        self.current = self.s[self.next_offset..].chars().next();
        if let Some(c) = self.current {
            self.next_offset += c.len_utf8();
        }
        self.current.is_some()
    }

    pub fn value(&self) -> Option<char> {
        self.current
    }

    /// Returns the rest of the string starting at the current character
    /// (or at the beginning if unstarted) and exhausts the cursor.
    pub fn remaining(&mut self) -> &'a str {
        let start = self.current_offset();
        self.next_offset = self.s.len();
        self.current = None;
        &self.s[start..]
    }

    /// Number of characters `remaining` would return.
    pub fn remaining_len(&self) -> usize {
        self.s[self.current_offset()..].chars().count()
    }

    pub fn reset(&mut self) {
        self.next_offset = 0;
        self.current = None;
    }

    fn current_offset(&self) -> usize {
        match self.current {
            Some(c) => self.next_offset - c.len_utf8(),
            None => self.next_offset,
        }
    }
}

impl Iterator for StrCursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.advance() { self.current } else { None }
    }
}
