//! Circular Cursor List
//!
//! An insertion-ordered list with a built-in traversal cursor. The cursor
//! steps forward or backward one element per call and, in circular mode,
//! wraps from the last element to the first (and back).
//!
//! Cursor positions:
//! - before the first element (the state after construction or reset)
//! - on a valid index
//! - after the last element (linear mode only, once `get_next` runs off the end)
//!
//! In linear mode the two boundary positions are parking spots: further
//! steps in the same direction keep returning `None` without moving.
//!
//! Mutating the list does not rebase the cursor. After an insert or remove
//! the cursor keeps its numeric position, so it may point at a shifted
//! element or past the end. A cursor left past the end counts as after the
//! end in both directions: `get_next` parks or wraps, `get_previous` lands
//! on the last element. Nothing panics.

use std::slice;

/// Cursor location relative to the list bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    BeforeStart,
    At(usize),
    AfterEnd,
}

/// Ordered list with a stateful forward/backward cursor.
///
/// Not synchronized: moving the cursor takes `&mut self`. Wrap it in a
/// mutex to share it between threads.
#[derive(Debug, Clone)]
pub struct CircularCursorList<T> {
    items: Vec<T>,
    circular: bool,
    position: Position,
}

impl<T> Default for CircularCursorList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularCursorList<T> {
    /// Empty, linear list with the cursor before the first element.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            circular: false,
            position: Position::BeforeStart,
        }
    }

    /// Empty list in circular mode.
    pub fn circular() -> Self {
        Self {
            circular: true,
            ..Self::new()
        }
    }

    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// Switch wraparound on or off. The cursor does not move.
    pub fn set_circular(&mut self, circular: bool) {
        self.circular = circular;
    }

    /// Advance the cursor and return the element under it.
    ///
    /// Returns `None` on an empty list, or at the end of a linear list.
    pub fn get_next(&mut self) -> Option<&T> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let next = match self.position {
            Position::BeforeStart => 0,
            Position::At(i) => i + 1,
            Position::AfterEnd => len,
        };
        if next >= len {
            if !self.circular {
                self.position = Position::AfterEnd;
                return None;
            }
            self.position = Position::At(0);
        } else {
            self.position = Position::At(next);
        }
        self.current()
    }

    /// Step the cursor back and return the element under it.
    ///
    /// Returns `None` on an empty list, or before the start of a linear list.
    pub fn get_previous(&mut self) -> Option<&T> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let prev = match self.position {
            Position::BeforeStart => None,
            Position::At(i) if i >= len => Some(len - 1),
            Position::At(i) => i.checked_sub(1),
            Position::AfterEnd => Some(len - 1),
        };
        match prev {
            Some(i) => self.position = Position::At(i),
            None if self.circular => self.position = Position::At(len - 1),
            None => {
                self.position = Position::BeforeStart;
                return None;
            }
        }
        self.current()
    }

    /// Park the cursor before the first element.
    pub fn reset_index(&mut self) {
        self.position = Position::BeforeStart;
    }

    /// Element under the cursor, without moving it.
    pub fn current(&self) -> Option<&T> {
        match self.position {
            Position::At(i) => self.items.get(i),
            _ => None,
        }
    }

    /// Index under the cursor, if it sits on an element position.
    ///
    /// The index may be out of range after the list shrank.
    pub fn position(&self) -> Option<usize> {
        match self.position {
            Position::At(i) => Some(i),
            _ => None,
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Insert at `index`, shifting later elements right.
    ///
    /// # Panics
    /// Panics if `index > len`, like [`Vec::insert`].
    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    /// Remove the element at `index`, or `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Remove every element. The cursor position is left as is.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for CircularCursorList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::new()
        }
    }
}

impl<T> FromIterator<T> for CircularCursorList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for CircularCursorList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a CircularCursorList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
