//! Bounded stack of open lists.
//!
//! The transducer owns one stack per conversion and is the only code that
//! mutates it. Backends receive a shared reference so they can read the kind,
//! depth and current counter when rendering list markers.

use crate::event::ListKind;

/// Maximum nesting depth for lists.
pub const MAX_LIST_DEPTH: usize = 32;

/// One open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFrame {
    pub kind: ListKind,
    /// Number of the current item (1-based, seeded from the first marker for ordered lists)
    pub counter: u64,
    /// Column of the item markers that opened this list
    pub indent: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ListStack {
    frames: Vec<ListFrame>,
}

impl ListStack {
    pub fn new() -> Self {
        ListStack {
            frames: Vec::with_capacity(MAX_LIST_DEPTH),
        }
    }

    /// Push a new frame. Returns `false` (and leaves the stack unchanged) when
    /// the stack is already [`MAX_LIST_DEPTH`] deep.
    pub fn push(&mut self, frame: ListFrame) -> bool {
        if self.frames.len() >= MAX_LIST_DEPTH {
            return false;
        }
        self.frames.push(frame);
        true
    }

    pub fn pop(&mut self) -> Option<ListFrame> {
        self.frames.pop()
    }

    pub fn peek(&self) -> Option<&ListFrame> {
        self.frames.last()
    }

    pub(crate) fn peek_mut(&mut self) -> Option<&mut ListFrame> {
        self.frames.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of open lists; the innermost list has depth `len()`.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() >= MAX_LIST_DEPTH
    }
}
