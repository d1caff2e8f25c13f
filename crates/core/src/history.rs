//! Append-only reading history: an arena-backed singly-linked sequence.

use crate::observer::ReadingObserver;
use sensreg_types::Reading;
use std::fmt;

/// Sentinel index terminating both the value chain and the free-list.
const NIL: u32 = u32::MAX;

struct Node<T> {
    value: T,
    next: u32,
}

/// Ordered, duplicate-permitting sequence of scalar readings.
///
/// Storage is a singly-linked list whose nodes live in a growable arena and
/// link to each other by stable `u32` indices; slots vacated by removals go
/// onto an intrusive free-list and are reused by later appends. No node is
/// ever shared between histories: cloning produces an independent deep copy.
///
/// No tail index is cached, so `push` walks the chain. The histories this
/// registry manages are short, and keeping the single `head` entry point is
/// what makes the remove operations' relinking straightforward.
pub struct ReadingHistory<T: Reading> {
    nodes: Vec<Node<T>>,
    head: u32,
    free: u32,
    len: usize,
    observer: Option<Box<dyn ReadingObserver<T>>>,
}

impl<T: Reading> ReadingHistory<T> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NIL,
            free: NIL,
            len: 0,
            observer: None,
        }
    }

    /// Install the observer notified on every mutation, replacing any
    /// previous one.
    pub fn set_observer(&mut self, observer: Box<dyn ReadingObserver<T>>) {
        self.observer = Some(observer);
    }

    /// Number of readings currently held, O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a reading at the tail. Never fails; duplicates are permitted.
    pub fn push(&mut self, value: T) {
        let idx = self.alloc(value);
        if self.head == NIL {
            self.head = idx;
        } else {
            let mut cur = self.head;
            while self.nodes[cur as usize].next != NIL {
                cur = self.nodes[cur as usize].next;
            }
            self.nodes[cur as usize].next = idx;
        }
        self.len += 1;
        if let Some(observer) = &self.observer {
            observer.on_append(&value);
        }
    }

    /// Linear scan for a reading equal to `value`.
    pub fn contains(&self, value: T) -> bool {
        self.iter().any(|v| *v == value)
    }

    /// Remove the first reading equal to `value`, in insertion order.
    ///
    /// Returns whether a removal occurred; the history is untouched when
    /// the value is absent.
    pub fn remove_first(&mut self, value: T) -> bool {
        let mut prev = NIL;
        let mut cur = self.head;
        while cur != NIL {
            if self.nodes[cur as usize].value == value {
                self.unlink(prev, cur);
                if let Some(observer) = &self.observer {
                    observer.on_remove(&value);
                }
                return true;
            }
            prev = cur;
            cur = self.nodes[cur as usize].next;
        }
        false
    }

    /// Remove and return the lowest reading under `<`.
    ///
    /// Ties break toward the earliest occurrence: only a strictly lower
    /// value displaces the current candidate during the scan. Returns
    /// `None` on an empty history.
    pub fn remove_lowest(&mut self) -> Option<T> {
        if self.head == NIL {
            return None;
        }
        let mut min = self.head;
        let mut prev_min = NIL;
        let mut prev = self.head;
        let mut cur = self.nodes[self.head as usize].next;
        while cur != NIL {
            if self.nodes[cur as usize].value < self.nodes[min as usize].value {
                min = cur;
                prev_min = prev;
            }
            prev = cur;
            cur = self.nodes[cur as usize].next;
        }
        let value = self.nodes[min as usize].value;
        self.unlink(prev_min, min);
        if let Some(observer) = &self.observer {
            observer.on_remove(&value);
        }
        Some(value)
    }

    /// Mean of all readings, promoted to `f64`.
    ///
    /// An empty history has a defined mean of exactly 0.0; this is an edge
    /// case, not an error.
    pub fn mean(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        let sum: f64 = self.iter().map(|v| (*v).into()).sum();
        sum / self.len as f64
    }

    /// Release every reading and reset to the empty state. Idempotent.
    pub fn clear(&mut self) {
        if self.len > 0 {
            if let Some(observer) = &self.observer {
                observer.on_clear(self.len);
            }
        }
        self.nodes.clear();
        self.head = NIL;
        self.free = NIL;
        self.len = 0;
    }

    /// Lazy traversal of current readings in insertion order.
    ///
    /// Each call derives a fresh traversal from the current head, so the
    /// snapshot is restartable and always reflects the history as it stands
    /// at the time of the call.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
        }
    }

    /// Take a slot off the free-list, or grow the arena.
    fn alloc(&mut self, value: T) -> u32 {
        if self.free != NIL {
            let idx = self.free;
            self.free = self.nodes[idx as usize].next;
            self.nodes[idx as usize] = Node { value, next: NIL };
            idx
        } else {
            let idx = self.nodes.len() as u32;
            self.nodes.push(Node { value, next: NIL });
            idx
        }
    }

    /// Unlink `idx`, whose predecessor in the chain is `prev` (NIL when
    /// `idx` is the head), and return its slot to the free-list.
    fn unlink(&mut self, prev: u32, idx: u32) {
        let next = self.nodes[idx as usize].next;
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev as usize].next = next;
        }
        self.nodes[idx as usize].next = self.free;
        self.free = idx;
        self.len -= 1;
    }
}

impl<T: Reading> Default for ReadingHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: element values and insertion order are reproduced in an
/// independent arena. The clone starts unobserved; observers are tied to
/// the history they were installed on.
impl<T: Reading> Clone for ReadingHistory<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for value in self.iter() {
            copy.push(*value);
        }
        copy
    }
}

impl<T: Reading> fmt::Debug for ReadingHistory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadingHistory")
            .field("len", &self.len)
            .field("readings", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Borrowing iterator over a [`ReadingHistory`] in insertion order.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cur: u32,
}

impl<'a, T: Reading> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.cur == NIL {
            return None;
        }
        let node = &self.nodes[self.cur as usize];
        self.cur = node.next;
        Some(&node.value)
    }
}

impl<'a, T: Reading> IntoIterator for &'a ReadingHistory<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
