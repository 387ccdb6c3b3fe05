// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounded in-memory event log for driver diagnostics.
//!
//! A `Ringlog` keeps the most recent `N` events recorded into it, where an
//! event is any `Copy + PartialEq` payload -- in practice a small enum
//! describing what a driver just did or failed to do. Recording the same
//! payload repeatedly does not consume additional slots; instead the most
//! recent entry's count is bumped, so a tight loop logging the same thing
//! can't flush the interesting history out of the buffer.
//!
//! Unlike a static debug ring that an external debugger scrapes out of RAM,
//! a `Ringlog` is an ordinary owned value: the driver that records into it
//! can also hand it back out for inspection, which is what makes it usable
//! from host-side tests.

#![cfg_attr(not(test), no_std)]

/// One recorded event and the number of consecutive times it was recorded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Entry<T> {
    pub count: u32,
    pub payload: T,
}

/// A log holding the last `N` distinct events.
#[derive(Debug)]
pub struct Ringlog<T: Copy + PartialEq, const N: usize> {
    last: Option<usize>,
    buffer: [Option<Entry<T>>; N],
}

impl<T: Copy + PartialEq, const N: usize> Ringlog<T, N> {
    const EMPTY: Option<Entry<T>> = None;

    /// An empty log, usable as a struct field initializer in `const`
    /// contexts.
    pub const DEFAULT: Self = Self {
        last: None,
        buffer: [Self::EMPTY; N],
    };

    /// Records `payload`, merging it into the most recent entry if the
    /// payload matches, and otherwise overwriting the oldest slot.
    pub fn record(&mut self, payload: T) {
        if let Some(last) = self.last {
            if let Some(e) = &mut self.buffer[last] {
                if e.payload == payload {
                    e.count = e.count.saturating_add(1);
                    return;
                }
            }
        }

        let ndx = match self.last {
            Some(last) if last + 1 < N => last + 1,
            Some(_) => 0,
            None => 0,
        };
        self.buffer[ndx] = Some(Entry { count: 1, payload });
        self.last = Some(ndx);
    }

    /// Returns the entries oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> + '_ {
        // Once the buffer has wrapped, the slot after `last` holds the
        // oldest entry; before that, slot 0 does.
        let start = match self.last {
            Some(last) if self.buffer[(last + 1) % N].is_some() => last + 1,
            _ => 0,
        };
        (0..N).filter_map(move |i| self.buffer[(start + i) % N].as_ref())
    }

    /// The most recently recorded entry, if any.
    pub fn last_entry(&self) -> Option<&Entry<T>> {
        self.buffer[self.last?].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }
}

impl<T: Copy + PartialEq, const N: usize> Default for Ringlog<T, N> {
    fn default() -> Self {
        Self::DEFAULT
    }
}
