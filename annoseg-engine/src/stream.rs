//! Lazy one-to-many stream adapter
//!
//! [`SegmenterStream`] pulls one item at a time from an upstream iterator,
//! expands it into a batch of outputs and hands those out one by one before
//! touching the upstream again.

use std::iter::FusedIterator;
use std::vec;

/// A stream that can be rewound to its first item
pub trait Restartable {
    /// Rewind to the beginning; the next item is the first one again
    fn reset(&mut self);
}

/// Expands each upstream item into zero or more outputs, lazily
///
/// - Only the outputs of the current upstream item are buffered.
/// - Items expanding to nothing are skipped.
/// - An upstream error or expansion error is yielded once, after which the
///   stream ends.
/// - The stream is finite iff the upstream is.
pub struct SegmenterStream<I, F, S> {
    upstream: I,
    expand: F,
    buffer: vec::IntoIter<S>,
    finished: bool,
}

impl<I, F, S> SegmenterStream<I, F, S> {
    /// Wrap `upstream`, expanding every item with `expand`
    pub fn new(upstream: I, expand: F) -> Self {
        Self {
            upstream,
            expand,
            buffer: Vec::new().into_iter(),
            finished: false,
        }
    }

    /// Upstream iterator
    pub fn upstream(&self) -> &I {
        &self.upstream
    }

    /// Number of outputs buffered from the current item
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Give back the upstream, discarding buffered outputs
    pub fn into_inner(self) -> I {
        self.upstream
    }
}

impl<I, F, D, S, E> Iterator for SegmenterStream<I, F, S>
where
    I: Iterator<Item = Result<D, E>>,
    F: FnMut(D) -> Result<Vec<S>, E>,
{
    type Item = Result<S, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(output) = self.buffer.next() {
                return Some(Ok(output));
            }
            if self.finished {
                return None;
            }

            let item = match self.upstream.next() {
                Some(Ok(item)) => item,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            };

            match (self.expand)(item) {
                Ok(outputs) => self.buffer = outputs.into_iter(),
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.buffer.len();
        if self.finished {
            (buffered, Some(buffered))
        } else {
            (buffered, None)
        }
    }
}

impl<I, F, D, S, E> FusedIterator for SegmenterStream<I, F, S>
where
    I: Iterator<Item = Result<D, E>>,
    F: FnMut(D) -> Result<Vec<S>, E>,
{
}

impl<I: Restartable, F, S> Restartable for SegmenterStream<I, F, S> {
    fn reset(&mut self) {
        self.upstream.reset();
        self.buffer = Vec::new().into_iter();
        self.finished = false;
    }
}

/// Adds [`segment_with`](SegmentExt::segment_with) to fallible iterators
pub trait SegmentExt<D, E>: Iterator<Item = Result<D, E>> + Sized {
    /// Expand every item into zero or more outputs, lazily
    fn segment_with<F, S>(self, expand: F) -> SegmenterStream<Self, F, S>
    where
        F: FnMut(D) -> Result<Vec<S>, E>,
    {
        SegmenterStream::new(self, expand)
    }
}

impl<I, D, E> SegmentExt<D, E> for I where I: Iterator<Item = Result<D, E>> {}
