//! Reusable walkers over grapheme cluster boundaries.
//!
//! Resolving a cluster ordinal to a byte offset is a linear walk. When many
//! indexed queries target the same string, keep one of these around instead
//! of calling the free functions in [`crate::grapheme`] repeatedly:
//! - [`ClusterCursor`] walks lazily and only rewinds when asked to go back.
//! - [`ClusterMap`] records every boundary up front for constant-time lookups.

use crate::core::{ClusterAccess, ClusterIndex};
use std::fmt;
use tracing::trace;
use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

/// Lazy, restartable iterator over the cluster boundaries of a string.
///
/// Iteration yields `count + 1` boundaries: the start of every cluster
/// followed by the end of the text. An empty string yields one boundary.
///
/// # Examples
///
/// ```
/// use sortext::cursor::ClusterCursor;
///
/// let offsets: Vec<usize> = ClusterCursor::new("e\u{301}a")
///     .map(|index| index.byte_offset())
///     .collect();
/// assert_eq!(offsets, vec![0, 3, 4]);
/// ```
#[derive(Clone)]
pub struct ClusterCursor<'a> {
    text: &'a str,
    clusters: GraphemeIndices<'a>,
    position: ClusterIndex,
    done: bool,
}

impl<'a> ClusterCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        ClusterCursor {
            text,
            clusters: text.grapheme_indices(true),
            position: ClusterIndex::START,
            done: false,
        }
    }

    /// The boundary the cursor currently rests on.
    pub fn position(&self) -> ClusterIndex {
        self.position
    }

    /// Moves the cursor back to the start of the text.
    pub fn reset(&mut self) {
        self.clusters = self.text.grapheme_indices(true);
        self.position = ClusterIndex::START;
        self.done = false;
    }

    /// Moves to the boundary before cluster `ordinal`, or to the end of the
    /// text if there are fewer clusters.
    ///
    /// Seeking forward continues from the current position; seeking backward
    /// restarts from the beginning.
    pub fn seek(&mut self, ordinal: usize) -> ClusterIndex {
        if ordinal < self.position.ordinal() {
            trace!(
                from = self.position.ordinal(),
                to = ordinal,
                "rewinding cluster cursor"
            );
            self.reset();
        }

        while self.position.ordinal() < ordinal && self.step() {}
        self.position
    }

    fn step(&mut self) -> bool {
        match self.clusters.next() {
            Some((offset, cluster)) => {
                self.position =
                    ClusterIndex::new(self.position.ordinal() + 1, offset + cluster.len());
                true
            }
            None => false,
        }
    }
}

impl Iterator for ClusterCursor<'_> {
    type Item = ClusterIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let here = self.position;
        if !self.step() {
            self.done = true;
        }
        Some(here)
    }
}

impl fmt::Debug for ClusterCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterCursor")
            .field("text", &self.text)
            .field("position", &self.position)
            .field("done", &self.done)
            .finish()
    }
}

impl<'a> ClusterAccess<'a> for ClusterCursor<'a> {
    fn text(&self) -> &'a str {
        self.text
    }

    fn locate(&mut self, ordinal: usize) -> ClusterIndex {
        self.seek(ordinal)
    }
}

/// Precomputed table of every cluster boundary of a string.
///
/// Building the table costs one walk; afterwards every ordinal resolves in
/// constant time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterMap<'a> {
    text: &'a str,
    // Byte offsets of all boundaries, end of text included.
    boundaries: Vec<usize>,
}

impl<'a> ClusterMap<'a> {
    pub fn new(text: &'a str) -> Self {
        let boundaries: Vec<usize> = text
            .grapheme_indices(true)
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();

        trace!(clusters = boundaries.len() - 1, "built cluster map");
        ClusterMap { text, boundaries }
    }

    /// Number of grapheme clusters.
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All `len() + 1` boundaries, in order.
    pub fn boundaries(&self) -> impl Iterator<Item = ClusterIndex> + '_ {
        self.boundaries
            .iter()
            .enumerate()
            .map(|(ordinal, &offset)| ClusterIndex::new(ordinal, offset))
    }

    /// The clusters themselves, in order.
    pub fn clusters(&self) -> impl Iterator<Item = &'a str> + '_ {
        let text = self.text;
        self.boundaries
            .windows(2)
            .map(move |bounds| &text[bounds[0]..bounds[1]])
    }
}

impl<'a> ClusterAccess<'a> for ClusterMap<'a> {
    fn text(&self) -> &'a str {
        self.text
    }

    fn locate(&mut self, ordinal: usize) -> ClusterIndex {
        let ordinal = ordinal.min(self.len());
        ClusterIndex::new(ordinal, self.boundaries[ordinal])
    }
}
