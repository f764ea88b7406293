//! Rotation-invariant comparison of two polygon boundaries.
//!
//! Both matchers anchor the candidate at the first occurrence of the original's
//! first vertex and then walk the two cycles with explicit cursors. A cursor has
//! returned once it has advanced at least once and sits on its anchor again.

use nalgebra::Point2;

use crate::kernel::Kernel;

/// Index-modulo-length cursor over a fixed, non-empty cyclic sequence.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    anchor: usize,
    pos: usize,
    steps: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Pre: `items` is non-empty and `anchor < items.len()`.
    pub fn new(items: &'a [T], anchor: usize) -> Self {
        debug_assert!(anchor < items.len());
        Self {
            items,
            anchor,
            pos: anchor,
            steps: 0,
        }
    }
    #[inline]
    pub fn get(&self) -> &'a T {
        &self.items[self.pos]
    }
    #[inline]
    pub fn advance(&mut self) {
        self.pos = (self.pos + 1) % self.items.len();
        self.steps += 1;
    }
    #[inline]
    pub fn has_returned(&self) -> bool {
        self.steps > 0 && self.pos == self.anchor
    }
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

fn find_anchor<T: PartialEq>(orig: &[T], cand: &[T]) -> Option<usize> {
    let first = orig.first()?;
    cand.iter().position(|p| p == first)
}

/// Same cyclic vertex sequence up to rotation.
///
/// Two empty sequences are equal; an empty and a non-empty one are not.
pub fn polygons_are_equal<T: PartialEq>(orig: &[T], cand: &[T]) -> bool {
    if orig.is_empty() || cand.is_empty() {
        return orig.is_empty() && cand.is_empty();
    }
    let Some(anchor) = find_anchor(orig, cand) else {
        tracing::trace!("first original vertex missing from candidate");
        return false;
    };
    let mut o = Cursor::new(orig, 0);
    let mut c = Cursor::new(cand, anchor);
    loop {
        o.advance();
        c.advance();
        match (o.has_returned(), c.has_returned()) {
            (true, true) => return true,
            (true, false) | (false, true) => {
                tracing::trace!(orig = orig.len(), cand = cand.len(), "cycle lengths differ");
                return false;
            }
            (false, false) => {}
        }
        if o.get() != c.get() {
            tracing::trace!(step = o.steps(), "vertex mismatch");
            return false;
        }
    }
}

/// Like `polygons_are_equal`, but the candidate may carry extra Steiner vertices.
///
/// A candidate vertex that does not match the pending original vertex must lie
/// strictly between the previous matched point and that original vertex. The
/// original may never contain a vertex missing from the candidate.
pub fn polygons_w_steiner_are_equal<K: Kernel>(
    kernel: &K,
    orig: &[Point2<K::Num>],
    cand: &[Point2<K::Num>],
) -> bool {
    if orig.is_empty() || cand.is_empty() {
        return orig.is_empty() && cand.is_empty();
    }
    let Some(anchor) = find_anchor(orig, cand) else {
        tracing::trace!("first original vertex missing from candidate");
        return false;
    };
    let mut o = Cursor::new(orig, 0);
    let mut c = Cursor::new(cand, anchor);
    let mut prev = c.get();
    // Every iteration advances the candidate cursor, so this runs at most `cand.len()` times.
    loop {
        let (ov, cv) = (o.get(), c.get());
        if ov == cv {
            prev = cv;
            o.advance();
            c.advance();
        } else {
            if !kernel.collinear(prev, cv, ov) {
                tracing::trace!(step = c.steps(), "extra vertex off the original edge");
                return false;
            }
            if !kernel.collinear_are_strictly_ordered_along_line(prev, cv, ov) {
                tracing::trace!(step = c.steps(), "extra vertex outside the original edge");
                return false;
            }
            prev = cv;
            c.advance();
        }
        match (o.has_returned(), c.has_returned()) {
            (true, true) => return true,
            (false, true) => {
                tracing::trace!(pending = o.steps(), "original vertices left unmatched");
                return false;
            }
            _ => {}
        }
    }
}
