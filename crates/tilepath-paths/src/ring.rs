/// Fixed-capacity FIFO of local `(x, y)` positions.
///
/// Capacity is a power of two so cursors wrap with a mask. Writing past
/// capacity overwrites the oldest pending entries; the search window is
/// sized so that a breadth-first frontier never gets there.
pub(crate) struct RingBuffer {
    xs: Vec<i32>,
    ys: Vec<i32>,
    mask: usize,
    reader: usize,
    writer: usize,
}

impl RingBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        Self {
            xs: vec![0; capacity],
            ys: vec![0; capacity],
            mask: capacity - 1,
            reader: 0,
            writer: 0,
        }
    }

    /// Rewind both cursors, discarding pending entries.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.reader = 0;
        self.writer = 0;
    }

    #[inline]
    pub(crate) fn push(&mut self, x: i32, y: i32) {
        self.xs[self.writer] = x;
        self.ys[self.writer] = y;
        self.writer = (self.writer + 1) & self.mask;
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<(i32, i32)> {
        if self.reader == self.writer {
            return None;
        }
        let p = (self.xs[self.reader], self.ys[self.reader]);
        self.reader = (self.reader + 1) & self.mask;
        Some(p)
    }
}
