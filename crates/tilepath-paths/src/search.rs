use tilepath_core::DirectionFlag;

/// Distance assigned to tiles the search has not reached.
pub const UNVISITED_DISTANCE: u32 = 99_999_999;

/// Direction value marking the search origin.
pub(crate) const SOURCE_DIRECTION: u32 = 99;

// ---------------------------------------------------------------------------
// SearchMaps
// ---------------------------------------------------------------------------

/// Per-tile back-pointers and distances of one search window.
///
/// A direction of 0 means the tile is unvisited; any other value is the
/// [`DirectionFlag`] leading back toward the source.
pub(crate) struct SearchMaps {
    pub(crate) size: usize,
    pub(crate) directions: Vec<u32>,
    pub(crate) distances: Vec<u32>,
}

impl SearchMaps {
    pub(crate) fn new(size: usize) -> Self {
        let len = size * size;
        Self {
            size,
            directions: vec![0; len],
            distances: vec![UNVISITED_DISTANCE; len],
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.directions.len()
    }

    pub(crate) fn reset(&mut self) {
        for v in self.directions.iter_mut() {
            *v = 0;
        }
        for v in self.distances.iter_mut() {
            *v = UNVISITED_DISTANCE;
        }
    }

    #[inline]
    pub(crate) fn idx(&self, x: i32, y: i32) -> usize {
        y as usize * self.size + x as usize
    }

    #[inline]
    pub(crate) fn direction(&self, x: i32, y: i32) -> u32 {
        self.directions[self.idx(x, y)]
    }

    #[inline]
    pub(crate) fn distance(&self, x: i32, y: i32) -> u32 {
        self.distances[self.idx(x, y)]
    }

    #[inline]
    pub(crate) fn visit(&mut self, x: i32, y: i32, back: DirectionFlag, distance: u32) {
        let i = self.idx(x, y);
        self.directions[i] = back.0;
        self.distances[i] = distance;
    }

    pub(crate) fn seed(&mut self, x: i32, y: i32) {
        let i = self.idx(x, y);
        self.directions[i] = SOURCE_DIRECTION;
        self.distances[i] = 0;
    }
}
