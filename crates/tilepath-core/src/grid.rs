//! Read-only view over a square window of collision flags: [`FlagGrid`].

use crate::geom::Point;

/// A borrowed square window of per-tile collision flags, row-major with
/// `index = y * size + x`.
#[derive(Copy, Clone, Debug)]
pub struct FlagGrid<'a> {
    flags: &'a [u32],
    size: usize,
}

impl<'a> FlagGrid<'a> {
    /// Wrap `flags` as a `size`×`size` window.
    ///
    /// # Panics
    ///
    /// Panics if `flags.len() != size * size`.
    pub fn new(flags: &'a [u32], size: usize) -> Self {
        assert_eq!(
            flags.len(),
            size * size,
            "flag slice length must equal the square of the window size"
        );
        Self { flags, size }
    }

    /// Width (and height) of the window.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The underlying flag slice.
    #[inline]
    pub fn flags(&self) -> &'a [u32] {
        self.flags
    }

    /// Whether local `(x, y)` lies inside the window.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let s = self.size as i32;
        x >= 0 && y >= 0 && x < s && y < s
    }

    /// Flag at local `(x, y)`.
    ///
    /// Callers are responsible for staying inside the window; an
    /// out-of-window position panics through slice indexing.
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> u32 {
        self.flags[y as usize * self.size + x as usize]
    }

    /// Flag at local `p`, or `None` outside the window.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u32> {
        if self.contains(p.x, p.y) {
            Some(self.at(p.x, p.y))
        } else {
            None
        }
    }
}
