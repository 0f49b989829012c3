use std::ops::Deref;

use tilepath_core::Coordinate;

/// Outcome of a route search or ray cast.
///
/// Coordinates run from the first step after the source up to and including
/// the final tile. An `alternative` route ends at the closest reachable tile
/// rather than at the requested target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    coords: Vec<Coordinate>,
    pub alternative: bool,
    pub success: bool,
}

impl Route {
    pub fn new(coords: Vec<Coordinate>, alternative: bool, success: bool) -> Self {
        Self {
            coords,
            alternative,
            success,
        }
    }

    /// An empty, unsuccessful route.
    pub fn failure() -> Self {
        Self::new(Vec::new(), false, false)
    }

    #[inline]
    pub fn failed(&self) -> bool {
        !self.success
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn into_coords(self) -> Vec<Coordinate> {
        self.coords
    }
}

impl Deref for Route {
    type Target = [Coordinate];

    fn deref(&self) -> &[Coordinate] {
        &self.coords
    }
}

impl IntoIterator for Route {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let r = Route::new(vec![Coordinate::new(3201, 3200)], true, true);
        let json = serde_json::to_string(&r).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
