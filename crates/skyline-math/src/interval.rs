use std::fmt;

use crate::SkylineError;

/// Closed interval of integers `[from, to]`.
///
/// Invariant: `from <= to`, enforced by [`Interval1D::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval1D {
    from: i32,
    to: i32,
}

impl Interval1D {
    /// Creates the interval `[from, to]`.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if `to < from`.
    pub fn new(from: i32, to: i32) -> Result<Self, SkylineError> {
        SkylineError::check(from <= to, || format!("malformed interval [{from}..{to}]"))?;
        Ok(Self { from, to })
    }

    /// Smallest value of the interval.
    pub fn included_from(&self) -> i32 {
        self.from
    }

    /// Largest value of the interval.
    pub fn included_to(&self) -> i32 {
        self.to
    }

    /// Returns true if `v` lies inside or on the boundary.
    pub fn contains(&self, v: i32) -> bool {
        self.from <= v && v <= self.to
    }

    /// Number of integers in the interval.
    pub fn size(&self) -> i64 {
        i64::from(self.to) - i64::from(self.from) + 1
    }

    /// Number of integers shared with `that`.
    pub fn size_of_intersection_with(&self, that: &Interval1D) -> i64 {
        let lo = self.from.max(that.from);
        let hi = self.to.min(that.to);
        if lo > hi {
            0
        } else {
            i64::from(hi) - i64::from(lo) + 1
        }
    }

    /// Smallest interval containing both `self` and `that`.
    pub fn bounding_union(&self, that: &Interval1D) -> Interval1D {
        Interval1D {
            from: self.from.min(that.from),
            to: self.to.max(that.to),
        }
    }

    /// Returns true if the two intervals overlap or touch, so that their
    /// bounding union contains no value outside either of them.
    pub fn is_unionable_with(&self, that: &Interval1D) -> bool {
        self.bounding_union(that).size()
            == self.size() + that.size() - self.size_of_intersection_with(that)
    }

    /// Union of the two intervals.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if the intervals are not unionable.
    pub fn union(&self, that: &Interval1D) -> Result<Interval1D, SkylineError> {
        SkylineError::check(self.is_unionable_with(that), || {
            format!("{self} and {that} are not unionable")
        })?;
        Ok(self.bounding_union(that))
    }
}

impl fmt::Display for Interval1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.from, self.to)
    }
}

/// Cartesian product of two [`Interval1D`], used as the integer sample
/// extent of an elevation model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval2D {
    ix: Interval1D,
    iy: Interval1D,
}

impl Interval2D {
    /// Creates the product `ix × iy`.
    pub fn new(ix: Interval1D, iy: Interval1D) -> Self {
        Self { ix, iy }
    }

    /// Interval along x.
    pub fn ix(&self) -> Interval1D {
        self.ix
    }

    /// Interval along y.
    pub fn iy(&self) -> Interval1D {
        self.iy
    }

    /// Returns true if `(x, y)` lies inside or on the boundary.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.ix.contains(x) && self.iy.contains(y)
    }

    /// Number of integer points in the product.
    ///
    /// Up to 2^64, hence `i128`.
    pub fn size(&self) -> i128 {
        i128::from(self.ix.size()) * i128::from(self.iy.size())
    }

    /// Number of integer points shared with `that`.
    pub fn size_of_intersection_with(&self, that: &Interval2D) -> i128 {
        i128::from(self.ix.size_of_intersection_with(&that.ix))
            * i128::from(self.iy.size_of_intersection_with(&that.iy))
    }

    /// Smallest product containing both `self` and `that`.
    pub fn bounding_union(&self, that: &Interval2D) -> Interval2D {
        Interval2D {
            ix: self.ix.bounding_union(&that.ix),
            iy: self.iy.bounding_union(&that.iy),
        }
    }

    /// Returns true if both axes are unionable and the bounding union covers
    /// exactly the points of `self` and `that`.
    pub fn is_unionable_with(&self, that: &Interval2D) -> bool {
        let area = self.size() + that.size() - self.size_of_intersection_with(that);
        self.ix.is_unionable_with(&that.ix)
            && self.iy.is_unionable_with(&that.iy)
            && area == self.bounding_union(that).size()
    }

    /// Union of the two products.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if the products are not unionable.
    pub fn union(&self, that: &Interval2D) -> Result<Interval2D, SkylineError> {
        SkylineError::check(self.is_unionable_with(that), || {
            format!("{self} and {that} are not unionable")
        })?;
        Ok(self.bounding_union(that))
    }
}

impl fmt::Display for Interval2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.ix, self.iy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i1(from: i32, to: i32) -> Interval1D {
        Interval1D::new(from, to).unwrap()
    }

    fn i2(x0: i32, x1: i32, y0: i32, y1: i32) -> Interval2D {
        Interval2D::new(i1(x0, x1), i1(y0, y1))
    }

    #[test]
    fn test_malformed_interval_rejected() {
        assert!(matches!(
            Interval1D::new(3, 2),
            Err(SkylineError::InvalidArgument(_))
        ));
        assert!(Interval1D::new(2, 2).is_ok());
    }

    #[test]
    fn test_contains_boundaries() {
        let i = i1(-3, 4);
        assert!(i.contains(-3));
        assert!(i.contains(4));
        assert!(!i.contains(5));
        assert!(!i.contains(-4));
    }

    #[test]
    fn test_size() {
        assert_eq!(i1(-3, 4).size(), 8);
        assert_eq!(i1(7, 7).size(), 1);
        assert_eq!(i1(i32::MIN, i32::MAX).size(), 1i64 << 32);
    }

    #[test]
    fn test_size_of_intersection() {
        assert_eq!(i1(0, 10).size_of_intersection_with(&i1(5, 20)), 6);
        assert_eq!(i1(5, 20).size_of_intersection_with(&i1(0, 10)), 6);
        assert_eq!(i1(0, 10).size_of_intersection_with(&i1(2, 3)), 2);
        assert_eq!(i1(2, 3).size_of_intersection_with(&i1(0, 10)), 2);
        assert_eq!(i1(0, 10).size_of_intersection_with(&i1(11, 20)), 0);
        assert_eq!(i1(0, 10).size_of_intersection_with(&i1(10, 20)), 1);
    }

    #[test]
    fn test_bounding_union() {
        assert_eq!(i1(0, 3).bounding_union(&i1(8, 9)), i1(0, 9));
        assert_eq!(i1(8, 9).bounding_union(&i1(0, 3)), i1(0, 9));
    }

    #[test]
    fn test_unionable_when_adjacent_or_overlapping() {
        assert!(i1(0, 3).is_unionable_with(&i1(4, 9)));
        assert!(i1(0, 5).is_unionable_with(&i1(4, 9)));
        assert!(i1(0, 9).is_unionable_with(&i1(4, 5)));
        assert!(!i1(0, 3).is_unionable_with(&i1(5, 9)));
    }

    #[test]
    fn test_union_law() {
        let pairs = [
            (i1(0, 3), i1(4, 9)),
            (i1(0, 5), i1(4, 9)),
            (i1(-2, 2), i1(-2, 2)),
            (i1(0, 3), i1(5, 9)),
            (i1(10, 20), i1(-5, 0)),
        ];
        for (a, b) in pairs {
            match a.union(&b) {
                Ok(u) => {
                    assert!(a.is_unionable_with(&b));
                    assert_eq!(u.size(), a.size() + b.size() - a.size_of_intersection_with(&b));
                }
                Err(_) => assert!(!a.is_unionable_with(&b), "{a} {b}"),
            }
        }
    }

    #[test]
    fn test_display_1d() {
        assert_eq!(i1(-1, 5).to_string(), "[-1..5]");
    }

    #[test]
    fn test_2d_contains_and_size() {
        let e = i2(0, 9, 100, 104);
        assert!(e.contains(9, 100));
        assert!(!e.contains(10, 100));
        assert!(!e.contains(0, 99));
        assert_eq!(e.size(), 50);
    }

    #[test]
    fn test_2d_intersection_size() {
        let a = i2(0, 9, 0, 9);
        let b = i2(5, 14, 8, 20);
        assert_eq!(a.size_of_intersection_with(&b), 5 * 2);
        assert_eq!(a.size_of_intersection_with(&i2(20, 30, 0, 9)), 0);
    }

    #[test]
    fn test_2d_side_by_side_tiles_are_unionable() {
        let west = i2(0, 3600, 0, 3600);
        let east = i2(3600, 7200, 0, 3600);
        assert!(west.is_unionable_with(&east));
        assert_eq!(west.union(&east).unwrap(), i2(0, 7200, 0, 3600));
    }

    #[test]
    fn test_2d_diagonal_tiles_are_not_unionable() {
        let sw = i2(0, 10, 0, 10);
        let ne = i2(11, 20, 11, 20);
        // Each axis alone is unionable but the bounding box has holes.
        assert!(sw.ix().is_unionable_with(&ne.ix()));
        assert!(sw.iy().is_unionable_with(&ne.iy()));
        assert!(!sw.is_unionable_with(&ne));
        assert!(matches!(sw.union(&ne), Err(SkylineError::InvalidArgument(_))));
    }

    #[test]
    fn test_2d_offset_tiles_are_not_unionable() {
        let a = i2(0, 10, 0, 10);
        let b = i2(11, 20, 5, 15);
        assert!(!a.is_unionable_with(&b));
    }

    #[test]
    fn test_2d_full_range_size() {
        let full = Interval2D::new(i1(i32::MIN, i32::MAX), i1(i32::MIN, i32::MAX));
        assert_eq!(full.size(), 1i128 << 64);
        assert_eq!(full.size_of_intersection_with(&full), 1i128 << 64);
        assert!(full.is_unionable_with(&full));
        assert_eq!(full.union(&i2(0, 10, -5, 5)).unwrap(), full);
    }

    #[test]
    fn test_2d_display() {
        assert_eq!(i2(0, 1, 2, 3).to_string(), "[0..1]x[2..3]");
    }
}
