use std::cmp;
use std::fmt;

use crate::cells::Cartesian2DCoordinate;

/// The smallest axis aligned rectangle covering every cell whose state changed in one grid
/// operation, or `Empty` when nothing changed.
///
/// Bounds are inclusive grid coordinates: `top`/`bottom` are rows (y), `left`/`right` are
/// columns (x).
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum ChangeRegion {
    Empty,
    Bounds {
        top: u32,
        left: u32,
        bottom: u32,
        right: u32,
    },
}

impl ChangeRegion {
    /// A region covering exactly one cell.
    pub fn cell(coord: Cartesian2DCoordinate) -> ChangeRegion {
        ChangeRegion::Bounds {
            top: coord.y,
            left: coord.x,
            bottom: coord.y,
            right: coord.x,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == ChangeRegion::Empty
    }

    pub fn contains(&self, coord: Cartesian2DCoordinate) -> bool {
        match *self {
            ChangeRegion::Empty => false,
            ChangeRegion::Bounds { top, left, bottom, right } => {
                coord.x >= left && coord.x <= right && coord.y >= top && coord.y <= bottom
            }
        }
    }

    /// Number of columns spanned.
    pub fn width(&self) -> u32 {
        match *self {
            ChangeRegion::Empty => 0,
            ChangeRegion::Bounds { left, right, .. } => right - left + 1,
        }
    }

    /// Number of rows spanned.
    pub fn height(&self) -> u32 {
        match *self {
            ChangeRegion::Empty => 0,
            ChangeRegion::Bounds { top, bottom, .. } => bottom - top + 1,
        }
    }

    /// The smallest region covering both regions.
    pub fn union(self, other: ChangeRegion) -> ChangeRegion {
        match (self, other) {
            (ChangeRegion::Empty, region) | (region, ChangeRegion::Empty) => region,
            (ChangeRegion::Bounds { top: t1, left: l1, bottom: b1, right: r1 },
             ChangeRegion::Bounds { top: t2, left: l2, bottom: b2, right: r2 }) => {
                ChangeRegion::Bounds {
                    top: cmp::min(t1, t2),
                    left: cmp::min(l1, l2),
                    bottom: cmp::max(b1, b2),
                    right: cmp::max(r1, r2),
                }
            }
        }
    }
}

impl Default for ChangeRegion {
    fn default() -> ChangeRegion {
        ChangeRegion::Empty
    }
}

impl fmt::Display for ChangeRegion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ChangeRegion::Empty => write!(f, "no change"),
            ChangeRegion::Bounds { top, left, bottom, right } => {
                write!(f, "rows {}-{} columns {}-{}", top, bottom, left, right)
            }
        }
    }
}

/// Accumulates a running min/max over changed cell coordinates.
#[derive(Debug, Default, Copy, Clone)]
pub struct RegionBuilder {
    region: ChangeRegion,
}

impl RegionBuilder {
    pub fn new() -> RegionBuilder {
        RegionBuilder::default()
    }

    #[inline]
    pub fn include(&mut self, coord: Cartesian2DCoordinate) {
        self.region = match self.region {
            ChangeRegion::Empty => ChangeRegion::cell(coord),
            ChangeRegion::Bounds { top, left, bottom, right } => {
                ChangeRegion::Bounds {
                    top: cmp::min(top, coord.y),
                    left: cmp::min(left, coord.x),
                    bottom: cmp::max(bottom, coord.y),
                    right: cmp::max(right, coord.x),
                }
            }
        };
    }

    #[inline]
    pub fn build(self) -> ChangeRegion {
        self.region
    }
}

#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};

    use super::*;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn untouched_builder_is_empty() {
        let region = RegionBuilder::new().build();
        assert_eq!(region, ChangeRegion::Empty);
        assert!(region.is_empty());
        assert_eq!(region.width(), 0);
        assert_eq!(region.height(), 0);
        assert!(!region.contains(gc(0, 0)));
    }

    #[test]
    fn single_cell_at_origin_is_not_empty() {
        let mut builder = RegionBuilder::new();
        builder.include(gc(0, 0));
        let region = builder.build();
        assert!(!region.is_empty());
        assert_eq!(region, ChangeRegion::Bounds { top: 0, left: 0, bottom: 0, right: 0 });
        assert_eq!((region.width(), region.height()), (1, 1));
    }

    #[test]
    fn bounds_track_min_max_independently() {
        let mut builder = RegionBuilder::new();
        builder.include(gc(5, 1));
        builder.include(gc(2, 7));
        builder.include(gc(3, 3));
        let region = builder.build();
        assert_eq!(region, ChangeRegion::Bounds { top: 1, left: 2, bottom: 7, right: 5 });
        assert_eq!(region.width(), 4);
        assert_eq!(region.height(), 7);
        assert!(region.contains(gc(2, 1)));
        assert!(region.contains(gc(5, 7)));
        assert!(!region.contains(gc(6, 3)));
        assert!(!region.contains(gc(3, 0)));
    }

    #[test]
    fn union_with_empty() {
        let region = ChangeRegion::cell(gc(4, 4));
        assert_eq!(region.union(ChangeRegion::Empty), region);
        assert_eq!(ChangeRegion::Empty.union(region), region);
        assert_eq!(ChangeRegion::Empty.union(ChangeRegion::Empty), ChangeRegion::Empty);
        assert_eq!(region.union(ChangeRegion::cell(gc(1, 6))),
                   ChangeRegion::Bounds { top: 4, left: 1, bottom: 6, right: 4 });
    }

    #[test]
    fn display() {
        assert_eq!(ChangeRegion::Empty.to_string(), "no change");
        assert_eq!(ChangeRegion::Bounds { top: 1, left: 2, bottom: 3, right: 4 }.to_string(),
                   "rows 1-3 columns 2-4");
    }

    #[test]
    fn builder_covers_every_included_coordinate() {
        fn p(points: Vec<(u8, u8)>) -> TestResult {
            if points.is_empty() {
                return TestResult::discard();
            }
            let mut builder = RegionBuilder::new();
            for &(x, y) in &points {
                builder.include(gc(x as u32, y as u32));
            }
            let region = builder.build();

            let all_inside = points.iter().all(|&(x, y)| region.contains(gc(x as u32, y as u32)));
            let min_x = points.iter().map(|p| p.0).min().unwrap_or(0) as u32;
            let max_x = points.iter().map(|p| p.0).max().unwrap_or(0) as u32;
            let min_y = points.iter().map(|p| p.1).min().unwrap_or(0) as u32;
            let max_y = points.iter().map(|p| p.1).max().unwrap_or(0) as u32;
            let tight = region == ChangeRegion::Bounds {
                top: min_y,
                left: min_x,
                bottom: max_y,
                right: max_x,
            };
            TestResult::from_bool(all_inside && tight)
        }
        quickcheck(p as fn(Vec<(u8, u8)>) -> TestResult);
    }
}
