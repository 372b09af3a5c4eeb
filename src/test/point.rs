use crate::geometry::Point;

pub(crate) fn p0() -> Point {
    Point::try_from([0., 1.]).unwrap()
}

pub(crate) fn p1() -> Point {
    Point::try_from([1., 2.]).unwrap()
}

pub(crate) fn p2() -> Point {
    Point::try_from([2., 3.]).unwrap()
}
