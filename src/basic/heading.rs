use std::ops::Neg;

use Heading::*;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Neg for Heading {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

impl Heading {
    /// Unit vector in screen space, y grows downwards
    pub fn unit(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_opposite_of(self, other: Self) -> bool {
        -self == other
    }
}

#[cfg(test)]
impl Heading {
    // clockwise order starting from Up
    pub fn iter() -> impl Iterator<Item = Self> {
        [Up, Right, Down, Left].iter().copied()
    }
}

#[test]
fn test_opposite() {
    for (heading, opposite) in [(Up, Down), (Down, Up), (Left, Right), (Right, Left)] {
        assert_eq!(-heading, opposite);
        assert!(heading.is_opposite_of(opposite));
    }
}

#[test]
fn test_units_cancel_out() {
    for heading in Heading::iter() {
        let (dx, dy) = heading.unit();
        let (ox, oy) = (-heading).unit();
        assert_eq!((dx + ox, dy + oy), (0, 0), "{:?}", heading);
        assert_eq!(dx.abs() + dy.abs(), 1);
    }
}
