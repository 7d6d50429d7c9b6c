/// Top-left corner of a grid cell in pixels
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Add, Sub, Mul, Display)]
#[display(fmt = "({}, {})", x, y)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[test]
fn test_position_math() {
    let pos = Position::new(320, 240);
    assert_eq!(pos + Position::from((1, 0)) * 20, Position::new(340, 240));
    assert_eq!(pos - Position::new(20, 20), Position::new(300, 220));
    assert_eq!(pos.to_string(), "(320, 240)");
}
