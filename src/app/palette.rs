use ggez::graphics::Color;
use std::str::FromStr;

lazy_static! {
    static ref DEFAULT_BACKGROUND_COLOR: Color = Color::from_rgb(0, 0, 0);
    static ref DEFAULT_BORDER_COLOR: Color = Color::from_rgb(93, 216, 228);
    static ref DEFAULT_FOOD_COLOR: Color = Color::from_rgb(255, 0, 0);
    static ref DEFAULT_SNAKE_COLOR: Color = Color::from_rgb(0, 255, 0);
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    pub background_color: Color,
    /// Outline of every filled cell, also used for the grid overlay
    pub border_color: Color,
    pub food_color: Color,
    pub snake_color: Color,
    pub border_thickness: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background_color: *DEFAULT_BACKGROUND_COLOR,
            border_color: *DEFAULT_BORDER_COLOR,
            food_color: *DEFAULT_FOOD_COLOR,
            snake_color: *DEFAULT_SNAKE_COLOR,
            border_thickness: 1.,
        }
    }
}

/// A color written as `RRGGBB` or `#RRGGBB`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected a color like RRGGBB, got {:?}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| format!("invalid color {:?}: {}", s, e))
        };
        Ok(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::from_rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!("5dd8e4".parse(), Ok(Rgb(93, 216, 228)));
        assert_eq!("#FF0000".parse(), Ok(Rgb(255, 0, 0)));
        assert!("00ff0".parse::<Rgb>().is_err());
        assert!("gg0000".parse::<Rgb>().is_err());
        assert!("#ff00ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_default_colors() {
        let palette = Palette::default();
        assert_eq!(palette.border_color, Color::from(Rgb(93, 216, 228)));
        assert_eq!(palette.snake_color, Color::from_rgb(0, 255, 0));
        assert_eq!(palette.background_color, Color::from_rgb(0, 0, 0));
    }
}
