/// Maximum hero parallax displacement in pixels.
pub const PARALLAX_STRENGTH: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Hero parallax offset for a pointer position.
///
/// The pointer's distance from the rect centre, normalised by the rect size,
/// scaled by `PARALLAX_STRENGTH`. A degenerate rect yields no offset.
pub fn parallax_offset(pointer_x: f64, pointer_y: f64, rect: &Rect) -> (f64, f64) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (pointer_x - rect.left - rect.width / 2.0) / rect.width;
    let y = (pointer_y - rect.top - rect.height / 2.0) / rect.height;
    (x * PARALLAX_STRENGTH, y * PARALLAX_STRENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn test_centre_has_no_offset() {
        assert_eq!(parallax_offset(500.0, 400.0, &HERO), (0.0, 0.0));
    }

    #[test]
    fn test_corner_reaches_half_strength() {
        assert_eq!(parallax_offset(1000.0, 800.0, &HERO), (10.0, 10.0));
        assert_eq!(parallax_offset(0.0, 0.0, &HERO), (-10.0, -10.0));
    }

    #[test]
    fn test_degenerate_rect() {
        assert_eq!(parallax_offset(10.0, 10.0, &Rect::default()), (0.0, 0.0));
    }
}
