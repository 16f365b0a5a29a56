//! Unit conversion utilities.
//!
//! Cell widths and row heights are stored in twips, border widths in eighths
//! of a point. The HTML writers turn both into CSS pixels with two
//! independent fixed divisors.

/// Twips per CSS pixel used for cell widths and row heights.
pub const TWIPS_PER_PX: u32 = 14;

/// Border size units (eighths of a point) per CSS pixel.
pub const BORDER_UNITS_PER_PX: u32 = 4;

const _: () = assert!(TWIPS_PER_PX > 0 && BORDER_UNITS_PER_PX > 0);

/// Convert a stored length to pixels.
#[inline]
pub fn units_to_px(value: u32, units_per_px: u32) -> f64 {
    f64::from(value) / f64::from(units_per_px)
}

/// Append `value / units_per_px` to `out` without a trailing `.0`.
///
/// Whole results are written as integers (`140 / 14` gives `10`), fractional
/// ones with the shortest round-tripping representation (`6 / 4` gives `1.5`).
/// Callers pass one of the divisor constants above, never zero.
pub(crate) fn write_px(out: &mut String, value: u32, units_per_px: u32) {
    debug_assert!(units_per_px > 0);
    if value % units_per_px == 0 {
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(value / units_per_px));
    } else {
        let mut buffer = ryu::Buffer::new();
        out.push_str(buffer.format(units_to_px(value, units_per_px)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(value: u32, units_per_px: u32) -> String {
        let mut out = String::new();
        write_px(&mut out, value, units_per_px);
        out
    }

    #[test]
    fn test_whole_pixels() {
        assert_eq!(px(140, TWIPS_PER_PX), "10");
        assert_eq!(px(0, TWIPS_PER_PX), "0");
        assert_eq!(px(8, BORDER_UNITS_PER_PX), "2");
    }

    #[test]
    fn test_fractional_pixels() {
        assert_eq!(px(6, BORDER_UNITS_PER_PX), "1.5");
        assert_eq!(px(1, BORDER_UNITS_PER_PX), "0.25");
        assert_eq!(px(21, TWIPS_PER_PX), "1.5");
    }

    #[test]
    fn test_divisors_are_independent() {
        assert_eq!(px(56, TWIPS_PER_PX), "4");
        assert_eq!(px(56, BORDER_UNITS_PER_PX), "14");
    }
}
