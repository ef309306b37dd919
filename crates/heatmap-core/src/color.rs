use image::Rgba;

use crate::consts::{OVERLAY_ALPHA, SATURATION_OCCUPANCY};

/// Map an occupancy count onto the green → red ramp.
///
/// `0` is pure green, [`SATURATION_OCCUPANCY`] and above is pure red, and
/// fractional counts interpolate linearly. Red and green always sum to 255.
pub fn occupancy_to_color(occupancy: f64) -> Rgba<u8> {
    let val = (occupancy / SATURATION_OCCUPANCY).clamp(0.0, 1.0);
    let red = (val * 255.0).round() as u8;
    // Derived from red so a .5 tie cannot push the pair to 256.
    let green = 255 - red;
    Rgba([red, green, 0, OVERLAY_ALPHA])
}

/// `#rrggbb` form of a color, alpha dropped.
pub fn to_hex(color: Rgba<u8>) -> String {
    let [r, g, b, _] = color.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_room_is_green() {
        assert_eq!(occupancy_to_color(0.0), Rgba([0, 255, 0, 128]));
    }

    #[test]
    fn saturates_at_ten() {
        assert_eq!(occupancy_to_color(10.0), Rgba([255, 0, 0, 128]));
        assert_eq!(occupancy_to_color(20.0), occupancy_to_color(10.0));
    }

    #[test]
    fn channels_are_complementary() {
        for step in 0..=400 {
            let n = step as f64 * 0.05;
            let c = occupancy_to_color(n);
            assert_eq!(c.0[0] as u16 + c.0[1] as u16, 255, "n={n}");
            assert_eq!(c.0[2], 0);
            assert_eq!(c.0[3], OVERLAY_ALPHA);
        }
    }

    #[test]
    fn fractional_counts_interpolate() {
        // 2.5 / 10 * 255 = 63.75
        assert_eq!(occupancy_to_color(2.5).0[0], 64);
        assert_eq!(occupancy_to_color(2.5).0[1], 191);
        assert!(occupancy_to_color(3.0).0[0] < occupancy_to_color(7.0).0[0]);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(to_hex(occupancy_to_color(0.0)), "#00ff00");
        assert_eq!(to_hex(occupancy_to_color(15.0)), "#ff0000");
    }
}
