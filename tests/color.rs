mod tests {
    use ambient_composer::color::{BLACK, Rgb, WHITE, lerp_rgb, rgb_from_u32};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_lerp_endpoints_exact() {
        let dark = rgb_from_u32(0x121212);
        let light = rgb_from_u32(0xFFFFFF);

        assert_eq!(lerp_rgb(dark, light, 0.0), dark);
        assert_eq!(lerp_rgb(dark, light, 1.0), light);
        assert_eq!(lerp_rgb(RED, BLUE, 0.0), RED);
        assert_eq!(lerp_rgb(RED, BLUE, 1.0), BLUE);
    }

    #[test]
    fn test_lerp_midpoint_rounds() {
        assert_eq!(
            lerp_rgb(BLACK, WHITE, 0.5),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(
            lerp_rgb(RED, BLUE, 0.5),
            Rgb {
                r: 128,
                g: 0,
                b: 128
            }
        );
    }

    #[test]
    fn test_lerp_clamps_parameter() {
        assert_eq!(lerp_rgb(RED, BLUE, -1.0), RED);
        assert_eq!(lerp_rgb(RED, BLUE, 2.0), BLUE);
    }

    #[test]
    fn test_lerp_quarter() {
        // 0 + 0.25 * 255 = 63.75, rounds to 64
        assert_eq!(
            lerp_rgb(BLACK, WHITE, 0.25),
            Rgb {
                r: 64,
                g: 64,
                b: 64
            }
        );
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(
            rgb_from_u32(0x121212),
            Rgb {
                r: 18,
                g: 18,
                b: 18
            }
        );
        assert_eq!(rgb_from_u32(0xFF0000), RED);
        assert_eq!(rgb_from_u32(0x0000FF), BLUE);
        assert_eq!(rgb_from_u32(0x000000), BLACK);
    }
}
