mod tests {
    use ambient_composer::color::{BLACK, Rgb, WHITE};
    use ambient_composer::light::{LightConfig, LightLevel, LightProcessor};

    #[test]
    fn test_first_reading_seeds_average() {
        let mut processor = LightProcessor::default();
        let state = processor.process(5.0);

        assert_eq!(state.raw_lux, 5.0);
        assert_eq!(state.smoothed_lux, 5.0);
        assert_eq!(state.normalized, 0.00025);
        assert_eq!(state.level, LightLevel::VeryDark);
        assert_eq!(state.text, WHITE);
    }

    #[test]
    fn test_smoothing_recurrence() {
        let mut processor = LightProcessor::default();
        processor.process(5.0);
        let state = processor.process(20_000.0);

        // 0.8 * 5 + 0.2 * 20000
        assert_eq!(state.smoothed_lux, 4004.0);
        assert_eq!(state.normalized, 0.2002);
        assert_eq!(state.level, LightLevel::Bright);
        assert_eq!(state.text, WHITE);
    }

    #[test]
    fn test_smoothing_stays_between_prior_and_raw() {
        let mut processor = LightProcessor::default();
        let mut prior = processor.process(100.0).smoothed_lux;

        for raw in [0.0, 5000.0, 30.0, 30.0, 20_000.0, 1.0] {
            let smoothed = processor.process(raw).smoothed_lux;
            assert!(smoothed >= prior.min(raw), "smoothed {smoothed} below both");
            assert!(smoothed <= prior.max(raw), "smoothed {smoothed} above both");
            prior = smoothed;
        }
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(LightLevel::from_lux(9.999), LightLevel::VeryDark);
        assert_eq!(LightLevel::from_lux(10.0), LightLevel::Dark);
        assert_eq!(LightLevel::from_lux(99.999), LightLevel::Dark);
        assert_eq!(LightLevel::from_lux(100.0), LightLevel::Normal);
        assert_eq!(LightLevel::from_lux(999.999), LightLevel::Normal);
        assert_eq!(LightLevel::from_lux(1000.0), LightLevel::Bright);
        assert_eq!(LightLevel::from_lux(9999.999), LightLevel::Bright);
        assert_eq!(LightLevel::from_lux(10_000.0), LightLevel::VeryBright);
    }

    #[test]
    fn test_normalized_monotonic_and_clamped() {
        let mut previous = 0.0;
        for step in 0u8..=200 {
            let lux = f32::from(step) * 100.0;
            let mut processor = LightProcessor::default();
            let normalized = processor.process(lux).normalized;
            assert!(normalized >= previous, "not monotonic at {lux} lux");
            assert!((0.0..=1.0).contains(&normalized));
            previous = normalized;
        }

        let mut processor = LightProcessor::default();
        assert_eq!(processor.process(-50.0).normalized, 0.0);
        processor.reset();
        assert_eq!(processor.process(0.0).normalized, 0.0);
        processor.reset();
        assert_eq!(processor.process(20_000.0).normalized, 1.0);
        processor.reset();
        assert_eq!(processor.process(50_000.0).normalized, 1.0);
    }

    #[test]
    fn test_text_contrast_threshold() {
        // 9800 / 20000 = 0.49, 10000 / 20000 = 0.5, 10200 / 20000 = 0.51
        let mut processor = LightProcessor::default();
        assert_eq!(processor.process(9800.0).text, WHITE);
        processor.reset();
        assert_eq!(processor.process(10_000.0).text, BLACK);
        processor.reset();
        assert_eq!(processor.process(10_200.0).text, BLACK);
    }

    #[test]
    fn test_background_reaches_palette_endpoints() {
        let config = LightConfig::default();
        let dark = config.dark;
        let light = config.light;

        let mut processor = LightProcessor::new(config);
        assert_eq!(processor.process(0.0).background, dark);
        processor.reset();
        assert_eq!(processor.process(30_000.0).background, light);
    }

    #[test]
    fn test_default_palette() {
        let config = LightConfig::default();
        assert_eq!(
            config.dark,
            Rgb {
                r: 18,
                g: 18,
                b: 18
            }
        );
        assert_eq!(
            config.light,
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn test_reset_reseeds() {
        let mut processor = LightProcessor::default();
        processor.process(5.0);
        processor.process(20_000.0);

        processor.reset();
        let state = processor.process(7.0);
        assert_eq!(state.smoothed_lux, 7.0);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut indoor = LightProcessor::default();
        let mut outdoor = LightProcessor::default();

        indoor.process(50.0);
        outdoor.process(15_000.0);

        let indoor_state = indoor.process(50.0);
        let outdoor_state = outdoor.process(15_000.0);
        assert_eq!(indoor_state.smoothed_lux, 50.0);
        assert_eq!(outdoor_state.smoothed_lux, 15_000.0);
    }

    #[test]
    fn test_non_finite_reading_stays_total() {
        let mut processor = LightProcessor::default();
        let state = processor.process(f32::NAN);
        assert_eq!(state.level, LightLevel::VeryBright);
        assert_eq!(state.normalized, 0.0);

        let mut processor = LightProcessor::default();
        let state = processor.process(f32::INFINITY);
        assert_eq!(state.level, LightLevel::VeryBright);
        assert_eq!(state.normalized, 1.0);
        assert_eq!(state.text, BLACK);

        let mut processor = LightProcessor::default();
        let state = processor.process(f32::NEG_INFINITY);
        assert_eq!(state.level, LightLevel::VeryBright);
        assert_eq!(state.normalized, 0.0);
    }
}
