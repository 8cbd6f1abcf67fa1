#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use blockcodec_core::{
        compression::{
            BackendLimits, CodecOptions, CompressionKind, DataKind, LibZstd, SpeedModifier,
            ZlibOptions, ZstdBackend, ZstdOptions, ZSTD_WINDOWLOG_MAX, ZSTD_WINDOWLOG_MIN,
        },
        types::CodecError,
    };

    const SMALL_LIMITS: BackendLimits = BackendLimits {
        min_level: 1,
        max_level: 9,
        min_window_log: 12,
        max_window_log: 20,
    };

    fn speeds() -> [SpeedModifier; 3] {
        [SpeedModifier::Fastest, SpeedModifier::Fast, SpeedModifier::Default]
    }

    // --- Level bounds ---

    #[test]
    fn level_accepts_backend_min_and_max() {
        let limits = LibZstd.limits();
        let mut opts = ZstdOptions::default();

        opts.set_level(limits.min_level).unwrap();
        assert_eq!(opts.level(), limits.min_level);
        opts.set_level(limits.max_level).unwrap();
        assert_eq!(opts.level(), limits.max_level);
    }

    #[test]
    fn level_rejects_one_past_each_bound() {
        let limits = LibZstd.limits();
        let mut opts = ZstdOptions::default();

        for bad in [limits.min_level - 1, limits.max_level + 1] {
            let err = opts.set_level(bad).unwrap_err();
            assert!(matches!(err, CodecError::InvalidArgument(_)));
        }
        assert_eq!(opts.level(), 3);
    }

    #[test]
    fn level_bounds_come_from_the_backend() {
        let mut opts = ZstdOptions::with_limits(3, 0, false, SMALL_LIMITS);
        assert!(opts.set_level(1).is_ok());
        assert!(opts.set_level(9).is_ok());
        assert!(opts.set_level(0).is_err());
        assert!(opts.set_level(10).is_err());
    }

    // --- Window log bounds ---

    #[test]
    fn window_log_accepts_zero_and_bounds() {
        let mut opts = ZstdOptions::default();
        for ok in [0, ZSTD_WINDOWLOG_MIN, ZSTD_WINDOWLOG_MAX] {
            opts.set_window_log(ok).unwrap();
            assert_eq!(opts.window_log(), ok);
        }
    }

    #[test]
    fn window_log_rejects_outside_range() {
        let mut opts = ZstdOptions::default();
        for bad in [1, ZSTD_WINDOWLOG_MIN - 1, ZSTD_WINDOWLOG_MAX + 1] {
            let err = opts.set_window_log(bad).unwrap_err();
            assert!(matches!(err, CodecError::InvalidArgument(_)));
        }
        assert_eq!(opts.window_log(), 0);
    }

    #[test]
    fn window_log_bounds_come_from_the_backend() {
        let mut opts = ZstdOptions::with_limits(3, 0, false, SMALL_LIMITS);
        assert!(opts.set_window_log(12).is_ok());
        assert!(opts.set_window_log(20).is_ok());
        assert!(opts.set_window_log(0).is_ok());
        assert!(opts.set_window_log(11).is_err());
        assert!(opts.set_window_log(21).is_err());
    }

    #[test]
    fn setters_chain() {
        let mut opts = ZstdOptions::default();
        opts.set_level(7).unwrap().set_window_log(24).unwrap();
        assert_eq!((opts.level(), opts.window_log()), (7, 24));
    }

    // --- Speed presets and locking ---

    #[test]
    fn speed_presets_map_to_levels() {
        let mut opts = ZstdOptions::default();
        let expected = [1, 2, 3];
        for (speed, level) in speeds().into_iter().zip(expected) {
            opts.set_speed(speed).unwrap();
            assert_eq!(opts.level(), level);
        }
    }

    #[test]
    fn locked_options_refuse_every_preset() {
        let mut opts = ZstdOptions::new(5, 0, true);
        for speed in speeds() {
            let err = opts.set_speed(speed).unwrap_err();
            assert!(matches!(err, CodecError::IllegalState(_)));
        }
        assert_eq!(opts.level(), 5);

        let mut zlib = ZlibOptions::new(4, true);
        for speed in speeds() {
            assert!(matches!(zlib.set_speed(speed), Err(CodecError::IllegalState(_))));
        }
        assert_eq!(zlib.level(), 4);
    }

    #[test]
    fn data_hint_is_a_no_op() {
        let mut opts = ZstdOptions::new(4, 12, false);
        let before = opts.copy();
        opts.set_data(DataKind::Text).set_data(DataKind::Binary);
        assert_eq!(opts, before);
    }

    // --- Copy, equality, hashing ---

    #[test]
    fn copy_is_independent_and_equal() {
        let original = ZstdOptions::new(6, 20, true);
        let mut copy = original.copy();
        assert_eq!(copy, original);
        assert!(copy.is_locked());

        copy.set_level(8).unwrap();
        assert_eq!(original.level(), 6);
        assert_ne!(copy, original);
    }

    #[test]
    fn equality_covers_level_window_and_lock_only() {
        let a = ZstdOptions::new(3, 0, false);
        assert_eq!(a, ZstdOptions::with_limits(3, 0, false, SMALL_LIMITS));
        assert_ne!(a, ZstdOptions::new(4, 0, false));
        assert_ne!(a, ZstdOptions::new(3, 10, false));
        assert_ne!(a, ZstdOptions::new(3, 0, true));

        let set: HashSet<ZstdOptions> = [
            ZstdOptions::new(3, 0, false),
            ZstdOptions::with_limits(3, 0, false, SMALL_LIMITS),
            ZstdOptions::new(3, 0, true),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    // --- Zlib and the options enum ---

    #[test]
    fn zlib_level_bounds() {
        let mut opts = ZlibOptions::default();
        assert!(opts.set_level(0).is_ok());
        assert!(opts.set_level(9).is_ok());
        assert!(matches!(opts.set_level(10), Err(CodecError::InvalidArgument(_))));
    }

    #[test]
    fn codec_options_dispatch_by_kind() {
        let mut zstd = CodecOptions::from(ZstdOptions::default());
        zstd.set_speed(SpeedModifier::Fastest).unwrap();
        assert_eq!(zstd.kind(), CompressionKind::Zstd);
        assert_eq!(zstd.as_zstd().unwrap().level(), 1);
        assert!(zstd.as_zlib().is_err());

        let mut zlib = CodecOptions::from(ZlibOptions::default());
        zlib.set_speed(SpeedModifier::Default).unwrap();
        assert_eq!(zlib.as_zlib().unwrap().level(), 6);

        let mut lz4 = CodecOptions::Lz4;
        lz4.set_speed(SpeedModifier::Fast).unwrap().set_data(DataKind::Text);
        assert_eq!(lz4.copy(), CodecOptions::Lz4);
    }
}
