#[cfg(test)]
mod _tests_hermann_mauguin {
    use super::super::axis::Axis;
    use super::super::hermann_mauguin::*;
    use super::super::notation_types::{Centering, CrystalSystem};
    use crate::error::NotationError;
    use crate::interfaces::Dimension;

    fn axis(token: &str) -> Axis {
        Axis::parse(token).unwrap()
    }

    // ==================== Explicit construction ====================

    #[test]
    fn test_new_normalizes_centering_case() {
        let symbol = HermannMauguin3D::new(Some('f'), [axis("4_1/d"), axis("-3"), axis("2/m")])
            .unwrap();
        assert_eq!(symbol.centering(), Some(Centering::FaceCentered));
        assert!(symbol.is_space_group());
        assert!(!symbol.is_point_group());
    }

    #[test]
    fn test_new_rejects_noncrystallographic_space_group() {
        let fivefold = Axis::from_rotation(5).unwrap();
        assert_eq!(
            HermannMauguin3D::new(Some('P'), [fivefold, Axis::IDENTITY, Axis::IDENTITY]),
            Err(NotationError::InvalidRotationOrder { order: 5 })
        );
        let eightfold = Axis::from_rotation(-8).unwrap();
        assert_eq!(
            HermannMauguin3D::new(Some('I'), [Axis::IDENTITY, eightfold, Axis::IDENTITY]),
            Err(NotationError::InvalidRotationOrder { order: 8 })
        );
    }

    #[test]
    fn test_point_groups_skip_the_restriction() {
        let fivefold = Axis::from_rotation(5).unwrap();
        let symbol = HermannMauguin3D::new(None, [fivefold, Axis::IDENTITY, Axis::IDENTITY]).unwrap();
        assert!(symbol.is_point_group());
        assert_eq!(symbol.axis_orders(), [5, 1, 1]);
        assert_eq!(HermannMauguin3D::point_group([fivefold; 3]).unwrap().axis_orders(), [5; 3]);
    }

    #[test]
    fn test_new_rejects_centering_outside_dimension_alphabet() {
        assert_eq!(
            HermannMauguin3D::new(Some('X'), [Axis::IDENTITY; 3]),
            Err(NotationError::InvalidCentering {
                centering: 'X',
                dimension: Dimension::_3D
            })
        );
        assert!(matches!(
            HermannMauguin2D::new(Some('I'), [Axis::IDENTITY; 2]),
            Err(NotationError::InvalidCentering { .. })
        ));
        assert!(matches!(
            HermannMauguin1D::from_parts(Some(Centering::BaseC), [Axis::IDENTITY]),
            Err(NotationError::InvalidCentering { .. })
        ));
    }

    #[test]
    fn test_explicit_2d_construction() {
        let p4 = HermannMauguin2D::new(Some('p'), [axis("4"), axis("m")]).unwrap();
        assert_eq!(p4.dimension(), Dimension::_2D);
        assert_eq!(p4.centering(), Some(Centering::Primitive));
        assert_eq!(p4.axis_orders(), [4, 2]);
    }

    #[test]
    fn test_unsupported_dimension() {
        assert_eq!(
            HermannMauguin::<4>::new(None, [Axis::IDENTITY; 4]),
            Err(NotationError::UnsupportedDimension(4))
        );
        assert_eq!(
            "1 1 1 1".parse::<HermannMauguin<4>>(),
            Err(NotationError::UnsupportedDimension(4))
        );
    }

    // ==================== Parsing ====================

    #[test]
    fn test_parse_space_group() {
        let symbol = HermannMauguin3D::parse("F 4_1/d -3 2/m").unwrap();
        assert_eq!(symbol.centering(), Some(Centering::FaceCentered));
        assert_eq!(symbol.axes(), &[axis("4₁/d"), axis("-3"), axis("2/m")]);
        assert_eq!(symbol.axis_orders(), [4, 3, 2]);
    }

    #[test]
    fn test_parse_point_group() {
        let symbol = HermannMauguin3D::parse("-6 m 2").unwrap();
        assert!(symbol.is_point_group());
        assert_eq!(symbol.centering(), None);
        assert_eq!(symbol.axis_orders(), [6, 2, 2]);
    }

    #[test]
    fn test_leading_mirror_is_not_a_centering() {
        let mm2 = HermannMauguin3D::parse("m m 2").unwrap();
        assert!(mm2.is_point_group());
        assert_eq!(mm2.axes()[0], Axis::MIRROR);

        let m = HermannMauguin3D::parse("m").unwrap();
        assert!(m.is_point_group());
        assert_eq!(m.axes(), &[Axis::MIRROR, Axis::IDENTITY, Axis::IDENTITY]);
    }

    #[test]
    fn test_parse_pads_missing_axes_with_identity() {
        let p2 = HermannMauguin3D::parse("P 2").unwrap();
        assert_eq!(p2.axes(), &[axis("2"), Axis::IDENTITY, Axis::IDENTITY]);

        let empty = HermannMauguin3D::parse("").unwrap();
        assert!(empty.is_point_group());
        assert_eq!(empty.axes(), &[Axis::IDENTITY; 3]);

        let p = HermannMauguin3D::parse("P").unwrap();
        assert_eq!(p.centering(), Some(Centering::Primitive));
        assert_eq!(p.axes(), &[Axis::IDENTITY; 3]);
    }

    #[test]
    fn test_parse_lowercase_centering() {
        let symbol = HermannMauguin3D::parse("i 4_1/a 2/m 2/d").unwrap();
        assert_eq!(symbol.centering(), Some(Centering::BodyCentered));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            HermannMauguin3D::parse("P 5"),
            Err(NotationError::InvalidRotationOrder { order: 5 })
        );
        assert!(matches!(
            HermannMauguin3D::parse("Q 2 2 2"),
            Err(NotationError::InvalidCentering { centering: 'Q', .. })
        ));
        assert!(matches!(
            HermannMauguin3D::parse("P 2 2 2 2"),
            Err(NotationError::TooManyAxes {
                expected: 3,
                found: 4,
                ..
            })
        ));
        assert!(matches!(
            HermannMauguin3D::parse("P 2/x"),
            Err(NotationError::InvalidAxis(_))
        ));
    }

    #[test]
    fn test_parse_1d() {
        let pm = HermannMauguin1D::parse("P m").unwrap();
        assert_eq!(pm.axes(), &[Axis::MIRROR]);
        assert!(pm.is_space_group());
        assert!(matches!(
            HermannMauguin1D::parse("C m"),
            Err(NotationError::InvalidCentering { .. })
        ));
    }

    #[test]
    fn test_parse_2d_is_not_implemented() {
        assert!(matches!(
            HermannMauguin2D::parse("p 4 m m"),
            Err(NotationError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_from_str_and_try_from() {
        let parsed: HermannMauguin3D = "P 6_3/m 2/m 2/c".parse().unwrap();
        assert_eq!(parsed, HermannMauguin3D::try_from("P 6₃/m 2/m 2/c").unwrap());
        assert_eq!(
            parsed,
            HermannMauguin3D::try_from(String::from("P 6_3/m 2/m 2/c")).unwrap()
        );
    }

    // ==================== Table lookup ====================

    #[test]
    fn test_from_index() {
        let symbol = HermannMauguin3D::from_index(141).unwrap();
        assert_eq!(symbol.long_form(), "I 4₁/a 2/m 2/d");
        assert_eq!(symbol.table_index(), Some(141));

        assert_eq!(
            HermannMauguin3D::from_index(231),
            Err(NotationError::IndexOutOfRange {
                dimension: Dimension::_3D,
                index: 231,
                len: 230
            })
        );
        assert!(matches!(
            HermannMauguin3D::from_index(0),
            Err(NotationError::IndexOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_table_index_of_unlisted_symbol() {
        let point_group = HermannMauguin3D::parse("4/m 2/m 2/m").unwrap();
        assert_eq!(point_group.table_index(), None);
    }

    #[test]
    fn test_table_index_needs_an_equal_symbol_not_just_an_equal_long_form() {
        let r312 =
            HermannMauguin3D::new(Some('R'), [axis("3"), Axis::IDENTITY, axis("2")]).unwrap();
        let r321 = HermannMauguin3D::from_index(155).unwrap();
        assert_eq!(r312.long_form(), r321.long_form());
        assert_ne!(r312, r321);
        assert_eq!(r312.table_index(), None);
        assert_eq!(r321.table_index(), Some(155));
    }

    // ==================== Classification ====================

    #[test]
    fn test_crystal_system() {
        let cases = [
            ("P 1", CrystalSystem::Triclinic),
            ("P -1", CrystalSystem::Triclinic),
            ("P 1 2₁/c 1", CrystalSystem::Monoclinic),
            ("m", CrystalSystem::Monoclinic),
            ("P 2₁ 2₁ 2₁", CrystalSystem::Orthorhombic),
            ("C m c 2₁", CrystalSystem::Orthorhombic),
            ("I 4₁/a 2/m 2/d", CrystalSystem::Tetragonal),
            ("-4 2 m", CrystalSystem::Tetragonal),
            ("R -3 2/m", CrystalSystem::Trigonal),
            ("P 3 1 2", CrystalSystem::Trigonal),
            ("P 6₃/m 2/m 2/c", CrystalSystem::Hexagonal),
            ("-6 m 2", CrystalSystem::Hexagonal),
            ("P 2 3 1", CrystalSystem::Cubic),
            ("F 4₁/d -3 2/m", CrystalSystem::Cubic),
        ];
        for (notation, expected) in cases {
            let symbol = HermannMauguin3D::parse(notation).unwrap();
            assert_eq!(symbol.crystal_system(), expected, "{}", notation);
        }
        assert_eq!(CrystalSystem::Trigonal.family(), CrystalSystem::Hexagonal);
        assert_eq!(CrystalSystem::Cubic.family(), CrystalSystem::Cubic);
    }

    #[test]
    fn test_standardize_is_not_implemented() {
        let symbol = HermannMauguin3D::parse("P 1 2/m 1").unwrap();
        assert!(matches!(
            symbol.standardize(),
            Err(NotationError::NotImplemented(_))
        ));
    }

    // ==================== Serialization ====================

    #[test]
    fn test_serde_keeps_centering_and_every_axis() {
        let symbol = HermannMauguin3D::from_index(62).unwrap();
        let json = serde_json::to_string(&symbol).unwrap();
        assert!(json.starts_with(r#"{"centering":"Primitive","axes":[{"rotation":2,"screw":1,"glide":"Diagonal"}"#));

        let back: HermannMauguin3D = serde_json::from_str(&json).unwrap();
        assert_eq!(back, symbol);
    }

    #[test]
    fn test_serde_round_trips_symbols_with_lossy_long_forms() {
        let cases = [
            // long form "R 3 2" parses to 3 2 1
            HermannMauguin3D::new(Some('R'), [axis("3"), Axis::IDENTITY, axis("2")]).unwrap(),
            // long form "-1" hides the twofold
            HermannMauguin3D::point_group([Axis::INVERSION, axis("2"), Axis::IDENTITY]).unwrap(),
            HermannMauguin3D::point_group([Axis::new(-4, 0, Some('m')).unwrap(); 3]).unwrap(),
        ];
        for symbol in cases {
            let json = serde_json::to_string(&symbol).unwrap();
            let back: HermannMauguin3D = serde_json::from_str(&json).unwrap();
            assert_eq!(back, symbol, "{}", json);
            assert_eq!(back.axis_orders(), symbol.axis_orders());
        }
    }

    #[test]
    fn test_serde_round_trips_2d_symbols() {
        let p4m = HermannMauguin2D::new(Some('p'), [axis("4"), Axis::MIRROR]).unwrap();
        let json = serde_json::to_string(&p4m).unwrap();
        let back: HermannMauguin2D = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p4m);
        assert_eq!(back.long_form(), "P 4 m");
    }

    #[test]
    fn test_serde_validates_like_construction() {
        let fivefold = r#"{"centering":"Primitive","axes":[{"rotation":5,"screw":0,"glide":null}]}"#;
        assert!(serde_json::from_str::<HermannMauguin3D>(fivefold).is_err());

        let centered_line = r#"{"centering":"BaseC","axes":[]}"#;
        assert!(serde_json::from_str::<HermannMauguin1D>(centered_line).is_err());

        let identity = r#"{"rotation":1,"screw":0,"glide":null}"#;
        let too_many = format!(r#"{{"centering":null,"axes":[{0},{0},{0}]}}"#, identity);
        assert!(serde_json::from_str::<HermannMauguin2D>(&too_many).is_err());

        // missing trailing axes are identities
        let short = format!(r#"{{"centering":"Primitive","axes":[{}]}}"#, identity);
        let p1: HermannMauguin3D = serde_json::from_str(&short).unwrap();
        assert_eq!(p1.axes(), &[Axis::IDENTITY; 3]);
    }

    #[test]
    fn test_symbols_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HermannMauguin3D>();
        assert_send_sync::<Axis>();
    }
}
