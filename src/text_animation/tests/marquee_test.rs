#[cfg(test)]
mod marquee_test {
    use crate::config::MarqueeConfig;
    use crate::library::random::impl_fake::RandomSourceFake;
    use crate::paint::MARQUEE_COLORS;
    use crate::text_animation::marquee::{
        row_cycle, row_direction, row_offset, row_text, x_percent, Marquee, SEPARATOR,
    };

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn config(rows: usize) -> MarqueeConfig {
        MarqueeConfig {
            words: vec!["cat".to_string(), "dogs".to_string()],
            rows,
            words_length: 3,
        }
    }

    #[test]
    fn test_direction_from_random() {
        assert_eq!(row_direction(0.9), -1.0);
        assert_eq!(row_direction(0.5), 1.0);
        assert_eq!(row_direction(0.1), 1.0);
    }

    #[test]
    fn test_cycle_bounded() {
        assert!(close(row_cycle(0.0), 60.0));
        assert!(close(row_cycle(0.6), 60.0));
        assert!(close(row_cycle(0.8), 80.0));
        for r in [0.0, 0.3, 0.61, 0.99] {
            let cycle = row_cycle(r);
            assert!(cycle > 59.99 && cycle < 100.0);
        }
    }

    #[test]
    fn test_offset_wraps_after_full_cycle() {
        for direction in [-1.0, 1.0] {
            for start in [0.0, 12.5, 33.0] {
                let cycle = 80.0;
                let a = x_percent(direction, cycle, start);
                let b = x_percent(direction, cycle, start + cycle);
                assert!((a - b).abs() < 1e-3, "{} != {}", a, b);
            }
        }
        assert_eq!(x_percent(1.0, 80.0, 80.0), 0.0);
    }

    #[test]
    fn test_offset_travels_half_the_row() {
        assert!((x_percent(1.0, 100.0, 50.0) + 25.0).abs() < 1e-4);
        assert!((x_percent(-1.0, 100.0, 50.0) - 25.0).abs() < 1e-4);
        for t in [0.0, 10.0, 99.9, 1234.5] {
            let x = x_percent(1.0, 100.0, t);
            assert!(x <= 0.0 && x > -50.0);
        }
    }

    #[test]
    fn test_row_start_covered_in_both_directions() {
        let copy_width = 3000.0;
        for direction in [-1.0, 1.0] {
            for elapsed in [0.0, 5.0, 20.0, 40.0, 79.9, 80.0, 500.0] {
                let offset = row_offset(direction, 80.0, elapsed, copy_width);

                assert!(
                    offset >= -copy_width && offset <= 0.0,
                    "direction {} at {}s: offset {}",
                    direction,
                    elapsed,
                    offset
                );
                assert!(offset + 2.0 * copy_width >= copy_width);
            }
        }
    }

    #[test]
    fn test_row_offset_moves_with_direction() {
        let copy_width = 1000.0;
        let start = row_offset(1.0, 100.0, 0.0, copy_width);
        let leftward = row_offset(1.0, 100.0, 10.0, copy_width);
        let rightward = row_offset(-1.0, 100.0, 10.0, copy_width);

        assert!(close(start, -copy_width));
        assert!(close(leftward, -100.0));
        assert!(close(rightward, -900.0));
        assert_eq!(row_offset(1.0, 100.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_row_text_repeats_word() {
        assert_eq!(
            row_text("cat", 3),
            format!("cat{}cat{}cat", SEPARATOR, SEPARATOR)
        );
        assert_eq!(row_text("cat", 0), "");
    }

    #[test]
    fn test_rows_alternate_words_and_cycle_colors() {
        let random = RandomSourceFake::new(vec![0.9, 0.7, 0.2, 0.1]);

        let marquee = Marquee::new(&config(8), &MARQUEE_COLORS, &random);

        let rows = marquee.rows();
        assert_eq!(rows.len(), 8);
        assert!(rows[0].text.starts_with("cat"));
        assert!(rows[1].text.starts_with("dogs"));
        assert_eq!(rows[0].color, MARQUEE_COLORS[0]);
        assert_eq!(rows[6].color, MARQUEE_COLORS[0]);
        assert_eq!(rows[0].direction, -1.0);
        assert!(close(rows[0].cycle, 70.0));
        assert_eq!(rows[1].direction, 1.0);
        assert!(close(rows[1].cycle, 60.0));
    }
}
