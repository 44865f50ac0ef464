//! Property tests for chunking and the player line format

use level_io::{Color, LineStream, NotificationCollection, PlayerLayer, Vector2};
use proptest::prelude::*;
use std::io::Cursor;

fn stream(data: Vec<u8>, capacity: usize) -> LineStream<Cursor<Vec<u8>>> {
    LineStream::from_reader(Cursor::new(data), capacity).unwrap()
}

proptest! {
    #[test]
    fn short_line_fits_one_chunk(capacity in 32usize..64, text in "[a-z ]{0,30}") {
        let line = format!("{}\n", text);

        let mut s = stream(line.clone().into_bytes(), capacity);
        let chunk = s.next_chunk().unwrap().map(|c| c.to_vec());
        prop_assert_eq!(chunk, Some(line.clone().into_bytes()));
        prop_assert!(!s.is_unfinished());

        let mut s = stream(line.clone().into_bytes(), capacity);
        prop_assert_eq!(s.next_line().unwrap().map(|l| l.to_vec()), Some(line.into_bytes()));
        prop_assert!(!s.is_unfinished());
    }

    #[test]
    fn long_line_spans_chunks(capacity in 2usize..32, len in 1usize..200) {
        prop_assume!(len >= capacity);
        let line = format!("{}\n", "x".repeat(len));
        let mut s = stream(line.into_bytes(), capacity);

        let mut flags = Vec::new();
        let mut total = 0;
        while let Some(chunk) = s.next_chunk().unwrap() {
            prop_assert!(chunk.len() <= capacity - 1);
            total += chunk.len();
            flags.push(s.is_unfinished());
        }

        prop_assert!(flags.len() > 1);
        prop_assert_eq!(total, len + 1);
        let (last, rest) = flags.split_last().unwrap();
        prop_assert!(!*last);
        prop_assert!(rest.iter().all(|&unfinished| unfinished));
    }

    #[test]
    fn next_line_reassembles_any_capacity(
        capacity in 2usize..16,
        lines in prop::collection::vec("[a-z0-9 ]{0,40}", 0..8),
    ) {
        let text: String = lines.iter().map(|l| format!("{}\n", l)).collect();
        let mut s = stream(text.clone().into_bytes(), capacity);

        for expected in &lines {
            let got = s.next_line().unwrap().map(|l| l.to_vec());
            prop_assert_eq!(got, Some(format!("{}\n", expected).into_bytes()));
            prop_assert!(!s.is_unfinished());
        }
        prop_assert_eq!(s.next_line().unwrap(), None);
        prop_assert_eq!(s.next_line().unwrap(), None);
    }

    #[test]
    fn player_line_round_trip(
        x in -100_000i32..100_000,
        y in -100_000i32..100_000,
        quarter_x in 0u8..4,
        quarter_y in 0u8..4,
        r in any::<u8>(),
        g in any::<u8>(),
        b in any::<u8>(),
    ) {
        let position = Vector2::new(
            x as f32 + f32::from(quarter_x) * 0.25,
            y as f32 + f32::from(quarter_y) * 0.25,
        );
        let player = PlayerLayer::new(position, Color::from_rgb8(r, g, b));

        let mut saved = Vec::new();
        player.dump_stream(&mut saved).unwrap();

        let mut s = stream(saved, 16);
        let mut notifications = NotificationCollection::new();
        let reloaded = PlayerLayer::from_line_stream(&mut s, &mut notifications).unwrap();

        prop_assert!(notifications.is_empty());
        prop_assert_eq!(reloaded.position, position);
        prop_assert_eq!(reloaded.color.to_rgb8(), (r, g, b));
    }

    #[test]
    fn player_position_reloads_within_six_decimals(
        x in -1.0e9f32..1.0e9f32,
        y in -1.0e9f32..1.0e9f32,
    ) {
        let player = PlayerLayer::new(Vector2::new(x, y), Color::WHITE);

        let mut saved = Vec::new();
        player.dump_stream(&mut saved).unwrap();

        let mut s = stream(saved, 64);
        let mut notifications = NotificationCollection::new();
        let reloaded = PlayerLayer::from_line_stream(&mut s, &mut notifications).unwrap();

        prop_assert!(notifications.is_empty());
        prop_assert!((reloaded.position.x - x).abs() <= 5e-7 + f32::EPSILON * x.abs());
        prop_assert!((reloaded.position.y - y).abs() <= 5e-7 + f32::EPSILON * y.abs());
    }
}
