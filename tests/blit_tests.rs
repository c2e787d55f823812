//! Bitmap blits and streaming writes through the driver.

mod common;

use common::{BusEvent, MockBus, PORTRAIT, driver, register_writes};
use lcd_fsmc::blit::{Palette, PixelCursor};

fn palette() -> Palette {
    core::array::from_fn(|i| 0x1000 + i as u16)
}

fn pixels(events: &[BusEvent]) -> Vec<u16> {
    let mut out = Vec::new();
    for event in events {
        match *event {
            BusEvent::Data(d) => out.push(d),
            BusEvent::Repeat(d, n) => out.extend(std::iter::repeat_n(d, n as usize)),
            _ => {}
        }
    }
    out
}

/// Events between the GRAM write command and the restoring window update.
fn gram_events(events: &[BusEvent], write_command: u16, restore_register: u16) -> &[BusEvent] {
    let start = events
        .iter()
        .position(|e| *e == BusEvent::Command(write_command))
        .unwrap();
    let end = events
        .iter()
        .rposition(|e| *e == BusEvent::Command(restore_register))
        .unwrap();
    &events[start + 1..end]
}

mod four_bit_tests {
    use super::*;

    #[test]
    fn nibbles_map_through_palette_high_first() {
        let bus = MockBus::with_id4(0x9341);
        let mut lcd = driver(&bus, PORTRAIT);
        let mut palette = palette();

        lcd.blit_4bit(4, 8, 2, 1, 1, &mut PixelCursor::new(&[0xAB]), &mut palette, None);

        assert_eq!(
            register_writes(&bus.events()),
            [
                (0x2A, vec![0, 4, 0, 5]),
                (0x2B, vec![0, 8, 0, 8]),
                (0x2C, vec![0x100A, 0x100B]),
                (0x2A, vec![0, 0, 0, 239]),
                (0x2B, vec![0, 0, 0x01, 0x3F]),
            ]
        );
    }

    #[test]
    fn legacy_blit_positions_cursor_and_restores_window() {
        let bus = MockBus::with_id2(0x9325);
        let mut lcd = driver(&bus, PORTRAIT);
        let mut palette = palette();

        lcd.blit_4bit(0, 0, 4, 1, 1, &mut PixelCursor::new(&[0x01, 0x23]), &mut palette, None);

        let writes = register_writes(&bus.events());
        let registers: Vec<u16> = writes.iter().map(|w| w.0).collect();
        assert_eq!(
            registers,
            [0x50, 0x51, 0x52, 0x53, 0x20, 0x21, 0x22, 0x50, 0x51, 0x52, 0x53]
        );
        assert_eq!(writes[6].1, [0x1000, 0x1001, 0x1002, 0x1003]);
    }

    #[test]
    fn scale_three_replays_rows_with_repeated_writes() {
        let bus = MockBus::with_id2(0x9325);
        let mut lcd = driver(&bus, PORTRAIT);
        let mut palette = palette();
        let mut stream = PixelCursor::new(&[0x12, 0x34]);

        lcd.blit_4bit(0, 0, 2, 2, 3, &mut stream, &mut palette, None);

        let events = bus.events();
        let body = gram_events(&events, 0x22, 0x50);
        assert!(body.iter().all(|e| matches!(e, BusEvent::Repeat(_, 3))));
        assert_eq!(body.len(), 2 * 2 * 3);

        let row = |a: u16, b: u16| [a, a, a, b, b, b];
        let mut expected = Vec::new();
        for _ in 0..3 {
            expected.extend(row(0x1001, 0x1002));
        }
        for _ in 0..3 {
            expected.extend(row(0x1003, 0x1004));
        }
        assert_eq!(pixels(body), expected);
        assert_eq!(stream.position(), 2);
    }

    #[test]
    fn row_callback_gets_absolute_rows_and_edits_palette() {
        let bus = MockBus::with_id4(0x9341);
        let mut lcd = driver(&bus, PORTRAIT);
        let mut palette = palette();
        let mut rows = Vec::new();
        let mut callback = |row: u16, palette: &mut Palette| {
            rows.push(row);
            palette[0] = row;
        };

        lcd.blit_4bit(
            0,
            40,
            2,
            2,
            2,
            &mut PixelCursor::new(&[0x00, 0x00]),
            &mut palette,
            Some(&mut callback),
        );

        assert_eq!(rows, [40, 41, 42, 43]);
        let events = bus.events();
        let body = pixels(gram_events(&events, 0x2C, 0x2A));
        assert_eq!(body.len(), 16);
        assert_eq!(&body[..4], [40, 40, 40, 40]);
        assert_eq!(&body[12..], [43, 43, 43, 43]);
    }
}

mod two_bit_tests {
    use super::*;

    #[test]
    fn samples_map_through_low_palette_entries() {
        let bus = MockBus::with_id4(0x7796);
        let mut lcd = driver(&bus, PORTRAIT);
        let mut palette = palette();

        lcd.blit_2bit(0, 0, 4, 1, 1, &mut PixelCursor::new(&[0b1010_1101]), &mut palette, None);

        let events = bus.events();
        assert_eq!(
            pixels(gram_events(&events, 0x2C, 0x2A)),
            [0x1002, 0x1002, 0x1003, 0x1001]
        );
    }

    #[test]
    fn scale_two_doubles_every_sample() {
        let bus = MockBus::with_id4(0x7796);
        let mut lcd = driver(&bus, PORTRAIT);
        let mut palette = palette();

        lcd.blit_2bit(0, 0, 4, 1, 2, &mut PixelCursor::new(&[0b0001_1011]), &mut palette, None);

        let events = bus.events();
        let expected: Vec<u16> = [0x1000, 0x1000, 0x1001, 0x1001, 0x1002, 0x1002, 0x1003, 0x1003]
            .repeat(2);
        assert_eq!(pixels(gram_events(&events, 0x2C, 0x2A)), expected);
    }
}

mod streaming_tests {
    use super::*;

    #[test]
    fn window_guard_restores_on_drop() {
        let bus = MockBus::with_id4(0x9341);
        let mut lcd = driver(&bus, PORTRAIT);

        {
            let mut window = lcd.begin_blit(100, 50, 2, 2).unwrap();
            window.write_pixel(1);
            window.write_pixel(2);
            window.write_repeated(3, 2);
            // full window not restored while the guard lives
            assert_eq!(bus.commands(), [0x2A, 0x2B, 0x2C]);
        }

        assert_eq!(
            register_writes(&bus.events()),
            [
                (0x2A, vec![0, 100, 0, 101]),
                (0x2B, vec![0, 50, 0, 51]),
                (0x2C, vec![1, 2]),
                (0x2A, vec![0, 0, 0, 239]),
                (0x2B, vec![0, 0, 0x01, 0x3F]),
            ]
        );
        assert_eq!(bus.repeated_pixels(), 2);
    }

    #[test]
    fn begin_write_at_leaves_window_alone() {
        let bus = MockBus::with_id2(0x9325);
        let mut lcd = driver(&bus, PORTRAIT);

        let mut writer = lcd.begin_write_at(0, 5).unwrap();
        writer.write_pixel(0xAAAA);
        writer.write_repeated(0x5555, 3);

        assert_eq!(
            bus.events(),
            [
                BusEvent::Command(0x20),
                BusEvent::Data(5),
                BusEvent::Command(0x21),
                BusEvent::Data(239),
                BusEvent::Command(0x22),
                BusEvent::Data(0xAAAA),
                BusEvent::Repeat(0x5555, 3),
            ]
        );
    }

    #[test]
    fn empty_blit_opens_nothing() {
        let bus = MockBus::with_id4(0x9341);
        let mut lcd = driver(&bus, PORTRAIT);

        assert!(lcd.begin_blit(0, 0, 0, 10).is_none());
        assert!(bus.events().is_empty());
    }
}
