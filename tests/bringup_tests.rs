//! Bring-up tests: identification, init playback and the power-on ordering.

mod common;

use common::{BusEvent, LANDSCAPE, MockBus, PORTRAIT, register_writes};
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
use lcd_fsmc::registry::{Controller, Probe, REGISTRY};
use lcd_fsmc::{
    BacklightPin, DriverError, GraphicsContext, LcdDriver, NoBacklight, NoReset, Orientation,
    ResetPin,
};

fn bring_up(bus: &MockBus) -> common::TestDriver {
    let mut delay = bus.delay();
    LcdDriver::new(bus.clone(), NoReset, bus.backlight(), PORTRAIT, &mut delay).unwrap()
}

mod identification_tests {
    use super::*;

    #[test]
    fn every_registry_code_selects_its_descriptor() {
        for descriptor in REGISTRY.iter() {
            for &code in descriptor.codes {
                let bus = match descriptor.probe {
                    Probe::Id4 => MockBus::with_id4(code),
                    Probe::Id2 => MockBus::with_id2(code),
                    Probe::Tertiary => MockBus::with_tertiary(code),
                };
                let driver = bring_up(&bus);
                let device = driver.device().expect("device not recognized");
                assert!(
                    core::ptr::eq(device, descriptor),
                    "code {:#06x} selected {:?}",
                    code,
                    device.controller
                );
            }
        }
    }

    #[test]
    fn id4_is_read_with_two_discarded_words() {
        let bus = MockBus::with_id4(0x9341);
        bring_up(&bus);

        let events = bus.events();
        let first = events
            .iter()
            .position(|e| *e == BusEvent::Command(0xD3))
            .unwrap();
        assert_eq!(
            &events[first..first + 5],
            &[
                BusEvent::Command(0xD3),
                BusEvent::Read(0xD3),
                BusEvent::Read(0xD3),
                BusEvent::Read(0xD3),
                BusEvent::Read(0xD3),
            ]
        );
    }

    #[test]
    fn id4_reply_without_manufacturer_word_is_not_recognized() {
        let bus = MockBus::new();
        bus.answer(0xD3, &[0x0000, 0x0093, 0x0041]);
        let driver = bring_up(&bus);

        assert!(driver.device().is_none());
    }

    #[test]
    fn fast_timing_only_for_mipi_controllers() {
        let bus = MockBus::with_id4(0x7796);
        bring_up(&bus);
        assert!(bus.events().contains(&BusEvent::FastTiming));

        let bus = MockBus::with_id2(0x9325);
        bring_up(&bus);
        assert!(!bus.events().contains(&BusEvent::FastTiming));
    }

    #[test]
    fn unknown_controller_degrades_to_no_device() {
        let bus = MockBus::new();
        let mut driver = bring_up(&bus);

        assert!(driver.device().is_none());
        assert_eq!(bus.commands(), [0xD3, 0x00, 0x67]);
        assert!(!bus.events().contains(&BusEvent::Backlight(true)));

        bus.clear();
        driver.set_pixel(1, 1, 0xFFFF);
        driver.fill_rect(0, 0, 10, 10, 0xFFFF);
        assert_eq!(driver.get_pixel(1, 1), 0);
        assert!(driver.begin_blit(0, 0, 4, 4).is_none());
        assert!(driver.begin_write_at(0, 0).is_none());
        assert!(bus.events().is_empty());
    }
}

mod init_playback_tests {
    use super::*;

    #[test]
    fn ili9341_program_is_replayed_after_fast_timing() {
        let bus = MockBus::with_id4(0x9341);
        bring_up(&bus);
        let events = bus.events();

        let timing = events.iter().position(|e| *e == BusEvent::FastTiming).unwrap();
        assert_eq!(
            &events[timing + 1..timing + 5],
            &[
                BusEvent::Command(0xCF),
                BusEvent::Data(0x00),
                BusEvent::Data(0xC1),
                BusEvent::Data(0x30),
            ]
        );

        let slpout = events.iter().position(|e| *e == BusEvent::Command(0x11)).unwrap();
        assert_eq!(events[slpout + 1], BusEvent::DelayMs(120));
        assert_eq!(events[slpout + 2], BusEvent::Command(0x29));
        assert_eq!(events[slpout + 3], BusEvent::Command(0x36));
        assert_eq!(events[slpout + 4], BusEvent::Data(0x68));
    }

    #[test]
    fn legacy_steps_follow_the_id_probes() {
        let bus = MockBus::with_id2(0x9325);
        bring_up(&bus);
        let writes = register_writes(&bus.events());

        assert_eq!(writes[0].0, 0xD3);
        assert_eq!(writes[1].0, 0x00);
        assert_eq!(writes[2], (0xE7, vec![0x0010]));
        assert_eq!(writes[3], (0x00, vec![0x0001]));
    }
}

mod power_on_ordering_tests {
    use super::*;

    #[test]
    fn backlight_comes_on_after_init_and_settle() {
        let bus = MockBus::with_id2(0x9325);
        bring_up(&bus);
        let events = bus.events();

        assert_eq!(events[0], BusEvent::Backlight(false));
        // NoReset only waits
        assert_eq!(events[1], BusEvent::DelayMs(50));
        assert_eq!(events[2], BusEvent::Command(0xD3));

        let on = events
            .iter()
            .position(|e| *e == BusEvent::Backlight(true))
            .unwrap();
        assert_eq!(events[on - 1], BusEvent::DelayMs(50));

        // full-screen window last, X mirrored
        assert_eq!(
            register_writes(&events[on + 1..]),
            [
                (0x50, vec![0]),
                (0x51, vec![319]),
                (0x52, vec![0]),
                (0x53, vec![239]),
            ]
        );
    }

    #[test]
    fn reset_pin_is_pulsed_low_then_released() {
        let mut reset = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let mut backlight = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let bus = MockBus::with_id4(0x9341);

        let driver = LcdDriver::new(
            bus.clone(),
            ResetPin::new(reset.clone()),
            BacklightPin::new(backlight.clone()),
            LANDSCAPE,
            &mut NoopDelay::new(),
        )
        .unwrap();
        assert_eq!(driver.device().unwrap().controller, Controller::Ili9341);

        reset.done();
        backlight.done();
    }

    #[test]
    fn backlight_stays_off_for_unknown_controller() {
        let mut backlight = PinMock::new(&[PinTransaction::set(PinState::Low)]);

        let driver = LcdDriver::new(
            MockBus::new(),
            NoReset,
            BacklightPin::new(backlight.clone()),
            PORTRAIT,
            &mut NoopDelay::new(),
        )
        .unwrap();
        assert!(driver.device().is_none());

        backlight.done();
    }
}

mod configuration_tests {
    use super::*;

    #[test]
    fn rejects_non_16_bit_contexts() {
        let context = GraphicsContext {
            bits_per_pixel: 8,
            ..PORTRAIT
        };
        let result = LcdDriver::new(
            MockBus::new(),
            NoReset,
            NoBacklight,
            context,
            &mut NoopDelay::new(),
        );
        assert!(matches!(result, Err(DriverError::InvalidConfiguration(_))));
    }

    #[test]
    fn rejects_empty_panels() {
        let context = GraphicsContext::new(0, 320, Orientation::Portrait);
        let bus = MockBus::new();
        let result = LcdDriver::new(bus.clone(), NoReset, NoBacklight, context, &mut NoopDelay::new());
        assert!(matches!(result, Err(DriverError::InvalidConfiguration(_))));
        assert!(bus.events().is_empty());
    }
}
