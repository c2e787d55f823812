//! Shared test doubles: a recording bus whose delays and backlight changes
//! land in the same event log, so tests can check ordering across all three.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use lcd_fsmc::bus::ParallelBus;
use lcd_fsmc::{BacklightInterface, GraphicsContext, LcdDriver, NoReset, Orientation};

/// One observable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    Command(u16),
    Data(u16),
    Repeat(u16, u32),
    Read(u16),
    FastTiming,
    DelayMs(u32),
    DelayUs(u32),
    DelayNs(u32),
    Backlight(bool),
}

#[derive(Default)]
struct State {
    events: Vec<BusEvent>,
    reads: HashMap<u16, VecDeque<u16>>,
    selected: u16,
}

/// Bus mock that records all traffic. Clones share the same log.
#[derive(Clone, Default)]
pub struct MockBus {
    state: Rc<RefCell<State>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues words returned by reads after `register` was selected.
    pub fn answer(&self, register: u16, words: &[u16]) -> &Self {
        self.state
            .borrow_mut()
            .reads
            .entry(register)
            .or_default()
            .extend(words.iter().copied());
        self
    }

    /// A controller answering `code` on RDID4.
    pub fn with_id4(code: u16) -> Self {
        let bus = Self::new();
        bus.answer(0xD3, &[0x0000, 0x0000, code >> 8, code & 0xFF]);
        bus
    }

    /// A controller answering `code` on the device code register.
    pub fn with_id2(code: u16) -> Self {
        let bus = Self::new();
        bus.answer(0x00, &[code]);
        bus
    }

    /// A controller answering `code` on the Himax ID register.
    pub fn with_tertiary(code: u16) -> Self {
        let bus = Self::new();
        bus.answer(0x67, &[code]);
        bus
    }

    pub fn events(&self) -> Vec<BusEvent> {
        self.state.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.state.borrow_mut().events.clear();
    }

    pub fn commands(&self) -> Vec<u16> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                BusEvent::Command(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    /// Total number of pixels written through repeated writes.
    pub fn repeated_pixels(&self) -> u32 {
        self.events()
            .into_iter()
            .map(|e| match e {
                BusEvent::Repeat(_, n) => n,
                _ => 0,
            })
            .sum()
    }

    /// Delay source that logs into this bus.
    pub fn delay(&self) -> MockDelay {
        MockDelay {
            state: self.state.clone(),
        }
    }

    /// Backlight that logs into this bus.
    pub fn backlight(&self) -> MockBacklight {
        MockBacklight {
            state: self.state.clone(),
        }
    }

    fn push(&self, event: BusEvent) {
        self.state.borrow_mut().events.push(event);
    }
}

impl ParallelBus for MockBus {
    fn write_command(&mut self, index: u16) {
        self.state.borrow_mut().selected = index;
        self.push(BusEvent::Command(index));
    }

    fn write_data(&mut self, value: u16) {
        self.push(BusEvent::Data(value));
    }

    fn write_data_repeated(&mut self, value: u16, count: u32) {
        self.push(BusEvent::Repeat(value, count));
    }

    fn read_data(&mut self) -> u16 {
        let mut state = self.state.borrow_mut();
        let selected = state.selected;
        state.events.push(BusEvent::Read(selected));
        state
            .reads
            .get_mut(&selected)
            .and_then(|q| q.pop_front())
            .unwrap_or(0)
    }

    fn use_fast_write_timing(&mut self) {
        self.push(BusEvent::FastTiming);
    }
}

pub struct MockDelay {
    state: Rc<RefCell<State>>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.state.borrow_mut().events.push(BusEvent::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.state.borrow_mut().events.push(BusEvent::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.state.borrow_mut().events.push(BusEvent::DelayMs(ms));
    }
}

pub struct MockBacklight {
    state: Rc<RefCell<State>>,
}

impl BacklightInterface for MockBacklight {
    type Error = Infallible;

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        self.state.borrow_mut().events.push(BusEvent::Backlight(on));
        Ok(())
    }
}

pub type TestDriver = LcdDriver<MockBus, NoReset, MockBacklight>;

pub const PORTRAIT: GraphicsContext = GraphicsContext::new(240, 320, Orientation::Portrait);
pub const LANDSCAPE: GraphicsContext = GraphicsContext::new(320, 240, Orientation::Landscape);

/// Brings up a driver on `bus` and clears the log.
pub fn driver(bus: &MockBus, context: GraphicsContext) -> TestDriver {
    let mut delay = bus.delay();
    let driver = LcdDriver::new(bus.clone(), NoReset, bus.backlight(), context, &mut delay)
        .unwrap_or_else(|_| panic!("bring-up failed"));
    bus.clear();
    driver
}

/// Splits `events` into (register, data words) groups.
pub fn register_writes(events: &[BusEvent]) -> Vec<(u16, Vec<u16>)> {
    let mut writes: Vec<(u16, Vec<u16>)> = Vec::new();
    for event in events {
        match *event {
            BusEvent::Command(c) => writes.push((c, Vec::new())),
            BusEvent::Data(d) => {
                if let Some(last) = writes.last_mut() {
                    last.1.push(d);
                }
            }
            _ => {}
        }
    }
    writes
}
