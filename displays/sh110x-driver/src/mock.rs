//! Host-side bus, delay and provider doubles
//!
//! Every bus operation and delay lands in one shared event log so tests
//! can assert exact transaction order. Handles log `Close` when dropped.

use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal_async::delay::DelayNs;
use sh110x_gfx::{Framebuffer, BUFFER_LEN};
use sh110x_hal::{BusProvider, I2cBus, I2cHandle};

use crate::protocol::{CONTRAST_SEQUENCE, DISPLAY_ON_SEQUENCE, INIT_SEQUENCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open(u8),
    Write(Vec<u8>),
    Read,
    Close,
    Delay(u32),
}

#[derive(Debug, Default)]
pub struct BusState {
    pub events: Vec<Event>,
    /// Status byte returned once `status_script` is empty
    pub status: u8,
    pub status_script: VecDeque<u8>,
    pub fail_open: bool,
    /// Fail the write with this global index (0-based, counting attempts)
    pub fail_write_at: Option<usize>,
    pub fail_reads: bool,
    pub writes: usize,
    pub open: usize,
    pub max_open: usize,
    pub yield_on_write: bool,
}

#[derive(Clone, Default)]
pub struct MockBus {
    state: Rc<RefCell<BusState>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut BusState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    pub fn state(&self) -> Ref<'_, BusState> {
        self.state.borrow()
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.state.borrow_mut().events.clear();
    }

    /// Delay sharing this bus's event log
    pub fn delay(&self) -> MockDelay {
        MockDelay {
            state: self.state.clone(),
        }
    }

    /// Events grouped into open/close sessions
    pub fn sessions(&self) -> Vec<Session> {
        let mut sessions: Vec<Session> = Vec::new();
        for event in self.state.borrow().events.iter() {
            match event {
                Event::Open(address) => sessions.push(Session {
                    address: *address,
                    ..Session::default()
                }),
                Event::Write(bytes) => {
                    if let Some(s) = sessions.last_mut() {
                        s.writes.push(bytes.clone());
                    }
                }
                Event::Read => {
                    if let Some(s) = sessions.last_mut() {
                        s.reads += 1;
                    }
                }
                Event::Close => {
                    if let Some(s) = sessions.last_mut() {
                        s.closed = true;
                    }
                }
                Event::Delay(_) => {}
            }
        }
        sessions
    }

    /// Every complete frame written to the bus, in order
    pub fn frames(&self) -> Vec<Framebuffer> {
        self.sessions().iter().filter_map(Session::frame).collect()
    }
}

impl I2cBus for MockBus {
    type Error = MockError;
    type Handle<'a>
        = MockHandle<'a>
    where
        Self: 'a;

    fn open_handle(&mut self, address: u8) -> Result<MockHandle<'_>, MockError> {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::Open(address));
        if state.fail_open {
            return Err(MockError);
        }
        state.open += 1;
        state.max_open = state.max_open.max(state.open);
        drop(state);
        Ok(MockHandle { bus: self })
    }
}

pub struct MockHandle<'a> {
    bus: &'a MockBus,
}

impl I2cHandle for MockHandle<'_> {
    type Error = MockError;

    async fn write(&mut self, data: &[u8]) -> Result<(), MockError> {
        let yield_first = self.bus.state.borrow().yield_on_write;
        if yield_first {
            embassy_futures::yield_now().await;
        }

        let mut state = self.bus.state.borrow_mut();
        let index = state.writes;
        state.writes += 1;
        if state.fail_write_at == Some(index) {
            return Err(MockError);
        }
        state.events.push(Event::Write(data.to_vec()));
        Ok(())
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<(), MockError> {
        let mut state = self.bus.state.borrow_mut();
        if state.fail_reads {
            return Err(MockError);
        }
        let status = state.status_script.pop_front().unwrap_or(state.status);
        buf.fill(status);
        state.events.push(Event::Read);
        Ok(())
    }
}

impl Drop for MockHandle<'_> {
    fn drop(&mut self) {
        let mut state = self.bus.state.borrow_mut();
        state.open -= 1;
        state.events.push(Event::Close);
    }
}

#[derive(Clone)]
pub struct MockDelay {
    state: Rc<RefCell<BusState>>,
}

impl MockDelay {
    pub fn total_ms(&self) -> u32 {
        self.state
            .borrow()
            .events
            .iter()
            .map(|e| match e {
                Event::Delay(ms) => *ms,
                _ => 0,
            })
            .sum()
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.state
            .borrow_mut()
            .events
            .push(Event::Delay(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.state.borrow_mut().events.push(Event::Delay(ms));
    }
}

/// Provider handing out one shared bus under any known identifier
pub struct MockProvider {
    pub bus: MockBus,
    pub known: Vec<String>,
    pub requested: Vec<String>,
}

impl MockProvider {
    pub fn new(bus: &MockBus, known: &[&str]) -> Self {
        Self {
            bus: bus.clone(),
            known: known.iter().map(|s| s.to_string()).collect(),
            requested: Vec::new(),
        }
    }
}

impl BusProvider for MockProvider {
    type Bus = MockBus;

    fn open_bus(&mut self, identifier: &str) -> Result<MockBus, MockError> {
        self.requested.push(identifier.to_string());
        if self.known.iter().any(|k| k == identifier) {
            Ok(self.bus.clone())
        } else {
            Err(MockError)
        }
    }
}

/// Transactions between one open and its close
#[derive(Debug, Default, Clone)]
pub struct Session {
    pub address: u8,
    pub writes: Vec<Vec<u8>>,
    pub reads: usize,
    pub closed: bool,
}

impl Session {
    pub fn is_probe(&self) -> bool {
        self.writes.is_empty() && self.reads == 1
    }

    pub fn is_init(&self) -> bool {
        self.writes
            == [
                CONTRAST_SEQUENCE.to_vec(),
                INIT_SEQUENCE.to_vec(),
                DISPLAY_ON_SEQUENCE.to_vec(),
            ]
    }

    /// Rebuild the framebuffer from a complete 16-page commit
    pub fn frame(&self) -> Option<Framebuffer> {
        if self.writes.len() != 16 * 4 {
            return None;
        }
        let mut bytes = Vec::with_capacity(BUFFER_LEN);
        for (page, w) in self.writes.chunks(4).enumerate() {
            if w[0] != [0x00, 0xB0 + page as u8, 0x10, 0x00] {
                return None;
            }
            for chunk in &w[1..] {
                if chunk.first() != Some(&0x40) {
                    return None;
                }
                bytes.extend_from_slice(&chunk[1..]);
            }
        }
        (bytes.len() == BUFFER_LEN).then(|| Framebuffer::from_bytes(&bytes))
    }
}
