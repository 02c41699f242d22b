//! Test support helpers intended for use by unit and integration tests.
//!
//! `SimulatedField` plays a set of NFC-B listen devices behind the
//! `Transceiver` trait, so anticollision rounds can be driven end to end
//! without scripting every frame. `Shared` lets a test keep a handle on a
//! transceiver after boxing it into a poller.
#![allow(dead_code)]

use std::cell::{Ref, RefCell, RefMut};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::constants::{CMD_SENSB_REQ, CMD_SLPB_REQ, CMD_SLPB_RES, SLPB_REQ_LEN};
use crate::poller::{Initialized, Poller};
use crate::protocol::SensbRes;
use crate::transport::traits::Transceiver;
use crate::types::{BitRate, ErrorHandling, Nfcid0, RfMode, SensCommand};
use crate::{Error, Result};

/// Wire bytes of a standard SENSB_RES for `nfcid0` (ISO-DEP capable).
#[doc(hidden)]
pub fn sensb_res_bytes(nfcid0: [u8; 4]) -> Vec<u8> {
    sensb_res(nfcid0).to_bytes()
}

/// Standard SENSB_RES for `nfcid0` (ISO-DEP capable).
#[doc(hidden)]
pub fn sensb_res(nfcid0: [u8; 4]) -> SensbRes {
    SensbRes::new(
        Nfcid0::from_bytes(nfcid0),
        [0x00, 0x00, 0x00, 0x01],
        [0x00, 0x81, 0x70],
    )
}

/// Create and initialize a Poller backed by `transceiver`.
#[doc(hidden)]
pub fn initialized_poller<T: Transceiver + 'static>(transceiver: T) -> Result<Poller<Initialized>> {
    Poller::new_with_transceiver(Box::new(transceiver)).initialize()
}

/// Shared, clonable handle to a transceiver.
#[derive(Debug, Default)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    /// Wrap `inner`.
    pub fn new(inner: T) -> Self {
        Self(Rc::new(RefCell::new(inner)))
    }

    /// Inspect the wrapped value.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutate the wrapped value, e.g. to queue outcomes.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Transceiver> Transceiver for Shared<T> {
    fn set_mode(&mut self, mode: RfMode, tx_rate: BitRate, rx_rate: BitRate) -> Result<()> {
        self.0.borrow_mut().set_mode(mode, tx_rate, rx_rate)
    }
    fn set_error_handling(&mut self, handling: ErrorHandling) {
        self.0.borrow_mut().set_error_handling(handling)
    }
    fn set_guard_time(&mut self, fc: u32) {
        self.0.borrow_mut().set_guard_time(fc)
    }
    fn set_fdt_listen(&mut self, fc: u32) {
        self.0.borrow_mut().set_fdt_listen(fc)
    }
    fn set_fdt_poll(&mut self, fc: u32) {
        self.0.borrow_mut().set_fdt_poll(fc)
    }
    fn transceive(&mut self, tx: &[u8], max_rx_len: usize, fwt: u32) -> Result<Vec<u8>> {
        self.0.borrow_mut().transceive(tx, max_rx_len, fwt)
    }
}

/// A listen device in the simulated field.
///
/// Slot choices are scripted: every SENSB_REQ/ALLB_REQ the card takes part
/// in consumes the next entry (taken modulo the number of slots). Once the
/// script runs out the card always picks slot 0.
#[derive(Debug, Clone)]
pub struct SimulatedCard {
    sensb_res: SensbRes,
    slots: VecDeque<u8>,
    halted: bool,
    /// Slot the card will answer in for the current request
    pending_slot: Option<u8>,
    mute_sleep: bool,
}

impl SimulatedCard {
    /// Card answering with the default SENSB_RES for `nfcid0`.
    pub fn new(nfcid0: [u8; 4]) -> Self {
        Self::with_sensb_res(sensb_res(nfcid0))
    }

    /// Card answering with `sensb_res`.
    pub fn with_sensb_res(sensb_res: SensbRes) -> Self {
        Self {
            sensb_res,
            slots: VecDeque::new(),
            halted: false,
            pending_slot: None,
            mute_sleep: false,
        }
    }

    /// Script the slot choices of the next requests.
    pub fn with_slots(mut self, slots: &[u8]) -> Self {
        self.slots = slots.iter().copied().collect();
        self
    }

    /// Enter SLEEP on SLPB_REQ but never answer it.
    pub fn mute_sleep(mut self) -> Self {
        self.mute_sleep = true;
        self
    }

    /// PUPI of the card.
    pub fn nfcid0(&self) -> &Nfcid0 {
        self.sensb_res.nfcid0()
    }

    /// True while the card is in SLEEP state.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    fn on_request(&mut self, sens: SensCommand, slot_count: u8) {
        if self.halted {
            if sens != SensCommand::AllbReq {
                self.pending_slot = None;
                return;
            }
            self.halted = false;
        }
        let choice = self.slots.pop_front().unwrap_or(0);
        self.pending_slot = Some(choice % slot_count);
    }

    fn answers_in(&mut self, slot: u8) -> bool {
        if self.pending_slot == Some(slot) {
            self.pending_slot = None;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Default)]
struct FieldState {
    cards: Vec<SimulatedCard>,
    sent: Vec<Vec<u8>>,
    noisy: bool,
}

impl FieldState {
    fn answer(&self, responders: Vec<Vec<u8>>) -> Result<Vec<u8>> {
        match responders.len() {
            0 if self.noisy => Err(Error::Crc),
            0 => Err(Error::Timeout),
            1 => Ok(responders.into_iter().next().unwrap_or_default()),
            _ => Err(Error::Crc),
        }
    }

    fn collect(&mut self, slot: u8) -> Vec<Vec<u8>> {
        self.cards
            .iter_mut()
            .filter_map(|c| c.answers_in(slot).then(|| c.sensb_res.to_bytes()))
            .collect()
    }
}

/// Simulated NFC-B operating field. Clones share the same field.
#[derive(Debug, Clone, Default)]
pub struct SimulatedField {
    state: Rc<RefCell<FieldState>>,
}

impl SimulatedField {
    /// Empty quiet field.
    pub fn new() -> Self {
        Self::default()
    }

    /// A field where silence reads as a garbled reception.
    pub fn noisy() -> Self {
        let field = Self::default();
        field.state.borrow_mut().noisy = true;
        field
    }

    /// Bring a card into the field.
    pub fn insert(&self, card: SimulatedCard) {
        self.state.borrow_mut().cards.push(card);
    }

    /// Every frame transmitted so far.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent.clone()
    }

    /// Snapshot of the cards and their state.
    pub fn cards(&self) -> Vec<SimulatedCard> {
        self.state.borrow().cards.clone()
    }
}

impl Transceiver for SimulatedField {
    fn set_mode(&mut self, _mode: RfMode, _tx_rate: BitRate, _rx_rate: BitRate) -> Result<()> {
        Ok(())
    }

    fn transceive(&mut self, tx: &[u8], _max_rx_len: usize, _fwt: u32) -> Result<Vec<u8>> {
        let mut state = self.state.borrow_mut();
        state.sent.push(tx.to_vec());

        match tx {
            [CMD_SENSB_REQ, _afi, param] => {
                let sens = if param & SensCommand::AllbReq as u8 != 0 {
                    SensCommand::AllbReq
                } else {
                    SensCommand::SensbReq
                };
                let slot_count = 1u8 << (param & 0x07).min(4);
                for card in state.cards.iter_mut() {
                    card.on_request(sens, slot_count);
                }
                let responders = state.collect(0);
                state.answer(responders)
            }
            [marker] if marker & 0x0f == CMD_SENSB_REQ => {
                let slot = match marker >> 4 {
                    0 => 16,
                    n => n,
                };
                let responders = state.collect(slot);
                state.answer(responders)
            }
            [CMD_SLPB_REQ, id @ ..] if tx.len() == SLPB_REQ_LEN => {
                let card = state
                    .cards
                    .iter_mut()
                    .find(|c| !c.halted && c.nfcid0().as_bytes()[..] == id[..]);
                match card {
                    Some(card) => {
                        card.halted = true;
                        card.pending_slot = None;
                        if card.mute_sleep {
                            Err(Error::Timeout)
                        } else {
                            Ok(vec![CMD_SLPB_RES])
                        }
                    }
                    None => Err(Error::Timeout),
                }
            }
            _ => Err(Error::Transceiver(format!(
                "unsupported frame: {}",
                crate::utils::bytes_to_hex_spaced(tx)
            ))),
        }
    }
}
