// libnfcb/src/poller/collision.rs
//! Slotted anticollision for NFC-B.
//!
//! A round walks slot-count classes from an initial to a final class.
//! Each pass of a class sends one SENSB_REQ and opens the remaining slots
//! with SLOT_MARKER. Slots where several devices answered leave a
//! collision pending; the pass is repeated at the same class while it
//! keeps finding devices, otherwise the round moves to the next class.

use log::{debug, trace, warn};

use crate::card::{DeviceList, ListenDevice};
use crate::poller::handle::{Exchange, Initialized, Poller};
use crate::protocol::SensbRes;
use crate::types::{ComplianceMode, SensCommand, SlotCount};
use crate::{Error, Result};

/// Outcome of a slotted anticollision round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Identified devices, in discovery order.
    pub devices: DeviceList,
    /// The last pass still saw a collision the round could not resolve.
    pub collision_pending: bool,
}

/// Per-round bookkeeping.
#[derive(Debug, Default)]
struct Round {
    devices: DeviceList,
    /// Devices identified in the current pass.
    found_in_pass: usize,
    collision_pending: bool,
}

impl Round {
    fn finish(self) -> Resolution {
        Resolution {
            devices: self.devices,
            collision_pending: self.collision_pending,
        }
    }
}

enum Step {
    Continue,
    Done,
}

impl Poller<Initialized> {
    /// Full anticollision round over every slot-count class (1 to 16
    /// slots). Stops once `device_limit` devices are identified.
    ///
    /// ISO rounds started here have no detection to continue from, so the
    /// first pass at one slot reads as a collision and the round polls
    /// again at two slots.
    pub fn collision_resolution(
        &mut self,
        mode: ComplianceMode,
        device_limit: u8,
    ) -> Result<DeviceList> {
        self.slotted_collision_resolution(
            mode,
            device_limit,
            SlotCount::One,
            SlotCount::Sixteen,
            None,
        )
        .map(|r| r.devices)
    }

    /// Anticollision round over the classes `initial..=last`.
    ///
    /// ISO rounds must start at one slot and continue from `detection`,
    /// the response of a preceding single-slot SENSB_REQ (from
    /// `technology_detection` or `check_presence`). `None` or an empty
    /// buffer is evaluated like a garbled reception. EMVCo and NFC Forum
    /// rounds ignore `detection` and open with an ALLB_REQ so sleeping
    /// devices take part again.
    ///
    /// With `device_limit` 0 and a single slot, a collision is returned as
    /// `Error::Collision` instead of being resolved.
    pub fn slotted_collision_resolution(
        &mut self,
        mode: ComplianceMode,
        device_limit: u8,
        initial: SlotCount,
        last: SlotCount,
        detection: Option<&[u8]>,
    ) -> Result<Resolution> {
        if mode == ComplianceMode::Iso && initial != SlotCount::One {
            return Err(Error::InvalidParameter(format!(
                "ISO anticollision must start at 1 slot, not {}",
                initial
            )));
        }
        debug!(
            "{} anticollision: {} to {}, limit {}",
            mode, initial, last, device_limit
        );

        let mut exchange = if mode.wakes_all() {
            let wake = self.presence_exchange(SensCommand::AllbReq, initial);
            if initial == SlotCount::One {
                if let Err(e) = wake.status {
                    return Err(e);
                }
            }
            wake
        } else {
            Exchange::carried(detection.map(<[u8]>::to_vec).unwrap_or_default())
        };

        if mode.requires_wakeup_response() && exchange.response.is_empty() {
            return Err(Error::Framing);
        }

        let mut round = Round::default();
        let mut class = Some(initial);

        while let Some(slots) = class.filter(|s| *s <= last) {
            loop {
                if mode.sleeps_before_repeat() && round.found_in_pass != 0 {
                    self.sleep_last(&mut round.devices);
                }
                if slots != initial || round.collision_pending {
                    exchange = self.presence_exchange(SensCommand::SensbReq, slots);
                }
                round.found_in_pass = 0;
                round.collision_pending = false;

                for slot_code in 0..slots.count() {
                    if slot_code != 0 {
                        exchange = self.slot_marker_exchange(slot_code);
                    }
                    if exchange.timed_out() {
                        continue;
                    }
                    match exchange.identified() {
                        Some(res) => {
                            trace!("slot {}/{}: {}", slot_code, slots.count(), res.nfcid0().to_hex());
                            if let Step::Done =
                                self.on_identified(mode, &mut round, res, device_limit, slots)
                            {
                                return Ok(round.finish());
                            }
                        }
                        None => {
                            if device_limit == 0 && slots == SlotCount::One {
                                return Err(Error::Collision);
                            }
                            trace!("slot {}/{}: collision", slot_code, slots.count());
                            round.collision_pending = true;
                        }
                    }
                }

                if !round.collision_pending {
                    debug!("anticollision done, {} device(s)", round.devices.len());
                    return Ok(round.finish());
                }
                if round.found_in_pass == 0 {
                    break;
                }
                debug!(
                    "collision pending at {}, {} found in pass, repeating",
                    slots, round.found_in_pass
                );
            }
            class = slots.next();
        }

        debug!(
            "slot classes exhausted, {} device(s), collision pending",
            round.devices.len()
        );
        Ok(round.finish())
    }

    fn on_identified(
        &mut self,
        mode: ComplianceMode,
        round: &mut Round,
        res: SensbRes,
        device_limit: u8,
        slots: SlotCount,
    ) -> Step {
        let limit_reached =
            |round: &Round| round.devices.len() >= device_limit as usize || slots == SlotCount::One;

        match mode {
            ComplianceMode::Emv => {
                round.devices.push(ListenDevice::new(res));
                Step::Done
            }
            ComplianceMode::Iso => {
                round.devices.push(ListenDevice::new(res));
                round.found_in_pass += 1;
                if limit_reached(round) {
                    return Step::Done;
                }
                self.sleep_last(&mut round.devices);
                Step::Continue
            }
            ComplianceMode::Nfc => {
                if round.found_in_pass != 0 {
                    self.sleep_last(&mut round.devices);
                }
                round.devices.push(ListenDevice::new(res));
                round.found_in_pass += 1;
                if limit_reached(round) {
                    Step::Done
                } else {
                    Step::Continue
                }
            }
        }
    }

    /// Send SLPB_REQ to the most recently identified device. The device
    /// is recorded as asleep even if its answer was lost.
    fn sleep_last(&mut self, devices: &mut DeviceList) {
        if let Some(device) = devices.last_mut() {
            let nfcid0 = *device.nfcid0();
            if let Err(e) = self.sleep(&nfcid0) {
                warn!("SLPB_REQ to {} failed: {}", nfcid0.to_hex(), e);
            }
            device.mark_sleep();
        }
    }
}
