// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power-on/power-off sequencing for a single domain.
//!
//! The hardware protocol is a fixed order of bit toggles in the domain's
//! control register interleaved with bounded status waits. Each write is a
//! hardware-observed state transition, so the sequences below thread one
//! cached register value through a series of single-bit edits and write it
//! back at every step -- collapsing or reordering the writes changes what
//! the hardware sees.

use crate::clk::{self, Clock};
use crate::mt8163::DomainData;
use crate::regs::{
    ScpRw, PWR_CLK_DIS, PWR_ISO, PWR_ON, PWR_ON_2ND, PWR_RST_B,
    SPM_PWR_STATUS, SPM_PWR_STATUS_2ND,
};
use crate::PowerDomain;
use drv_mt8163_scpsys_api::SeqError;
use drv_mtk_infracfg_api::Infracfg;

/// Bound on any single status or acknowledge wait.
pub const ACK_TIMEOUT_MS: u64 = 1000;

/// Time source used to bound the polling loops.
///
/// The sequencer busy-waits: it does not sleep, it calls [`relax`] between
/// iterations and keeps going until the condition holds or
/// [`ACK_TIMEOUT_MS`] elapses. Implementations may burn a little time in
/// `relax` to be kinder to the CPU, as long as `now_ms` keeps advancing.
///
/// [`relax`]: Monotonic::relax
pub trait Monotonic {
    /// Milliseconds since an arbitrary epoch. Must not go backwards.
    fn now_ms(&self) -> u64;

    /// Hint that the caller is in a busy-wait loop.
    fn relax(&self) {}
}

/// Sequencing state of one domain.
///
/// `PoweringOn` and `PoweringOff` are transient: every operation resolves
/// them to `On` or `Off` (or an error, which also lands on `On`/`Off`)
/// within the timeout bound. Domains are constructed in `PoweringOn`
/// because initialization force-powers everything exactly once to bring
/// the recorded state and the hardware into agreement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SeqState {
    Off,
    PoweringOn,
    On,
    PoweringOff,
}

/// Samples both copies of the power status register, masked for one domain.
///
/// `Some(true)` means on, `Some(false)` means off. `None` means the copies
/// disagree, which the hardware produces while a transition is settling;
/// callers keep polling rather than treating it as an error.
fn domain_is_on<R: ScpRw>(regs: &R, sta_mask: u32) -> Option<bool> {
    let status = regs.read32(SPM_PWR_STATUS) & sta_mask;
    let status2 = regs.read32(SPM_PWR_STATUS_2ND) & sta_mask;

    match (status != 0, status2 != 0) {
        (true, true) => Some(true),
        (false, false) => Some(false),
        _ => None,
    }
}

/// Polls `done` until it holds, for at most [`ACK_TIMEOUT_MS`].
///
/// The condition always gets one more look after the deadline passes; only
/// a check that begins after expiry was already observed turns into
/// `Timeout`.
fn poll_until<T: Monotonic>(
    time: &T,
    mut done: impl FnMut() -> bool,
) -> Result<(), SeqError> {
    let deadline = time.now_ms().saturating_add(ACK_TIMEOUT_MS);
    let mut expired = false;
    loop {
        if done() {
            return Ok(());
        }
        if expired {
            return Err(SeqError::Timeout);
        }
        time.relax();
        if time.now_ms() > deadline {
            expired = true;
        }
    }
}

/// Powers `dom` on. Caller has already checked the domain graph.
///
/// On failure the domain's clocks are all disabled and its recorded state
/// is `Off`; the hardware is back in (or never left) its powered-down
/// configuration except where the error text says otherwise.
pub(crate) fn power_on<R, C, I, T>(
    regs: &mut R,
    infracfg: &mut I,
    time: &T,
    dom: &mut PowerDomain<'_, C>,
) -> Result<(), SeqError>
where
    R: ScpRw,
    C: Clock,
    I: Infracfg,
    T: Monotonic,
{
    dom.state = SeqState::PoweringOn;

    if clk::enable_all(&mut dom.clks).is_err() {
        // enable_all already unwound whatever it had enabled.
        dom.state = SeqState::Off;
        return Err(SeqError::ClockEnable);
    }

    match power_up(regs, infracfg, time, dom.data) {
        Ok(()) => {
            if let Some(hook) = dom.hook {
                hook.power_state_changed(true);
            }
            dom.state = SeqState::On;
            Ok(())
        }
        Err(e) => {
            clk::disable_all(&mut dom.clks);
            dom.state = SeqState::Off;
            Err(e)
        }
    }
}

fn power_up<R, I, T>(
    regs: &mut R,
    infracfg: &mut I,
    time: &T,
    data: &DomainData,
) -> Result<(), SeqError>
where
    R: ScpRw,
    I: Infracfg,
    T: Monotonic,
{
    let ctl = data.ctl_offs;

    // Raise the two power switches in order; the domain acknowledges only
    // once both are up.
    let mut val = regs.read32(ctl);
    val |= PWR_ON;
    regs.write32(ctl, val);
    val |= PWR_ON_2ND;
    regs.write32(ctl, val);

    // Wait until PWR_ACK = 1.
    poll_until(time, || domain_is_on(&*regs, data.sta_mask) == Some(true))?;

    // Ungate the clock, drop isolation, release reset, then power the
    // domain's SRAM back up.
    val &= !PWR_CLK_DIS;
    regs.write32(ctl, val);
    val &= !PWR_ISO;
    regs.write32(ctl, val);
    val |= PWR_RST_B;
    regs.write32(ctl, val);
    val &= !data.sram_pdn_bits;
    regs.write32(ctl, val);

    // Wait until SRAM_PDN_ACK all 0.
    let pdn_ack = data.sram_pdn_ack_bits;
    if pdn_ack != 0 {
        poll_until(time, || regs.read32(ctl) & pdn_ack == 0)?;
    }

    if data.bus_prot_mask != 0 {
        infracfg
            .clear_bus_protection(data.bus_prot_mask, false)
            .map_err(|_| SeqError::BusProtection)?;
    }

    Ok(())
}

/// Powers `dom` off. Caller has already checked the domain graph.
///
/// On failure the recorded state stays `On`: the hardware may have been
/// left partially powered down, which the returned error reports rather
/// than hides. Nothing here re-powers the domain automatically.
pub(crate) fn power_off<R, C, I, T>(
    regs: &mut R,
    infracfg: &mut I,
    time: &T,
    dom: &mut PowerDomain<'_, C>,
) -> Result<(), SeqError>
where
    R: ScpRw,
    C: Clock,
    I: Infracfg,
    T: Monotonic,
{
    dom.state = SeqState::PoweringOff;

    // Pre-power-down notification, before any hardware is touched.
    if let Some(hook) = dom.hook {
        hook.power_state_changed(false);
    }

    match power_down(regs, infracfg, time, dom.data) {
        Ok(()) => {
            clk::disable_all(&mut dom.clks);
            dom.state = SeqState::Off;
            Ok(())
        }
        Err(e) => {
            dom.state = SeqState::On;
            Err(e)
        }
    }
}

fn power_down<R, I, T>(
    regs: &mut R,
    infracfg: &mut I,
    time: &T,
    data: &DomainData,
) -> Result<(), SeqError>
where
    R: ScpRw,
    I: Infracfg,
    T: Monotonic,
{
    // An unpowered bus master hangs the bus, so protection goes up before
    // anything else. If the handshake fails the domain is left untouched.
    if data.bus_prot_mask != 0 {
        infracfg
            .set_bus_protection(data.bus_prot_mask, false)
            .map_err(|_| SeqError::BusProtection)?;
    }

    let ctl = data.ctl_offs;

    let mut val = regs.read32(ctl);
    val |= data.sram_pdn_bits;
    regs.write32(ctl, val);

    // Wait until SRAM_PDN_ACK all 1.
    let pdn_ack = data.sram_pdn_ack_bits;
    if pdn_ack != 0 {
        poll_until(time, || regs.read32(ctl) & pdn_ack == pdn_ack)?;
    }

    // Isolate, assert reset, gate the clock, then drop the two power
    // switches.
    val |= PWR_ISO;
    regs.write32(ctl, val);
    val &= !PWR_RST_B;
    regs.write32(ctl, val);
    val |= PWR_CLK_DIS;
    regs.write32(ctl, val);
    val &= !PWR_ON;
    regs.write32(ctl, val);
    val &= !PWR_ON_2ND;
    regs.write32(ctl, val);

    // Wait until PWR_ACK = 0.
    poll_until(time, || domain_is_on(&*regs, data.sta_mask) == Some(false))?;

    Ok(())
}
