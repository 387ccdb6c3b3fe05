// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Driver for the MT8163 SCPSYS power-domain controller.
//!
//! The SCPSYS block gates power to the SoC's media and connectivity blocks:
//! video decode/encode, image signal processor, display, audio, graphics,
//! and connectivity. Each domain powers on and off through a fixed protocol
//! against its control register -- power switches, clock gate, isolation,
//! reset, SRAM retention -- with bounded waits on the block's two power
//! status registers. The sequencing lives in `seq`, the per-domain
//! configuration in `mt8163`.
//!
//! This driver owns the sequencing only. Deciding *when* a domain should be
//! on (consumer reference counting, idle policy) belongs to whatever
//! framework sits above. That framework drives the controller through
//! [`Scpsys::power_on`] / [`Scpsys::power_off`] and supplies the hardware
//! seams: the register window ([`regs::ScpRw`]), the clock provider
//! ([`clk::ClockProvider`]), the shared bus-protection controller
//! ([`Infracfg`]), and a time source ([`Monotonic`]).

#![cfg_attr(not(test), no_std)]

pub mod clk;
pub mod mt8163;
pub mod regs;
mod seq;

use crate::clk::{Clock, ClockError, ClockProvider};
use crate::mt8163::{DomainData, DOMAIN_DATA, MAX_CLKS};
use crate::regs::ScpRw;
use crate::seq::SeqState;
use drv_mtk_infracfg_api::Infracfg;
use ringlog::Ringlog;

pub use drv_mt8163_scpsys_api::{
    Domain, DomainError, PowerState, SeqError, NUM_DOMAINS,
};
pub use seq::{Monotonic, ACK_TIMEOUT_MS};

/// Side-effect hook a co-located subsystem can hang on a domain's power
/// transitions.
///
/// Called with `true` when a power-on sequence completes, after bus
/// protection is cleared; and with `false` when a power-off sequence
/// begins, before any hardware is touched. The hook is a notification only
/// and holds no state on the domain's behalf.
pub trait PowerStateHook {
    fn power_state_changed(&self, on: bool);
}

/// Controller events, kept in a short ring for diagnostics. Read them back
/// with [`Scpsys::trace`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trace {
    PowerOn(Domain),
    PowerOnFailed(Domain, SeqError),
    PowerOff(Domain),
    PowerOffFailed(Domain, SeqError),
}

/// Entries retained by the controller trace.
pub const TRACE_DEPTH: usize = 32;

/// Runtime state of one domain: its descriptor, its owned clock handles,
/// its sequencing state, and the optional transition hook.
pub(crate) struct PowerDomain<'a, C> {
    pub(crate) data: &'static DomainData,
    pub(crate) clks: [Option<C>; MAX_CLKS],
    pub(crate) state: SeqState,
    pub(crate) hook: Option<&'a dyn PowerStateHook>,
}

/// The SCPSYS power-domain controller.
///
/// Owns the register window and all per-domain runtime state exclusively;
/// the bus-protection controller is shared with other subsystems and only
/// reached through its own [`Infracfg`] interface.
///
/// Every operation runs synchronously on the calling thread and may block
/// for up to [`ACK_TIMEOUT_MS`] per hardware wait. There is no internal
/// locking and no cancellation: `&mut self` serializes operations within a
/// controller, and a transition that has started always runs to completion
/// (success or timeout).
pub struct Scpsys<'a, R, C, I, T> {
    regs: R,
    infracfg: I,
    time: T,
    domains: [PowerDomain<'a, C>; NUM_DOMAINS],
    parents: [Option<Domain>; NUM_DOMAINS],
    trace: Ringlog<Trace, TRACE_DEPTH>,
}

impl<'a, R, C, I, T> Scpsys<'a, R, C, I, T>
where
    R: ScpRw,
    C: Clock,
    I: Infracfg,
    T: Monotonic,
{
    /// Builds the controller: one domain per descriptor-table entry, with
    /// every clock the table names resolved through `clocks`.
    ///
    /// Clock resolution failure is fatal -- there is no such thing as a
    /// partially-usable controller. Domains start in their transient
    /// powering-on state; call [`initialize`] to bring hardware and
    /// recorded state into agreement.
    ///
    /// [`initialize`]: Scpsys::initialize
    pub fn new<P>(
        regs: R,
        clocks: &P,
        infracfg: I,
        time: T,
    ) -> Result<Self, ClockError>
    where
        P: ClockProvider<Clock = C>,
    {
        let mut resolved: [[Option<C>; MAX_CLKS]; NUM_DOMAINS] =
            core::array::from_fn(|_| core::array::from_fn(|_| None));
        for (i, data) in DOMAIN_DATA.iter().enumerate() {
            for (j, id) in data.clks.iter().enumerate() {
                resolved[i][j] = Some(clocks.clock(id.name())?);
            }
        }

        let domains = core::array::from_fn(|i| PowerDomain {
            data: &DOMAIN_DATA[i],
            clks: core::mem::take(&mut resolved[i]),
            state: SeqState::PoweringOn,
            hook: None,
        });

        Ok(Self {
            regs,
            infracfg,
            time,
            domains,
            parents: [None; NUM_DOMAINS],
            trace: Ringlog::DEFAULT,
        })
    }

    /// Forces every domain on once, in table order, then records the
    /// parent/child edges.
    ///
    /// This brings the recorded state and the hardware into agreement at
    /// startup. A domain that fails to come up is recorded in the trace and
    /// skipped -- the remaining domains still initialize, since domains
    /// cannot be withdrawn once exposed to the framework above.
    pub fn initialize(&mut self) {
        for domain in Domain::ALL {
            // Failures land in the trace; nothing more to do here.
            let _ = self.power_on(domain);
        }
        for &(parent, child) in mt8163::SUBDOMAINS {
            self.parents[child as usize] = Some(parent);
        }
    }

    /// Powers `domain` on.
    ///
    /// Fails with `DependencyViolation` before touching any hardware if the
    /// domain's parent is not on. On any failure the domain is recorded
    /// off with all of its clocks disabled.
    pub fn power_on(&mut self, domain: Domain) -> Result<(), DomainError> {
        match self.try_power_on(domain) {
            Ok(()) => {
                self.trace.record(Trace::PowerOn(domain));
                Ok(())
            }
            Err(error) => {
                self.trace.record(Trace::PowerOnFailed(domain, error));
                Err(DomainError { domain, error })
            }
        }
    }

    /// Powers `domain` off.
    ///
    /// Fails with `DependencyViolation` before touching any hardware if any
    /// child of this domain is still on. On any other failure the domain
    /// remains recorded on; the error reports how far the sequence got.
    pub fn power_off(&mut self, domain: Domain) -> Result<(), DomainError> {
        match self.try_power_off(domain) {
            Ok(()) => {
                self.trace.record(Trace::PowerOff(domain));
                Ok(())
            }
            Err(error) => {
                self.trace.record(Trace::PowerOffFailed(domain, error));
                Err(DomainError { domain, error })
            }
        }
    }

    /// Snapshot of the domain's recorded state. This does not read the
    /// hardware; it reports where the last operation landed.
    pub fn power_state(&self, domain: Domain) -> PowerState {
        match self.domains[domain as usize].state {
            SeqState::On => PowerState::On,
            _ => PowerState::Off,
        }
    }

    /// The domain's active-wakeup advisory flag, for the PM policy layer
    /// above. The controller itself never consults it.
    pub fn active_wakeup(&self, domain: Domain) -> bool {
        self.domains[domain as usize].data.active_wakeup
    }

    /// Installs `hook` as the domain's power-transition notification.
    pub fn set_power_hook(
        &mut self,
        domain: Domain,
        hook: &'a dyn PowerStateHook,
    ) {
        self.domains[domain as usize].hook = Some(hook);
    }

    /// Recent controller events, oldest first.
    pub fn trace(&self) -> &Ringlog<Trace, TRACE_DEPTH> {
        &self.trace
    }

    fn try_power_on(&mut self, domain: Domain) -> Result<(), SeqError> {
        let d = domain as usize;
        if let Some(parent) = self.parents[d] {
            if self.domains[parent as usize].state != SeqState::On {
                return Err(SeqError::DependencyViolation);
            }
        }

        let Self { regs, infracfg, time, domains, .. } = self;
        seq::power_on(regs, infracfg, time, &mut domains[d])
    }

    fn try_power_off(&mut self, domain: Domain) -> Result<(), SeqError> {
        let d = domain as usize;
        for i in 0..NUM_DOMAINS {
            if self.parents[i] == Some(domain)
                && self.domains[i].state == SeqState::On
            {
                return Err(SeqError::DependencyViolation);
            }
        }

        let Self { regs, infracfg, time, domains, .. } = self;
        seq::power_off(regs, infracfg, time, &mut domains[d])
    }
}
