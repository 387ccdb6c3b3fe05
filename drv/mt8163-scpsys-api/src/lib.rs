// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! API crate for the MT8163 SCPSYS power-domain controller.
//!
//! These are the types clients exchange with the controller: domain
//! identifiers, recorded power states, and sequencing errors. The driver
//! itself lives in `drv-mt8163-scpsys`.

#![no_std]

use num_derive::FromPrimitive;

/// Number of power domains the SCPSYS block manages.
pub const NUM_DOMAINS: usize = 8;

/// The MT8163 power domains.
///
/// Discriminants are the domain's index into the hardware descriptor table
/// and are stable: external frameworks may enumerate domains by index for
/// the life of the system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive)]
pub enum Domain {
    Vdec = 0,
    Venc = 1,
    Isp = 2,
    Disp = 3,
    Audio = 4,
    MfgAsync = 5,
    Mfg = 6,
    Conn = 7,
}

impl Domain {
    /// Every domain, in descriptor-table order.
    pub const ALL: [Self; NUM_DOMAINS] = [
        Self::Vdec,
        Self::Venc,
        Self::Isp,
        Self::Disp,
        Self::Audio,
        Self::MfgAsync,
        Self::Mfg,
        Self::Conn,
    ];

    /// The domain's name as it appears in the SoC documentation; used in
    /// diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vdec => "vdec",
            Self::Venc => "venc",
            Self::Isp => "isp",
            Self::Disp => "mm",
            Self::Audio => "audio",
            Self::MfgAsync => "mfg_async",
            Self::Mfg => "mfg",
            Self::Conn => "conn",
        }
    }
}

/// Recorded power state of a domain.
///
/// Domains are binary; there are no partial or retention states. The
/// controller reports the state it last drove the hardware to, not a fresh
/// hardware read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive)]
pub enum PowerState {
    Off = 0,
    On = 1,
}

/// Ways a power-on or power-off sequence can fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive)]
pub enum SeqError {
    /// A domain clock refused to enable. Any clocks that had already been
    /// enabled for the attempt were disabled again before this was returned.
    ClockEnable = 1,
    /// A status or acknowledge poll exceeded its bound. The domain was
    /// rolled back to (or left in) its last recorded state.
    Timeout,
    /// The shared bus-protection controller failed a set or clear; the
    /// operation was aborted.
    BusProtection,
    /// Parent domain not on before powering a child, or a child still on
    /// while powering off its parent. Rejected before any hardware access.
    DependencyViolation,
}

/// A sequencing error together with the domain it occurred on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DomainError {
    pub domain: Domain,
    pub error: SeqError,
}

impl DomainError {
    /// The failing domain's name, for diagnostics.
    pub fn domain_name(&self) -> &'static str {
        self.domain.name()
    }
}
