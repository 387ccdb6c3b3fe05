// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static descriptor table for the MT8163 power domains.
//!
//! This is compiled-in data: the set of domains and their register-level
//! configuration are properties of the silicon, not of anything discovered
//! at runtime. The controller builds one mutable runtime record per entry
//! and indexes both by [`Domain`].

use crate::regs::*;
use drv_mt8163_scpsys_api::{Domain, NUM_DOMAINS};
use drv_mtk_infracfg_api as infracfg;

/// Most clocks any one domain references.
pub const MAX_CLKS: usize = 2;

/// Clocks the domains reference, resolved by name from the external clock
/// provider.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockId {
    Mm,
    Mfg,
}

impl ClockId {
    pub fn name(self) -> &'static str {
        match self {
            Self::Mm => "mm",
            Self::Mfg => "mfg",
        }
    }
}

/// Immutable configuration for one power domain.
pub struct DomainData {
    /// This domain's bit in both PWR_STATUS registers.
    pub sta_mask: u32,
    /// Offset of the domain's PWR_CON control register.
    pub ctl_offs: usize,
    /// SRAM power-down request bits within the control register.
    pub sram_pdn_bits: u32,
    /// SRAM power-down acknowledge bits, 0 if the domain has none.
    pub sram_pdn_ack_bits: u32,
    /// Bus masters to protect across power transitions, 0 if none.
    pub bus_prot_mask: u32,
    /// Clocks to hold enabled while sequencing, in enable order.
    pub clks: &'static [ClockId],
    /// Advisory wakeup flag for the external PM policy; unused here.
    pub active_wakeup: bool,
}

/// The domain table, indexed by `Domain as usize`.
pub const DOMAIN_DATA: [DomainData; NUM_DOMAINS] = [
    // Domain::Vdec
    DomainData {
        sta_mask: PWR_STATUS_VDEC,
        ctl_offs: SPM_VDE_PWR_CON,
        sram_pdn_bits: 0xf << 8,
        sram_pdn_ack_bits: 1 << 12,
        bus_prot_mask: 0,
        clks: &[ClockId::Mm],
        active_wakeup: true,
    },
    // Domain::Venc
    DomainData {
        sta_mask: PWR_STATUS_VENC,
        ctl_offs: SPM_VEN_PWR_CON,
        sram_pdn_bits: 0xf << 8,
        sram_pdn_ack_bits: 0xf << 12,
        bus_prot_mask: 0,
        clks: &[ClockId::Mm],
        active_wakeup: true,
    },
    // Domain::Isp
    DomainData {
        sta_mask: PWR_STATUS_ISP,
        ctl_offs: SPM_ISP_PWR_CON,
        sram_pdn_bits: 0xf << 8,
        sram_pdn_ack_bits: 0x3 << 12,
        bus_prot_mask: 0,
        clks: &[ClockId::Mm],
        active_wakeup: true,
    },
    // Domain::Disp
    DomainData {
        sta_mask: PWR_STATUS_DISP,
        ctl_offs: SPM_DIS_PWR_CON,
        sram_pdn_bits: 0xf << 8,
        sram_pdn_ack_bits: 1 << 12,
        bus_prot_mask: infracfg::TOP_AXI_PROT_EN_MM_M0,
        clks: &[ClockId::Mm],
        active_wakeup: true,
    },
    // Domain::Audio
    DomainData {
        sta_mask: PWR_STATUS_AUDIO,
        ctl_offs: SPM_AUDIO_PWR_CON,
        sram_pdn_bits: 0xf << 8,
        sram_pdn_ack_bits: 0xf << 12,
        bus_prot_mask: 0,
        clks: &[],
        active_wakeup: true,
    },
    // Domain::MfgAsync
    DomainData {
        sta_mask: PWR_STATUS_MFG_ASYNC,
        ctl_offs: SPM_MFG_ASYNC_PWR_CON,
        sram_pdn_bits: 0xf << 8,
        sram_pdn_ack_bits: 0,
        bus_prot_mask: infracfg::TOP_AXI_PROT_EN_MFG_M0
            | infracfg::TOP_AXI_PROT_EN_MFG_SNOOP_OUT,
        clks: &[],
        active_wakeup: false,
    },
    // Domain::Mfg
    DomainData {
        sta_mask: PWR_STATUS_MFG,
        ctl_offs: SPM_MFG_PWR_CON,
        sram_pdn_bits: 0x3f << 8,
        sram_pdn_ack_bits: 1 << 16,
        bus_prot_mask: 0,
        clks: &[ClockId::Mfg],
        active_wakeup: false,
    },
    // Domain::Conn
    DomainData {
        sta_mask: PWR_STATUS_CONN,
        ctl_offs: SPM_CONN_PWR_CON,
        sram_pdn_bits: 1 << 8,
        sram_pdn_ack_bits: 0,
        bus_prot_mask: infracfg::TOP_AXI_PROT_EN_CCI_M2
            | infracfg::TOP_AXI_PROT_EN_CONN2EMI
            | infracfg::TOP_AXI_PROT_EN_CONN2PERI,
        clks: &[],
        active_wakeup: true,
    },
];

/// Parent/child edges: `.0` must be on before `.1` powers on, and `.1` must
/// be off before `.0` powers off. The bus-async domain gates the graphics
/// core; note the table orders the parent first so bulk initialization
/// satisfies the hardware constraint without consulting the graph.
pub const SUBDOMAINS: &[(Domain, Domain)] = &[(Domain::MfgAsync, Domain::Mfg)];

// Table invariants the sequencer relies on: every status mask is nonzero,
// no clock list overflows its slots, and no two domains share a control
// register (which is what lets the window treat per-register serialization
// as sufficient).
const _: () = {
    let mut i = 0;
    while i < NUM_DOMAINS {
        assert!(DOMAIN_DATA[i].sta_mask != 0);
        assert!(DOMAIN_DATA[i].clks.len() <= MAX_CLKS);
        let mut j = i + 1;
        while j < NUM_DOMAINS {
            assert!(DOMAIN_DATA[i].ctl_offs != DOMAIN_DATA[j].ctl_offs);
            j += 1;
        }
        i += 1;
    }
};
