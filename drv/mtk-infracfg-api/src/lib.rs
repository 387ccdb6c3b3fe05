// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client interface to the MediaTek infracfg bus-protection controller.
//!
//! The infracfg block owns the TOP_AXI protection register, which can block
//! individual bus masters from issuing transactions. Several subsystems
//! share it; the SCPSYS driver only ever asserts protection for a domain's
//! masters before removing the domain's power, and deasserts it after power
//! is back. Whoever owns the actual infracfg hardware implements
//! [`Infracfg`] and hands the handle to the SCPSYS controller.

#![no_std]

use num_derive::FromPrimitive;

/// Errors reported by the protection handshake.
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive)]
pub enum InfracfgError {
    /// The protection-status register did not reach the requested state.
    AckTimeout = 1,
}

/// Operations on the shared bus-protection bitmask.
///
/// Both operations take effect for every master named in `mask` and leave
/// other masters' protection bits alone. When `non_block` is false the call
/// must not return `Ok` until the hardware has acknowledged the new
/// protection state; the SCPSYS driver always passes false.
pub trait Infracfg {
    fn set_bus_protection(
        &mut self,
        mask: u32,
        non_block: bool,
    ) -> Result<(), InfracfgError>;

    fn clear_bus_protection(
        &mut self,
        mask: u32,
        non_block: bool,
    ) -> Result<(), InfracfgError>;
}

// Bus masters gated by TOP_AXI_PROT_EN, as bits in the protection mask.

pub const TOP_AXI_PROT_EN_MM_M0: u32 = 1 << 1;
pub const TOP_AXI_PROT_EN_CONN2EMI: u32 = 1 << 2;
pub const TOP_AXI_PROT_EN_CONN2PERI: u32 = 1 << 8;
pub const TOP_AXI_PROT_EN_CCI_M2: u32 = 1 << 13;
pub const TOP_AXI_PROT_EN_MFG_M0: u32 = 1 << 21;
pub const TOP_AXI_PROT_EN_MFG_SNOOP_OUT: u32 = 1 << 23;
