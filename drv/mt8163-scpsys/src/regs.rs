// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SPM register map for the MT8163 SCPSYS block, and the access seam the
//! sequencer drives it through.

/// Per-domain power control registers, as byte offsets from the window base.
pub const SPM_VDE_PWR_CON: usize = 0x0210;
pub const SPM_MFG_PWR_CON: usize = 0x0214;
pub const SPM_VEN_PWR_CON: usize = 0x0230;
pub const SPM_ISP_PWR_CON: usize = 0x0238;
pub const SPM_DIS_PWR_CON: usize = 0x023c;
pub const SPM_CONN_PWR_CON: usize = 0x0280;
pub const SPM_AUDIO_PWR_CON: usize = 0x029c;
pub const SPM_MFG_ASYNC_PWR_CON: usize = 0x02c4;

/// Power status registers. The hardware maintains two copies; a domain is
/// only considered on (or off) when both agree.
pub const SPM_PWR_STATUS: usize = 0x060c;
pub const SPM_PWR_STATUS_2ND: usize = 0x0610;

// Control bits, common to every PWR_CON register.

/// Reset deassert (active low reset).
pub const PWR_RST_B: u32 = 1 << 0;
/// I/O isolation.
pub const PWR_ISO: u32 = 1 << 1;
/// Primary power switch.
pub const PWR_ON: u32 = 1 << 2;
/// Secondary power switch; the hardware requires both before acknowledging.
pub const PWR_ON_2ND: u32 = 1 << 3;
/// Domain clock gate.
pub const PWR_CLK_DIS: u32 = 1 << 4;

// Per-domain bits in the PWR_STATUS registers.

pub const PWR_STATUS_CONN: u32 = 1 << 1;
pub const PWR_STATUS_DISP: u32 = 1 << 3;
pub const PWR_STATUS_MFG: u32 = 1 << 4;
pub const PWR_STATUS_ISP: u32 = 1 << 5;
pub const PWR_STATUS_VDEC: u32 = 1 << 7;
pub const PWR_STATUS_VENC: u32 = 1 << 21;
pub const PWR_STATUS_MFG_ASYNC: u32 = 1 << 23;
pub const PWR_STATUS_AUDIO: u32 = 1 << 24;

/// Access to the SCPSYS register window.
///
/// Every call is one ordered 32-bit bus access at a byte offset from the
/// window base: implementations must not cache, merge, or reorder accesses,
/// since each write is a hardware-observed state transition. Offsets are a
/// controller-internal invariant (only constants from this module are ever
/// passed), so an out-of-window offset is a programming error rather than a
/// runtime fault.
///
/// The window must also not tear accesses: a read or write of a single
/// register completes before the next begins. No two domains share a control
/// register, so this is the only serialization the sequencer needs.
pub trait ScpRw {
    /// Reads the register at `offset` bytes from the window base.
    fn read32(&self, offset: usize) -> u32;

    /// Writes the register at `offset` bytes from the window base.
    fn write32(&mut self, offset: usize, value: u32);
}

/// [`ScpRw`] over a memory-mapped register window.
pub struct ScpMmio {
    base: *mut u32,
}

impl ScpMmio {
    /// Wraps the SCPSYS register block mapped at `base`.
    ///
    /// # Safety
    ///
    /// `base` must be the start of the SCPSYS register block, mapped as
    /// device memory, valid for the life of the returned value, and not
    /// accessed through any other path while this window exists.
    pub unsafe fn new(base: *mut u32) -> Self {
        Self { base }
    }
}

impl ScpRw for ScpMmio {
    fn read32(&self, offset: usize) -> u32 {
        // Safety: offset validity is the controller's invariant, see above.
        unsafe {
            core::ptr::read_volatile(
                self.base.cast::<u8>().add(offset).cast::<u32>(),
            )
        }
    }

    fn write32(&mut self, offset: usize, value: u32) {
        // Safety: as for read32.
        unsafe {
            core::ptr::write_volatile(
                self.base.cast::<u8>().add(offset).cast::<u32>(),
                value,
            );
        }
    }
}
