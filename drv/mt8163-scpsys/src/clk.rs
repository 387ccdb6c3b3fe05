// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clock gating for the SCPSYS domains.
//!
//! The clocks belong to an external clock provider; the controller resolves
//! the handles each domain needs by name at construction time and only ever
//! enables and disables them afterward. Each domain owns its handles
//! outright -- nothing here is shared between domains.

use crate::mt8163::MAX_CLKS;

/// Errors from the external clock provider.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockError {
    /// No clock with the requested name exists.
    NotFound,
    /// The clock refused to enable.
    EnableFailed,
}

/// A resolved clock handle, owned by a single power domain.
pub trait Clock {
    fn enable(&mut self) -> Result<(), ClockError>;
    fn disable(&mut self);
}

/// Resolves clock handles by name (`"mm"`, `"mfg"`).
pub trait ClockProvider {
    type Clock: Clock;

    fn clock(&self, name: &str) -> Result<Self::Clock, ClockError>;
}

/// Enables a domain's clocks in declared order.
///
/// If any clock fails to enable, the ones already enabled are disabled
/// again in reverse order before the error is returned, so no partial
/// enablement is observable afterward.
pub(crate) fn enable_all<C: Clock>(
    clks: &mut [Option<C>; MAX_CLKS],
) -> Result<(), ClockError> {
    for i in 0..MAX_CLKS {
        let Some(clk) = clks[i].as_mut() else {
            break;
        };
        if let Err(e) = clk.enable() {
            for j in (0..i).rev() {
                if let Some(clk) = clks[j].as_mut() {
                    clk.disable();
                }
            }
            return Err(e);
        }
    }
    Ok(())
}

/// Disables a domain's clocks in reverse order. Best effort; clock disable
/// does not fail.
pub(crate) fn disable_all<C: Clock>(clks: &mut [Option<C>; MAX_CLKS]) {
    for i in (0..MAX_CLKS).rev() {
        if let Some(clk) = clks[i].as_mut() {
            clk.disable();
        }
    }
}
