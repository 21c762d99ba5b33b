use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// The set of devices a customer has selected, with per-device quantities.
///
/// A device is either present with a quantity of at least 1 or absent;
/// setting a quantity of 0 removes the entry, so "quantity 0" and
/// "not selected" are the same state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSelection {
    quantities: BTreeMap<String, u32>,
}

impl DeviceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantity for a device from a raw numeric value.
    ///
    /// Negative values clamp to 0 and fractional values are floored, so the
    /// stored quantity is always `max(0, floor(raw))`. A resulting quantity
    /// of 0 unsets the device. Quantities beyond `u32::MAX` saturate.
    pub fn set_quantity(
        &mut self,
        device: &str,
        raw: Decimal,
    ) {
        let floored = raw.floor().max(Decimal::ZERO);
        let quantity = floored.to_u32().unwrap_or(u32::MAX);

        if quantity == 0 {
            self.quantities.remove(device);
        } else {
            self.quantities.insert(device.to_string(), quantity);
        }
    }

    /// Quantity currently selected for `device` (0 when unselected).
    pub fn quantity(
        &self,
        device: &str,
    ) -> u32 {
        self.quantities.get(device).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Iterates over selected devices and their quantities.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.quantities.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}
