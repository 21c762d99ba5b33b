//! Reference tables: the device price list and the commission brackets.
//!
//! Both tables ship with built-in values and can be replaced wholesale (for
//! example from a CSV file), subject to the validation rules below. The
//! tables are read-only once constructed; interactive state lives in
//! [`crate::session::SalesSession`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Device, DeviceSelection, RevenueClass};

/// Errors raised when constructing a catalog or commission table from
/// untrusted data. The built-in tables never trigger these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("device name must not be empty")]
    EmptyDeviceName,

    #[error("duplicate device '{0}'")]
    DuplicateDevice(String),

    #[error("device '{name}' has non-positive price {price}")]
    NonPositivePrice { name: String, price: Decimal },

    #[error("device '{name}' has negative cost {cost}")]
    NegativeCost { name: String, cost: Decimal },

    #[error("revenue class name must not be empty")]
    EmptyClassName,

    #[error("revenue class '{name}' has min {min} above max {max}")]
    InvertedClassBounds {
        name: String,
        min: Decimal,
        max: Decimal,
    },

    #[error("revenue class '{name}' has negative base commission {base}")]
    NegativeBaseCommission { name: String, base: Decimal },

    #[error("revenue classes '{previous}' and '{name}' overlap or are out of order")]
    OverlappingClasses { previous: String, name: String },
}

/// The ordered, read-only table of sellable devices.
///
/// Order is preserved from construction so listings match the source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCatalog {
    devices: Vec<Device>,
}

impl DeviceCatalog {
    /// The built-in hardware price list.
    pub fn builtin() -> Self {
        let devices = vec![
            Device {
                name: "Dobbelt Screen".to_string(),
                cost: dec!(3800),
                price: dec!(8000),
            },
            Device {
                name: "Single Screen".to_string(),
                cost: dec!(3400),
                price: dec!(6500),
            },
            Device {
                name: "M20".to_string(),
                cost: dec!(1400),
                price: dec!(2500),
            },
            Device {
                name: "Pengeskuffe".to_string(),
                cost: dec!(330),
                price: dec!(1000),
            },
        ];
        Self { devices }
    }

    /// Builds a catalog from an arbitrary device list, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when a device has an empty or duplicate name,
    /// a non-positive price, or a negative cost.
    pub fn from_devices(devices: Vec<Device>) -> Result<Self, CatalogError> {
        for (index, device) in devices.iter().enumerate() {
            if device.name.trim().is_empty() {
                return Err(CatalogError::EmptyDeviceName);
            }
            if devices[..index].iter().any(|d| d.name == device.name) {
                return Err(CatalogError::DuplicateDevice(device.name.clone()));
            }
            if device.price <= Decimal::ZERO {
                return Err(CatalogError::NonPositivePrice {
                    name: device.name.clone(),
                    price: device.price,
                });
            }
            if device.cost < Decimal::ZERO {
                return Err(CatalogError::NegativeCost {
                    name: device.name.clone(),
                    cost: device.cost,
                });
            }
        }
        Ok(Self { devices })
    }

    /// Looks up a device by name.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&Device> {
        self.devices.iter().find(|d| d.name == name)
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.get(name).is_some()
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Total list price of a selection: sum of price × quantity over the
    /// selected devices. Returns 0 for an empty selection. Selected names
    /// that are not in the catalog contribute nothing.
    pub fn total_price(
        &self,
        selection: &DeviceSelection,
    ) -> Decimal {
        selection
            .iter()
            .filter_map(|(name, quantity)| {
                self.get(name).map(|d| d.price * Decimal::from(quantity))
            })
            .sum()
    }
}

/// The built-in commission bracket table.
///
/// Brackets are ordered and non-overlapping over modified monthly revenue.
/// Note the integer bounds: fractional revenue between two brackets (for
/// example 400000.8) matches neither and evaluates to no bracket.
pub fn builtin_revenue_classes() -> Vec<RevenueClass> {
    vec![
        RevenueClass {
            name: "Nova".to_string(),
            min_revenue: dec!(0),
            max_revenue: dec!(400000),
            base_commission: dec!(250),
        },
        RevenueClass {
            name: "Vega".to_string(),
            min_revenue: dec!(400001),
            max_revenue: dec!(800000),
            base_commission: dec!(500),
        },
        RevenueClass {
            name: "Zen".to_string(),
            min_revenue: dec!(800001),
            max_revenue: dec!(1200000),
            base_commission: dec!(1000),
        },
        RevenueClass {
            name: "Alfa".to_string(),
            min_revenue: dec!(1200001),
            max_revenue: dec!(6000000),
            base_commission: dec!(2000),
        },
    ]
}

/// Validates a commission bracket table loaded from untrusted data.
///
/// Each class must have a non-empty name, `min <= max`, a non-negative base
/// commission, and must start strictly above the previous class's maximum.
///
/// # Errors
///
/// Returns the first [`CatalogError`] encountered, in table order.
pub fn validate_revenue_classes(classes: &[RevenueClass]) -> Result<(), CatalogError> {
    let mut previous: Option<&RevenueClass> = None;

    for class in classes {
        if class.name.trim().is_empty() {
            return Err(CatalogError::EmptyClassName);
        }
        if class.min_revenue > class.max_revenue {
            return Err(CatalogError::InvertedClassBounds {
                name: class.name.clone(),
                min: class.min_revenue,
                max: class.max_revenue,
            });
        }
        if class.base_commission < Decimal::ZERO {
            return Err(CatalogError::NegativeBaseCommission {
                name: class.name.clone(),
                base: class.base_commission,
            });
        }
        if let Some(prev) = previous
            && class.min_revenue <= prev.max_revenue
        {
            return Err(CatalogError::OverlappingClasses {
                previous: prev.name.clone(),
                name: class.name.clone(),
            });
        }
        previous = Some(class);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // DeviceCatalog tests
    // =========================================================================

    #[test]
    fn builtin_catalog_has_four_devices() {
        let catalog = DeviceCatalog::builtin();

        assert_eq!(catalog.devices().len(), 4);
    }

    #[test]
    fn builtin_catalog_prices() {
        let catalog = DeviceCatalog::builtin();

        assert_eq!(catalog.get("Dobbelt Screen").unwrap().price, dec!(8000));
        assert_eq!(catalog.get("Single Screen").unwrap().price, dec!(6500));
        assert_eq!(catalog.get("M20").unwrap().price, dec!(2500));
        assert_eq!(catalog.get("Pengeskuffe").unwrap().price, dec!(1000));
    }

    #[test]
    fn builtin_catalog_retains_costs() {
        let catalog = DeviceCatalog::builtin();

        assert_eq!(catalog.get("Dobbelt Screen").unwrap().cost, dec!(3800));
        assert_eq!(catalog.get("Pengeskuffe").unwrap().cost, dec!(330));
    }

    #[test]
    fn get_returns_none_for_unknown_device() {
        let catalog = DeviceCatalog::builtin();

        assert_eq!(catalog.get("Kasseapparat"), None);
    }

    #[test]
    fn total_price_is_linear_over_the_selection() {
        let catalog = DeviceCatalog::builtin();
        let mut selection = DeviceSelection::new();
        selection.set_quantity("Dobbelt Screen", dec!(2));
        selection.set_quantity("Single Screen", dec!(1));

        let total = catalog.total_price(&selection);

        assert_eq!(total, dec!(8000) * dec!(2) + dec!(6500));
    }

    #[test]
    fn total_price_of_empty_selection_is_zero() {
        let catalog = DeviceCatalog::builtin();
        let selection = DeviceSelection::new();

        assert_eq!(catalog.total_price(&selection), Decimal::ZERO);
    }

    #[test]
    fn total_price_skips_names_missing_from_catalog() {
        let catalog = DeviceCatalog::builtin();
        let mut selection = DeviceSelection::new();
        selection.set_quantity("M20", dec!(1));
        selection.set_quantity("Kasseapparat", dec!(5));

        assert_eq!(catalog.total_price(&selection), dec!(2500));
    }

    #[test]
    fn from_devices_rejects_duplicate_names() {
        let device = Device {
            name: "M20".to_string(),
            cost: dec!(1400),
            price: dec!(2500),
        };

        let result = DeviceCatalog::from_devices(vec![device.clone(), device]);

        assert_eq!(result, Err(CatalogError::DuplicateDevice("M20".to_string())));
    }

    #[test]
    fn from_devices_rejects_zero_price() {
        let result = DeviceCatalog::from_devices(vec![Device {
            name: "Gratis".to_string(),
            cost: dec!(0),
            price: dec!(0),
        }]);

        assert_eq!(
            result,
            Err(CatalogError::NonPositivePrice {
                name: "Gratis".to_string(),
                price: dec!(0),
            })
        );
    }

    #[test]
    fn from_devices_rejects_negative_cost() {
        let result = DeviceCatalog::from_devices(vec![Device {
            name: "M20".to_string(),
            cost: dec!(-1),
            price: dec!(2500),
        }]);

        assert_eq!(
            result,
            Err(CatalogError::NegativeCost {
                name: "M20".to_string(),
                cost: dec!(-1),
            })
        );
    }

    #[test]
    fn from_devices_accepts_the_builtin_table() {
        let devices = DeviceCatalog::builtin().devices().to_vec();

        assert!(DeviceCatalog::from_devices(devices).is_ok());
    }

    // =========================================================================
    // Revenue class table tests
    // =========================================================================

    #[test]
    fn builtin_revenue_classes_are_valid() {
        let classes = builtin_revenue_classes();

        assert_eq!(validate_revenue_classes(&classes), Ok(()));
        assert_eq!(classes.len(), 4);
    }

    #[test]
    fn builtin_revenue_classes_cover_expected_ranges() {
        let classes = builtin_revenue_classes();

        assert_eq!(classes[0].name, "Nova");
        assert_eq!(classes[0].max_revenue, dec!(400000));
        assert_eq!(classes[3].name, "Alfa");
        assert_eq!(classes[3].max_revenue, dec!(6000000));
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let classes = vec![RevenueClass {
            name: "Bad".to_string(),
            min_revenue: dec!(100),
            max_revenue: dec!(50),
            base_commission: dec!(10),
        }];

        let result = validate_revenue_classes(&classes);

        assert_eq!(
            result,
            Err(CatalogError::InvertedClassBounds {
                name: "Bad".to_string(),
                min: dec!(100),
                max: dec!(50),
            })
        );
    }

    #[test]
    fn validate_rejects_overlapping_classes() {
        let classes = vec![
            RevenueClass {
                name: "A".to_string(),
                min_revenue: dec!(0),
                max_revenue: dec!(100),
                base_commission: dec!(10),
            },
            RevenueClass {
                name: "B".to_string(),
                min_revenue: dec!(100),
                max_revenue: dec!(200),
                base_commission: dec!(20),
            },
        ];

        let result = validate_revenue_classes(&classes);

        assert_eq!(
            result,
            Err(CatalogError::OverlappingClasses {
                previous: "A".to_string(),
                name: "B".to_string(),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_base_commission() {
        let classes = vec![RevenueClass {
            name: "A".to_string(),
            min_revenue: dec!(0),
            max_revenue: dec!(100),
            base_commission: dec!(-1),
        }];

        assert!(validate_revenue_classes(&classes).is_err());
    }
}
