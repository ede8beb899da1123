// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Expansion of item requests into individual space requirements.
//!
//! Every vehicle becomes one [`SpaceUnit`] whose value is its length scaled by
//! a fixed unit width. Units keep the order of the requests they came from and
//! each request's units are contiguous; the packing walk in the solver relies
//! on that order.

use crate::{err::ItemRequestError, item::ItemRequest};
use lot_alloc_core::space::{SpaceArea, SpaceLength};
use std::fmt::Display;

/// Width assumed for every vehicle when turning its length into an area.
pub const DEFAULT_UNIT_WIDTH: SpaceLength = SpaceLength::new(10);

/// The space requirement of one physical vehicle.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpaceUnit(SpaceArea);

impl SpaceUnit {
    #[inline]
    pub const fn new(area: SpaceArea) -> Self {
        SpaceUnit(area)
    }

    #[inline]
    pub const fn area(self) -> SpaceArea {
        self.0
    }
}

impl Display for SpaceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpaceUnit({})", self.0.value())
    }
}

/// The demand sequence of one allocation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Demand {
    units: Vec<SpaceUnit>,
    total_area: SpaceArea,
    unit_width: SpaceLength,
}

struct Validated {
    unit: SpaceUnit,
    count: usize,
}

impl Demand {
    /// Expands `items` using `unit_width` as the per-vehicle width.
    ///
    /// All requests are validated before any unit is produced, so a rejected
    /// sequence never yields a partial demand.
    pub fn expand(items: &[ItemRequest], unit_width: SpaceLength) -> Result<Self, ItemRequestError> {
        let mut validated = Vec::with_capacity(items.len());
        let mut total_area = SpaceArea::zero();
        let mut total_units: usize = 0;

        for (index, item) in items.iter().enumerate() {
            let length = match u64::try_from(item.length()) {
                Ok(v) if v > 0 => SpaceLength::new(v),
                _ => {
                    return Err(ItemRequestError::NonPositiveLength {
                        index,
                        length: item.length(),
                    });
                }
            };
            let quantity = match u64::try_from(item.quantity()) {
                Ok(v) if v > 0 => v,
                _ => {
                    return Err(ItemRequestError::NonPositiveQuantity {
                        index,
                        quantity: item.quantity(),
                    });
                }
            };

            let overflow = ItemRequestError::DemandOverflow { index };
            let unit = length.checked_area(unit_width).ok_or(overflow)?;
            let request_area = unit.checked_mul(quantity).ok_or(overflow)?;
            total_area = total_area.checked_add(request_area).ok_or(overflow)?;
            let count = usize::try_from(quantity).map_err(|_| overflow)?;
            total_units = total_units.checked_add(count).ok_or(overflow)?;

            validated.push(Validated {
                unit: SpaceUnit::new(unit),
                count,
            });
        }

        let mut units = Vec::new();
        units.try_reserve_exact(total_units).map_err(|_| {
            ItemRequestError::DemandOverflow {
                index: items.len().saturating_sub(1),
            }
        })?;
        for v in &validated {
            units.extend(std::iter::repeat_n(v.unit, v.count));
        }

        Ok(Self {
            units,
            total_area,
            unit_width,
        })
    }

    #[inline]
    pub fn units(&self) -> &[SpaceUnit] {
        &self.units
    }

    /// Sum of all unit areas.
    #[inline]
    pub fn total_area(&self) -> SpaceArea {
        self.total_area
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The unit value a space of `length` can hold, using the same width
    /// scaling as the demand. `None` on overflow.
    #[inline]
    pub fn scaled(&self, length: SpaceLength) -> Option<SpaceArea> {
        length.checked_area(self.unit_width)
    }
}

impl Display for Demand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Demand(units: [")?;
        for (i, u) in self.units.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", u.area().value())?;
        }
        write!(f, "], total_area: {})", self.total_area.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas(d: &Demand) -> Vec<u64> {
        d.units().iter().map(|u| u.area().value()).collect()
    }

    #[test]
    fn test_expand_single_item() {
        let d = Demand::expand(&[ItemRequest::new(10, 1)], DEFAULT_UNIT_WIDTH).unwrap();
        assert_eq!(areas(&d), vec![100]);
        assert_eq!(d.total_area(), SpaceArea::new(100));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_expand_preserves_order_and_contiguity() {
        let items = [
            ItemRequest::new(10, 1),
            ItemRequest::new(20, 2),
            ItemRequest::new(25, 1),
        ];
        let d = Demand::expand(&items, DEFAULT_UNIT_WIDTH).unwrap();
        assert_eq!(areas(&d), vec![100, 200, 200, 250]);
        assert_eq!(d.total_area(), SpaceArea::new(750));
    }

    #[test]
    fn test_expand_does_not_sort_or_merge() {
        let items = [
            ItemRequest::new(30, 1),
            ItemRequest::new(10, 2),
            ItemRequest::new(30, 1),
        ];
        let d = Demand::expand(&items, DEFAULT_UNIT_WIDTH).unwrap();
        assert_eq!(areas(&d), vec![300, 100, 100, 300]);
    }

    #[test]
    fn test_expand_empty_items() {
        let d = Demand::expand(&[], DEFAULT_UNIT_WIDTH).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.total_area(), SpaceArea::zero());
    }

    #[test]
    fn test_expand_custom_unit_width() {
        let d = Demand::expand(&[ItemRequest::new(10, 3)], SpaceLength::new(8)).unwrap();
        assert_eq!(areas(&d), vec![80, 80, 80]);
        assert_eq!(d.total_area(), SpaceArea::new(240));
        assert_eq!(d.scaled(SpaceLength::new(12)), Some(SpaceArea::new(96)));
    }

    #[test]
    fn test_expand_rejects_non_positive_length() {
        let items = [ItemRequest::new(10, 1), ItemRequest::new(0, 1)];
        assert_eq!(
            Demand::expand(&items, DEFAULT_UNIT_WIDTH),
            Err(ItemRequestError::NonPositiveLength {
                index: 1,
                length: 0
            })
        );
        let items = [ItemRequest::new(-5, 1)];
        assert!(matches!(
            Demand::expand(&items, DEFAULT_UNIT_WIDTH),
            Err(ItemRequestError::NonPositiveLength { index: 0, .. })
        ));
    }

    #[test]
    fn test_expand_rejects_non_positive_quantity() {
        let items = [ItemRequest::new(10, -2)];
        assert_eq!(
            Demand::expand(&items, DEFAULT_UNIT_WIDTH),
            Err(ItemRequestError::NonPositiveQuantity {
                index: 0,
                quantity: -2
            })
        );
        let items = [ItemRequest::new(10, 0)];
        assert!(Demand::expand(&items, DEFAULT_UNIT_WIDTH).is_err());
    }

    #[test]
    fn test_expand_validates_before_expanding() {
        // A huge valid request followed by an invalid one must fail on the
        // invalid one without allocating the huge one.
        let items = [ItemRequest::new(1, i64::MAX / 100), ItemRequest::new(1, 0)];
        assert!(matches!(
            Demand::expand(&items, DEFAULT_UNIT_WIDTH),
            Err(ItemRequestError::NonPositiveQuantity { index: 1, .. })
        ));
    }

    #[test]
    fn test_expand_reports_area_overflow() {
        let items = [ItemRequest::new(i64::MAX, 1)];
        assert_eq!(
            Demand::expand(&items, DEFAULT_UNIT_WIDTH),
            Err(ItemRequestError::DemandOverflow { index: 0 })
        );
    }

    #[test]
    fn test_demand_display() {
        let d = Demand::expand(&[ItemRequest::new(2, 2)], DEFAULT_UNIT_WIDTH).unwrap();
        assert_eq!(format!("{d}"), "Demand(units: [20, 20], total_area: 40)");
    }
}
