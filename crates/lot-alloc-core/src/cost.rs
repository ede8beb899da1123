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

use num_traits::CheckedAdd;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, ops::Add};

/// A monetary amount in the smallest currency unit (cents).
#[repr(transparent)]
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cost<T>(T);

impl<T: Copy> Cost<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Cost(value)
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    #[inline]
    pub fn checked_add(self, other: Cost<T>) -> Option<Self>
    where
        T: CheckedAdd<Output = T>,
    {
        self.0.checked_add(&other.0).map(Cost)
    }
}

impl<T: Copy + Display> Display for Cost<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cost({})", self.0)
    }
}

impl<T> From<T> for Cost<T> {
    #[inline]
    fn from(value: T) -> Self {
        Cost(value)
    }
}

impl<T> Add for Cost<T>
where
    T: Copy + CheckedAdd<Output = T>,
{
    type Output = Cost<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Cost(self.0.checked_add(&rhs.0).expect("overflow in Cost + Cost"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_creation_and_value() {
        let c = Cost::new(500u64);
        assert_eq!(c.value(), 500);
        assert_eq!(Cost::<u64>::from(7).value(), 7);
    }

    #[test]
    fn test_cost_display() {
        assert_eq!(format!("{}", Cost::new(300u64)), "Cost(300)");
    }

    #[test]
    fn test_cost_add() {
        let c = Cost::new(100u64) + Cost::new(50) + Cost::new(25);
        assert_eq!(c.value(), 175);
    }

    #[test]
    fn test_cost_checked_add_overflow() {
        assert_eq!(Cost::new(u64::MAX).checked_add(Cost::new(1)), None);
        assert_eq!(
            Cost::new(1u64).checked_add(Cost::new(2)),
            Some(Cost::new(3))
        );
    }

    #[test]
    fn test_cost_ordering() {
        assert!(Cost::new(1u64) < Cost::new(2u64));
    }

    #[test]
    fn test_cost_serde_is_transparent() {
        let json = serde_json::to_string(&Cost::new(1234u64)).unwrap();
        assert_eq!(json, "1234");
        let back: Cost<u64> = serde_json::from_str("99").unwrap();
        assert_eq!(back, Cost::new(99));
    }

    #[test]
    #[should_panic(expected = "overflow in Cost + Cost")]
    fn test_cost_add_panic_on_overflow() {
        let _ = Cost::new(u64::MAX) + Cost::new(1);
    }
}
