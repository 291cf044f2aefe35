// Copyright 2022 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
/*!
Money amounts and the marketplace fee schedule.

Amounts are exact rationals so the fee breakdown always adds back up to the
listed price. Rounding only happens when an amount is displayed.
*/
use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, Sub};

use num_rational::Ratio;
use serde::{Serialize, Serializer};

/// Price is tax inclusive at 18% GST, so the base price is `price / 1.18`.
pub const GST_DIVISOR: Ratio<i128> = Ratio::new_raw(118, 100);
/// 18%
pub const GST_RATE: Ratio<i128> = Ratio::new_raw(18, 100);
/// Marketplace commission on the base price, 10%.
pub const COMMISSION_RATE: Ratio<i128> = Ratio::new_raw(10, 100);
/// Flat shipping fee of 35.40.
pub const SHIPPING_FEE: Ratio<i128> = Ratio::new_raw(3540, 100);
/// 1.8% of the price.
pub const GATEWAY_RATE: Ratio<i128> = Ratio::new_raw(18, 1000);
/// Flat 0.65 per payment.
pub const GATEWAY_FLAT_FEE: Ratio<i128> = Ratio::new_raw(65, 100);
/// 1%
pub const TCS_RATE: Ratio<i128> = Ratio::new_raw(1, 100);

/// An exact amount of money in the marketplace currency.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Amount(Ratio<i128>);

impl Amount {
    pub fn zero() -> Self {
        Self(Ratio::from_integer(0))
    }

    /// Construct an amount of whole currency units.
    pub fn whole(n: i128) -> Self {
        Self(Ratio::from_integer(n))
    }

    /// Construct an amount from minor units. `Amount::from_cents(4250)` is 42.50.
    pub fn from_cents(cents: i128) -> Self {
        Self(Ratio::new(cents, 100))
    }

    pub fn ratio(&self) -> Ratio<i128> {
        self.0
    }

    /// Round to the nearest minor unit. Half way cases round away from zero.
    pub fn cents(&self) -> i128 {
        (self.0 * Ratio::from_integer(100)).round().to_integer()
    }

    /// Approximate the amount as a float. This will lose precision for
    /// amounts that are not representable in binary.
    pub fn approx_f64(&self) -> f64 {
        *self.0.numer() as f64 / *self.0.denom() as f64
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Ratio::from_integer(0)
    }

    pub fn scale(self, factor: Ratio<i128>) -> Self {
        Self(self.0 * factor)
    }

    pub fn divide(self, divisor: Ratio<i128>) -> Self {
        Self(self.0 / divisor)
    }
}

impl From<Ratio<i128>> for Amount {
    fn from(r: Ratio<i128>) -> Self {
        Self(r)
    }
}

impl From<i128> for Amount {
    fn from(n: i128) -> Self {
        Self::whole(n)
    }
}

macro_rules! amount_op {
    ($trait:ident, $method:ident) => {
        impl $trait for Amount {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Amount($trait::$method(self.0, rhs.0))
            }
        }
    };
}

amount_op!(Add, add);
amount_op!(Sub, sub);

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Display for Amount {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cents = self.cents();
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.abs();
        write!(w, "{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}

// Amounts leave the crate as display strings.
impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The computed split of a listing price into taxes, fees and what the
/// seller keeps.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub price: Amount,
    pub base_price: Amount,
    pub gst: Amount,
    pub commission: Amount,
    pub shipping_fee: Amount,
    pub payment_gateway_fee: Amount,
    pub tcs: Amount,
    pub total_fees: Amount,
    pub net_revenue: Amount,
}

impl FeeBreakdown {
    /// Compute the breakdown for a tax inclusive price.
    ///
    /// Net revenue is not clamped and goes negative once the flat fees
    /// outweigh the price.
    pub fn calculate(price: Amount) -> Self {
        let base_price = price.divide(GST_DIVISOR);
        let gst = base_price.scale(GST_RATE);
        let commission = base_price.scale(COMMISSION_RATE);
        let shipping_fee = Amount::from(SHIPPING_FEE);
        let payment_gateway_fee = price.scale(GATEWAY_RATE) + Amount::from(GATEWAY_FLAT_FEE);
        let tcs = price.scale(TCS_RATE);
        let total_fees = commission + shipping_fee + payment_gateway_fee + tcs;
        let net_revenue = price - total_fees - gst;
        Self {
            price,
            base_price,
            gst,
            commission,
            shipping_fee,
            payment_gateway_fee,
            tcs,
            total_fees,
            net_revenue,
        }
    }

    /// The labeled amounts in the order they are shown to a seller.
    pub fn lines(&self) -> Vec<(&'static str, Amount)> {
        vec![
            ("Net Revenue", self.net_revenue),
            ("GST", self.gst),
            ("Commission", self.commission),
            ("Shipping Fee", self.shipping_fee),
            ("Payment Gateway Fee", self.payment_gateway_fee),
            ("TCS", self.tcs),
        ]
    }
}
