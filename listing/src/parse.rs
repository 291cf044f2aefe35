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
use std::str::FromStr;

use abortable_parser::{
    ascii_digit, consume_all, do_each, either, eoi, make_fn, optional, peek, text_token, Result,
    StrIter,
};
use num_rational::Ratio;

use crate::fees::Amount;

/// Most decimal places a price may carry once any exponent is applied.
pub const MAX_FRACTION_DIGITS: i64 = 12;
/// Largest price accepted.
pub const MAX_PRICE: i128 = 1_000_000_000_000;
// Digits before the decimal point in MAX_PRICE.
const MAX_WHOLE_DIGITS: i64 = 13;

pub fn as_price(i: &str) -> std::result::Result<Amount, String> {
    match price(StrIter::new(i)) {
        Result::Abort(e) | Result::Fail(e) => Err(format!("Parse Failure: {:?}", e)),
        Result::Incomplete(_) => Err(format!("Incomplete price can not parse")),
        Result::Complete(_, (whole, frac, exponent)) => amount_from_parts(whole, frac, exponent),
    }
}

fn amount_from_parts(
    whole: &str,
    frac: &str,
    exponent: Option<(bool, &str)>,
) -> std::result::Result<Amount, String> {
    let exponent = match exponent {
        None => 0,
        Some((negative, n)) => {
            let n = i64::from_str(n).map_err(|_| format!("Price exponent {} is out of range", n))?;
            if negative {
                -n
            } else {
                n
            }
        }
    };
    // The price is significand * 10^-scale.
    let mut significand = format!("{}{}", whole, frac);
    let mut scale = (frac.len() as i64).saturating_sub(exponent);
    while significand.ends_with('0') {
        significand.pop();
        scale = scale.saturating_sub(1);
    }
    let significand = significand.trim_start_matches('0');
    if significand.is_empty() {
        return Ok(Amount::zero());
    }
    if scale > MAX_FRACTION_DIGITS {
        return Err(format!(
            "Price can have at most {} decimal places",
            MAX_FRACTION_DIGITS
        ));
    }
    if (significand.len() as i64).saturating_sub(scale) > MAX_WHOLE_DIGITS {
        return Err(format!("Price can not be larger than {}", MAX_PRICE));
    }
    let n = i128::from_str(significand).map_err(|e| format!("{}", e))?;
    let value = if scale >= 0 {
        Ratio::new(n, 10_i128.pow(scale as u32))
    } else {
        Ratio::from_integer(n * 10_i128.pow((-scale) as u32))
    };
    if value > Ratio::from_integer(MAX_PRICE) {
        return Err(format!("Price can not be larger than {}", MAX_PRICE));
    }
    Ok(Amount::from(value))
}

make_fn!(ws<StrIter, &str>,
    do_each!(
        _initial => peek!(either!(
            text_token!(" "),
            text_token!("\t"),
            text_token!("\r"),
            text_token!("\n"))),
        rest => consume_all!(either!(
            text_token!(" "),
            text_token!("\t"),
            text_token!("\r"),
            text_token!("\n"))),
        (rest)
    )
);

make_fn!(digits<StrIter, &str>,
    do_each!(
        _ => peek!(ascii_digit),
        n => consume_all!(ascii_digit),
        (n)
    )
);

make_fn!(
    fraction<StrIter, &str>,
    do_each!(
        _ => text_token!("."),
        n => optional!(digits),
        (n.unwrap_or(""))
    )
);

make_fn!(
    pub decimal<StrIter, (&str, &str)>,
    either!(
        do_each!(
            whole => digits,
            frac => optional!(fraction),
            ((whole, frac.unwrap_or("")))
        ),
        do_each!(
            _ => text_token!("."),
            frac => digits,
            (("", frac))
        )
    )
);

// The exponent and whether it is negative.
make_fn!(
    exponent<StrIter, (bool, &str)>,
    do_each!(
        _ => either!(text_token!("e"), text_token!("E")),
        sign => optional!(either!(text_token!("+"), text_token!("-"))),
        n => digits,
        ((sign == Some("-"), n))
    )
);

make_fn!(
    pub number<StrIter, (&str, &str, Option<(bool, &str)>)>,
    do_each!(
        parts => decimal,
        exp => optional!(exponent),
        ((parts.0, parts.1, exp))
    )
);

make_fn!(
    pub price<StrIter, (&str, &str, Option<(bool, &str)>)>,
    do_each!(
        _ => optional!(ws),
        parts => number,
        _ => optional!(ws),
        _ => eoi,
        (parts)
    )
);
