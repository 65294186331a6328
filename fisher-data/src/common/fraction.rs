use std::{
    fmt,
    fmt::Display,
    str::FromStr,
};

use anyhow::{
    Context,
    Error,
};
use num::Integer;
use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::{
        SeqAccess,
        Unexpected,
        Visitor,
    },
};

/// A fraction, used for proportional effects such as reviving at half of maximum HP.
///
/// A fraction is deserializable from:
/// - A fraction string (`"1/2"`).
/// - A percentage string (`"50%"`).
/// - An integer (`1`), which has a denominator of 1.
/// - A floating point number (`0.5`), which is converted to a fraction out of 4096.
/// - A two-length array (`[1, 2]`).
///
/// It always serializes as a fraction string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    num: u32,
    den: u32,
}

impl Fraction {
    /// Creates a new fraction.
    ///
    /// A zero denominator is treated as 1.
    pub fn new(num: u32, den: u32) -> Self {
        Self {
            num,
            den: den.max(1),
        }
    }

    /// Creates a new percentage as a fraction.
    pub fn percentage(n: u32) -> Self {
        Self::new(n, 100).simplify()
    }

    /// The numerator of the fraction.
    pub fn numerator(&self) -> u32 {
        self.num
    }

    /// The denominator of the fraction.
    pub fn denominator(&self) -> u32 {
        self.den
    }

    /// Simplifies the fraction.
    pub fn simplify(&self) -> Self {
        let gcd = self.num.gcd(&self.den).max(1);
        Self::new(self.num / gcd, self.den / gcd)
    }

    /// Multiplies the given value by the fraction, rounding down.
    pub fn floor_mul(&self, value: u32) -> u32 {
        ((value as u64 * self.num as u64) / self.den as u64) as u32
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl From<u32> for Fraction {
    fn from(value: u32) -> Self {
        Self::new(value, 1)
    }
}

impl From<f64> for Fraction {
    fn from(value: f64) -> Self {
        Self::new((value * 4096f64).trunc() as u32, 4096).simplify()
    }
}

impl FromStr for Fraction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((n, d)) = s.split_once('/') {
            let n = n
                .trim()
                .parse()
                .with_context(|| format!("invalid numerator: {n}"))?;
            let d: u32 = d
                .trim()
                .parse()
                .with_context(|| format!("invalid denominator: {d}"))?;
            if d == 0 {
                return Err(Error::msg("fraction denominator cannot be zero"));
            }
            Ok(Self::new(n, d))
        } else {
            let s = s.trim();
            match s.strip_suffix('%') {
                Some(percent) => Ok(Self::percentage(
                    percent
                        .trim()
                        .parse()
                        .with_context(|| format!("invalid percentage: {s}"))?,
                )),
                None => Ok(Self::from(
                    s.parse::<u32>()
                        .with_context(|| format!("invalid integer: {s}"))?,
                )),
            }
        }
    }
}

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct FractionVisitor;

impl<'de> Visitor<'de> for FractionVisitor {
    type Value = Fraction;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "a fraction string, percentage string, number, or an array of two integers"
        )
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let v = u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))?;
        Ok(Fraction::from(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let v = u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))?;
        Ok(Fraction::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v < 0f64 {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        Ok(Fraction::from(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Fraction::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let num: u32 = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
        let den: u32 = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
        if den == 0 {
            return Err(serde::de::Error::invalid_value(
                Unexpected::Unsigned(0),
                &self,
            ));
        }
        Ok(Fraction::new(num, den))
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(FractionVisitor)
    }
}
