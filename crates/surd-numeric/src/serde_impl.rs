//! Serde support, enabled by the `serde` feature.
//!
//! Integers travel as decimal strings so that no magnitude is lost in
//! formats with bounded numbers. Fractions and roots are rebuilt through
//! their checked constructors, so a payload can never smuggle in a zero
//! denominator, a zero degree, or an unreduced pair.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::{Fraction, Integer, Root};

impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct FractionRepr {
    numerator: Integer,
    denominator: Integer,
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FractionRepr {
            numerator: self.numerator().clone(),
            denominator: self.denominator().clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = FractionRepr::deserialize(deserializer)?;
        Fraction::try_new(repr.numerator, repr.denominator).map_err(de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct RootRepr {
    degree: Integer,
    radicand: Fraction,
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RootRepr {
            degree: self.degree().clone(),
            radicand: self.radicand().clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Root {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = RootRepr::deserialize(deserializer)?;
        Root::try_new(repr.degree, repr.radicand).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_as_string() {
        let big = Integer::new(7).pow(40);
        let value = serde_json::to_value(&big).unwrap();
        assert_eq!(value, json!(big.to_string()));
        assert_eq!(serde_json::from_value::<Integer>(value).unwrap(), big);
    }

    #[test]
    fn test_fraction_is_recanonicalized() {
        let fraction: Fraction =
            serde_json::from_value(json!({ "numerator": "6", "denominator": "-8" })).unwrap();
        assert_eq!(fraction, Fraction::from_i64(-3, 4));

        let zero = serde_json::from_value::<Fraction>(json!({ "numerator": "1", "denominator": "0" }));
        assert!(zero.is_err());
    }

    #[test]
    fn test_root_is_resimplified() {
        let payload = json!({
            "degree": "2",
            "radicand": { "numerator": "9", "denominator": "4" }
        });
        let root: Root = serde_json::from_value(payload).unwrap();
        assert_eq!(root.try_to_fraction(), Some(Fraction::from_i64(3, 2)));

        let zeroth = json!({
            "degree": "0",
            "radicand": { "numerator": "5", "denominator": "1" }
        });
        assert!(serde_json::from_value::<Root>(zeroth).is_err());
    }
}
