//! Shared serde helpers for reading loosely typed input values.
//!
//! Input records are flat maps of strings, but a YAML author naturally
//! writes `auto-approve: true` or `parallelism: 5` without quotes, and a
//! list option as a YAML sequence. [`InputValue`] accepts all of these
//! and normalizes them to the string form the command engine expects.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};

/// A single input value after normalization.
///
/// - strings are kept as-is
/// - booleans and integers become their display form (`true`, `5`)
/// - floats are rejected, since `10.0` would silently read back as `10`
/// - `null` becomes `None` (the option is unset)
/// - a sequence of scalars is joined with `,`; elements must not contain `,`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InputValue(pub(crate) Option<String>);

impl InputValue {
    pub(crate) fn into_inner(self) -> Option<String> {
        self.0
    }
}

struct InputValueVisitor;

impl<'de> Visitor<'de> for InputValueVisitor {
    type Value = InputValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string, boolean, number, null, or a list of those")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(InputValue(Some(v.to_string())))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(InputValue(Some(v)))
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(InputValue(Some(v.to_string())))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(InputValue(Some(v.to_string())))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(InputValue(Some(v.to_string())))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(float_rejected(v))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(InputValue(None))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(InputValue(None))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<ListItem>()? {
            items.push(item.0);
        }
        Ok(InputValue(Some(items.join(","))))
    }
}

impl<'de> Deserialize<'de> for InputValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(InputValueVisitor)
    }
}

/// One element of a list value. Nested lists, maps and nulls are rejected.
///
/// List values travel as one comma-joined string, so an element holding a
/// `,` would come back out as several flags.
struct ListItem(String);

impl ListItem {
    fn new<E: de::Error>(value: String) -> Result<Self, E> {
        if value.contains(',') {
            return Err(E::custom(format!(
                "list element must not contain ',': {:?}",
                value
            )));
        }
        Ok(ListItem(value))
    }
}

fn float_rejected<E: de::Error>(v: f64) -> E {
    E::custom(format!(
        "floating-point value {} is not supported, quote it as a string",
        v
    ))
}

impl<'de> Deserialize<'de> for ListItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ListItemVisitor;

        impl<'de> Visitor<'de> for ListItemVisitor {
            type Value = ListItem;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string, boolean, or number list element")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                ListItem::new(v.to_string())
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                ListItem::new(v)
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ListItem(v.to_string()))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ListItem(v.to_string()))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ListItem(v.to_string()))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Err(float_rejected(v))
            }
        }

        deserializer.deserialize_any(ListItemVisitor)
    }
}
