use serde::{
    de::{self, DeserializeOwned, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use serde_json::{Map, Value};
use std::{fmt, marker::PhantomData};

/// Order as submitted to `POST /orders`.
///
/// Every field is optional on the wire. Missing or `null` fields fall back
/// to their zero value; unknown fields are ignored. Decode through
/// [`Object`] to get the lenient key handling of the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,
    #[serde(deserialize_with = "items_from_objects")]
    pub items: Vec<Item>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
}

/// Wrapper that decodes `T` from a JSON object or `null`.
///
/// Derived struct impls also accept the positional array form
/// (`["o1", "c1", ...]`), which is not a valid order, and fail on repeated
/// keys. Here keys are matched case-insensitively and the last occurrence
/// of a key wins. `null` yields `T::default()`.
#[derive(Debug)]
pub struct Object<T>(pub T);

impl<'de, T> Deserialize<'de> for Object<T>
where
    T: DeserializeOwned + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ObjectVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for ObjectVisitor<T>
        where
            T: DeserializeOwned + Default,
        {
            type Value = T;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_unit<E>(self) -> Result<T, E>
            where
                E: de::Error,
            {
                Ok(T::default())
            }

            fn visit_none<E>(self) -> Result<T, E>
            where
                E: de::Error,
            {
                Ok(T::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<T, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Map::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    fields.insert(key.to_lowercase(), value);
                }
                T::deserialize(Value::Object(fields)).map_err(de::Error::custom)
            }
        }

        deserializer
            .deserialize_any(ObjectVisitor(PhantomData))
            .map(Object)
    }
}

fn items_from_objects<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Object<Item>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(|Object(item)| item)
        .collect())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
