//! JSON interoperability for [`Value`] and [`Mapping`].
//!
//! JSON integers that fit in an `i64` become `Value::Int`, every other number
//! becomes `Value::Float`. Arrays become caller-supplied `Value::List`s and
//! objects become `Value::Map`s. Going the other way both sequence shapes are
//! rendered as arrays, so the list/conflict distinction is only kept by the
//! serde representation of [`Value`] itself.

use serde_json::Value as Json;

use super::{Value, ValueError};
use crate::maputil::Mapping;

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // as_f64 is always Some without the arbitrary_precision feature
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::Text(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(object) => Value::Map(Mapping::from(object)),
        }
    }
}

impl TryFrom<Value> for Json {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Int(n) => Json::from(n),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(Json::Number)
                .ok_or(ValueError::NotANumber { value: f })?,
            Value::Text(s) => Json::String(s),
            Value::List(items) => sequence_to_json(items)?,
            Value::Conflict(conflict) => sequence_to_json(conflict.into_vec())?,
            Value::Map(map) => Json::try_from(map)?,
        })
    }
}

fn sequence_to_json(items: Vec<Value>) -> Result<Json, ValueError> {
    items
        .into_iter()
        .map(Json::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map(Json::Array)
}

impl From<serde_json::Map<String, Json>> for Mapping {
    fn from(object: serde_json::Map<String, Json>) -> Self {
        object
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect()
    }
}

impl TryFrom<Json> for Mapping {
    type Error = ValueError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        match json {
            Json::Object(object) => Ok(Mapping::from(object)),
            other => Err(ValueError::type_mismatch("map", &Value::from(other))),
        }
    }
}

impl TryFrom<Mapping> for Json {
    type Error = ValueError;

    fn try_from(map: Mapping) -> Result<Self, Self::Error> {
        let mut object = serde_json::Map::with_capacity(map.len());
        for (key, value) in map {
            object.insert(key, Json::try_from(value)?);
        }
        Ok(Json::Object(object))
    }
}

impl Mapping {
    /// Parses a JSON object document into a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialize`] for malformed JSON and
    /// [`ValueError::TypeMismatch`] when the document is not an object.
    ///
    /// ```
    /// # use stockutil::{Mapping, Value};
    /// let map = Mapping::from_json_str(r#"{"name": "First", "age": 2}"#)?;
    /// assert_eq!(map.get("age"), Some(&Value::Int(2)));
    /// # Ok::<(), stockutil::Error>(())
    /// ```
    pub fn from_json_str(input: &str) -> crate::Result<Self> {
        let json: Json = serde_json::from_str(input)?;
        Ok(Mapping::try_from(json)?)
    }

    /// Renders the mapping as a JSON object document.
    pub fn to_json_string(&self) -> crate::Result<String> {
        let json = Json::try_from(self.clone())?;
        Ok(serde_json::to_string(&json)?)
    }
}
