use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a movie record.
///
/// Any JSON scalar is accepted; two ids are equal when their JSON values are
/// equal, so `1` and `"1"` are different ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(Value);

impl MovieId {
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

macro_rules! movie_id_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MovieId {
                fn from(id: $ty) -> Self {
                    MovieId(Value::from(id))
                }
            }
        )*
    };
}

movie_id_from_integer!(i32, i64, u32, u64);

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        MovieId(Value::from(id))
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        MovieId(Value::from(id))
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

/// Defines movie record data structure.
///
/// Only `id` has meaning to the favorites store; every other field is kept
/// as-is in `details` and written back unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MovieId>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Movie {
    /// Return a record with the given id and title.
    ///
    pub fn new(id: impl Into<MovieId>, title: &str) -> Movie {
        Movie {
            id: Some(id.into()),
            details: Map::new(),
        }
        .with_field("title", title)
    }

    /// Return the record with `key` set to `value`.
    ///
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Movie {
        self.details.insert(key.to_string(), value.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.details.get("title").and_then(Value::as_str)
    }

    /// Return the release year taken from a `release_date` such as
    /// `"1994-09-23"`.
    ///
    pub fn release_year(&self) -> Option<&str> {
        self.details
            .get("release_date")
            .and_then(Value::as_str)
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
    }

    /// Return a single-line label for lists.
    ///
    pub fn display_title(&self) -> String {
        let title = self.title().unwrap_or("(untitled)");
        match self.release_year() {
            Some(year) => format!("{} ({})", title, year),
            None => title.to_string(),
        }
    }
}
