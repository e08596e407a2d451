use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::Array2D;
use crate::value::Element;

// Values are listed in storage (column-major) order.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(rename = "Array2D")]
struct ArrayRepr<T> {
    rows: usize,
    cols: usize,
    values: Vec<T>,
}

impl<T: Element + Serialize> Serialize for Array2D<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ArrayRepr {
            rows: self.rows(),
            cols: self.cols(),
            values: self.to_vec(),
        }
        .serialize(serializer)
    }
}

/// Deserializing always produces a new, unshared buffer.
impl<'de, T: Element + Deserialize<'de>> Deserialize<'de> for Array2D<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ArrayRepr::<T>::deserialize(deserializer)?;
        Array2D::from_shape_vec(repr.rows, repr.cols, repr.values).map_err(de::Error::custom)
    }
}
