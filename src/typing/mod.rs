//! Field types a document can declare, and the trait that turns a raw
//! [`Value`] into one of them.

pub mod bytes;
pub mod tensor;
pub mod url;

pub use bytes::{AudioBytes, ImageBytes, VideoBytes};
pub use tensor::{AnyEmbedding, AnyTensor, AudioTensor, ImageTensor, VideoTensor};
pub use url::{AnyUrl, AudioUrl, ImageUrl, TextUrl, VideoUrl};

use crate::capability::Capabilities;
use crate::error::{DocError, Result};
use crate::value::Value;

/// A type that can be validated out of a raw [`Value`] when a document field
/// of that type is assigned.
pub trait FieldType: Sized {
    /// Name used in conversion errors
    const NAME: &'static str;
    fn validate_field(value: Value, caps: &Capabilities) -> Result<Self>;
}

/// `Null` is an absent field
impl<T: FieldType> FieldType for Option<T> {
    const NAME: &'static str = T::NAME;
    fn validate_field(value: Value, caps: &Capabilities) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            v => T::validate_field(v, caps).map(Some),
        }
    }
}

impl FieldType for String {
    const NAME: &'static str = "String";
    fn validate_field(value: Value, _: &Capabilities) -> Result<Self> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(DocError::conversion(Self::NAME, other.describe())),
        }
    }
}

/// Positions, e.g. key frames of a video
impl FieldType for Vec<usize> {
    const NAME: &'static str = "Vec<usize>";
    fn validate_field(value: Value, _: &Capabilities) -> Result<Self> {
        match value {
            Value::List(xs) => xs
                .into_iter()
                .map(|x| match x {
                    Value::Int(i) if i >= 0 => Ok(i as usize),
                    Value::Int(i) => Err(DocError::value(format!("expected a non negative integer, got {i}"))),
                    other => Err(DocError::conversion("usize", other.describe())),
                })
                .collect(),
            other => Err(DocError::conversion(Self::NAME, other.describe())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn option_maps_null_to_none() {
        let caps = Capabilities::ndarray_only();
        assert_eq!(Option::<String>::validate_field(Value::Null, &caps).unwrap(), None);
        assert_eq!(
            Option::<String>::validate_field(Value::from("hi"), &caps).unwrap(),
            Some("hi".to_string())
        );
        let err = Option::<String>::validate_field(Value::Int(1), &caps).unwrap_err();
        assert_eq!(err, DocError::conversion("String", "Int"));
    }

    #[test]
    fn index_lists() {
        let caps = Capabilities::ndarray_only();
        let xs = Value::List(vec![Value::Int(0), Value::Int(10)]);
        assert_eq!(Vec::<usize>::validate_field(xs, &caps).unwrap(), vec![0, 10]);
        let xs = Value::List(vec![Value::Int(-1)]);
        assert!(Vec::<usize>::validate_field(xs, &caps).unwrap_err().is_value());
    }
}
