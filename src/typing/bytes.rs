use std::ops::Deref;

use crate::capability::Capabilities;
use crate::error::{DocError, Result};
use crate::typing::FieldType;
use crate::value::Value;

// Encoded media, decoding is not done here
macro_rules! bytes_type {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct $name(Vec<u8>);

        impl $name {
            pub fn new(bytes: Vec<u8>) -> Self {
                $name(bytes)
            }

            pub fn into_inner(self) -> Vec<u8> {
                self.0
            }
        }

        impl Deref for $name {
            type Target = [u8];
            fn deref(&self) -> &[u8] {
                &self.0
            }
        }

        impl FieldType for $name {
            const NAME: &'static str = stringify!($name);
            fn validate_field(value: Value, _: &Capabilities) -> Result<Self> {
                match value {
                    Value::Bytes(b) => Ok($name(b)),
                    other => Err(DocError::conversion(Self::NAME, other.describe())),
                }
            }
        }

        impl From<$name> for Value {
            fn from(b: $name) -> Self {
                Value::Bytes(b.0)
            }
        }
    };
}

bytes_type!(AudioBytes);
bytes_type!(VideoBytes);
bytes_type!(ImageBytes);
