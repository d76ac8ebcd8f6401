use std::ops::Deref;

use crate::capability::Capabilities;
use crate::error::Result;
use crate::typing::FieldType;
use crate::value::Value;

mod any_tensor;
pub use any_tensor::AnyTensor;

pub type AnyEmbedding = AnyTensor;

/// Declares a tensor field type wrapping [`AnyTensor`]. The base validator runs
/// first, then the optional shape check on its result.
macro_rules! tensor_type {
    ($(#[$meta:meta])* $name:ident $(, check = $check:path)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(AnyTensor);

        impl $name {
            pub fn validate(value: Value, caps: &Capabilities) -> Result<Self> {
                let tensor = AnyTensor::validate_as(value, caps, stringify!($name))?;
                $( $check(&tensor)?; )?
                Ok($name(tensor))
            }

            pub fn into_inner(self) -> AnyTensor {
                self.0
            }
        }

        impl Deref for $name {
            type Target = AnyTensor;
            fn deref(&self) -> &AnyTensor {
                &self.0
            }
        }

        impl FieldType for $name {
            const NAME: &'static str = stringify!($name);
            fn validate_field(value: Value, caps: &Capabilities) -> Result<Self> {
                Self::validate(value, caps)
            }
        }

        impl From<$name> for Value {
            fn from(t: $name) -> Self {
                Value::Tensor(t.0)
            }
        }
    };
}

mod video;
pub use video::{validate_shape, VideoTensor};

tensor_type!(
    /// A tensor holding audio samples
    AudioTensor
);

tensor_type!(
    /// A tensor holding image pixels
    ImageTensor
);
