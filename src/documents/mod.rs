//! Documents for each modality.
//!
//! Every document owns a small dispatch table ([`BaseDocument::slot`]) which
//! maps the shape of a raw input to the field it fills, so a bare url or a
//! bare tensor can stand in for a whole document:
//!
//! ```
//! use doc_lib::{Audio, BaseDocument, Capabilities, Value};
//!
//! let caps = Capabilities::detect();
//! let audio = Audio::validate(Value::from("https://example.com/hello.wav"), &caps).unwrap();
//! assert_eq!(audio.url.unwrap().as_str(), "https://example.com/hello.wav");
//! assert!(audio.tensor.is_none());
//! ```

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::capability::{Capabilities, Shape};
use crate::error::{DocError, Result};
use crate::typing::FieldType;
use crate::value::Value;

mod audio;
mod image;
mod text;
mod video;

pub use audio::Audio;
pub use image::Image;
pub use text::Text;
pub use video::Video;

/// The fields of a document being validated, consumed one by one.
pub struct Fields {
    map: BTreeMap<String, Value>,
}

impl Fields {
    pub fn new(map: BTreeMap<String, Value>) -> Self {
        Fields { map }
    }

    /// Removes and validates field `name`, a missing field is `Null`
    pub fn take<T: FieldType>(&mut self, name: &str, caps: &Capabilities) -> Result<T> {
        let value = self.map.remove(name).unwrap_or_default();
        T::validate_field(value, caps).map_err(|e| e.in_field(name))
    }

    /// Names of the fields nobody took
    pub fn remaining(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

pub trait BaseDocument: Sized + Into<AnyDoc> {
    const NAME: &'static str;

    /// The field a raw input of the given shape is placed in, `None` leaves
    /// the input to [`validate_base`](Self::validate_base) untouched.
    fn slot(shape: Shape) -> Option<&'static str>;

    fn from_fields(fields: &mut Fields, caps: &Capabilities) -> Result<Self>;

    /// Unwraps the matching variant, handing back any other document
    fn from_doc(doc: AnyDoc) -> std::result::Result<Self, AnyDoc>;

    fn validate(value: Value, caps: &Capabilities) -> Result<Self> {
        let shape = caps.classify(&value);
        let value = match Self::slot(shape) {
            Some(field) => {
                debug!(doc = Self::NAME, ?shape, field, "dispatching raw input");
                Value::field(field, value)
            }
            None => value,
        };
        Self::validate_base(value, caps)
    }

    /// Builds the document from a map of fields, or passes an existing
    /// document of the same type through.
    fn validate_base(value: Value, caps: &Capabilities) -> Result<Self> {
        match value {
            Value::Map(map) => {
                let mut fields = Fields::new(map);
                let doc = Self::from_fields(&mut fields, caps)?;
                for name in fields.remaining() {
                    warn!(doc = Self::NAME, field = name, "ignoring unknown field");
                }
                Ok(doc)
            }
            Value::Doc(doc) => Self::from_doc(doc)
                .map_err(|other| DocError::conversion(Self::NAME, format!("Doc<{}>", other.name()))),
            other => Err(DocError::conversion(Self::NAME, other.describe())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnyDoc {
    Audio(Audio),
    Video(Video),
    Image(Image),
    Text(Text),
}

impl AnyDoc {
    pub fn name(&self) -> &'static str {
        match self {
            AnyDoc::Audio(_) => <Audio as BaseDocument>::NAME,
            AnyDoc::Video(_) => <Video as BaseDocument>::NAME,
            AnyDoc::Image(_) => <Image as BaseDocument>::NAME,
            AnyDoc::Text(_) => <Text as BaseDocument>::NAME,
        }
    }
}

/// Conversions shared by every document, and nesting a document as a field
/// of another one.
macro_rules! document_overloads {
    ($($doc:ident),*) => {
        $(
            impl From<$doc> for AnyDoc {
                fn from(d: $doc) -> Self {
                    AnyDoc::$doc(d)
                }
            }

            impl From<$doc> for Value {
                fn from(d: $doc) -> Self {
                    Value::Doc(AnyDoc::$doc(d))
                }
            }

            impl FieldType for $doc {
                const NAME: &'static str = <$doc as BaseDocument>::NAME;
                fn validate_field(value: Value, caps: &Capabilities) -> Result<Self> {
                    <$doc as BaseDocument>::validate(value, caps)
                }
            }
        )*
    };
}

document_overloads!(Audio, Video, Image, Text);
