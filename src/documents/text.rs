use super::{AnyDoc, BaseDocument, Fields};
use crate::capability::{Capabilities, Shape};
use crate::error::Result;
use crate::typing::{AnyEmbedding, TextUrl};

/// Document for handling text. Unlike the media documents a bare string is
/// the text itself, not a locator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    pub text: Option<String>,
    pub url: Option<TextUrl>,
    pub embedding: Option<AnyEmbedding>,
}

impl BaseDocument for Text {
    const NAME: &'static str = "Text";

    fn slot(shape: Shape) -> Option<&'static str> {
        match shape {
            Shape::Locator => Some("text"),
            _ => None,
        }
    }

    fn from_fields(fields: &mut Fields, caps: &Capabilities) -> Result<Self> {
        Ok(Text {
            text: fields.take("text", caps)?,
            url: fields.take("url", caps)?,
            embedding: fields.take("embedding", caps)?,
        })
    }

    fn from_doc(doc: AnyDoc) -> std::result::Result<Self, AnyDoc> {
        match doc {
            AnyDoc::Text(t) => Ok(t),
            other => Err(other),
        }
    }
}
