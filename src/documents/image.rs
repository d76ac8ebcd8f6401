use super::{AnyDoc, BaseDocument, Fields};
use crate::capability::{Capabilities, Shape};
use crate::error::Result;
use crate::typing::{AnyEmbedding, ImageBytes, ImageTensor, ImageUrl};

/// Document for handling images
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    pub url: Option<ImageUrl>,
    pub tensor: Option<ImageTensor>,
    pub embedding: Option<AnyEmbedding>,
    pub bytes: Option<ImageBytes>,
}

impl BaseDocument for Image {
    const NAME: &'static str = "Image";

    fn slot(shape: Shape) -> Option<&'static str> {
        match shape {
            Shape::Locator => Some("url"),
            Shape::Tensor(_) => Some("tensor"),
            Shape::Other => None,
        }
    }

    fn from_fields(fields: &mut Fields, caps: &Capabilities) -> Result<Self> {
        Ok(Image {
            url: fields.take("url", caps)?,
            tensor: fields.take("tensor", caps)?,
            embedding: fields.take("embedding", caps)?,
            bytes: fields.take("bytes", caps)?,
        })
    }

    fn from_doc(doc: AnyDoc) -> std::result::Result<Self, AnyDoc> {
        match doc {
            AnyDoc::Image(im) => Ok(im),
            other => Err(other),
        }
    }
}
