use super::{AnyDoc, Audio, BaseDocument, Fields};
use crate::capability::{Capabilities, Shape};
use crate::error::Result;
use crate::typing::{AnyEmbedding, VideoBytes, VideoTensor, VideoUrl};

/// Document for handling video.
///
/// The tensor must be shaped as frames, see
/// [`validate_shape`](crate::typing::tensor::validate_shape). The sound track
/// is a nested [`Audio`] document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Video {
    pub url: Option<VideoUrl>,
    pub tensor: Option<VideoTensor>,
    pub embedding: Option<AnyEmbedding>,
    pub bytes: Option<VideoBytes>,
    pub audio: Option<Audio>,
    pub key_frame_indices: Option<Vec<usize>>,
}

impl BaseDocument for Video {
    const NAME: &'static str = "Video";

    fn slot(shape: Shape) -> Option<&'static str> {
        match shape {
            Shape::Locator => Some("url"),
            Shape::Tensor(_) => Some("tensor"),
            Shape::Other => None,
        }
    }

    fn from_fields(fields: &mut Fields, caps: &Capabilities) -> Result<Self> {
        Ok(Video {
            url: fields.take("url", caps)?,
            tensor: fields.take("tensor", caps)?,
            embedding: fields.take("embedding", caps)?,
            bytes: fields.take("bytes", caps)?,
            audio: fields.take("audio", caps)?,
            key_frame_indices: fields.take("key_frame_indices", caps)?,
        })
    }

    fn from_doc(doc: AnyDoc) -> std::result::Result<Self, AnyDoc> {
        match doc {
            AnyDoc::Video(v) => Ok(v),
            other => Err(other),
        }
    }
}
