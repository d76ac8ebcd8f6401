use super::{AnyDoc, BaseDocument, Fields};
use crate::capability::{Capabilities, Shape};
use crate::error::Result;
use crate::typing::{AnyEmbedding, AudioBytes, AudioTensor, AudioUrl};

/// Document for handling audio.
///
/// Audio can hold an [`AudioUrl`], an [`AudioTensor`] of samples, an
/// embedding and the encoded [`AudioBytes`]. A bare string validates into
/// the url, a bare tensor into the tensor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Audio {
    pub url: Option<AudioUrl>,
    pub tensor: Option<AudioTensor>,
    pub embedding: Option<AnyEmbedding>,
    pub bytes: Option<AudioBytes>,
}

impl BaseDocument for Audio {
    const NAME: &'static str = "Audio";

    fn slot(shape: Shape) -> Option<&'static str> {
        match shape {
            Shape::Locator => Some("url"),
            Shape::Tensor(_) => Some("tensor"),
            Shape::Other => None,
        }
    }

    fn from_fields(fields: &mut Fields, caps: &Capabilities) -> Result<Self> {
        Ok(Audio {
            url: fields.take("url", caps)?,
            tensor: fields.take("tensor", caps)?,
            embedding: fields.take("embedding", caps)?,
            bytes: fields.take("bytes", caps)?,
        })
    }

    fn from_doc(doc: AnyDoc) -> std::result::Result<Self, AnyDoc> {
        match doc {
            AnyDoc::Audio(a) => Ok(a),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::DocError;
    use crate::typing::AnyTensor;
    use crate::value::Value;
    use ndarray::{Array1, Array2};
    use ndarray_rand::RandomExt;
    use rand_distr::Normal;

    #[test]
    fn string_becomes_url() {
        let caps = Capabilities::ndarray_only();
        let audio = Audio::validate(Value::from("http://x/a.wav"), &caps).unwrap();
        assert_eq!(audio.url.as_ref().map(AudioUrl::as_str), Some("http://x/a.wav"));
        assert!(audio.tensor.is_none());
        assert!(audio.embedding.is_none());
        assert!(audio.bytes.is_none());
    }

    #[test]
    fn array_becomes_tensor() {
        let caps = Capabilities::ndarray_only();
        let samples = Array1::random(1024, Normal::new(0.0f32, 1.0).unwrap());
        let audio = Audio::validate(Value::from(AnyTensor::from(samples.clone())), &caps).unwrap();
        assert!(audio.url.is_none());
        let tensor = audio.tensor.unwrap();
        assert_eq!(tensor.as_ndarray(), Some(&samples.into_dyn()));
    }

    #[test]
    fn empty_locator_fails_in_url_field() {
        let caps = Capabilities::ndarray_only();
        let err = Audio::validate(Value::from(""), &caps).unwrap_err();
        assert!(err.is_value());
        assert!(err.to_string().starts_with("url: "));
    }

    #[test]
    fn field_map() {
        let caps = Capabilities::ndarray_only();
        let value = Value::map([
            ("url", Value::from("hello.wav")),
            ("bytes", Value::Bytes(vec![1, 2, 3])),
            ("embedding", Value::List(vec![Value::Float(0.5), Value::Float(-0.5)])),
        ]);
        let audio = Audio::validate(value, &caps).unwrap();
        assert_eq!(audio.url.unwrap().as_str(), "hello.wav");
        assert_eq!(audio.bytes.unwrap().into_inner(), vec![1, 2, 3]);
        assert_eq!(audio.embedding.unwrap().shape(), vec![2]);
    }

    #[test]
    fn unrecognized_shapes_reach_base_validator() {
        let caps = Capabilities::ndarray_only();
        let err = Audio::validate(Value::Int(3), &caps).unwrap_err();
        assert_eq!(err, DocError::conversion("Audio", "Int"));

        // a nested list is not dispatched, only real tensors are
        let err = Audio::validate(Value::List(vec![Value::Float(1.0)]), &caps).unwrap_err();
        assert_eq!(err, DocError::conversion("Audio", "List"));
    }

    #[test]
    fn wrong_field_type_is_reported() {
        let caps = Capabilities::ndarray_only();
        let value = Value::field("tensor", Value::from("not a tensor"));
        let err = Audio::validate(value, &caps).unwrap_err();
        assert_eq!(err, DocError::conversion("tensor: AudioTensor", "Str"));
    }

    #[test]
    fn any_rank_is_fine() {
        let caps = Capabilities::ndarray_only();
        let stereo = Array2::<f32>::zeros((2, 256));
        let audio = Audio::validate(Value::from(AnyTensor::from(stereo)), &caps).unwrap();
        assert_eq!(audio.tensor.unwrap().shape(), vec![2, 256]);
    }

    #[cfg(feature = "nalgebra")]
    #[test]
    fn disabled_backend_is_not_dispatched() {
        let m = nalgebra::DMatrix::<f32>::zeros(2, 8);
        let value = Value::from(AnyTensor::from(m));

        let audio = Audio::validate(value.clone(), &Capabilities::detect()).unwrap();
        assert_eq!(audio.tensor.unwrap().shape(), vec![2, 8]);

        let err = Audio::validate(value, &Capabilities::ndarray_only()).unwrap_err();
        assert_eq!(err, DocError::conversion("Audio", "Tensor<Nalgebra>"));
    }
}
