use std::ops::Deref;

use super::AnyTensor;
use crate::capability::Capabilities;
use crate::error::{DocError, Result};
use crate::typing::FieldType;
use crate::value::Value;

/// A video is either a single frame `(height, width, 3)` or a sequence of
/// frames `(frames, height, width, 3)`.
pub fn validate_shape(tensor: &AnyTensor) -> Result<()> {
    let shape = tensor.shape();
    if !matches!(shape.len(), 3 | 4) || shape.last() != Some(&3) {
        return Err(DocError::value(format!(
            "expects tensor with 3 or 4 dimensions and the last dimension equal to 3, but received {:?}",
            shape
        )));
    }
    Ok(())
}

tensor_type!(
    /// A tensor holding video frames, checked with [`validate_shape`]
    VideoTensor,
    check = validate_shape
);
