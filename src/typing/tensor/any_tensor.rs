use ndarray::{prelude::*, Dimension, IxDyn};

#[cfg(feature = "nalgebra")]
use nalgebra::DMatrix;

use crate::capability::{Backend, Capabilities};
use crate::error::{DocError, Result};
use crate::typing::FieldType;
use crate::value::Value;

/// A tensor from any of the supported numeric backends
#[derive(Debug)]
pub enum AnyTensor {
    NdArray(ArrayD<f32>),
    #[cfg(feature = "nalgebra")]
    Nalgebra(DMatrix<f32>),
    #[cfg(feature = "torch")]
    Torch(tch::Tensor),
}

impl AnyTensor {
    pub fn backend(&self) -> Backend {
        match self {
            AnyTensor::NdArray(_) => Backend::NdArray,
            #[cfg(feature = "nalgebra")]
            AnyTensor::Nalgebra(_) => Backend::Nalgebra,
            #[cfg(feature = "torch")]
            AnyTensor::Torch(_) => Backend::Torch,
        }
    }

    pub fn shape(&self) -> Vec<usize> {
        match self {
            AnyTensor::NdArray(a) => a.shape().to_vec(),
            #[cfg(feature = "nalgebra")]
            AnyTensor::Nalgebra(m) => vec![m.nrows(), m.ncols()],
            #[cfg(feature = "torch")]
            AnyTensor::Torch(t) => t.size().into_iter().map(|d| d as usize).collect(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    pub fn as_ndarray(&self) -> Option<&ArrayD<f32>> {
        match self {
            AnyTensor::NdArray(a) => Some(a),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// The base validator shared by every tensor field type.
    ///
    /// Tensors of an available backend are kept as they are, nested lists of
    /// numbers are coerced into an `ndarray` tensor.
    pub fn validate(value: Value, caps: &Capabilities) -> Result<Self> {
        Self::validate_as(value, caps, Self::NAME)
    }

    pub(crate) fn validate_as(value: Value, caps: &Capabilities, target: &str) -> Result<Self> {
        match value {
            Value::Tensor(t) if caps.is_available(t.backend()) => Ok(t),
            v @ (Value::List(_) | Value::Int(_) | Value::Float(_)) => {
                coerce_ndarray(&v, target).map(AnyTensor::NdArray)
            }
            other => Err(DocError::conversion(target, other.describe())),
        }
    }
}

/// Turns nested lists of numbers into an array, the shape is taken from the
/// first element at every depth and every other element must agree with it.
fn coerce_ndarray(value: &Value, target: &str) -> Result<ArrayD<f32>> {
    let mut shape = vec![];
    let mut cur = value;
    while let Value::List(xs) = cur {
        shape.push(xs.len());
        match xs.first() {
            Some(x) => cur = x,
            None => break,
        }
    }

    let mut flat = vec![];
    flatten(value, &shape, 0, target, &mut flat)?;
    ArrayD::from_shape_vec(IxDyn(&shape), flat).map_err(|e| DocError::value(e.to_string()))
}

fn flatten(value: &Value, shape: &[usize], depth: usize, target: &str, out: &mut Vec<f32>) -> Result<()> {
    let ragged = || DocError::value(format!("cannot build {target} from a ragged nested sequence"));
    match value {
        Value::List(xs) => {
            if depth >= shape.len() || xs.len() != shape[depth] {
                return Err(ragged());
            }
            for x in xs {
                flatten(x, shape, depth + 1, target, out)?;
            }
        }
        Value::Int(_) | Value::Float(_) if depth != shape.len() => return Err(ragged()),
        Value::Int(i) => out.push(*i as f32),
        Value::Float(f) => out.push(*f as f32),
        other => return Err(DocError::conversion(target, other.describe())),
    }
    Ok(())
}

impl FieldType for AnyTensor {
    const NAME: &'static str = "AnyTensor";
    fn validate_field(value: Value, caps: &Capabilities) -> Result<Self> {
        Self::validate(value, caps)
    }
}

impl Clone for AnyTensor {
    fn clone(&self) -> Self {
        match self {
            AnyTensor::NdArray(a) => AnyTensor::NdArray(a.clone()),
            #[cfg(feature = "nalgebra")]
            AnyTensor::Nalgebra(m) => AnyTensor::Nalgebra(m.clone()),
            #[cfg(feature = "torch")]
            AnyTensor::Torch(t) => AnyTensor::Torch(t.copy()),
        }
    }
}

/// Tensors of different backends are never equal
impl PartialEq for AnyTensor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AnyTensor::NdArray(a), AnyTensor::NdArray(b)) => a == b,
            #[cfg(feature = "nalgebra")]
            (AnyTensor::Nalgebra(a), AnyTensor::Nalgebra(b)) => a == b,
            #[cfg(feature = "torch")]
            (AnyTensor::Torch(a), AnyTensor::Torch(b)) => a.size() == b.size() && a.equal(b),
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }
}

impl<D: Dimension> From<Array<f32, D>> for AnyTensor {
    fn from(a: Array<f32, D>) -> Self {
        AnyTensor::NdArray(a.into_dyn())
    }
}

#[cfg(feature = "nalgebra")]
impl From<DMatrix<f32>> for AnyTensor {
    fn from(m: DMatrix<f32>) -> Self {
        AnyTensor::Nalgebra(m)
    }
}

#[cfg(feature = "torch")]
impl From<tch::Tensor> for AnyTensor {
    fn from(t: tch::Tensor) -> Self {
        AnyTensor::Torch(t)
    }
}
