use std::collections::BTreeMap;

use crate::documents::AnyDoc;
use crate::typing::AnyTensor;

/// Loosely typed input handed to the validators, before it is converted into
/// a concrete field or document type.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Tensor(AnyTensor),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Doc(AnyDoc),
}

impl Value {
    /// Name of the variant, used in conversion errors
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::Bytes(_) => "Bytes",
            Value::Tensor(_) => "Tensor",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Doc(_) => "Doc",
        }
    }

    /// Like [`kind`](Self::kind) but names the backend of tensors
    pub fn describe(&self) -> String {
        match self {
            Value::Tensor(t) => format!("Tensor<{}>", t.backend()),
            Value::Doc(d) => format!("Doc<{}>", d.name()),
            other => other.kind().to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// A map holding a single field
    pub fn field(name: &str, value: impl Into<Value>) -> Value {
        Value::Map(BTreeMap::from([(name.to_string(), value.into())]))
    }

    /// A map from `(name, value)` pairs
    pub fn map<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Value {
        Value::Map(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Wrap basetype to Value type
macro_rules! from_overloads {
    ($otype:ty, $cast_to:ty, $var:ident) => {
        impl From<$otype> for Value {
            fn from(i: $otype) -> Self {
                Value::$var(i as $cast_to)
            }
        }
    };
}

from_overloads!(i32, i64, Int);
from_overloads!(i64, i64, Int);
from_overloads!(u32, i64, Int);
from_overloads!(f32, f64, Float);
from_overloads!(f64, f64, Float);
from_overloads!(bool, bool, Bool);

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Self {
        Value::Str(s.into())
    }
}

impl From<AnyTensor> for Value {
    fn from(t: AnyTensor) -> Self {
        Value::Tensor(t)
    }
}

impl From<Vec<Value>> for Value {
    fn from(xs: Vec<Value>) -> Self {
        Value::List(xs)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(m: BTreeMap<String, Value>) -> Self {
        Value::Map(m)
    }
}

impl From<AnyDoc> for Value {
    fn from(d: AnyDoc) -> Self {
        Value::Doc(d)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(x: Option<T>) -> Self {
        x.map_or(Value::Null, Into::into)
    }
}
