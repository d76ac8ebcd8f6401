use std::ops::{Deref, DerefMut};

use tracing::debug;

use super::ListAdvancedIndexing;
use crate::capability::Capabilities;
use crate::documents::BaseDocument;
use crate::error::Result;
use crate::value::Value;

/// A list of documents of one type, every element is validated on the way in.
#[derive(Debug, Clone, PartialEq)]
pub struct DocList<D> {
    docs: ListAdvancedIndexing<D>,
}

impl<D: BaseDocument> DocList<D> {
    pub fn new(docs: Vec<D>) -> Self {
        DocList { docs: ListAdvancedIndexing::new(docs) }
    }

    /// Validates every element with [`BaseDocument::validate`], stopping at
    /// the first failure.
    pub fn validate(values: impl IntoIterator<Item = Value>, caps: &Capabilities) -> Result<Self> {
        let docs = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| D::validate(v, caps).map_err(|e| e.in_field(&format!("[{i}]"))))
            .collect::<Result<Vec<_>>>()?;
        debug!(doc = D::NAME, len = docs.len(), "validated document list");
        Ok(Self::new(docs))
    }

    pub fn push_value(&mut self, value: Value, caps: &Capabilities) -> Result<()> {
        let doc = D::validate(value, caps).map_err(|e| e.in_field(&format!("[{}]", self.docs.len())))?;
        self.docs.push(doc);
        Ok(())
    }

    pub fn into_inner(self) -> ListAdvancedIndexing<D> {
        self.docs
    }
}

impl<D> Default for DocList<D> {
    fn default() -> Self {
        DocList { docs: ListAdvancedIndexing::default() }
    }
}

impl<D> Deref for DocList<D> {
    type Target = ListAdvancedIndexing<D>;
    fn deref(&self) -> &Self::Target {
        &self.docs
    }
}

impl<D> DerefMut for DocList<D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.docs
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::array::{Index, Slice};
    use crate::documents::{Audio, Text};
    use crate::error::DocError;
    use crate::typing::AnyTensor;
    use ndarray::Array1;

    fn clips() -> Vec<Value> {
        vec![
            Value::from("a.wav"),
            Value::from(AnyTensor::from(Array1::<f32>::zeros(4))),
            Value::from("c.wav"),
            Value::field("bytes", Value::Bytes(vec![0, 1])),
        ]
    }

    #[test]
    fn validates_every_element() {
        let caps = Capabilities::ndarray_only();
        let docs = DocList::<Audio>::validate(clips(), &caps).unwrap();
        assert_eq!(docs.len(), 4);
        assert!(docs.at(1).unwrap().tensor.is_some());
        assert!(docs.at(-1).unwrap().bytes.is_some());

        let urls = docs.select(Slice::full().step_by(2)).unwrap();
        let urls: Vec<_> = urls.iter().map(|a| a.url.as_ref().unwrap().as_str()).collect();
        assert_eq!(urls, vec!["a.wav", "c.wav"]);
    }

    #[test]
    fn default_is_empty() {
        let caps = Capabilities::ndarray_only();
        let mut docs = DocList::<Audio>::default();
        assert!(docs.is_empty());
        docs.push_value(Value::from("a.wav"), &caps).unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn fails_fast_with_position() {
        let caps = Capabilities::ndarray_only();
        let mut values = clips();
        values.insert(2, Value::Int(7));
        let err = DocList::<Audio>::validate(values, &caps).unwrap_err();
        assert_eq!(err, DocError::conversion("[2]: Audio", "Int"));
    }

    #[test]
    fn indexing_through_deref() {
        let caps = Capabilities::ndarray_only();
        let mut docs = DocList::<Text>::validate(
            ["one", "two", "three", "four", "five"].map(Value::from),
            &caps,
        )
        .unwrap();
        docs.delete(Index::List(vec![1, 3])).unwrap();
        let texts: Vec<_> = docs.iter().map(|t| t.text.clone().unwrap()).collect();
        assert_eq!(texts, vec!["one", "three", "five"]);

        docs.push_value(Value::from("six"), &caps).unwrap();
        assert_eq!(docs.len(), 4);
        let err = docs.push_value(Value::Int(6), &caps).unwrap_err();
        assert_eq!(err, DocError::conversion("[4]: Text", "Int"));
    }
}
