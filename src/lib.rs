//! Typed multimodal documents and list containers with array-style indexing.
//!
//! Loosely typed input arrives as a [`Value`]; documents such as
//! [`documents::Audio`] decide which field a value belongs in and validate it
//! against the backends enabled in a [`Capabilities`] registry.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

pub mod array;
pub mod capability;
pub mod documents;
pub mod error;
pub mod typing;
pub mod value;

pub use array::{DocList, Index, ListAdvancedIndexing, Selection, Slice};
pub use capability::{Backend, BackendConfig, Capabilities, Shape};
pub use documents::{AnyDoc, Audio, BaseDocument, Image, Text, Video};
pub use error::DocError;
pub use typing::{AnyTensor, FieldType};
pub use value::Value;

pub trait Config: Send + Sync {
    fn config(&self) -> String;
    fn load_config(&mut self, config: &str) -> Result<()>;
}

impl<T: Serialize + DeserializeOwned + Send + Sync> Config for T {
    fn config(&self) -> String {
        ron::to_string(self).unwrap_or_default()
    }
    fn load_config(&mut self, config: &str) -> Result<()> {
        *self = ron::from_str(config).context(format!("Failed to load config {}", config))?;
        Ok(())
    }
}
