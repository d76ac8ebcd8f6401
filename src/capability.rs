//! Process wide registry of the numeric backends a validator may match.
//!
//! `ndarray` is always available; `nalgebra` and `tch` are optional cargo
//! features. A registry can further disable compiled backends through a
//! [`BackendConfig`], but it can never enable one that was not compiled in.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::debug;

use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Backend {
    NdArray,
    Nalgebra,
    Torch,
}

impl Backend {
    /// Whether the backend was compiled into this build
    pub fn compiled(self) -> bool {
        match self {
            Backend::NdArray => true,
            Backend::Nalgebra => cfg!(feature = "nalgebra"),
            Backend::Torch => cfg!(feature = "torch"),
        }
    }
}

/// The discriminator computed once per raw input before dispatching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A string, interpreted as a resource locator
    Locator,
    /// A tensor from an available backend
    Tensor(Backend),
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub disabled: Vec<Backend>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    nalgebra: bool,
    torch: bool,
}

static GLOBAL: OnceLock<Capabilities> = OnceLock::new();

impl Capabilities {
    /// Every compiled backend is available
    pub fn detect() -> Self {
        let caps = Capabilities {
            nalgebra: Backend::Nalgebra.compiled(),
            torch: Backend::Torch.compiled(),
        };
        debug!(?caps, "detected numeric backends");
        caps
    }

    /// Only the `ndarray` backend is available
    pub fn ndarray_only() -> Self {
        Capabilities { nalgebra: false, torch: false }
    }

    /// The registry detected on first use, shared by the whole process.
    pub fn global() -> &'static Capabilities {
        GLOBAL.get_or_init(Capabilities::detect)
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        let mut caps = Capabilities::detect();
        for backend in &config.disabled {
            caps = caps.without(*backend);
        }
        caps
    }

    /// Disables `backend`, `ndarray` cannot be disabled.
    pub fn without(mut self, backend: Backend) -> Self {
        match backend {
            Backend::NdArray => debug!("ndarray backend cannot be disabled"),
            Backend::Nalgebra => self.nalgebra = false,
            Backend::Torch => self.torch = false,
        }
        self
    }

    pub fn is_available(&self, backend: Backend) -> bool {
        match backend {
            Backend::NdArray => true,
            Backend::Nalgebra => self.nalgebra,
            Backend::Torch => self.torch,
        }
    }

    pub fn available(&self) -> Vec<Backend> {
        Backend::iter().filter(|b| self.is_available(*b)).collect()
    }

    pub fn classify(&self, value: &Value) -> Shape {
        match value {
            Value::Str(_) => Shape::Locator,
            Value::Tensor(t) if self.is_available(t.backend()) => Shape::Tensor(t.backend()),
            _ => Shape::Other,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        *Capabilities::global()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Config;
    use crate::typing::AnyTensor;
    use ndarray::ArrayD;

    #[test]
    fn ndarray_always_available() {
        assert!(Capabilities::ndarray_only().is_available(Backend::NdArray));
        assert!(Capabilities::detect().without(Backend::NdArray).is_available(Backend::NdArray));
        assert_eq!(Capabilities::ndarray_only().available(), vec![Backend::NdArray]);
    }

    #[test]
    fn detect_follows_features() {
        let caps = Capabilities::detect();
        for backend in Backend::iter() {
            assert_eq!(caps.is_available(backend), backend.compiled());
        }
        assert_eq!(Capabilities::global(), &caps);
    }

    #[test]
    fn config_disables_backends() {
        let mut config = BackendConfig::default();
        config.load_config("(disabled: [Nalgebra, Torch])").unwrap();
        assert_eq!(config.disabled, vec![Backend::Nalgebra, Backend::Torch]);

        let caps = Capabilities::from_config(&config);
        assert_eq!(caps, Capabilities::ndarray_only());
        assert!(config.load_config("(disabled: [Tensorflow])").is_err());
    }

    #[test]
    fn classify_inputs() {
        let caps = Capabilities::ndarray_only();
        assert_eq!(caps.classify(&Value::from("http://x/a.wav")), Shape::Locator);
        let t = AnyTensor::from(ArrayD::<f32>::zeros(vec![2, 2]));
        assert_eq!(caps.classify(&Value::from(t)), Shape::Tensor(Backend::NdArray));
        assert_eq!(caps.classify(&Value::Int(3)), Shape::Other);
        assert_eq!(caps.classify(&Value::Null), Shape::Other);
    }

    #[cfg(feature = "nalgebra")]
    #[test]
    fn disabled_backend_is_not_a_tensor() {
        let m = nalgebra::DMatrix::<f32>::zeros(2, 3);
        let value = Value::from(AnyTensor::from(m));
        assert_eq!(Capabilities::detect().classify(&value), Shape::Tensor(Backend::Nalgebra));
        assert_eq!(Capabilities::ndarray_only().classify(&value), Shape::Other);
    }
}
