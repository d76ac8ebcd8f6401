use std::fmt::{self, Display};

use crate::capability::Capabilities;
use crate::error::{DocError, Result};
use crate::typing::FieldType;
use crate::value::Value;

/// Checks a locator. Both remote urls (`scheme://...`) and local paths are
/// accepted, loading is left to the caller.
fn check_locator(s: &str, target: &str) -> Result<()> {
    if s.is_empty() {
        return Err(DocError::value(format!("{target} cannot be empty")));
    }
    if s.chars().any(char::is_whitespace) {
        return Err(DocError::value(format!("{target} cannot contain whitespace: {s:?}")));
    }
    if s.starts_with("://") {
        return Err(DocError::value(format!("{target} is missing a scheme: {s:?}")));
    }
    Ok(())
}

macro_rules! url_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn parse(s: impl Into<String>) -> Result<Self> {
                let s = s.into();
                check_locator(&s, stringify!($name))?;
                Ok($name(s))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The part before `://`, `None` for local paths
            pub fn scheme(&self) -> Option<&str> {
                self.0.split_once("://").map(|(scheme, _)| scheme)
            }

            pub fn is_local(&self) -> bool {
                matches!(self.scheme(), None | Some("file"))
            }

            /// Lower-cased file extension of the last path segment, if any
            pub fn extension(&self) -> Option<String> {
                let path = self.0.split(['?', '#']).next().unwrap_or_default();
                let segment = path.rsplit('/').next().unwrap_or_default();
                segment.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()).filter(|e| !e.is_empty())
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FieldType for $name {
            const NAME: &'static str = stringify!($name);
            fn validate_field(value: Value, _: &Capabilities) -> Result<Self> {
                match value {
                    Value::Str(s) => Self::parse(s),
                    other => Err(DocError::conversion(Self::NAME, other.describe())),
                }
            }
        }

        impl From<$name> for Value {
            fn from(u: $name) -> Self {
                Value::Str(u.0)
            }
        }
    };
}

url_type!(
    /// Any locator
    AnyUrl
);
url_type!(AudioUrl);
url_type!(VideoUrl);
url_type!(ImageUrl);
url_type!(TextUrl);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_locators() {
        let u = AudioUrl::parse("http://x/a.wav").unwrap();
        assert_eq!(u.scheme(), Some("http"));
        assert!(!u.is_local());
        assert_eq!(u.extension().as_deref(), Some("wav"));
        assert_eq!(u.to_string(), "http://x/a.wav");

        let u = VideoUrl::parse("toydata/clip.MP4").unwrap();
        assert_eq!(u.scheme(), None);
        assert!(u.is_local());
        assert_eq!(u.extension().as_deref(), Some("mp4"));

        let u = ImageUrl::parse("https://host/image?raw=true").unwrap();
        assert_eq!(u.extension(), None);
    }

    #[test]
    fn reject_malformed() {
        assert!(AnyUrl::parse("").unwrap_err().is_value());
        assert!(AnyUrl::parse("a b.wav").unwrap_err().is_value());
        assert!(TextUrl::parse("://nothing").unwrap_err().is_value());
    }

    #[test]
    fn field_validation() {
        let caps = Capabilities::ndarray_only();
        let u = AudioUrl::validate_field(Value::from("a.wav"), &caps).unwrap();
        assert_eq!(u.as_str(), "a.wav");
        let err = AudioUrl::validate_field(Value::Int(1), &caps).unwrap_err();
        assert_eq!(err, DocError::conversion("AudioUrl", "Int"));
    }
}
