// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

// Excerpts of the raw input are truncated to this many characters.
const EXCERPT_LIMIT: usize = 128;

/// The error returned when a polymorphic value cannot be decoded or encoded.
///
/// Unknown discriminator values are *not* errors, they decode into the
/// family's fallback envelope. The errors reported by this type are always
/// fatal to the operation that returned them: the input is not valid JSON,
/// the JSON does not have the expected shape, a variant cannot be serialized,
/// or the family registry is invalid.
///
/// Applications can query the error kind using the `is_*()` predicates, and
/// find out which family, which element of a collection, and which input
/// failed using the accessors.
///
/// # Example
/// ```
/// use sdk_polymorphic::Error;
/// fn handle(e: Error) {
///     if e.is_parse() {
///         println!("malformed JSON for {}: {e}", e.family());
///     } else if let Some(p) = e.position() {
///         println!("element {p} has the wrong shape: {e}");
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    family: &'static str,
    position: Option<Position>,
    excerpt: Option<String>,
    source: Option<BoxError>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ErrorKind {
    Parse,
    Shape,
    Serialization,
    Registry,
}

/// The location of a failed element within a collection of polymorphic values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Position {
    /// The zero-based index of an array element.
    Index(usize),
    /// The key of a map entry.
    Key(String),
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "[{i}]"),
            Self::Key(k) => write!(f, "[{k:?}]"),
        }
    }
}

impl Error {
    /// Creates an error representing input that is not valid JSON.
    ///
    /// # Example
    /// ```
    /// use sdk_polymorphic::Error;
    /// let error = Error::parse("Stage", "unexpected end of input");
    /// assert!(error.is_parse());
    /// assert_eq!(error.family(), "Stage");
    /// ```
    pub fn parse<T: Into<BoxError>>(family: &'static str, source: T) -> Self {
        Self::new(ErrorKind::Parse, family, source.into())
    }

    /// The input was not syntactically valid JSON.
    ///
    /// # Troubleshooting
    ///
    /// The input is truncated, has unbalanced braces, or carries trailing
    /// data. The most common cause is a response body that was cut short by
    /// the transport.
    ///
    /// Input nested deeper than the JSON parser's recursion limit (128 levels)
    /// is also reported as a parse error, even if it is syntactically valid.
    /// The parser stops before the document is complete, so its shape is never
    /// examined.
    pub fn is_parse(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse)
    }

    /// Creates an error representing valid JSON with the wrong shape.
    ///
    /// # Example
    /// ```
    /// use sdk_polymorphic::Error;
    /// let error = Error::shape("Stage", "expected a JSON object");
    /// assert!(error.is_shape());
    /// ```
    pub fn shape<T: Into<BoxError>>(family: &'static str, source: T) -> Self {
        Self::new(ErrorKind::Shape, family, source.into())
    }

    /// The input was valid JSON, but not an object with a string
    /// discriminator, or the object does not match the selected variant.
    ///
    /// # Troubleshooting
    ///
    /// This usually indicates a bug in the service or in the client library
    /// model definitions. Compare the [excerpt][Error::excerpt] with the
    /// documented resource format.
    pub fn is_shape(&self) -> bool {
        matches!(self.kind, ErrorKind::Shape)
    }

    /// Creates an error representing a variant that cannot be serialized.
    pub fn ser<T: Into<BoxError>>(family: &'static str, source: T) -> Self {
        Self::new(ErrorKind::Serialization, family, source.into())
    }

    /// A variant could not be serialized into a JSON object.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing an invalid variant registry.
    pub fn registry(family: &'static str, source: RegistryError) -> Self {
        Self::new(ErrorKind::Registry, family, source.into())
    }

    /// The registry for the family is invalid, no value of this family can be
    /// decoded.
    ///
    /// # Troubleshooting
    ///
    /// This is always a bug in the client library: two variants share the
    /// same discriminator value, or a variant has an empty one.
    pub fn is_registry(&self) -> bool {
        matches!(self.kind, ErrorKind::Registry)
    }

    /// The name of the polymorphic family that failed.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The position of the failed element, if the error was reported while
    /// decoding a collection.
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// A bounded excerpt of the raw input that failed, if available.
    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    fn new(kind: ErrorKind, family: &'static str, source: BoxError) -> Self {
        Self {
            kind,
            family,
            position: None,
            excerpt: None,
            source: Some(source),
        }
    }

    /// Maps a `serde_json` error to the parse or shape kinds.
    pub(crate) fn from_json(family: &'static str, e: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match e.classify() {
            Category::Data => Self::shape(family, e),
            Category::Io | Category::Syntax | Category::Eof => Self::parse(family, e),
        }
    }

    // The innermost position is the most useful, never overwrite it.
    pub(crate) fn at(mut self, position: Position) -> Self {
        if self.position.is_none() {
            self.position = Some(position);
        }
        self
    }

    pub(crate) fn with_excerpt(mut self, raw: &[u8]) -> Self {
        if self.excerpt.is_none() {
            self.excerpt = Some(excerpt(raw));
        }
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Parse => write!(f, "cannot parse JSON for `{}`", self.family)?,
            ErrorKind::Shape => write!(
                f,
                "the JSON value does not have the shape of `{}`",
                self.family
            )?,
            ErrorKind::Serialization => write!(f, "cannot serialize `{}`", self.family)?,
            ErrorKind::Registry => write!(f, "invalid registry for `{}`", self.family)?,
        }
        if let Some(p) = &self.position {
            write!(f, " at element {p}")?;
        }
        if let Some(s) = &self.source {
            write!(f, ": {s}")?;
        }
        if let Some(e) = &self.excerpt {
            write!(f, ", input={e:?}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// Problems with the [Registry][crate::Registry] of a family.
///
/// Most are detected while building the registry. A registry whose field does
/// not match [Family::DISCRIMINATOR][crate::Family::DISCRIMINATOR] is detected
/// on first use.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum RegistryError {
    /// The family has no discriminator field name.
    #[error("the discriminator field name for `{family}` is empty")]
    EmptyField { family: &'static str },

    /// A variant was registered with an empty discriminator value.
    #[error("a variant of `{family}` has an empty discriminator value")]
    EmptyValue { family: &'static str },

    /// Two variants share the same discriminator value.
    #[error("the discriminator value {value:?} is registered more than once in `{family}`")]
    Duplicate { family: &'static str, value: String },

    /// The registry was built for a different discriminator field than the
    /// one declared by the family.
    #[error(
        "the registry for `{family}` uses the discriminator field `{found}`, the family declares `{expected}`"
    )]
    FieldMismatch {
        family: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// The shape problems reported as the source of [Error::is_shape] and
/// [Error::is_serialization] errors.
#[derive(thiserror::Error, Debug)]
pub(crate) enum ShapeMismatch {
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("expected a JSON array, found {0}")]
    NotAnArray(&'static str),

    #[error("the discriminator field `{field}` must be a string, found {found}")]
    DiscriminatorNotString {
        field: &'static str,
        found: &'static str,
    },

    #[error("the envelope uses the discriminator field `{found}`, expected `{expected}`")]
    FieldMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("the discriminator {0:?} selects a registered variant, it cannot be encoded as the fallback")]
    RegisteredDiscriminator(String),

    #[error("expected discriminator {expected:?}, found {found:?}")]
    DiscriminatorMismatch {
        expected: &'static str,
        found: Option<String>,
    },
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn excerpt(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let mut chars = text.chars();
    let mut excerpt: String = chars.by_ref().take(EXCERPT_LIMIT).collect();
    if chars.next().is_some() {
        excerpt.push_str("...");
    }
    excerpt
}
