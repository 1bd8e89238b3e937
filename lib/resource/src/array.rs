//! Array shaped resources and the policies used to render their elements.

use alloc::{string::String, vec::Vec};
use core::fmt;

/// How each scalar of an [`ArrayResource`] is rendered in generated source.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Formatter {
    /// Plain base 10.
    #[default]
    Decimal,
    /// `0x` followed by lowercase hex digits, zero padded to at least `width` digits.
    Hexadecimal {
        /// The minimum number of hex digits.
        width: usize,
    },
}

impl Formatter {
    /// Two digit hexadecimal, the usual rendering of byte data.
    pub const HEX_BYTE: Self = Self::Hexadecimal { width: 2 };

    /// Returns a [`fmt::Display`] implementation rendering `value` according to this
    /// [`Formatter`].
    pub const fn display(self, value: i64) -> Formatted {
        Formatted {
            formatter: self,
            value,
        }
    }
}

/// A scalar bound to the [`Formatter`] that renders it.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Formatted {
    /// The rendering policy.
    formatter: Formatter,
    /// The scalar to render.
    value: i64,
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter {
            Formatter::Decimal => write!(f, "{}", self.value),
            Formatter::Hexadecimal { width } => {
                let sign = if self.value < 0 { "-" } else { "" };
                write!(f, "{sign}0x{:0width$x}", self.value.unsigned_abs())
            }
        }
    }
}

/// A named, typed sequence of scalars.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ArrayResource {
    /// Suffix used to name the generated array.
    name: String,
    /// Name of the element type in the target language.
    element_type: String,
    /// The scalars, in order.
    values: Vec<i64>,
    /// How each scalar is rendered.
    formatter: Formatter,
}

impl ArrayResource {
    /// Creates a new [`ArrayResource`].
    pub fn new<I, V>(
        name: impl Into<String>,
        element_type: impl Into<String>,
        values: I,
        formatter: Formatter,
    ) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<i64>,
    {
        Self {
            name: name.into(),
            element_type: element_type.into(),
            values: values.into_iter().map(Into::into).collect(),
            formatter,
        }
    }

    /// Returns the name of the [`ArrayResource`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the target language element type of the [`ArrayResource`].
    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    /// Returns the scalars of the [`ArrayResource`].
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Returns the [`Formatter`] of the [`ArrayResource`].
    pub const fn formatter(&self) -> Formatter {
        self.formatter
    }

    /// Returns the number of scalars in the [`ArrayResource`].
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the [`ArrayResource`] holds no scalars.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over the rendered scalars.
    pub fn formatted(&self) -> impl Iterator<Item = Formatted> + '_ {
        self.values
            .iter()
            .map(|&value| self.formatter.display(value))
    }
}
