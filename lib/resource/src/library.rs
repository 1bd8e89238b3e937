//! The top level aggregate handed to a code emitter.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{error, fmt};

use crate::table::ResourceTable;

/// An ordered set of [`ResourceTable`]s together with the identity of the generated module.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ResourceLibrary {
    /// Name of the program the generated module belongs to.
    target: String,
    /// Namespace wrapping every generated declaration.
    namespace: String,
    /// Include directives placed at the top of the generated header.
    includes: Vec<String>,
    /// Free text placed before everything else in the generated header.
    header: String,
    /// The tables, in emission order.
    tables: Vec<ResourceTable>,
}

impl ResourceLibrary {
    /// Creates a new [`ResourceLibrary`].
    ///
    /// # Errors
    ///
    /// - [`LibraryError::EmptyTarget`]: Returned if `target` is empty.
    /// - [`LibraryError::DuplicateTable`]: Returned if two tables share a name or prefix.
    /// - [`LibraryError::IdentifierCollision`]: Returned if two tables, or one table with
    ///   itself, generate the same identifier.
    pub fn new<I, S>(
        target: impl Into<String>,
        namespace: impl Into<String>,
        includes: I,
        header: impl Into<String>,
        tables: Vec<ResourceTable>,
    ) -> Result<Self, LibraryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = target.into();
        if target.trim().is_empty() {
            return Err(LibraryError::EmptyTarget);
        }

        for (index, table) in tables.iter().enumerate() {
            let duplicate = tables[..index].iter().any(|earlier| {
                earlier.name() == table.name()
                    || earlier.prefix().eq_ignore_ascii_case(table.prefix())
            });
            if duplicate {
                return Err(LibraryError::DuplicateTable {
                    table: table.name().to_string(),
                });
            }
        }

        let mut claimed: Vec<(String, &str)> = Vec::new();
        for table in &tables {
            for identifier in table.identifiers() {
                if let Some((_, owner)) = claimed.iter().find(|(claim, _)| *claim == identifier) {
                    return Err(LibraryError::IdentifierCollision {
                        first: owner.to_string(),
                        second: table.name().to_string(),
                        identifier,
                    });
                }
                claimed.push((identifier, table.name()));
            }
        }

        log::debug!("assembled library {target} with {} tables", tables.len());
        Ok(Self {
            target,
            namespace: namespace.into(),
            includes: includes.into_iter().map(Into::into).collect(),
            header: header.into(),
            tables,
        })
    }

    /// Returns the target name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the namespace of the generated declarations. Empty if there is none.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the library wide include directives.
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Returns the header preamble.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the tables in emission order.
    pub fn tables(&self) -> &[ResourceTable] {
        &self.tables
    }
}

/// Various errors that can occur while assembling a [`ResourceLibrary`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum LibraryError {
    /// The target name is empty.
    EmptyTarget,
    /// A table repeats the name or prefix of an earlier table.
    DuplicateTable {
        /// The later of the two tables.
        table: String,
    },
    /// Two tables generate the same identifier.
    IdentifierCollision {
        /// The table that claimed the identifier first.
        first: String,
        /// The table that generated it again.
        second: String,
        /// The shared identifier.
        identifier: String,
    },
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTarget => write!(f, "library target name is empty"),
            Self::DuplicateTable { table } => {
                write!(f, "table {table:?} repeats the name or prefix of another table")
            }
            Self::IdentifierCollision {
                first,
                second,
                identifier,
            } => write!(
                f,
                "tables {first:?} and {second:?} both generate the identifier {identifier}"
            ),
        }
    }
}

impl error::Error for LibraryError {}
