//! Resource tables: ordered collections of named [`ArrayResource`]s together with the metadata a
//! code emitter needs to render them.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::{error, fmt};

use crate::{
    array::{ArrayResource, Formatter},
    glyph::{self, MalformedSpec},
    ident,
};

/// Name of the sentinel that follows the last entry symbol of a [`TableKind::Enumerated`] table
/// and evaluates to the number of entries.
pub const LAST_SYMBOL: &str = "LAST";
/// Suffix of the enumeration generated for a [`TableKind::Enumerated`] table.
pub const ENUM_SUFFIX: &str = "RESID";

/// Name of the [`ArrayResource`] produced for each glyph.
pub const GLYPH_RESOURCE_NAME: &str = "data";
/// Element type of the [`ArrayResource`] produced for each glyph.
pub const GLYPH_ELEMENT_TYPE: &str = "uint8_t";

/// The shape of the generated table.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TableKind {
    /// An array indexed by a generated enumeration with one constant per entry.
    Enumerated,
    /// A plain array without generated index constants.
    Array,
}

/// Metadata describing how a [`ResourceTable`] is rendered.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TableMetadata {
    /// Name of the table. Generated identifiers for the table's data derive from it.
    pub name: String,
    /// Prefix of every generated symbol.
    pub prefix: String,
    /// The shape of the generated table.
    pub kind: TableKind,
    /// Element type of the table array in the target language.
    pub element_type: String,
    /// Whether each entry's data is also exposed under its own name.
    pub use_aliases: bool,
    /// Include directives required by this table alone.
    pub includes: Vec<String>,
}

/// A symbolic name paired with its [`ArrayResource`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ResourceEntry {
    /// The symbolic name, unique within its table.
    name: String,
    /// The data of the entry.
    resource: ArrayResource,
}

impl ResourceEntry {
    /// Returns the symbolic name of the entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the [`ArrayResource`] of the entry.
    pub fn resource(&self) -> &ArrayResource {
        &self.resource
    }
}

/// An ordered, validated collection of [`ResourceEntry`]s.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ResourceTable {
    /// How the table is rendered.
    metadata: TableMetadata,
    /// The entries in declaration order.
    entries: Vec<ResourceEntry>,
}

impl ResourceTable {
    /// Encodes every `(name, glyph description)` pair of `glyphs` and collects the results into
    /// a [`ResourceTable`], keeping the order of `glyphs`.
    ///
    /// Each glyph becomes an [`ArrayResource`] named [`GLYPH_RESOURCE_NAME`] of
    /// [`GLYPH_ELEMENT_TYPE`] rendered as hexadecimal bytes.
    ///
    /// # Errors
    ///
    /// Returns the first [`TableError`] encountered; no table is produced in that case.
    pub fn from_glyphs<I, N, T>(metadata: TableMetadata, glyphs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let mut builder = ResourceTableBuilder::new(metadata)?;
        for (name, text) in glyphs {
            builder.insert_glyph(name, text.as_ref())?;
        }

        builder.build()
    }

    /// Returns the [`TableMetadata`] of the table.
    pub fn metadata(&self) -> &TableMetadata {
        &self.metadata
    }

    /// Returns the name of the table.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Returns the symbol prefix of the table.
    pub fn prefix(&self) -> &str {
        &self.metadata.prefix
    }

    /// Returns the [`TableKind`] of the table.
    pub fn kind(&self) -> TableKind {
        self.metadata.kind
    }

    /// Returns the entries of the table in declaration order.
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    /// Returns the generated symbol of `entry`.
    pub fn symbol(&self, entry: &ResourceEntry) -> String {
        ident::symbol(&self.metadata.prefix, &entry.name)
    }

    /// Returns the identifier of the array holding every entry.
    pub fn array_name(&self) -> String {
        format!("{}s", self.metadata.name)
    }

    /// Returns the identifier of the generated enumeration.
    pub fn enum_name(&self) -> String {
        ident::symbol(&self.metadata.prefix, ENUM_SUFFIX)
    }

    /// Returns the sentinel symbol evaluating to the number of entries.
    pub fn count_symbol(&self) -> String {
        ident::symbol(&self.metadata.prefix, LAST_SYMBOL)
    }

    /// Returns the identifier of the array holding the data of `entry`.
    pub fn data_name(&self, entry: &ResourceEntry) -> String {
        ident::data_name(&self.metadata.name, &entry.name, entry.resource.name())
    }

    /// Returns every identifier an emitter declares for this table.
    pub fn identifiers(&self) -> Vec<String> {
        let mut identifiers = Vec::from([self.array_name()]);
        if self.metadata.kind == TableKind::Enumerated {
            identifiers.push(self.enum_name());
            identifiers.push(self.count_symbol());
            identifiers.extend(self.entries.iter().map(|entry| self.symbol(entry)));
        }
        identifiers.extend(self.entries.iter().map(|entry| self.data_name(entry)));

        identifiers
    }
}

/// Builder for a valid [`ResourceTable`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ResourceTableBuilder {
    /// How the table is rendered.
    metadata: TableMetadata,
    /// The entries inserted so far.
    entries: Vec<ResourceEntry>,
    /// The generated symbol of each entry, parallel to `entries`.
    symbols: Vec<String>,
    /// The identifier of each entry's data array, parallel to `entries`.
    data_names: Vec<String>,
}

impl ResourceTableBuilder {
    /// Creates a new, empty [`ResourceTableBuilder`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidIdentifier`] if the table name or prefix is not a valid
    /// identifier.
    pub fn new(metadata: TableMetadata) -> Result<Self, TableError> {
        for name in [&metadata.name, &metadata.prefix] {
            if !ident::is_identifier(name) {
                return Err(TableError::InvalidIdentifier {
                    table: metadata.name.clone(),
                    name: name.clone(),
                });
            }
        }

        Ok(Self {
            metadata,
            entries: Vec::new(),
            symbols: Vec::new(),
            data_names: Vec::new(),
        })
    }

    /// Appends the entry `name` holding `resource`.
    ///
    /// # Errors
    ///
    /// - [`TableError::InvalidIdentifier`]: Returned if `name` or the resource's name is not a
    ///   valid identifier.
    /// - [`TableError::EmptyResource`]: Returned if `resource` holds no scalars.
    /// - [`TableError::DuplicateName`]: Returned if `name` was already inserted.
    /// - [`TableError::ReservedName`]: Returned if `name` produces the count sentinel or the
    ///   enumeration name of an enumerated table.
    /// - [`TableError::SymbolCollision`]: Returned if `name` produces the same symbol or data
    ///   array identifier as an earlier entry.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        resource: ArrayResource,
    ) -> Result<(), TableError> {
        let name = name.into();
        for candidate in [name.as_str(), resource.name()] {
            if !ident::is_identifier(candidate) {
                return Err(TableError::InvalidIdentifier {
                    table: self.metadata.name.clone(),
                    name: candidate.to_string(),
                });
            }
        }

        if resource.is_empty() {
            return Err(TableError::EmptyResource {
                table: self.metadata.name.clone(),
                name,
            });
        }

        if self.entries.iter().any(|entry| entry.name == name) {
            return Err(TableError::DuplicateName {
                table: self.metadata.name.clone(),
                name,
            });
        }

        let symbol = ident::symbol(&self.metadata.prefix, &name);
        let reserved = [LAST_SYMBOL, ENUM_SUFFIX]
            .iter()
            .any(|word| symbol == ident::symbol(&self.metadata.prefix, word));
        if self.metadata.kind == TableKind::Enumerated && reserved {
            return Err(TableError::ReservedName {
                table: self.metadata.name.clone(),
                name,
            });
        }

        if let Some(index) = self.symbols.iter().position(|existing| *existing == symbol) {
            return Err(TableError::SymbolCollision {
                table: self.metadata.name.clone(),
                first: self.entries[index].name.clone(),
                second: name,
                symbol,
            });
        }

        let data_name = ident::data_name(&self.metadata.name, &name, resource.name());
        if let Some(index) = self.data_names.iter().position(|existing| *existing == data_name) {
            return Err(TableError::SymbolCollision {
                table: self.metadata.name.clone(),
                first: self.entries[index].name.clone(),
                second: name,
                symbol: data_name,
            });
        }

        log::trace!("{}: inserted {symbol}", self.metadata.name);
        self.symbols.push(symbol);
        self.data_names.push(data_name);
        self.entries.push(ResourceEntry { name, resource });
        Ok(())
    }

    /// Encodes the glyph description `text` and appends it as the entry `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Glyph`] if `text` is malformed, otherwise the same errors as
    /// [`ResourceTableBuilder::insert`].
    pub fn insert_glyph(&mut self, name: impl Into<String>, text: &str) -> Result<(), TableError> {
        let name = name.into();
        let encoded = glyph::encode(text).map_err(|error| TableError::Glyph {
            table: self.metadata.name.clone(),
            entry: name.clone(),
            error,
        })?;

        let resource = ArrayResource::new(
            GLYPH_RESOURCE_NAME,
            GLYPH_ELEMENT_TYPE,
            encoded.into_bytes(),
            Formatter::HEX_BYTE,
        );
        self.insert(name, resource)
    }

    /// Returns the number of entries inserted so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries have been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finishes the [`ResourceTable`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Empty`] if no entries were inserted, since the generated arrays
    /// would have no elements.
    pub fn build(self) -> Result<ResourceTable, TableError> {
        if self.entries.is_empty() {
            return Err(TableError::Empty {
                table: self.metadata.name,
            });
        }

        log::debug!(
            "built table {} with {} entries",
            self.metadata.name,
            self.entries.len()
        );

        Ok(ResourceTable {
            metadata: self.metadata,
            entries: self.entries,
        })
    }
}

/// Various errors that can occur while assembling a [`ResourceTable`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum TableError {
    /// A glyph description is malformed.
    Glyph {
        /// The table being assembled.
        table: String,
        /// The entry whose glyph is malformed.
        entry: String,
        /// The shape error.
        error: MalformedSpec,
    },
    /// A name is not a valid identifier.
    InvalidIdentifier {
        /// The table being assembled.
        table: String,
        /// The offending name.
        name: String,
    },
    /// The table has no entries.
    Empty {
        /// The table being assembled.
        table: String,
    },
    /// An entry holds no scalars.
    EmptyResource {
        /// The table being assembled.
        table: String,
        /// The offending entry.
        name: String,
    },
    /// Two entries share a name.
    DuplicateName {
        /// The table being assembled.
        table: String,
        /// The repeated name.
        name: String,
    },
    /// An entry name produces the count sentinel symbol.
    ReservedName {
        /// The table being assembled.
        table: String,
        /// The offending name.
        name: String,
    },
    /// Two distinct entry names produce the same symbol.
    SymbolCollision {
        /// The table being assembled.
        table: String,
        /// The entry that claimed the symbol first.
        first: String,
        /// The entry that produced the symbol again.
        second: String,
        /// The shared symbol.
        symbol: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glyph {
                table,
                entry,
                error,
            } => write!(f, "table {table:?}: malformed glyph {entry:?}: {error}"),
            Self::InvalidIdentifier { table, name } => {
                write!(f, "table {table:?}: {name:?} is not a valid identifier")
            }
            Self::Empty { table } => write!(f, "table {table:?} has no entries"),
            Self::EmptyResource { table, name } => {
                write!(f, "table {table:?}: entry {name:?} holds no values")
            }
            Self::DuplicateName { table, name } => {
                write!(f, "table {table:?}: duplicate entry {name:?}")
            }
            Self::ReservedName { table, name } => {
                write!(f, "table {table:?}: entry {name:?} is reserved")
            }
            Self::SymbolCollision {
                table,
                first,
                second,
                symbol,
            } => write!(
                f,
                "table {table:?}: entries {first:?} and {second:?} both generate {symbol}"
            ),
        }
    }
}

impl error::Error for TableError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Glyph { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use alloc::{string::String, vec, vec::Vec};

    use super::{ResourceTable, ResourceTableBuilder, TableError, TableKind, TableMetadata};
    use crate::{
        array::{ArrayResource, Formatter},
        glyph::MalformedSpec,
    };

    const BLANK: &str = ".....\n.....\n.....\n.....\n.....\n.....\n.....\n.....\n";
    const DOT: &str = ".....\n.....\n.....\n..X..\n.....\n.....\n.....\n.....\n";

    fn metadata(kind: TableKind) -> TableMetadata {
        TableMetadata {
            name: String::from("lcd_char"),
            prefix: String::from("LCD_CHAR"),
            kind,
            element_type: String::from("uint8_t * const"),
            use_aliases: false,
            includes: Vec::new(),
        }
    }

    fn names(table: &ResourceTable) -> Vec<&str> {
        table.entries().iter().map(|entry| entry.name()).collect()
    }

    #[test]
    fn preserves_declaration_order() {
        let table = ResourceTable::from_glyphs(
            metadata(TableKind::Enumerated),
            [("c", BLANK), ("a", DOT), ("b", BLANK)],
        )
        .unwrap();

        assert_eq!(names(&table), ["c", "a", "b"]);
    }

    #[test]
    fn glyph_entries_are_hex_bytes() {
        let table =
            ResourceTable::from_glyphs(metadata(TableKind::Enumerated), [("dot", DOT)]).unwrap();
        let entry = &table.entries()[0];

        assert_eq!(table.kind(), TableKind::Enumerated);
        assert_eq!(entry.resource().name(), "data");
        assert_eq!(entry.resource().element_type(), "uint8_t");
        assert_eq!(entry.resource().formatter(), Formatter::HEX_BYTE);
        assert_eq!(entry.resource().values(), &[0, 0, 0, 4, 0, 0, 0, 0]);
        assert_eq!(table.symbol(entry), "LCD_CHAR_DOT");
    }

    #[test]
    fn malformed_glyph_names_entry() {
        let short = ".....\n.....\n.....\n.....\n.....\n.....\n.....\n";
        let result = ResourceTable::from_glyphs(
            metadata(TableKind::Enumerated),
            [("ok", BLANK), ("short", short), ("never", BLANK)],
        );

        assert_eq!(
            result,
            Err(TableError::Glyph {
                table: String::from("lcd_char"),
                entry: String::from("short"),
                error: MalformedSpec::RowCount { actual: 7 },
            })
        );
    }

    #[test]
    fn duplicate_name() {
        let result = ResourceTable::from_glyphs(
            metadata(TableKind::Enumerated),
            [("dot", DOT), ("dot", BLANK)],
        );

        assert!(matches!(result, Err(TableError::DuplicateName { name, .. }) if name == "dot"));
    }

    #[test]
    fn case_collision() {
        let result = ResourceTable::from_glyphs(
            metadata(TableKind::Enumerated),
            [("Tri", DOT), ("tri", BLANK)],
        );

        assert_eq!(
            result,
            Err(TableError::SymbolCollision {
                table: String::from("lcd_char"),
                first: String::from("Tri"),
                second: String::from("tri"),
                symbol: String::from("LCD_CHAR_TRI"),
            })
        );
    }

    #[test]
    fn sentinel_is_reserved_for_enumerated_tables() {
        let result =
            ResourceTable::from_glyphs(metadata(TableKind::Enumerated), [("last", BLANK)]);
        assert!(matches!(result, Err(TableError::ReservedName { .. })));

        let table = ResourceTable::from_glyphs(metadata(TableKind::Array), [("last", BLANK)]);
        assert!(table.is_ok());
    }

    #[test]
    fn invalid_identifiers() {
        let result =
            ResourceTable::from_glyphs(metadata(TableKind::Enumerated), [("half-note", BLANK)]);
        assert!(matches!(
            result,
            Err(TableError::InvalidIdentifier { name, .. }) if name == "half-note"
        ));

        let mut bad_prefix = metadata(TableKind::Enumerated);
        bad_prefix.prefix = String::from("LCD CHAR");
        assert!(ResourceTableBuilder::new(bad_prefix).is_err());

        let mut builder = ResourceTableBuilder::new(metadata(TableKind::Array)).unwrap();
        let resource = ArrayResource::new("2data", "int16_t", [1i16, -1], Formatter::Decimal);
        assert!(builder.insert("table", resource).is_err());
        assert!(builder.is_empty());
    }

    #[test]
    fn generic_resources() {
        let mut builder = ResourceTableBuilder::new(metadata(TableKind::Array)).unwrap();
        builder
            .insert(
                "ramp",
                ArrayResource::new("values", "int16_t", [-2i16, 0, 2], Formatter::Decimal),
            )
            .unwrap();
        builder
            .insert(
                "flat",
                ArrayResource::new("values", "int16_t", vec![0i16; 3], Formatter::Decimal),
            )
            .unwrap();
        assert_eq!(builder.len(), 2);

        let table = builder.build().unwrap();
        assert_eq!(names(&table), ["ramp", "flat"]);
        assert_eq!(table.entries()[0].resource().values(), &[-2, 0, 2]);
    }

    #[test]
    fn data_array_collision() {
        let mut builder = ResourceTableBuilder::new(metadata(TableKind::Enumerated)).unwrap();
        builder
            .insert("x_y", ArrayResource::new("data", "uint8_t", [1u8], Formatter::HEX_BYTE))
            .unwrap();

        let result = builder.insert(
            "x",
            ArrayResource::new("y_data", "uint8_t", [2u8], Formatter::HEX_BYTE),
        );
        assert_eq!(
            result,
            Err(TableError::SymbolCollision {
                table: String::from("lcd_char"),
                first: String::from("x_y"),
                second: String::from("x"),
                symbol: String::from("lcd_char_x_y_data"),
            })
        );
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn enumeration_name_is_reserved() {
        let result =
            ResourceTable::from_glyphs(metadata(TableKind::Enumerated), [("resid", BLANK)]);
        assert_eq!(
            result,
            Err(TableError::ReservedName {
                table: String::from("lcd_char"),
                name: String::from("resid"),
            })
        );
    }

    #[test]
    fn empty_tables_are_rejected() {
        let result =
            ResourceTable::from_glyphs(metadata(TableKind::Enumerated), [("x", BLANK); 0]);
        assert_eq!(
            result,
            Err(TableError::Empty {
                table: String::from("lcd_char"),
            })
        );

        let mut builder = ResourceTableBuilder::new(metadata(TableKind::Array)).unwrap();
        let empty = ArrayResource::new("values", "int16_t", Vec::<i16>::new(), Formatter::Decimal);
        assert!(matches!(
            builder.insert("flat", empty),
            Err(TableError::EmptyResource { .. })
        ));
        assert!(builder.build().is_err());
    }

    #[test]
    fn generated_identifiers() {
        let table = ResourceTable::from_glyphs(
            metadata(TableKind::Enumerated),
            [("note", DOT), ("bend", BLANK)],
        )
        .unwrap();
        assert_eq!(
            table.identifiers(),
            [
                "lcd_chars",
                "LCD_CHAR_RESID",
                "LCD_CHAR_LAST",
                "LCD_CHAR_NOTE",
                "LCD_CHAR_BEND",
                "lcd_char_note_data",
                "lcd_char_bend_data",
            ]
        );

        let table =
            ResourceTable::from_glyphs(metadata(TableKind::Array), [("note", DOT)]).unwrap();
        assert_eq!(table.identifiers(), ["lcd_chars", "lcd_char_note_data"]);
    }

    #[test]
    fn building_is_deterministic() {
        let glyphs = [("note", DOT), ("bend", BLANK)];
        let first = ResourceTable::from_glyphs(metadata(TableKind::Enumerated), glyphs).unwrap();
        let second = ResourceTable::from_glyphs(metadata(TableKind::Enumerated), glyphs).unwrap();

        assert_eq!(first, second);
    }
}
