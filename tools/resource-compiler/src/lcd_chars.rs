//! The custom characters loaded into the display's character generator RAM.

use resource::table::{ResourceTable, TableError, TableKind, TableMetadata};

/// The custom characters, in the order they are assigned character codes.
pub const CUSTOM_CHARACTERS: &[(&str, &str)] = &[
    (
        "note",
        "
...X.
...XX
...XX
...X.
...X.
.XXX.
XXXX.
.XX..
",
    ),
    (
        "bend",
        "
.....
.....
.....
..X..
..X..
.XXX.
X...X
XXXXX
",
    ),
    (
        "tri",
        "
.....
.....
.X...
X.X.X
...X.
.....
.....
.....
",
    ),
    (
        "saw",
        "
.....
...XX
..X.X
.X..X
X...X
.....
.....
.....
",
    ),
    (
        "square",
        "
.....
XXX..
X.X..
..X.X
..XXX
.....
.....
.....
",
    ),
];

/// Returns the [`TableMetadata`] of the custom character table.
pub fn metadata() -> TableMetadata {
    TableMetadata {
        name: String::from("lcd_char"),
        prefix: String::from("LCD_CHAR"),
        kind: TableKind::Enumerated,
        element_type: String::from("uint8_t * const"),
        use_aliases: false,
        includes: Vec::new(),
    }
}

/// Encodes [`CUSTOM_CHARACTERS`] into a [`ResourceTable`].
///
/// # Errors
///
/// Returns [`TableError`] if any of the characters is malformed.
pub fn build_resource_table() -> Result<ResourceTable, TableError> {
    ResourceTable::from_glyphs(metadata(), CUSTOM_CHARACTERS.iter().copied())
}

#[cfg(test)]
mod test {
    use super::{CUSTOM_CHARACTERS, build_resource_table};

    #[test_log::test]
    fn encodes_custom_characters() {
        let table = build_resource_table().unwrap();
        let encoded: Vec<(&str, &[i64])> = table
            .entries()
            .iter()
            .map(|entry| (entry.name(), entry.resource().values()))
            .collect();

        assert_eq!(
            encoded,
            [
                ("note", &[0x02, 0x03, 0x03, 0x02, 0x02, 0x0e, 0x1e, 0x0c][..]),
                ("bend", &[0x00, 0x00, 0x00, 0x04, 0x04, 0x0e, 0x11, 0x1f][..]),
                ("tri", &[0x00, 0x00, 0x08, 0x15, 0x02, 0x00, 0x00, 0x00][..]),
                ("saw", &[0x00, 0x03, 0x05, 0x09, 0x11, 0x00, 0x00, 0x00][..]),
                ("square", &[0x00, 0x1c, 0x14, 0x05, 0x07, 0x00, 0x00, 0x00][..]),
            ]
        );
    }

    #[test_log::test]
    fn fits_in_character_generator_ram() {
        // CGRAM holds eight 5x8 characters.
        assert!(CUSTOM_CHARACTERS.len() <= 8);
    }
}
