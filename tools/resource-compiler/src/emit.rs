//! Rendering of a [`ResourceLibrary`] into a C++ header and implementation file.

use std::io::{self, Write};

use resource::{
    ident,
    library::ResourceLibrary,
    table::{ResourceTable, TableKind},
};

/// Writes the header declaring every table of `library` to `writer`.
///
/// `base_name` is the file name of the generated pair without extension and seeds the include
/// guard.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn write_header<W: Write>(
    library: &ResourceLibrary,
    base_name: &str,
    mut writer: W,
) -> io::Result<()> {
    let guard = include_guard(library.target(), base_name);

    if !library.header().is_empty() {
        writeln!(writer, "{}", library.header().trim_end())?;
        writeln!(writer)?;
    }
    writeln!(writer, "#ifndef {guard}")?;
    writeln!(writer, "#define {guard}")?;
    writeln!(writer)?;

    let mut includes: Vec<&str> = Vec::new();
    let table_includes = library
        .tables()
        .iter()
        .flat_map(|table| table.metadata().includes.iter());
    for include in library.includes().iter().chain(table_includes) {
        if !includes.contains(&include.as_str()) {
            includes.push(include);
        }
    }
    if !includes.is_empty() {
        for include in includes {
            writeln!(writer, "{include}")?;
        }
        writeln!(writer)?;
    }

    open_namespace(library, &mut writer)?;
    for (index, table) in library.tables().iter().enumerate() {
        if index != 0 {
            writeln!(writer)?;
        }
        write_table_declaration(table, &mut writer)?;
    }
    close_namespace(library, &mut writer)?;
    writeln!(writer)?;

    writeln!(writer, "#endif // {guard}")?;
    Ok(())
}

/// Writes the implementation defining every table of `library` to `writer`.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn write_source<W: Write>(
    library: &ResourceLibrary,
    base_name: &str,
    mut writer: W,
) -> io::Result<()> {
    writeln!(writer, "#include \"{base_name}.h\"")?;
    writeln!(writer)?;

    open_namespace(library, &mut writer)?;
    for (index, table) in library.tables().iter().enumerate() {
        if index != 0 {
            writeln!(writer)?;
        }
        write_table_definition(table, &mut writer)?;
    }
    close_namespace(library, &mut writer)?;

    Ok(())
}

/// Returns the include guard of the header named `base_name` belonging to `target`.
pub fn include_guard(target: &str, base_name: &str) -> String {
    ident::sanitize(&format!("{target}_{base_name}_H_")).to_ascii_uppercase()
}

/// Returns the expression evaluating to the number of entries in `table`.
fn count_expr(table: &ResourceTable) -> String {
    match table.kind() {
        TableKind::Enumerated => table.count_symbol(),
        TableKind::Array => table.entries().len().to_string(),
    }
}

fn open_namespace<W: Write>(library: &ResourceLibrary, writer: &mut W) -> io::Result<()> {
    if !library.namespace().is_empty() {
        writeln!(writer, "namespace {} {{", library.namespace())?;
        writeln!(writer)?;
    }

    Ok(())
}

fn close_namespace<W: Write>(library: &ResourceLibrary, writer: &mut W) -> io::Result<()> {
    if !library.namespace().is_empty() {
        writeln!(writer)?;
        writeln!(writer, "}} // namespace {}", library.namespace())?;
    }

    Ok(())
}

fn write_table_declaration<W: Write>(table: &ResourceTable, writer: &mut W) -> io::Result<()> {
    match table.kind() {
        TableKind::Enumerated => {
            let enum_name = table.enum_name();
            writeln!(writer, "enum {enum_name} {{")?;
            for entry in table.entries() {
                writeln!(writer, "  {},", table.symbol(entry))?;
            }
            writeln!(writer, "  {}", count_expr(table))?;
            writeln!(writer, "}}; // enum {enum_name}")?;
            writeln!(writer)?;
        }
        TableKind::Array => {}
    }

    writeln!(
        writer,
        "extern const {} {}[{}];",
        table.metadata().element_type,
        table.array_name(),
        count_expr(table)
    )?;

    if table.metadata().use_aliases {
        writeln!(writer)?;
        for entry in table.entries() {
            writeln!(
                writer,
                "extern const {} {}[{}];",
                entry.resource().element_type(),
                table.data_name(entry),
                entry.resource().len()
            )?;
        }
    }

    Ok(())
}

fn write_table_definition<W: Write>(table: &ResourceTable, writer: &mut W) -> io::Result<()> {
    let linkage = if table.metadata().use_aliases {
        ""
    } else {
        "static "
    };

    for entry in table.entries() {
        let resource = entry.resource();
        let values = resource
            .formatted()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(
            writer,
            "{linkage}const {} {}[{}] = {{ {values} }};",
            resource.element_type(),
            table.data_name(entry),
            resource.len()
        )?;
    }
    writeln!(writer)?;

    writeln!(
        writer,
        "const {} {}[{}] = {{",
        table.metadata().element_type,
        table.array_name(),
        count_expr(table)
    )?;
    for entry in table.entries() {
        if table.kind() == TableKind::Enumerated {
            writeln!(writer, "  // {}", table.symbol(entry))?;
        }
        writeln!(writer, "  {},", table.data_name(entry))?;
    }
    writeln!(writer, "}};")?;

    Ok(())
}
