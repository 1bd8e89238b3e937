//! Compiler turning the declarative resource definitions of `pfm2sid` into a C++ header and
//! implementation file.

use std::{
    ffi::OsString,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use resource::library::ResourceLibrary;

pub mod cli;
pub mod emit;
pub mod lcd_chars;
pub mod resources;

/// The pair of files produced by [`compile`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct OutputPaths {
    /// Path of the generated header.
    pub header: PathBuf,
    /// Path of the generated implementation file.
    pub source: PathBuf,
}

impl OutputPaths {
    /// Derives the generated file paths from `output`. The extension of `output`, if any, is
    /// replaced.
    pub fn from_output(output: &Path) -> Self {
        let base = output.with_extension("");

        Self {
            header: with_suffix(&base, ".h"),
            source: with_suffix(&base, ".cc"),
        }
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// Renders `library` into the header and implementation file derived from `output`.
///
/// # Errors
///
/// Returns errors when `output` has no file name or either file cannot be written.
pub fn compile(library: &ResourceLibrary, output: &Path) -> Result<OutputPaths> {
    let paths = OutputPaths::from_output(output);
    let base_name = output
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| anyhow::anyhow!("invalid output path: {}", output.display()))?;

    write_file(&paths.header, |writer| {
        emit::write_header(library, base_name, writer)
    })?;
    write_file(&paths.source, |writer| {
        emit::write_source(library, base_name, writer)
    })?;

    Ok(paths)
}

fn write_file<F>(path: &Path, emit: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    emit(&mut writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("writing {}", path.display()))?;

    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use std::{fs, path::Path};

    use super::{OutputPaths, compile, resources::build_library};

    #[test_log::test]
    fn output_paths() {
        let paths = OutputPaths::from_output(Path::new("build/resources.cc"));
        assert_eq!(paths.header, Path::new("build/resources.h"));
        assert_eq!(paths.source, Path::new("build/resources.cc"));

        let paths = OutputPaths::from_output(Path::new("resources"));
        assert_eq!(paths.header, Path::new("resources.h"));
        assert_eq!(paths.source, Path::new("resources.cc"));
    }

    #[test_log::test]
    fn compiles_library() {
        let dir = std::env::temp_dir().join(format!("resource-compiler-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let library = build_library().unwrap();
        let paths = compile(&library, &dir.join("resources.cc")).unwrap();

        let header = fs::read_to_string(&paths.header).unwrap();
        let source = fs::read_to_string(&paths.source).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert!(header.starts_with("#ifndef PFM2SID_RESOURCES_H_\n"));
        assert!(header.contains("  LCD_CHAR_SQUARE,\n  LCD_CHAR_LAST\n"));
        assert!(source.starts_with("#include \"resources.h\"\n"));
        assert!(source.contains(
            "static const uint8_t lcd_char_note_data[8] = \
             { 0x02, 0x03, 0x03, 0x02, 0x02, 0x0e, 0x1e, 0x0c };\n"
        ));
    }

    #[test_log::test]
    fn unwritable_destination() {
        let library = build_library().unwrap();
        let missing = std::env::temp_dir()
            .join(format!("resource-compiler-missing-{}", std::process::id()))
            .join("nested")
            .join("resources.cc");

        let error = compile(&library, &missing).unwrap_err();
        assert!(error.to_string().starts_with("creating "));
    }
}
