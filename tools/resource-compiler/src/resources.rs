//! Definition of the resource library compiled into `pfm2sid`.

use anyhow::Result;
use resource::library::ResourceLibrary;

use crate::lcd_chars;

/// Include directives of the generated header.
pub const INCLUDES: &[&str] = &["#include <cinttypes>"];
/// The program the generated files belong to.
pub const TARGET: &str = "pfm2sid";
/// Namespace of the generated declarations.
pub const NAMESPACE: &str = "pfm2sid::resources";
/// Preamble of the generated header.
pub const HEADER: &str = "";

/// Builds every resource table and assembles them into the [`ResourceLibrary`].
///
/// # Errors
///
/// Returns errors when a resource table or the library fails validation.
pub fn build_library() -> Result<ResourceLibrary> {
    let resource_tables = vec![lcd_chars::build_resource_table()?];

    let library = ResourceLibrary::new(
        TARGET,
        NAMESPACE,
        INCLUDES.iter().copied(),
        HEADER,
        resource_tables,
    )?;
    Ok(library)
}

#[cfg(test)]
mod test {
    use super::build_library;

    #[test_log::test]
    fn library() {
        let library = build_library().unwrap();

        assert_eq!(library.target(), "pfm2sid");
        assert_eq!(library.namespace(), "pfm2sid::resources");
        assert_eq!(library.tables().len(), 1);
        assert_eq!(library.tables()[0].name(), "lcd_char");
        assert_eq!(library, build_library().unwrap());
    }
}
