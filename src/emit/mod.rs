//! Emission of the generated C text — trait-based mode dispatch.
//!
//! Header mode writes only lookup function declarations inside an include
//! guard. Source mode writes one string array and one lookup function per
//! group, plus the shared lookup helper.

pub mod header;
pub mod source;

use crate::config::GenerationConfig;
use crate::resolve::EmissionGroup;

/// Returned by the helper for values outside the array.
pub const ERROR_SENTINEL: &str = "<ERROR>";
/// Returned by the helper for in-range values with no string.
pub const MISSING_SENTINEL: &str = "<?>";

/// Produces the text of one generated document, piece by piece.
pub trait Emitter {
    /// Banner opening the document.
    fn prologue(&self) -> String;
    /// Definition of the lookup helper, when this mode writes one.
    fn helper(&self) -> Option<String>;
    /// Text for one closed group.
    fn group(&self, group: &EmissionGroup) -> String;
    /// Banner closing the document.
    fn epilogue(&self) -> String;
}

/// Create the emitter for the mode selected by `config`.
pub fn create_emitter(config: &GenerationConfig) -> Box<dyn Emitter + '_> {
    match config.header_file.as_deref() {
        Some(file) => Box::new(header::HeaderEmitter::new(config, file)),
        None => Box::new(source::SourceEmitter::new(config)),
    }
}

/// `#include` lines for the optional shared header and every source file.
pub fn includes(config: &GenerationConfig, sources: &[String]) -> String {
    if config.skip_includes {
        return String::new();
    }
    config
        .use_header
        .iter()
        .chain(sources)
        .map(|file| format!("#include \"{}\"\n", file))
        .collect()
}

/// Echo of a matched declaration, for `--dump`.
pub fn dump_section(text: &str) -> String {
    format!(
        "\n// Source text section:\n{}\n// End of source section\n\n",
        text
    )
}

/// `char *<prefix><Name>(<type> val)`, shared by declaration and definition.
fn lookup_signature(config: &GenerationConfig, group: &EmissionGroup) -> String {
    let name = &group.owning_name;
    let param = if group.is_alias_form {
        name.clone()
    } else {
        format!("enum {}", name)
    };
    format!("char *{}{}({} val)", config.function_prefix, name, param)
}
