//! Generation settings shared by every stage of one invocation.

pub const DEFAULT_ARRAY_PREFIX: &str = "_strarr_";
pub const DEFAULT_FUNCTION_PREFIX: &str = "_str_";
pub const DEFAULT_HELPER_NAME: &str = "_EnumStr";
pub const DEFAULT_MAX_VALUE: u64 = 256;

/// Immutable once built from the command line.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Prefix of each generated string array.
    pub array_prefix: String,
    /// Prefix of each generated lookup function.
    pub function_prefix: String,
    /// Name of the shared `char *fn(char **arr, int val, int max)` helper.
    pub helper_name: String,
    /// Enumerators with a value at or above this are left out of the array.
    pub max_value: u64,
    /// Header file being generated; `Some` selects header mode.
    pub header_file: Option<String>,
    /// Header to `#include` ahead of the sources.
    pub use_header: Option<String>,
    pub reuse_helper: bool,
    pub skip_includes: bool,
    /// Echo every matched declaration into the output.
    pub dump: bool,
}

impl GenerationConfig {
    pub fn header_mode(&self) -> bool {
        self.header_file.is_some()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            array_prefix: DEFAULT_ARRAY_PREFIX.to_string(),
            function_prefix: DEFAULT_FUNCTION_PREFIX.to_string(),
            helper_name: DEFAULT_HELPER_NAME.to_string(),
            max_value: DEFAULT_MAX_VALUE,
            header_file: None,
            use_header: None,
            reuse_helper: false,
            skip_includes: false,
            dump: false,
        }
    }
}
