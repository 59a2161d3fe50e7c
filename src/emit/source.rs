//! Source mode: string arrays, lookup functions and the shared helper.

use crate::config::GenerationConfig;
use crate::emit::{lookup_signature, Emitter, ERROR_SENTINEL, MISSING_SENTINEL};
use crate::resolve::EmissionGroup;

pub struct SourceEmitter<'a> {
    config: &'a GenerationConfig,
}

impl<'a> SourceEmitter<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }
}

impl Emitter for SourceEmitter<'_> {
    fn prologue(&self) -> String {
        format!(
            "// Start of generated enum strings section\n\nchar *{}(char **arr, int val, int max);\n",
            self.config.helper_name
        )
    }

    fn helper(&self) -> Option<String> {
        if self.config.reuse_helper {
            return None;
        }
        Some(helper_definition(&self.config.helper_name))
    }

    fn group(&self, group: &EmissionGroup) -> String {
        let array = format!("{}{}", self.config.array_prefix, group.owning_name);
        let mut out = format!("char *{}[] = {{\n", array);

        for member in &group.members {
            if member.value >= self.config.max_value {
                tracing::debug!(
                    name = %member.display_name,
                    value = member.value,
                    max = self.config.max_value,
                    "value out of range, left out of {}",
                    array
                );
                continue;
            }
            out.push_str(&format!(
                "\t[{0}] \"{1} ({0})\",\n",
                member.value, member.display_name
            ));
        }

        out.push_str(&format!("}};    // end of {}\n\n", array));
        out.push_str(&format!(
            "{signature} {{ return {helper}({array}, (int)val, sizeof({array}) / sizeof(char*)); }}\n\n",
            signature = lookup_signature(self.config, group),
            helper = self.config.helper_name,
        ));
        out
    }

    fn epilogue(&self) -> String {
        "// End of generated enum strings section\n".to_string()
    }
}

/// Bounds-checked lookup shared by every generated function. `max` is the
/// realized length of the array it is handed.
fn helper_definition(name: &str) -> String {
    format!(
        "
char *{name}(char **arr, int val, int max) {{
    if (val < 0 || val >= max) {{
        return \"{ERROR_SENTINEL}\";
    }}
    if (arr[val] == (void*)0) {{
        return \"{MISSING_SENTINEL}\";
    }}
    return arr[val];
}}

"
    )
}
