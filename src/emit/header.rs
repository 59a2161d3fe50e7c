//! Header mode: lookup declarations inside an include guard.

use crate::config::GenerationConfig;
use crate::emit::{lookup_signature, Emitter};
use crate::resolve::EmissionGroup;

pub struct HeaderEmitter<'a> {
    config: &'a GenerationConfig,
    guard: String,
}

impl<'a> HeaderEmitter<'a> {
    pub fn new(config: &'a GenerationConfig, header_file: &str) -> Self {
        Self {
            config,
            guard: guard_name(header_file),
        }
    }
}

impl Emitter for HeaderEmitter<'_> {
    fn prologue(&self) -> String {
        format!(
            "// Auto generated header for enum strings\n#ifndef __{0}\n#define __{0}\n",
            self.guard
        )
    }

    fn helper(&self) -> Option<String> {
        None
    }

    fn group(&self, group: &EmissionGroup) -> String {
        format!("{};\n", lookup_signature(self.config, group))
    }

    fn epilogue(&self) -> String {
        format!("#endif   // __{}\n", self.guard)
    }
}

/// Include guard for a header path: `/` and `.` become `_`, alphanumerics
/// are upper-cased and anything else is dropped.
/// "include/enum-str.h" → "INCLUDE_ENUMSTR_H"
fn guard_name(header_file: &str) -> String {
    header_file
        .chars()
        .filter_map(|c| match c {
            '/' | '.' => Some('_'),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_uppercase()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Member;

    fn config() -> GenerationConfig {
        GenerationConfig {
            header_file: Some("gen/enumstr.h".to_string()),
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn guard_from_path() {
        assert_eq!(guard_name("gen/enumstr.h"), "GEN_ENUMSTR_H");
        assert_eq!(guard_name("include/enum-str.h"), "INCLUDE_ENUMSTR_H");
    }

    #[test]
    fn prologue_and_epilogue() {
        let config = config();
        let emitter = HeaderEmitter::new(&config, "gen/enumstr.h");
        assert_eq!(
            emitter.prologue(),
            "// Auto generated header for enum strings\n#ifndef __GEN_ENUMSTR_H\n#define __GEN_ENUMSTR_H\n"
        );
        assert_eq!(emitter.epilogue(), "#endif   // __GEN_ENUMSTR_H\n");
    }

    #[test]
    fn group_is_declaration_only() {
        let config = config();
        let emitter = HeaderEmitter::new(&config, "gen/enumstr.h");
        let group = EmissionGroup {
            owning_name: "Hello".to_string(),
            is_alias_form: false,
            members: vec![Member {
                display_name: "ZERO".to_string(),
                value: 0,
            }],
        };
        assert_eq!(emitter.group(&group), "char *_str_Hello(enum Hello val);\n");
    }
}
