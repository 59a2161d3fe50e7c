//! enumstr — generate string lookup tables for C/C++ enums.
//!
//! Processes each source file through four stages:
//!
//! 1. **Strip** — remove comments, leaving string and char literals intact
//! 2. **Scan** — locate `enum` / `typedef enum` declarations, skip the rest
//! 3. **Resolve** — assign enumerator values and group them by owning name
//! 4. **Emit** — write a string array and lookup function per group
//!    (or only the declarations, when generating a header)
//!
//! Generated code goes to stdout; the per-enum functions call a shared
//! bounds-checked helper that returns `"<ERROR>"` or `"<?>"` for values
//! without a string.

mod config;
mod emit;
mod logging;
mod resolve;
mod sample;
mod scan;
mod strip;

use anyhow::{Context, Result};
use clap::Parser;
use config::{
    GenerationConfig, DEFAULT_ARRAY_PREFIX, DEFAULT_FUNCTION_PREFIX, DEFAULT_HELPER_NAME,
    DEFAULT_MAX_VALUE,
};
use emit::Emitter;
use resolve::GroupResolver;
use std::fs;
use std::io::{self, BufWriter, Write};

#[derive(Parser)]
#[command(name = "enumstr", about = "Generate enum strings for c/cpp headers")]
struct Cli {
    /// C/C++ source files to parse
    sources: Vec<String>,

    /// Use the internal sample text instead of the source files
    #[arg(long)]
    sample: bool,

    /// Dump the matched enum sections
    #[arg(short = 'E', long)]
    dump: bool,

    /// Do not emit the lookup helper function
    #[arg(long)]
    reuse: bool,

    /// Do not #include the source files
    #[arg(long = "skip_includes")]
    skip_includes: bool,

    /// Max entries and max value per enum
    #[arg(
        short = 'M',
        long = "max",
        default_value_t = DEFAULT_MAX_VALUE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max: u64,

    /// Prefix of the string arrays
    #[arg(short = 'A', long = "array_prefix", value_name = "STR", default_value = DEFAULT_ARRAY_PREFIX)]
    array_prefix: String,

    /// Lookup helper to use: char *fn(char **arr, int val, int max)
    #[arg(short = 'S', long = "enum_fn", value_name = "FN", default_value = DEFAULT_HELPER_NAME)]
    enum_fn: String,

    /// Prefix of the enum to string functions
    #[arg(short = 'F', long = "fn_prefix", value_name = "STR", default_value = DEFAULT_FUNCTION_PREFIX)]
    fn_prefix: String,

    /// Emit a header with declarations only, guarded by FILE's name
    #[arg(long = "gen_header", value_name = "FILE")]
    gen_header: Option<String>,

    /// #include FILE ahead of the sources
    #[arg(long = "use_header", value_name = "FILE")]
    use_header: Option<String>,
}

impl Cli {
    fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            array_prefix: self.array_prefix.clone(),
            function_prefix: self.fn_prefix.clone(),
            helper_name: self.enum_fn.clone(),
            max_value: self.max,
            header_file: self.gen_header.clone(),
            use_header: self.use_header.clone(),
            reuse_helper: self.reuse,
            skip_includes: self.skip_includes,
            dump: self.dump,
        }
    }
}

/// Run strip → scan → resolve → emit over one source text.
fn generate(source: &str, config: &GenerationConfig, emitter: &dyn Emitter) -> String {
    let text = strip::strip_comments(source);
    let mut out = String::new();
    let mut resolver = GroupResolver::new();

    for raw in scan::scan(&text) {
        if let Some(group) = resolver.push(&raw) {
            out.push_str(&emitter.group(&group));
        }
        if config.dump {
            out.push_str(&emit::dump_section(&text[raw.span.clone()]));
        }
    }
    if let Some(group) = resolver.finish() {
        out.push_str(&emitter.group(&group));
    }
    out
}

/// Read a source file. Bytes that are not UTF-8 (legacy comments, mostly)
/// are replaced rather than failing the whole file.
fn read_source(path: &str) -> Result<String> {
    let bytes = fs::read(path).context("failed to read file")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the whole document. An unreadable source is reported and skipped;
/// only failures to write `out` abort.
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.generation_config();
    let emitter = emit::create_emitter(&config);

    let mut head = emitter.prologue();
    head.push_str(&emit::includes(&config, &cli.sources));
    if let Some(helper) = emitter.helper() {
        head.push_str(&helper);
    }
    write_flushed(out, &head)?;

    if cli.sample {
        tracing::info!("scanning built-in sample");
        let mut body = generate(sample::SAMPLE_SOURCE, &config, emitter.as_ref());
        if !config.header_mode() {
            body.push_str(&sample::sample_main(&config.function_prefix));
        }
        write_flushed(out, &body)?;
    } else {
        for path in &cli.sources {
            match read_source(path) {
                Ok(source) => {
                    tracing::info!(file = %path, "scanning");
                    write_flushed(out, &generate(&source, &config, emitter.as_ref()))?;
                }
                Err(err) => eprintln!("warning: skipping {}: {:#}", path, err),
            }
        }
    }

    write_flushed(out, &emitter.epilogue())
}

fn write_flushed(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write output")
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    let mut out = BufWriter::new(io::stdout().lock());
    run(&cli, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(args: &[&str]) -> String {
        let cli = Cli::parse_from(std::iter::once("enumstr").chain(args.iter().copied()));
        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn generate_default(source: &str) -> String {
        let config = GenerationConfig::default();
        let emitter = emit::create_emitter(&config);
        generate(source, &config, emitter.as_ref())
    }

    #[test]
    fn read_source_replaces_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"/* caf\xe9 */ enum Menu { Soup, Salad };\n").unwrap();
        let path = file.path().to_str().unwrap();
        let source = read_source(path).unwrap();
        assert!(source.contains('\u{FFFD}'), "Got: {source}");
        let out = generate_default(&source);
        assert!(out.contains("\t[1] \"SALAD (1)\",\n"), "Got: {out}");
    }

    #[test]
    fn read_source_reports_missing_file() {
        let err = read_source("/nonexistent/enumstr_missing.c").unwrap_err();
        assert!(format!("{:#}", err).starts_with("failed to read file: "));
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["enumstr", "a.c"]);
        let config = cli.generation_config();
        assert_eq!(config.array_prefix, "_strarr_");
        assert_eq!(config.function_prefix, "_str_");
        assert_eq!(config.helper_name, "_EnumStr");
        assert_eq!(config.max_value, 256);
        assert!(!config.header_mode());
        assert_eq!(cli.sources, ["a.c"]);
    }

    #[test]
    fn cli_rejects_zero_max() {
        assert!(Cli::try_parse_from(["enumstr", "--max", "0"]).is_err());
    }

    #[test]
    fn pipeline_ignores_commented_enum() {
        let out = generate_default("/* enum Old { A }; */\n// enum Older { B };\nenum New { C };");
        assert!(!out.contains("Old"), "Got: {out}");
        assert!(out.contains("char *_strarr_New[] = {"), "Got: {out}");
    }

    #[test]
    fn pipeline_merges_consecutive_groups() {
        let out = generate_default("enum M { A, B };\nenum M { C };");
        assert_eq!(out.matches("char *_strarr_M[] = {").count(), 1, "Got: {out}");
        assert!(out.contains("\t[0] \"A (0)\",\n\t[1] \"B (1)\",\n\t[0] \"C (0)\",\n"));
    }

    #[test]
    fn pipeline_dump_precedes_group() {
        let config = GenerationConfig {
            dump: true,
            ..GenerationConfig::default()
        };
        let emitter = emit::create_emitter(&config);
        let out = generate("x; enum D { A }; y;", &config, emitter.as_ref());
        let dump = out.find("// Source text section:\nenum D { A };\n").unwrap();
        let array = out.find("char *_strarr_D[]").unwrap();
        assert!(dump < array, "Got: {out}");
    }

    #[test]
    fn document_order_in_source_mode() {
        let out = render(&["--sample"]);
        let start = out.find("// Start of generated enum strings section").unwrap();
        let helper = out.find("char *_EnumStr(char **arr, int val, int max) {").unwrap();
        let hello = out.find("char *_strarr_Hello[] = {").unwrap();
        let blah = out.find("char *_strarr_Blah[] = {").unwrap();
        let kiki = out.find("char *_strarr_Kiki[] = {").unwrap();
        let main = out.find("int main(int argc, char **argv)").unwrap();
        let end = out.find("// End of generated enum strings section").unwrap();
        assert!(start < helper && helper < hello && hello < blah);
        assert!(blah < kiki && kiki < main && main < end);
        assert!(!out.contains("LARGE"), "Got: {out}");
    }

    #[test]
    fn sample_in_header_mode() {
        let out = render(&["--sample", "--gen_header", "enumstr.h"]);
        assert!(out.starts_with("// Auto generated header for enum strings\n#ifndef __ENUMSTR_H\n"));
        assert!(out.contains("char *_str_Hello(enum Hello val);\n"));
        assert!(out.contains("char *_str_Blah(Blah val);\n"));
        assert!(out.contains("char *_str_Kiki(Kiki val);\n"));
        assert!(out.ends_with("#endif   // __ENUMSTR_H\n"));
        assert!(!out.contains("[] = {"), "Got: {out}");
        assert!(!out.contains("<ERROR>"), "Got: {out}");
        assert!(!out.contains("int main"), "Got: {out}");
    }

    #[test]
    fn missing_file_still_closes_document() {
        let out = render(&["/nonexistent/enumstr_missing.c"]);
        assert!(out.contains("#include \"/nonexistent/enumstr_missing.c\""));
        assert!(out.ends_with("// End of generated enum strings section\n"));
    }
}
