//! Tolerant enum matcher.
//!
//! Finds enum declarations anywhere in comment-stripped C source without
//! parsing the rest of it. Three forms are recognized:
//!
//! 1. `enum Tag { ... } [var] ;`
//! 2. `typedef enum { ... } Alias ;`
//! 3. `typedef enum Tag { ... } Alias ;`
//!
//! Everything else (function bodies, other declarations, prose) is skipped
//! silently. Enumerator values must be plain unsigned decimal literals; a
//! list containing anything else (`A = 1 << 2`, `B = FOO`) is not a match.

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

const IDENT: &str = r"[A-Za-z_][A-Za-z0-9_]*";

static RE_ENUM: LazyLock<Regex> = LazyLock::new(|| {
    let item = format!(r"{IDENT}(?:\s*=\s*[0-9]+)?");
    let list = format!(r"{item}(?:\s*,\s*{item})*(?:\s*,)?");
    let typedef_form = format!(
        r"\btypedef\s+enum\b\s*(?P<ttag>{IDENT})?\s*\{{\s*(?P<tlist>{list})?\s*\}}\s*(?P<alias>{IDENT})\s*;"
    );
    let enum_form =
        format!(r"\benum\s+(?P<tag>{IDENT})\s*\{{\s*(?P<list>{list})\s*\}}\s*(?:{IDENT}\s*)?;");
    Regex::new(&format!("{typedef_form}|{enum_form}")).unwrap()
});

/// One enumerator inside a list, e.g. `Five = 5` or `Six`.
static RE_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?P<name>{IDENT})(?:\s*=\s*(?P<value>[0-9]+))?")).unwrap());

/// A single `name [= value]` entry of an enumerator list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumeratorRef {
    pub name: String,
    pub explicit_value: Option<u64>,
}

/// An enum declaration located in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// Name after `enum`, if any.
    pub tag: Option<String>,
    /// Name introduced by `typedef`, if any.
    pub alias: Option<String>,
    pub entries: Vec<EnumeratorRef>,
    /// Byte range of the whole declaration, `;` included.
    pub span: Range<usize>,
    /// 1-based line of the declaration start.
    pub line: usize,
}

impl RawMatch {
    /// The name the generated array and function are keyed by: the typedef
    /// alias when there is one, otherwise the tag. The grammar guarantees at
    /// least one of the two.
    pub fn owning_name(&self) -> &str {
        self.alias.as_deref().or(self.tag.as_deref()).unwrap_or_default()
    }

    pub fn is_alias_form(&self) -> bool {
        self.alias.is_some()
    }
}

/// Lazily scan `text` for enum declarations, in order of appearance.
pub fn scan(text: &str) -> impl Iterator<Item = RawMatch> + '_ {
    let mut line = 1;
    let mut counted = 0;
    RE_ENUM.captures_iter(text).map(move |caps| {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        line += text[counted..whole.start].matches('\n').count();
        counted = whole.start;
        let raw = build_match(&caps, whole, line);
        tracing::debug!(
            line = raw.line,
            name = raw.owning_name(),
            entries = raw.entries.len(),
            "enum matched"
        );
        if raw.entries.is_empty() {
            tracing::warn!(line = raw.line, name = raw.owning_name(), "empty enumerator list");
        }
        raw
    })
}

fn build_match(caps: &Captures<'_>, span: Range<usize>, line: usize) -> RawMatch {
    let text = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

    let (tag, alias, list) = if caps.name("alias").is_some() {
        (text("ttag"), text("alias"), caps.name("tlist"))
    } else {
        (text("tag"), None, caps.name("list"))
    };

    RawMatch {
        tag,
        alias,
        entries: list.map_or_else(Vec::new, |list| parse_list(list.as_str())),
        span,
        line,
    }
}

/// Split an already validated enumerator list into its entries.
fn parse_list(list: &str) -> Vec<EnumeratorRef> {
    RE_ITEM
        .captures_iter(list)
        .map(|item| EnumeratorRef {
            name: item["name"].to_string(),
            // Literals too large for u64 saturate; emission filters them anyway.
            explicit_value: item
                .name("value")
                .map(|v| v.as_str().parse().unwrap_or(u64::MAX)),
        })
        .collect()
}
