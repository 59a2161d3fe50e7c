//! Enumerator value assignment and grouping.
//!
//! Each match's entries get C's enumerator values: an explicit `= v` wins
//! and the next implicit entry continues at `v + 1`; implicit entries
//! otherwise count up from 0. The counter restarts for every match, even
//! when that match merges into an already open group.
//!
//! Entries are collected into [`EmissionGroup`]s keyed by owning name.
//! Consecutive matches with the same owning name extend one group; a group
//! closes as soon as a match with a different owning name arrives.

use crate::scan::RawMatch;

/// One array slot: upper-cased display name and resolved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub display_name: String,
    pub value: u64,
}

/// Enumerators destined for one generated array/function pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionGroup {
    pub owning_name: String,
    /// Keyed by a typedef alias, so the lookup parameter is spelled
    /// `Name val` rather than `enum Name val`.
    pub is_alias_form: bool,
    pub members: Vec<Member>,
}

impl EmissionGroup {
    fn open(raw: &RawMatch) -> Self {
        Self {
            owning_name: raw.owning_name().to_string(),
            is_alias_form: raw.is_alias_form(),
            members: Vec::new(),
        }
    }
}

/// C enumerator counter, scoped to a single match.
#[derive(Debug, Default)]
struct RunningCounter {
    next: u64,
}

impl RunningCounter {
    fn resolve(&mut self, explicit: Option<u64>) -> u64 {
        let value = explicit.unwrap_or(self.next);
        self.next = value.saturating_add(1);
        value
    }
}

/// Accumulates matches from one file into emission groups.
#[derive(Debug, Default)]
pub struct GroupResolver {
    open: Option<EmissionGroup>,
}

impl GroupResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `raw` into the open group. Returns the previously open group
    /// when `raw` belongs to a different owning name.
    pub fn push(&mut self, raw: &RawMatch) -> Option<EmissionGroup> {
        let owner = raw.owning_name();
        let owner_changed = self
            .open
            .as_ref()
            .is_some_and(|group| group.owning_name != owner);
        let closed = if owner_changed { self.open.take() } else { None };
        if let Some(ref group) = closed {
            tracing::debug!(name = %group.owning_name, members = group.members.len(), "group closed");
        }

        let group = match self.open.as_mut() {
            Some(group) => {
                tracing::debug!(name = owner, line = raw.line, "merging into open group");
                group
            }
            None => {
                tracing::debug!(name = owner, alias = raw.is_alias_form(), "group opened");
                self.open.insert(EmissionGroup::open(raw))
            }
        };

        let mut counter = RunningCounter::default();
        group.members.extend(raw.entries.iter().map(|entry| Member {
            display_name: entry.name.to_uppercase(),
            value: counter.resolve(entry.explicit_value),
        }));

        closed
    }

    /// Close and return the group still open at end of input.
    pub fn finish(self) -> Option<EmissionGroup> {
        if let Some(ref group) = self.open {
            tracing::debug!(name = %group.owning_name, members = group.members.len(), "group closed");
        }
        self.open
    }
}

/// Resolve a whole match sequence eagerly.
#[cfg(test)]
pub fn resolve<'a>(matches: impl IntoIterator<Item = &'a RawMatch>) -> Vec<EmissionGroup> {
    let mut resolver = GroupResolver::new();
    let mut groups: Vec<EmissionGroup> = matches
        .into_iter()
        .filter_map(|raw| resolver.push(raw))
        .collect();
    groups.extend(resolver.finish());
    groups
}
