// ABOUTME: Splits raw command arguments into prefix-keyed values and a preamble
// ABOUTME: Prefixes only count at the start of the text or after whitespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

/// Values found for each recognised prefix, plus the text before the first one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<String, Vec<String>>,
}

impl ArgumentMultimap {
    /// Last value given for `prefix`, if any
    #[must_use]
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in order of appearance
    #[must_use]
    pub fn all_values(&self, prefix: &str) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether at least one of `prefixes` has a value
    #[must_use]
    pub fn contains_any(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|prefix| self.value(prefix).is_some())
    }

    /// Trimmed text before the first recognised prefix
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }
}

/// Tokenize `args` against the given prefixes.
///
/// Unknown `word/` markers are not split out; they stay part of the preamble
/// or of the preceding value.
#[must_use]
pub fn tokenize(args: &str, prefixes: &[&str]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, &str)> = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix)
                .filter(|(idx, _)| starts_token(args, *idx))
                .map(move |(idx, _)| (idx, *prefix))
        })
        .collect();
    positions.sort_unstable_by_key(|(idx, _)| *idx);

    let preamble_end = positions.first().map_or(args.len(), |(idx, _)| *idx);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_owned(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry((*prefix).to_owned())
            .or_default()
            .push(args[value_start..value_end].trim().to_owned());
    }

    multimap
}

fn starts_token(args: &str, idx: usize) -> bool {
    idx == 0
        || args[..idx]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace)
}
