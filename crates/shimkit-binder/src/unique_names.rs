//! Unit-scoped unique name generation.

use crate::globals::is_reserved_word;
use crate::state::BinderState;
use tracing::debug;

/// Turn arbitrary text (a module URL, an export name) into an identifier:
/// non-identifier characters split words, words are camel-cased, and a
/// leading `_` is added when the result is not a valid identifier.
#[must_use]
pub fn to_identifier(input: &str) -> String {
    let dashed: String = input
        .chars()
        .map(|c| if is_identifier_char(c) { c } else { '-' })
        .collect();
    let trimmed = dashed.trim_start_matches(|c: char| c == '-' || c.is_ascii_digit());

    let mut name = String::with_capacity(trimmed.len());
    let mut upper_next = false;
    for c in trimmed.chars() {
        if c == '-' || c.is_whitespace() {
            upper_next = true;
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }

    if name.is_empty() || is_reserved_word(&name) {
        name.insert(0, '_');
    }
    name
}

fn is_identifier_char(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

impl BinderState {
    /// Generate `_hint`, `_hint2`, `_hint3`, ... skipping every name declared
    /// or referenced in the unit and every name generated before.
    pub fn generate_unique_name(&mut self, hint: &str) -> String {
        let identifier = to_identifier(hint);
        let base = identifier
            .trim_start_matches('_')
            .trim_end_matches(|c: char| c.is_ascii_digit());

        let mut i = 1u32;
        loop {
            let candidate = if i > 1 {
                format!("_{base}{i}")
            } else {
                format!("_{base}")
            };
            if !self.is_name_taken(&candidate) {
                debug!(hint, name = %candidate, "generated unique name");
                self.used_names.insert(candidate.clone());
                self.uids.insert(candidate.clone());
                return candidate;
            }
            i += 1;
        }
    }

    /// Whether `name` is already used in the unit.
    #[must_use]
    pub fn is_name_taken(&self, name: &str) -> bool {
        self.used_names.contains(name)
            || self.uids.contains(name)
            || self.unresolved_names.contains(name)
            || crate::globals::is_global_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_identifier() {
        assert_eq!(to_identifier("foo"), "foo");
        assert_eq!(to_identifier("core-js/modules/es.array.from"), "coreJsModulesEsArrayFrom");
        assert_eq!(to_identifier("123abc"), "abc");
        assert_eq!(to_identifier("class"), "_class");
        assert_eq!(to_identifier("---"), "_");
        assert_eq!(to_identifier("@babel/runtime"), "babelRuntime");
    }

    #[test]
    fn test_generate_unique_name_sequence() {
        let mut binder = BinderState::new();
        assert_eq!(binder.generate_unique_name("foo"), "_foo");
        assert_eq!(binder.generate_unique_name("foo"), "_foo2");
        assert_eq!(binder.generate_unique_name("_foo3"), "_foo3");
        assert_eq!(binder.generate_unique_name("foo"), "_foo4");
    }
}
