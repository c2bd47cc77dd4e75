//! Textual rewrite rules and the ordered engine that applies them.
//!
//! Rules are plain regex substitutions over whole-file text. They have no
//! notion of syntax, so a match inside a string literal or a comment is
//! rewritten like any other.

use anyhow::{Context, Result, anyhow};
use regex::Regex;

/// Static description of a rewrite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    /// Stable id, named after the lint rule the rewrite satisfies.
    pub id: &'static str,
    /// One-line human summary.
    pub summary: &'static str,
    pattern: &'static str,
    replacement: &'static str,
}

/// `a?.b || c` -> `a?.b ?? c`. Whitespace around the operator is kept.
pub const PREFER_NULLISH_COALESCING: RuleSpec = RuleSpec {
    id: "prefer-nullish-coalescing",
    summary: "replace `||` with `??` after an optional-chain access",
    pattern: r"(\w+\?\.\w+)(\s*)\|\|",
    replacement: "${1}${2}??",
};

/// Every rule the engine knows, in application order.
pub const CATALOGUE: &[RuleSpec] = &[PREFER_NULLISH_COALESCING];

/// Look up a catalogue rule by id.
pub fn find_rule(id: &str) -> Option<&'static RuleSpec> {
    CATALOGUE.iter().find(|rule| rule.id == id)
}

#[derive(Debug, Clone)]
struct CompiledRule {
    spec: &'static RuleSpec,
    regex: Regex,
}

/// Ordered, compiled list of rules enabled for one run.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

/// Whether rule application changed a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Unchanged,
    Modified,
}

/// Result of running a `RuleSet` over one file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Number of individual substitutions across all rules.
    pub fixes: usize,
    pub state: FileState,
}

impl Rewrite {
    pub fn is_modified(&self) -> bool {
        self.state == FileState::Modified
    }
}

impl RuleSet {
    /// Compile the whole catalogue in order.
    pub fn all() -> Result<Self> {
        Self::from_specs(CATALOGUE.iter())
    }

    /// Compile the rules named by `ids`, in the given order.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self> {
        let specs = ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                find_rule(id).ok_or_else(|| anyhow!("unknown rule '{id}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_specs(specs)
    }

    fn from_specs(specs: impl IntoIterator<Item = &'static RuleSpec>) -> Result<Self> {
        let rules = specs
            .into_iter()
            .map(|spec| -> Result<CompiledRule> {
                let regex = Regex::new(spec.pattern)
                    .with_context(|| format!("compile pattern for rule {}", spec.id))?;
                Ok(CompiledRule { spec, regex })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.spec.id)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order. Later rules see the output of earlier ones.
    pub fn apply(&self, source: &str) -> Rewrite {
        let mut content = source.to_string();
        let mut fixes = 0;
        for rule in &self.rules {
            let hits = rule.regex.find_iter(&content).count();
            if hits == 0 {
                continue;
            }
            content = rule
                .regex
                .replace_all(&content, rule.spec.replacement)
                .into_owned();
            fixes += hits;
        }
        let state = if content == source {
            FileState::Unchanged
        } else {
            FileState::Modified
        };
        Rewrite {
            content,
            fixes,
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RuleSet {
        RuleSet::all().expect("compile catalogue")
    }

    #[test]
    fn text_without_pattern_is_unchanged() {
        let source = "const a = b || c;\nconst d = e?.f;\n";
        let rewrite = engine().apply(source);
        assert_eq!(rewrite.content, source);
        assert_eq!(rewrite.state, FileState::Unchanged);
        assert_eq!(rewrite.fixes, 0);
    }

    #[test]
    fn optional_chain_or_becomes_nullish() {
        let rewrite = engine().apply("a?.b || c");
        assert_eq!(rewrite.content, "a?.b ?? c");
        assert!(rewrite.is_modified());
        assert_eq!(rewrite.fixes, 1);
    }

    #[test]
    fn spacing_around_operator_is_preserved() {
        let rewrite = engine().apply("const x = obj?.val||'d';\nconst y = obj?.val   || 1;");
        assert_eq!(
            rewrite.content,
            "const x = obj?.val??'d';\nconst y = obj?.val   ?? 1;"
        );
    }

    #[test]
    fn applying_twice_matches_applying_once() {
        let source = "const x = user?.name || 'anon';\nif (a || b) {}\n";
        let once = engine().apply(source);
        let twice = engine().apply(&once.content);
        assert_eq!(twice.content, once.content);
        assert_eq!(twice.state, FileState::Unchanged);
    }

    #[test]
    fn all_matches_rewritten_in_one_pass() {
        let source = "const a = x?.y || 1;\nconst b = p?.q || 2;\n";
        let rewrite = engine().apply(source);
        assert_eq!(rewrite.content, "const a = x?.y ?? 1;\nconst b = p?.q ?? 2;\n");
        assert_eq!(rewrite.fixes, 2);
        assert!(rewrite.is_modified());
    }

    #[test]
    fn only_operator_after_chain_is_rewritten() {
        let rewrite = engine().apply("a?.b || c || d");
        assert_eq!(rewrite.content, "a?.b ?? c || d");
    }

    #[test]
    fn deeper_chain_matches_last_segment() {
        let rewrite = engine().apply("user?.profile?.name || ''");
        assert_eq!(rewrite.content, "user?.profile?.name ?? ''");
    }

    #[test]
    fn matches_inside_string_literals_too() {
        let rewrite = engine().apply(r#"const s = "a?.b || c";"#);
        assert_eq!(rewrite.content, r#"const s = "a?.b ?? c";"#);
    }

    #[test]
    fn from_ids_rejects_unknown_rule() {
        let err = RuleSet::from_ids(&["no-such-rule"]).expect_err("unknown id");
        assert!(err.to_string().contains("unknown rule 'no-such-rule'"));
    }

    #[test]
    fn empty_rule_set_changes_nothing() {
        let rules = RuleSet::from_ids::<&str>(&[]).expect("empty set");
        assert!(rules.is_empty());
        let rewrite = rules.apply("a?.b || c");
        assert_eq!(rewrite.state, FileState::Unchanged);
    }
}
