//! Text-level rewrite of neutral markup into a target dialect.
//!
//! Used for markup that only exists as text, such as snippets taken from the
//! reference catalogs. Rules run in order, each replacing every occurrence.
//! No rule produces text matched by an earlier rule, so one pass suffices.

use pagekit_core::{Dialect, Target};

/// A single keyword substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub from: &'static str,
    pub to: &'static str,
}

const HTML_RULES: &[Rule] = &[
    // class attribute
    Rule { from: "className=", to: "class=" },
    // label target
    Rule { from: "htmlFor=", to: "for=" },
    // comments
    Rule { from: "{/*", to: "<!--" },
    Rule { from: "*/}", to: "-->" },
    // SVG presentation attributes
    Rule { from: "strokeWidth=", to: "stroke-width=" },
    Rule { from: "strokeLinecap=", to: "stroke-linecap=" },
    Rule { from: "strokeLinejoin=", to: "stroke-linejoin=" },
];

/// Ordered rewrite rules for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxTransformer {
    rules: &'static [Rule],
}

impl SyntaxTransformer {
    /// Transformer producing the given dialect from neutral markup.
    ///
    /// Neutral markup already is JSX, so the JSX rule set is empty.
    pub fn for_dialect(dialect: Dialect) -> Self {
        let rules: &'static [Rule] = match dialect {
            Dialect::Jsx => &[],
            Dialect::Html => HTML_RULES,
        };
        Self { rules }
    }

    /// Transformer for a target's template dialect.
    pub fn for_target(target: Target) -> Self {
        Self::for_dialect(target.dialect())
    }

    /// The rules, in application order.
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Whether this transformer leaves every input unchanged.
    pub fn is_identity(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rewrite `input`.
    pub fn transform(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |acc, rule| acc.replace(rule.from, rule.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_html_rules() {
        let input = r#"{/* Field */}
<label htmlFor="email" className="block">Email</label>
<path strokeLinecap="round" strokeLinejoin="round" strokeWidth="2" />"#;
        let expected = r#"<!-- Field -->
<label for="email" class="block">Email</label>
<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" />"#;
        assert_eq!(
            SyntaxTransformer::for_dialect(Dialect::Html).transform(input),
            expected
        );
    }

    #[test]
    fn test_jsx_targets_are_identity() {
        for target in [Target::React, Target::Nextjs] {
            let transformer = SyntaxTransformer::for_target(target);
            assert!(transformer.is_identity());
            assert_eq!(transformer.transform("<div className=\"x\" />"), "<div className=\"x\" />");
        }
    }

    #[test]
    fn test_rules_do_not_feed_earlier_rules() {
        let rules = SyntaxTransformer::for_dialect(Dialect::Html).rules();
        for (i, later) in rules.iter().enumerate() {
            for earlier in &rules[..=i] {
                assert!(!later.to.contains(earlier.from));
            }
        }
    }

    proptest! {
        #[test]
        fn clean_input_is_unchanged(input in "[a-z0-9 <>=\"/.-]{0,80}") {
            for target in Target::ALL {
                prop_assert_eq!(SyntaxTransformer::for_target(target).transform(&input), input.clone());
            }
        }

        #[test]
        fn transform_is_deterministic(input in "[a-zA-Z0-9 <>=\"/*{}.-]{0,80}") {
            let transformer = SyntaxTransformer::for_target(Target::Vue);
            prop_assert_eq!(transformer.transform(&input), transformer.transform(&input));
        }
    }
}
