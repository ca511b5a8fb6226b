//! Property-based tests for the tokenizer and the pipeline.
//!
//! 1. **Tokenizer never panics** on arbitrary input
//! 2. **Whitespace insensitivity** around operators
//! 3. **Comment insertion** between lexemes does not change the tokens
//! 4. **Determinism** of the full check
//! 5. **Chained assignments** that read only earlier targets are accepted

use lexgram::{check, tokenize};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

const VALUES: &[&str] = &["x", "y1", "total", "a2b", "0", "42", "1000"];

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", ":", "<", "<>", "<=", ">", ">=", "=", ":=", ";", "#",
];

const CHAIN_OPERATORS: &[&str] = &["+", "-", "*", "/", "<", ">=", "<>"];

fn value() -> impl Strategy<Value = String> {
    prop::sample::select(VALUES).prop_map(str::to_string)
}

fn operator() -> impl Strategy<Value = String> {
    prop::sample::select(OPERATORS).prop_map(str::to_string)
}

/// Alternating value / operator lexemes, so that no two lexemes can merge
/// when written without separators.
fn alternating_lexemes() -> impl Strategy<Value = Vec<String>> {
    (value(), prop::collection::vec((operator(), value()), 0..12)).prop_map(|(first, rest)| {
        let mut lexemes = vec![first];
        for (op, val) in rest {
            lexemes.push(op);
            lexemes.push(val);
        }
        lexemes
    })
}

/// A program of assignments `v0 := n; v1 := v0 op n; ...`.
fn chained_program() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::sample::select(CHAIN_OPERATORS), 0u32..1000),
        0..10,
    )
    .prop_map(|steps| {
        let mut statements = vec!["v0 := 1".to_string()];
        for (i, (op, n)) in steps.iter().enumerate() {
            statements.push(format!("v{} := (v{} {} {})", i + 1, i, op, n));
        }
        format!("begin {} end #", statements.join("; "))
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn tokenizer_never_panics(input in "\\PC{0,80}") {
        let _ = tokenize(&input);
    }

    #[test]
    fn separators_are_optional_around_operators(lexemes in alternating_lexemes()) {
        let spaced = tokenize(&lexemes.join(" ")).unwrap();
        let packed = tokenize(&lexemes.concat()).unwrap();
        prop_assert_eq!(spaced, packed);
    }

    #[test]
    fn comments_between_lexemes_are_invisible(lexemes in alternating_lexemes()) {
        let plain = tokenize(&lexemes.join(" ")).unwrap();
        let block = tokenize(&lexemes.join(" /* note */ ")).unwrap();
        let line = tokenize(&lexemes.join(" // note\n")).unwrap();
        prop_assert_eq!(&plain, &block);
        prop_assert_eq!(&plain, &line);

        // Without spaces the comment and its line break vanish entirely,
        // as if the lexemes were written back to back.
        if !lexemes.iter().any(|lexeme| lexeme == "/") {
            let joined = tokenize(&lexemes.join("// note\n")).unwrap();
            prop_assert_eq!(&plain, &joined);
        }
    }

    #[test]
    fn check_is_deterministic(lexemes in alternating_lexemes()) {
        let source = format!("begin {} end #", lexemes.join(" "));
        prop_assert_eq!(check(&source), check(&source));
    }

    #[test]
    fn chained_assignments_are_accepted(source in chained_program()) {
        prop_assert_eq!(check(&source), Ok(true));
    }
}
