// Integration tests for the lexer + grammar pipeline

use lexgram::{check, check_with, tokenize, Analyzer, AnalyzerOptions, Code, Error, VariableState};
use std::fs;
use std::path::Path;

fn demo(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name);
    fs::read_to_string(path).expect("Failed to read demo program")
}

#[test]
fn test_declared_before_use() {
    let result = check("begin count:=10; total:=count+1 end #");
    assert_eq!(result, Ok(true));
}

#[test]
fn test_demo_assignments() {
    let source = demo("assign.txt");

    let mut analyzer = Analyzer::from_source(&source).expect("Tokenizing failed");
    let result = analyzer.analyse();

    assert_eq!(result, Ok(true), "Analysis failed: {:?}", result);
    for name in ["a", "b", "c", "d"] {
        assert_eq!(
            analyzer.variables().state(name),
            Some(VariableState::Enabled),
            "variable {name}"
        );
    }
}

#[test]
fn test_demo_comments() {
    let source = demo("commented.txt");
    assert_eq!(check(&source), Ok(true));

    let tokens = tokenize(&source).unwrap();
    assert_eq!(tokens.first().map(|t| t.code), Some(Code::Begin));
    assert_eq!(tokens.last().map(|t| t.code), Some(Code::Hash));
}

#[test]
fn test_demo_self_reference() {
    let err = check(&demo("self_reference.txt")).unwrap_err();
    assert!(err.is_undeclared_variable(), "unexpected error: {err}");
}

#[test]
fn test_demo_unbalanced() {
    let err = check(&demo("unbalanced.txt")).unwrap_err();
    assert!(err.is_grammar_error());
    assert!(err.to_string().contains("unbalanced parentheses"));
}

#[test]
fn test_demo_open_comment() {
    let err = check(&demo("open_comment.txt")).unwrap_err();
    assert!(err.is_comment_error());
    assert!(matches!(err, Error::Lex(_)));
}

#[test]
fn test_parenthesis_balance() {
    assert_eq!(check("begin x:=(1+2)*3 end #"), Ok(true));
    assert!(check("begin x:=(1+2*3 end #").unwrap_err().is_grammar_error());
}

#[test]
fn test_missing_begin_fails_at_first_token() {
    match check("x:=1; end #") {
        Err(Error::Analysis(err)) => {
            assert!(err.is_grammar_error());
            assert_eq!(err.position(), 0);
        }
        other => panic!("Expected grammar error, got {:?}", other),
    }
}

#[test]
fn test_comments_do_not_change_tokens() {
    assert_eq!(
        tokenize("/* a */ begin /* b */ end #").unwrap(),
        tokenize("begin end #").unwrap()
    );
}

#[test]
fn test_whitespace_free_tokenization() {
    assert_eq!(tokenize("x:=x+1;").unwrap(), tokenize("x := x + 1 ;").unwrap());
}

#[test]
fn test_rerun_gives_same_verdict() {
    let source = demo("commented.txt");
    let first = check(&source);
    let second = check(&source);
    assert_eq!(first, second);
    assert_eq!(first, Ok(true));
}

#[test]
fn test_unclassified_lexeme() {
    let err = check("begin x := 3.5 end #").unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
    assert!(!err.is_comment_error());
}

#[test]
fn test_strict_options() {
    let source = "begin x; y:=1 end #";
    assert_eq!(check(source), Ok(true));

    let err = check_with(source, AnalyzerOptions::strict()).unwrap_err();
    assert!(err.is_grammar_error());
}

#[test]
fn test_program_without_end_marker() {
    assert_eq!(check("begin x:=1;"), Ok(false));
    assert!(check("begin x:=1").unwrap_err().is_grammar_error());
}
