//! Edge case tests for sablec-lex

use proptest::prelude::*;
use sablec_util::{Handler, SourceFile, Symbol};

use crate::namespace::bind_assignments;
use crate::normalize::normalize;
use crate::tokenize::{tokenize, RecoveryPolicy};
use crate::unicode::is_ident_start;
use crate::{Lexer, Token};

fn lex_tokens(source: &str) -> Vec<Token> {
    let file = SourceFile::new(0, "edge.sb", source);
    let handler = Handler::new();
    Lexer::new(&file, &handler)
        .collect::<Result<_, _>>()
        .expect("source should lex")
}

fn ident(name: &str) -> Token {
    match lex_tokens(name).as_slice() {
        [Token::Ident(ident)] => Token::Ident(*ident),
        other => panic!("expected one identifier for {name:?}, got {other:?}"),
    }
}

fn name_of(token: &Token) -> Option<Symbol> {
    token.as_ident().map(|i| i.name)
}

// ==================== CLASS BODY ====================

#[test]
fn test_class_body_names() {
    let source = "class T:\n    ä = 1\n    µ = 2 # this is a compatibility character\n    蟒 = 3\n    x\u{E0100} = 4\n";
    let file = SourceFile::new(0, "class_body.sb", source);
    let tokens = tokenize(&file, &Handler::new(), RecoveryPolicy::Abort).unwrap();
    let ns = bind_assignments(&tokens);

    assert_eq!(ns.get("ä"), Some(&1));
    assert_eq!(ns.get("\u{03BC}"), Some(&2));
    assert_eq!(ns.resolve("\u{00B5}"), Some(&2));
    assert_eq!(ns.get("蟒"), Some(&3));
    assert_eq!(ns.get("x\u{E0100}"), Some(&4));
    assert_eq!(ns.len(), 4);
}

#[test]
fn test_fraktur_assignment() {
    let source = "\u{1D518}\u{1D52B}\u{1D526}\u{1D520}\u{1D52C}\u{1D521}\u{1D522} = 1";
    let file = SourceFile::new(0, "fraktur.sb", source);
    let tokens = tokenize(&file, &Handler::new(), RecoveryPolicy::Abort).unwrap();
    let ns = bind_assignments(&tokens);
    assert!(ns.contains("Unicode"));
    assert_eq!(ns.get("Unicode"), Some(&1));
}

#[test]
fn test_bad_syntax_message() {
    let file = SourceFile::new(0, "badsyntax_3131.sb", "# comment\n€ = 2\n");
    let handler = Handler::new();
    let result = tokenize(&file, &handler, RecoveryPolicy::Abort);
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid character in identifier (badsyntax_3131.sb, line 2)"
    );
    assert_eq!(err.message(), "invalid character in identifier");
    assert_eq!(err.position().line, 2);
    assert_eq!(&*err.position().file, "badsyntax_3131.sb");
}

#[test]
fn test_bad_syntax_yields_no_token() {
    let file = SourceFile::new(0, "b.sb", "€ = 2");
    let handler = Handler::new();
    let mut lexer = Lexer::new(&file, &handler);
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
}

// ==================== CLASSIFICATION ====================

#[test]
fn test_edge_ascii_start_and_continue() {
    assert_eq!(name_of(&ident("_x9")), Some(Symbol::intern("_x9")));
    assert_eq!(lex_tokens("9x")[0], Token::Number(9));
    assert_eq!(name_of(&lex_tokens("9x")[1]), Some(Symbol::intern("x")));
}

#[test]
fn test_edge_long_identifier() {
    let name = "ä".repeat(10_000);
    assert_eq!(
        name_of(&ident(&name)).map(|s| s.len()),
        Some(name.len())
    );
}

#[test]
fn test_edge_identifier_at_eof() {
    let tokens = lex_tokens("a = b");
    assert_eq!(tokens.len(), 3);
    assert_eq!(name_of(&tokens[2]), Some(Symbol::intern("b")));
}

#[test]
fn test_edge_error_line_counts_crlf() {
    let file = SourceFile::new(0, "crlf.sb", "a = 1\r\nb = 2\r\n½ = 3");
    let err = tokenize(&file, &Handler::new(), RecoveryPolicy::Abort).unwrap_err();
    assert_eq!(err.line(), 3);
}

#[test]
fn test_edge_error_after_bom() {
    let file = SourceFile::new(0, "bom.sb", "\u{FEFF}ok\n\u{FEFF}x");
    let err = tokenize(&file, &Handler::new(), RecoveryPolicy::Abort).unwrap_err();
    assert_eq!(err.offending(), '\u{FEFF}');
    assert_eq!(err.line(), 2);
}

#[test]
fn test_edge_combining_mark_joins_identifier() {
    let tokens = lex_tokens("e\u{0301} = 1");
    assert_eq!(tokens.len(), 3);
    assert_eq!(name_of(&tokens[0]), Some(normalize("é")));
}

// ==================== PROPERTIES ====================

#[test]
fn test_property_ascii_identifiers() {
    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
        let tokens = lex_tokens(&input);
        assert_eq!(tokens.len(), 1);
        assert_eq!(name_of(&tokens[0]), Some(Symbol::intern(&input)));
    });
}

#[test]
fn test_property_leading_digit_is_number() {
    proptest!(|(digits in "[0-9]{1,18}", rest in "_?[a-zA-Z][a-zA-Z0-9_]{0,20}")| {
        let tokens = lex_tokens(&format!("{}{}", digits, rest));
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::Number(digits.parse().unwrap()));
        assert_eq!(name_of(&tokens[1]), Some(Symbol::intern(&rest)));
    });
}

#[test]
fn test_underscore_after_number_starts_identifier() {
    let tokens = lex_tokens("0_ab = 1");
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0], Token::Number(0));
    assert_eq!(name_of(&tokens[1]), Some(Symbol::intern("_ab")));
    assert_eq!(tokens[2], Token::Eq);
    assert_eq!(tokens[3], Token::Number(1));

    let tokens = lex_tokens("1_000_x");
    assert_eq!(tokens[0], Token::Number(1000));
    assert_eq!(name_of(&tokens[1]), Some(Symbol::intern("_x")));
}

#[test]
fn test_property_single_letter_round_trip() {
    proptest!(|(c in any::<char>().prop_filter("identifier start", |c| is_ident_start(*c)))| {
        let spelled = c.to_string();
        let tokens = lex_tokens(&format!("{} = 1", spelled));
        assert_eq!(tokens.len(), 3);
        assert_eq!(name_of(&tokens[0]), Some(normalize(&spelled)));
    });
}

#[test]
fn test_property_lexing_never_panics() {
    proptest!(|(input in "\\PC{0,60}")| {
        let file = SourceFile::new(0, "fuzz.sb", input.as_str());
        let handler = Handler::new();
        let _ = tokenize(&file, &handler, RecoveryPolicy::SkipLine);
        let _ = tokenize(&file, &handler, RecoveryPolicy::Abort);
    });
}
