use hvim_lexer::{tokenize, tokens::TokenKind, Scanner};
use proptest::prelude::*;

const SAMPLE: &str = r#"#include <iostream>
#define MAX 10

namespace demo {
template <typename T>
struct Box { T value; };

int main(int argc, char** argv) {
    const char* s = "say \"hi\"\n";
    char c = '\'';
    if (argc > MAX && !argv[0]) { return -1; }
    std::cout << s << c;
    return 0;
}
}
"#;

fn concat(input: &str) -> String {
    tokenize(input).map(|t| t.text).collect()
}

#[test]
fn sample_round_trips() {
    assert_eq!(concat(SAMPLE), SAMPLE);
}

#[test]
fn sample_has_no_unknowns() {
    let unknown: Vec<&str> = tokenize(SAMPLE)
        .filter(|t| t.kind == TokenKind::Unknown)
        .map(|t| t.text)
        .collect();
    assert!(unknown.is_empty(), "unexpected unknown tokens: {unknown:?}");
}

#[test]
fn sample_literals() {
    let literals: Vec<(TokenKind, &str)> = tokenize(SAMPLE)
        .filter(|t| matches!(t.kind, TokenKind::StringLiteral | TokenKind::CharLiteral))
        .map(|t| (t.kind, t.text))
        .collect();
    assert_eq!(
        literals,
        vec![
            (TokenKind::StringLiteral, r#""say \"hi\"\n""#),
            (TokenKind::CharLiteral, r"'\''"),
        ]
    );
}

#[test]
fn directives_stop_at_newline() {
    let directives: Vec<&str> = tokenize(SAMPLE)
        .filter(|t| t.kind == TokenKind::PreprocessorDirective)
        .map(|t| t.text)
        .collect();
    assert_eq!(directives, vec!["#include <iostream>", "#define MAX 10"]);
}

#[test]
fn independent_scanners_share_a_buffer() {
    let mut a = Scanner::new(SAMPLE);
    let mut b = Scanner::new(SAMPLE);
    a.next_token();
    a.next_token();
    let from_b: Vec<_> = b.by_ref().skip(2).collect();
    let from_a: Vec<_> = a.collect();
    assert_eq!(from_a, from_b);
}

proptest! {
    #[test]
    fn partition_is_lossless(input in any::<String>()) {
        prop_assert_eq!(concat(&input), input);
    }

    #[test]
    fn partition_is_lossless_for_c_like_text(input in r#"[a-z0-9_$#'"\\ \t\n{}()\[\];:,.*<>%^&|!=+/@-]{0,64}"#) {
        prop_assert_eq!(concat(&input), input);
    }

    #[test]
    fn every_call_makes_progress(input in r#"[a-z0-9#'"\\ \n;]{0,48}"#) {
        let mut scanner = Scanner::new(&input);
        let mut expected_start = 0;
        while scanner.has_more() {
            let before = scanner.pos();
            let token = scanner.next_token();
            prop_assert!(token.is_some());
            if let Some(token) = token {
                prop_assert_eq!(token.start, expected_start);
                prop_assert!(!token.is_empty());
                prop_assert!(token.end() <= input.len());
                prop_assert!(scanner.pos() > before);
                expected_start = token.end();
            }
        }
        prop_assert_eq!(scanner.pos(), input.len());
        prop_assert_eq!(scanner.next_token(), None);
    }
}
