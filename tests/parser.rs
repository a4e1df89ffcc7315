use postfixer::{
    ast::ExpressionNode,
    error::{MismatchKind, ParseError, UnexpectedKind},
    interpreter::{
        lexer::{Token, TokenKind, lex},
        parser::{
            MAX_SUPPORTED_DEPTH, ParseCursor, parse, parse_expression, parse_factor, parse_term,
            parse_with_limit,
        },
        serializer::{inorder, postorder, to_infix_string, to_postfix_string},
    },
};
use rstest::rstest;

fn tree(source: &str) -> ExpressionNode {
    parse(&lex(source).unwrap()).unwrap()
}

fn parse_error(source: &str) -> ParseError {
    parse(&lex(source).unwrap()).unwrap_err()
}

fn texts(tokens: Vec<&Token>) -> Vec<&str> {
    tokens.into_iter().map(|t| t.text.as_str()).collect()
}

fn number(text: &str) -> ExpressionNode {
    ExpressionNode::operand(Token::new(TokenKind::Number, text, 0))
}

#[rstest]
#[case::single_digit("4", "4 ")]
#[case::multiple_digits("45", "45 ")]
#[case::simple("34 + 35", "34 35 + ")]
#[case::parentheses("1 * (2 + 3)", "1 2 3 + * ")]
#[case::precedence("34 + 35 * 3", "34 35 3 * + ")]
#[case::disambiguate("((5))", "5 ")]
#[case::left_assoc_additive("1 - 2 + 3", "1 2 - 3 + ")]
#[case::left_assoc_multiplicative("8 / 4 % 3 * 2", "8 4 / 3 % 2 * ")]
#[case::nested("((1 + 2) * (3 - 4)) / 5", "1 2 + 3 4 - * 5 / ")]
fn renders_postfix(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_postfix_string(&tree(source)), expected);
}

#[test]
fn builds_operator_nodes_with_two_children() {
    let root = tree("34 + 35 * 3");

    let ExpressionNode::Operator { token, left, right } = &root else {
        panic!("expected an operator at the root, got {root:?}");
    };
    assert_eq!(token.text, "+");
    assert_eq!(**left, number("34"));
    assert!(matches!(&**right, ExpressionNode::Operator { token, .. } if token.text == "*"));
}

#[test]
fn redundant_parentheses_give_the_same_tree() {
    assert_eq!(tree("((5))"), tree("5"));
    assert_eq!(tree("(1 + (2))"), tree("1 + 2"));
}

#[test]
fn grouping_changes_the_tree() {
    assert_ne!(tree("1 * (2 + 3)"), tree("1 * 2 + 3"));
    assert_eq!(to_infix_string(&tree("1 * (2 + 3)")), to_infix_string(&tree("1 * 2 + 3")));
}

#[test]
fn serializing_twice_is_identical() {
    let root = tree("(1 + 2) * 3 - 4 % 5");
    assert_eq!(to_postfix_string(&root), to_postfix_string(&root));
    assert_eq!(to_infix_string(&root), to_infix_string(&root));
    assert_eq!(root.to_string(), to_postfix_string(&root));
}

#[test]
fn traversals_visit_every_token_once() {
    let root = tree("1 - 2 * 3");

    assert_eq!(texts(postorder(&root)), ["1", "2", "3", "*", "-"]);
    assert_eq!(texts(inorder(&root)), ["1", "-", "2", "*", "3"]);
    assert_eq!(to_infix_string(&root), "1 - 2 * 3 ");
}

#[test]
fn term_stops_at_additive_operators() {
    let tokens = lex("2 * 3 + 4").unwrap();
    let mut cursor = ParseCursor::new(&tokens);

    let term = parse_term(&mut cursor).unwrap();
    assert_eq!(term.to_string(), "2 3 * ");
    assert_eq!(cursor.index(), 3);
    assert_eq!(cursor.peek().map(|t| t.text.as_str()), Some("+"));
}

#[test]
fn factor_reads_a_single_operand() {
    let tokens = lex("7 * 2").unwrap();
    let mut cursor = ParseCursor::new(&tokens);

    assert_eq!(parse_factor(&mut cursor).unwrap(), number("7"));
    assert_eq!(cursor.index(), 1);
}

#[test]
fn expression_leaves_unmatched_close_for_the_caller() {
    let tokens = lex("1 + 2 )").unwrap();
    let mut cursor = ParseCursor::new(&tokens);

    assert_eq!(parse_expression(&mut cursor).unwrap().to_string(), "1 2 + ");
    assert!(!cursor.is_at_end());
}

#[rstest]
#[case::consecutive_numbers_before_operator("34 35 +", UnexpectedKind::ConsecutiveNumbers)]
#[case::consecutive_numbers_after_operator("34 / 31 32", UnexpectedKind::ConsecutiveNumbers)]
#[case::stray_operator("+", UnexpectedKind::StrayOperator)]
#[case::stray_operator_in_group("2 * (+ 3)", UnexpectedKind::StrayOperator)]
#[case::same_precedence("4 + + 5", UnexpectedKind::ConsecutiveOperators)]
#[case::differing_precedence("4 + * 5", UnexpectedKind::ConsecutiveOperators)]
#[case::number_to_parentheses("4 ( 5 + 3 )",
                              UnexpectedKind::ParenthesesMultiplicationNotSupported)]
#[case::parentheses_to_number("(5 + 3) 4",
                              UnexpectedKind::ParenthesesMultiplicationNotSupported)]
#[case::empty_group("()", UnexpectedKind::MissingOperand)]
#[case::empty_input("", UnexpectedKind::UnexpectedEndOfInput)]
#[case::trailing_operator("4 *", UnexpectedKind::UnexpectedEndOfInput)]
fn rejects_unexpected_tokens(#[case] source: &str, #[case] kind: UnexpectedKind) {
    assert_eq!(parse_error(source).unexpected_kind(), Some(kind));
}

#[test]
fn unexpected_token_reports_text_and_position() {
    assert_eq!(parse_error("4 + * 5"),
               ParseError::UnexpectedToken { kind:     UnexpectedKind::ConsecutiveOperators,
                                             token:    Some("*".to_string()),
                                             position: 4, });
    assert_eq!(parse_error("12 +"),
               ParseError::UnexpectedToken { kind:     UnexpectedKind::UnexpectedEndOfInput,
                                             token:    None,
                                             position: 4, });
}

#[rstest]
#[case::unclosed_open("4 + 5 * ( 3 + 4", MismatchKind::UnclosedOpen, 8)]
#[case::unmatched_close("4 + 5 * 3 + 4 )", MismatchKind::UnmatchedClose, 14)]
#[case::extra_close_after_group("(1))", MismatchKind::UnmatchedClose, 3)]
fn rejects_mismatched_parentheses(#[case] source: &str,
                                  #[case] kind: MismatchKind,
                                  #[case] position: usize) {
    assert_eq!(parse_error(source), ParseError::MismatchedParen { kind, position });
}

#[test]
fn error_messages_describe_the_problem() {
    assert!(parse_error("34 35").to_string().contains("Cannot have consecutive numbers."));
    assert!(parse_error("+").to_string().contains("Stray operator found."));
    assert!(parse_error("(1")
            .to_string()
            .contains("Mismatched parentheses"));
}

#[test]
fn nesting_limit_is_enforced() {
    let tokens = lex("(((1)))").unwrap();

    assert_eq!(parse_with_limit(&tokens, 3).unwrap(), number("1"));
    assert_eq!(parse_with_limit(&tokens, 2),
               Err(ParseError::NestingTooDeep { limit: 2 }));
}

#[test]
fn sibling_groups_do_not_accumulate_depth() {
    let source = vec!["(1)"; 50].join(" + ");
    let tokens = lex(&source).unwrap();
    assert!(parse_with_limit(&tokens, 1).is_ok());
}

/// Runs `f` on a thread with the 8 MiB stack the binary's main thread gets.
fn on_main_sized_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new().stack_size(8 * 1024 * 1024)
                               .spawn(f)
                               .unwrap()
                               .join()
                               .unwrap()
}

#[test]
fn nesting_limit_is_capped() {
    let depth = MAX_SUPPORTED_DEPTH + 1;
    let tokens = lex(&format!("{}1{}", "(".repeat(depth), ")".repeat(depth))).unwrap();
    assert_eq!(ParseCursor::with_limit(&tokens, usize::MAX).max_depth(), MAX_SUPPORTED_DEPTH);

    let result = on_main_sized_stack(move || parse_with_limit(&tokens, usize::MAX).map(|t| t.to_string()));
    assert_eq!(result, Err(ParseError::NestingTooDeep { limit: MAX_SUPPORTED_DEPTH }));
}

#[test]
fn deepest_supported_nesting_parses() {
    let depth = MAX_SUPPORTED_DEPTH;
    let tokens = lex(&format!("{}1{}", "(".repeat(depth), ")".repeat(depth))).unwrap();

    let result = on_main_sized_stack(move || parse_with_limit(&tokens, usize::MAX).map(|t| t.to_string()));
    assert_eq!(result, Ok("1 ".to_string()));
}

#[test]
fn long_chains_clone_compare_and_format() {
    let source = vec!["1"; 200_000].join("+");
    let first = tree(&source);
    let second = tree(&source);

    let copy = first.clone();
    assert!(copy == first);
    assert!(first == second);
    assert!(first != tree(&format!("{source}+2")));

    let debug = format!("{first:?}");
    assert!(debug.starts_with("ExpressionNode(\"1 1 + 1 + "));
}

#[test]
fn clone_and_equality_follow_structure() {
    let sum = tree("1 * (2 + 3)");
    assert_eq!(sum.clone(), sum);
    assert_eq!(sum.clone().to_string(), "1 2 3 + * ");

    assert_ne!(tree("1 - 2 - 3"), tree("1 - (2 - 3)"));
    assert_ne!(tree("1 + 2"), tree("1 + 3"));
    assert_ne!(tree("1 + 2"), number("1"));
    assert_eq!(format!("{:?}", tree("(4)")), "ExpressionNode(\"4 \")");
}
