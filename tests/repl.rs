use postfixer::{
    config::Config,
    repl::{MenuChoice, Session, evaluate_script},
};

fn run(input: &str) -> String {
    let mut session = Session::new(input.as_bytes(), Vec::new(), Config::default());
    session.run().unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

fn script(source: &str, config: &Config, show_infix: bool) -> (bool, String, String) {
    let (mut output, mut errors) = (Vec::new(), Vec::new());
    let ok = evaluate_script(source, config, show_infix, &mut output, &mut errors).unwrap();
    (ok, String::from_utf8(output).unwrap(), String::from_utf8(errors).unwrap())
}

#[test]
fn menu_choices_ignore_case_and_leading_blanks() {
    assert_eq!(MenuChoice::parse("p"), Some(MenuChoice::ProgramDescription));
    assert_eq!(MenuChoice::parse(" X"), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse("Evaluate"), Some(MenuChoice::Evaluate));
    assert_eq!(MenuChoice::parse(""), None);
    assert_eq!(MenuChoice::parse("z"), None);
}

#[test]
fn exit_ends_the_session() {
    let output = run("x\nthis is never read\n");
    assert_eq!(output.matches("Choice: ").count(), 1);
}

#[test]
fn program_description_then_exit() {
    let output = run("P\nX\n");
    assert!(output.contains("PROGRAM DESCRIPTION"));
    assert!(output.contains("factor     := NUMBER | ( expression )"));
}

#[test]
fn unknown_choice_asks_again() {
    let output = run("q\nx\n");
    assert!(output.contains("Invalid input, try again."));
}

#[test]
fn evaluates_until_the_user_declines() {
    let output = run("e\n1 * (2 + 3)\ny\n10 - 3 - 2\nx\nx\n");
    assert!(output.contains("Postfix expression: 1 2 3 + * \nResult of evaluation: 5"));
    assert!(output.contains("Postfix expression: 10 3 - 2 - \nResult of evaluation: 5"));
}

#[test]
fn division_by_zero_prints_undefined() {
    let output = run("e\n5 % 0\nx\nx\n");
    assert!(output.contains("Postfix expression: 5 0 % \nResult of evaluation: undefined"));
}

#[test]
fn invalid_expressions_prompt_again() {
    let output = run("e\n4 + + 5\n4 + 5\nx\nx\n");
    assert!(output.contains("Invalid infix expression."));
    assert!(output.contains("Please try again."));
    assert!(output.contains("Result of evaluation: 9"));
}

#[test]
fn end_of_input_stops_cleanly() {
    let output = run("e\n2 * 3\n");
    assert!(output.contains("Result of evaluation: 6"));
}

#[test]
fn infix_display_is_optional() {
    let mut session =
        Session::new("e\n1 + 2\nx\nx\n".as_bytes(), Vec::new(), Config::default()).show_infix(true);
    session.run().unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains("Infix expression: 1 + 2 "));
}

#[test]
fn script_evaluates_every_non_blank_line() {
    let (ok, output, errors) = script("34 + 35\n\n   \n1 * (2 + 3)\n5 / 0\n", &Config::default(), false);

    assert!(ok);
    assert!(errors.is_empty());
    assert_eq!(output,
               "\nPostfix expression: 34 35 + \nResult of evaluation: 69\n\
                \nPostfix expression: 1 2 3 + * \nResult of evaluation: 5\n\
                \nPostfix expression: 5 0 / \nResult of evaluation: undefined\n");
}

#[test]
fn script_reports_rejected_lines_and_keeps_going() {
    let (ok, output, errors) = script("4 (5 + 3)\n2 * 3\n1 ^ 2\n", &Config::default(), false);

    assert!(!ok);
    assert!(output.contains("Result of evaluation: 6"));
    let errors: Vec<&str> = errors.lines().collect();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("Invalid infix expression '4 (5 + 3)'."));
    assert!(errors[1].starts_with("Invalid infix expression '1 ^ 2'."));
}

#[test]
fn script_honours_config_and_infix_flag() {
    let (ok, _, errors) = script("((1))", &Config::default().with_max_depth(1), false);
    assert!(!ok);
    assert!(errors.contains("nested more than 1 levels deep"));

    let (ok, output, _) = script("1 * (2 + 3)", &Config::default(), true);
    assert!(ok);
    assert!(output.starts_with("\nInfix expression: 1 * 2 + 3 \n"));
}

#[test]
fn empty_script_succeeds_silently() {
    assert_eq!(script("\n\n", &Config::default(), false), (true, String::new(), String::new()));
}
