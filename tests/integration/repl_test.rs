//! Integration tests for the REPL (piped stdin).
//!
//! A pipe delivers queued escape bytes in one burst, so these tests
//! stick to single-byte controls; multi-byte sequence handling is
//! covered by the editor's unit tests against a scripted source.

use crate::helpers::run_repl;

// ============================================================================
// Session Lifecycle Tests
// ============================================================================

#[test]
fn startup_banner_is_printed() {
    let (stdout, _stderr, exit_code) = run_repl(&[], b"\x04");

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("rawline REPL"));
}

#[test]
fn entered_line_is_echoed() {
    let (stdout, _stderr, exit_code) = run_repl(&[], b"hello\r\x04");

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("You entered: 'hello'"));
}

#[test]
fn ctrl_d_on_empty_line_exits_without_echo() {
    let (stdout, _stderr, exit_code) = run_repl(&[], b"\x04");

    assert_eq!(exit_code, 0);
    assert!(!stdout.contains("You entered"));
}

#[test]
fn closing_stdin_returns_the_partial_line() {
    let (stdout, _stderr, exit_code) = run_repl(&[], b"abc");

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("You entered: 'abc'"));
}

#[test]
fn lines_are_echoed_in_order() {
    let (stdout, _stderr, exit_code) = run_repl(&[], b"one\rtwo\r\x04");

    assert_eq!(exit_code, 0);
    let first = stdout.find("You entered: 'one'").expect("first echo");
    let second = stdout.find("You entered: 'two'").expect("second echo");
    assert!(first < second);
}

#[test]
fn trailing_escape_ends_the_session_with_the_line() {
    let (stdout, _stderr, exit_code) = run_repl(&[], b"ab\x1b");

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("You entered: 'ab'"));
}

// ============================================================================
// Editing Tests
// ============================================================================

#[test]
fn ctrl_a_moves_insertion_to_the_start() {
    let (stdout, _stderr, _exit_code) = run_repl(&[], b"ab\x01cd\r\x04");

    assert!(stdout.contains("You entered: 'cdab'"));
}

#[test]
fn ctrl_k_kills_to_end_of_line() {
    let (stdout, _stderr, _exit_code) = run_repl(&[], b"hello\x01\x0b\r\x04");

    assert!(stdout.contains("You entered: ''"));
}

#[test]
fn ctrl_u_clears_the_line() {
    let (stdout, _stderr, _exit_code) = run_repl(&[], b"abc\x15ok\r\x04");

    assert!(stdout.contains("You entered: 'ok'"));
}

#[test]
fn backspace_removes_the_previous_character() {
    let (stdout, _stderr, _exit_code) = run_repl(&[], b"abX\x7f\r\x04");

    assert!(stdout.contains("You entered: 'ab'"));
}

#[test]
fn open_parenthesis_is_auto_closed() {
    let (stdout, _stderr, _exit_code) = run_repl(&[], b"(\r\x04");

    assert!(stdout.contains("You entered: '()'"));
}

// ============================================================================
// Flag Tests
// ============================================================================

#[test]
fn no_pairing_disables_auto_close() {
    let (stdout, _stderr, _exit_code) = run_repl(&["--no-pairing"], b"(\r\x04");

    assert!(stdout.contains("You entered: '('"));
}

#[test]
fn angle_pairs_closes_angle_brackets() {
    let (stdout, _stderr, _exit_code) = run_repl(&["--angle-pairs"], b"<\r\x04");

    assert!(stdout.contains("You entered: '<>'"));
}

#[test]
fn custom_prompt_is_rendered() {
    let (stdout, _stderr, _exit_code) = run_repl(&["--prompt", "edit% "], b"\x04");

    assert!(stdout.contains("edit% "));
}
