use notedown::infrastructure::grammar::locate;

#[test]
fn given_offset_at_start_when_locating_then_first_line_first_column() {
    assert_eq!(locate("hello world", 0), (1, 1));
}

#[test]
fn given_offset_on_first_line_when_locating_then_column_is_offset_plus_one() {
    assert_eq!(locate("hello world", 6), (1, 7));
}

#[test]
fn given_offset_past_two_newlines_when_locating_then_third_line() {
    // "This" starts at char offset 9; "an" at 17.
    let text = "# Title\n\nThis is an sentence with an eror.";
    assert_eq!(locate(text, 9), (3, 1));
    assert_eq!(locate(text, 17), (3, 9));
}

#[test]
fn given_offset_right_after_newline_when_locating_then_column_one() {
    let text = "one\ntwo";
    assert_eq!(locate(text, 4), (2, 1));
}

#[test]
fn given_multibyte_text_when_locating_then_offsets_count_characters() {
    // Engine offsets are character-based, not byte-based.
    let text = "héllo\nwörld";
    assert_eq!(locate(text, 6), (2, 1));
    assert_eq!(locate(text, 8), (2, 3));
}
