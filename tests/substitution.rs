// tests/substitution.rs

use std::path::Path;

use proptest::prelude::*;

use onsave::exec::{join_command, split_command, substitute};

#[test]
fn replaces_a_whole_word_occurrence() {
    let rendered = substitute("rustfmt _file_", Path::new("/tmp/lib.rs"));
    assert_eq!(rendered, "rustfmt /tmp/lib.rs");
}

#[test]
fn replaces_every_occurrence() {
    let rendered = substitute("cp _file_ _file_.bak", Path::new("/tmp/a.txt"));
    assert_eq!(rendered, "cp /tmp/a.txt /tmp/a.txt.bak");
}

#[test]
fn embedded_occurrences_are_untouched() {
    // `_file_` inside a larger word is not the placeholder.
    let rendered = substitute("archive my_file_name.txt _file_", Path::new("/tmp/x"));
    assert_eq!(rendered, "archive my_file_name.txt /tmp/x");
}

#[test]
fn punctuation_counts_as_a_word_boundary() {
    let rendered = substitute("tool --path=_file_", Path::new("/tmp/x"));
    assert_eq!(rendered, "tool --path=/tmp/x");
}

#[test]
fn template_without_placeholder_is_unchanged() {
    let rendered = substitute("make check", Path::new("/tmp/x"));
    assert_eq!(rendered, "make check");
}

#[test]
fn dollar_signs_in_the_path_are_literal() {
    // The replacement must not be interpreted as capture-group syntax.
    let rendered = substitute("cat _file_", Path::new("/tmp/$1/a$0b.txt"));
    assert_eq!(rendered, "cat /tmp/$1/a$0b.txt");
}

#[test]
fn splitting_honours_quotes() {
    let argv = split_command(r#"tool "a b" c"#).unwrap();
    assert_eq!(argv, vec!["tool", "a b", "c"]);
}

#[test]
fn splitting_honours_escapes() {
    let argv = split_command(r"tool a\ b c").unwrap();
    assert_eq!(argv, vec!["tool", "a b", "c"]);
}

#[test]
fn splitting_rejects_unbalanced_quotes() {
    assert!(split_command(r#"tool "oops"#).is_err());
}

#[test]
fn substituted_command_splits_into_argv() {
    let rendered = substitute("rustfmt --edition 2024 _file_", Path::new("/src/lib.rs"));
    let argv = split_command(&rendered).unwrap();
    assert_eq!(argv, vec!["rustfmt", "--edition", "2024", "/src/lib.rs"]);
}

proptest! {
    // Tokenizing a command and re-joining its argument vector with the
    // shell's quoting rules reproduces an equivalent invocation.
    #[test]
    fn split_join_round_trips(words in proptest::collection::vec("[a-zA-Z0-9_./ '\"-]{0,12}", 1..6)) {
        let joined = join_command(&words);
        let split = split_command(&joined).unwrap();
        prop_assert_eq!(split, words);
    }
}
