use argsgen_flags::{FlagGroup, FlagSet};

const FIRST: FlagGroup = FlagGroup::new("first", &["is_debug=false", "use_lld=true"]);
const SECOND: FlagGroup = FlagGroup::new("second", &["use_lld=false", "is_clang=true"]);

#[test]
fn groups_concatenate_in_order_without_dedup() {
    let set = FlagSet::from_groups(&[FIRST, SECOND]);

    assert_eq!(set.len(), 4);
    assert_eq!(
        set.lines(),
        ["is_debug=false", "use_lld=true", "use_lld=false", "is_clang=true"]
    );
    assert_eq!(set.position("use_lld=false"), Some(2));
    assert_eq!(set.position("missing=true"), None);
}

#[test]
fn join_has_no_trailing_newline() {
    let set = FlagSet::from(FIRST);
    assert_eq!(set.join(), "is_debug=false\nuse_lld=true");
    assert_eq!(FlagSet::default().join(), "");
    assert!(FlagSet::default().is_empty());
}

#[test]
fn concat_keeps_both_copies() {
    let once = FlagSet::from(FIRST);
    let twice = once.concat(&once);

    assert_eq!(twice.len(), 4);
    assert_eq!(twice.count("use_lld=true"), 2);
    assert_eq!(once.len(), 2);
}
