use quickrun_core::history::HistoryList;
use quickrun_core::search::{filter, matches};

#[test]
fn every_token_must_be_contained() {
    assert!(matches("rsync -av ~/Photos backup:/photos", "photos RSYNC"));
    assert!(!matches("rsync -av ~/Photos backup:/photos", "photos scp"));
}

#[test]
fn no_tokens_match_every_entry() {
    let history = HistoryList::from_entries(["ls", "htop", "Documents"], 200);
    assert_eq!(filter(&history, "  "), ["ls", "htop", "Documents"]);
}

#[test]
fn filter_is_not_prefix_only() {
    let history = HistoryList::from_entries(["git status", "tig", "ls"], 200);
    assert_eq!(filter(&history, "ig"), ["tig"]);
    assert_eq!(filter(&history, "TATUS"), ["git status"]);
}
