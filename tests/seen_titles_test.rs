use std::fs;

use corpus_harvester::seen_titles::{is_valid_title, SeenTitleStore};

#[test]
fn load_filters_invalid_titles_and_collapses_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seen.txt");
    fs::write(
        &path,
        "शिवाजी\n\nपुणे (निःसंदिग्धीकरण)\nविकिपीडिया:धोरण\nमुंबई\nमुंबई\n",
    )
    .unwrap();

    let (_store, seen, report) = SeenTitleStore::open(&path).unwrap();
    assert_eq!(report.preloaded, 4);
    assert_eq!(report.filtered, 2);
    assert_eq!(report.valid, 2);
    assert!(seen.contains("शिवाजी"));
    assert!(seen.contains("मुंबई"));
    assert!(!seen.contains("विकिपीडिया:धोरण"));
}

#[test]
fn append_round_trips_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seen.txt");
    {
        let (mut store, seen, report) = SeenTitleStore::open(&path).unwrap();
        assert!(seen.is_empty());
        assert_eq!(report.preloaded, 0);
        store
            .append(&["नाशिक".to_string(), "कोल्हापूर".to_string()])
            .unwrap();
    }

    let (_store, seen, report) = SeenTitleStore::open(&path).unwrap();
    assert_eq!(report.valid, 2);
    assert!(seen.contains("नाशिक"));
    assert!(seen.contains("कोल्हापूर"));
}

#[test]
fn missing_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/dir/seen.txt");
    let (_store, seen, report) = SeenTitleStore::open(&path).unwrap();
    assert!(seen.is_empty());
    assert_eq!(report.preloaded, 0);
    assert_eq!(report.valid, 0);
    // The file (and its parents) now exist for appends.
    assert!(path.exists());
}

#[test]
fn title_validity_markers() {
    assert!(is_valid_title("शिवाजी महाराज"));
    assert!(!is_valid_title("पुणे (जिल्हा)"));
    assert!(!is_valid_title("साचा:माहितीचौकट"));
    assert!(!is_valid_title("चर्चा:मुंबई"));
    assert!(!is_valid_title("मदत:संपादन"));
    assert!(!is_valid_title("some disambiguation page"));
}
