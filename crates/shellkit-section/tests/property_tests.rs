use proptest::prelude::*;
use shellkit_section::{Markers, SectionRequest, update_section};
use std::fs;

const START: &str = "# >>> managed >>>";
const END: &str = "# <<< managed <<<";

fn markers() -> Markers {
    Markers::new(START, END).unwrap()
}

/// Lines that never collide with the markers.
fn plain_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 =_./-]{0,20}"
}

fn file_content() -> impl Strategy<Value = String> {
    (prop::collection::vec(plain_line(), 0..8), any::<bool>()).prop_map(|(lines, terminated)| {
        let mut content = lines.join("\n");
        if terminated && !content.is_empty() {
            content.push('\n');
        }
        content
    })
}

proptest! {
    #[test]
    fn upsert_is_idempotent(
        original in file_content(),
        payload in prop::collection::vec(plain_line(), 0..5),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rc");
        fs::write(&path, &original).unwrap();

        let request = SectionRequest::upsert(&path, markers(), payload).unwrap();
        update_section(&request).unwrap();
        let once = fs::read(&path).unwrap();
        update_section(&request).unwrap();
        let twice = fs::read(&path).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn upsert_then_remove_round_trips(
        original in file_content(),
        payload in prop::collection::vec(plain_line(), 0..5),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rc");
        fs::write(&path, &original).unwrap();

        update_section(&SectionRequest::upsert(&path, markers(), payload).unwrap()).unwrap();
        update_section(&SectionRequest::remove(&path, markers()).unwrap()).unwrap();

        let mut expected = original.clone();
        if !expected.is_empty() && !expected.ends_with('\n') {
            expected.push('\n');
        }
        prop_assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn remove_without_markers_is_byte_identical(original in file_content()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rc");
        fs::write(&path, &original).unwrap();

        update_section(&SectionRequest::remove(&path, markers()).unwrap()).unwrap();

        prop_assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
