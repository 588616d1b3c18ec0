use assert_cmd::Command;
use predicates::prelude::*;

fn shelfz(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("shelfz").unwrap();
    cmd.env("SHELFZ_HOME", home);
    cmd
}

#[test]
fn add_and_list_reading_shelf() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(["add", "Dune", "--author", "Frank Herbert"])
        .args(["--shelf", "reading", "--pages", "412"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));

    // list defaults to the reading shelf
    shelfz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Frank Herbert"))
        .stdout(predicate::str::contains("p. 0/412"));
}

#[test]
fn add_defaults_to_planned() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path()).args(["add", "Piranesi"]).assert().success();

    shelfz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("currently empty"));

    shelfz(temp_dir.path())
        .args(["list", "--shelf", "planned"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Piranesi"));
}

#[test]
fn bulk_add_from_file_skips_blank_lines() {
    let temp_dir = tempfile::tempdir().unwrap();
    let list_file = temp_dir.path().join("titles.txt");
    std::fs::write(&list_file, "The Dispossessed\n\n  \nThe Left Hand of Darkness\n").unwrap();

    shelfz(temp_dir.path())
        .arg("bulk-add")
        .arg(list_file.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("2"));

    shelfz(temp_dir.path())
        .args(["list", "--shelf", "planned"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Dispossessed"))
        .stdout(predicate::str::contains("The Left Hand of Darkness"));
}

#[test]
fn bulk_add_reads_stdin_when_no_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .arg("bulk-add")
        .write_stdin("Annihilation\nAuthority\n")
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["list", "--shelf", "planned"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Annihilation"))
        .stdout(predicate::str::contains("Authority"));
}

#[test]
fn finishing_captures_sentiment() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(["add", "Stoner", "--shelf", "reading"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["move", "Stoner", "finished", "--sentiment", "loved", "--enjoyment", "4.5"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["list", "--shelf", "finished"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stoner"))
        .stdout(predicate::str::contains("Loved"));

    // and it left the reading shelf
    shelfz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stoner").not());
}

#[test]
fn finishing_without_ratings_shows_unrated() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(["add", "Solaris", "--shelf", "reading"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["move", "Solaris", "dropped"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["list", "--shelf", "dropped"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unrated"));
}

#[test]
fn progress_updates_page_and_clamps_garbage() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(["add", "Middlemarch", "--shelf", "reading", "--pages", "880"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["progress", "Middlemarch", "412"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("p. 412/880"));

    // unparsable input resets to page 0 instead of failing
    shelfz(temp_dir.path())
        .args(["progress", "Middlemarch", "lots"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("p. 0/880"));
}

#[test]
fn delete_by_title_fragment() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(["add", "The Remains of the Day", "--shelf", "reading"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["delete", "remains"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("currently empty"));
}

#[test]
fn ambiguous_selector_fails_with_candidates() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(["add", "The Fifth Season", "--shelf", "reading"])
        .assert()
        .success();
    shelfz(temp_dir.path())
        .args(["add", "The Fifth Element", "--shelf", "reading"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["delete", "fifth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The Fifth Season"))
        .stderr(predicate::str::contains("The Fifth Element"));
}

#[test]
fn list_counts() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path()).args(["add", "One"]).assert().success();
    shelfz(temp_dir.path()).args(["add", "Two"]).assert().success();
    shelfz(temp_dir.path())
        .args(["add", "Three", "--shelf", "reading"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["list", "--counts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planned"))
        .stdout(predicate::str::contains("2"))
        .stdout(predicate::str::contains("Reading"));
}

#[test]
fn config_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(["config", "sort", "title"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sort = Title"))
        .stdout(predicate::str::contains("api-key = (unset)"));
}

#[test]
fn config_sort_drives_default_listing_order() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(["add", "Zorba the Greek", "--shelf", "reading"])
        .assert()
        .success();
    shelfz(temp_dir.path())
        .args(["add", "Austerlitz", "--shelf", "reading"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["config", "sort", "title"])
        .assert()
        .success();

    let output = shelfz(temp_dir.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let austerlitz = stdout.find("Austerlitz").expect("Austerlitz listed");
    let zorba = stdout.find("Zorba").expect("Zorba listed");
    assert!(austerlitz < zorba, "title sort should list A before Z:\n{}", stdout);
}

#[test]
fn corrupt_catalog_starts_empty_and_keeps_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let books_path = temp_dir.path().join("books.json");
    std::fs::write(&books_path, "{not json at all").unwrap();

    shelfz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be parsed"));

    // a read-only command leaves the broken file alone
    let after = std::fs::read_to_string(&books_path).unwrap();
    assert_eq!(after, "{not json at all");

    // the next write replaces it with a valid catalog
    shelfz(temp_dir.path())
        .args(["add", "Fresh Start", "--shelf", "reading"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh Start"));
}

#[test]
fn edit_keeps_unspecified_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(["add", "Beloved", "--author", "Toni Morrison", "--shelf", "reading", "--pages", "324"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .args(["edit", "Beloved", "--series", "Beloved Trilogy"])
        .assert()
        .success();

    shelfz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Toni Morrison"))
        .stdout(predicate::str::contains("Beloved Trilogy"))
        .stdout(predicate::str::contains("p. 0/324"));
}
