//! Loader behavior against real files on disk.

use std::{fs, path::PathBuf};

use ceol::{find_prefix, load_hotlist, Error, HOTLIST_FILE};
use tempfile::TempDir;

const SAMPLE: &str = r#"<doublecmd>
  <DirectoryHotList>
    <HotDir Name="Projects" Path="C:\Projects"/>
    <HotDir Name="Downloads" Path="C:\Downloads"/>
    <HotDir Name="Broken"/>
  </DirectoryHotList>
</doublecmd>"#;

fn write_hotlist(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(HOTLIST_FILE);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_usable_entries_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_hotlist(&dir, SAMPLE);
    let entries = load_hotlist(&path).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Projects", "Downloads"]);
}

#[test]
fn search_over_loaded_entries_ignores_case() {
    let dir = TempDir::new().unwrap();
    let path = write_hotlist(&dir, SAMPLE);
    let entries = load_hotlist(&path).unwrap();
    assert_eq!(find_prefix(&entries, "DOWN").unwrap().path, "C:\\Downloads");
    assert!(find_prefix(&entries, "xyz").is_none());
}

#[test]
fn missing_file_reports_the_attempted_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(HOTLIST_FILE);
    let err = load_hotlist(&path).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert!(err.to_string().contains(HOTLIST_FILE));
    assert!(!err.is_silent());
}

#[test]
fn malformed_xml_reports_the_attempted_path() {
    let dir = TempDir::new().unwrap();
    let path = write_hotlist(&dir, "<doublecmd><DirectoryHotList");
    let err = load_hotlist(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains(HOTLIST_FILE));
    assert!(!err.is_silent());
}

#[test]
fn foreign_root_fails_silently() {
    let dir = TempDir::new().unwrap();
    let path = write_hotlist(&dir, "<foo></foo>");
    let err = load_hotlist(&path).unwrap_err();
    assert!(matches!(err, Error::MissingRoot));
    assert!(err.is_silent());
}

#[test]
fn absent_hotlist_section_fails_silently() {
    let dir = TempDir::new().unwrap();
    let path = write_hotlist(&dir, "<doublecmd></doublecmd>");
    let err = load_hotlist(&path).unwrap_err();
    assert!(matches!(err, Error::MissingHotlist));
    assert!(err.is_silent());
}

#[test]
fn declaration_and_unknown_sections_are_tolerated() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<doublecmd DCVersion="1.1.0">
  <FavoriteTabs/>
  <DirectoryHotList>
    <HotDir Name="Music" Path="/srv/music"/>
  </DirectoryHotList>
</doublecmd>"#;
    let dir = TempDir::new().unwrap();
    let path = write_hotlist(&dir, xml);
    let entries = load_hotlist(&path).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "/srv/music");
}
