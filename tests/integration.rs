use mergecat::{MergeBuilder, SEPARATOR, mergecat};
use std::fs;
use tempfile::tempdir;

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "pub fn test() {}").unwrap();
    fs::create_dir(dir.path().join("src/nested")).unwrap();
    fs::write(dir.path().join("src/nested/util.rs"), "pub fn util() {}").unwrap();

    // Output lives inside the source tree, as in typical usage.
    let out = dir.path().join("fullcodes.txt");
    let options = MergeBuilder::new(dir.path(), &out).build();
    let report = mergecat(options).unwrap();

    assert_eq!(report.source, dir.path());
    assert_eq!(report.output, out);
    assert_eq!(report.merged.len(), 3);
    assert!(report.skipped.is_empty());

    let content_len: u64 = report.merged.iter().map(|f| f.bytes).sum();
    assert_eq!(
        report.bytes_written,
        content_len + 3 * SEPARATOR.len() as u64
    );
    assert_eq!(fs::metadata(&out).unwrap().len(), report.bytes_written);
}
