use small_utils::{greeting, stats, textfile};
use tempfile::TempDir;

// Exercises the same sequence of operations the demo binary runs, against a
// temporary directory instead of the working directory.
#[test]
fn test_end_to_end_flow() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir
        .path()
        .join("output.txt")
        .to_str()
        .unwrap()
        .to_string();

    let numbers = vec![10.0, 20.0, 30.0];
    let avg = stats::average(&numbers).unwrap();
    assert_eq!(avg, 20.0);
    assert_eq!(format!("Average is: {}", avg), "Average is: 20");

    assert_eq!(greeting::greet("Alice"), "Hello, Alice");

    textfile::write_initial(&output_path, "Initial content\n").unwrap();
    assert_eq!(textfile::read_all(&output_path).unwrap(), "Initial content\n");

    textfile::append(&output_path, "Appended content\n").unwrap();
    let lines: Vec<String> = textfile::read_lines(&output_path)
        .unwrap()
        .map(|l| l.unwrap())
        .collect();
    assert_eq!(lines, vec!["Initial content", "Appended content"]);

    textfile::delete_file(&output_path).unwrap();
    assert!(!std::path::Path::new(&output_path).exists());
}

#[test]
fn test_append_creates_file_from_scratch() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir
        .path()
        .join("fresh.txt")
        .to_str()
        .unwrap()
        .to_string();

    textfile::append(&path, "first line\n").unwrap();
    textfile::append(&path, "second line\n").unwrap();
    assert_eq!(
        textfile::read_all(&path).unwrap(),
        "first line\nsecond line\n"
    );
}
