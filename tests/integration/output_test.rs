use std::fs;
use std::path::Path;
use tempfile::tempdir;
use declscan::{
    core::run,
    models::config::{OutputFormat, ScanConfig},
    output::{create_formatter, create_writer},
};

fn scanned_tree() -> (tempfile::TempDir, declscan::AnalysisResult) {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("shapes.go"),
        "type Rect struct {\nw float64\nh float64\n}\n\nfunc Area(r Rect) float64 {\n}\n",
    )
    .unwrap();
    fs::write(dir.path().join("main.go"), "func main() {\n}\n").unwrap();

    let result = run(&ScanConfig::new(dir.path(), ".go").unwrap()).unwrap();
    (dir, result)
}

#[test]
fn test_text_report() {
    let (_dir, result) = scanned_tree();

    let text = create_formatter(OutputFormat::Text, false, false, false)
        .format(&result)
        .unwrap();

    assert!(text.contains("Files queued: 2"));
    assert!(text.contains("Files scanned: 2"));
    assert!(text.contains("Rect { w float64; h float64 }"));
    assert!(text.contains("  Area\n"));
    assert!(text.contains("  main\n"));
}

#[test]
fn test_json_report_round_trips_declarations() {
    let (_dir, result) = scanned_tree();

    let json = create_formatter(OutputFormat::Json, false, false, false)
        .format(&result)
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["file_count"], 2);
    assert_eq!(parsed["type_declarations"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["function_declarations"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["summary"]["field_count"], 2);
}

#[test]
fn test_csv_report_written_to_file() {
    let (dir, result) = scanned_tree();
    let out = dir.path().join("report.csv");

    let csv = create_formatter(OutputFormat::Csv, false, false, false)
        .format(&result)
        .unwrap();
    create_writer(Some(&out)).write(&csv).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let rows: Vec<&str> = written.lines().collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], "kind,name,fields,file,line");
    assert!(rows[1].starts_with("type,Rect,w float64; h float64,"));
    assert!(rows.iter().any(|row| row.starts_with("func,Area,,")));
    assert!(rows.iter().any(|row| row.starts_with("func,main,,")));
    assert!(Path::new(&out).exists());
}
