use std::fs;
use std::path::Path;
use tempfile::tempdir;
use declscan::{
    core::{run, ScanCoordinator},
    error::{ErrorSeverity, ScanError},
    models::{config::ScanConfig, declaration::Field},
};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn go_config(root: &Path) -> ScanConfig {
    ScanConfig::new(root, ".go").unwrap()
}

#[test]
fn test_struct_declaration_is_extracted() {
    let dir = tempdir().unwrap();
    write(dir.path(), "point.go", "type Point struct {\nx int\ny int\n}\n");

    let result = run(&go_config(dir.path())).unwrap();

    assert_eq!(result.type_declarations().len(), 1);
    let point = &result.type_declarations()[0];
    assert_eq!(point.name, "Point");
    assert_eq!(point.fields, vec![Field::new("x", "int"), Field::new("y", "int")]);
}

#[test]
fn test_function_declaration_is_extracted() {
    let dir = tempdir().unwrap();
    write(dir.path(), "add.go", "func Add(a, b int) int {\n\treturn a + b\n}\n");

    let result = run(&go_config(dir.path())).unwrap();

    assert_eq!(result.function_declarations().len(), 1);
    assert_eq!(result.function_declarations()[0].name, "Add");
}

#[test]
fn test_reserved_directory_and_other_suffixes_are_skipped() {
    let dir = tempdir().unwrap();
    write(dir.path(), "main.go", "func main() {\n}\n");
    write(dir.path(), "notes.txt", "func Notes() {\n");
    write(dir.path(), ".git/hooks/pre.go", "type Hidden struct {\nx int\n}\nfunc Hook() {\n");

    let result = run(&go_config(dir.path())).unwrap();

    assert_eq!(result.file_count(), 1);
    assert!(result.type_declarations().is_empty());
    let names: Vec<&str> = result
        .function_declarations()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["main"]);
    assert!(result
        .function_declarations()
        .iter()
        .all(|f| !f.file.components().any(|c| c.as_os_str() == ".git")));
}

#[test]
fn test_concurrent_files_are_all_merged() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a/alpha.go", "type Alpha struct {\nid int\n}\n");
    write(dir.path(), "b/beta.go", "type Beta struct {\nname string\n}\n");

    let config = go_config(dir.path()).with_threads(Some(2)).unwrap();
    let result = ScanCoordinator::new(config).run().unwrap();

    assert_eq!(result.file_count(), 2);
    assert!(result.find_type("Alpha").is_some());
    assert!(result.find_type("Beta").is_some());
}

#[test]
fn test_repeated_scans_are_identical() {
    let dir = tempdir().unwrap();
    for idx in 0..30 {
        write(
            dir.path(),
            &format!("pkg{}/file{}.go", idx % 4, idx),
            &format!(
                "type T{idx} struct {{\na int\nb string\n}}\nfunc F{idx}() {{\n}}\nfunc (t T{idx}) M{idx}() {{\n}}\n"
            ),
        );
    }
    let config = go_config(dir.path());

    let first = run(&config).unwrap();
    let second = run(&config).unwrap();

    assert_eq!(first.file_count(), 30);
    assert_eq!(first.type_declarations(), second.type_declarations());
    assert_eq!(first.function_declarations(), second.function_declarations());
    assert_eq!(first.keyword_counts(), second.keyword_counts());
    assert_eq!(first.keyword_counts().get("func"), 60);
    assert_eq!(first.keyword_counts().get("struct"), 30);
    assert_eq!(first.function_declarations().len(), 30);
    assert_eq!(first.warnings().len(), 30);
}

#[test]
fn test_field_count_matches_pair_count() {
    let dir = tempdir().unwrap();
    let pairs: Vec<(String, String)> = (0..7)
        .map(|idx| (format!("f{}", idx), format!("t{}", idx)))
        .collect();
    let mut source = String::from("type Wide struct {\n");
    for (name, field_type) in &pairs {
        source.push_str(&format!("\t{} {}\n", name, field_type));
    }
    source.push_str("}\n");
    write(dir.path(), "wide.go", &source);

    let result = run(&go_config(dir.path())).unwrap();

    let wide = result.find_type("Wide").unwrap();
    assert_eq!(wide.fields.len(), pairs.len());
    for (field, (name, field_type)) in wide.fields.iter().zip(&pairs) {
        assert_eq!(&field.name, name);
        assert_eq!(&field.field_type, field_type);
    }
}

#[test]
fn test_odd_trailing_token_keeps_declaration() {
    let dir = tempdir().unwrap();
    write(dir.path(), "odd.go", "type Odd struct {\nx int\nstray\n}\n");

    let result = run(&go_config(dir.path())).unwrap();

    let odd = result.find_type("Odd").unwrap();
    assert_eq!(odd.fields, vec![Field::new("x", "int")]);
    assert_eq!(result.warnings().len(), 1);
    assert_eq!(result.warnings()[0].severity, ErrorSeverity::Warning);
    assert!(!result.has_failures());
}

#[cfg(unix)]
#[test]
fn test_unopenable_file_is_recorded_and_scan_continues() {
    let dir = tempdir().unwrap();
    write(dir.path(), "good.go", "type Good struct {\nok bool\n}\n");
    std::os::unix::fs::symlink(dir.path().join("missing-target"), dir.path().join("broken.go"))
        .unwrap();

    let result = run(&go_config(dir.path())).unwrap();

    assert_eq!(result.file_count(), 2);
    assert!(result.find_type("Good").is_some());
    assert!(result.has_failures());
    assert_eq!(result.failed_files().len(), 1);
    assert!(result.failed_files()[0].path.ends_with("broken.go"));
    assert_eq!(result.summary().files_scanned, 1);
}

#[test]
fn test_exclude_patterns_prune_directories() {
    let dir = tempdir().unwrap();
    write(dir.path(), "app.go", "func App() {\n");
    write(dir.path(), "vendor/lib/lib.go", "func Lib() {\n");
    write(dir.path(), "app_test.go", "func TestApp() {\n");

    let config = go_config(dir.path())
        .with_exclude_patterns(&["vendor", "*_test.go"])
        .unwrap();
    let result = run(&config).unwrap();

    assert_eq!(result.file_count(), 1);
    assert_eq!(result.function_declarations()[0].name, "App");
}

#[test]
fn test_alternate_extension() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.go", "func Go() {\n");
    write(dir.path(), "b.gox", "func Gox() {\n");

    let config = ScanConfig::new(dir.path(), "gox").unwrap();
    let result = run(&config).unwrap();

    assert_eq!(result.file_count(), 1);
    assert_eq!(result.function_declarations()[0].name, "Gox");
}

#[test]
fn test_nonexistent_root_is_critical() {
    let dir = tempdir().unwrap();

    let err = run(&go_config(&dir.path().join("absent"))).unwrap_err();

    assert!(matches!(err, ScanError::InvalidPath { .. }));
    assert_eq!(err.severity(), ErrorSeverity::Critical);
}

#[test]
fn test_invalid_configuration_is_rejected_up_front() {
    assert!(ScanConfig::new("", ".go").is_err());
    assert!(ScanConfig::new(".", "").is_err());
    assert!(ScanConfig::new(".", ".go").unwrap().with_threads(Some(0)).is_err());
    assert!(ScanConfig::new(".", ".go").unwrap().with_exclude_patterns(&["["]).is_err());
}
