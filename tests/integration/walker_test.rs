use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use declscan::{
    core::{PathFilter, ScanCoordinator, TreeWalker},
    models::config::ScanConfig,
};

fn create_tree(base_dir: &Path) {
    for dir in ["cmd/server", "internal/store", ".git/objects", "vendor/dep", "docs"] {
        fs::create_dir_all(base_dir.join(dir)).unwrap();
    }
    for file in [
        "go.mod",
        "cmd/server/main.go",
        "internal/store/store.go",
        "internal/store/store_test.go",
        ".git/objects/pack.go",
        "vendor/dep/dep.go",
        "docs/readme.md",
    ] {
        fs::write(base_dir.join(file), "package x\n").unwrap();
    }
}

fn relative(queue: &[PathBuf], root: &Path) -> Vec<String> {
    queue
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_queue_contains_only_matching_files() {
    let dir = tempdir().unwrap();
    create_tree(dir.path());

    let coordinator = ScanCoordinator::new(ScanConfig::new(dir.path(), ".go").unwrap());
    let queue = coordinator.build_queue().unwrap();

    assert_eq!(
        relative(queue.paths(), dir.path()),
        vec![
            "cmd/server/main.go",
            "internal/store/store.go",
            "internal/store/store_test.go",
            "vendor/dep/dep.go",
        ]
    );
}

#[test]
fn test_excluded_directories_are_pruned() {
    let dir = tempdir().unwrap();
    create_tree(dir.path());

    let config = ScanConfig::new(dir.path(), ".go")
        .unwrap()
        .with_exclude_patterns(&["vendor", "*_test.go"])
        .unwrap();
    let queue = TreeWalker::from_config(&config).walk(dir.path(), &PathFilter::from_config(&config));

    assert_eq!(
        relative(queue.paths(), dir.path()),
        vec!["cmd/server/main.go", "internal/store/store.go"]
    );
}

#[test]
fn test_max_depth_limits_the_queue() {
    let dir = tempdir().unwrap();
    create_tree(dir.path());
    fs::write(dir.path().join("root.go"), "package x\n").unwrap();

    let config = ScanConfig::new(dir.path(), ".go")
        .unwrap()
        .with_max_depth(Some(1))
        .unwrap();
    let queue = ScanCoordinator::new(config).build_queue().unwrap();

    assert_eq!(relative(queue.paths(), dir.path()), vec!["root.go"]);
}

#[test]
fn test_single_file_root_is_scanned() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("only.go");
    fs::write(&file, "func Only() {\n").unwrap();

    let result = declscan::run(&ScanConfig::new(&file, ".go").unwrap()).unwrap();

    assert_eq!(result.file_count(), 1);
    assert_eq!(result.function_declarations()[0].name, "Only");
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_follow_configuration() {
    let dir = tempdir().unwrap();
    let outside = tempdir().unwrap();
    fs::write(outside.path().join("linked.go"), "func Linked() {\n").unwrap();
    std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

    let plain = ScanCoordinator::new(ScanConfig::new(dir.path(), ".go").unwrap())
        .build_queue()
        .unwrap();
    assert!(plain.is_empty());

    let following = ScanCoordinator::new(
        ScanConfig::new(dir.path(), ".go").unwrap().with_follow_links(true),
    )
    .build_queue()
    .unwrap();
    assert_eq!(following.len(), 1);
}
