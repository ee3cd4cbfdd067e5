use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use declscan::{
    cli::{args::OutputFormat as CliOutputFormat, Args, Command},
    config::{load_config_with_env_prefix, CliArgs},
    models::config::OutputFormat,
};

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["declscan"]);
    assert_eq!(args.path, None);
    assert!(args.exclude.is_empty());
    assert_eq!(args.max_depth, None);
    assert_eq!(args.output, None);
    assert_eq!(args.output_file, None);
    assert!(!args.quiet);
    assert!(!args.verbose);

    let args = Args::parse_from([
        "declscan",
        "--path", "/test/path",
        "--exclude", "vendor",
        "--exclude", "testdata",
        "--max-depth", "5",
        "--threads", "8",
        "--output", "json",
        "--output-file", "results.json",
        "--quiet",
    ]);

    assert_eq!(args.path, Some(PathBuf::from("/test/path")));
    assert_eq!(args.exclude, vec!["vendor".to_string(), "testdata".to_string()]);
    assert_eq!(args.max_depth, Some(5));
    assert_eq!(args.threads, Some(8));
    assert_eq!(args.output, Some(CliOutputFormat::Json));
    assert_eq!(args.output_file, Some(PathBuf::from("results.json")));
    assert!(args.quiet);
}

#[test]
fn test_cli_output_formats() {
    for (flag, expected) in [
        ("text", OutputFormat::Text),
        ("json", OutputFormat::Json),
        ("csv", OutputFormat::Csv),
    ] {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("empty.toml");
        fs::write(&config_path, "").unwrap();

        let args = Args::parse_from([
            "declscan",
            "--path",
            dir.path().to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            flag,
        ]);
        let (settings, _) =
            load_config_with_env_prefix(CliArgs::from(&args), "DSTEST_CLI_FORMATS").unwrap();
        assert_eq!(settings.output_format, expected);
    }
}

#[test]
fn test_cli_invalid_output_format() {
    assert!(Args::try_parse_from(["declscan", "--output", "invalid"]).is_err());
}

#[test]
fn test_cli_overrides_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("declscan.toml");
    fs::write(
        &config_path,
        "extension = \".gox\"\noutput_format = \"csv\"\nthreads = 2\n",
    )
    .unwrap();

    let args = Args::parse_from([
        "declscan",
        "--path",
        dir.path().to_str().unwrap(),
        "--config",
        config_path.to_str().unwrap(),
        "--extension",
        "go",
    ]);

    let (settings, config) =
        load_config_with_env_prefix(CliArgs::from(&args), "DSTEST_CLI_OVERRIDE").unwrap();

    assert_eq!(config.extension(), ".go");
    assert_eq!(config.worker_count(), 2);
    assert_eq!(settings.output_format, OutputFormat::Csv);
}

#[test]
fn test_analyze_command_end_to_end() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir_all(root.join("pkg")).unwrap();
    fs::write(
        root.join("pkg/user.go"),
        "package pkg\n\ntype User struct {\n\tID int\n\tName string\n}\n\nfunc NewUser(name string) *User {\n\treturn &User{Name: name}\n}\n",
    )
    .unwrap();
    let config_path = dir.path().join("empty.toml");
    fs::write(&config_path, "").unwrap();
    let report = dir.path().join("report.json");

    let args = Args::parse_from([
        "declscan",
        "--path",
        root.to_str().unwrap(),
        "--config",
        config_path.to_str().unwrap(),
        "--output",
        "json",
        "--output-file",
        report.to_str().unwrap(),
        "--no-progress",
    ]);

    assert_eq!(Command::from_args(args).run(), 0);

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(parsed["file_count"], 1);
    assert_eq!(parsed["type_declarations"][0]["name"], "User");
    assert_eq!(parsed["function_declarations"][0]["name"], "NewUser");
}

#[test]
fn test_analyze_command_accepts_a_file_root() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.go");
    fs::write(&source, "type A struct {\n\tx int\n}\nfunc Run() {\n}\n").unwrap();
    let config_path = dir.path().join("empty.toml");
    fs::write(&config_path, "").unwrap();
    let report = dir.path().join("report.json");

    let args = Args::parse_from([
        "declscan",
        "--path",
        source.to_str().unwrap(),
        "--config",
        config_path.to_str().unwrap(),
        "--output",
        "json",
        "--output-file",
        report.to_str().unwrap(),
        "--no-progress",
    ]);

    assert_eq!(Command::from_args(args).run(), 0);

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(parsed["file_count"], 1);
    assert_eq!(parsed["type_declarations"][0]["name"], "A");
    assert_eq!(parsed["function_declarations"][0]["name"], "Run");
}

#[test]
fn test_missing_config_file_is_critical() {
    let args = Args::parse_from(["declscan", "--config", "/nonexistent/declscan.toml"]);
    assert_eq!(Command::from_args(args).run(), 2);
}
