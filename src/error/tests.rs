//! Tests for error handling system

#[cfg(test)]
mod tests {
    use super::super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_error_severity() {
        assert_eq!(
            ScanError::permission_denied("test").severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(
            ScanError::scan_logic_error("a.go", 3, "dangling token").severity(),
            ErrorSeverity::Warning
        );

        assert_eq!(
            ScanError::FileOpen {
                path: PathBuf::from("a.go"),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            }
            .severity(),
            ErrorSeverity::Error
        );

        assert_eq!(
            ScanError::config_error("Invalid config").severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            ScanError::InvalidPath { path: PathBuf::from("/nope") }.severity(),
            ErrorSeverity::Critical
        );
    }

    #[test]
    fn test_is_critical() {
        assert!(ScanError::config_error("empty root path").is_critical());
        assert!(!ScanError::io_error(io::Error::new(io::ErrorKind::NotFound, "not found")).is_critical());
        assert!(!ScanError::traversal_entry_error("/x", "vanished").is_critical());
    }

    #[test]
    fn test_user_message() {
        let msg = ScanError::permission_denied("/test/path").user_message();
        assert!(msg.contains("/test/path"));
        assert!(msg.contains("permission denied"));

        let msg = ScanError::FileOpen {
            path: PathBuf::from("/src/main.go"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        }
        .user_message();
        assert!(msg.contains("/src/main.go"));
        assert!(msg.contains("Skipping file"));

        let msg = ScanError::scan_logic_error("/src/point.go", 7, "odd field token").user_message();
        assert_eq!(msg, "/src/point.go:7: odd field token");
    }

    #[test]
    fn test_file_open_error_maps_permission_denied() {
        let err = ScanError::file_open_error(
            "/locked.go",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ScanError::PermissionDenied { .. }));

        let err = ScanError::file_open_error(
            "/missing.go",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, ScanError::FileOpen { .. }));
    }

    #[test]
    fn test_handle_error() {
        use super::super::context::handle_error;

        assert!(handle_error(ScanError::permission_denied("/test/path")).is_none());
        assert!(handle_error(ScanError::io_error(io::Error::new(io::ErrorKind::NotFound, "x"))).is_none());
        assert!(handle_error(ScanError::config_error("Invalid config")).is_some());
    }
}
