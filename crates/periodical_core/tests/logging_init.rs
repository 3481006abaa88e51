use periodical_core::{init_logging, logging_status, LoggingConfig};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().expect("temp dir");
    let config = LoggingConfig {
        level: "info".to_string(),
        log_dir: Some(log_dir.path().to_path_buf()),
    };

    init_logging(&config).expect("first init should succeed");
    init_logging(&config).expect("same config should be idempotent");

    let level_error = init_logging(&LoggingConfig {
        level: "debug".to_string(),
        ..config.clone()
    })
    .expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));

    let target_error = init_logging(&LoggingConfig {
        level: "info".to_string(),
        log_dir: None,
    })
    .expect_err("target conflict should fail");
    assert!(target_error.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir.as_deref(), Some(log_dir.path()));
}

#[test]
fn init_logging_rejects_relative_dir_and_unknown_level() {
    let err = init_logging(&LoggingConfig {
        level: "info".to_string(),
        log_dir: Some("relative/logs".into()),
    })
    .expect_err("relative dir must fail");
    assert!(err.contains("absolute"));

    let err = init_logging(&LoggingConfig {
        level: "loud".to_string(),
        log_dir: None,
    })
    .expect_err("unknown level must fail");
    assert!(err.contains("unsupported"));
}
