//! # Django Kickstart Create Integration Tests
//!
//! File: cli/tests/create.rs
//!
//! ## Overview
//!
//! End-to-end tests for `django-kickstart create`. Every test runs the binary
//! in a fresh temporary directory with `--no-venv` (no Python needed) and
//! without a terminal on stdin, so no menu is shown and missing options fall
//! back to the configured defaults.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_create_blog_with_defaults() {
    let temp = tempdir().unwrap();

    kickstart_in(temp.path())
        .args(["create", "blog", "--no-venv", "--no-input"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Creating project 'blog'")
                .and(predicate::str::contains("created successfully"))
                .and(predicate::str::contains("cd blog"))
                .and(predicate::str::contains("cp .env.example .env"))
                .and(predicate::str::contains("python manage.py migrate"))
                .and(predicate::str::contains("http://127.0.0.1:8000/admin/")),
        );

    let root = temp.path().join("blog");
    let files = files_under(&root);
    for expected in [
        "manage.py",
        "requirements.txt",
        ".env.example",
        ".gitignore",
        "blog/__init__.py",
        "blog/settings.py",
        "blog/urls.py",
        "core/views.py",
        "core/forms.py",
        "core/templates/core/home.html",
        "static/css/style.css",
    ] {
        assert!(files.contains(&expected.to_string()), "{expected} missing");
    }
    assert!(!root.join("venv").exists());
    assert_eq!(top_level_entries(temp.path()), vec![root.clone()]);

    let settings = fs::read_to_string(root.join("blog/settings.py")).unwrap();
    assert!(settings.contains("ROOT_URLCONF = \"blog.urls\""));
}

#[test]
fn test_create_api_project_with_all_flags() {
    let temp = tempdir().unwrap();

    kickstart_in(temp.path())
        .args([
            "create", "shop", "--type", "api", "--views", "cbv", "--db", "postgresql", "--app",
            "catalog", "--docker", "--no-venv",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("API endpoints:")
                .and(predicate::str::contains("http://127.0.0.1:8000/api/"))
                .and(predicate::str::contains("docker compose up --build")),
        );

    let root = temp.path().join("shop");
    let files = files_under(&root);
    for expected in [
        "catalog/serializers.py",
        "catalog/views.py",
        "Dockerfile",
        "docker-compose.yml",
        ".dockerignore",
        "entrypoint.sh",
    ] {
        assert!(files.contains(&expected.to_string()), "{expected} missing");
    }
    assert!(!files.contains(&"static/css/style.css".to_string()));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(root.join("entrypoint.sh")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}

#[test]
fn test_config_defaults_apply_without_flags() {
    let temp = tempdir().unwrap();
    let config = "[defaults]\nproject_type = \"api\"\napp_name = \"main\"\ncreate_venv = false\n";

    kickstart_in_with_config(temp.path(), config)
        .args(["create", "svc"])
        .assert()
        .success();

    let files = files_under(&temp.path().join("svc"));
    assert!(files.contains(&"main/serializers.py".to_string()));
    assert!(!temp.path().join("svc/venv").exists());
}

#[test]
fn test_verbose_lists_written_files() {
    let temp = tempdir().unwrap();
    kickstart_in(temp.path())
        .args(["-v", "create", "blog", "--no-venv", "--no-input"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created blog/settings.py"));
}

#[test]
fn test_invalid_project_name_fails_and_creates_nothing() {
    let temp = tempdir().unwrap();
    for name in ["my-blog", "1blog", "../escape"] {
        kickstart_in(temp.path())
            .args(["create", name, "--no-venv", "--no-input"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error: Invalid project name"));
    }
    assert!(top_level_entries(temp.path()).is_empty());
    assert!(!temp.path().parent().unwrap().join("escape").exists());
}

#[test]
fn test_invalid_app_name_fails() {
    let temp = tempdir().unwrap();
    kickstart_in(temp.path())
        .args(["create", "blog", "--app", "my-app", "--no-venv", "--no-input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid app name 'my-app'"));
    assert!(top_level_entries(temp.path()).is_empty());
}

#[test]
fn test_existing_directory_is_refused_and_untouched() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("blog");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("notes.txt"), "keep me").unwrap();

    kickstart_in(temp.path())
        .args(["create", "blog", "--no-venv", "--no-input"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(files_under(&root), vec!["notes.txt".to_string()]);
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "keep me");
}

#[test]
fn test_invalid_config_file_fails() {
    let temp = tempdir().unwrap();
    kickstart_in_with_config(temp.path(), "[defaults]\nunknown_key = 1\n")
        .args(["create", "blog", "--no-venv"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Error:")
                .and(predicate::str::contains("unknown_key"))
                .and(predicate::str::contains(".kickstart-test-config.toml")),
        );
    assert!(!temp.path().join("blog").exists());
}

#[test]
fn test_invalid_app_name_in_config_fails() {
    let temp = tempdir().unwrap();
    kickstart_in_with_config(temp.path(), "[defaults]\napp_name = \"my-app\"\n")
        .args(["create", "blog", "--no-venv"])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("[defaults] app_name")
                .and(predicate::str::contains("Invalid app name 'my-app'")),
        );
    assert!(!temp.path().join("blog").exists());
}

#[test]
fn test_missing_config_file_is_named() {
    let temp = tempdir().unwrap();
    kickstart_in(temp.path())
        .env("DJANGO_KICKSTART_CONFIG", temp.path().join("absent.toml"))
        .args(["create", "blog", "--no-venv"])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("absent.toml")
                .and(predicate::str::contains("does not exist")),
        );
    assert!(!temp.path().join("blog").exists());
}

#[test]
fn test_no_docker_overrides_configured_docker() {
    let temp = tempdir().unwrap();
    kickstart_in_with_config(temp.path(), "[defaults]\ndocker = true\n")
        .args(["create", "blog", "--no-venv", "--no-docker"])
        .assert()
        .success();
    assert!(temp.path().join("blog/manage.py").is_file());
    assert!(!temp.path().join("blog/Dockerfile").exists());
}

#[test]
fn test_missing_python_is_a_warning_not_a_failure() {
    let temp = tempdir().unwrap();
    kickstart_in(temp.path())
        .args([
            "create",
            "blog",
            "--no-input",
            "--python",
            "django-kickstart-no-such-python",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Python executable not found")
                .and(predicate::str::contains("created successfully")),
        );
    assert!(temp.path().join("blog/manage.py").is_file());
}
