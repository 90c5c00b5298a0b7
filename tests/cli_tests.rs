// ABOUTME: Integration tests for the CLI application
// ABOUTME: Runs the appset-render binary end to end against temporary manifests

use std::path::Path;
use std::process::{Command, Output};
use tokio::fs;

use appset_render::model::Application;

mod common;
use common::{TestAppSetBuilder, TestEnvironment};

fn run_cli(env: &TestEnvironment, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_appset-render"))
        .args(args)
        .current_dir(env.path())
        .env("HOME", env.path())
        .env_remove("RUST_LOG")
        .env_remove("APPSET_RENDER_OUTPUT_FORMAT")
        .output()
        .expect("Failed to execute command")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are valid UTF-8")
}

#[tokio::test]
async fn test_cli_help_command() {
    let env = TestEnvironment::new();
    let output = run_cli(&env, &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ApplicationSet"));
    assert!(stdout.contains("render"));
    assert!(stdout.contains("check"));
}

#[tokio::test]
async fn test_cli_version_command() {
    let env = TestEnvironment::new();
    let output = run_cli(&env, &["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_cli_render_to_stdout() {
    let env = TestEnvironment::new();
    let builder = TestAppSetBuilder::new("guestbook").with_generator("list: {}");
    let appset = env.create_appset_file("guestbook", &builder).await;

    let output = run_cli(
        &env,
        &[
            "render",
            path_arg(&appset),
            "-p",
            "cluster=engineering-dev",
            "--param",
            "url=https://kubernetes.default.svc",
        ],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let app = Application::from_yaml(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(app.metadata.name, "engineering-dev-guestbook");
    assert_eq!(
        app.spec.destination.server.as_deref(),
        Some("https://kubernetes.default.svc")
    );
    assert_eq!(
        app.metadata.finalizers,
        vec!["resources-finalizer.argocd.argoproj.io"]
    );
}

#[tokio::test]
async fn test_cli_render_go_template_with_params_file() {
    let env = TestEnvironment::new();
    let builder = TestAppSetBuilder::new("guestbook")
        .with_go_template()
        .with_preserve_resources(true)
        .with_app_name("{{lower cluster}}-app");
    let appset = env.create_appset_file("guestbook", &builder).await;
    let params = env
        .create_file("params.yaml", "cluster: PROD\nurl: https://10.0.0.1\n")
        .await;
    let out = env.file("app.yaml");

    let output = run_cli(
        &env,
        &[
            "render",
            path_arg(&appset),
            "--params-file",
            path_arg(&params),
            "-o",
            path_arg(&out),
        ],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let app = Application::from_file(&out).unwrap();
    assert_eq!(app.metadata.name, "prod-app");
    assert!(app.metadata.finalizers.is_empty());
}

#[tokio::test]
async fn test_cli_render_json_format() {
    let env = TestEnvironment::new();
    let builder = TestAppSetBuilder::new("guestbook");
    let appset = env.create_appset_file("guestbook", &builder).await;

    let output = run_cli(
        &env,
        &["render", path_arg(&appset), "-p", "cluster=dev", "--format", "json"],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["metadata"]["name"], "dev-guestbook");
    assert_eq!(value["kind"], "Application");
}

#[tokio::test]
async fn test_cli_config_file_supplies_params() {
    let env = TestEnvironment::new();
    env.create_file(
        "appset-render.yaml",
        "output_format: json\nparams:\n  cluster: staging\n",
    )
    .await;
    let builder = TestAppSetBuilder::new("guestbook");
    let appset = env.create_appset_file("guestbook", &builder).await;

    let output = run_cli(&env, &["render", path_arg(&appset), "-p", "url=https://x"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["metadata"]["name"], "staging-guestbook");
}

#[tokio::test]
async fn test_cli_render_invalid_param() {
    let env = TestEnvironment::new();
    let builder = TestAppSetBuilder::new("guestbook");
    let appset = env.create_appset_file("guestbook", &builder).await;

    let output = run_cli(&env, &["render", path_arg(&appset), "-p", "novalue"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("key=value"));
}

#[tokio::test]
async fn test_cli_render_missing_file() {
    let env = TestEnvironment::new();
    let output = run_cli(&env, &["render", "does-not-exist.yaml"]);
    assert!(!output.status.success());
}

#[tokio::test]
async fn test_cli_check_passes() {
    let env = TestEnvironment::new();
    let builder = TestAppSetBuilder::new("guestbook")
        .with_generator("list: {}")
        .with_generator("clusters: {}");
    let appset = env.create_appset_file("guestbook", &builder).await;

    let output = run_cli(&env, &["check", path_arg(&appset)]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("all 2 generators recognized"));
}

#[tokio::test]
async fn test_cli_check_reports_unrecognized_generators() {
    let env = TestEnvironment::new();
    let builder = TestAppSetBuilder::new("guestbook")
        .with_generator("list: {}")
        .with_generator("{}")
        .with_last_applied(r#"{"spec":{"generators":[{"list":{}},{"plugin":{}}]}}"#);
    let appset = env.create_appset_file("guestbook", &builder).await;

    let output = run_cli(&env, &["check", path_arg(&appset)]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("contains unrecognized generators: plugin"));
}

#[tokio::test]
async fn test_cli_does_not_touch_input_file() {
    let env = TestEnvironment::new();
    let builder = TestAppSetBuilder::new("guestbook");
    let appset = env.create_appset_file("guestbook", &builder).await;
    let before = fs::read_to_string(&appset).await.unwrap();

    let output = run_cli(&env, &["render", path_arg(&appset), "-p", "cluster=dev"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&appset).await.unwrap(), before);
}
