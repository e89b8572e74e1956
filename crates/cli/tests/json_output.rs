use std::path::PathBuf;
use std::process::Command;

fn bundled_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/destinations.json")
}

#[test]
fn test_recommend_json_is_machine_readable() {
    let output = Command::new(env!("CARGO_BIN_EXE_wayfinder"))
        .current_dir(std::env::temp_dir())
        .env_remove("GEMINI_API_KEY")
        .env("RUST_LOG", "debug")
        .arg("--catalog")
        .arg(bundled_catalog())
        .args([
            "recommend",
            "--budget",
            "Low",
            "--duration",
            "Short",
            "--season",
            "Winter",
            "--travel-type",
            "Solo",
            "--activity",
            "Beaches",
            "--limit",
            "2",
            "--json",
        ])
        .output()
        .expect("wayfinder runs");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let results: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a single JSON document");
    let results = results.as_array().expect("a JSON array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], "goa");
    assert_eq!(results[0]["matchScore"], 105);
    assert_eq!(results[0]["source"], "Algorithmic");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GEMINI_API_KEY not set"));
}
