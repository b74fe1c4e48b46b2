use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Temporary directory holding the test database
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with --no-color and the given database
fn nomad_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("nomad").expect("Failed to find nomad binary");
    cmd.arg("--no-color")
        .args(["--database-file", db_path.to_str().unwrap()]);
    cmd
}

fn import_lists(temp_dir: &TempDir) {
    nomad_cmd(temp_dir)
        .args(["list", "import"])
        .assert()
        .success();
}

fn create_paris(temp_dir: &TempDir) {
    nomad_cmd(temp_dir)
        .args([
            "itinerary",
            "create",
            "Paris",
            "--days",
            "3",
            "--list",
            "Paris Favorites",
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_no_command_lists_itineraries() {
    let temp_dir = create_cli_test_environment();

    nomad_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No itineraries found."));
}

#[test]
fn test_cli_import_lists_is_idempotent() {
    let temp_dir = create_cli_test_environment();

    nomad_cmd(&temp_dir)
        .args(["list", "import"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 5 list(s), skipped 0"));

    nomad_cmd(&temp_dir)
        .args(["l", "import"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 0 list(s), skipped 5"));

    nomad_cmd(&temp_dir)
        .args(["list", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Paris Favorites (ID: 1)"))
        .stdout(predicate::str::contains("Copenhagen Hygge"));

    nomad_cmd(&temp_dir)
        .args(["list", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Paris Favorites"))
        .stdout(predicate::str::contains("- Center: 48.8"));
}

#[test]
fn test_cli_create_and_show_itinerary() {
    let temp_dir = create_cli_test_environment();
    import_lists(&temp_dir);

    nomad_cmd(&temp_dir)
        .args([
            "itinerary",
            "create",
            "Paris",
            "--days",
            "3",
            "--list",
            "Paris Favorites",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created itinerary for Paris with ID: 1"))
        .stdout(predicate::str::contains("## Day 3"));

    nomad_cmd(&temp_dir)
        .args(["i", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Paris"))
        .stdout(predicate::str::contains("- List: Paris Favorites"));
}

#[test]
fn test_cli_create_validation_errors() {
    let temp_dir = create_cli_test_environment();
    import_lists(&temp_dir);

    nomad_cmd(&temp_dir)
        .args(["itinerary", "create", "Paris", "--days", "0", "--list", "Paris Favorites"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid number of days."));

    nomad_cmd(&temp_dir)
        .args(["itinerary", "create", "Paris", "--days", "4000000000", "--list", "Paris Favorites"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid number of days."));

    nomad_cmd(&temp_dir)
        .args(["itinerary", "create", "Oslo", "--days", "2", "--list", "Oslo Secrets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Oslo Secrets"));

    create_paris(&temp_dir);
    nomad_cmd(&temp_dir)
        .args(["itinerary", "create", "paris", "--days", "2", "--list", "Paris Favorites"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_cli_plan_places() {
    let temp_dir = create_cli_test_environment();
    import_lists(&temp_dir);
    create_paris(&temp_dir);

    nomad_cmd(&temp_dir)
        .args(["place", "add", "1", "2", "CORTADO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Places planned: 1"))
        .stdout(predicate::str::contains("**CORTADO**"))
        .stdout(predicate::str::contains("travelmode=driving"));

    nomad_cmd(&temp_dir)
        .args(["p", "candidates", "1", "--sort", "distance", "--start", "Louvre Museum"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("- 🏛 **Louvre Museum**"))
        .stdout(predicate::str::contains("**CORTADO**").not());

    nomad_cmd(&temp_dir)
        .args(["place", "remove", "1", "2", "CORTADO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Places planned: 0"));

    nomad_cmd(&temp_dir)
        .args(["place", "add", "1", "4", "CORTADO"])
        .assert()
        .failure();
}

#[test]
fn test_cli_update_itinerary() {
    let temp_dir = create_cli_test_environment();
    import_lists(&temp_dir);
    create_paris(&temp_dir);

    nomad_cmd(&temp_dir)
        .args(["itinerary", "update", "1", "--days", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes made:"))
        .stdout(predicate::str::contains("- Days: 5"))
        .stdout(predicate::str::contains("## Day 5"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    import_lists(&temp_dir);
    create_paris(&temp_dir);

    nomad_cmd(&temp_dir)
        .args(["itinerary", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires confirmation"));

    nomad_cmd(&temp_dir)
        .args(["itinerary", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted itinerary for Paris (ID: 1)"));

    nomad_cmd(&temp_dir)
        .args(["itinerary", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No itineraries found."));
}

#[test]
fn test_cli_demo_itinerary() {
    let temp_dir = create_cli_test_environment();
    import_lists(&temp_dir);

    nomad_cmd(&temp_dir)
        .args(["itinerary", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created itinerary for Paris"))
        .stdout(predicate::str::contains("Musée d'Orsay"));

    nomad_cmd(&temp_dir)
        .args(["itinerary", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paris already has an itinerary"));
}

#[test]
fn test_cli_invalid_ids() {
    let temp_dir = create_cli_test_environment();

    nomad_cmd(&temp_dir)
        .args(["itinerary", "show", "99999"])
        .assert()
        .failure();

    nomad_cmd(&temp_dir)
        .args(["list", "show", "99999"])
        .assert()
        .failure();
}
