use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

const TYPES: &str = r#"export interface User extends Entity { role: Role; created: Date }
enum Role { Admin, Member }
interface Entity { id: string }
interface Unused { user: User }
"#;

#[test]
fn test_closure_prints_tree_and_summary() -> Result<()> {
    let test = CliTest::with_file("types.ts", TYPES)?;

    let output = test.closure_command().args(["types.ts", "-t", "User"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "types.ts:\n\
         \x20    1  interface User (exported)\n\
         \x20    2  enum Role\n\
         \x20    3  interface Entity\n\
         \x20 external: Date\n\
         ✓ Collected 3 declarations from 1 file\n"
    );

    Ok(())
}

#[test]
fn test_closure_defaults_to_exported_types() -> Result<()> {
    let test = CliTest::with_file("types.ts", TYPES)?;

    let output = test.closure_command().args(["types.ts", "--json"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let json: Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(json["roots"], serde_json::json!(["User"]));
    let names: Vec<&str> = json["declarations"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|decl| decl["name"].as_str())
        .collect();
    assert_eq!(names, vec!["User", "Role", "Entity"]);
    assert_eq!(json["external"], serde_json::json!(["Date"]));

    Ok(())
}

#[test]
fn test_closure_missing_root_fails() -> Result<()> {
    let test = CliTest::with_file("types.ts", TYPES)?;

    let output = test
        .closure_command()
        .args(["types.ts", "-t", "Nope", "--json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let json: Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(json["missingRoots"], serde_json::json!(["Nope"]));

    Ok(())
}

#[test]
fn test_closure_uses_config_externals() -> Result<()> {
    let test = CliTest::with_file(
        "types.ts",
        "export interface Page { user: User; meta: Meta }\ninterface User {}\ninterface Meta {}\n",
    )?;
    test.write_file(".typedepsrc.json", r#"{ "externals": ["Me*"] }"#)?;

    let output = test.closure_command().args(["types.ts", "--json"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let json: Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(json["external"], serde_json::json!(["Meta"]));

    Ok(())
}

#[test]
fn test_closure_follows_reexports() -> Result<()> {
    let test = CliTest::with_file(
        "index.ts",
        "export { Role } from \"./roles\";\nexport interface User { role: Role }\n",
    )?;
    test.write_file("roles.ts", "export enum Role { Admin }\n")?;

    let output = test
        .closure_command()
        .args(["index.ts", "--follow-reexports"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("from ./roles: Role"), "{stdout}");
    assert!(stdout.contains("enum Role (exported)"), "{stdout}");
    assert!(stdout.ends_with("✓ Collected 2 declarations from 2 files\n"), "{stdout}");

    Ok(())
}

#[test]
fn test_closure_parse_error_is_reported() -> Result<()> {
    let test = CliTest::with_file("broken.ts", "interface A {")?;

    let output = test.closure_command().arg("broken.ts").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr_of(&output);
    assert!(stderr.starts_with("Error: Failed to analyze broken.ts"), "{stderr}");

    Ok(())
}

#[test]
fn test_closure_verbose_reports_progress() -> Result<()> {
    let test = CliTest::with_file("types.ts", TYPES)?;

    let output = test.closure_command().args(["types.ts", "-v"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("No .typedepsrc.json found, using defaults"), "{stderr}");
    assert!(stderr.contains("Parsing types.ts"), "{stderr}");
    assert!(stderr.contains("Finished in "), "{stderr}");

    Ok(())
}

#[test]
fn test_closure_follows_aliased_reexports() -> Result<()> {
    let test = CliTest::with_file(
        "index.ts",
        "export { Role as UserRole } from \"./roles\";\nexport interface User { role: UserRole }\n",
    )?;
    test.write_file("roles.ts", "export enum Role { Admin }\n")?;

    let output = test
        .closure_command()
        .args(["index.ts", "--follow-reexports", "--json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(json["reexports"][0]["names"], serde_json::json!(["UserRole"]));
    assert_eq!(json["followed"][0]["roots"], serde_json::json!(["Role"]));
    assert_eq!(json["followed"][0]["missingRoots"], serde_json::json!([]));

    Ok(())
}
