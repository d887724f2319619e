use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_names_prints_every_declaration() -> Result<()> {
    let test = CliTest::with_file(
        "src/user.ts",
        "interface User extends Base { tags: Tag[]; role: Admin | Guest }\ntype Id = string;\n",
    )?;

    let output = test.names_command().arg("src/user.ts").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "src/user.ts:\n\
         \x20    1  interface User: User, User, Base, Tag, Admin, Guest\n\
         \x20    2  type Id: Id, Id\n"
    );

    Ok(())
}

#[test]
fn test_names_expands_globs_as_json() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", "interface A { b: B }\n")?;
    test.write_file("src/nested/b.ts", "enum B { One }\n")?;
    test.write_file("src/notes.md", "# notes\n")?;

    let output = test
        .names_command()
        .args(["src/**/*", "--json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_str(&stdout_of(&output))?;
    let files: Vec<&str> = json
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|file| file["file"].as_str())
        .collect();
    assert_eq!(files.len(), 2);
    assert!(files.iter().any(|f| f.ends_with("a.ts")));
    assert!(files.iter().any(|f| f.ends_with("b.ts")));

    Ok(())
}

#[test]
fn test_names_parse_failure_warns_and_fails() -> Result<()> {
    let test = CliTest::with_file("good.ts", "interface A {}\n")?;
    test.write_file("bad.ts", "interface A {")?;

    let output = test.names_command().args(["good.ts", "bad.ts"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("interface A: A, A"));
    assert!(stderr_of(&output).contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_names_no_match_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.names_command().arg("src/**/*.ts").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("No TypeScript files matched"));

    Ok(())
}
