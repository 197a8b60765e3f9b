#![cfg(unix)]

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const BANNER: &str = "// Automatically generated file.  Do not edit!\n";

const LICENSE: &str = "/*\n\n Copyright 2013 Google LLC\n SPDX-License-Identifier: Apache-2.0\n*/";

/// Project with stand-in tools: the analyzer prints `deps.txt` and records its
/// arguments, the compiler prints `compiled.js`.
fn setup_project(deps: &[&str], compiled: &str) -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        ".gamepackrc.json",
        r#"{
            "depsBuilder": ["sh", "fake-deps.sh"],
            "compiler": ["sh", "fake-compiler.sh"]
        }"#,
    )?;
    test.write_file("fake-deps.sh", "echo \"$@\" > deps-args.txt\ncat deps.txt\n")?;
    test.write_file("fake-compiler.sh", "cat compiled.js\n")?;
    test.write_file("deps.txt", &format!("{}\n", deps.join("\n")))?;
    test.write_file("compiled.js", compiled)?;
    test.write_file(
        "appengine/common/boot.js",
        "window['BlocklyGamesLanguages'] = [\n  'en', 'de'\n];\n",
    )?;
    test.write_file(
        "appengine/generated/msg/en.js",
        r#"// Messages
BlocklyMsg["A"] = "Apple";
BlocklyMsg["B"] = "Banana";
BlocklyGamesMsg["Games.name"] = "Blockly Games";
BlocklyGamesMsg["Games.unused"] = "Unused";
"#,
    )?;
    test.write_file(
        "appengine/generated/msg/de.js",
        r#"BlocklyMsg["B"] = "Banane";
BlocklyMsg["A"] = "Apfel";
BlocklyGamesMsg["Games.unused"] = "Ungenutzt";
BlocklyGamesMsg["Games.name"] = "Blockly Spiele";
"#,
    )?;
    Ok(test)
}

#[test]
fn test_end_to_end_keeps_only_referenced_messages() -> Result<()> {
    let compiled = format!("{}var x=f(\"A\")+g.Games.name;\n", LICENSE);
    let test = setup_project(
        &["appengine/third-party/base.js", "appengine/bird/src/main.js"],
        &compiled,
    )?;
    test.create_dir("appengine/bird/src")?;

    let output = test.command().arg("bird").output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Compressing Bird"));
    assert!(stdout.contains("Found 2 dependencies."));
    assert!(stdout.contains("Found 1 Blockly messages."));
    assert!(stdout.contains("Found 1 Blockly Games messages."));

    let compressed = test.read_file("appengine/bird/generated/compressed.js")?;
    assert_eq!(compressed, format!("{}var x=f(\"A\")+g.Games.name;\n", BANNER));

    assert_eq!(
        test.read_file("appengine/bird/generated/msg/en.js")?,
        format!(
            "{}var BlocklyMsg={{ A:\"Apple\" }}\nvar BlocklyGamesMsg={{ \"Games.name\":\"Blockly Games\" }}\n",
            BANNER
        )
    );
    assert_eq!(
        test.read_file("appengine/bird/generated/msg/de.js")?,
        format!(
            "{}var BlocklyMsg={{ A:\"Apfel\" }}\nvar BlocklyGamesMsg={{ \"Games.name\":\"Blockly Spiele\" }}\n",
            BANNER
        )
    );

    let uncompressed = test.read_file("appengine/bird/generated/uncompressed.js")?;
    assert!(uncompressed.starts_with(BANNER));
    assert!(uncompressed.contains("\"third-party/base.js\",\n          \"bird/src/main.js\""));

    let deps_args = test.read_file("deps-args.txt")?;
    assert!(deps_args.contains("--namespace=Bird"));
    assert!(deps_args.contains("--root=appengine/bird/src/"));
    assert!(!deps_args.contains("--root=appengine/bird/generated/"));

    Ok(())
}

#[test]
fn test_outputs_are_overwritten() -> Result<()> {
    let test = setup_project(&["appengine/bird/src/main.js"], "f(\"A\")")?;
    test.write_file("appengine/bird/generated/msg/en.js", "stale contents\n")?;

    let output = test.command().arg("bird").output()?;
    assert!(output.status.success());

    let en = test.read_file("appengine/bird/generated/msg/en.js")?;
    assert_eq!(en, format!("{}var BlocklyMsg={{ A:\"Apple\" }}\n", BANNER));

    Ok(())
}

#[test]
fn test_docs_paths_get_parent_prefix() -> Result<()> {
    let test = setup_project(
        &["appengine/third-party/base.js", "appengine/pond/docs/src/main.js"],
        "",
    )?;

    let output = test.command().arg("pond/docs").output()?;
    assert!(output.status.success());

    let uncompressed = test.read_file("appengine/pond/docs/generated/uncompressed.js")?;
    assert!(
        uncompressed
            .contains("\"../third-party/base.js\",\n          \"../pond/docs/src/main.js\"")
    );

    Ok(())
}

#[test]
fn test_maze_injects_python_generator() -> Result<()> {
    let test = setup_project(
        &[
            "appengine/third-party/blockly/generators/javascript.js",
            "appengine/maze/src/main.js",
        ],
        "",
    )?;

    let output = test.command().arg("maze").output()?;
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("warning:"));

    let uncompressed = test.read_file("appengine/maze/generated/uncompressed.js")?;
    assert!(uncompressed.contains(
        "\"third-party/blockly/generators/javascript.js\",\n          \"third-party/blockly/generators/python_compressed.js\",\n          \"maze/src/main.js\""
    ));

    Ok(())
}

#[test]
fn test_maze_without_anchor_warns_and_continues() -> Result<()> {
    let test = setup_project(&["appengine/maze/src/main.js"], "")?;

    let output = test.command().arg("maze").output()?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("warning: could not find"));

    let uncompressed = test.read_file("appengine/maze/generated/uncompressed.js")?;
    assert!(!uncompressed.contains("python_compressed.js"));
    assert!(test.root().join("appengine/maze/generated/msg/de.js").exists());

    Ok(())
}

#[test]
fn test_path_outside_prefix_fails() -> Result<()> {
    let test = setup_project(&["appengine/bird/src/main.js", "lib/other.js"], "")?;

    let output = test.command().arg("bird").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("Error: \"lib/other.js\" is not in \"appengine/\".")
    );
    assert!(!test.root().join("appengine/bird/generated/compressed.js").exists());

    Ok(())
}

#[test]
fn test_missing_language_list_fails() -> Result<()> {
    let test = setup_project(&["appengine/bird/src/main.js"], "")?;
    test.write_file("appengine/common/boot.js", "var nothing = [];\n")?;

    let output = test.command().arg("bird").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("Can't find BlocklyGamesLanguages in boot.js")
    );

    Ok(())
}

#[test]
fn test_missing_compiler_names_command() -> Result<()> {
    let test = setup_project(&["appengine/bird/src/main.js"], "")?;
    test.write_file(
        ".gamepackrc.json",
        r#"{
            "depsBuilder": ["sh", "fake-deps.sh"],
            "compiler": ["gamepack-missing-compiler", "-jar", "cc.jar"]
        }"#,
    )?;

    let output = test.command().arg("bird").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("Failed to start: gamepack-missing-compiler -jar cc.jar --generate_exports")
    );
    assert!(test.root().join("appengine/bird/generated/uncompressed.js").exists());

    Ok(())
}

#[test]
fn test_warnings_are_reported_when_a_later_stage_fails() -> Result<()> {
    let test = setup_project(&["appengine/maze/src/main.js"], "")?;
    test.write_file(
        "appengine/common/boot.js",
        "window['BlocklyGamesLanguages'] = ['en', 'fr'];\n",
    )?;

    let output = test.command().arg("maze").output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: could not find"));
    assert!(stderr.contains("Error: Failed to read message file:"));
    assert!(stderr.contains("fr.js"));

    Ok(())
}

#[test]
fn test_non_utf8_compiler_output_fails() -> Result<()> {
    let test = setup_project(&["appengine/bird/src/main.js"], "")?;
    test.write_file("fake-compiler.sh", "printf 'var s=\"\\377\";'\n")?;

    let output = test.command().arg("bird").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("produced non-UTF-8 output"));
    assert!(!test.root().join("appengine/bird/generated/compressed.js").exists());

    Ok(())
}
