use std::process::Command;

fn pericope_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pericope"))
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn normalize_rewrites_a_reference_canonically() {
    let output = pericope_cmd()
        .args(["normalize", "ps 118.17-18"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "normalize failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_of(&output), "Psalm 118:17–18\n");
}

#[test]
fn normalize_fails_on_text_without_a_reference() {
    let output = pericope_cmd()
        .args(["normalize", "plain prose"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("no reference found"),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn parse_lists_verse_ids() {
    let output = pericope_cmd()
        .args(["parse", "2 Peter 3:1-2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "61003001\n61003002\n");
}

#[test]
fn parse_json_emits_a_summary() {
    let output = pericope_cmd()
        .args(["parse", "--json", "Philemon 8-10"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["book"], 57);
    assert_eq!(json["book_name"], "Philemon");
    assert_eq!(json["reference"], "Philemon 8–10");
    assert_eq!(json["verse_ids"][2], "57001010");
}

#[test]
fn sub_and_rsub_are_inverses() {
    let substituted = pericope_cmd()
        .args(["sub", "2 Peter 3:1-2 Lorem"])
        .output()
        .unwrap();
    assert!(substituted.status.success());
    assert_eq!(stdout_of(&substituted), "{{61003001 61003002}} Lorem\n");

    let restored = pericope_cmd()
        .args(["rsub", "{{61003001 61003002}} Lorem"])
        .output()
        .unwrap();
    assert!(restored.status.success());
    assert_eq!(stdout_of(&restored), "2 Peter 3:1–2 Lorem\n");
}

#[test]
fn reads_stdin_when_no_argument_is_given() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = pericope_cmd()
        .arg("normalize")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"jn 12:1-13:8\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "John 12:1—13:8\n");
}
