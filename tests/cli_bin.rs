use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_skillboard"))
        .args(args)
        .env("SKILLBOARD_LOG", "off")
        .output()
        .expect("failed to run skillboard binary")
}

#[test]
fn json_output_smoke() {
    let output = run(&["--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["board"].as_array().map(|rows| rows.len()), Some(10));
    assert_eq!(v["counts"]["ship_under_area_effect"], 5);
    assert_eq!(v["counts"]["area_effect"], 26);
    assert_eq!(v["placed"], 3);
    assert_eq!(v["overlays"][1]["shape"], "Cross");
}

#[test]
fn origin_override() {
    let output = run(&["--json", "--cross", "0,0"]);
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(v["overlays"][1]["origin"]["row"], 0);
    assert_eq!(v["overlays"][1]["report"]["clipped"], 4);
}

#[test]
fn text_output_has_legend() {
    let output = run(&["--show-masks"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("CONE MASK"));
    assert!(stdout.contains("BOARD (0=water, 3=ship, 5=area, 8=ship+area):"));
}

#[test]
fn bad_origin_rejected() {
    let output = run(&["--cone", "three"]);
    assert!(!output.status.success());
}

#[test]
fn negative_origin_override() {
    let output = run(&["--json", "--cross", "-1,4"]);
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(v["overlays"][1]["origin"]["row"], -1);
    // only rows 0 and 1 of the vertical bar land on the board
    assert_eq!(v["overlays"][1]["report"]["marked"], 2);
    assert_eq!(v["overlays"][1]["report"]["clipped"], 7);
}
