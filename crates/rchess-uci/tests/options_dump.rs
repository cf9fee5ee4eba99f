use assert_cmd::Command;
use rchess_uci::state::MAX_HASH_MB;

fn dump(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("rchess-uci").expect("binary available");
    let output = cmd.args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 output")
}

fn uci_block() -> String {
    let lines = [
        "option name Debug Log File type string default ".to_string(),
        "option name Contempt type spin default 21 min -100 max 100".to_string(),
        "option name Analysis Contempt type combo default Both var Both var Off var White var Black"
            .to_string(),
        "option name Threads type spin default 1 min 1 max 512".to_string(),
        format!("option name Hash type spin default 16 min 1 max {MAX_HASH_MB}"),
        "option name Clear Hash type button".to_string(),
        "option name Ponder type check default false".to_string(),
        "option name MultiPV type spin default 1 min 1 max 500".to_string(),
        "option name Skill Level type spin default 20 min 0 max 20".to_string(),
        "option name Move Overhead type spin default 30 min 0 max 5000".to_string(),
        "option name Minimum Thinking Time type spin default 20 min 0 max 5000".to_string(),
        "option name Slow Mover type spin default 84 min 10 max 1000".to_string(),
        "option name nodestime type spin default 0 min 0 max 10000".to_string(),
        "option name UCI_Chess960 type check default false".to_string(),
        "option name UCI_AnalyseMode type check default false".to_string(),
        "option name SyzygyPath type string default <empty>".to_string(),
        "option name SyzygyProbeDepth type spin default 1 min 1 max 100".to_string(),
        "option name Syzygy50MoveRule type check default true".to_string(),
        "option name SyzygyProbeLimit type spin default 6 min 0 max 6".to_string(),
    ];
    lines.iter().map(|l| format!("\n{l}")).collect::<String>() + "\n"
}

fn xboard_block() -> String {
    let lines = [
        "feature option=\"Debug Log File -string \"".to_string(),
        "feature option=\"Contempt -spin 21 -100 100\"".to_string(),
        "feature option=\"Analysis Contempt -combo Both /// Off /// White /// Black\"".to_string(),
        "feature option=\"Threads -spin 1 1 512\"".to_string(),
        format!("feature option=\"Hash -spin 16 1 {MAX_HASH_MB}\""),
        "feature option=\"Clear Hash -button\"".to_string(),
        "feature option=\"Ponder -check 0\"".to_string(),
        "feature option=\"MultiPV -spin 1 1 500\"".to_string(),
        "feature option=\"Skill Level -spin 20 0 20\"".to_string(),
        "feature option=\"Move Overhead -spin 30 0 5000\"".to_string(),
        "feature option=\"Minimum Thinking Time -spin 20 0 5000\"".to_string(),
        "feature option=\"Slow Mover -spin 84 10 1000\"".to_string(),
        "feature option=\"nodestime -spin 0 0 10000\"".to_string(),
        "feature option=\"UCI_Chess960 -check 0\"".to_string(),
        "feature option=\"UCI_AnalyseMode -check 0\"".to_string(),
        "feature option=\"SyzygyPath -string <empty>\"".to_string(),
        "feature option=\"SyzygyProbeDepth -spin 1 1 100\"".to_string(),
        "feature option=\"Syzygy50MoveRule -check 1\"".to_string(),
        "feature option=\"SyzygyProbeLimit -spin 6 0 6\"".to_string(),
    ];
    lines.iter().map(|l| format!("\n{l}")).collect::<String>() + "\n"
}

#[test]
fn uci_dump_matches_the_advertised_block() {
    assert_eq!(dump(&[]), uci_block());
}

#[test]
fn xboard_dump_matches_the_advertised_block() {
    assert_eq!(dump(&["--protocol", "xboard"]), xboard_block());
}

#[test]
fn assigning_the_protocol_option_switches_the_grammar() {
    assert_eq!(dump(&["--set", "Protocol=xboard"]), xboard_block());
}

#[test]
fn rejected_assignments_leave_the_advertised_defaults() {
    // Out-of-range and malformed values are dropped silently, and the block
    // renders defaults rather than current values anyway.
    let text = dump(&["--set", "Threads=0", "--set", "Contempt=lots", "--set", "Threads=8"]);
    assert_eq!(text, uci_block());
}

#[test]
fn debug_log_mirrors_every_rendered_line() {
    let path = std::env::temp_dir().join(format!("rchess-dump-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let arg = format!("Debug Log File={}", path.display());
    let text = dump(&["--set", &arg]);
    assert_eq!(text, uci_block());

    let contents = std::fs::read_to_string(&path).expect("debug log written");
    assert!(contents.starts_with("<< option name Debug Log File type string default \n"));
    assert!(contents.contains(&format!(
        "<< option name Hash type spin default 16 min 1 max {MAX_HASH_MB}\n"
    )));
    assert_eq!(contents.lines().count(), uci_block().lines().count() - 1);
    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn unknown_option_names_are_reported() {
    let mut cmd = Command::cargo_bin("rchess-uci").expect("binary available");
    let output = cmd.args(["--set", "Nope=1"]).assert().failure().get_output().stderr.clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("unknown option 'Nope'"), "stderr: {text}");
}

#[test]
fn malformed_assignments_are_reported() {
    let mut cmd = Command::cargo_bin("rchess-uci").expect("binary available");
    let output = cmd.args(["--set", "Threads"]).assert().failure().get_output().stderr.clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("expected NAME=VALUE"), "stderr: {text}");
}

#[test]
fn unknown_protocols_are_reported() {
    let mut cmd = Command::cargo_bin("rchess-uci").expect("binary available");
    let output =
        cmd.args(["--protocol", "cecp"]).assert().failure().get_output().stderr.clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("unknown protocol 'cecp'"), "stderr: {text}");
}
