// File: tests/command_roundtrip.rs
//! Rendering a command back to text and parsing it again yields the same
//! command.
mod common;

use common::*;
use crewbook::command::Command;
use crewbook::parser::parse_command;

fn assert_roundtrip(input: &str) {
    let parsed = parse_command(input).unwrap();
    let rendered = parsed.to_string();
    assert_eq!(parse_command(&rendered).unwrap(), parsed, "rendered {rendered:?}");
}

#[test]
fn test_add_member_renders_every_field() {
    let command = Command::AddMember(benson().with_tasks(Vec::new()));
    assert_eq!(
        command.to_string(),
        "padd n/Benson Meier p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 pos/President pos/Secretary"
    );
    assert_eq!(parse_command(&command.to_string()).unwrap(), command);
}

#[test]
fn test_every_command_roundtrips() {
    for input in [
        "padd n/Amy p/123",
        "padd n/Amy Bee p/11111111 e/amy@example.com a/Block 312 pos/Treasurer",
        "delete 3",
        "edit 2 n/Amy p/999 e/a@bc a/Somewhere pos/Lead pos/Deputy",
        "edit 1 pos/",
        "find alice bob",
        "list",
        "clear",
        "tadd m/1 n/Prepare budget report",
        "tdel m/2 t/4",
        "tdone m/1 t/1",
        "tlist m/5",
        "eadd n/AGM d/2024-03-15",
        "eadd n/Annual General Meeting d/2024-03-15 m/2 m/1",
        "eedit 1 n/Spring AGM d/2024-04-01 m/3 m/2",
        "eedit 2 m/1",
        "edel 1",
        "elist",
        "help",
        "exit",
    ] {
        assert_roundtrip(input);
    }
}

#[test]
fn test_rendered_text_is_canonical() {
    let command = parse_command("  tadd   n/Buy snacks   m/ 2 ").unwrap();
    assert_eq!(command.to_string(), "tadd m/2 n/Buy snacks");
    let command = parse_command("eadd m/3 d/2024-03-15 m/1 n/AGM").unwrap();
    assert_eq!(command.to_string(), "eadd n/AGM d/2024-03-15 m/1 m/3");
}
