// File: ./src/help.rs
//! Help sections shown by the `help` command and `--help`.

use crate::command::CommandWord;
use strum::IntoEnumIterator;

#[derive(Clone, Debug)]
pub struct HelpItem {
    pub keys: String,
    pub desc: String,
    pub example: String,
}

#[derive(Clone, Debug)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<HelpItem>,
}

fn section_of(word: CommandWord) -> &'static str {
    match word {
        CommandWord::Padd
        | CommandWord::Delete
        | CommandWord::Edit
        | CommandWord::Find
        | CommandWord::List
        | CommandWord::Clear => "Members",
        CommandWord::Tadd | CommandWord::Tdel | CommandWord::Tdone | CommandWord::Tlist => "Tasks",
        CommandWord::Eadd | CommandWord::Eedit | CommandWord::Edel | CommandWord::Elist => {
            "Events"
        }
        CommandWord::Help | CommandWord::Exit => "General",
    }
}

/// The example line is the last line of each usage string.
fn example_of(word: CommandWord) -> String {
    word.usage()
        .lines()
        .last()
        .and_then(|l| l.trim().strip_prefix("Example: "))
        .unwrap_or(word.as_str())
        .to_string()
}

/// One section per command group, in keyword order.
pub fn get_command_help() -> Vec<HelpSection> {
    let mut sections: Vec<HelpSection> = Vec::new();
    for word in CommandWord::iter() {
        let title = section_of(word);
        let item = HelpItem {
            keys: word.to_string(),
            desc: word.description().to_string(),
            example: example_of(word),
        };
        match sections.iter_mut().find(|s| s.title == title) {
            Some(section) => section.items.push(item),
            None => sections.push(HelpSection {
                title: title.to_string(),
                items: vec![item],
            }),
        }
    }
    sections
}

/// Renders every section as plain text.
pub fn render_help() -> String {
    let mut out = String::new();
    for section in get_command_help() {
        out.push_str(&section.title);
        out.push_str(":\n");
        for item in &section.items {
            out.push_str(&format!("  {:<7} {}\n", item.keys, item.desc));
            out.push_str(&format!("          e.g. {}\n", item.example));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_is_listed_once() {
        let sections = get_command_help();
        let count: usize = sections.iter().map(|s| s.items.len()).sum();
        assert_eq!(count, CommandWord::iter().count());
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Members", "Tasks", "Events", "General"]);
    }

    #[test]
    fn examples_are_taken_from_usage() {
        let tasks = get_command_help()
            .into_iter()
            .find(|s| s.title == "Tasks")
            .unwrap();
        assert_eq!(tasks.items[0].keys, "tadd");
        assert_eq!(tasks.items[0].example, "tadd m/1 n/Prepare budget report");
    }
}
