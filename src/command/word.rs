// File: src/command/word.rs
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every keyword the router understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CommandWord {
    Padd,
    Delete,
    Edit,
    Find,
    List,
    Clear,
    Tadd,
    Tdel,
    Tdone,
    Tlist,
    Eadd,
    Eedit,
    Edel,
    Elist,
    Help,
    Exit,
}

impl CommandWord {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// One-line summary for the help listing.
    pub fn description(&self) -> &'static str {
        match self {
            CommandWord::Padd => "Adds a member to the roster.",
            CommandWord::Delete => "Deletes the member identified by the index in the displayed list.",
            CommandWord::Edit => "Edits the details of the member identified by the index.",
            CommandWord::Find => "Finds members whose names contain any of the keywords.",
            CommandWord::List => "Lists all members.",
            CommandWord::Clear => "Clears all members and events.",
            CommandWord::Tadd => "Adds a task to a member's task list.",
            CommandWord::Tdel => "Deletes a task from a member's task list.",
            CommandWord::Tdone => "Marks a task as done, or back to not done.",
            CommandWord::Tlist => "Lists the tasks of a member.",
            CommandWord::Eadd => "Adds an event, optionally with members.",
            CommandWord::Eedit => "Renames, reschedules or adds members to an event.",
            CommandWord::Edel => "Deletes the event identified by the index.",
            CommandWord::Elist => "Lists all events.",
            CommandWord::Help => "Shows program usage instructions.",
            CommandWord::Exit => "Exits the program.",
        }
    }

    /// Usage string shown alongside syntax errors.
    pub fn usage(&self) -> &'static str {
        match self {
            CommandWord::Padd => {
                "padd: Adds a member to the roster.\n\
                 Parameters: n/NAME p/PHONE [e/EMAIL] [a/ADDRESS] [pos/POSITION]...\n\
                 Example: padd n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2 pos/Treasurer"
            }
            CommandWord::Delete => {
                "delete: Deletes the member identified by the index number used in the displayed member list.\n\
                 Parameters: INDEX (must be a positive integer)\n\
                 Example: delete 1"
            }
            CommandWord::Edit => {
                "edit: Edits the details of the member identified by the index number used in the displayed member list. \
                 Existing values will be overwritten by the input values.\n\
                 Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [pos/POSITION]...\n\
                 Example: edit 1 p/91234567 e/johndoe@example.com"
            }
            CommandWord::Find => {
                "find: Finds all members whose names contain any of the specified keywords (case-insensitive) \
                 and displays them as a list with index numbers.\n\
                 Parameters: KEYWORD [MORE_KEYWORDS]...\n\
                 Example: find alice bob charlie"
            }
            CommandWord::List => "list: Lists all members.\nExample: list",
            CommandWord::Clear => "clear: Clears all members and events.\nExample: clear",
            CommandWord::Tadd => {
                "tadd: Adds a task to the task list of the member identified by the index number.\n\
                 Parameters: m/MEMBER_INDEX n/TASK_NAME\n\
                 Example: tadd m/1 n/Prepare budget report"
            }
            CommandWord::Tdel => {
                "tdel: Deletes a task from the task list of the member identified by the index number.\n\
                 Parameters: m/MEMBER_INDEX t/TASK_INDEX\n\
                 Example: tdel m/1 t/2"
            }
            CommandWord::Tdone => {
                "tdone: Toggles the done flag of a task of the member identified by the index number.\n\
                 Parameters: m/MEMBER_INDEX t/TASK_INDEX\n\
                 Example: tdone m/1 t/2"
            }
            CommandWord::Tlist => {
                "tlist: Lists the tasks of the member identified by the index number.\n\
                 Parameters: m/MEMBER_INDEX\n\
                 Example: tlist m/1"
            }
            CommandWord::Eadd => {
                "eadd: Adds an event, optionally attended by members identified by their index numbers.\n\
                 Parameters: n/EVENT_NAME d/DATE [m/MEMBER_INDEX]...\n\
                 Example: eadd n/Annual General Meeting d/2024-03-15 m/1 m/3"
            }
            CommandWord::Eedit => {
                "eedit: Edits the event identified by the index number used in the displayed event list. \
                 Name and date are overwritten; members are added to the existing ones.\n\
                 Parameters: INDEX (must be a positive integer) [n/EVENT_NAME] [d/DATE] [m/MEMBER_INDEX]...\n\
                 Example: eedit 1 d/2024-03-22 m/2"
            }
            CommandWord::Edel => {
                "edel: Deletes the event identified by the index number used in the displayed event list.\n\
                 Parameters: INDEX (must be a positive integer)\n\
                 Example: edel 1"
            }
            CommandWord::Elist => "elist: Lists all events.\nExample: elist",
            CommandWord::Help => "help: Shows program usage instructions.\nExample: help",
            CommandWord::Exit => "exit: Exits the program.\nExample: exit",
        }
    }

    /// Whether a successful application changes the roster.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            CommandWord::Padd
                | CommandWord::Delete
                | CommandWord::Edit
                | CommandWord::Clear
                | CommandWord::Tadd
                | CommandWord::Tdel
                | CommandWord::Tdone
                | CommandWord::Eadd
                | CommandWord::Eedit
                | CommandWord::Edel
        )
    }
}
