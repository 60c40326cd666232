//! Command grammar
//!
//! Operator lines carry a case-insensitive verb and at most one
//! argument: `CREATE <name>`, `DELETE <name>`, `JOIN <name>`, `LIST`.
//! The line itself is what goes on the wire; [`Command`] exists for
//! local decisions (the JOIN transition, reply rendering) and never
//! replaces the raw text.

/// Classified operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new room
    Create(String),
    /// Delete an existing room
    Delete(String),
    /// Join a room, switching to chat mode on success
    Join(String),
    /// List all rooms
    List,
}

impl Command {
    /// Classify an operator line.
    ///
    /// Returns `None` for anything that is not one of the four known
    /// verbs; unknown lines are still forwarded to the server, which
    /// owns validation.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(' ') {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        if verb.eq_ignore_ascii_case("LIST") && arg.is_empty() {
            return Some(Command::List);
        }
        if arg.is_empty() {
            return None;
        }
        if verb.eq_ignore_ascii_case("CREATE") {
            Some(Command::Create(arg.to_string()))
        } else if verb.eq_ignore_ascii_case("DELETE") {
            Some(Command::Delete(arg.to_string()))
        } else if verb.eq_ignore_ascii_case("JOIN") {
            Some(Command::Join(arg.to_string()))
        } else {
            None
        }
    }
}

/// Upper-case the verb region of a command line before transmission.
///
/// The verb region is everything up to the first space, or the whole
/// line if there is none. Only regions of exactly 4 or 6 bytes are
/// touched; those are the lengths of the recognized verbs, so anything
/// else passes through for the server to reject. The argument is never
/// modified.
pub fn normalize(line: &str) -> String {
    let verb_len = line.find(' ').unwrap_or(line.len());
    if verb_len == 4 || verb_len == 6 {
        let (verb, rest) = line.split_at(verb_len);
        format!("{}{}", verb.to_ascii_uppercase(), rest)
    } else {
        line.to_string()
    }
}
