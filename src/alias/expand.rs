// Alias expansion - recursively resolves nested alias references into a flat
// command list, with cycle passthrough and argument forwarding

use super::table::{AliasError, AliasTable};

/// Expand an alias into its flattened command sequence
///
/// Each command in an alias body is split into a head token and an optional
/// argument remainder. A head that names another alias is expanded in place,
/// and the remainder is re-appended to every command that expansion produced.
/// A head that is already being expanded on the current path (a cycle) stops
/// recursion and the command passes through verbatim, so expansion always
/// terminates and never drops data.
pub fn expand(table: &AliasTable, name: &str) -> Result<Vec<String>, AliasError> {
    let commands = table
        .get(name)
        .ok_or_else(|| AliasError::NotFound(name.to_string()))?;
    Ok(expand_sequence(table, commands, &[name]))
}

/// Expand one command sequence, tracking the alias names entered on this path
fn expand_sequence(table: &AliasTable, commands: &[String], visited: &[&str]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(commands.len());

    for command in commands {
        let (head, remainder) = split_command(command);

        // Re-entry on the active path: emit verbatim instead of recursing
        if visited.contains(&head) {
            expanded.push(command.clone());
            continue;
        }

        match table.get(head) {
            Some(body) => {
                let mut entered = visited.to_vec();
                entered.push(head);
                let produced = expand_sequence(table, body, &entered);
                match remainder {
                    // Argument text is appended to every produced command
                    Some(args) => expanded
                        .extend(produced.into_iter().map(|cmd| format!("{} {}", cmd, args))),
                    None => expanded.extend(produced),
                }
            }
            None => expanded.push(command.clone()),
        }
    }

    expanded
}

/// Split a command at its first whitespace run
///
/// Returns the head token and the remainder after the run. The remainder is
/// preserved literally from there on (internal spacing included); a command
/// with no whitespace has no remainder. A command starting with whitespace
/// gets an empty head, which can never name an alias.
fn split_command(command: &str) -> (&str, Option<&str>) {
    match command.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, Some(rest.trim_start())),
        None => (command, None),
    }
}

#[cfg(test)]
#[path = "expand_test.rs"]
mod tests;
