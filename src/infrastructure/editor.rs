//! Editor integration for composing entry text

use crate::error::{MoodjourError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Lines starting with this marker are dropped from the composed text
const COMMENT_MARKER: &str = "#";

/// Session for writing entry text in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Write `draft` to `draft_path`, wait for the editor to exit and
    /// return the edited text without comment lines.
    ///
    /// The draft file is removed afterwards.
    pub fn compose(&self, draft_path: &Path, draft: &str) -> Result<String> {
        fs::write(draft_path, draft)?;

        let status = self.run(draft_path);
        let text = fs::read_to_string(draft_path);
        let _ = fs::remove_file(draft_path);

        let status = status?;
        if !status.success() {
            return Err(MoodjourError::Editor(format!(
                "Editor '{}' exited with {}",
                self.command, status
            )));
        }

        Ok(strip_comments(&text?))
    }

    fn run(&self, file_path: &Path) -> Result<std::process::ExitStatus> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program).args(&args);
            cmd
        };

        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new(&program);
            cmd.args(&args);
            cmd
        };

        cmd.status().map_err(|e| {
            MoodjourError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        let Some((program, rest)) = parts.split_first() else {
            let fallback = if cfg!(windows) { "notepad" } else { "nano" };
            return (fallback.to_string(), vec![]);
        };

        (
            program.to_string(),
            rest.iter().map(|s| s.to_string()).collect(),
        )
    }
}

/// Draft shown when composing a new entry
pub fn draft_template(date_label: &str, existing: &str) -> String {
    format!(
        "{}\n{} Write your entry for {} above. Lines starting with '{}' are ignored.\n",
        existing.trim_end(),
        COMMENT_MARKER,
        date_label,
        COMMENT_MARKER
    )
}

fn strip_comments(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with(COMMENT_MARKER))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
