//! Git command requests and command-line assembly

use std::path::{Path, PathBuf};

use gmv_core::{relative_to, ShellDialect};

/// One git subcommand invocation.
///
/// Built once per call with the chained setters, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRequest {
    command: String,
    options: Vec<String>,
    files: Vec<PathBuf>,
    cwd: PathBuf,
    use_period_when_empty_files: bool,
}

impl GitRequest {
    /// A request for `git <command>` run in `cwd`.
    pub fn new(command: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            options: Vec::new(),
            files: Vec::new(),
            cwd: cwd.into(),
            use_period_when_empty_files: false,
        }
    }

    /// `git mv <from> <to>` in `cwd`.
    pub fn mv(cwd: impl Into<PathBuf>, from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        Self::new("mv", cwd).file(from).file(to)
    }

    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extend(options.into_iter().map(Into::into));
        self
    }

    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.files.push(file.into());
        self
    }

    pub fn files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Pass `.` when no files were given (e.g. `git add .`).
    pub fn use_period_when_empty_files(mut self, enabled: bool) -> Self {
        self.use_period_when_empty_files = enabled;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// The argument list after the subcommand, quoted for `dialect`.
    ///
    /// Order: options as given, then files as given. Absolute files are
    /// rewritten relative to the working directory before quoting.
    pub fn arguments(&self, dialect: ShellDialect) -> Vec<String> {
        let mut args: Vec<String> = self.options.clone();

        if self.files.is_empty() {
            if self.use_period_when_empty_files {
                args.push(".".to_string());
            }
            return args;
        }

        args.extend(self.files.iter().map(|file| {
            let relative = relative_to(&self.cwd, file);
            dialect.quote(&relative.to_string_lossy())
        }));
        args
    }

    /// The full command line, space-joined: `<program> <command> <args...>`.
    ///
    /// Options are not quoted; callers must not put shell metacharacters in them.
    pub fn command_line(&self, program: &str, dialect: ShellDialect) -> String {
        let mut parts = vec![program.to_string(), self.command.clone()];
        parts.extend(self.arguments(dialect));
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mv_command_line_posix() {
        let request = GitRequest::mv("/ws", "src/a.txt", "src/b.txt");
        assert_eq!(
            request.command_line("git", ShellDialect::Posix),
            "git mv 'src/a.txt' 'src/b.txt'"
        );
    }

    #[test]
    fn test_mv_command_line_windows() {
        let request = GitRequest::mv("/ws", "a b.txt", "c.txt");
        assert_eq!(
            request.command_line("git", ShellDialect::Windows),
            "git mv \"a b.txt\" \"c.txt\""
        );
    }

    #[test]
    fn test_absolute_files_become_relative_to_cwd() {
        let request = GitRequest::new("add", "/ws").file("/ws/src/lib.rs");
        assert_eq!(
            request.arguments(ShellDialect::Posix),
            vec!["'src/lib.rs'".to_string()]
        );
    }

    #[test]
    fn test_absolute_file_outside_cwd_uses_parent_dirs() {
        let request = GitRequest::new("add", "/ws/sub").file("/ws/top.txt");
        assert_eq!(
            request.arguments(ShellDialect::Posix),
            vec!["'../top.txt'".to_string()]
        );
    }

    #[test]
    fn test_relative_files_pass_through() {
        let request = GitRequest::new("add", "/ws").file("it's here.txt");
        assert_eq!(
            request.arguments(ShellDialect::Posix),
            vec![r"'it'\''s here.txt'".to_string()]
        );
    }

    #[test]
    fn test_options_precede_files_in_caller_order() {
        let request = GitRequest::new("mv", "/ws")
            .option("-f")
            .option("-v")
            .files(["a", "b"]);
        assert_eq!(
            request.command_line("git", ShellDialect::Posix),
            "git mv -f -v 'a' 'b'"
        );
    }

    #[test]
    fn test_period_when_no_files() {
        let request = GitRequest::new("add", "/ws")
            .option("-A")
            .use_period_when_empty_files(true);
        let args = request.arguments(ShellDialect::Posix);
        assert_eq!(args.last().map(String::as_str), Some("."));
        assert_eq!(request.command_line("git", ShellDialect::Posix), "git add -A .");
    }

    #[test]
    fn test_no_period_when_flag_unset() {
        let request = GitRequest::new("status", "/ws").options(["--short"]);
        assert_eq!(request.arguments(ShellDialect::Posix), vec!["--short".to_string()]);
        assert_eq!(
            request.command_line("git", ShellDialect::Posix),
            "git status --short"
        );
    }

    #[test]
    fn test_period_ignored_when_files_given() {
        let request = GitRequest::new("add", "/ws")
            .file("a.txt")
            .use_period_when_empty_files(true);
        assert_eq!(request.arguments(ShellDialect::Posix), vec!["'a.txt'".to_string()]);
    }

    #[test]
    fn test_custom_program() {
        let request = GitRequest::new("status", "/ws");
        assert_eq!(
            request.command_line("/usr/local/bin/git", ShellDialect::Posix),
            "/usr/local/bin/git status"
        );
    }
}
