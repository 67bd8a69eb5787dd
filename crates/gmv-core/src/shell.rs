//! Shell quoting for command-line arguments
//!
//! Git commands are assembled into a single command line and handed to the
//! platform shell, so every path argument has to be quoted for the dialect
//! that will parse it. The dialect is decided once from the compile target;
//! call sites never branch on the platform themselves.

/// The quoting rules of the shell that will parse an assembled command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellDialect {
    /// `sh -c`: single-quoted words, embedded `'` written as `'\''`.
    Posix,
    /// `cmd /C`: double-quoted words, embedded `"` written as `\"`.
    Windows,
}

impl ShellDialect {
    /// The dialect of the shell this process runs commands through.
    pub const fn current() -> Self {
        if cfg!(windows) {
            ShellDialect::Windows
        } else {
            ShellDialect::Posix
        }
    }

    /// Program used to interpret a command line in this dialect.
    pub fn shell_program(&self) -> &'static str {
        match self {
            ShellDialect::Posix => "sh",
            ShellDialect::Windows => "cmd",
        }
    }

    /// Flag telling [`Self::shell_program`] to run the next argument.
    pub fn shell_flag(&self) -> &'static str {
        match self {
            ShellDialect::Posix => "-c",
            ShellDialect::Windows => "/C",
        }
    }

    /// Quote a single argument so the shell yields it back unchanged.
    pub fn quote(&self, argument: &str) -> String {
        match self {
            ShellDialect::Posix => quote_posix(argument),
            ShellDialect::Windows => quote_windows(argument),
        }
    }
}

impl Default for ShellDialect {
    fn default() -> Self {
        Self::current()
    }
}

fn quote_posix(argument: &str) -> String {
    format!("'{}'", argument.replace('\'', r"'\''"))
}

// Backslashes are literal unless they precede a `"`, including the closing
// quote we append, so those runs are doubled before the quote is escaped.
fn quote_windows(argument: &str) -> String {
    let mut quoted = String::with_capacity(argument.len() + 2);
    quoted.push('"');

    let mut backslashes = 0usize;
    for c in argument.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                quoted.extend(std::iter::repeat('\\').take(backslashes * 2 + 1));
                quoted.push('"');
                backslashes = 0;
            }
            _ => {
                quoted.extend(std::iter::repeat('\\').take(backslashes));
                quoted.push(c);
                backslashes = 0;
            }
        }
    }
    quoted.extend(std::iter::repeat('\\').take(backslashes * 2));

    quoted.push('"');
    quoted
}
