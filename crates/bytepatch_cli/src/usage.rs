//! Usage and help text.

use std::ffi::OsStr;
use std::path::Path;

const DEFAULT_PROGRAM: &str = "bytepatch";

const EXTENDED_HELP: &str = "  read, write, memset: <offset> and <length> may be hexadecimal prefixed with
    `0x' or `\\x', an octal number prefixed with `0' or decimal

  read: <length> set to 0 or `all' will print all bytes

  write, memset: <offset> set to `append' will write data directly after the
    end of the file

  write: <data> must be hexadecimal without prefixes (whitespaces are ignored)

  memset: <char> can be a literal character, escaped control character,
    hexadecimal value prefixed with `0x' or `\\x' or a decimal number
    prefixed with `\\'

  options: --verbose logs to stderr (RUST_LOG is honoured), --sync flushes
    written data to disk before reporting success
";

/// Returns the name the program was invoked as, without directories.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(OsStr::to_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PROGRAM)
        .to_string()
}

/// Renders the short usage summary.
pub fn usage(prog: &str) -> String {
    format!(
        "usage:\n  \
         {prog} --help\n  \
         {prog} r[ead] [<offset> <length>] <file>\n  \
         {prog} w[rite] <offset> <data> <file>\n  \
         {prog} m[emset] <offset> <length> <char> <file>\n"
    )
}

/// Renders the usage summary followed by the argument grammar.
pub fn help(prog: &str) -> String {
    format!("{}\n\n{EXTENDED_HELP}", usage(prog))
}
