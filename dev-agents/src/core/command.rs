//! Shell command construction.
//!
//! Commands are plain shell text. A configured runner template routes every
//! command through an intermediary (container, make target, ...) by textual
//! substitution of the `{cmd}` placeholder.

/// Placeholder replaced by the raw command inside a runner template.
pub const CMD_PLACEHOLDER: &str = "{cmd}";

/// Wrap `raw` in the runner template, if one is configured.
///
/// Every occurrence of `{cmd}` is substituted. No escaping happens here: `raw`
/// is already shell text.
///
/// ```text
/// runner = make bash cmd="{cmd}"
/// raw    = vendor/bin/phpstan analyse
/// result = make bash cmd="vendor/bin/phpstan analyse"
/// ```
pub fn build_command(raw: &str, runner: Option<&str>) -> String {
    match runner {
        Some(template) => template.replace(CMD_PLACEHOLDER, raw),
        None => raw.to_string(),
    }
}

/// Quote `arg` so a POSIX shell reads it back as one literal argument.
///
/// The value is wrapped in single quotes and each embedded `'` becomes `'\''`
/// (close quote, escaped quote, reopen quote). The result is always quoted,
/// even for the empty string.
pub fn quote_for_shell(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('\'');
    quoted.push_str(&arg.replace('\'', "'\\''"));
    quoted.push('\'');
    quoted
}

/// Append `arg` to `program` as a single quoted argument.
pub fn with_quoted_arg(program: &str, arg: &str) -> String {
    format!("{program} {}", quote_for_shell(arg))
}
