/// One input line split into a keyword and its single argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub keyword: &'a str,
    pub argument: Option<&'a str>,
}

/// Splits on whitespace. Tokens after the first argument are dropped;
/// there is no quoting or escaping.
pub fn parse_command_line(line: &str) -> Option<CommandLine<'_>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?;
    Some(CommandLine {
        keyword,
        argument: tokens.next(),
    })
}
