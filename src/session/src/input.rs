use {crate::Error, std::io::BufRead};

/// Reads the first whitespace-delimited token and parses it as an `i64`.
///
/// Blank lines before the token are skipped. The rest of the token's line is
/// consumed and ignored, and need not be valid UTF-8; later lines are left
/// unread.
pub fn read_integer(stdin: &mut impl BufRead) -> Result<i64, Error> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if stdin.read_until(b'\n', &mut line).map_err(Error::Read)? == 0 {
            return Err(Error::MissingInput);
        }
        let mut tokens = line
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty());
        if let Some(token) = tokens.next() {
            // a token that is not UTF-8 becomes lossy text, which never parses
            let token = String::from_utf8_lossy(token);
            return token.parse().map_err(|source| Error::InvalidInteger {
                token: token.into_owned(),
                source,
            });
        }
    }
}
