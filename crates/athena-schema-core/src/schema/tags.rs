use indexmap::IndexMap;

/// Field tags: an ordered `key -> value` mapping
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tags {
    entries: IndexMap<String, String>,
}

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a conventional struct tag string:
    ///
    /// ```text
    /// json:"created_at,omitempty" athena:"timestamp"
    /// ```
    ///
    /// Pairs are separated by spaces, values are double quoted and may use
    /// backslash escapes. Parsing stops at the first malformed pair: pairs
    /// before it are kept, everything after it is treated as absent. When a
    /// key is repeated the first occurrence wins.
    pub fn parse(raw: &str) -> Self {
        let mut tags = Tags::new();
        let mut rest = raw;

        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                break;
            }

            let Some((key, value, tail)) = parse_pair(rest) else {
                log::warn!("malformed tag `{raw}`; ignoring `{rest}`");
                break;
            };

            if !tags.contains_key(key) {
                tags.insert(key, value);
            }
            rest = tail;
        }

        tags
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Tags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tags = Tags::new();
        for (key, value) in iter {
            tags.insert(key, value);
        }
        tags
    }
}

/// Parses one `key:"value"` pair at the start of `src`, returning the key, the
/// unescaped value and the remaining input.
fn parse_pair(src: &str) -> Option<(&str, String, &str)> {
    let key_len = src
        .find(|ch: char| ch <= ' ' || ch == ':' || ch == '"' || ch == '\x7f')
        .unwrap_or(src.len());

    if key_len == 0 {
        return None;
    }

    let (key, rest) = src.split_at(key_len);
    let rest = rest.strip_prefix(":\"")?;

    let mut value = String::new();
    let mut chars = rest.char_indices();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '"' => return Some((key, value, &rest[i + 1..])),
            '\\' => value.push(unescape(&mut chars)?),
            other => value.push(other),
        }
    }

    // Unterminated value
    None
}

/// Decodes one escape sequence following a backslash. Unknown escapes, and
/// numeric escapes that are not a valid character, make the tag malformed.
fn unescape(chars: &mut impl Iterator<Item = (usize, char)>) -> Option<char> {
    let (_, escaped) = chars.next()?;

    let (radix, len) = match escaped {
        'a' => return Some('\x07'),
        'b' => return Some('\x08'),
        'f' => return Some('\x0c'),
        'n' => return Some('\n'),
        'r' => return Some('\r'),
        't' => return Some('\t'),
        'v' => return Some('\x0b'),
        '\\' | '"' | '\'' => return Some(escaped),
        'x' => (16, 2),
        'u' => (16, 4),
        'U' => (16, 8),
        '0'..='7' => (8, 3),
        _ => return None,
    };

    let mut digits = String::with_capacity(len);
    if radix == 8 {
        digits.push(escaped);
    }
    while digits.len() < len {
        let (_, ch) = chars.next()?;
        digits.push(ch);
    }

    if !digits.chars().all(|ch| ch.is_digit(radix)) {
        return None;
    }
    let code = u32::from_str_radix(&digits, radix).ok()?;

    // Byte escapes only decode to ASCII so the value stays valid text
    if matches!(escaped, 'x' | '0'..='7') && code > 0x7f {
        return None;
    }

    char::from_u32(code)
}
