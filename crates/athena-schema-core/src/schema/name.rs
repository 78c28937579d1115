/// Initialisms kept together as a single name part.
///
/// Matching is case sensitive and the longest entry wins, so `HTTPS` beats
/// `HTTP`. Entries are 2 to 5 characters long.
static INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "ETA", "GPU", "GUID", "HTML", "HTTP",
    "HTTPS", "ID", "IP", "JSON", "LHS", "OS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL",
    "SSH", "TCP", "TLS", "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML",
    "XMPP", "XSRF", "XSS", "OAuth",
];

const MAX_INITIALISM_LEN: usize = 5;

/// An identifier split into lowercase parts
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    /// Splits `src` at uppercase letters, keeping known initialisms whole.
    ///
    /// `UserID` becomes `user`, `id`; `HTTPHeader` becomes `http`, `header`;
    /// identifiers without uppercase letters are kept as a single part.
    pub fn new(src: &str) -> Self {
        let mut parts = vec![];
        let mut start = 0;
        let mut chars = src.char_indices().skip(1);

        while let Some((i, ch)) = chars.next() {
            if !ch.is_uppercase() {
                continue;
            }

            if let Some(initialism) = initialism_prefix(&src[start..]) {
                parts.push(initialism.to_lowercase());
                start += initialism.len();

                // The initialism covers everything up to `start`, and the
                // character at `start` opens the next part.
                for (j, _) in chars.by_ref() {
                    if j >= start {
                        break;
                    }
                }
                continue;
            }

            parts.push(src[start..i].to_lowercase());
            start = i;
        }

        if start < src.len() {
            parts.push(src[start..].to_lowercase());
        }

        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }
}

/// Returns the longest initialism `src` starts with.
fn initialism_prefix(src: &str) -> Option<&str> {
    (2..=MAX_INITIALISM_LEN)
        .rev()
        .filter_map(|len| src.get(..len))
        .find(|prefix| INITIALISMS.contains(prefix))
}
