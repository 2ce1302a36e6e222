//! Django `ALLOWED_HOSTS` rewriting
//!
//! The settings file is treated as plain text. Only the literal empty
//! assignment `ALLOWED_HOSTS = []` is recognised and replaced.

/// Assignment left in freshly generated Django settings
pub const EMPTY_ASSIGNMENT: &str = "ALLOWED_HOSTS = []";

/// Hosts every deployment accepts
pub const BASE_HOSTS: [&str; 3] = ["127.0.0.1", "localhost", "0.0.0.0"];

/// Result of filling the host list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filled {
    pub text: String,
    /// Number of empty assignments that were replaced
    pub occurrences: usize,
}

/// Base hosts followed by the extra hosts
///
/// Extra entries are trimmed. Blank entries and repeats are dropped, and the
/// first occurrence keeps its place.
pub fn allowed_hosts<I, S>(extra: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hosts: Vec<String> = BASE_HOSTS.iter().map(|host| host.to_string()).collect();
    for host in extra {
        let host = host.as_ref().trim();
        if !host.is_empty() && !hosts.iter().any(|known| known == host) {
            hosts.push(host.to_string());
        }
    }
    hosts
}

/// Python assignment binding `ALLOWED_HOSTS` to `hosts`
pub fn assignment(hosts: &[String]) -> String {
    let items: Vec<String> = hosts.iter().map(|host| quote(host)).collect();
    format!("ALLOWED_HOSTS = [{}]", items.join(", "))
}

/// Replace every empty `ALLOWED_HOSTS` assignment in `settings`
///
/// Returns `None` when the settings contain no empty assignment, which is
/// the case once a file has already been filled.
pub fn fill_allowed_hosts(settings: &str, hosts: &[String]) -> Option<Filled> {
    let occurrences = settings.matches(EMPTY_ASSIGNMENT).count();
    if occurrences == 0 {
        return None;
    }

    Some(Filled {
        text: settings.replace(EMPTY_ASSIGNMENT, &assignment(hosts)),
        occurrences,
    })
}

/// Single-quoted Python string literal
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_hosts_come_first() {
        assert_eq!(
            allowed_hosts(["example.com", "api.example.com"]),
            vec![
                "127.0.0.1",
                "localhost",
                "0.0.0.0",
                "example.com",
                "api.example.com"
            ]
        );
    }

    #[test]
    fn test_blank_and_repeated_hosts_are_dropped() {
        assert_eq!(
            allowed_hosts([" example.com ", "", "localhost", "example.com", "  "]),
            vec!["127.0.0.1", "localhost", "0.0.0.0", "example.com"]
        );
        assert_eq!(allowed_hosts(Vec::<String>::new()), BASE_HOSTS.to_vec());
    }

    #[test]
    fn test_assignment_literal() {
        let hosts = allowed_hosts(["example.com"]);
        assert_eq!(
            assignment(&hosts),
            "ALLOWED_HOSTS = ['127.0.0.1', 'localhost', '0.0.0.0', 'example.com']"
        );
    }

    #[test]
    fn test_quotes_are_escaped() {
        assert_eq!(quote("it's"), r"'it\'s'");
        assert_eq!(quote(r"a\b"), r"'a\\b'");
    }

    #[test]
    fn test_fill_replaces_empty_assignment() {
        let settings = "DEBUG = False\n\nALLOWED_HOSTS = []\n\nINSTALLED_APPS = []\n";
        let filled = fill_allowed_hosts(settings, &allowed_hosts(["blog.example.org"])).unwrap();

        assert_eq!(filled.occurrences, 1);
        assert_eq!(
            filled.text,
            "DEBUG = False\n\nALLOWED_HOSTS = ['127.0.0.1', 'localhost', '0.0.0.0', 'blog.example.org']\n\nINSTALLED_APPS = []\n"
        );
    }

    #[test]
    fn test_fill_without_marker() {
        let settings = "ALLOWED_HOSTS = ['127.0.0.1']\n";
        assert_eq!(fill_allowed_hosts(settings, &allowed_hosts(["x"])), None);
    }

    #[test]
    fn test_fill_is_not_repeatable() {
        let hosts = allowed_hosts(["a.example"]);
        let filled = fill_allowed_hosts("ALLOWED_HOSTS = []", &hosts).unwrap();
        assert_eq!(fill_allowed_hosts(&filled.text, &hosts), None);
    }
}
