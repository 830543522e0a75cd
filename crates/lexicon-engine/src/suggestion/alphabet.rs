// Letter set tried by substitution and insertion

/// The letters substituted into and inserted into candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// The 26 ASCII lowercase letters `a..=z`.
    pub fn ascii_lowercase() -> Self {
        Self {
            letters: ('a'..='z').collect(),
        }
    }

    /// Build an alphabet from arbitrary letters.
    ///
    /// Duplicates are removed; first occurrence wins so the probe order
    /// follows the input.
    pub fn new(letters: impl IntoIterator<Item = char>) -> Self {
        let mut out: Vec<char> = Vec::new();
        for c in letters {
            if !out.contains(&c) {
                out.push(c);
            }
        }
        Self { letters: out }
    }

    /// The letters in probe order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ascii_lowercase()
    }
}

impl std::str::FromStr for Alphabet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.chars()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ascii_lowercase() {
        let a = Alphabet::default();
        assert_eq!(a.len(), 26);
        assert_eq!(a.letters()[0], 'a');
        assert_eq!(a.letters()[25], 'z');
    }

    #[test]
    fn new_removes_duplicates_keeping_order() {
        let a = Alphabet::new("abca".chars());
        assert_eq!(a.letters(), &['a', 'b', 'c']);
    }

    #[test]
    fn parse_from_str() {
        let a: Alphabet = "äöå".parse().unwrap();
        assert_eq!(a.len(), 3);
        assert!(!a.is_empty());
    }
}
