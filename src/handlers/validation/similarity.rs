/// Levenshtein edit distance between `a` and `b`, counted in `char`s.
///
/// The minimum number of single-character insertions, deletions or
/// substitutions that turn `a` into `b`.
///
/// # Examples
/// ```
/// use email_validator::handlers::validation::similarity::distance;
///
/// assert_eq!(distance("gnail.com", "gmail.com"), 1);
/// assert_eq!(distance("", "com"), 3);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::distance;

    #[test]
    fn test_identical_strings() {
        for s in ["", "a", "gmail.com", "yahoo.co.uk"] {
            assert_eq!(distance(s, s), 0, "distance({s:?}, {s:?})");
        }
    }

    #[test]
    fn test_empty_side_is_length_of_other() {
        assert_eq!(distance("", "com"), 3);
        assert_eq!(distance("hotmail.com", ""), 11);
        assert_eq!(distance("", "ñé"), 2);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(distance("gnail.com", "gmail.com"), 1); // substitution
        assert_eq!(distance("co", "com"), 1); // insertion
        assert_eq!(distance("gmaill.com", "gmail.com"), 1); // deletion
    }

    #[test]
    fn test_classic_pairs() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("yaho.cm", "yahoo.com"), 2);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [("hotmial.com", "hotmail.com"), ("net", "org"), ("", "xyz")];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(distance("é", "e"), 1);
    }
}
