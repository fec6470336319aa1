/// Compiles the pattern once per call site and hands out a `&'static Regex`.
///
/// Patterns are literals checked by tests, so a malformed one is a bug, not a runtime condition.
#[macro_export]
macro_rules! regex {
    ($e: expr) => {{
        use ::once_cell::sync::Lazy;
        use ::regex::Regex;
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new($e).unwrap());
        &*PATTERN
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_regex_is_shared_between_calls() {
        let get = || regex!(r"^\d+$");
        assert!(std::ptr::eq(get(), get()));
        assert!(get().is_match("2001"));
        assert!(!get().is_match("20a1"));
    }
}
