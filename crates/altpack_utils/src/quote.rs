/// Quote characters a bundler may emit around a module specifier in rendered code.
pub const SPECIFIER_QUOTES: [char; 2] = ['"', '\''];

/// Returns `specifier` wrapped in every quote style of [`SPECIFIER_QUOTES`].
pub fn quoted_variants(specifier: &str) -> impl Iterator<Item = String> + '_ {
  SPECIFIER_QUOTES.into_iter().map(move |quote| format!("{quote}{specifier}{quote}"))
}

#[test]
fn test() {
  assert_eq!(quoted_variants("alt").collect::<Vec<_>>(), vec!["\"alt\"", "'alt'"]);
}
