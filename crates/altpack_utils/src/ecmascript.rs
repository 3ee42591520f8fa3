use std::path::Path;

use oxc_syntax::identifier;

pub fn is_validate_identifier_name(name: &str) -> bool {
  identifier::is_identifier_name(name)
}

/// Whether `specifier` can be written between single quotes as-is.
pub fn is_plain_single_quoted_specifier(specifier: &str) -> bool {
  !specifier.is_empty()
    && !specifier.chars().any(|c| matches!(c, '\'' | '\\' | '\n' | '\r' | '\u{2028}' | '\u{2029}'))
}

/// Whether `filename` is an emitted JavaScript module, as opposed to a source map or other asset.
pub fn is_javascript_module_file(filename: &str) -> bool {
  Path::new(filename).extension().is_some_and(|ext| ext == "js" || ext == "mjs")
}

#[test]
fn test_is_validate_identifier_name() {
  assert!(is_validate_identifier_name("alt"));
  assert!(is_validate_identifier_name("$natives_1"));
  assert!(!is_validate_identifier_name("alt-client"));
  assert!(!is_validate_identifier_name("1aaaa"));
  assert!(!is_validate_identifier_name(""));
}

#[test]
fn test_is_plain_single_quoted_specifier() {
  assert!(is_plain_single_quoted_specifier("alt"));
  assert!(is_plain_single_quoted_specifier("@altv/natives"));
  assert!(!is_plain_single_quoted_specifier("it's"));
  assert!(!is_plain_single_quoted_specifier("a\\b"));
  assert!(!is_plain_single_quoted_specifier("a\nb"));
  assert!(!is_plain_single_quoted_specifier(""));
}

#[test]
fn test_is_javascript_module_file() {
  assert!(is_javascript_module_file("client.js"));
  assert!(is_javascript_module_file("chunks/server.mjs"));
  assert!(!is_javascript_module_file("client.js.map"));
  assert!(!is_javascript_module_file("style.css"));
  assert!(!is_javascript_module_file("LICENSE"));
}
