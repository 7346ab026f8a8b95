//! Conversions from OpenAPI path/method spelling to Fiber's.

/// Convert an HTTP verb token to Fiber's method-function name.
///
/// The first character is upper-cased and the rest lower-cased, so `GET`,
/// `get` and `gEt` all become `Get`. An empty token stays empty.
#[must_use]
pub fn normalize_method(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Rewrite OpenAPI path placeholders to Fiber route parameters.
///
/// Every `{` becomes `:` and every `}` is dropped: `/users/{id}/posts/{post_id}`
/// becomes `/users/:id/posts/:post_id`. No other character is touched.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    path.replace('{', ":").replace('}', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_method_standard_verbs() {
        let cases = [
            ("GET", "Get"),
            ("POST", "Post"),
            ("PUT", "Put"),
            ("PATCH", "Patch"),
            ("DELETE", "Delete"),
            ("HEAD", "Head"),
            ("OPTIONS", "Options"),
            ("get", "Get"),
            ("post", "Post"),
            ("options", "Options"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_method(input), expected, "input {input}");
        }
    }

    #[test]
    fn test_normalize_method_mixed_case() {
        assert_eq!(normalize_method("PoSt"), "Post");
        assert_eq!(normalize_method("dELETE"), "Delete");
    }

    #[test]
    fn test_normalize_method_empty_and_single() {
        assert_eq!(normalize_method(""), "");
        assert_eq!(normalize_method("g"), "G");
    }

    #[test]
    fn test_normalize_method_multibyte_does_not_panic() {
        assert_eq!(normalize_method("éTAT"), "État");
    }

    #[test]
    fn test_normalize_path_single_placeholder() {
        assert_eq!(normalize_path("/user/{id}"), "/user/:id");
    }

    #[test]
    fn test_normalize_path_multiple_placeholders() {
        let out = normalize_path("/orgs/{org_id}/repos/{repo-name}/issues/{n}");
        assert_eq!(out, "/orgs/:org_id/repos/:repo-name/issues/:n");
        assert_eq!(out.matches(':').count(), 3);
        assert!(!out.contains('}'));
    }

    #[test]
    fn test_normalize_path_without_placeholders_is_unchanged() {
        assert_eq!(normalize_path("/api/v1/test0"), "/api/v1/test0");
        assert_eq!(normalize_path(""), "");
    }
}
