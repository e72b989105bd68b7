//! Tests for the route guard
//!
//! These tests verify the protection policy as pure functions:
//! - path classification against the allow-list and auth-API prefix
//! - the continue/redirect decision with and without a session cookie
//! - cookie presence parsing, including the empty-value case

#[cfg(test)]
mod tests {
    use super::super::rules::*;

    #[test]
    fn test_public_routes_classified_public() {
        assert_eq!(classify("/"), RouteClass::Public);
        assert_eq!(classify("/login"), RouteClass::Public);
        assert_eq!(classify("/register"), RouteClass::Public);
    }

    #[test]
    fn test_auth_api_prefix_any_depth() {
        assert_eq!(classify("/api/auth"), RouteClass::AuthApi);
        assert_eq!(classify("/api/auth/sign-in/email"), RouteClass::AuthApi);
        assert_eq!(
            classify("/api/auth/callback/google/deep/path"),
            RouteClass::AuthApi
        );
    }

    #[test]
    fn test_everything_else_is_protected() {
        assert_eq!(classify("/tasks"), RouteClass::Protected);
        assert_eq!(classify("/tasks/42/edit"), RouteClass::Protected);
        assert_eq!(classify("/settings"), RouteClass::Protected);
        // Not an exact match for "/", so protected
        assert_eq!(classify("/login/extra"), RouteClass::Protected);
        // Other API namespaces are not the auth namespace
        assert_eq!(classify("/api/tasks"), RouteClass::Protected);
    }

    #[test]
    fn test_public_routes_pass_regardless_of_cookie() {
        for path in ["/", "/login", "/register"] {
            assert_eq!(evaluate(path, true), GuardOutcome::Continue);
            assert_eq!(evaluate(path, false), GuardOutcome::Continue);
        }
    }

    #[test]
    fn test_auth_api_passes_regardless_of_cookie() {
        assert_eq!(evaluate("/api/auth/sign-in/email", true), GuardOutcome::Continue);
        assert_eq!(evaluate("/api/auth/sign-in/email", false), GuardOutcome::Continue);
    }

    #[test]
    fn test_protected_path_with_session_continues() {
        assert_eq!(evaluate("/tasks", true), GuardOutcome::Continue);
    }

    #[test]
    fn test_protected_path_without_session_redirects_with_origin() {
        assert_eq!(
            evaluate("/tasks", false),
            GuardOutcome::Redirect("/login?redirect=%2Ftasks".to_string())
        );
    }

    #[test]
    fn test_redirect_preserves_nested_path() {
        assert_eq!(
            evaluate("/tasks/42/edit", false),
            GuardOutcome::Redirect("/login?redirect=%2Ftasks%2F42%2Fedit".to_string())
        );
    }

    #[test]
    fn test_cookie_presence_basic() {
        assert!(has_session_cookie(Some("session_token=abc123")));
        assert!(!has_session_cookie(Some("other_cookie=abc123")));
        assert!(!has_session_cookie(None));
        assert!(!has_session_cookie(Some("")));
    }

    #[test]
    fn test_cookie_presence_among_multiple_cookies() {
        assert!(has_session_cookie(Some(
            "theme=dark; session_token=abc123; lang=en"
        )));
        assert!(!has_session_cookie(Some("theme=dark; lang=en")));
    }

    #[test]
    fn test_empty_cookie_value_counts_as_present() {
        // Only existence is checked, not content
        assert!(has_session_cookie(Some("session_token=")));
        assert!(has_session_cookie(Some("theme=dark; session_token=")));
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        assert!(!has_session_cookie(Some("session_token_v2=abc")));
        assert!(!has_session_cookie(Some("my_session_token=abc")));
    }

    #[test]
    fn test_asset_paths_bypass_classification() {
        assert!(is_asset_path("/static/app.css"));
        assert!(is_asset_path("/favicon.ico"));
        assert!(is_asset_path("/images/hero.png"));
        assert!(is_asset_path("/logo.svg"));
        assert!(!is_asset_path("/tasks"));
        assert!(!is_asset_path("/"));
    }
}
