use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::Infallible;
use std::future::{ready, Ready};
use std::hash::BuildHasher;
use actix_web::{FromRequest, HttpRequest};
use actix_web::dev::Payload;

pub const ADMIN_AUTH_COOKIE: &str = "admin-auth";

/// Read-only view over the cookies that came with a single request.
pub trait CookieSource {
    fn cookie_value(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl CookieSource for HttpRequest {
    fn cookie_value(&self, name: &str) -> Option<Cow<'_, str>> {
        // malformed Cookie headers are dropped by actix-web, so they read as absent here.
        self.cookie(name).map(|cookie| Cow::Owned(cookie.value().to_string()))
    }
}

impl<S: BuildHasher> CookieSource for HashMap<String, String, S> {
    fn cookie_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

/// Returns `true` if and only if the `admin-auth` cookie is present and its value is exactly `true`.
///
/// The comparison is case-sensitive, and the store is never written to.
#[must_use]
pub fn is_authenticated(store: &impl CookieSource) -> bool {
    store
        .cookie_value(ADMIN_AUTH_COOKIE)
        .is_some_and(|value| value == "true")
}

/// Auth flag of the current request, resolved by the framework before the handler runs.
///
/// Extraction never fails; an unauthenticated request simply yields `false`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AdminAuth {
    authenticated: bool,
}

impl AdminAuth {
    pub const fn is_authenticated(self) -> bool {
        self.authenticated
    }
}

impl FromRequest for AdminAuth {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self {
            authenticated: is_authenticated(req),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use actix_web::cookie::Cookie;
    use actix_web::FromRequest;
    use actix_web::http::header::COOKIE;
    use actix_web::test::TestRequest;
    use super::{ADMIN_AUTH_COOKIE, AdminAuth, is_authenticated};

    fn store_with(value: &str) -> HashMap<String, String> {
        let mut store = HashMap::new();
        store.insert(ADMIN_AUTH_COOKIE.to_string(), value.to_string());
        store
    }

    #[test]
    fn absent_cookie_is_rejected() {
        assert!(!is_authenticated(&HashMap::<String, String>::new()));
    }

    #[test]
    fn exact_literal_is_accepted() {
        assert!(is_authenticated(&store_with("true")));
    }

    #[test]
    fn anything_else_is_rejected() {
        for value in ["false", "True", "TRUE", "1", "", " true", "true "] {
            assert!(!is_authenticated(&store_with(value)), "{value:?} must not authenticate");
        }
    }

    #[test]
    fn other_cookie_names_are_ignored() {
        let mut store = HashMap::new();
        store.insert("admin_auth".to_string(), "true".to_string());
        store.insert("auth".to_string(), "true".to_string());
        assert!(!is_authenticated(&store));
    }

    #[test]
    fn repeated_checks_agree() {
        for store in [store_with("true"), store_with("false"), HashMap::new()] {
            assert_eq!(is_authenticated(&store), is_authenticated(&store));
        }
    }

    #[test]
    fn store_is_left_untouched() {
        let store = store_with("true");
        let before = store.clone();
        let _ = is_authenticated(&store);
        assert_eq!(store, before);
    }

    #[test]
    fn reads_cookie_of_http_request() {
        let req = TestRequest::default()
            .cookie(Cookie::new(ADMIN_AUTH_COOKIE, "true"))
            .to_http_request();
        assert!(is_authenticated(&req));
    }

    #[test]
    fn http_request_without_cookie_is_rejected() {
        let req = TestRequest::default().to_http_request();
        assert!(!is_authenticated(&req));
    }

    #[test]
    fn raw_cookie_header_is_compared_verbatim() {
        let req = TestRequest::default()
            .insert_header((COOKIE, "theme=dark; admin-auth=True"))
            .to_http_request();
        assert!(!is_authenticated(&req));

        let req = TestRequest::default()
            .insert_header((COOKIE, "theme=dark; admin-auth=true"))
            .to_http_request();
        assert!(is_authenticated(&req));
    }

    #[actix_web::test]
    async fn extractor_resolves_flag() {
        let req = TestRequest::default()
            .cookie(Cookie::new(ADMIN_AUTH_COOKIE, "true"))
            .to_http_request();
        let auth = AdminAuth::extract(&req).await.unwrap();
        assert!(auth.is_authenticated());

        let req = TestRequest::default()
            .cookie(Cookie::new(ADMIN_AUTH_COOKIE, "1"))
            .to_http_request();
        let auth = AdminAuth::extract(&req).await.unwrap();
        assert!(!auth.is_authenticated());
    }
}
