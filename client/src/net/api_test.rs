use super::*;

#[test]
fn transactions_path_includes_limit() {
    assert_eq!(transactions_path(25), "/api/transactions?limit=25");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn endpoints_join_configured_base() {
    let config = AppConfig::from_json(r#"{ "api_base": "https://api.example.test/" }"#).unwrap();
    assert_eq!(config.endpoint(ACCOUNTS_PATH), "https://api.example.test/api/accounts");
    assert_eq!(config.endpoint(LOGIN_PATH), "https://api.example.test/api/auth/login");
    assert_eq!(config.endpoint(ADMIN_USERS_PATH), "https://api.example.test/api/admin/users");
}

#[cfg(not(feature = "hydrate"))]
mod server_stubs {
    use super::*;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut future = pin!(future);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = future.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[test]
    fn server_build_returns_client_fault_without_publishing() {
        let config = AppConfig::default();
        let result = block_on(fetch_accounts(&config));
        assert_eq!(result, Err(NetworkFailure::client_fault("not available on server")));
    }

    #[test]
    fn server_build_login_is_unavailable() {
        let creds = Credentials { email: "a@b.test".to_owned(), password: "pw".to_owned() };
        let result = block_on(login(&AppConfig::default(), &creds));
        assert!(matches!(result, Err(NetworkFailure::ClientFault { .. })));
    }
}
