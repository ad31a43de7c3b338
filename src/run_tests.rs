//! Tests for the runner.

use super::*;
use http::{HeaderMap, StatusCode};
use http_usecase::config::Cli;
use http_usecase::transport::TransportKind;

fn config(args: &[&str]) -> ValidatedConfig {
    let mut full_args = vec!["http-usecase"];
    full_args.extend(args);
    ValidatedConfig::from_raw(&Cli::parse_from_iter(full_args), None).unwrap()
}

/// URL of a loopback port with nothing listening.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

mod build_options {
    use super::*;

    #[test]
    fn plain_config_selects_default_transport() {
        let options = build_options(&config(&["--url", "https://example.com"])).unwrap();

        assert!(!options.has_client());
        assert_eq!(HttpFactory::transport_kind(&options), TransportKind::Default);
    }

    #[test]
    fn user_agent_selects_adapter_transport() {
        let options = build_options(&config(&[
            "--url",
            "https://example.com",
            "--user-agent",
            "runner/1",
        ]))
        .unwrap();

        assert_eq!(HttpFactory::transport_kind(&options), TransportKind::Adapter);
    }

    #[test]
    fn no_proxy_selects_adapter_transport() {
        let options =
            build_options(&config(&["--url", "https://example.com", "--no-proxy"])).unwrap();

        assert!(options.has_client());
    }

    #[test]
    fn base_url_and_headers_are_carried_over() {
        let options = build_options(&config(&[
            "--url",
            "a",
            "--base-url",
            "https://api.example.com/",
            "--header",
            "X-Trace=1",
        ]))
        .unwrap();

        assert_eq!(
            options.base_url.as_ref().map(url::Url::as_str),
            Some("https://api.example.com/")
        );
        assert_eq!(options.headers.get("x-trace").unwrap(), "1");
    }
}

mod write_response {
    use super::*;

    fn response(body: &[u8]) -> HttpResponse {
        HttpResponse::new(StatusCode::OK, HeaderMap::new(), body.to_vec())
    }

    #[test]
    fn appends_missing_trailing_newline() {
        let mut out = Vec::new();
        write_response(&mut out, &response(b"hello")).unwrap();
        assert_eq!(out, b"hello\n");
    }

    #[test]
    fn keeps_existing_trailing_newline() {
        let mut out = Vec::new();
        write_response(&mut out, &response(b"hello\n")).unwrap();
        assert_eq!(out, b"hello\n");
    }

    #[test]
    fn empty_body_prints_blank_line() {
        let mut out = Vec::new();
        write_response(&mut out, &response(b"")).unwrap();
        assert_eq!(out, b"\n");
    }
}

mod execute {
    use super::*;

    #[tokio::test]
    async fn dry_run_sends_nothing() {
        let url = closed_port_url();
        let result = execute(config(&["--url", &url, "--no-proxy", "--dry-run"])).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn connection_failure_is_a_request_error() {
        let url = closed_port_url();
        let result = execute(config(&["--url", &url, "--no-proxy"])).await;

        assert!(matches!(
            result,
            Err(RunError::Request(HttpError::Connection(_)))
        ));
    }
}

mod run_error {
    use super::*;

    #[test]
    fn non_success_status_message_names_the_status() {
        let error = RunError::NonSuccessStatus {
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(error.to_string(), "Server responded with 502 Bad Gateway");
    }

    #[test]
    fn request_error_wraps_http_error() {
        let error = RunError::from(HttpError::Timeout);
        assert_eq!(error.to_string(), "Request failed: Request timed out");
    }
}
