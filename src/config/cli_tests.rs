//! Tests for CLI argument parsing.

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn no_args_leaves_everything_unset() {
        let cli = Cli::parse_from_iter(["http-usecase"]);

        assert!(cli.command.is_none());
        assert!(cli.url.is_none());
        assert!(cli.base_url.is_none());
        assert!(cli.method.is_none());
        assert!(cli.headers.is_empty());
        assert!(cli.body.is_none());
        assert!(cli.user_agent.is_none());
        assert!(!cli.no_proxy);
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_request_options() {
        let cli = Cli::parse_from_iter([
            "http-usecase",
            "--url",
            "users/42",
            "--base-url",
            "https://api.example.com/v1/",
            "--method",
            "PUT",
            "--body",
            "name=ada",
        ]);

        assert_eq!(cli.url.as_deref(), Some("users/42"));
        assert_eq!(cli.base_url.as_deref(), Some("https://api.example.com/v1/"));
        assert_eq!(cli.method.as_deref(), Some("PUT"));
        assert_eq!(cli.body.as_deref(), Some("name=ada"));
    }

    #[test]
    fn header_is_repeatable_and_kept_in_order() {
        let cli = Cli::parse_from_iter([
            "http-usecase",
            "--header",
            "X-Api-Key=secret",
            "--header",
            "Accept: text/plain",
        ]);

        assert_eq!(cli.headers, vec!["X-Api-Key=secret", "Accept: text/plain"]);
    }

    #[test]
    fn parse_client_options() {
        let cli = Cli::parse_from_iter([
            "http-usecase",
            "--user-agent",
            "probe/2",
            "--no-proxy",
        ]);

        assert_eq!(cli.user_agent.as_deref(), Some("probe/2"));
        assert!(cli.no_proxy);
    }

    #[test]
    fn short_flags() {
        let cli = Cli::parse_from_iter(["http-usecase", "-v", "-c", "custom.toml"]);

        assert!(cli.verbose);
        assert_eq!(cli.config.unwrap().to_str(), Some("custom.toml"));
    }

    #[test]
    fn dry_run_flag() {
        let cli = Cli::parse_from_iter(["http-usecase", "--dry-run"]);
        assert!(cli.dry_run);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let result = <Cli as clap::Parser>::try_parse_from(["http-usecase", "--retries", "3"]);
        assert!(result.is_err());
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["http-usecase", "init"]);

        assert!(cli.is_init());
        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output.to_str(), Some("http-usecase.toml"));
            }
            None => panic!("expected init command"),
        }
    }

    #[test]
    fn init_accepts_custom_output() {
        let cli = Cli::parse_from_iter(["http-usecase", "init", "-o", "other.toml"]);

        match cli.command {
            Some(Command::Init { output }) => assert_eq!(output.to_str(), Some("other.toml")),
            None => panic!("expected init command"),
        }
    }

    #[test]
    fn plain_run_is_not_init() {
        let cli = Cli::parse_from_iter(["http-usecase", "--url", "https://example.com"]);
        assert!(!cli.is_init());
    }
}
