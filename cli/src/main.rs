//! `httpclient [GET/POST] [URL]`
//!
//! One argument is a URL fetched with GET. Two arguments are a method and a
//! URL. The response prints as `"<code>\r\n<body>"`; failed requests print
//! the sentinel `500`. With no arguments the usage is printed and the process
//! exits with status 1. There are no flags: `-x` or `--help` is taken as a
//! URL like any other argument.

use clap::{CommandFactory, Parser};
use httpclient_core::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "httpclient")]
#[command(about = "Send a raw HTTP/1.1 GET or POST and print the status code and body")]
#[command(override_usage = "httpclient [GET/POST] [URL]")]
#[command(disable_version_flag = true, disable_help_flag = true)]
struct Cli {
    /// URL to fetch, or the method when a URL follows
    #[arg(allow_hyphen_values = true)]
    first: Option<String>,

    /// URL, when the first argument is the method
    #[arg(allow_hyphen_values = true)]
    second: Option<String>,

    #[arg(hide = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

impl Cli {
    /// Resolve the positional arguments into `(command, url)`.
    ///
    /// Exactly two arguments mean method then URL. Any other non-zero count
    /// uses the first argument as a GET URL.
    fn invocation(&self) -> Option<(&str, &str)> {
        match (self.first.as_deref(), self.second.as_deref()) {
            (None, _) => None,
            (Some(command), Some(url)) if self.rest.is_empty() => Some((command, url)),
            (Some(url), _) => Some(("GET", url)),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the response.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "off".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let Some((command, url)) = cli.invocation() else {
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    tracing::debug!(command, url, "sending request");
    let response = Client::new().command(url, command, &[]);
    println!("{response}");
    Ok(())
}
