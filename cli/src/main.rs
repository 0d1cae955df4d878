mod http;
mod store;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use pieces::{CapturedCollection, CapturedPieces, PieceError};
use session::{
    GateError, GateOutcome, LANDING_ROUTE, MountToken, Navigator, RetryPolicy, SessionGate, StorageError,
    clear_credential, save_credential,
};

use crate::http::HttpVerifier;
use crate::store::FileStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("login failed: {0}")]
    LoginFailed(String),
    #[error("credential storage: {0}")]
    Storage(#[from] StorageError),
    #[error("session invalid: {0}")]
    Session(#[from] GateError),
    #[error("session check abandoned")]
    Abandoned,
    #[error("{0}")]
    Piece(#[from] PieceError),
}

#[derive(Parser, Debug)]
#[command(name = "indichess", about = "IndiChess session and display CLI")]
struct Cli {
    #[arg(long, env = "INDICHESS_AUTH_URL", default_value = "http://localhost:8080")]
    auth_url: String,

    #[arg(long, env = "INDICHESS_STORE", default_value = ".indichess/session.json")]
    store: PathBuf,

    #[arg(long, env = "INDICHESS_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[arg(long, default_value_t = 1, help = "Verification attempts for transport failures")]
    attempts: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    auth_url: String,
    store: FileStore,
    timeout: Duration,
    retry: RetryPolicy,
}

#[derive(Subcommand, Debug)]
enum Command {
    Session(SessionCommand),
    /// Print the captured-pieces rows.
    Captured(CapturedArgs),
}

#[derive(Args, Debug)]
struct SessionCommand {
    #[command(subcommand)]
    command: SessionSubcommand,
}

#[derive(Subcommand, Debug)]
enum SessionSubcommand {
    /// Verify the stored token; exits non-zero when signed out.
    Check,
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "INDICHESS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
}

#[derive(Args, Debug)]
struct CapturedArgs {
    /// White's pieces taken by Black, e.g. `PN`.
    #[arg(long, default_value = "")]
    white: String,

    /// Black's pieces taken by White, e.g. `pq`.
    #[arg(long, default_value = "")]
    black: String,

    /// Further captures in game order, routed to their owner by case.
    #[arg(default_value = "")]
    taken: String,
}

/// Terminal stand-in for the router: tells the user they are signed out.
struct LandingNotice;

impl Navigator for LandingNotice {
    fn navigate(&self, route: &str) {
        tracing::info!(%route, "redirecting to landing route");
        if route == LANDING_ROUTE {
            eprintln!("signed out; run `indichess session login` to sign in again");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let ctx = CliContext {
        auth_url: cli.auth_url,
        store: FileStore::new(cli.store),
        timeout: Duration::from_secs(cli.timeout_secs),
        retry: RetryPolicy::attempts(cli.attempts),
    };

    match cli.command {
        Command::Session(session) => run_session(&ctx, session).await,
        Command::Captured(args) => {
            for line in captured_lines(&args)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

async fn run_session(ctx: &CliContext, session: SessionCommand) -> Result<(), CliError> {
    match session.command {
        SessionSubcommand::Check => run_check(ctx).await,
        SessionSubcommand::Login { username, password } => {
            let client = http::build_client(ctx.timeout)?;
            let credential = http::login(&client, &ctx.auth_url, &username, &password).await?;
            save_credential(&ctx.store, &credential)?;
            println!("signed in as {username}");
            Ok(())
        }
        SessionSubcommand::Logout => {
            clear_credential(&ctx.store);
            println!("signed out");
            Ok(())
        }
    }
}

async fn run_check(ctx: &CliContext) -> Result<(), CliError> {
    let client = http::build_client(ctx.timeout)?;
    let gate = SessionGate::new(&ctx.store, HttpVerifier::new(client, &ctx.auth_url), LandingNotice)
        .with_retry(ctx.retry);

    let outcome = gate
        .check(&MountToken::new(), |state| tracing::debug!(?state, "session state"))
        .await;
    match outcome {
        GateOutcome::Admitted => {
            println!("session valid");
            Ok(())
        }
        GateOutcome::Denied(e) => Err(e.into()),
        GateOutcome::Abandoned => Err(CliError::Abandoned),
    }
}

fn captured_lines(args: &CapturedArgs) -> Result<Vec<String>, CliError> {
    let mut captured = CapturedPieces {
        captured_white: args.white.parse()?,
        captured_black: args.black.parse()?,
    };
    for piece in args.taken.parse::<CapturedCollection>()?.iter() {
        captured.record(piece);
    }
    Ok(captured.rows().iter().map(pieces::CapturedRow::to_text).collect())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
