use std::io::{self, Write};
use std::process::ExitCode;

use catalog_backend::auth::inspect::{inspect_token, InspectMode, TokenReport};
use clap::Parser;
use serde_json::Value;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "token-inspect")]
#[command(about = "Decode a JWT, optionally verify it, and report its claims and expiry")]
struct Args {
    /// The encoded token (header.payload.signature)
    token: String,

    /// Shared secret used to verify the signature
    #[arg(long, env = "JWT_SECRET_KEY", hide_env_values = true)]
    secret: Option<String>,

    /// Skip signature and expiry verification entirely
    #[arg(long)]
    insecure: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// How a run ended; each variant is a distinct exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Report produced and no verification failure (0)
    Clean,
    /// Verification failed, or the token could not be inspected (1)
    Failed,
    /// Neither a secret nor `--insecure` was given (2)
    NoSecret,
}

impl Outcome {
    fn exit_code(self) -> u8 {
        match self {
            Outcome::Clean => 0,
            Outcome::Failed => 1,
            Outcome::NoSecret => 2,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let outcome = run(&args, &mut io::stdout().lock());

    ExitCode::from(outcome.exit_code())
}

/// `--insecure` wins; otherwise a non-empty secret selects verification.
fn select_mode(args: &Args) -> Option<InspectMode<'_>> {
    if args.insecure {
        return Some(InspectMode::Insecure);
    }

    match args.secret.as_deref() {
        Some(secret) if !secret.is_empty() => Some(InspectMode::Verify {
            secret: secret.as_bytes(),
        }),
        _ => None,
    }
}

fn run<W: Write>(args: &Args, out: &mut W) -> Outcome {
    let Some(mode) = select_mode(args) else {
        eprintln!("❌ No secret provided. Pass --secret, set JWT_SECRET_KEY, or use --insecure.");
        return Outcome::NoSecret;
    };

    debug!(insecure = args.insecure, json = args.json, "inspecting token");

    let report = match inspect_token(&args.token, mode) {
        Ok(report) => report,
        Err(e) => {
            debug!(error = %e, "token inspection failed");
            eprintln!("❌ {e}");
            return Outcome::Failed;
        }
    };

    let written = if args.json {
        serde_json::to_string_pretty(&report)
            .map_err(io::Error::from)
            .and_then(|rendered| writeln!(out, "{rendered}"))
    } else {
        write_report(out, &report, args.insecure)
    };

    if let Err(e) = written {
        eprintln!("❌ Failed to write report: {e}");
        return Outcome::Failed;
    }

    if report.is_ok() {
        Outcome::Clean
    } else {
        Outcome::Failed
    }
}

fn write_report<W: Write>(out: &mut W, report: &TokenReport, insecure: bool) -> io::Result<()> {
    writeln!(out, "Algorithm (from header): {}", report.algorithm)?;

    match (&report.failure, report.verified, insecure) {
        (None, true, _) => writeln!(out, "✅ Signature and claims verified")?,
        (None, false, true) => {
            writeln!(out, "⚠️  Decoded without verification (insecure mode)")?
        }
        (Some(failure), _, _) => writeln!(
            out,
            "❌ Verification failed: {failure:?} ({})",
            report.failure_detail.as_deref().unwrap_or("no detail")
        )?,
        (None, false, false) => writeln!(out, "⚠️  Not verified")?,
    }

    write_field(out, "sub", report.subject.as_deref())?;
    write_field(out, "role", report.role.as_deref())?;
    write_field(out, "companyId", report.company_id.as_deref())?;
    let user_id = report.user_id.as_ref().map(Value::to_string);
    write_field(out, "userId", user_id.as_deref())?;
    write_field(out, "business_id", report.business_id.as_deref())?;

    if let Some(issued_at) = &report.issued_at {
        writeln!(out, "Issued (UTC): {issued_at}")?;
    }

    if let Some(expires_at) = &report.expires_at {
        let state = match report.expired {
            Some(true) => "expired",
            _ => "not expired",
        };
        writeln!(out, "Expires (UTC): {expires_at} [{state}]")?;
    }

    if let Some(payload) = &report.payload {
        match serde_json::to_string_pretty(payload) {
            Ok(rendered) => writeln!(out, "Payload:\n{rendered}")?,
            Err(_) => writeln!(out, "Payload: {payload}")?,
        }
    }

    Ok(())
}

fn write_field<W: Write>(out: &mut W, name: &str, value: Option<&str>) -> io::Result<()> {
    writeln!(out, "{name}: {}", value.unwrap_or("-"))
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use catalog_backend::{mint_demo_token, SecurityConfig};
    use serial_test::serial;

    use super::*;

    const SECRET: &str = "cli-test-secret";

    fn demo_token(secret: &str, now: SystemTime) -> String {
        let (token, _) = mint_demo_token(now, &SecurityConfig::new(secret.as_bytes())).unwrap();
        token
    }

    fn args(token: &str, secret: Option<&str>, insecure: bool, json: bool) -> Args {
        Args {
            token: token.to_string(),
            secret: secret.map(str::to_string),
            insecure,
            json,
        }
    }

    fn run_captured(args: &Args) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run(args, &mut out);
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_eq!(Outcome::Clean.exit_code(), 0);
        assert_eq!(Outcome::Failed.exit_code(), 1);
        assert_eq!(Outcome::NoSecret.exit_code(), 2);
    }

    #[test]
    fn test_verified_token_is_clean() {
        let token = demo_token(SECRET, SystemTime::now());

        let (outcome, output) = run_captured(&args(&token, Some(SECRET), false, false));

        assert_eq!(outcome, Outcome::Clean);
        assert!(output.contains("Algorithm (from header): HS256"));
        assert!(output.contains("Signature and claims verified"));
        assert!(output.contains("role: admin"));
    }

    #[test]
    fn test_wrong_secret_fails() {
        let token = demo_token("some-other-secret", SystemTime::now());

        let (outcome, output) = run_captured(&args(&token, Some(SECRET), false, false));

        assert_eq!(outcome, Outcome::Failed);
        assert!(output.contains("Verification failed: InvalidSignature"));
    }

    #[test]
    fn test_expired_token_fails_but_insecure_is_clean() {
        let three_hours_ago = SystemTime::now() - Duration::from_secs(3 * 60 * 60);
        let token = demo_token(SECRET, three_hours_ago);

        let (verified, output) = run_captured(&args(&token, Some(SECRET), false, false));
        assert_eq!(verified, Outcome::Failed);
        assert!(output.contains("[expired]"));

        let (insecure, output) = run_captured(&args(&token, None, true, false));
        assert_eq!(insecure, Outcome::Clean);
        assert!(output.contains("insecure mode"));
    }

    #[test]
    fn test_missing_secret_is_a_usage_error() {
        let token = demo_token(SECRET, SystemTime::now());

        assert_eq!(run_captured(&args(&token, None, false, false)).0, Outcome::NoSecret);
        assert_eq!(run_captured(&args(&token, Some(""), false, false)).0, Outcome::NoSecret);
    }

    #[test]
    fn test_uninspectable_token_fails() {
        let (outcome, output) = run_captured(&args("not-a-token", Some(SECRET), false, false));

        assert_eq!(outcome, Outcome::Failed);
        assert!(output.is_empty());
    }

    #[test]
    fn test_json_output_is_the_report() {
        let token = demo_token(SECRET, SystemTime::now());

        let (outcome, output) = run_captured(&args(&token, Some(SECRET), false, true));
        let report: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(outcome, Outcome::Clean);
        assert_eq!(report["algorithm"], "HS256");
        assert_eq!(report["verified"], true);
        assert_eq!(report["failure"], Value::Null);
        assert_eq!(report["payload"]["business_id"], "demo123");
    }

    #[test]
    #[serial]
    fn test_secret_falls_back_to_environment() {
        std::env::set_var("JWT_SECRET_KEY", "from-env");
        let parsed = Args::try_parse_from(["token-inspect", "abc.def.ghi"]).unwrap();
        std::env::remove_var("JWT_SECRET_KEY");

        assert_eq!(parsed.secret.as_deref(), Some("from-env"));
        assert!(matches!(
            select_mode(&parsed),
            Some(InspectMode::Verify { secret }) if secret == b"from-env"
        ));
    }

    #[test]
    #[serial]
    fn test_secret_flag_overrides_environment() {
        std::env::set_var("JWT_SECRET_KEY", "from-env");
        let parsed =
            Args::try_parse_from(["token-inspect", "abc.def.ghi", "--secret", "from-flag"])
                .unwrap();
        std::env::remove_var("JWT_SECRET_KEY");

        assert_eq!(parsed.secret.as_deref(), Some("from-flag"));
    }

    #[test]
    #[serial]
    fn test_flags_parse_without_secret() {
        std::env::remove_var("JWT_SECRET_KEY");
        let parsed =
            Args::try_parse_from(["token-inspect", "abc.def.ghi", "--insecure", "--json"]).unwrap();

        assert_eq!(parsed.secret, None);
        assert!(parsed.insecure);
        assert!(parsed.json);
        assert!(matches!(select_mode(&parsed), Some(InspectMode::Insecure)));
    }

    #[test]
    fn test_token_argument_is_required() {
        assert!(Args::try_parse_from(["token-inspect"]).is_err());
    }
}
