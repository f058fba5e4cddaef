//! `passguard` -- check passwords against the configured policy.
//!
//! Candidates come from the command-line arguments, or one per line on stdin
//! when no arguments are given. Each produces one output line: `ok`, or the
//! failure code followed by its message.
//!
//! Exit status: `0` all passed, `1` at least one rejected, `2` configuration
//! or I/O error.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use passguard_core::{ConfigError, PasswordValidationPipeline, PolicyConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "passguard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let result = run(
        PolicyConfig::from_env,
        std::env::args_os().skip(1),
        io::stdin().lock(),
        &mut io::stdout().lock(),
    );
    if let Err(err) = &result {
        tracing::error!(error = ?err, "passguard failed");
        // Always visible, whatever the log filter.
        eprintln!("passguard: {err:#}");
    }
    ExitCode::from(exit_status(&result))
}

/// Map the outcome of [`run`] to the process exit status.
fn exit_status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Load the policy, collect candidates from `args` (or `input` when there
/// are none) and write one result line each to `out`.
fn run<A, R, W>(
    load_config: impl FnOnce() -> Result<PolicyConfig, ConfigError>,
    args: A,
    input: R,
    out: &mut W,
) -> anyhow::Result<bool>
where
    A: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
{
    // --- Configuration ---
    let config = load_config().context("loading password policy")?;
    tracing::info!(min_length = config.min_length(), "Loaded password policy");
    let pipeline = PasswordValidationPipeline::from_config(&config);

    let args = utf8_args(args)?;
    let candidates = if args.is_empty() {
        input
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("reading candidates from stdin")?
    } else {
        args
    };

    check_all(&pipeline, &candidates, out).context("writing results")
}

fn utf8_args(args: impl IntoIterator<Item = OsString>) -> anyhow::Result<Vec<String>> {
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow!("argument is not valid UTF-8: {arg:?}"))
        })
        .collect()
}

/// Write one result line per candidate. Returns `true` when every candidate
/// passed.
fn check_all<S: AsRef<str>, W: Write>(
    pipeline: &PasswordValidationPipeline,
    candidates: &[S],
    out: &mut W,
) -> io::Result<bool> {
    let mut all_valid = true;
    for candidate in candidates {
        match pipeline.validate(candidate.as_ref()) {
            Ok(()) => writeln!(out, "ok")?,
            Err(err) => {
                all_valid = false;
                writeln!(out, "{}: {}", err.kind.code(), err.detail)?;
            }
        }
    }
    Ok(all_valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(candidates: &[&str]) -> (bool, String) {
        let pipeline = PasswordValidationPipeline::default();
        let mut buf = Vec::new();
        let all_valid = check_all(&pipeline, candidates, &mut buf).unwrap();
        (all_valid, String::from_utf8(buf).unwrap())
    }

    fn default_config() -> Result<PolicyConfig, ConfigError> {
        Ok(PolicyConfig::default())
    }

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn all_valid_prints_ok() {
        let (all_valid, output) = render(&["Abcdef1!", "zz99!!ZZ"]);
        assert!(all_valid);
        assert_eq!(output, "ok\nok\n");
    }

    #[test]
    fn failures_print_code_and_detail() {
        let (all_valid, output) = render(&["Abcdef1!", "ABC", "ABCDEF12"]);
        assert!(!all_valid);
        assert_eq!(
            output,
            "ok\n\
             MINIMUM_LENGTH: Passwords must have at least 8 characters!\n\
             NO_LOWER_CASE: Passwords must have at least 1 lower case letter!\n"
        );
    }

    #[test]
    fn no_candidates_is_success() {
        let (all_valid, output) = render(&[]);
        assert!(all_valid);
        assert!(output.is_empty());
    }

    // -----------------------------------------------------------------------
    // run / exit status
    // -----------------------------------------------------------------------

    /// Without arguments each stdin line is a candidate; a blank line is an
    /// empty password.
    #[test]
    fn reads_candidates_from_stdin() {
        let mut out = Vec::new();
        let input = "Abcdef1!\n\nabcdefgh\n".as_bytes();
        let result = run(default_config, Vec::new(), input, &mut out);

        assert_eq!(exit_status(&result), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ok\n\
             MINIMUM_LENGTH: Passwords must have at least 8 characters!\n\
             NO_DIGIT: Passwords must have at least 1 digit!\n"
        );
    }

    #[test]
    fn arguments_take_precedence_over_stdin() {
        let mut out = Vec::new();
        let input = "short\n".as_bytes();
        let result = run(default_config, os_args(&["Abcdef1!"]), input, &mut out);

        assert_eq!(exit_status(&result), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "ok\n");
    }

    #[test]
    fn rejected_candidate_exits_one() {
        let mut out = Vec::new();
        let result = run(default_config, os_args(&["ABCDEF12"]), io::empty(), &mut out);
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn invalid_config_exits_two() {
        let mut out = Vec::new();
        let result = run(
            || PolicyConfig::new(0),
            os_args(&["Abcdef1!"]),
            io::empty(),
            &mut out,
        );

        assert_eq!(exit_status(&result), 2);
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.starts_with("loading password policy: "), "{message}");
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_utf8_on_stdin_exits_two() {
        let mut out = Vec::new();
        let input: &[u8] = b"\xff\xfeAbc1!xx\n";
        let result = run(default_config, Vec::new(), input, &mut out);
        assert_eq!(exit_status(&result), 2);
    }

    #[test]
    fn utf8_args_accepts_valid_arguments() {
        let args = utf8_args(os_args(&["Abcdef1!", "é"])).unwrap();
        assert_eq!(args, ["Abcdef1!", "é"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_an_error_not_a_panic() {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(b"\xff\xfeAbc1!xx".to_vec());
        let err = utf8_args(vec![bad.clone()]).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"), "{err}");

        let mut out = Vec::new();
        let result = run(default_config, vec![bad], io::empty(), &mut out);
        assert_eq!(exit_status(&result), 2);
        assert!(out.is_empty());
    }
}
