use {
    crate::common::{debug_eprintln, DEBUG},
    anyhow::Context,
    clap::Parser,
    primality::sqrt::isqrt,
    std::{io, sync::atomic::Ordering},
};

/// Report whether an integer is prime
#[derive(Debug, Parser)]
pub struct Cli {
    /// Number to check [leave unspecified to be prompted on stdin]
    #[arg(allow_negative_numbers = true)]
    number: Option<i64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    debug_eprintln!("{cli:?}");

    let mut stdout = io::stdout().lock();
    let verdict = match cli.number {
        Some(n) => session::check(n, &mut stdout),
        None => session::run(&mut io::stdin().lock(), &mut stdout),
    }
    .context("failed to check number")?;

    debug_eprintln!(
        "trial division bound for {}: {}",
        verdict.n,
        isqrt(verdict.n.max(0).unsigned_abs())
    );
    debug_eprintln!("{verdict:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, clap::CommandFactory};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_number() {
        let cli = Cli::try_parse_from(["prime_check", "-7"]).unwrap();
        assert_eq!(cli.number, Some(-7));
        assert!(!cli.debug);
    }

    #[test]
    fn number_is_optional() {
        let cli = Cli::try_parse_from(["prime_check", "--debug"]).unwrap();
        assert_eq!(cli.number, None);
        assert!(cli.debug);
    }

    #[test]
    fn rejects_non_integer() {
        assert!(Cli::try_parse_from(["prime_check", "abc"]).is_err());
    }
}
