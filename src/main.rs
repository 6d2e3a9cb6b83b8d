use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use mitigation_scout::core::config::load_scout_config;
use mitigation_scout::scraping::{SkillsApiClient, WikiPageClient};
use mitigation_scout::tools::{self, RunContext};
use mitigation_scout::AppState;

const USAGE: &str = "mitigation-scout [--out <file.csv>] [--skill <name>]... [--version|--help]";

#[derive(Debug, Default)]
struct CliArgs {
    out: Option<PathBuf>,
    skills: Vec<String>,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> anyhow::Result<CliArgs> {
    let mut cli = CliArgs::default();
    while let Some(a) = args.next() {
        if a == "--out" || a == "-o" {
            let v = args
                .next()
                .ok_or_else(|| anyhow::anyhow!("Missing value for {}", a))?;
            cli.out = Some(PathBuf::from(v));
        } else if let Some(rest) = a.strip_prefix("--out=") {
            cli.out = Some(PathBuf::from(rest));
        } else if a == "--skill" {
            let v = args
                .next()
                .ok_or_else(|| anyhow::anyhow!("Missing value for --skill"))?;
            cli.skills.push(v);
        } else if let Some(rest) = a.strip_prefix("--skill=") {
            cli.skills.push(rest.to_string());
        } else {
            anyhow::bail!("Unknown arg: {}. Usage: {}", a, USAGE);
        }
    }
    Ok(cli)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        info!("version={}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        info!("usage: {}", USAGE);
        return Ok(());
    }
    let cli = parse_args(args.into_iter())?;

    let config = load_scout_config();
    let out_path = cli.out.unwrap_or_else(|| config.resolve_output_path());
    let skills = if cli.skills.is_empty() {
        config.resolve_skills()
    } else {
        cli.skills
    };
    let request_delay = Duration::from_millis(config.resolve_request_delay_ms());

    let state = Arc::new(AppState::from_config(config)?);
    info!("Starting run: {:?}", state);

    let catalog = SkillsApiClient::new(&state);
    let pages = WikiPageClient::new(&state);
    let ctx = RunContext {
        catalog: &catalog,
        pages: &pages,
        aliases: &state.aliases,
        pipeline: &state.pipeline,
        request_delay,
    };

    let report = tools::run(&ctx, &skills).await?;
    tools::export_csv(&out_path, &report.rows)?;
    tools::run::report_unresolved(&report.unresolved);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> impl Iterator<Item = String> {
        v.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_out_and_repeated_skills() {
        let cli = parse_args(args(&["--out", "x.csv", "--skill", "Endure Pain", "--skill=\"Guard!\""]))
            .unwrap();
        assert_eq!(cli.out, Some(PathBuf::from("x.csv")));
        assert_eq!(cli.skills, vec!["Endure Pain".to_string(), "\"Guard!\"".to_string()]);
    }

    #[test]
    fn rejects_unknown_and_dangling_flags() {
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["--skill"])).is_err());
    }
}
