//! GSD Forge - synthetic suspicious-domain generation and corpus blending
//!
//! CLI for blending generated suspicious domains into real domain lists,
//! collecting seed corpora from certificate-transparency logs, and halving
//! lists by line parity.

use gsd_forge::{
    corpus,
    ct::CtFetcher,
    gsd::{into_domains, Lexicon, MergeEngine, MergeReport},
    types::{BlendConfig, FetchConfig, Profile},
    GsdForgeError, Result,
};
use std::env;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = gsd_forge::init() {
        eprintln!("✗ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        print_help();
        return;
    }

    let result = match args[0].as_str() {
        "blend" => match parse_blend(&args[1..]) {
            Ok(config) => run_blend(config),
            Err(e) => Err(e),
        },
        "ct-fetch" => match parse_ct_fetch(&args[1..]) {
            Ok(config) => run_ct_fetch(config).await,
            Err(e) => Err(e),
        },
        "filter" => match parse_filter(&args[1..]) {
            Ok((input, output)) => run_filter(&input, &output),
            Err(e) => Err(e),
        },
        other => Err(GsdForgeError::cli(format!("unknown command '{}'", other))),
    };

    if let Err(e) = result {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Parse `blend` arguments: positional input plus optional flags
fn parse_blend(args: &[String]) -> Result<BlendConfig> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut num_gsd: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut profile = Profile::Newly;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                output = Some(PathBuf::from(expect_value(&mut iter, arg)?));
            }
            "-n" | "--num-gsd" => {
                let value = expect_value(&mut iter, arg)?;
                num_gsd = Some(value.parse().map_err(|_| {
                    GsdForgeError::cli(format!("invalid count '{}' for {}", value, arg))
                })?);
            }
            "--seed" => {
                let value = expect_value(&mut iter, arg)?;
                seed = Some(value.parse().map_err(|_| {
                    GsdForgeError::cli(format!("invalid seed '{}'", value))
                })?);
            }
            "--profile" => {
                let value = expect_value(&mut iter, arg)?;
                profile = match value.as_str() {
                    "newly" => Profile::Newly,
                    "phishing" => Profile::Phishing,
                    other => {
                        return Err(GsdForgeError::cli(format!(
                            "unknown profile '{}' (expected 'newly' or 'phishing')",
                            other
                        )))
                    }
                };
            }
            flag if flag.starts_with('-') => {
                return Err(GsdForgeError::cli(format!("unknown flag '{}'", flag)));
            }
            positional => {
                if input.is_some() {
                    return Err(GsdForgeError::cli(format!(
                        "unexpected argument '{}'",
                        positional
                    )));
                }
                input = Some(PathBuf::from(positional));
            }
        }
    }

    let input = input.ok_or_else(|| GsdForgeError::cli("missing input file"))?;

    Ok(BlendConfig {
        input,
        output: output.unwrap_or_else(|| PathBuf::from(profile.default_output())),
        num_gsd: num_gsd.unwrap_or_else(|| profile.default_num_gsd()),
        profile,
        seed,
    })
}

/// Parse `ct-fetch` arguments
fn parse_ct_fetch(args: &[String]) -> Result<FetchConfig> {
    let mut config = FetchConfig::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                config.output = PathBuf::from(expect_value(&mut iter, arg)?);
            }
            other => {
                return Err(GsdForgeError::cli(format!("unexpected argument '{}'", other)));
            }
        }
    }

    Ok(config)
}

/// Parse `filter` arguments: positional input plus optional output flag
fn parse_filter(args: &[String]) -> Result<(PathBuf, PathBuf)> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                output = Some(PathBuf::from(expect_value(&mut iter, arg)?));
            }
            flag if flag.starts_with('-') => {
                return Err(GsdForgeError::cli(format!("unknown flag '{}'", flag)));
            }
            positional => {
                if input.is_some() {
                    return Err(GsdForgeError::cli(format!(
                        "unexpected argument '{}'",
                        positional
                    )));
                }
                input = Some(PathBuf::from(positional));
            }
        }
    }

    let input = input.ok_or_else(|| GsdForgeError::cli("missing input file"))?;
    Ok((input, output.unwrap_or_else(|| PathBuf::from("filtered.txt"))))
}

fn expect_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<&'a String> {
    iter.next()
        .ok_or_else(|| GsdForgeError::cli(format!("missing value for {}", flag)))
}

/// The core pipeline: load, generate, merge, persist, report
fn run_blend(config: BlendConfig) -> Result<()> {
    println!("🔥 GSD Forge - suspicious domain blending");
    println!("═════════════════════════════════════════");
    println!();

    let original = corpus::load(&config.input)?;
    if original.is_empty() {
        return Err(GsdForgeError::empty_corpus(
            config.input.to_string_lossy().to_string(),
        ));
    }
    println!(
        "✓ Read {} domains from {}",
        original.len(),
        config.input.display()
    );

    if let Some(min) = config.profile.expected_min() {
        if original.len() < min {
            println!(
                "⚠ Warning: Expected {} domains but found {}",
                min,
                original.len()
            );
            println!("  Continuing anyway...");
        }
    }

    let original_count = original.len();
    println!("✓ Generating {} GSD domains...", config.num_gsd);

    let mut engine = match config.seed {
        Some(seed) => MergeEngine::with_seed(Lexicon::builtin(), seed),
        None => MergeEngine::new(Lexicon::builtin()),
    };
    let merged = engine.merge(original, config.num_gsd);
    println!("✓ Shuffled {} total domains", merged.len());

    let report = MergeReport::from_merged(original_count, &merged);

    let domains = into_domains(merged);
    corpus::save(&domains, &config.output)?;
    println!("✓ Saved {} domains to {}", domains.len(), config.output.display());

    println!();
    print!("{}", report);

    println!();
    println!("🎉 Successfully created enhanced domain list!");
    println!(
        "   Input: {} domains from {}",
        original_count,
        config.input.display()
    );
    println!("   Added: {} GSD domains", config.num_gsd);
    println!(
        "   Output: {} domains in {}",
        domains.len(),
        config.output.display()
    );

    Ok(())
}

/// Collect CT domains from popular sites and write a sorted list
async fn run_ct_fetch(config: FetchConfig) -> Result<()> {
    println!("🔍 Collecting CT domains from popular sites...");
    println!();

    let output = config.output.clone();
    let fetcher = CtFetcher::with_config(config);
    let collected = fetcher.collect().await;

    println!("✓ Finished: {} domains collected", collected.len());

    let domains: Vec<String> = collected.into_iter().collect();
    corpus::save(&domains, &output)?;
    println!("✓ Saved to {}", output.display());

    Ok(())
}

/// Keep even-numbered lines of a list
fn run_filter(input: &Path, output: &Path) -> Result<()> {
    let stats = corpus::keep_even_lines(input, output)?;

    println!("Processed {} lines", stats.total);
    println!("Kept {} even-numbered lines", stats.kept);
    println!("Output saved to: {}", output.display());

    Ok(())
}

/// Print help information
fn print_help() {
    println!("🔥 GSD Forge - suspicious domain generation and blending");
    println!("════════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    gsd-forge <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    blend <INPUT>       Blend generated GSD domains into a domain list");
    println!("    ct-fetch            Collect domains from certificate-transparency logs");
    println!("    filter <INPUT>      Keep even-numbered lines of a list");
    println!();
    println!("BLEND OPTIONS:");
    println!("    -o, --output FILE   Output file (default depends on profile)");
    println!("    -n, --num-gsd N     Number of GSD domains to insert");
    println!("    --profile NAME      'newly' (522 GSDs, new_domains_with_gsd.txt)");
    println!("                        or 'phishing' (4500 GSDs, phishing_domains_with_gsd.txt)");
    println!("    --seed N            Seed the RNG for reproducible output");
    println!();
    println!("EXAMPLES:");
    println!("    gsd-forge blend domains.txt");
    println!("    gsd-forge blend phishtank.txt --profile phishing -n 4500");
    println!("    gsd-forge ct-fetch -o domains.txt");
    println!("    gsd-forge filter tobefiltered.txt -o output.txt");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
