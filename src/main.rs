mod allegiance;
mod cipher;
mod loader;
mod registry;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use allegiance::get_allies;
use registry::{Kingdom, RegistryError, RULING_KINGDOM};

/// Minimum number of allied kingdoms needed to win the ballot.
const ALLY_QUORUM: usize = 3;

#[derive(Parser)]
#[command(
    name = "ally_finder",
    about = "Southern Kingdom secret-message decoder"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a message file and decide the ballot
    Solve {
        /// Path to the message file; "-" reads stdin
        infile: PathBuf,
        /// Emit a JSON ballot report instead of the one-line verdict
        #[arg(long)]
        json: bool,
    },
    /// Decrypt a single message with a kingdom's cipher
    Decrypt {
        /// Kingdom whose cipher to use
        kingdom: String,
        /// Ciphertext words
        message: Vec<String>,
    },
    /// Print the kingdom → emblem registry
    Emblems,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve { infile, json }) => run_solve(&infile, json),
        Some(Command::Decrypt { kingdom, message }) => run_decrypt(&kingdom, &message.join(" ")),
        Some(Command::Emblems) => run_emblems(),
        // Default: solve from stdin
        None => run_solve(Path::new("-"), false),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  SOLVE MODE: load records, aggregate allies, print the verdict
// ═══════════════════════════════════════════════════════════════════════

fn run_solve(infile: &Path, json: bool) {
    let input = read_input(infile);
    let records = loader::load_records(&input);
    eprintln!("Read {} message record(s)", records.len());

    let allies = get_allies(&records).unwrap_or_else(|e| exit_unknown_kingdom(e));

    if json {
        #[derive(serde::Serialize)]
        struct BallotReport<'a> {
            record_count: usize,
            ally_count: usize,
            allies: &'a [String],
            verdict: String,
        }

        let report = BallotReport {
            record_count: records.len(),
            ally_count: allies.len(),
            allies: &allies,
            verdict: verdict_line(&allies),
        };
        let json = serde_json::to_string_pretty(&report).expect("JSON serialization");
        println!("{json}");
    } else {
        println!("{}", verdict_line(&allies));
    }
}

/// Format the final ballot line: the ruling kingdom followed by its
/// allies, space-joined and upper-cased, when the quorum is met;
/// the "NONE" sentinel otherwise.
fn verdict_line(allies: &[String]) -> String {
    if allies.len() < ALLY_QUORUM {
        return "NONE".to_string();
    }

    let mut parts = vec![RULING_KINGDOM.to_string()];
    parts.extend(allies.iter().cloned());
    parts.join(" ").to_uppercase()
}

fn read_input(infile: &Path) -> String {
    if infile == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .unwrap_or_else(|e| {
                eprintln!("Cannot read stdin: {e}");
                std::process::exit(1);
            });
        return input;
    }

    std::fs::read_to_string(infile).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {e}", infile.display());
        std::process::exit(1);
    })
}

fn exit_unknown_kingdom(err: RegistryError) -> ! {
    eprintln!("{err}");
    let known: Vec<&str> = Kingdom::ALL.iter().map(|k| k.name()).collect();
    eprintln!("  known kingdoms: {}", known.join(", "));
    std::process::exit(1);
}

// ═══════════════════════════════════════════════════════════════════════
//  DECRYPT MODE: decode one message on the command line
// ═══════════════════════════════════════════════════════════════════════

fn run_decrypt(kingdom: &str, message: &str) {
    match cipher::decrypt(message, kingdom) {
        Ok(plaintext) => println!("{plaintext}"),
        Err(e) => exit_unknown_kingdom(e),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  EMBLEMS MODE: print the registry inventory
// ═══════════════════════════════════════════════════════════════════════

fn run_emblems() {
    for kingdom in Kingdom::ALL {
        println!(
            "{} -> {} (shift {})",
            kingdom.name(),
            kingdom.emblem(),
            kingdom.shift()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // ── verdict formatting ───────────────────────────────────────────

    #[test]
    fn test_verdict_line_quorum_met() {
        let allies = names(&["air", "land", "ice"]);
        assert_eq!(verdict_line(&allies), "SPACE AIR LAND ICE");
    }

    #[test]
    fn test_verdict_line_upper_cases_input_names() {
        let allies = names(&["Air", "Land", "Ice"]);
        assert_eq!(verdict_line(&allies), "SPACE AIR LAND ICE");
    }

    #[test]
    fn test_verdict_line_below_quorum() {
        assert_eq!(verdict_line(&names(&["air", "land"])), "NONE");
        assert_eq!(verdict_line(&[]), "NONE");
    }

    // ── end to end ───────────────────────────────────────────────────

    #[test]
    fn test_solve_winning_ballot() {
        let input = "air rozo\nland faijwjsoofamau\nice sthststvsasos\n";
        let records = loader::load_records(input);
        let allies = get_allies(&records).unwrap();
        assert_eq!(verdict_line(&allies), "SPACE AIR LAND ICE");
    }

    #[test]
    fn test_solve_losing_ballot() {
        let input =
            "air owlaowlbowlc\nland ofbbmufdiccso\nice vtbtbhtbbbobas\nwater summer is coming\n";
        let records = loader::load_records(input);
        let allies = get_allies(&records).unwrap();
        assert_eq!(verdict_line(&allies), "NONE");
    }
}
