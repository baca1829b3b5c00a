//! Command-line wrapper around the strength evaluator.
//!
//! Reads one positional argument, prints the evaluation report, and exits.
//! Missing-argument handling (usage message, nonzero exit) is clap's.

use clap::Parser;
use pwd_gauge::evaluate;
use secrecy::SecretString;

/// Check password strength.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Password to evaluate (do NOT use real passwords)
    #[arg(allow_hyphen_values = true)]
    password: String,
}

fn main() {
    let args = Args::parse();
    let password = SecretString::new(args.password.into());

    let report = evaluate(&password);

    println!("Password strength: {} ({}/100)", report.tier, report.score);
    println!("Entropy estimate: {:.1} bits", report.entropy_bits);
    if !report.tips.is_empty() {
        println!("Tips:");
        for tip in &report.tips {
            println!("  - {tip}");
        }
    }
    println!("[Security warning] Do NOT use real or sensitive passwords on the command line!");
}
