//! Adding patterns: plan, show, confirm, append.

use std::path::Path;

use colored::Colorize;
use dialoguer::Confirm;

use stignore_core::{AppendPlan, IgnorePath, LinePrompt, Patterns};

use crate::cli::Cli;
use crate::error::Result;

/// Run the add command from `cwd`
///
/// Prints the folder root on success. With `--dry-run` or a declined
/// `--preview` nothing is appended.
pub fn run_add(cwd: &Path, cli: &Cli) -> Result<()> {
    let patterns = Patterns::from_args(&cli.patterns)?;
    let options = cli.append_options();

    // The stdin lock must be released before dialoguer reads the terminal.
    let plan = {
        let mut prompt = LinePrompt::stdio();
        stignore_core::prepare(cwd, &patterns, &options, &mut prompt)?
    };

    if !cli.silent || cli.dry_run {
        print_plan(&plan);
    }

    if cli.dry_run {
        println!("{} Dry run, nothing was appended.", "=>".blue().bold());
        return Ok(());
    }

    if cli.preview {
        let proceed = Confirm::new()
            .with_prompt("Proceed?")
            .default(true)
            .interact()?;
        if !proceed {
            println!("Aborting.");
            return Ok(());
        }
    }

    plan.apply()?;

    println!(
        "Patterns added to syncthing folder \"{}\"",
        plan.root().display()
    );
    Ok(())
}

fn print_plan(plan: &AppendPlan) {
    for step in plan.steps() {
        println!(
            "{} Appending to {}:",
            "=>".blue().bold(),
            step.path.display().to_string().cyan()
        );
        for line in &step.lines {
            println!("   {}", line);
        }
    }
    if plan.establishes_link() {
        println!(
            "{} {} will be included from {}",
            "+".green().bold(),
            IgnorePath::StignoreSync,
            IgnorePath::Stignore
        );
    }
}
