use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Command;

use super::inputs::{RUN_DAYS_RANGE, WEEKS_RANGE};
use super::AppContext;
use crate::config::{Config, PlanDefaults};
use crate::models::{estimate_paces, format_duration, format_pace, parse_duration};

/// Problems in the configured plan defaults; commands still run, with fallbacks.
fn check_defaults(defaults: &PlanDefaults) -> Vec<String> {
    let mut problems = Vec::new();

    let times = [
        ("five_k", &defaults.five_k),
        ("half_marathon_target", &defaults.half_marathon_target),
    ];
    for (field, text) in times {
        if !text.trim().is_empty() && parse_duration(text).is_none() {
            problems.push(format!("{} = \"{}\" is not a time, it will be ignored", field, text));
        }
    }

    let counts = [
        ("weeks", defaults.weeks, WEEKS_RANGE),
        ("run_days_per_week", defaults.run_days_per_week, RUN_DAYS_RANGE),
    ];
    for (field, value, (min, max)) in counts {
        if !(min..=max).contains(&value) {
            problems.push(format!(
                "{} = {} is outside {}-{}, it will be clamped",
                field, value, min, max
            ));
        }
    }

    problems
}

fn print_problems(problems: &[String]) {
    if problems.is_empty() {
        println!("{} Plan defaults look valid", "✓".green());
        return;
    }

    for problem in problems {
        println!("{} {}", "!".yellow().bold(), problem);
    }
}

fn describe_time(text: &str) -> String {
    match parse_duration(text) {
        Some(seconds) => format_duration(seconds),
        None if text.trim().is_empty() => "not set".to_string(),
        None => format!("invalid ({})", text),
    }
}

pub fn show_config(ctx: &AppContext) -> Result<()> {
    let config = &ctx.config;
    let plan = &config.plan;

    println!("{}", "Configuration".bold());
    println!("────────────────────────────────");
    let source = if ctx.config_file.exists() {
        ""
    } else {
        " (not created, using defaults)"
    };
    println!("File:            {}{}", ctx.config_file.display(), source);
    println!();

    println!("{}", "Plan defaults".cyan().bold());
    let easy = parse_duration(&plan.five_k)
        .and_then(|s| estimate_paces(Some(s)))
        .map(|p| format!("  easy {}", format_pace(p.easy)))
        .unwrap_or_default();
    println!("  5K time:       {}{}", describe_time(&plan.five_k), easy);
    println!("  HM target:     {}", describe_time(&plan.half_marathon_target));
    println!("  Weeks:         {}", plan.weeks);
    println!("  Run days/week: {}", plan.run_days_per_week);
    println!();

    println!("{}", "Output".cyan().bold());
    println!("  Locale:        {} (configured {})", ctx.locale, config.ui.locale);
    println!("  Color:         {}", config.ui.color);
    println!("  CSV file:      {}", config.export.file_name);
    println!();

    print_problems(&check_defaults(plan));

    Ok(())
}

pub fn edit_config(config_file: &Path) -> Result<()> {
    if !config_file.exists() {
        Config::default().save_to(config_file)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());
    Command::new(&editor)
        .arg(config_file)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", editor))?;

    // Re-read so a broken edit is reported now rather than on the next plan
    let config = Config::load_from(config_file)?;
    println!("{} Configuration saved", "✓".green());
    print_problems(&check_defaults(&config.plan));

    Ok(())
}

pub fn init_config(config_file: &Path, force: bool) -> Result<()> {
    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config::default();
    config.save_to(config_file)?;

    let plan = &config.plan;
    println!(
        "{} Configuration initialized at: {}",
        "✓".green(),
        config_file.display()
    );
    println!(
        "  {} weeks, {} run days per week, 5K {}, target {}",
        plan.weeks,
        plan.run_days_per_week,
        describe_time(&plan.five_k),
        describe_time(&plan.half_marathon_target)
    );
    println!();
    println!("Change the defaults with: hm-planner config edit");

    Ok(())
}
