use chrono::Datelike;
use colored::{ColoredString, Colorize};

use crate::models::{format_duration, format_pace, DailySession, PaceSet, PlanInputs, SessionKind};
use crate::planner::{GeneratedPlan, Locale};

pub fn print_paces(paces: Option<&PaceSet>) {
    println!("{}", "Estimated paces (rough guide only)".bold());
    println!("────────────────────────────────");

    match paces {
        Some(paces) => {
            for (name, seconds) in paces.zones() {
                println!("  {:<15} {}", name, format_pace(seconds).cyan());
            }
        }
        None => println!("  Provide a valid 5K time to estimate paces"),
    }
    println!();
}

fn styled_label(session: &DailySession) -> ColoredString {
    match session.kind {
        SessionKind::Rest => session.label.dimmed(),
        SessionKind::Easy => session.label.green(),
        SessionKind::Quality => session.label.yellow().bold(),
        SessionKind::Long => session.label.cyan().bold(),
    }
}

fn time_or_dash(seconds: Option<u64>) -> String {
    seconds.map(format_duration).unwrap_or_else(|| "-".to_string())
}

pub fn print_plan(inputs: &PlanInputs, plan: &GeneratedPlan, locale: Locale) {
    println!("{}", "Half-Marathon Training Plan".bold());
    println!("────────────────────────────────");
    println!(
        "Start {} · {} weeks · {} run days/week",
        inputs.start_date, inputs.weeks, inputs.run_days_per_week
    );
    println!(
        "5K {} · target {}",
        time_or_dash(inputs.sec_5k),
        time_or_dash(inputs.hm_target)
    );
    println!(
        "Blocks: Base {} · Build {} · Peak {} · Taper {}",
        plan.allocation.base, plan.allocation.build, plan.allocation.peak, plan.allocation.taper
    );
    println!();

    print_paces(plan.paces.as_ref());

    for week in &plan.weeks {
        println!(
            "{} {}  {}",
            format!("Week {}", week.week_index).bold(),
            week.block.key().to_uppercase().on_black().white(),
            week.block.description().dimmed()
        );

        for session in &week.sessions {
            println!(
                "  {} ({})  {:<18} {}",
                session.date,
                locale.weekday_char(session.date.weekday()),
                styled_label(session),
                session.detail
            );
        }
        println!();
    }

    println!(
        "{}",
        "Adjust to how you feel; cut volume or rest when something hurts.".dimmed()
    );
}
