use anyhow::Result;
use clap::Args;

use super::inputs::{update_duration, PlanArgs};
use super::render::{print_paces, print_plan};
use super::AppContext;
use crate::models::{estimate_paces, parse_duration, PlanInputs};
use crate::planner::PlanGenerator;

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    plan: PlanArgs,

    /// Print the plan as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl GenerateCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let inputs = self.plan.resolve(&ctx.config.plan, ctx.today());
        show_plan(ctx, &inputs, self.json)
    }
}

/// Generate and print a plan for already-resolved inputs
pub fn show_plan(ctx: &AppContext, inputs: &PlanInputs, json: bool) -> Result<()> {
    let plan = PlanGenerator::new(ctx.locale).generate(inputs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(inputs, &plan, ctx.locale);
    }

    Ok(())
}

#[derive(Args)]
pub struct PacesCommand {
    /// Current 5K time (mm:ss)
    #[arg(long = "five-k", value_name = "TIME")]
    five_k: Option<String>,
}

impl PacesCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let configured = parse_duration(&ctx.config.plan.five_k);
        let sec_5k = update_duration(configured, self.five_k.as_deref(), "5K time");

        print_paces(estimate_paces(sec_5k).as_ref());
        Ok(())
    }
}
