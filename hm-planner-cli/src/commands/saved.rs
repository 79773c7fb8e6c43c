use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use super::inputs::PlanArgs;
use super::plan::show_plan;
use super::AppContext;
use crate::planner::PlanGenerator;
use crate::storage::{PlanRepository, SledStore};

fn open_repository() -> Result<PlanRepository<SledStore>> {
    let store = SledStore::init().context("Failed to open plan storage")?;
    Ok(PlanRepository::new(store))
}

#[derive(Args)]
pub struct SaveCommand {
    #[command(flatten)]
    plan: PlanArgs,

    /// Snapshot name; generated from the current time when omitted
    #[arg(short, long)]
    key: Option<String>,
}

impl SaveCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let inputs = self.plan.resolve(&ctx.config.plan, ctx.today());
        let plan = PlanGenerator::new(ctx.locale).generate(&inputs)?;

        let repo = open_repository()?;
        let key = repo
            .save(self.key.as_deref(), &inputs, &plan.weeks)
            .context("Failed to save plan")?;

        println!("{} Plan saved as: {}", "✓".green(), key.bold());
        println!();
        println!("Load it again with: hm-planner load {}", key);

        Ok(())
    }
}

#[derive(Args)]
pub struct LoadCommand {
    /// Snapshot name
    key: String,

    #[command(flatten)]
    plan: PlanArgs,

    /// Print the plan as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl LoadCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let repo = open_repository()?;

        let Some(record) = repo.load(&self.key).context("Failed to read plan")? else {
            println!("No saved plan named '{}'", self.key);
            return Ok(());
        };

        // Rebuild from the stored inputs so labels follow the current locale
        let inputs = self.plan.apply(record.inputs);
        show_plan(ctx, &inputs, self.json)
    }
}

pub fn list_plans() -> Result<()> {
    let repo = open_repository()?;
    let keys = repo.list_keys().context("Failed to read plan index")?;

    println!("Saved Plans");
    println!("────────────────────────────────");

    if keys.is_empty() {
        println!("No saved plans yet. Create one with: hm-planner save");
        return Ok(());
    }

    for key in keys {
        println!("  {}", key);
    }

    Ok(())
}
