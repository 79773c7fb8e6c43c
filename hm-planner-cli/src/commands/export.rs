use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::inputs::PlanArgs;
use super::AppContext;
use crate::export::write_csv;
use crate::planner::PlanGenerator;
use crate::storage::{PlanRepository, SledStore};

#[derive(Args)]
pub struct ExportCommand {
    #[command(flatten)]
    plan: PlanArgs,

    /// Export a saved plan instead of the flags/defaults
    #[arg(long, value_name = "KEY")]
    from: Option<String>,

    /// Output file (defaults to half_marathon_plan.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ExportCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let inputs = match &self.from {
            Some(key) => {
                let store = SledStore::init().context("Failed to open plan storage")?;
                let repo = PlanRepository::new(store);
                match repo.load(key).context("Failed to read plan")? {
                    Some(record) => self.plan.apply(record.inputs),
                    None => {
                        println!("No saved plan named '{}', nothing exported", key);
                        return Ok(());
                    }
                }
            }
            None => self.plan.resolve(&ctx.config.plan, ctx.today()),
        };

        let plan = PlanGenerator::new(ctx.locale).generate(&inputs)?;
        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from(&ctx.config.export.file_name));

        let rows = write_csv(&plan.weeks, ctx.locale, &output)?;

        println!(
            "{} Exported {} sessions to {}",
            "✓".green(),
            rows,
            output.display()
        );

        Ok(())
    }
}
