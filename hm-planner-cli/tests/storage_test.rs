use anyhow::Result;
use chrono::NaiveDate;
use hm_planner_cli::models::PlanInputs;
use hm_planner_cli::planner::{Locale, PlanGenerator};
use hm_planner_cli::storage::{KeyValueStore, PlanRepository, SledStore, INDEX_KEY};
use serial_test::serial;
use std::env;
use tempfile::TempDir;

/// Helper to create a temporary sled store through the env override
fn setup_test_store() -> Result<(SledStore, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test_plans.db");

    env::set_var("HM_PLANNER_DB_PATH", &db_path);

    let store = SledStore::init()?;
    Ok((store, temp_dir))
}

fn inputs(weeks: u32) -> PlanInputs {
    PlanInputs {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        weeks,
        run_days_per_week: 4,
        sec_5k: Some(1320),
        hm_target: Some(6000),
    }
}

#[test]
#[serial]
fn test_db_path_env_override() -> Result<()> {
    let (_store, dir) = setup_test_store()?;
    assert_eq!(SledStore::db_path()?, dir.path().join("test_plans.db"));
    Ok(())
}

#[test]
#[serial]
fn test_snapshot_overwrite() -> Result<()> {
    let (store, _dir) = setup_test_store()?;
    let repo = PlanRepository::new(store);
    let generator = PlanGenerator::new(Locale::En);

    let first = generator.generate(&inputs(12))?;
    repo.save(Some("race"), &inputs(12), &first.weeks)?;

    let second = generator.generate(&inputs(16))?;
    repo.save(Some("race"), &inputs(16), &second.weeks)?;

    let loaded = repo.load("race")?.expect("snapshot should exist");
    assert_eq!(loaded.inputs.weeks, 16);
    assert_eq!(loaded.plan.len(), 16);
    assert_eq!(repo.list_keys()?, vec!["race".to_string()]);

    Ok(())
}

#[test]
#[serial]
fn test_snapshot_payload_layout() -> Result<()> {
    let (store, _dir) = setup_test_store()?;
    let repo = PlanRepository::new(store);
    let plan = PlanGenerator::new(Locale::ZhTw).generate(&inputs(12))?;

    repo.save(Some("layout"), &inputs(12), &plan.weeks)?;

    let raw = repo.store().get("layout")?.expect("payload stored");
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    for key in ["startDate", "weeks", "runDaysPerWeek", "sec5k", "hmTarget", "plan"] {
        assert!(value.get(key).is_some(), "missing {}", key);
    }

    let index = repo.store().get(INDEX_KEY)?.expect("index stored");
    assert_eq!(index, "[\"layout\"]");

    Ok(())
}

#[test]
#[serial]
fn test_snapshots_survive_reopen() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("reopen.db");

    {
        let repo = PlanRepository::new(SledStore::open(&path)?);
        repo.save(Some("a"), &inputs(10), &[])?;
        repo.save(Some("b"), &inputs(14), &[])?;
    }

    let repo = PlanRepository::new(SledStore::open(&path)?);
    assert_eq!(repo.list_keys()?, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(repo.load("b")?.map(|r| r.inputs.weeks), Some(14));

    Ok(())
}
