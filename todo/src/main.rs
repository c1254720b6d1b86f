//! Scripted demo of the to-do model.
//!
//! Items persist in `CHECKLIST_DATA_FILE` (default `checklist.json`), so
//! running the demo twice shows the list being reloaded. Set
//! `CHECKLIST_RESET=1` to start from an empty list.

use checklist_core::environment::SystemClock;
use checklist_runtime::FileKeyValueStore;
use checklist_todo::{
    Config, EMPTY_VIEW_LABEL, ItemStore, PersistenceAdapter, TimestampIdGenerator,
    TodoEnvironment, TodoModel, VisibilityFilter,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checklist=info,checklist_todo=debug,checklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(data_file = %config.data_file.display(), reset = config.reset, "Starting");

    let item_store = ItemStore::new(FileKeyValueStore::new(config.data_file.clone()));
    if config.reset {
        item_store.clear()?;
    }

    let env = TodoEnvironment::new(
        Arc::new(TimestampIdGenerator::new(SystemClock)),
        Arc::new(item_store),
    );
    let mut model = TodoModel::load(env);

    println!("=== Checklist ===\n");
    println!("Loaded {} items from {}", model.len(), config.data_file.display());
    print_view(&model);

    println!("\n>>> Adding a blank item");
    model.set_pending_input("   ");
    if let Err(error) = model.add_item() {
        println!("Rejected: {error}");
    }

    for text in ["Buy milk", "Write documentation", "Deploy to production"] {
        println!(">>> Adding '{text}'");
        model.set_pending_input(text);
        model.add_item()?;
    }

    let Some(first) = model.visible_items().into_iter().rev().nth(2) else {
        anyhow::bail!("expected the three new items to be visible");
    };
    println!("\n>>> Toggling '{}'", first.content());
    model.toggle_item(first.id())?;

    for filter in VisibilityFilter::ALL {
        model.set_filter(filter);
        println!();
        print_view(&model);
    }

    println!(
        "\nDone: {}/{} (active: {})",
        model.done_count(),
        model.len(),
        model.active_count()
    );
    println!("\n=== Demo Complete ===");
    Ok(())
}

fn print_view(model: &TodoModel) {
    println!("[{}]", model.filter());
    let rows = model.visible_rows();
    if rows.is_empty() {
        println!("  {EMPTY_VIEW_LABEL}");
    }
    for row in rows {
        let status = if row.item.is_done() { "✓" } else { " " };
        println!("  [{status}] {}. {}", row.position, row.item.content());
    }
}
