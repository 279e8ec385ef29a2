//! Tweak store demo: declarations, bindings, persistence, and export.
//!
//! Run with: cargo run -p tweaks-store --example store_demo
//!
//! Run twice to see edits survive between launches (the backing file lives
//! under the platform config directory as `tweaks/demo.toml`).

use tweaks_core::{Color, Tweak};
use tweaks_store::TweakStore;

fn main() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    // --- Declarations ---
    // In a real app these live in one static declarations module.
    let columns: Tweak<u32> = Tweak::new("Layout", "Grid", "Columns", 3)
        .with_min(1)
        .with_max(12)
        .with_step(1);
    let row_height: Tweak<f64> = Tweak::new("Layout", "List", "Row Height", 44.0)
        .with_min(20.0)
        .with_max(120.0)
        .with_step(0.5);
    let tint: Tweak<Color> = Tweak::new("Theme", "Colors", "Tint", Color::rgb(0, 122, 255));
    let animations: Tweak<bool> = Tweak::new("Theme", "Motion", "Animations", true);
    let greeting: Tweak<String> = Tweak::new("Text", "Header", "Greeting", "Hello".to_string())
        .with_options(["Hello", "Howdy", "Hiya"]);

    let mut store = TweakStore::builder("demo")
        .enabled(true)
        .tweaks([
            columns.any(),
            row_height.any(),
            tint.any(),
            animations.any(),
            greeting.any(),
        ])
        .build();

    println!("=== Store ===\n");
    println!("Name: {}", store.name());
    println!("Backing file: {}", store.file_path().display());

    // --- Enumeration (what an editing screen renders) ---
    println!("\n=== Hierarchy ===\n");
    for collection in store.tree().collections() {
        println!("{}", collection.name());
        for group in collection.groups() {
            println!("  {}", group.name());
            for tweak in group.tweaks() {
                println!("    {} ({})", tweak.id().name, tweak.kind());
            }
        }
    }

    // --- Bindings ---
    println!("\n=== Bindings ===\n");
    let height_binding = store.bind(&row_height, |h| println!("  row height -> {h}"));
    let layout_binding = store.bind_multiple(&[columns.any(), row_height.any()], || {
        println!("  (layout invalidated)")
    });

    // --- Writes fire bindings synchronously and persist in the background ---
    println!("\n=== Edits ===\n");
    store.set_value(52.0, &row_height);
    store.set_value(8, &columns);
    store.set_value(Color::rgba(255, 69, 0, 200), &tint);
    store.set_value("Howdy".to_string(), &greeting);

    // Out-of-range writes are stored raw and clipped on read.
    store.set_value(999, &columns);
    println!("  columns after writing 999: {}", store.current_value(&columns));

    store.unbind(height_binding);
    store.unbind_multiple(layout_binding);

    // --- Export listing ---
    println!("\n=== Export ===\n");
    print!("{}", store.export());

    // Make sure the edits hit disk before the process exits.
    store.flush();
    println!("\nDemo complete. Run again to load the persisted edits.");
}
