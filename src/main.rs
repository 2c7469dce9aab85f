//! QRBar — menu-bar QR code generator core.
//!
//! Entry point: runs an interactive console demo of the core components.
//! The menu-bar presentation layer (status item, popover, hotkeys) binds
//! against the same library API.

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                  QRBar v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║       Text-to-QR generator with searchable history         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_preferences();
    demo_qr_encoder();
    demo_history_store();
    demo_clipboard();
    demo_app_lifecycle();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All core components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

/// Returns a unique throwaway preferences path under the system temp dir.
fn demo_prefs_path(name: &str) -> String {
    env::temp_dir()
        .join(format!("qrbar-demo-{}-{}.json", name, process::id()))
        .to_string_lossy()
        .to_string()
}

fn demo_preferences() {
    use qrbar::services::preferences::{Preferences, PreferencesTrait};
    section("Preferences");

    let mut prefs = Preferences::new(Some(demo_prefs_path("prefs")));
    prefs.load().expect("Failed to load preferences");
    prefs
        .set("demo", serde_json::json!({ "launched": true }))
        .expect("Failed to write preferences");
    println!("  Preferences file: {}", prefs.path());
    println!("  ✓ Key-value slot written and read back");
    println!();
}

fn demo_qr_encoder() {
    use qrbar::services::qr_encoder::{QrEncoder, QrEncoderTrait};
    section("QR Encoder");

    let encoder = QrEncoder::new();
    let image = encoder
        .encode("https://example.com")
        .expect("Failed to encode QR code");
    println!(
        "  Encoded 'https://example.com' as {}x{} bitmap ({} px per module)",
        image.width(),
        image.height(),
        encoder.scale()
    );

    let png = encoder
        .encode_png("https://example.com")
        .expect("Failed to encode PNG");
    println!("  PNG export: {} bytes", png.len());
    println!("  ✓ Encoder OK");
    println!();
}

fn demo_history_store() {
    use qrbar::managers::history_store::{HistoryStore, HistoryStoreTrait};
    use qrbar::services::preferences::Preferences;
    section("History Store");

    let prefs = Preferences::new(Some(demo_prefs_path("history")));
    let mut store = HistoryStore::new(prefs);
    store.load().expect("Failed to load history");

    // Reject empty input the way the input view does
    for input in ["https://example.com", "wifi password", ""] {
        if !input.is_empty() {
            store.add(input);
        }
    }
    println!("  Added {} items (newest first):", store.len());
    for item in store.items() {
        println!("    [{}] {}", item.timestamp, item.content);
    }

    let hits = store.search("WIFI");
    println!("  Search 'WIFI' → {} hit(s)", hits.len());

    let doomed = store.items()[0].id;
    store.delete(&doomed);
    println!("  Deleted newest item → {} remaining", store.len());
    println!("  ✓ History store OK");
    println!();
}

fn demo_clipboard() {
    use qrbar::services::clipboard_service::{ClipboardService, ClipboardServiceTrait};
    use qrbar::services::qr_encoder::{QrEncoder, QrEncoderTrait};
    section("Clipboard");

    match ClipboardService::new() {
        Ok(mut clipboard) => {
            clipboard
                .write_text("https://example.com")
                .expect("Failed to write clipboard text");
            let text = clipboard
                .read_text()
                .expect("Failed to read clipboard text");
            println!("  Round-tripped clipboard text: {}", text);

            let image = QrEncoder::new()
                .encode(&text)
                .expect("Failed to encode QR code");
            clipboard
                .write_image(&image)
                .expect("Failed to write clipboard image");
            println!("  Copied {}x{} QR bitmap", image.width(), image.height());
            println!("  ✓ Clipboard OK");
        }
        Err(e) => {
            println!("  Skipped — {}", e);
        }
    }
    println!();
}

fn demo_app_lifecycle() {
    use qrbar::app::App;
    use qrbar::managers::history_store::HistoryStoreTrait;
    section("App Core");

    let path = demo_prefs_path("app");

    let mut app = App::new(Some(path.clone()));
    app.startup();
    app.store.add("persisted across restarts");
    app.shutdown();

    // A fresh App over the same path sees the persisted history
    let mut app2 = App::new(Some(path));
    app2.startup();
    println!("  Items visible after restart: {}", app2.store.len());
    println!("  ✓ Lifecycle (construct → load → mutate → persist) OK");
    println!();
}
