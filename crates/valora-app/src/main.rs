//! Terminal entry point — mounts the chat core against a live analysis
//! service. The surrounding page chrome lives elsewhere; this binary is
//! the smallest host that exercises the whole stack.

use std::io::{self, BufRead, Write};

use valora_core::engine::ChatEngine;
use valora_core::event_bus::EventBus;
use valora_platform::AnalysisBackend;
use valora_render::{plain_text, render_message};
use valora_types::config::ChatConfig;
use valora_types::message::Origin;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ChatConfig::from_env();
    log::info!("analysis service at {}", config.base_url);

    let backend = AnalysisBackend::new(config.clone());
    let event_bus = EventBus::new();
    let engine = ChatEngine::new(config, event_bus.clone());

    engine.load_suggestions(&backend).await;
    print_suggestions(&engine);
    println!("Ask me anything. :use N picks a suggestion, :new starts over, :quit exits.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt(&engine);
        let line = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            _ => break,
        };

        match line.as_str() {
            ":quit" => break,
            ":new" => {
                engine.reset();
                engine.load_suggestions(&backend).await;
                println!("-- new chat --");
                print_suggestions(&engine);
                continue;
            }
            _ => {}
        }

        if let Some(arg) = line.strip_prefix(":use ") {
            let picked = arg
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .is_some_and(|n| engine.apply_suggestion(n - 1));
            if !picked {
                println!("no such suggestion");
            }
            continue;
        }

        // An empty line sends a pending draft; anything else is sent
        // directly.
        let text = if line.is_empty() { engine.draft() } else { line };
        if !engine.submit(&text, &backend).await {
            continue;
        }

        for event in event_bus.drain() {
            log::debug!("{:?}", event);
        }

        if let Some(message) = engine.messages().last() {
            if message.origin == Origin::Assistant {
                println!("{}", plain_text(&render_message(message)));
            }
        }
    }
}

fn prompt(engine: &ChatEngine) {
    let draft = engine.draft();
    if draft.is_empty() {
        print!("> ");
    } else {
        print!("[{}]> ", draft);
    }
    let _ = io::stdout().flush();
}

fn print_suggestions(engine: &ChatEngine) {
    if !engine.suggestions_visible() {
        return;
    }
    for (i, suggestion) in engine.suggestions().iter().enumerate() {
        println!("  [{}] {}: {}", i + 1, suggestion.label, suggestion.example);
    }
}
