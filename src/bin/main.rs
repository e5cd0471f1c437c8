use crossterm::style::Stylize;
use lojban_core::core::morphology::StaticMorphology;
use lojban_core::locale::Locale;
use lojban_core::proxy::{render_page, JboskiClient};
use lojban_core::LojbanPlugin;
use std::io::{stdin, stdout, Write};
use std::path::Path;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let locale = match std::env::var("LOJBAN_LOCALE") {
        Ok(path) => match Locale::from_path(Path::new(&path)) {
            Ok(locale) => locale,
            Err(e) => {
                eprintln!("[ERROR] Could not load locale catalog '{}': {}", path, e);
                return;
            }
        },
        Err(_) => Locale::default(),
    };

    let plugin = LojbanPlugin::new(StaticMorphology::demo(), locale);
    let jboski = match std::env::var("JBOSKI_URL") {
        Ok(url) => JboskiClient::with_base_url(url),
        Err(_) => JboskiClient::new(),
    };

    println!("Lojban bot REPL (demo morphology table). Type 'exit' to quit.");
    println!("Commands: lujvo <input> | jboski <text>");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        stdout().flush().unwrap();

        let mut line = String::new();
        if stdin().read_line(&mut line).unwrap() == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((head, tail)) => (head, tail.trim()),
            None => (line, ""),
        };

        match command {
            "exit" => break,
            "" => {}
            "lujvo" => println!("{}", plugin.handle_lujvo(rest)),
            "jboski" => match jboski.check(rest).await {
                Ok(fragment) => println!("{}", render_page(&fragment)),
                Err(e) => println!("{}", e.to_string().red()),
            },
            other => {
                println!("{}", format!("Unknown command: '{}'", other).yellow());
                println!("Commands: lujvo <input> | jboski <text> | exit");
            }
        }
    }
}
