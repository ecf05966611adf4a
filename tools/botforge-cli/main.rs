use botforge::prelude::*;
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// A Messenger chatbot configurator that generates ready-to-import n8n workflow documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the bot settings JSON file
    settings_path: Option<String>,
    /// Path to the keyword routes text file (one `phrase => reply` per line)
    routes_path: Option<String>,

    /// Write the workflow document here instead of stdout. A directory gets the
    /// derived filename; anything else is used as the file path verbatim.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Run the routing simulator against a message text and print the decision
    #[arg(short, long, value_name = "MESSAGE")]
    simulate: Option<String>,

    /// Run in interactive mode to be prompted for every form field
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli.out);
    } else {
        run_non_interactive(cli);
    }
}

fn run_non_interactive(cli: Cli) {
    let settings_path = cli.settings_path.unwrap_or_else(|| {
        exit_with_error("Settings path is required in non-interactive mode.");
    });
    let routes_path = cli.routes_path.unwrap_or_else(|| {
        exit_with_error("Routes path is required in non-interactive mode.");
    });

    let settings = BotSettings::from_file(&settings_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load settings: {}", e)));

    let routes_text = fs::read_to_string(&routes_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read routes file '{}': {}",
            &routes_path, e
        ))
    });
    let routes = parse_routes(&routes_text);

    if let Some(message) = cli.simulate {
        run_simulation(&settings, &routes, &message);
    }

    generate_and_emit(settings, routes, cli.out);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(out: Option<PathBuf>) {
    println!("--- Botforge Interactive Mode ---");

    let defaults = BotSettings::default();
    let automation_name = prompt_for_input("Automation name", Some(&defaults.automation_name));
    let verify_token = prompt_for_input("Verify token", None);
    let page_access_token = prompt_for_input("Page access token", None);

    // The webhook path default is derived from the name once, not re-derived later.
    let derived_path = slugify(&automation_name);
    let webhook_path = prompt_for_input("Webhook path", Some(&derived_path));
    let default_reply = prompt_for_input("Default reply", Some(&defaults.default_reply));

    let timezone = loop {
        println!("\nPlease select a timezone:");
        for (i, zone) in TIMEZONES.iter().enumerate() {
            println!("  {}: {}", i + 1, zone);
        }
        let choice = prompt_for_input("Enter choice", Some("1"));
        match choice.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= TIMEZONES.len() => break TIMEZONES[n - 1].to_string(),
            _ => println!("Invalid choice. Please enter 1-{}.", TIMEZONES.len()),
        }
    };

    println!("\nEnter keyword routes, one 'phrase => reply' per line.");
    println!("Finish with an empty line. Malformed lines are skipped.");
    let mut routes_text = String::new();
    loop {
        let line = prompt_for_input("route", None);
        if line.is_empty() {
            break;
        }
        routes_text.push_str(&line);
        routes_text.push('\n');
    }
    let routes = parse_routes(&routes_text);
    println!("Parsed {} route(s).", routes.len());

    let settings = BotSettings {
        automation_name,
        verify_token,
        page_access_token,
        webhook_path,
        default_reply,
        timezone,
    };

    generate_and_emit(settings, routes, out);
}

/// Builds the document and either writes it to the requested location or prints it.
fn generate_and_emit(settings: BotSettings, routes: Vec<KeywordRoute>, out: Option<PathBuf>) {
    let document = WorkflowBuilder::new(settings.clone(), routes).build();

    match out {
        Some(path) if path.is_dir() => {
            let written = write_workflow_file(&document, &path, &settings)
                .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));
            println!("Wrote workflow document to '{}'", written.display());
        }
        Some(path) => {
            let json = to_pretty_json(&document)
                .unwrap_or_else(|e| exit_with_error(&format!("Serialization failed: {}", e)));
            fs::write(&path, json).unwrap_or_else(|e| {
                exit_with_error(&format!("Could not write '{}': {}", path.display(), e))
            });
            println!("Wrote workflow document to '{}'", path.display());
        }
        None => {
            let json = to_pretty_json(&document)
                .unwrap_or_else(|e| exit_with_error(&format!("Serialization failed: {}", e)));
            println!("{}", json);
        }
    }
}

/// Prints what the generated workflow would reply to one simulated message.
fn run_simulation(settings: &BotSettings, routes: &[KeywordRoute], message: &str) {
    let simulator = Simulator::from_settings(settings, routes);
    match simulator.message("simulated-sender", message) {
        SimulationOutcome::Reply {
            reply_text,
            matched_phrase,
            ..
        } => {
            match matched_phrase {
                Some(phrase) => println!("  -> Matched phrase: '{}'", phrase),
                None => println!("  -> No phrase matched, default reply used"),
            }
            println!("  -> Reply: {}", reply_text);
        }
        SimulationOutcome::Acknowledge => {
            println!("  -> Empty message: acknowledged without a reply");
        }
        // message() never yields verification outcomes
        other => println!("  -> {:?}", other),
    }
    println!();
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
