use inkslinger::engine_ink::InkEngine;
use inkslinger::session::Session;
use inkslinger::story_file;
use inkslinger::terminal_crossterm::CrosstermTerminal;
use log::{debug, info};
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Get command line arguments
    let args: Vec<String> = env::args().collect();

    // Display help information on request or when over-supplied.
    // Exit with success status since the user asked for help.
    let wants_help = args
        .get(1)
        .is_some_and(|a| a == "--help" || a == "-h");
    if wants_help || args.len() > 2 {
        println!("inkslinger - terminal player for compiled Ink stories");
        println!();
        println!("Usage: {} [story.json]", args[0]);
        println!();
        println!("The story file is a compiled Ink story as produced by inklecate");
        println!("or inkjs. With no argument, ./story.json is used.");
        return Ok(());
    }

    let story_path = args.get(1).map(String::as_str).unwrap_or("story.json");

    // Load the story file with user-friendly error handling.
    // Use explicit match instead of ? operator to provide clean, formatted
    // messages that guide users past common problems like wrong paths.
    debug!("Loading compiled story: {story_path}");
    let json = match story_file::load_story_json(Path::new(story_path)) {
        Ok(json) => json,
        Err(e) => {
            match e.kind() {
                std::io::ErrorKind::NotFound => {
                    eprintln!("Error: Story file not found: {story_path}");
                    eprintln!();
                    eprintln!("Please check:");
                    eprintln!("• File path is correct");
                    eprintln!("• You're running from the right directory");
                    eprintln!("• The story was compiled to JSON (inklecate story.ink)");
                }
                std::io::ErrorKind::PermissionDenied => {
                    eprintln!("Error: Permission denied accessing story file: {story_path}");
                    eprintln!();
                    eprintln!("Please check file permissions.");
                }
                _ => {
                    eprintln!("Error: Cannot read story file '{story_path}': {e}");
                }
            }
            std::process::exit(1);
        }
    };

    // Create the engine and terminal
    let engine = InkEngine::from_json(&json)?;
    let terminal = CrosstermTerminal::new()?;

    info!("starting story session");
    let mut session = Session::new(engine, terminal);

    match session.run() {
        Ok(()) => {
            debug!("story ended normally");
            Ok(())
        }
        Err(e) => {
            eprintln!("\nError during story playback: {e}");
            Err(Box::new(std::io::Error::other(e)) as Box<dyn std::error::Error>)
        }
    }
}
