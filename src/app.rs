use crate::converter::{convert, TimeOfDay};
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<()> {
        log::info!("Starting Clockspeak terminal");

        let mut rl = DefaultEditor::new()?;
        println!("Welcome to Clockspeak! Type a time like 14:40, or 'help' for commands.");

        loop {
            let readline = rl.readline(">> ");
            match readline {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    self.process_input(line.trim());
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
        Ok(())
    }

    fn process_input(&self, input: &str) {
        match input {
            "" => {}
            "help" => {
                println!("Available commands:");
                println!("  <HH:MM> - Convert a 24-hour time to words, e.g. 09:45");
                println!("  now - Convert the current time");
                println!("  help - Show this help");
                println!("  exit - Exit the application");
            }
            "now" => {
                let now = TimeOfDay::now();
                println!("{} - {}", now, now.to_phrase());
            }
            "exit" | "quit" => {
                std::process::exit(0);
            }
            time => match convert(time) {
                Ok(phrase) => println!("{}", phrase),
                Err(err) => println!("{}", err),
            },
        }
    }
}
