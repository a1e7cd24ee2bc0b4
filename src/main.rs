use anyhow::Result;
use env_logger::Env;
use log::error;

fn main() -> Result<()> {
    // Initialize logging with custom format
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // One-shot mode: convert each argument and exit
    if !args.is_empty() {
        let mut failed = false;
        for time in &args {
            match clockspeak::convert(time) {
                Ok(phrase) => println!("{}", phrase),
                Err(err) => {
                    error!("Failed to convert \"{}\": {}", time, err);
                    eprintln!("{}", err);
                    failed = true;
                }
            }
        }
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    clockspeak::run()
}
