use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use wheel_datepicker::config::{parse_year_range, Config};
use wheel_datepicker::{log, open_date_picker, DialogOutcome};

const USAGE: &str = "Usage: wheel-datepicker [--title TEXT] [--years START..END] [--ok LABEL] [--cancel LABEL]";

/// Values given on the command line
#[derive(Default)]
struct CliArgs {
    title: Option<String>,
    years: Option<std::ops::RangeInclusive<i32>>,
    ok_label: Option<String>,
    cancel_label: Option<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        if matches!(flag, "--help" | "-h") {
            println!("{}", USAGE);
            std::process::exit(0);
        }

        let Some(value) = args.get(i + 1).cloned() else {
            eprintln!("Warning: {} requires an argument", flag);
            i += 1;
            continue;
        };

        match flag {
            "--title" | "-t" => cli.title = Some(value),
            "--years" | "-y" => cli.years = Some(parse_year_range(&value)?),
            "--ok" => cli.ok_label = Some(value),
            "--cancel" => cli.cancel_label = Some(value),
            _ => {
                eprintln!("Warning: unknown argument '{}'", flag);
                i += 1;
                continue;
            }
        }
        i += 2;
    }

    Ok(cli)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;

    // Precedence: CLI > env var > config file > defaults
    let config = Config::load()
        .with_env()
        .with_overrides(cli.title, cli.years, cli.ok_label, cli.cancel_label);

    let picked = Rc::new(RefCell::new(None));
    let picked_cb = picked.clone();

    let outcome = open_date_picker(
        config.picker_options(),
        move |date| *picked_cb.borrow_mut() = Some(date),
        || log::log("Dialog closed"),
    )
    .await?;

    match (outcome, picked.borrow().as_ref()) {
        (DialogOutcome::Confirmed(_), Some(date)) => {
            println!("{}", date.format("%Y-%m-%d"));
            Ok(())
        }
        _ => std::process::exit(1),
    }
}
