use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use dotenv::dotenv;
use log::info;
use macrocalc_model::{ActivityLevel, Goal};

use macrocalc_cli::presenter::{JsonPresenter, Presenter, TerminalPresenter};
use macrocalc_cli::{logging, prompt, Calculator, Field};

/// Estimate daily calories and macro targets (Mifflin-St Jeor).
#[derive(Debug, Parser)]
#[command(name = "macrocalc", version)]
struct Args {
    /// male or female
    #[arg(long, default_value = "")]
    gender: String,

    /// Age in years
    #[arg(long, default_value = "")]
    age: String,

    /// Body weight in pounds
    #[arg(long, default_value = "")]
    weight: String,

    /// Height, whole feet
    #[arg(long, default_value = "")]
    height_ft: String,

    /// Height, remaining inches
    #[arg(long, default_value = "")]
    height_in: String,

    /// sedentary, light, moderate or heavy
    #[arg(long, default_value_t = ActivityLevel::Sedentary)]
    activity: ActivityLevel,

    /// cutting, bulking or maintenance
    #[arg(long, default_value_t = Goal::Cutting)]
    goal: Goal,

    /// Ask for each field on stdin
    #[arg(short, long)]
    interactive: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    #[arg(long, env = "MACROCALC_LOG_CONFIG", default_value = "log4rs.yml")]
    log_config: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    let args = Args::parse();
    logging::init(&args.log_config)?;

    let presenter: Box<dyn Presenter> = if args.json {
        Box::new(JsonPresenter::new(io::stdout()))
    } else {
        Box::new(TerminalPresenter::new(io::stdout()))
    };
    let mut calculator = Calculator::new(presenter);

    let form = calculator.form_mut();
    form.activity_level = args.activity;
    form.goal = args.goal;
    for (field, value) in [
        (Field::Gender, &args.gender),
        (Field::Age, &args.age),
        (Field::Weight, &args.weight),
        (Field::HeightFt, &args.height_ft),
        (Field::HeightIn, &args.height_in),
    ] {
        calculator.set_field(field, value)?;
    }

    if args.interactive {
        info!("Reading form from stdin");
        // stdout is reserved for the JSON object
        let mut prompts: Box<dyn Write> = if args.json {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };
        prompt::fill_form(&mut calculator, &mut io::stdin().lock(), &mut prompts)?;
        prompts.flush()?;
    }

    calculator.calculate()?;
    Ok(())
}
