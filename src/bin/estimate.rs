//! Command-line calorie target estimate
//!
//! Usage: estimate [--markdown] key=value ...

use caltarget::config::{Config, ReportFormat};
use caltarget::tools::estimate::{estimate_calorie_target, EstimateParams};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: estimate [--markdown] key=value ...

Keys:
  sex=male|female  age=YEARS  weight=KG
  height=CM  |  unit=imperial feet=FT inches=IN
  activity=sedentary|light|moderate|active
  food=high_protein|balanced|high_processed
  goal=maintenance|moderate_loss|aggressive_loss|moderate_gain
  sleep=less_than_six|six_to_seven|optimal
  stress=low|moderate|high
  water=low|adequate|ideal
  medical=hypothyroid,pcos,insulin_resistance,appetite_meds
  format=json|markdown";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive().parse()?))
        .with_writer(std::io::stderr)
        .init();

    let mut params = EstimateParams::default();
    let mut default_format = config.report_format;

    for arg in std::env::args().skip(1) {
        if arg == "--markdown" {
            default_format = ReportFormat::Markdown;
            continue;
        }
        if arg == "--help" || arg == "-h" {
            println!("{}", USAGE);
            return Ok(());
        }
        let Some((key, value)) = arg.split_once('=') else {
            eprintln!("Expected key=value, got '{}'\n\n{}", arg, USAGE);
            std::process::exit(2);
        };
        if let Err(e) = params.apply_arg(key, value) {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    }

    let response = estimate_calorie_target(&params, default_format)?;
    match &response.markdown {
        Some(markdown) => print!("{}", markdown),
        None => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}
