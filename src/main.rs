use clap::Parser;

use freqpicker::cli::{Args, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    match args.command.clone() {
        Some(Command::Calc(calc)) => {
            let out = calc.run().map_err(|e| {
                log::error!("{e}");
                e
            })?;
            println!("{out}");
            Ok(())
        }
        None => {
            let cfg = args.into_config();
            log::debug!(
                "Starting picker: scale={:?} third_click={:?}",
                cfg.calculator.frequency_scale,
                cfg.third_click
            );
            freqpicker::run_picker(cfg)?;
            Ok(())
        }
    }
}
