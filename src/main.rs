use std::env;
use std::path::PathBuf;
use std::process;

use log::{error, info, warn};

use adaline::{Adaline, Case, Error, Result, TrainConfig};

struct Args {
    config: TrainConfig,
    out_dir: Option<PathBuf>,
}

fn parse_args() -> std::result::Result<Args, String> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 4 {
        return Err(format!(
            "Usage: {} [learning_rate] [target_error] [out_dir]",
            args[0]
        ));
    }

    let mut config = TrainConfig::default();
    if let Some(lr) = args.get(1) {
        config.learning_rate = lr
            .parse()
            .map_err(|e| format!("learning_rate {lr:?}: {e}"))?;
    }
    if let Some(t) = args.get(2) {
        config.target_error = t.parse().map_err(|e| format!("target_error {t:?}: {e}"))?;
    }
    let out_dir = args.get(3).map(PathBuf::from);

    Ok(Args { config, out_dir })
}

fn run(args: Args) -> Result<bool> {
    args.config.validate()?;
    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir).map_err(|e| {
            Error::Io(format!("failed to create {}: {e}", dir.display()))
        })?;
    }

    let mut total_epochs = 0;
    let mut error_sum = 0.0;
    let mut all_converged = true;

    for case in Case::ALL {
        let data = case.dataset();
        let mut model = Adaline::new(args.config)?;
        let report = model.train(&data)?;
        let final_error = report.final_error().unwrap_or(f64::NAN);

        info!("{case}: epochs={} mse={final_error:.8}", report.epochs_trained);
        println!(
            "{case}: {} after {} epochs, final error {final_error:.8}",
            if report.converged() { "converged" } else { "did not converge" },
            report.epochs_trained
        );
        let params = model.parameters()?;
        println!("  weights = {:?}", params.values());
        println!("  bias    = {}", params.bias());

        if let Some(dir) = &args.out_dir {
            match model.save_weights(dir.join(case.weights_file_name())) {
                Ok(()) => {}
                Err(Error::InvalidData(msg)) => warn!("{case}: weights not saved: {msg}"),
                Err(e) => return Err(e),
            }
        }

        total_epochs += report.epochs_trained;
        error_sum += final_error;
        all_converged &= report.converged();
    }

    println!(
        "total epochs {total_epochs}, average final error {:.8}, all converged: {all_converged}",
        error_sum / Case::ALL.len() as f64
    );
    Ok(all_converged)
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(1);
        }
    };

    match run(args) {
        Ok(true) => {}
        Ok(false) => info!("some cases did not reach the target error"),
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
