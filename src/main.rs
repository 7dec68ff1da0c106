use clap::Parser;
use gradfit::{Dataset, FitConfig, GradientDescent, Sample};
use log::{error, info};
use std::error::Error;
use std::path::PathBuf;
use std::process;

const DEMO_SAMPLES: [Sample; 4] = [
    Sample { x: 0.0, y: 0.0 },
    Sample { x: 1.0, y: 1.0 },
    Sample { x: 2.0, y: 2.0 },
    Sample { x: 3.0, y: 3.0 },
];

#[derive(Debug, Parser)]
#[command(
    name = "gradfit",
    about = "Fit y = theta0 + theta1 * x by batch gradient descent",
    version
)]
struct Cli {
    /// CSV file with an `x,y` header; the built-in line y = x is used when omitted
    #[arg(long, value_name = "CSV")]
    data: Option<PathBuf>,

    /// JSON file with learning_rate, max_iterations and tolerance
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    #[arg(long)]
    learning_rate: Option<f64>,

    #[arg(long)]
    max_iterations: Option<usize>,

    /// Stop when both parameters move by at most this much instead of requiring an exact repeat
    #[arg(long)]
    tolerance: Option<f64>,
}

impl Cli {
    fn fit_config(&self) -> Result<FitConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => FitConfig::from_json_path(path)?,
            None => FitConfig::default(),
        };

        if let Some(lr) = self.learning_rate {
            config.learning_rate = lr;
        }
        if let Some(n) = self.max_iterations {
            config.max_iterations = n;
        }
        if self.tolerance.is_some() {
            config.tolerance = self.tolerance;
        }
        Ok(config)
    }

    fn dataset(&self) -> Result<Dataset, Box<dyn Error>> {
        match &self.data {
            Some(path) => Ok(Dataset::from_csv_path(path)?),
            None => Ok(Dataset::from_samples(&DEMO_SAMPLES)),
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.fit_config()?;
    let dataset = cli.dataset()?;
    info!("fitting {} samples with {:?}", dataset.n_samples(), config);

    let report = GradientDescent::from_config(&config).fit_report(&dataset)?;
    info!("{:?} after {} iterations", report.stop, report.iterations);

    println!(
        "Found optimal values for theta_0: {:.2} and theta_1: {:.2}",
        report.params.theta0, report.params.theta1
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e}");
        eprintln!("Err: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gradfit-{}-{}.json", name, process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_no_flags_uses_defaults() {
        let cli = Cli::try_parse_from(["gradfit"]).unwrap();
        assert_eq!(cli.fit_config().unwrap(), FitConfig::default());
        assert_eq!(cli.dataset().unwrap().n_samples(), DEMO_SAMPLES.len());
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = write_config(
            "override",
            r#"{ "learning_rate": 0.05, "max_iterations": 20, "tolerance": 1e-4 }"#,
        );
        let config_arg = path.to_str().unwrap();

        let cli = Cli::try_parse_from(["gradfit", "--config", config_arg]).unwrap();
        let from_file = cli.fit_config().unwrap();
        assert_eq!(from_file.learning_rate, 0.05);
        assert_eq!(from_file.max_iterations, 20);
        assert_eq!(from_file.tolerance, Some(1e-4));

        let cli = Cli::try_parse_from([
            "gradfit",
            "--config",
            config_arg,
            "--max-iterations",
            "7",
            "--tolerance",
            "1e-2",
        ])
        .unwrap();
        let merged = cli.fit_config().unwrap();
        assert_eq!(merged.learning_rate, 0.05);
        assert_eq!(merged.max_iterations, 7);
        assert_eq!(merged.tolerance, Some(1e-2));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = Cli::try_parse_from(["gradfit", "--config", "no/such/config.json"]).unwrap();
        assert!(cli.fit_config().is_err());
        assert!(run(&cli).is_err());
    }

    #[test]
    fn test_zero_learning_rate_fails() {
        let cli = Cli::try_parse_from(["gradfit", "--learning-rate=0"]).unwrap();
        assert!(run(&cli).is_err());
    }

    #[test]
    fn test_default_run_succeeds() {
        let cli = Cli::try_parse_from(["gradfit"]).unwrap();
        assert!(run(&cli).is_ok());
    }
}
