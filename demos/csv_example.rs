use gradfit::{Dataset, FitConfig, GradientDescent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Step 1: load samples (header: x,y)
    let data = Dataset::from_csv_path(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/data/line.csv"))?;
    println!("Dataset: {} samples", data.n_samples());

    // Step 2: same settings the command-line tool starts from
    let config = FitConfig::default();
    let model = GradientDescent::from_config(&config);

    // Step 3: fit and report
    let params = model.fit(&data)?;
    println!("Found optimal values for theta_0: {:.2} and theta_1: {:.2}", params.theta0, params.theta1);
    println!("R² score: {:.4}", params.score(&data)?);

    Ok(())
}
