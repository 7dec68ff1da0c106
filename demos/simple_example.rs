use gradfit::{Dataset, GradientDescent, metrics};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Gradient Descent Line Fit ===\n");

    // y = 3 + 2x with small noise
    let data = Dataset::synthetic_line(3.0, 2.0, 40, (0.0, 2.0), 0.1, 2024)?;

    println!("Training data: {} samples", data.n_samples());
    for s in data.samples().take(5) {
        println!("  x={:.3}, y={:.3}", s.x, s.y);
    }

    let report = GradientDescent::new()
        .learning_rate(0.2)
        .max_iterations(5000)
        .track_cost(true)
        .fit_report(&data)?;

    let params = report.params;
    let predictions = params.predict_all(data.x());

    println!("\nResults:");
    println!("Intercept (theta0): {:.2}", params.theta0);
    println!("Slope (theta1): {:.2}", params.theta1);
    println!("Stopped: {:?} after {} iterations", report.stop, report.iterations);
    println!("R² score: {:.4}", params.score(&data)?);
    println!("MSE: {:.4}", metrics::mean_squared_error(data.y(), &predictions)?);

    println!("\nCost every 500 iterations:");
    for (i, cost) in report.cost_history.iter().enumerate().step_by(500) {
        println!("  {:>5}: {:.6}", i, cost);
    }

    println!("\nPredictions on new data:");
    for x in [2.5, 3.0] {
        println!("x={:.1}: predicted y={:.2}", x, params.predict(x));
    }

    Ok(())
}
