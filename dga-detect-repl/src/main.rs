//! Interactive gibberish checker.
//!
//! Loads the model artifact once, then classifies one line of input at
//! a time until `exit` or end of input.

use std::io::{self, BufRead, Write};

use dga_detect_core::model::detector::Detector;

fn main() -> anyhow::Result<()> {
	env_logger::init();

	let path = std::env::args()
		.nth(1)
		.unwrap_or_else(|| "gib_model.dat".to_owned());

	// Load failure is fatal: there is no classification without a model.
	let detector = Detector::load(&path)?;

	println!("Gibberish detection model loaded from '{path}'.");
	println!("Type a string to check it. Type 'exit' to quit.");

	let mut stdin = io::stdin().lock();
	let mut line = String::new();
	loop {
		print!("Enter text: ");
		io::stdout().flush()?;

		line.clear();
		if stdin.read_line(&mut line)? == 0 {
			break;
		}

		let text = line.trim();
		if text.eq_ignore_ascii_case("exit") {
			println!("Exiting.");
			break;
		}

		let verdict = detector.classify(text);
		println!("Gibberish: {} (score {:.6})", verdict.is_gibberish, verdict.score);
	}

	Ok(())
}
