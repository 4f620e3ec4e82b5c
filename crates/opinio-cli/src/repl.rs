//! Interactive loop for trying a trained model against typed text.

use std::io::{self, BufRead, Write};
use std::path::Path;

use opinio_ai::{ModelArtifact, predict};
use opinio_core::{Language, clean_text};

/// Pick a model, then classify typed lines until `exit`.
///
/// When both models exist the user chooses; with only one present it is
/// selected automatically; with none the loop refuses to start.
pub fn run_repl(model_dir: &Path) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let has_fr = ModelArtifact::exists(model_dir, Language::Fr);
    let has_en = ModelArtifact::exists(model_dir, Language::En);

    let language = match (has_fr, has_en) {
        (false, false) => {
            println!("No models are present, nothing to try.");
            return Ok(());
        }
        (true, false) => {
            println!("Only the French model is available.");
            Language::Fr
        }
        (false, true) => {
            println!("Only the English model is available.");
            Language::En
        }
        (true, true) => loop {
            print!("Which model do you want to try? (fr/en): ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            match Language::from_code(line?.trim().to_lowercase().as_str()) {
                Some(language) => break language,
                None => println!("Invalid input. Choose 'fr' or 'en'."),
            }
        },
    };

    println!("Loaded model '{language}'. Type 'exit' to quit.");
    loop {
        print!("Enter text to classify ('{language}') or 'exit': ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let text = line.trim();
        if text.eq_ignore_ascii_case("exit") {
            println!("Exiting. Goodbye!");
            break;
        }
        if text.is_empty() {
            continue;
        }

        // The exact transform the trainer used; never a shortcut.
        match predict(model_dir, language, &clean_text(text, language)) {
            Ok(polarity) => {
                let sentiment = if polarity { "positive" } else { "negative" };
                println!("Prediction: {} => {sentiment}", polarity as u8);
            }
            Err(error) => println!("Cannot classify: {error}"),
        }
    }
    Ok(())
}
