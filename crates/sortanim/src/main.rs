//! SortAnim: step-synchronized quicksort animation.

use sortanim_lib::{app, config, errors, logging};

fn main() {
    let config = config::AppConfig::parse();

    if let Err(e) = logging::init(&config) {
        eprintln!("Error: {e:#}");
        std::process::exit(errors::exit_code_for(&e));
    }

    let code = match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            errors::exit_code_for(&e)
        }
    };
    std::process::exit(code);
}
