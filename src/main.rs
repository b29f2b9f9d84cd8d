use rubopop::cli::PROGRAM_NAME;
use rubopop::ui;
use std::process;

fn main() {
    if let Err(e) = rubopop::cli::run() {
        ui::print_error(&e.to_string());
        if e.is_usage_error() {
            ui::print_hint(&ui::usage_hint(PROGRAM_NAME));
        }
        process::exit(1);
    }
}
