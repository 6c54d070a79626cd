mod app;
mod effects;
mod render;

fn main() {
    reword_logging::initialize(reword_logging::LogDestination::File);
    if let Err(err) = app::run() {
        eprintln!("reword: {err}");
        std::process::exit(1);
    }
}
