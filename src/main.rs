use dioxus::logger::tracing::Level;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("could not initialise logging: {e}");
    }
    dioxus::launch(parent_powerup::App);
}
