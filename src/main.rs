use price_machine::app::PriceMachineApp;
use price_machine::config::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = PriceMachineApp::load(Settings::default());
    app.run_stdio();
}
