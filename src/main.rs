#[tokio::main]
async fn main() {
    let config = shopseed::config::Config::default();
    let mut rng = rand::thread_rng();

    if let Err(error) = shopseed::generate::write_fixtures(&config, &mut rng).await {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
