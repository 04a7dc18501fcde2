use anyhow::Result;
use clap::{App as ClapApp, Arg};
use mailmyballot::{app::App, config::Config, error::AppResult, state::Route};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("route")
                .short("r")
                .long("route")
                .value_name("PATH")
                .help("Route to open, e.g. /address/FL/33401")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let route = start_route(matches.value_of("route"))?;

    App::start(config, route).await
}

fn start_route(path: Option<&str>) -> AppResult<Route> {
    match path {
        Some(path) => Ok(path.parse::<Route>()?),
        None => Ok(Route::Start),
    }
}
