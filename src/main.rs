use anyhow::Result;
use clap::{App as ClapApp, Arg};
use movie_tui::app::App;
use movie_tui::config::Config;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml (default: ~/.config/movie-tui)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("data-dir")
                .short("d")
                .long("data-dir")
                .value_name("DIR")
                .help("Directory where favorites are stored")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("catalog")
                .long("catalog")
                .value_name("FILE")
                .help("JSON file with the movies to browse")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("route")
                .short("r")
                .long("route")
                .value_name("ROUTE")
                .help("View to open on start: / or /favorites")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ephemeral")
                .long("ephemeral")
                .help("Keep favorites in memory only"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(dir) = matches.value_of("data-dir") {
        config.data_dir = Some(PathBuf::from(dir));
    }
    if let Some(path) = matches.value_of("catalog") {
        config.catalog_path = Some(PathBuf::from(path));
    }
    config.ephemeral = matches.is_present("ephemeral");

    App::start(config, matches.value_of("route"))
}
