use clap::{arg, Command};
use colored::Colorize;
use rand::Rng;

use stock_gym::{
    env::RenderMode,
    series::{read_series_file, synthetic_closes, PriceSeries},
    EnvConfig, StockEnv,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("stock_gym")
        .about("Runs a random policy through the simulated trading environment")
        .arg(arg!(--data <FILE> "postcard-encoded price series file").required(false))
        .arg(arg!(--episodes <COUNT> "number of episodes to run").required(false))
        .arg(arg!(--variant <VARIANT> "action space variant: six or three").required(false))
        .arg(arg!(--cash <AMOUNT> "starting cash").required(false))
        .arg(arg!(--window <SIZE> "observation window size").required(false))
        .arg(arg!(--charts <DIR> "chart output directory").required(false))
        .get_matches();

    let episodes: usize = match matches.get_one::<String>("episodes") {
        Some(value) => value.parse()?,
        None => 3,
    };
    let charts_dir = match matches.get_one::<String>("charts") {
        Some(dir) => dir.clone(),
        None => "charts/run".to_string(),
    };

    let series = match matches.get_one::<String>("data") {
        Some(path) => read_series_file(path)?,
        None => {
            println!("No data file given, generating a synthetic series");
            PriceSeries::from_closes(synthetic_closes(1000, 100.0))?
        }
    };

    let mut config = match matches.get_one::<String>("variant").map(String::as_str) {
        None | Some("six") => EnvConfig::six_action(),
        Some("three") => EnvConfig::three_action(),
        Some(other) => return Err(format!("unknown variant {other}, expected six or three").into()),
    };

    if let Some(cash) = matches.get_one::<String>("cash") {
        config.starting_cash = cash.parse()?;
    }
    if let Some(window) = matches.get_one::<String>("window") {
        config.window_size = window.parse()?;
    }

    let starting_cash = config.starting_cash;
    let mut env = StockEnv::new(series, config)?.with_renderer(&charts_dir);
    let mut rng = rand::thread_rng();

    for episode in 0..episodes {
        env.reset();

        loop {
            let action = rng.gen_range(0..env.action_count());
            let step = env.step(action)?;

            if step.done {
                break;
            }
        }

        let final_assets = env.history().final_assets().unwrap_or(starting_cash);
        let summary = format!("Episode {episode} - Total Assets: {final_assets:.2}");

        if final_assets >= starting_cash {
            println!("{}", summary.green());
        } else {
            println!("{}", summary.red());
        }

        env.render(RenderMode::Regular)?;

        let episode_dir = format!("{charts_dir}/{episode}");
        let prices = env.series().prices().clone();
        env.history().record(&episode_dir, &prices)?;
    }

    env.close();

    Ok(())
}
