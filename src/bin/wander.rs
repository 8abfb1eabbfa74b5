use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use wander::client::{HttpClient, Session, Status, VisitState};
use wander::entities::Category;

#[derive(Debug, Parser)]
#[command(name = "wander", about = "Jump to a street somewhere and look around")]
struct Cli {
    /// Base URL of a running wander-server.
    #[arg(long, env = "WANDER_SERVER", default_value = "http://localhost:5000")]
    server: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 15)]
    timeout: u64,

    /// Kind of nearby places to list (cafe or bar).
    #[arg(long = "type", default_value = "cafe")]
    kind: String,

    /// After the first visit, hop to the nearby place at this position (1-based).
    #[arg(long)]
    hop: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Go to a random city.
    Teleport,
    /// Go to a named city (London, Paris, Toronto, New York, Tokyo, Rome).
    Search { city: Vec<String> },
}

#[tokio::main]
async fn main() -> ExitCode {
    wander::init_tracing();
    let cli = Cli::parse();

    let client = match HttpClient::new(&cli.server, Duration::from_secs(cli.timeout)) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(client);
    session.set_category(Category::from_query(Some(cli.kind.as_str())));

    match &cli.command {
        Command::Teleport => session.teleport().await,
        Command::Search { city } => session.search_city(&city.join(" ")).await,
    }

    print!("{}", render(session.state()));

    if let Some(position) = cli.hop {
        let point = position
            .checked_sub(1)
            .and_then(|i| session.state().nearby_points.get(i))
            .cloned();

        match point {
            Some(point) if point.coordinates.is_some() => {
                println!("\n-> {}\n", point.name);
                session.select_nearby_point(&point).await;
                print!("{}", render(session.state()));
            }
            Some(point) => println!("\n{} has no location to hop to.", point.name),
            None => println!("\nNo nearby place at position {}.", position),
        }
    }

    match session.state().status {
        Status::Loaded => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn render(state: &VisitState) -> String {
    let mut out = String::new();

    if !state.city_error.is_empty() {
        out.push_str(&format!("{}\n", state.city_error));
    }

    if let Some(c) = state.coordinates {
        out.push_str(&format!("{:.4}, {:.4}\n", c.lat, c.lng));
    }

    if !state.panorama_error.is_empty() {
        out.push_str(&format!("Street View error: {}\n", state.panorama_error));
    } else if !state.panorama_url.is_empty() {
        out.push_str(&format!("Street View: {}\n", state.panorama_url));
    }

    if !state.nearby_error.is_empty() {
        out.push_str(&format!("{}\n", state.nearby_error));
    }

    for (i, point) in state.nearby_points.iter().enumerate() {
        out.push_str(&format!("{:>2}. {}\n", i + 1, point.name));
        if !point.categories.is_empty() {
            out.push_str(&format!("    {}\n", point.categories));
        }
        if let Some(distance) = point.distance {
            out.push_str(&format!("    ~{} m away\n", distance.round()));
        }
        if let Some(address) = &point.address {
            out.push_str(&format!("    {}\n", address));
        }
    }

    out
}
