use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use metro_engine::planner::Planner;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The dataset is fixed, so failure here is a build defect.
    let planner = Planner::delhi_metro().expect("metro dataset is malformed");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("stations") => {
            show_stations(&planner);
            ExitCode::SUCCESS
        }
        Some("map") => {
            show_map(&planner);
            ExitCode::SUCCESS
        }
        Some("route") => run_route(&planner, &args[1..]),
        _ => {
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Metro route planner");
    println!();
    println!("Usage:");
    println!("  metro-engine stations                 List all stations");
    println!("  metro-engine map                      Show the adjacency map");
    println!("  metro-engine route <from> <to>        Shortest route by distance (km)");
    println!("      --time                            Optimize for travel time (minutes)");
    println!("      --json                            Emit the route as JSON");
}

fn show_stations(planner: &Planner) {
    for (i, station) in planner.list_stations().iter().enumerate() {
        println!("{}. {}", i + 1, station);
    }
}

fn show_map(planner: &Planner) {
    println!("\t Delhi Metro Map");
    println!("\t------------------");
    for (station, neighbors) in planner.adjacency() {
        println!("{station} =>");
        for (neighbor, weight) in neighbors {
            println!("\t{:<28}{}", neighbor.to_string(), weight);
        }
    }
}

fn run_route(planner: &Planner, args: &[String]) -> ExitCode {
    let by_time = args.iter().any(|a| a == "--time");
    let as_json = args.iter().any(|a| a == "--json");
    let stations: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let [from, to] = stations.as_slice() else {
        print_usage();
        return ExitCode::FAILURE;
    };

    // Pre-validate, so "no path" is reported without inspecting the route.
    match planner.has_path(from, to) {
        Ok(true) => {}
        Ok(false) => {
            println!("No path between {from} and {to}.");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err} (try `metro-engine stations`)");
            return ExitCode::FAILURE;
        }
    }

    let result = if by_time {
        planner.shortest_by_time(from, to)
    } else {
        planner.shortest_by_distance(from, to)
    };

    match result {
        Ok(route) if as_json => match serde_json::to_string_pretty(&route) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("failed to encode route: {err}");
                ExitCode::FAILURE
            }
        },
        Ok(route) => {
            print!("{route}");
            if by_time {
                println!("({} minutes)", route.total_weight());
            } else {
                println!("({} km)", route.total_weight());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
