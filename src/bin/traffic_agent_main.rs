use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use traffic_agent::config::AgentConfig;
use traffic_agent::global_variables::POPULAR_LOCATIONS;
use traffic_agent::shared_data::TrafficReport;
use traffic_agent::{RouteRequest, TrafficAgent};

#[derive(Parser, Debug)]
#[command(author, version, about = "Traffic estimate and travel-time advice for a route")]
struct Cli {
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// JSON file overriding latencies, timeout and weekend days
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Starting point; prompted for when omitted
    #[arg(requires = "end")]
    start: Option<String>,

    /// Destination
    end: Option<String>,
}

// Reads a location; a number picks from the quick-fill list.
fn prompt_location(label: &str, choices: &[&str], offset: usize) -> std::io::Result<String> {
    println!("\n{}", label);
    for (idx, location) in choices.iter().enumerate() {
        println!("{}. {}", idx + offset + 1, location);
    }
    print!("Enter a number or type a location: ");
    stdout().flush()?;
    let mut input = String::new();
    stdin().read_line(&mut input)?;
    let trimmed = input.trim();
    let picked = trimmed
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(offset + 1))
        .and_then(|idx| choices.get(idx));
    Ok(match picked {
        Some(location) => location.to_string(),
        None => trimmed.to_string(),
    })
}

fn print_report(request: &RouteRequest, report: &TrafficReport) {
    let estimate = &report.estimate;
    println!("\n=== Traffic Update ({}) ===", report.current_time);
    println!("Route: {} -> {}", request.start, request.end);
    println!("Status: {} ({})", estimate.traffic_condition, estimate.route_status);
    println!("Estimated travel time: {}", estimate.estimated_travel_time);
    if let Some(speed) = &estimate.average_speed {
        println!("Average speed: {}", speed);
    }
    println!(
        "Traffic density: {}",
        estimate
            .traffic_density
            .map(|d| d.to_string())
            .unwrap_or_else(|| "Normal".to_string())
    );
    println!("Advice: {}", estimate.best_time_to_travel);

    if !estimate.incidents.is_empty() {
        println!("\nTraffic Alerts:");
        for incident in &estimate.incidents {
            println!("  - {}", incident);
        }
    }

    if !report.optimal_times.is_empty() {
        println!("\nOptimal Travel Times:");
        for rec in &report.optimal_times {
            println!("  [{}] {}", rec.priority.badge(), rec.message);
            println!("      Potential time savings: {}", rec.time_savings);
        }
    }

    println!(
        "\nConfidence: {}% | Sources: {}",
        report.confidence_level,
        report.data_sources.join(", ")
    );
    println!("Open in Google Maps: {}", report.links.directions);
    println!("Open in Waze: {}", report.links.navigate);
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => match AgentConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => AgentConfig::default(),
    };

    let request = if let (Some(start), Some(end)) = (&args.start, &args.end) {
        RouteRequest::new(start.as_str(), end.as_str())
    } else {
        let start = prompt_location("Starting point", &POPULAR_LOCATIONS[..5], 0);
        let end = prompt_location("Destination", &POPULAR_LOCATIONS[5..], 5);
        match (start, end) {
            (Ok(start), Ok(end)) => RouteRequest::new(start, end),
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("Error reading input: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    let agent = TrafficAgent::new(config);
    println!("Getting traffic update...");
    let report = match agent.get_traffic_update(&request, Utc::now()).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&request, &report);
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn two_locations_with_flags_parse() {
        let cli = Cli::try_parse_from([
            "traffic_agent_main",
            "--json",
            "--config",
            "agent.json",
            "Red Sea Mall",
            "Corniche Road",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("agent.json")));
        assert_eq!(cli.start.as_deref(), Some("Red Sea Mall"));
        assert_eq!(cli.end.as_deref(), Some("Corniche Road"));
    }

    #[test]
    fn no_locations_means_interactive() {
        let cli = Cli::try_parse_from(["traffic_agent_main"]).unwrap();
        assert!(!cli.json);
        assert!(cli.start.is_none() && cli.end.is_none());
    }

    #[test]
    fn misspelled_flag_is_rejected() {
        let err = Cli::try_parse_from(["traffic_agent_main", "--jsn", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_is_not_taken_as_a_location() {
        let err = Cli::try_parse_from(["traffic_agent_main", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn single_location_is_rejected() {
        let err = Cli::try_parse_from(["traffic_agent_main", "Red Sea Mall"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn third_location_is_rejected() {
        let err = Cli::try_parse_from(["traffic_agent_main", "a", "b", "c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn config_flag_needs_a_path() {
        let err = Cli::try_parse_from(["traffic_agent_main", "--config"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
