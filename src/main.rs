// SpaceTraders dashboard - command line front end over the fleet core

use clap::{Parser, Subcommand};
use spacetraders_dash::operations::RankedWaypoint;
use spacetraders_dash::verbosity::init_logging;
use spacetraders_dash::{
    describe_nav_status, rank_reachable_waypoints, DashboardConfig, FleetNavigator, NavDisplay,
    Positioned, SpaceTradersClient, TransitionOutcome,
};

#[derive(Parser)]
#[command(name = "spacetraders-dash")]
#[command(about = "Inspect and steer a SpaceTraders fleet")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "spacetraders-dash.toml")]
    config: String,

    /// Override logging verbosity (0-2)
    #[arg(short, long)]
    verbosity: Option<u8>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show agent details
    Agent,
    /// List ships in the fleet
    Ships,
    /// Show one ship and its nav status
    Ship { symbol: String },
    /// Show a system and its waypoints
    System { symbol: String },
    /// List waypoints in a system
    Waypoints {
        system: String,
        /// Only waypoints carrying this trait (e.g. MARKETPLACE)
        #[arg(long = "trait")]
        trait_filter: Option<String>,
    },
    /// List contracts
    Contracts,
    /// Rank the ship's system waypoints by reachability on current fuel
    Reachable { ship: String },
    /// Move a docked ship into orbit
    Launch { ship: String },
    /// Dock a ship in orbit
    Dock { ship: String },
    /// Send a ship in orbit to a waypoint
    Navigate { ship: String, waypoint: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (mut config, created) = DashboardConfig::open(&args.config)?;
    if let Some(level) = args.verbosity {
        config.logging.verbosity = level;
    }
    config.validate()?;
    init_logging(config.logging.verbosity, config.logging.json);
    if created {
        tracing::info!(path = %args.config, "Wrote default configuration");
    }

    let token = config.load_credential()?;
    let client = SpaceTradersClient::with_base_url(&config.api.base_url)?;

    if let Err(e) = run(&client, &token, args.command).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(
    client: &SpaceTradersClient,
    token: &str,
    command: Command,
) -> Result<(), Box<dyn std::error::Error>> {
    let navigator = FleetNavigator::new(client);

    match command {
        Command::Agent => {
            let agent = client.get_agent(token).await?;
            println!("Symbol: {}", agent.symbol);
            println!("Headquarters: {}", agent.headquarters);
            println!("Credits: {}", agent.credits);
            println!("Ships: {}", agent.ship_count);
        }
        Command::Ships => {
            for ship in client.get_ships(token).await? {
                println!(
                    "{}  ⛽{}/{}  at {}  cargo {}/{}  {}",
                    ship.symbol,
                    ship.fuel.current,
                    ship.fuel.capacity,
                    ship.nav.waypoint_symbol,
                    ship.cargo.units,
                    ship.cargo.capacity,
                    ship.nav.status
                );
            }
        }
        Command::Ship { symbol } => {
            let ship = client.get_ship(token, &symbol).await?;
            println!("{}", ship.symbol);
            println!("Location: {}", ship.nav.waypoint_symbol);
            print_nav(&describe_nav_status(&ship));
            println!("Fuel: {}/{}", ship.fuel.current, ship.fuel.capacity);
            println!("Cargo: {}/{}", ship.cargo.units, ship.cargo.capacity);
            for item in &ship.cargo.inventory {
                println!("  {:<30} {}", item.name, item.units);
            }
        }
        Command::System { symbol } => {
            let system = client.get_system(token, &symbol).await?;
            println!("System: {} ({})", system.symbol, system.system_type);
            println!("Waypoints: {}", system.waypoints.len());
            for waypoint in &system.waypoints {
                println!("  {:<14} {:<20} ({},{})", waypoint.symbol, waypoint.waypoint_type, waypoint.x, waypoint.y);
            }
        }
        Command::Waypoints { system, trait_filter } => {
            for waypoint in client.get_waypoints(token, &system, trait_filter.as_deref()).await? {
                let traits: Vec<&str> = waypoint.traits.iter().map(|t| t.name.as_str()).collect();
                println!(
                    "{:<14} {:<20} ({},{})  {}",
                    waypoint.symbol,
                    waypoint.waypoint_type,
                    waypoint.x,
                    waypoint.y,
                    traits.join(", ")
                );
            }
        }
        Command::Contracts => {
            for contract in client.get_contracts(token).await? {
                println!(
                    "{}  {}  accepted={} fulfilled={}  expires {}",
                    contract.id,
                    contract.contract_type,
                    contract.accepted,
                    contract.fulfilled,
                    contract.expiration
                );
                for delivery in &contract.terms.deliver {
                    println!(
                        "  {} {}/{} → {}",
                        delivery.trade_symbol,
                        delivery.units_fulfilled,
                        delivery.units_required,
                        delivery.destination_symbol
                    );
                }
            }
        }
        Command::Reachable { ship } => {
            let ship = client.get_ship(token, &ship).await?;
            let system = client.get_system(token, &ship.nav.system_symbol).await?;
            let ranking = rank_reachable_waypoints(&ship, &system.waypoints);

            println!("Fuel: {}/{}", ship.fuel.current, ship.fuel.capacity);
            println!("Reachable:");
            print_ranked(&ranking.reachable);
            println!("Out of range:");
            print_ranked(&ranking.unreachable);
        }
        Command::Launch { ship } => {
            let outcome = navigator.launch(token, &ship).await?;
            report(&navigator, token, &outcome).await?;
        }
        Command::Dock { ship } => {
            let outcome = navigator.dock(token, &ship).await?;
            report(&navigator, token, &outcome).await?;
        }
        Command::Navigate { ship, waypoint } => {
            let outcome = navigator.navigate(token, &ship, &waypoint).await?;
            report(&navigator, token, &outcome).await?;
        }
    }

    Ok(())
}

fn print_nav(display: &NavDisplay) {
    match display.action {
        Some(action) => println!("Currently: {} (available: {})", display.status, action),
        None => println!("Currently: {}", display.status),
    }
}

fn print_ranked<W: Positioned>(ranked: &[RankedWaypoint<'_, W>]) {
    for entry in ranked {
        println!("  {}", entry);
    }
}

async fn report(
    navigator: &FleetNavigator<'_, SpaceTradersClient>,
    token: &str,
    outcome: &TransitionOutcome,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}: {}", outcome.action, outcome.success);
    let display = navigator.nav_display(token, &outcome.refresh.ship_symbol).await?;
    print_nav(&display);
    Ok(())
}
