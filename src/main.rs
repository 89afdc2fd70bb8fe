use clap::Parser;
use clap::Subcommand;
use placeseek_init::init;
use placeseek_places_api::category_id::parse_category_list;
use placeseek_places_api::client::PlacesClient;
use placeseek_places_api::config::PlacesConfig;
use placeseek_places_api::issue::issue_search;
use placeseek_places_api::lat_lng::LatLng;
use placeseek_places_api::search_places::DEFAULT_ERRAND_RADIUS;
use placeseek_places_api::search_request::SearchRequest;
use placeseek_places_api::sort_order::SortOrder;
use tracing::info;

/// Search the Foursquare Places API and print the raw response.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Search centre as `lat,lng`
    #[arg(long)]
    ll: Option<LatLng>,
    /// Search radius in meters
    #[arg(long)]
    radius: Option<u32>,
    /// Comma separated category codes
    #[arg(long)]
    categories: Option<String>,
    /// Maximum number of results
    #[arg(long)]
    limit: Option<u32>,
    /// RELEVANCE, RATING, DISTANCE or POPULARITY
    #[arg(long)]
    sort: Option<SortOrder>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find places for an errand and print them as JSON
    Errand {
        /// e.g. "dinner" or "grocery shopping"
        task_type: String,
        /// grocery, pharmacy, restaurant, cafe, bank, gas_station, shopping or gym
        category: String,
    },
    /// Print details for one place as JSON
    Details { id: String },
    /// Turn free text such as "meds, then coffee" into an ordered route
    Plan { input: String },
}

impl Cli {
    fn apply(&self, config: &mut PlacesConfig) -> eyre::Result<()> {
        if let Some(ll) = self.ll {
            config.coordinates = ll;
        }
        if let Some(radius) = self.radius {
            config.radius = radius;
        }
        if let Some(categories) = &self.categories {
            config.categories = parse_category_list(categories);
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(sort) = self.sort {
            config.sort = sort;
        }
        config.validate()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    init()?;
    let cli = Cli::parse();

    let mut config = PlacesConfig::from_env()?;
    cli.apply(&mut config)?;
    let client = PlacesClient::from_config(config);

    match cli.command {
        None => {
            let request = SearchRequest::from_config(client.config())?;
            let status = issue_search(&client, &request, &mut std::io::stdout().lock()).await?;
            info!("Done ({})", status);
        }
        Some(Command::Errand {
            task_type,
            category,
        }) => {
            let at = client.config().coordinates;
            let radius = cli.radius.unwrap_or(DEFAULT_ERRAND_RADIUS);
            let places = client
                .search_places(&task_type, &category, at, radius)
                .await?;
            println!("{}", serde_json::to_string_pretty(&places)?);
        }
        Some(Command::Details { id }) => {
            let place = client.get_place_details(&id).await?;
            println!("{}", serde_json::to_string_pretty(&place)?);
        }
        Some(Command::Plan { input }) => {
            let at = client.config().coordinates;
            let radius = cli.radius.unwrap_or(DEFAULT_ERRAND_RADIUS);
            let plan = client.plan_errands(&input, at, radius).await?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}
