//! Interactive runner for the news flow

use std::process::ExitCode;

use crate::application::news_browser::{BrowseOutcome, BrowserSession, NewsBrowser};
use crate::application::ports::{Geolocator, NewsQuery, NewsSearch};
use crate::domain::location::Location;
use crate::domain::news::BrowseCommand;
use crate::infrastructure::{GnewsClient, IpinfoGeolocator};

use super::app::{get_news_api_key, EXIT_ERROR};
use super::input;
use super::presenter::Presenter;

/// Options for the news flow, after config merging
#[derive(Debug, Clone)]
pub struct NewsOptions {
    /// Explicit location, bypassing auto-detection
    pub location: Option<String>,
    pub lang: String,
    pub country: String,
    pub max_results: u32,
}

/// Run the interactive news browser
pub async fn run_news(options: NewsOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Fail fast before any prompting
    let api_key = match get_news_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.banner("AGORA - Local News Browser");

    let browser = NewsBrowser::new(IpinfoGeolocator::new(), GnewsClient::new(api_key));

    let Some(location) = resolve_location(&browser, options.location.as_deref(), &mut presenter).await
    else {
        presenter.error("No location entered.");
        return ExitCode::from(EXIT_ERROR);
    };

    let query = NewsQuery {
        location: location.clone(),
        lang: options.lang,
        country: options.country,
        max_results: options.max_results,
    };

    presenter.start_spinner(&format!("Searching for news in: {} ...", location));
    let articles = browser.fetch(&query).await;
    if articles.is_empty() {
        presenter.spinner_fail("No news found for this location.");
        return ExitCode::SUCCESS;
    }
    presenter.spinner_success(&format!("Found {} headlines", articles.len()));

    let mut session = BrowserSession::new(articles);

    loop {
        presenter.headline_list(session.articles());
        presenter.info("Choose an article number, 'r' to refresh, 'q' to quit");

        let line = match input::read_line("Your choice: ").await {
            Ok(line) => line,
            Err(e) => {
                presenter.error(&format!("Failed to read input: {}", e));
                break;
            }
        };

        match session.handle(BrowseCommand::parse(&line)) {
            BrowseOutcome::ShowArticle(article) => presenter.article_view(article),
            BrowseOutcome::InvalidNumber => presenter.error("Invalid article number."),
            BrowseOutcome::InvalidInput => presenter.error("Invalid input."),
            BrowseOutcome::Refresh => {
                presenter.start_spinner(&format!("Searching for news in: {} ...", location));
                let refreshed = browser.fetch(&query).await;
                presenter.stop_spinner();
                if !session.replace(refreshed) {
                    presenter.warn("No news found for this location.");
                    break;
                }
            }
            BrowseOutcome::Quit => {
                presenter.output("Thank you! Have a nice day.");
                break;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Resolve the location to search: an explicit flag wins; otherwise offer
/// the auto-detected value for confirmation or override, falling back to
/// free-text entry.
async fn resolve_location<G, N>(
    browser: &NewsBrowser<G, N>,
    explicit: Option<&str>,
    presenter: &mut Presenter,
) -> Option<Location>
where
    G: Geolocator,
    N: NewsSearch,
{
    if let Some(text) = explicit {
        return Location::new(text);
    }

    presenter.start_spinner("Trying to detect your location automatically...");
    let detected = browser.detect_location().await;
    match &detected {
        Some(location) => presenter.spinner_success(&format!("Detected location: {}", location)),
        None => presenter.spinner_fail("Could not detect location."),
    }

    let typed = match detected {
        Some(location) => {
            presenter.info(&format!("Use detected location ({})?", location));
            let reply = input::read_line("Press ENTER to accept or type a new location: ")
                .await
                .ok()?;
            if reply.is_empty() {
                return Some(location);
            }
            reply
        }
        None => {
            presenter
                .info("Enter your locality / area / block (Example: Nayapalli, Bhubaneswar):");
            input::read_line("Your location: ").await.ok()?
        }
    };

    Location::new(&typed)
}
