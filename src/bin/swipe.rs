//! Terminal front end for the swipe card
//!
//! Commands: `p` pass, `m` match, `r <id>` remove a match, `q` quit.

use generalink_match::config::Settings;
use generalink_match::services::RecommendationsClient;
use generalink_match::swipe::{
    self, Browser, FormMethod, Navigation, NavigationLog, RemoveControl, SwipeSession, TextSurface,
};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Browser that asks on the terminal and queues page changes
struct PromptBrowser {
    log: NavigationLog,
}

impl Browser for PromptBrowser {
    fn alert(&mut self, message: &str) {
        eprintln!("! {}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }

    fn navigate(&mut self, url: &str) {
        self.log.navigate(url);
    }

    fn submit_form(&mut self, method: FormMethod, action: &str) {
        self.log.submit_form(method, action);
    }
}

/// Carry out queued navigations; returns whether the page was left
async fn follow(client: &RecommendationsClient, navigations: Vec<Navigation>) -> bool {
    let left = !navigations.is_empty();
    for navigation in navigations {
        match client.execute(&navigation).await {
            Ok(outcome) => match outcome.location {
                Some(location) => println!("-> {} ({})", location, outcome.status),
                None => println!("-> {}", outcome.status),
            },
            Err(e) => tracing::error!("Navigation failed: {}", e),
        }
    }
    left
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let settings = Settings::load()?;
    generalink_match::logging::init(&settings.logging);

    let client = RecommendationsClient::new(
        settings.client.base_url.clone(),
        Duration::from_secs(settings.client.timeout_secs),
    )?;

    let mut surface = TextSurface::new(io::stdout());
    let mut session = SwipeSession::new();
    let mut browser = PromptBrowser {
        log: NavigationLog::new(false),
    };

    swipe::on_page_ready(&mut session, &client, &mut surface).await;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("p"), None) => session.pass(&mut surface),
            (Some("m"), None) => {
                session.match_current(&mut browser);
            }
            (Some("r"), target) => {
                let control = match target {
                    Some(id) => RemoveControl::for_target(id),
                    None => RemoveControl::default(),
                };
                session.remove_match(&control, &mut browser);
            }
            (Some("q"), None) => break,
            (None, _) => continue,
            _ => {
                println!("commands: p (pass), m (match), r <id> (remove match), q (quit)");
                continue;
            }
        }

        // Leaving the page reloads it, which fetches a fresh batch
        if follow(&client, browser.log.take_navigations()).await {
            swipe::on_page_ready(&mut session, &client, &mut surface).await;
        }
    }

    Ok(())
}
