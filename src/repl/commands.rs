//! REPL commands and per-session pagination state

use std::io::Write;

use tracing::debug;

use crate::client::PokeApiClient;
use crate::error::ReplError;
use crate::models::LocationAreaPage;

/// Commands understood by the Pokedex prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 4] = [Command::Help, Command::Exit, Command::Map, Command::MapBack];

    /// Looks up a command by its (already lower-cased) name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the names of the next 20 location areas",
            Command::MapBack => "Displays the names of the previous 20 location areas",
        }
    }
}

/// What the prompt loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// State carried between commands of one interactive session.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    next: Option<String>,
    previous: Option<String>,
}

impl Session {
    /// Starts a session positioned before the first location-area page.
    pub fn new(client: PokeApiClient) -> Self {
        let next = Some(client.first_location_area_url());
        Self {
            client,
            next,
            previous: None,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    /// Runs `command`, writing its output to `out`.
    ///
    /// A failed fetch leaves the pagination position unchanged.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<Outcome, ReplError> {
        match command {
            Command::Help => {
                writeln!(out, "Welcome to the Pokedex!")?;
                writeln!(out, "Usage:")?;
                writeln!(out)?;
                for command in Command::ALL {
                    writeln!(out, "{}: {}", command.name(), command.description())?;
                }
            }
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Outcome::Exit);
            }
            Command::Map => match self.next.clone() {
                Some(url) => self.show_page(&url, out).await?,
                None => writeln!(out, "you're on the last page")?,
            },
            Command::MapBack => match self.previous.clone() {
                Some(url) => self.show_page(&url, out).await?,
                None => writeln!(out, "you're on the first page")?,
            },
        }
        Ok(Outcome::Continue)
    }

    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<(), ReplError> {
        let page: LocationAreaPage = self.client.location_areas(url).await?;
        debug!(url, areas = page.results.len(), "Showing location areas");

        self.next = page.next.clone();
        self.previous = page.previous.clone();

        for name in page.names() {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ExpiringCache;
    use std::sync::Arc;
    use std::time::Duration;

    const BASE: &str = "http://127.0.0.1:9";

    fn page_json(names: &[&str], next: Option<&str>, previous: Option<&str>) -> Vec<u8> {
        let results: Vec<_> = names
            .iter()
            .map(|name| serde_json::json!({"name": name, "url": format!("{}/location-area/{}/", BASE, name)}))
            .collect();
        serde_json::json!({"count": 40, "next": next, "previous": previous, "results": results})
            .to_string()
            .into_bytes()
    }

    fn offline_session() -> Session {
        let cache = Arc::new(ExpiringCache::new(Duration::from_secs(60)).unwrap());
        Session::new(PokeApiClient::new(BASE, cache))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
        assert_eq!(Command::parse("map"), Some(Command::Map));
        assert_eq!(Command::parse("mapb"), Some(Command::MapBack));
        assert_eq!(Command::parse("catch"), None);
        assert_eq!(Command::parse("HELP"), None);
    }

    #[tokio::test]
    async fn test_help_lists_every_command() {
        let mut session = offline_session();
        let mut out = Vec::new();

        let outcome = session.execute(Command::Help, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert!(text.starts_with("Welcome to the Pokedex!"));
        for command in Command::ALL {
            assert!(text.contains(&format!("{}: ", command.name())));
        }
    }

    #[tokio::test]
    async fn test_exit() {
        let mut session = offline_session();
        let mut out = Vec::new();

        let outcome = session.execute(Command::Exit, &mut out).await.unwrap();

        assert_eq!(outcome, Outcome::Exit);
        assert_eq!(String::from_utf8(out).unwrap(), "Closing the Pokedex... Goodbye!\n");
    }

    #[tokio::test]
    async fn test_mapb_on_first_page() {
        let mut session = offline_session();
        let mut out = Vec::new();

        session.execute(Command::MapBack, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "you're on the first page\n");
    }

    #[tokio::test]
    async fn test_map_pages_forward_and_back() {
        let mut session = offline_session();
        let first = session.client().first_location_area_url();
        let second = format!("{}/location-area?offset=20&limit=20", BASE);
        let cache = Arc::clone(session.client().cache());
        cache.put(first.clone(), page_json(&["a", "b"], Some(second.as_str()), None));
        cache.put(second.clone(), page_json(&["c"], None, Some(first.as_str())));

        let mut out = Vec::new();
        session.execute(Command::Map, &mut out).await.unwrap();
        session.execute(Command::Map, &mut out).await.unwrap();
        session.execute(Command::Map, &mut out).await.unwrap();
        session.execute(Command::MapBack, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a\nb\nc\nyou're on the last page\na\nb\n"
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_position() {
        let mut session = offline_session();
        let mut out = Vec::new();

        let result = session.execute(Command::Map, &mut out).await;
        assert!(matches!(result, Err(ReplError::Client(_))));

        // Seed the page that failed; the retry must ask for the same URL
        let first = session.client().first_location_area_url();
        session
            .client()
            .cache()
            .put(first, page_json(&["retry"], None, None));
        session.execute(Command::Map, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "retry\n");
    }
}
