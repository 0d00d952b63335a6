//! REPL (Read-Eval-Print Loop) for browsing quotes

use crate::ConsoleFormatter;
use crate::share::ShareLinks;
use colored::Colorize;
use quotecycle_application::{BrowseQuotesUseCase, SelectionError, ShownQuote};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Toggle(String),
    Clear,
    List,
    Share,
    Help,
    Quit,
    Unknown(String),
}

impl BrowseCommand {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (head, rest) = match input.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (input, ""),
        };

        match (head, rest) {
            ("" | "n" | "next", "") => BrowseCommand::Next,
            ("c" | "category", "") | ("clear", "") => BrowseCommand::Clear,
            ("c" | "category", label) => BrowseCommand::Toggle(label.to_string()),
            ("l" | "list", "") => BrowseCommand::List,
            ("s" | "share", "") => BrowseCommand::Share,
            ("h" | "help" | "?", "") => BrowseCommand::Help,
            ("q" | "quit" | "exit", "") => BrowseCommand::Quit,
            _ => BrowseCommand::Unknown(input.to_string()),
        }
    }
}

/// Interactive quote browser
pub struct BrowseRepl {
    use_case: BrowseQuotesUseCase,
    links: ShareLinks,
    current: Option<ShownQuote>,
}

impl BrowseRepl {
    /// Create a new BrowseRepl
    pub fn new(use_case: BrowseQuotesUseCase) -> Self {
        Self {
            use_case,
            links: ShareLinks::default(),
            current: None,
        }
    }

    /// Set the share links used by the `share` command
    pub fn with_links(mut self, links: ShareLinks) -> Self {
        self.links = links;
        self
    }

    /// Run the interactive REPL, starting from `initial_id` if given
    pub async fn run(&mut self, initial_id: Option<&str>) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("quotecycle").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        let first = self.use_case.open(initial_id).await;
        self.show(first);

        loop {
            let readline = rl.readline(&self.prompt());
            match readline {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    if !self.handle(BrowseCommand::parse(&line)).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        println!("Bye!");
        Ok(())
    }

    /// Execute one command. Returns `false` when the loop should stop.
    async fn handle(&mut self, command: BrowseCommand) -> bool {
        debug!("Browse command: {:?}", command);
        match command {
            BrowseCommand::Next => {
                let result = self.use_case.skip().await;
                self.show(result);
            }
            BrowseCommand::Toggle(label) => {
                let result = self.use_case.toggle_category(&label).await;
                self.show(result);
            }
            BrowseCommand::Clear => {
                let result = self.use_case.clear_category().await;
                self.show(result);
            }
            BrowseCommand::List => match self.use_case.categories().await {
                Ok(entries) => print!("{}", ConsoleFormatter::format_categories(&entries)),
                Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
            },
            BrowseCommand::Share => self.print_share(),
            BrowseCommand::Help => self.print_help(),
            BrowseCommand::Quit => return false,
            BrowseCommand::Unknown(input) => {
                println!("Unknown command: {} (type 'h' for help)", input);
            }
        }
        true
    }

    fn show(&mut self, result: Result<ShownQuote, SelectionError>) {
        match result {
            Ok(shown) => {
                let active = self.use_case.engine().active_category();
                println!();
                print!("{}", ConsoleFormatter::format_shown(&shown, active.as_deref()));
                if let Some(link) = self.links.permalink(&shown.quote) {
                    println!("  {}", link.as_str().dimmed());
                }
                println!();
                self.current = Some(shown);
            }
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }

    fn print_share(&self) {
        let Some(shown) = &self.current else {
            println!("Nothing to share yet");
            return;
        };

        println!("{}", ConsoleFormatter::format_plain(&shown.quote));
        if let Some(link) = self.links.permalink(&shown.quote) {
            println!("Link:  {}", link);
        }
        if let Ok(tweet) = self.links.tweet_intent(&shown.quote) {
            println!("Tweet: {}", tweet);
        }
        if let Some(pin) = self.links.pin_intent(&shown.quote) {
            println!("Pin:   {}", pin);
        }
    }

    fn prompt(&self) -> String {
        match self.use_case.engine().active_category() {
            Some(category) => format!("[{}] > ", category),
            None => "> ".to_string(),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("+============================================================+");
        println!("|  quotecycle - press Enter for the next quote, 'h' for help |");
        println!("+============================================================+");
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  Enter, n        Next quote");
        println!("  c <category>    Toggle a category filter");
        println!("  c, clear        Clear the category filter");
        println!("  l               List categories");
        println!("  s               Share the current quote");
        println!("  q               Quit");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quotecycle_application::{
        CorpusLoader, QuoteSource, QuoteSourceError, SelectionEngine,
    };
    use quotecycle_domain::{FirstIndex, Quote};
    use std::sync::Arc;

    #[test]
    fn test_parse_commands() {
        assert_eq!(BrowseCommand::parse(""), BrowseCommand::Next);
        assert_eq!(BrowseCommand::parse("  n "), BrowseCommand::Next);
        assert_eq!(
            BrowseCommand::parse("c stoic"),
            BrowseCommand::Toggle("stoic".to_string())
        );
        assert_eq!(
            BrowseCommand::parse("category  self improvement "),
            BrowseCommand::Toggle("self improvement".to_string())
        );
        assert_eq!(BrowseCommand::parse("c"), BrowseCommand::Clear);
        assert_eq!(BrowseCommand::parse("clear"), BrowseCommand::Clear);
        assert_eq!(BrowseCommand::parse("l"), BrowseCommand::List);
        assert_eq!(BrowseCommand::parse("share"), BrowseCommand::Share);
        assert_eq!(BrowseCommand::parse("?"), BrowseCommand::Help);
        assert_eq!(BrowseCommand::parse("exit"), BrowseCommand::Quit);
        assert_eq!(
            BrowseCommand::parse("n 3"),
            BrowseCommand::Unknown("n 3".to_string())
        );
    }

    struct StaticSource;

    #[async_trait]
    impl QuoteSource for StaticSource {
        async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteSourceError> {
            Ok(vec![
                Quote::new("a", 1, "A", "x").with_category("stoic"),
                Quote::new("b", 2, "B", "y"),
            ])
        }

        fn location(&self) -> String {
            "static".to_string()
        }
    }

    fn repl() -> BrowseRepl {
        let loader = Arc::new(CorpusLoader::new(Arc::new(StaticSource)));
        let engine = Arc::new(SelectionEngine::new(loader, FirstIndex));
        BrowseRepl::new(BrowseQuotesUseCase::new(engine))
    }

    #[tokio::test]
    async fn test_handle_toggle_updates_prompt_and_current() {
        colored::control::set_override(false);
        let mut repl = repl();

        assert!(repl.handle(BrowseCommand::Toggle("stoic".to_string())).await);
        assert_eq!(repl.prompt(), "[stoic] > ");
        assert_eq!(repl.current.as_ref().unwrap().quote.id.as_str(), "a");

        assert!(repl.handle(BrowseCommand::Clear).await);
        assert_eq!(repl.prompt(), "> ");
    }

    #[tokio::test]
    async fn test_handle_quit_stops_loop() {
        let mut repl = repl();
        assert!(!repl.handle(BrowseCommand::Quit).await);
    }
}
