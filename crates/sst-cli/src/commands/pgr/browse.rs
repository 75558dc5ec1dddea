use std::sync::Arc;
use std::time::Duration;

use sst_core::enums::PgrStatus;
use sst_search::{Debouncer, ListPhase, Listing, PgrListSource};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_page;

const NAV_CAPACITY: usize = 64;

/// A line read from stdin while browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseInput {
    Search(String),
    Next,
    Previous,
}

impl BrowseInput {
    fn parse(line: &str) -> Self {
        match line.trim() {
            ">" => Self::Next,
            "<" => Self::Previous,
            text => Self::Search(text.to_string()),
        }
    }
}

/// Sending side: search text is debounced, page moves are not.
struct BrowseInputs {
    search: Debouncer<String>,
    nav: mpsc::Sender<BrowseInput>,
}

impl BrowseInputs {
    /// Returns `false` once the receiving side is gone.
    async fn send(&self, input: BrowseInput) -> bool {
        match input {
            BrowseInput::Search(text) => self.search.push(text).await,
            step => self.nav.send(step).await.is_ok(),
        }
    }
}

/// Receiving side: page moves as they arrive, search text once settled.
struct BrowseEvents {
    settled: mpsc::Receiver<String>,
    nav: mpsc::Receiver<BrowseInput>,
    settled_open: bool,
    nav_open: bool,
}

impl BrowseEvents {
    /// Next input to apply; `None` after both sides closed.
    async fn next(&mut self) -> Option<BrowseInput> {
        loop {
            tokio::select! {
                biased;
                step = self.nav.recv(), if self.nav_open => match step {
                    Some(step) => return Some(step),
                    None => self.nav_open = false,
                },
                text = self.settled.recv(), if self.settled_open => match text {
                    Some(text) => return Some(BrowseInput::Search(text)),
                    None => self.settled_open = false,
                },
                else => return None,
            }
        }
    }
}

fn browse_channel(delay: Duration) -> (BrowseInputs, BrowseEvents, JoinHandle<()>) {
    let (search, settled, worker) = Debouncer::spawn(delay);
    let (nav_tx, nav_rx) = mpsc::channel(NAV_CAPACITY);
    (
        BrowseInputs { search, nav: nav_tx },
        BrowseEvents {
            settled,
            nav: nav_rx,
            settled_open: true,
            nav_open: true,
        },
        worker,
    )
}

/// Interactive PGR list: each stdin line becomes the search filter once
/// typing settles; `>` and `<` move between pages right away.
pub async fn run(
    status: Option<PgrStatus>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let source = Arc::new(PgrListSource::new(Arc::clone(&ctx.client)));
    let mut listing = Listing::new(source, ctx.page_size());

    let ticket = if status.is_some() {
        listing.set_status(status)
    } else {
        listing.reload()
    };
    listing.run(ticket).await;
    show(&listing, flags)?;

    let (inputs, mut events, worker) = browse_channel(ctx.config.search.debounce());
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if !inputs.send(BrowseInput::parse(&line)).await {
                break;
            }
        }
    });

    while let Some(input) = events.next().await {
        let ticket = match input {
            BrowseInput::Search(text) => listing.set_search(&text),
            BrowseInput::Next => match listing.next_page() {
                Ok(ticket) => ticket,
                Err(error) => {
                    tracing::warn!("{error}");
                    continue;
                }
            },
            BrowseInput::Previous => match listing.previous_page() {
                Ok(ticket) => ticket,
                Err(error) => {
                    tracing::warn!("{error}");
                    continue;
                }
            },
        };
        listing.run(ticket).await;
        show(&listing, flags)?;
    }

    reader.await?;
    worker.await?;
    Ok(())
}

fn show(listing: &Listing<PgrListSource>, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let ListPhase::Error { message } = listing.phase() {
        eprintln!("Mantendo a lista anterior: {message}");
    }
    output_page(listing.page(), flags.format)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tokio::time::sleep;

    use super::{BrowseEvents, BrowseInput, browse_channel};

    async fn drain(events: &mut BrowseEvents) -> Vec<BrowseInput> {
        let mut seen = Vec::new();
        while let Some(input) = events.next().await {
            seen.push(input);
        }
        seen
    }

    #[test]
    fn arrows_navigate_and_text_searches() {
        assert_eq!(BrowseInput::parse(" > "), BrowseInput::Next);
        assert_eq!(BrowseInput::parse("<"), BrowseInput::Previous);
        assert_eq!(
            BrowseInput::parse("galpão"),
            BrowseInput::Search("galpão".to_string())
        );
    }

    #[test]
    fn blank_line_clears_the_filter() {
        assert_eq!(BrowseInput::parse("   "), BrowseInput::Search(String::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn page_moves_are_never_collapsed() {
        let (inputs, mut events, _worker) = browse_channel(Duration::from_millis(500));

        assert!(inputs.send(BrowseInput::Next).await);
        sleep(Duration::from_millis(100)).await;
        assert!(inputs.send(BrowseInput::Next).await);
        sleep(Duration::from_millis(100)).await;
        assert!(inputs.send(BrowseInput::Search("galpao".to_string())).await);
        drop(inputs);

        assert_eq!(
            drain(&mut events).await,
            vec![
                BrowseInput::Next,
                BrowseInput::Next,
                BrowseInput::Search("galpao".to_string()),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn search_bursts_still_collapse() {
        let (inputs, mut events, _worker) = browse_channel(Duration::from_millis(500));

        assert!(inputs.send(BrowseInput::Search("ga".to_string())).await);
        sleep(Duration::from_millis(100)).await;
        assert!(inputs.send(BrowseInput::Previous).await);
        assert!(inputs.send(BrowseInput::Search("galpao".to_string())).await);
        drop(inputs);

        assert_eq!(
            drain(&mut events).await,
            vec![
                BrowseInput::Previous,
                BrowseInput::Search("galpao".to_string()),
            ]
        );
    }
}
