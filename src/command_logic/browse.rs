use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::constants::{Message, BROWSE_HELP, LINK_COPIED};
use crate::controller::{SearchController, SearchState};
use crate::desktop::Desktop;
use crate::errors::AppError;
use crate::view;

/// One line of user input
#[derive(Debug, PartialEq)]
pub enum BrowseEvent {
    /// New search text
    Type(String),
    Tag(String),
    Copy(usize),
    Open(usize),
    Clear,
    Wait,
    Quit,
    Unknown(String),
}

impl BrowseEvent {
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return BrowseEvent::Type(line.to_string());
        };
        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (command, ""),
        };
        match (name, argument) {
            ("tag", tag) if !tag.is_empty() => BrowseEvent::Tag(tag.to_string()),
            ("copy", number) => number
                .parse()
                .map(BrowseEvent::Copy)
                .unwrap_or_else(|_| BrowseEvent::Unknown(line.to_string())),
            ("open", number) => number
                .parse()
                .map(BrowseEvent::Open)
                .unwrap_or_else(|_| BrowseEvent::Unknown(line.to_string())),
            ("clear", "") => BrowseEvent::Clear,
            ("wait", "") => BrowseEvent::Wait,
            ("quit", "") | ("q", "") => BrowseEvent::Quit,
            _ => BrowseEvent::Unknown(line.to_string()),
        }
    }
}

fn write_page<W: Write>(output: &mut W, state: &SearchState) -> Result<(), AppError> {
    writeln!(output, "{}", view::render_page(state))?;
    output.flush()?;
    Ok(())
}

/// Url of the 1-based card `number` on the current page
fn card_url(state: &SearchState, number: usize) -> Result<String, AppError> {
    number
        .checked_sub(1)
        .and_then(|index| state.trips.get(index))
        .map(|trip| trip.url.clone())
        .ok_or(AppError::CardNotFound(number))
}

/// Interactive search page.
///
/// Every state change re-renders the page. End of input waits for pending
/// searches and prints the final page, `:quit` leaves at once.
pub async fn run_browse<R, W, D>(
    controller: &mut SearchController,
    input: R,
    mut output: W,
    desktop: &D,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    D: Desktop,
{
    let mut receiver = controller.subscribe();
    let mut lines = input.lines();

    writeln!(output, "{BROWSE_HELP}")?;
    controller.mount();

    loop {
        tokio::select! {
            changed = receiver.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = receiver.borrow_and_update().clone();
                write_page(&mut output, &state)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match BrowseEvent::parse(&line) {
                    BrowseEvent::Type(text) => controller.set_search_query(text),
                    BrowseEvent::Clear => controller.set_search_query(String::new()),
                    BrowseEvent::Tag(tag) => {
                        controller.click_tag(&tag);
                    }
                    BrowseEvent::Copy(number) => {
                        match card_url(&controller.state(), number) {
                            Ok(url) if url.is_empty() => {}
                            Ok(url) => match desktop.copy_text(&url).await {
                                Ok(()) => writeln!(output, "{LINK_COPIED}")?,
                                Err(e) => tracing::error!(error = %e, "Failed to copy"),
                            },
                            Err(e) => writeln!(output, "{}", Message::Failed(e.to_string()).to_formatted_string())?,
                        }
                    }
                    BrowseEvent::Open(number) => {
                        match card_url(&controller.state(), number) {
                            Ok(url) if url.is_empty() => {}
                            Ok(url) => {
                                if let Err(e) = desktop.open_url(&url).await {
                                    tracing::error!(error = %e, url, "Failed to open");
                                }
                            }
                            Err(e) => writeln!(output, "{}", Message::Failed(e.to_string()).to_formatted_string())?,
                        }
                    }
                    BrowseEvent::Wait => {
                        controller.settle().await;
                        write_page(&mut output, &receiver.borrow_and_update().clone())?;
                    }
                    BrowseEvent::Quit => return Ok(()),
                    BrowseEvent::Unknown(command) => {
                        writeln!(output, "{}", Message::UnknownCommand(command).to_formatted_string())?;
                    }
                }
            }
        }
    }

    controller.settle().await;
    write_page(&mut output, &controller.state())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external_api::trips_api::models::trip::Trip;
    use crate::external_api::trips_api::TripsApi;
    use mockito::{Server, ServerGuard};
    use rstest::rstest;
    use std::cell::RefCell;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingDesktop {
        copied: RefCell<Vec<String>>,
        opened: RefCell<Vec<String>>,
        broken: bool,
    }

    impl Desktop for RecordingDesktop {
        async fn copy_text(&self, text: &str) -> Result<(), AppError> {
            if self.broken {
                return Err(AppError::NoClipboardTool("none".to_string()));
            }
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }

        async fn open_url(&self, url: &str) -> Result<(), AppError> {
            if self.broken {
                return Err(AppError::NoBrowserOpener("none".to_string()));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    async fn browse(server: &ServerGuard, script: &str, desktop: &RecordingDesktop) -> (String, SearchController) {
        let mut controller =
            SearchController::new(TripsApi::mock(&server.url()), Duration::from_millis(50));
        let mut output = Vec::<u8>::new();
        run_browse(&mut controller, script.as_bytes(), &mut output, desktop)
            .await
            .unwrap();
        (String::from_utf8(output).unwrap(), controller)
    }

    #[rstest]
    #[case("sea", BrowseEvent::Type("sea".to_string()))]
    #[case("", BrowseEvent::Type(String::new()))]
    #[case(" sea ", BrowseEvent::Type(" sea ".to_string()))]
    #[case(":tag island", BrowseEvent::Tag("island".to_string()))]
    #[case(":tag  hot spring ", BrowseEvent::Tag("hot spring".to_string()))]
    #[case(":tag", BrowseEvent::Unknown(":tag".to_string()))]
    #[case(":copy 2", BrowseEvent::Copy(2))]
    #[case(":copy two", BrowseEvent::Unknown(":copy two".to_string()))]
    #[case(":open 1", BrowseEvent::Open(1))]
    #[case(":clear", BrowseEvent::Clear)]
    #[case(":wait", BrowseEvent::Wait)]
    #[case(":quit", BrowseEvent::Quit)]
    #[case(":q", BrowseEvent::Quit)]
    #[case(":dance", BrowseEvent::Unknown(":dance".to_string()))]
    fn test_parse_event(#[case] line: &str, #[case] expected: BrowseEvent) {
        assert_eq!(BrowseEvent::parse(line), expected);
    }

    #[test]
    fn test_card_url() {
        let state = SearchState {
            trips: vec![Trip::new_test(1, "Koh Lipe", &[])],
            ..SearchState::default()
        };
        assert_eq!(card_url(&state, 1).unwrap(), "https://www.example.com/trips/1");
        assert!(matches!(card_url(&state, 0), Err(AppError::CardNotFound(0))));
        assert!(matches!(card_url(&state, 2), Err(AppError::CardNotFound(2))));
    }

    #[tokio::test]
    async fn test_type_wait_copy_and_open() {
        let mut server = Server::new_async().await;
        let all = vec![Trip::new_test(1, "Koh Lipe", &["island"])];
        let sea = vec![Trip::new_test(2, "Pattaya", &["sea"])];
        let mock_all = TripsApi::mock_get_trips(&mut server, "", &all, 1).await;
        let mock_sea = TripsApi::mock_get_trips(&mut server, "sea", &sea, 1).await;

        let desktop = RecordingDesktop::default();
        let (output, controller) = browse(&server, ":wait\nsea\n:wait\n:copy 1\n:open 1\n", &desktop).await;

        assert!(output.starts_with(BROWSE_HELP));
        assert!(output.contains("[1] Pattaya (#2)"));
        assert!(output.contains(LINK_COPIED));
        assert_eq!(*desktop.copied.borrow(), vec!["https://www.example.com/trips/2"]);
        assert_eq!(*desktop.opened.borrow(), vec!["https://www.example.com/trips/2"]);
        assert_eq!(controller.state().trips, sea);
        mock_all.assert_async().await;
        mock_sea.assert_async().await;
    }

    #[tokio::test]
    async fn test_tag_clicks_end_of_input_settles() {
        let mut server = Server::new_async().await;
        let _mock_all = TripsApi::mock_get_trips(&mut server, "", &[], 1).await;
        let mock_island = TripsApi::mock_get_trips(&mut server, "island", &[], 1).await;

        let desktop = RecordingDesktop::default();
        let (output, controller) = browse(&server, ":tag island\n:tag island\n", &desktop).await;

        assert_eq!(controller.state().search_query, "island");
        assert!(output.trim_end().ends_with("No attractions found"));
        assert!(output.contains("Search attractions: island"));
        mock_island.assert_async().await;
    }

    #[tokio::test]
    async fn test_quit_skips_pending_search() {
        let mut server = Server::new_async().await;
        let mock_sea = TripsApi::mock_get_trips(&mut server, "sea", &[], 0).await;

        let desktop = RecordingDesktop::default();
        let (_, controller) = browse(&server, "sea\n:quit\nmore text\n", &desktop).await;
        assert_eq!(controller.state().search_query, "sea");
        drop(controller);

        tokio::time::sleep(Duration::from_millis(150)).await;
        mock_sea.assert_async().await;
    }

    #[tokio::test]
    async fn test_copy_missing_card() {
        let mut server = Server::new_async().await;
        let _mock_all = TripsApi::mock_get_trips(&mut server, "", &[], 1).await;

        let desktop = RecordingDesktop::default();
        let (output, _) = browse(&server, ":wait\n:copy 5\n", &desktop).await;
        assert!(output.contains("Failed: There is no card with number 5"));
        assert!(desktop.copied.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_desktop_failure_is_ignored() {
        let mut server = Server::new_async().await;
        let all = vec![Trip::new_test(1, "Koh Lipe", &["island"])];
        let _mock_all = TripsApi::mock_get_trips(&mut server, "", &all, 1).await;

        let desktop = RecordingDesktop { broken: true, ..RecordingDesktop::default() };
        let (output, _) = browse(&server, ":wait\n:copy 1\n:open 1\n", &desktop).await;
        assert!(!output.contains(LINK_COPIED));
        assert!(output.contains("[1] Koh Lipe (#1)"));
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let server = Server::new_async().await;
        let desktop = RecordingDesktop::default();
        let (output, _) = browse(&server, ":dance\n", &desktop).await;
        assert!(output.contains("Unknown command ':dance'."));
    }
}
