// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::drill::state::ServerState;
use crate::drill::template::page_template;
use crate::session::Session;
use crate::types::rating::Rating;

/// Rating buttons left to right, with their keyboard shortcuts.
const RATING_BUTTONS: [(Rating, &str); 3] =
    [(Rating::Good, "3"), (Rating::Meh, "2"), (Rating::Bad, "1")];

const END_OF_DECK_NOTICE: &str = "Reached end of deck. Restarting from the beginning.";

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let Ok(mut mutable) = state.mutable.lock() else {
        log::error!("Session state is poisoned.");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("Internal Server Error".to_string()),
        );
    };
    let end_of_deck = std::mem::take(&mut mutable.end_of_deck);
    let body = render_session(&mutable.session, end_of_deck);
    let html = page_template(body);
    (StatusCode::OK, Html(html.into_string()))
}

fn render_session(session: &Session, end_of_deck: bool) -> Markup {
    let progress = if session.deck_len() == 0 {
        "0 / 0".to_string()
    } else {
        format!("{} / {}", session.index() + 1, session.deck_len())
    };
    let reveal_disabled = !session.reveal_enabled();
    let rating_disabled = !session.rating_enabled();
    html! {
        div.root {
            div.card {
                div.header {
                    h1 {
                        "Multiplication Facts"
                    }
                    div.progress {
                        (progress)
                    }
                }
                @if end_of_deck {
                    div.notice {
                        (END_OF_DECK_NOTICE)
                    }
                }
                div.content {
                    div.question {
                        @match session.question() {
                            Some(question) => {
                                span #question { (question) }
                            }
                            None => {
                                span.empty { "No cards." }
                            }
                        }
                    }
                    div.answer {
                        @if let Some(answer) = session.answer() {
                            span #answer { (answer) }
                        }
                    }
                }
                div.controls {
                    form action="/" method="post" {
                        button #reveal type="submit" name="action" value="Reveal"
                            title="Shortcut: space or enter." disabled[reveal_disabled] {
                            "Show Answer"
                        }
                        div.spacer {}
                        div.grades {
                            @for (rating, key) in RATING_BUTTONS {
                                button id=(rating.as_str().to_lowercase()) type="submit" name="action"
                                    value=(rating.as_str()) title=(format!("Shortcut: {key}."))
                                    disabled[rating_disabled]
                                    autofocus[!rating_disabled && rating == Rating::Good] {
                                    (rating.as_str())
                                }
                            }
                        }
                    }
                }
                div.footer {
                    form action="/" method="post" {
                        button #restart type="submit" name="action" value="Restart"
                            title="Reshuffle and start over." {
                            "Restart"
                        }
                        button #quit type="submit" name="action" value="Quit"
                            title="Shortcut: escape." {
                            "Quit"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use tempfile::tempdir;

    use super::*;
    use crate::deck::Deck;
    use crate::error::Fallible;
    use crate::ratings::RatingLog;
    use crate::session::Notification;
    use crate::types::card::Card;

    fn session() -> Fallible<(TempDir, Session)> {
        let dir = tempdir()?;
        let log = RatingLog::in_directory(dir.path());
        let deck = Deck::from_cards(vec![Card::new(3, 4), Card::new(7, 7)]);
        Ok((dir, Session::new(deck, log)))
    }

    #[test]
    fn test_question_only_before_reveal() -> Fallible<()> {
        let (_dir, session) = session()?;
        let html = render_session(&session, false).into_string();
        assert!(html.contains("3 × 4"));
        assert!(html.contains("1 / 2"));
        assert!(!html.contains("id=\"answer\""));
        assert!(!html.contains(END_OF_DECK_NOTICE));
        Ok(())
    }

    #[test]
    fn test_answer_after_reveal() -> Fallible<()> {
        let (_dir, mut session) = session()?;
        session.reveal_answer();
        let html = render_session(&session, false).into_string();
        assert!(html.contains("<span id=\"answer\">12</span>"));
        Ok(())
    }

    #[test]
    fn test_good_is_first_and_focused_after_reveal() -> Fallible<()> {
        let (_dir, mut session) = session()?;
        let html = render_session(&session, false).into_string();
        assert!(!html.contains("autofocus"));

        session.reveal_answer();
        let html = render_session(&session, false).into_string();
        let good = html.find("id=\"good\"").unwrap();
        let meh = html.find("id=\"meh\"").unwrap();
        let bad = html.find("id=\"bad\"").unwrap();
        assert!(good < meh && meh < bad);
        assert_eq!(html.matches("autofocus").count(), 1);
        let focused = &html[good..];
        assert!(focused[..focused.find('>').unwrap()].contains("autofocus"));
        Ok(())
    }

    #[test]
    fn test_end_of_deck_notice() -> Fallible<()> {
        let (_dir, mut session) = session()?;
        session.reveal_answer();
        session.rate(Rating::Good);
        session.reveal_answer();
        assert_eq!(session.rate(Rating::Good), Some(Notification::EndOfDeck));
        let html = render_session(&session, true).into_string();
        assert!(html.contains(END_OF_DECK_NOTICE));
        assert!(html.contains("1 / 2"));
        Ok(())
    }

    #[test]
    fn test_empty_deck() -> Fallible<()> {
        let dir = tempdir()?;
        let log = RatingLog::in_directory(dir.path());
        let session = Session::new(Deck::from_cards(Vec::new()), log);
        let html = render_session(&session, false).into_string();
        assert!(html.contains("No cards."));
        assert!(html.contains("0 / 0"));
        Ok(())
    }
}
