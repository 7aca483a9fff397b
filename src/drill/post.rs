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

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use maud::html;
use serde::Deserialize;

use crate::deck::Deck;
use crate::drill::state::MutableState;
use crate::drill::state::ServerState;
use crate::drill::template::page_template;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::session::Notification;
use crate::types::rating::Rating;

#[derive(Debug, Deserialize, PartialEq, Eq)]
enum Action {
    Reveal,
    Bad,
    Meh,
    Good,
    Restart,
    Quit,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Response {
    if form.action == Action::Quit {
        return match quit(&state) {
            Ok(()) => {
                let body = html! {
                    div.finished {
                        h1 { "Session ended. You can close this window." }
                    }
                };
                Html(page_template(body).into_string()).into_response()
            }
            Err(e) => {
                log::error!("{e}");
                Redirect::to("/").into_response()
            }
        };
    }
    if let Err(e) = action_handler(&state, form.action) {
        log::error!("{e}");
    }
    Redirect::to("/").into_response()
}

fn action_handler(state: &ServerState, action: Action) -> Fallible<()> {
    let mut mutable = state
        .mutable
        .lock()
        .map_err(|_| ErrorReport::new("session state is poisoned."))?;
    match action {
        Action::Reveal => {
            mutable.session.reveal_answer();
        }
        Action::Bad => rate(&mut mutable, Rating::Bad),
        Action::Meh => rate(&mut mutable, Rating::Meh),
        Action::Good => rate(&mut mutable, Rating::Good),
        Action::Restart => {
            log::debug!("Restarting with a fresh deck.");
            mutable.session.restart(Deck::shuffled());
            mutable.end_of_deck = false;
        }
        Action::Quit => {}
    }
    Ok(())
}

fn rate(mutable: &mut MutableState, rating: Rating) {
    match mutable.session.rate(rating) {
        Some(Notification::EndOfDeck) => {
            mutable.end_of_deck = true;
        }
        None => {}
    }
}

fn quit(state: &ServerState) -> Fallible<()> {
    let mut shutdown_tx = state
        .shutdown_tx
        .lock()
        .map_err(|_| ErrorReport::new("shutdown channel is poisoned."))?;
    if let Some(tx) = shutdown_tx.take() {
        log::debug!("Quit requested.");
        let _ = tx.send(());
    }
    Ok(())
}
