//! Main application state and logic

use std::path::{Path, PathBuf};

use crate::assets::PieceImages;
use crate::bindings::{self, NAVIGATION_BUTTONS};
use crate::board::BoardView;
use crate::dialog::{self, Dialog};
use crate::styles::{Palette, BOARD_SIZE, PANEL_WIDTH};

use iced::widget::{button, center, column, container, horizontal_rule, row, text, vertical_space};
use iced::{keyboard, Element, Length, Subscription, Task, Theme};
use pgn_core::{load_games, Transition, Viewer, ViewerEvent};
use shakmaty::{Color, Position};
use tracing::{error, info};

/// Main application state
pub struct ViewerApp {
    /// Games on display, once a file has been opened
    viewer: Option<Viewer>,
    /// Modal dialog currently shown
    dialog: Option<Dialog>,
    pieces: PieceImages,
    palette: Palette,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // File loading
    OpenFile,
    FileChosen(Option<PathBuf>),

    // Navigation, from buttons and arrow keys
    Viewer(ViewerEvent),

    DismissDialog,
}

impl ViewerApp {
    pub fn new(pieces: PieceImages, palette: Palette) -> (Self, Task<Message>) {
        (
            Self {
                viewer: None,
                dialog: None,
                pieces,
                palette,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        let file = self
            .viewer
            .as_ref()
            .and_then(|viewer| viewer.games().origin())
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned());

        match file {
            Some(name) => format!("Chess PGN Viewer - {}", name),
            None => "Chess PGN Viewer".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(bindings::on_key_press)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFile => Task::perform(pick_pgn_file(), Message::FileChosen),

            Message::FileChosen(Some(path)) => {
                self.open(&path);
                Task::none()
            }

            Message::FileChosen(None) => Task::none(),

            Message::Viewer(event) => {
                // Dialogs are modal: keys pressed behind one are dropped.
                if self.dialog.is_none() {
                    self.dispatch(event);
                }
                Task::none()
            }

            Message::DismissDialog => {
                self.dialog = None;
                Task::none()
            }
        }
    }

    /// Replace the loaded games with the contents of `path`. On failure the
    /// current games stay on display.
    fn open(&mut self, path: &Path) {
        match load_games(path) {
            Ok(games) => {
                info!(path = %path.display(), games = games.len(), "opened PGN file");
                self.viewer = Some(Viewer::new(games));
            }
            Err(err) => {
                error!(path = %path.display(), %err, "failed to open PGN file");
                self.dialog = Some(Dialog::error(
                    "Error",
                    format!("Could not load the file: {}", err),
                ));
            }
        }
    }

    fn dispatch(&mut self, event: ViewerEvent) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };

        if let Transition::Finished(result) = viewer.dispatch(event) {
            if let Some(announcement) = result.announcement() {
                self.dialog = Some(Dialog::info("Result", announcement));
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = match &self.viewer {
            Some(viewer) => self.game_view(viewer),
            None => welcome_view(),
        };

        match &self.dialog {
            Some(open) => dialog::modal(
                content,
                open.view(Message::DismissDialog),
                Message::DismissDialog,
            ),
            None => content,
        }
    }

    /// Board plus side panel
    fn game_view<'a>(&'a self, viewer: &'a Viewer) -> Element<'a, Message> {
        let board = BoardView::new(viewer.render(), &self.pieces, self.palette).view();

        row![
            container(board).width(BOARD_SIZE + 4.0),
            container(control_panel(viewer))
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }
}

fn welcome_view<'a>() -> Element<'a, Message> {
    center(
        column![
            text("Welcome!").size(24),
            button(text("Choose PGN file"))
                .on_press(Message::OpenFile)
                .style(button::primary),
        ]
        .spacing(15)
        .align_x(iced::Alignment::Center),
    )
    .into()
}

/// Game details and navigation controls
fn control_panel(viewer: &Viewer) -> Element<'_, Message> {
    let game = viewer.game();

    let game_counter = text(format!(
        "Game {} of {}",
        viewer.game_index() + 1,
        viewer.game_count()
    ))
    .size(16);

    let mut details = column![text(game.title()).size(14)].spacing(4);
    for tag in ["Event", "Date"] {
        if let Some(value) = game.header(tag) {
            details = details.push(text(format!("{}: {}", tag, value)).size(13));
        }
    }

    let progress = text(format!(
        "Move {} of {}",
        viewer.move_index(),
        viewer.move_count()
    ))
    .size(14);

    let last_move = text(match viewer.last_move_san() {
        Some(san) => format!("Last move: {}", san),
        None => "Starting position".to_string(),
    })
    .size(14);

    let status = if viewer.is_finished() {
        format!("Result: {}", game.result().as_tag())
    } else {
        match viewer.position().turn() {
            Color::White => "White to move".to_string(),
            Color::Black => "Black to move".to_string(),
        }
    };

    let mut navigation = row![].spacing(10);
    for (label, event) in NAVIGATION_BUTTONS {
        let enabled = match event {
            ViewerEvent::Advance => viewer.can_advance(),
            ViewerEvent::Retreat => viewer.can_retreat(),
            ViewerEvent::NextGame => viewer.can_next_game(),
        };
        navigation = navigation.push(
            button(text(label))
                .on_press_maybe(enabled.then_some(Message::Viewer(event)))
                .style(button::secondary)
                .width(Length::Fill),
        );
    }

    let next_game_btn = button(text("Next game"))
        .on_press_maybe(
            viewer
                .can_next_game()
                .then_some(Message::Viewer(ViewerEvent::NextGame)),
        )
        .style(button::primary)
        .width(Length::Fill);

    let open_btn = button(text("Open PGN file"))
        .on_press(Message::OpenFile)
        .style(button::secondary)
        .width(Length::Fill);

    column![
        game_counter,
        details,
        vertical_space().height(15),
        horizontal_rule(1),
        vertical_space().height(10),
        progress,
        last_move,
        text(status).size(14),
        vertical_space().height(20),
        navigation,
        next_game_btn,
        vertical_space().height(Length::Fill),
        open_btn,
    ]
    .spacing(8)
    .into()
}

async fn pick_pgn_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose a PGN file")
        .add_filter("PGN files", &["pgn"])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
