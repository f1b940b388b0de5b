//! In-window modal dialogs for result announcements and load errors

use iced::widget::{button, center, column, container, mouse_area, opaque, stack, text};
use iced::{Element, Length};

use crate::styles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub body: String,
}

impl Dialog {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Dialog box with a single OK button sending `on_close`
    pub fn view<'a, Message: Clone + 'a>(&'a self, on_close: Message) -> Element<'a, Message> {
        let title_color = match self.kind {
            DialogKind::Info => None,
            DialogKind::Error => Some(styles::ERROR_TEXT),
        };

        let mut title = text(&self.title).size(20);
        if let Some(color) = title_color {
            title = title.color(color);
        }

        container(
            column![
                title,
                text(&self.body).size(15),
                button(text("OK")).on_press(on_close).style(button::primary),
            ]
            .spacing(15),
        )
        .width(320)
        .padding(20)
        .style(container::rounded_box)
        .into()
    }
}

/// Lay `content` over `base`, blocking input to everything underneath.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(
                center(opaque(content))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(|_theme| container::Style {
                        background: Some(styles::BACKDROP.into()),
                        ..container::Style::default()
                    })
            )
            .on_press(on_blur)
        )
    ]
    .into()
}

