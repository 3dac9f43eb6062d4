//! Reusable widgets

use iced::widget::{button, center, column, container, opaque, stack, text};
use iced::{Alignment, Color, Element, Font};

use greeter_core::{text as ui, Dialog, Severity, WindowConfig};

use crate::app::Message;

/// Draw `dialog` over `base`, capturing all input until it is dismissed.
pub fn modal<'a>(
    base: Element<'a, Message>,
    dialog: &'a Dialog,
    config: &WindowConfig,
) -> Element<'a, Message> {
    let font = Font::with_name(config.font_family);
    let size = config.font_size_px();

    let accent = match dialog.severity {
        Severity::Info => Color::from_rgb8(0x1e, 0x6f, 0xd9),
        Severity::Warning => Color::from_rgb8(0xd9, 0x8e, 0x1e),
    };

    let card = container(
        column![
            text(&dialog.title).font(font).size(size).color(accent),
            text(&dialog.message).font(font).size(size),
            button(text(ui::DISMISS_BUTTON).font(font).size(size))
                .on_press(Message::DialogDismissed),
        ]
        .spacing(config.spacing)
        .align_x(Alignment::Center),
    )
    .padding(16)
    .style(container::rounded_box);

    stack![
        base,
        opaque(center(opaque(card)).style(|_theme| container::Style {
            background: Some(
                Color {
                    a: 0.6,
                    ..Color::BLACK
                }
                .into()
            ),
            ..container::Style::default()
        }))
    ]
    .into()
}
