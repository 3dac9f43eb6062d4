//! Main window layout

use iced::widget::{button, column, container, text, text_input};
use iced::{Alignment, Element, Font, Length};

use greeter_core::{text as ui, WindowConfig};

use crate::app::Message;

/// Label, name field and greet button, stacked top to bottom.
pub fn window<'a>(config: &WindowConfig, name: &'a str) -> Element<'a, Message> {
    let font = Font::with_name(config.font_family);
    let size = config.font_size_px();

    let content = column![
        text(ui::PROMPT_LABEL).font(font).size(size),
        text_input("", name)
            .on_input(Message::NameChanged)
            .font(font)
            .size(size)
            .width(config.input_width_px()),
        button(text(ui::GREET_BUTTON).font(font).size(size)).on_press(Message::GreetPressed),
    ]
    .spacing(config.spacing)
    .align_x(Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .padding([config.spacing * 2.0, 0.0])
        .into()
}
