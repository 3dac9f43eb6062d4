//! Window state and message handling

use iced::keyboard::{self, key, Key};
use iced::{Element, Subscription, Task};

use greeter_core::{greet, Dialog, WindowConfig};

use crate::{components, views};

/// Main application state.
#[derive(Debug, Default)]
pub struct Greeter {
    pub config: WindowConfig,
    /// Current content of the name field
    pub name: String,
    /// Modal dialog currently shown, if any
    pub dialog: Option<Dialog>,
}

/// Application messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    NameChanged(String),
    GreetPressed,
    DialogDismissed,
}

impl Greeter {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(name) => {
                if self.dialog.is_some() {
                    tracing::trace!("Ignoring input while a dialog is open");
                } else {
                    self.name = name;
                }
            }
            Message::GreetPressed => {
                // A modal dialog blocks the window, so one click shows one dialog
                if self.dialog.is_some() {
                    tracing::trace!("Ignoring greet while a dialog is open");
                } else {
                    let dialog = greet(&self.name);
                    tracing::debug!(severity = %dialog.severity, title = %dialog.title, "Showing dialog");
                    self.dialog = Some(dialog);
                }
            }
            Message::DialogDismissed => {
                if let Some(dialog) = self.dialog.take() {
                    tracing::debug!(severity = %dialog.severity, "Dialog dismissed");
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let window = views::window(&self.config, &self.name);

        match &self.dialog {
            Some(dialog) => components::modal(window, dialog, &self.config),
            None => window,
        }
    }

    /// Enter or Escape dismisses an open dialog, like a native message box.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.dialog.is_none() {
            return Subscription::none();
        }

        keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(key::Named::Enter | key::Named::Escape) => Some(Message::DialogDismissed),
            _ => None,
        })
    }
}
