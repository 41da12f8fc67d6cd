//! Top-level update dispatch.

use iced::Task;

use crate::account;
use crate::message::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::trace!("update: {}", message.name());
    account::update::handle_message(state, message)
}
