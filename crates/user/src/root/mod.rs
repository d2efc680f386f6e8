use std::ops::Deref;

mod login;
mod register;
pub(crate) mod repository;
mod set_password;

pub use login::LoginInput;
pub use register::RegisterInput;
pub use set_password::SetPasswordInput;

#[derive(Clone)]
pub struct Command {
    state: foodgram_shared::State,
    pub subscription: crate::subscription::Command,
}

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: foodgram_shared::State) -> Self {
        Self {
            subscription: crate::subscription::Command(state.clone()),
            state,
        }
    }
}
