mod subscriptions;
mod user;

use std::ops::Deref;

pub use subscriptions::SubscriptionView;
pub use user::UserView;

#[derive(Clone)]
pub struct Query(pub foodgram_shared::State);

impl Deref for Query {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
