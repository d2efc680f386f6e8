use argon2::{Argon2, PasswordHash, PasswordVerifier};
use serde::Deserialize;
use validator::Validate;

use super::repository::{self, FindType};

#[derive(Validate, Deserialize)]
pub struct LoginInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl super::Command {
    /// Checks credentials and returns the user id.
    pub async fn login(&self, input: LoginInput) -> foodgram_shared::Result<String> {
        input.validate()?;

        let Some(user) = repository::find(&self.read_db, FindType::Email(input.email)).await?
        else {
            foodgram_shared::user!("Неверный email или пароль");
        };

        let parsed_hash = PasswordHash::new(&user.password)?;

        if Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            foodgram_shared::user!("Неверный email или пароль");
        }

        Ok(user.id)
    }
}
