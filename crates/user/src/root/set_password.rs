use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use serde::Deserialize;
use validator::Validate;

use super::repository::{self, FindType};

#[derive(Validate, Deserialize)]
pub struct SetPasswordInput {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 8, max = 128))]
    pub new_password: String,
}

impl super::Command {
    pub async fn set_password(
        &self,
        id: impl Into<String>,
        input: SetPasswordInput,
    ) -> foodgram_shared::Result<()> {
        input.validate()?;

        let Some(user) = repository::find(&self.read_db, FindType::Id(id.into())).await? else {
            foodgram_shared::not_found!("user");
        };

        let parsed_hash = PasswordHash::new(&user.password)?;
        let argon2 = Argon2::default();

        if argon2
            .verify_password(input.current_password.as_bytes(), &parsed_hash)
            .is_err()
        {
            foodgram_shared::user!("Неверный текущий пароль");
        }

        let salt = SaltString::generate(&mut OsRng);
        let password = argon2
            .hash_password(input.new_password.as_bytes(), &salt)?
            .to_string();

        repository::update_password(&self.write_db, &user.id, password).await?;

        Ok(())
    }
}
