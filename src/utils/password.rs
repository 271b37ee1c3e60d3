use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

const MAX_PASSWORD_LENGTH: usize = 64;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PasswordError {
    #[error("Password cannot be empty")]
    EmptyPassword,
    #[error("Password must not be more than {MAX_PASSWORD_LENGTH} characters")]
    ExceededMaxLength,
    #[error("Error while hashing password")]
    HashingError,
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

pub fn hash(password: impl Into<String>) -> Result<String, PasswordError> {
    let password = password.into();

    if password.is_empty() {
        return Err(PasswordError::EmptyPassword);
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::ExceededMaxLength);
    }

    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::HashingError)?
        .to_string();

    Ok(hashed)
}

pub fn compare(password: &str, hashed_password: &str) -> Result<bool, PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::EmptyPassword);
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::ExceededMaxLength);
    }

    let parsed_hash =
        PasswordHash::new(hashed_password).map_err(|_| PasswordError::InvalidHashFormat)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_compare_round_trips() {
        let hashed = hash("9876543210").unwrap();
        assert!(compare("9876543210", &hashed).unwrap());
        assert!(!compare("0123456789", &hashed).unwrap());
    }

    #[test]
    fn empty_password_is_rejected() {
        assert_eq!(hash(""), Err(PasswordError::EmptyPassword));
        assert_eq!(compare("", "whatever"), Err(PasswordError::EmptyPassword));
    }

    #[test]
    fn oversized_password_is_rejected() {
        let long = "a".repeat(65);
        assert_eq!(hash(long.clone()), Err(PasswordError::ExceededMaxLength));
    }

    #[test]
    fn garbage_hash_is_invalid_format() {
        assert_eq!(
            compare("secret", "not-a-phc-string"),
            Err(PasswordError::InvalidHashFormat)
        );
    }
}
