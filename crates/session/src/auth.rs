//! Mock login gate. A fixture credential check, not security.

pub const DEMO_EMAIL: &str = "pruebamomenta@gmail.com";
pub const DEMO_PASSWORD: &str = "momenta";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidCredentials;

impl std::fmt::Display for InvalidCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid credentials. Try: {DEMO_EMAIL} / {DEMO_PASSWORD}")
    }
}

impl std::error::Error for InvalidCredentials {}

pub fn check_credentials(email: &str, password: &str) -> Result<(), InvalidCredentials> {
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(())
    } else {
        Err(InvalidCredentials)
    }
}
