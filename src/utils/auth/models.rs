use secrecy::SecretString;

/// Raw registration input before validation; passwords never appear in
/// logs or serialized output.
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub birthday: Option<String>,
}

impl RegisterForm {
    pub fn new(username: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: SecretString::new(password.to_string()),
            confirm_password: SecretString::new(confirm_password.to_string()),
            birthday: None,
        }
    }
}
