use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated model API keys
pub const API_KEY_LENGTH: usize = 50;

/// Fresh random API key for a model
pub fn generate_api_key() -> String {
    generate_alphanumeric(API_KEY_LENGTH)
}

/// Random string of ASCII letters and digits
pub fn generate_alphanumeric(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
