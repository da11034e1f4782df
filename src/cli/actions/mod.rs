pub mod seed;
pub mod server;

use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        dsn: String,
    },
    Seed {
        dsn: String,
        email: String,
        password: SecretString,
    },
}
