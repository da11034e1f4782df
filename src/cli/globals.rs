use secrecy::SecretString;

/// Process-wide configuration shared with the server at construction time.
///
/// The token signing secret lives here so it can be injected explicitly
/// instead of being read from ambient environment state.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub secret: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(SecretString::from("sekreto".to_string()));
        assert_eq!(args.secret.expose_secret(), "sekreto");
    }

    #[test]
    fn test_global_args_default() {
        let args = GlobalArgs::default();
        assert_eq!(args.secret.expose_secret(), "");
    }
}
