use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A role that registration depends on has not been seeded.
    ///
    /// `startup::seed_default_roles` creates the default roles; this error means the
    /// database was prepared without it or the role was deleted afterwards.
    #[error("Default role {0} not found")]
    MissingDefaultRole(String),
}
