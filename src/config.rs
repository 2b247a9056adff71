#[derive(clap::ValueEnum, Clone, Debug, Copy)]
pub enum CargoEnv {
    Development,
    Production,
}

#[derive(clap::Parser)]
pub struct AppConfig {
    #[clap(long, env, value_enum)]
    pub cargo_env: CargoEnv,

    #[clap(long, env, default_value = "8081")]
    pub port: u16,

    // sqlite fallback so the server runs without a postgres instance around,
    // postgres should be used for anything real
    #[clap(long, env, default_value = "sqlite://magicstream.sqlite?mode=rwc")]
    pub database_url: String,

    #[clap(long, env)]
    pub run_migrations: bool,

    #[clap(long, env)]
    pub access_token_secret: String,

    #[clap(long, env, default_value = "*")]
    pub cors_origin: String,

    #[clap(long, env)]
    pub seed: bool,

    #[clap(long, env)]
    pub sentry_dsn: Option<String>,
}
