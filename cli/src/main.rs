//! Command-line front end for the Vidaudio API.
//!
//! Runs the same session actions as the browser client, with state held in
//! `RefCell`s for the duration of one command and the session cookies kept
//! in a file between commands.

mod cookies;
mod render;
mod transport;
mod video;


use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use contract::{
    CreateAccountForm, ForgotPasswordForm, LoginForm, Page, ResetPasswordForm, Resource, UpdateAccountForm,
    UpdatePasswordForm, User,
};
use session::actions::{self, ActionError};
use session::messages::Operation;
use session::state::{AuthState, ResourceListState};
use session::{AuthedClient, ClientConfig, ConfigError, validate};
use tracing::Level;

use crate::cookies::CookieJar;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}", .0.message())]
    Action(#[from] ActionError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("session file {}: {source}", .path.display())]
    SessionFile { path: PathBuf, source: io::Error },
    #[error("cannot read {}: {source}", .path.display())]
    Video { path: PathBuf, source: io::Error },
    #[error("cannot print JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("not signed in")]
    SignedOut,
}

#[derive(Parser, Debug)]
#[command(name = "vidaudio", about = "Convert videos to audio from the command line")]
struct Cli {
    #[arg(long, env = "VIDAUDIO_BASE_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// Where session cookies are kept between commands.
    #[arg(long, env = "VIDAUDIO_SESSION_FILE", default_value = ".vidaudio-session")]
    session_file: PathBuf,

    #[arg(long, env = "VIDAUDIO_ITEMS_PER_PAGE", value_parser = clap::value_parser!(u32).range(1..))]
    items_per_page: Option<u32>,

    /// Print results as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log requests, refreshes and retries to stderr.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account; the new account is signed in.
    Signup {
        #[arg(long)]
        fullname: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to `--password`.
        #[arg(long)]
        confirm_password: Option<String>,
    },
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the signed-in account.
    Profile,
    Logout,
    /// Change account details; omitted fields keep their current value.
    UpdateAccount {
        #[arg(long)]
        fullname: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        street: Option<String>,
    },
    UpdatePassword {
        #[arg(long)]
        old_password: String,
        #[arg(long)]
        new_password: String,
        /// Defaults to `--new-password`.
        #[arg(long)]
        confirm_new_password: Option<String>,
    },
    /// Email a password reset code.
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    ResetPassword {
        #[arg(long)]
        code: String,
        #[arg(long)]
        password: String,
        /// Defaults to `--password`.
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// List uploaded videos.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Upload a video for conversion.
    Upload {
        path: PathBuf,
        /// Defaults to the file name without extension.
        #[arg(long)]
        name: Option<String>,
    },
    Show {
        id: String,
    },
    Delete {
        id: String,
    },
    /// Retry a failed conversion.
    Retry {
        id: String,
    },
}

/// Everything one command runs against.
struct Context {
    client: AuthedClient<ReqwestTransport>,
    config: ClientConfig,
    auth: RefCell<AuthState>,
    list: RefCell<ResourceListState>,
    loading: RefCell<bool>,
    json: bool,
}

impl Context {
    fn say(&self, text: &str) -> Result<(), CliError> {
        if self.json {
            print!("{}", render::json(&serde_json::json!({ "message": text }))?);
        } else {
            println!("{text}");
        }
        Ok(())
    }

    fn announce(&self, operation: Operation) -> Result<(), CliError> {
        match operation.success_message() {
            Some(message) => self.say(message),
            None => Ok(()),
        }
    }

    fn show_user(&self, user: &User) -> Result<(), CliError> {
        let text = if self.json { render::json(&serde_json::to_value(user)?)? } else { render::user(user) };
        print!("{text}");
        Ok(())
    }

    fn show_resource(&self, resource: &Resource) -> Result<(), CliError> {
        let text = if self.json { render::json(&serde_json::to_value(resource)?)? } else { render::resource(resource) };
        print!("{text}");
        Ok(())
    }

    fn show_page(&self, page: &Page<Resource>) -> Result<(), CliError> {
        let text = if self.json { render::json(&serde_json::to_value(page)?)? } else { render::page(page) };
        print!("{text}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if let CliError::Action(action) = &err {
                if let Some(fields) = action.validation() {
                    eprint!("{}", render::field_errors(fields));
                }
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = configure(&cli, |key| std::env::var(key).ok())?;
    let jar = CookieJar::load(&cli.session_file)
        .map_err(|source| CliError::SessionFile { path: cli.session_file.clone(), source })?;
    let transport = ReqwestTransport::new(config.base_url.clone(), jar)?;
    let ctx = Context {
        client: AuthedClient::new(transport, &config),
        config,
        auth: RefCell::default(),
        list: RefCell::default(),
        loading: RefCell::new(false),
        json: cli.json,
    };

    let outcome = execute(&ctx, cli.command).await;
    // A refresh may have rotated the cookies even when the command failed.
    let saved = ctx.client.transport().cookies().save(&cli.session_file);
    outcome?;
    saved.map_err(|source| CliError::SessionFile { path: cli.session_file, source })
}

/// Defaults, then `VIDAUDIO_*` overrides from `lookup`, then flags.
fn configure(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::from_lookup(lookup)?;
    config.base_url.clone_from(&cli.base_url);
    if let Some(items_per_page) = cli.items_per_page {
        config.items_per_page = items_per_page;
    }
    Ok(config)
}

async fn execute(ctx: &Context, command: Command) -> Result<(), CliError> {
    let client = &ctx.client;
    match command {
        Command::Signup { fullname, email, password, confirm_password } => {
            let form = CreateAccountForm {
                fullname,
                email,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()).into(),
                password: password.into(),
            };
            actions::auth::sign_up(client, &ctx.auth, &ctx.loading, &form).await?;
            print_signed_in(ctx)
        }
        Command::Signin { email, password } => {
            let form = LoginForm { email, password: password.into() };
            actions::auth::sign_in(client, &ctx.auth, &ctx.loading, &form).await?;
            print_signed_in(ctx)
        }
        Command::Profile => {
            actions::auth::fetch_profile(client, &ctx.auth).await?;
            let auth = ctx.auth.borrow();
            ctx.show_user(auth.user().ok_or(CliError::SignedOut)?)
        }
        Command::Logout => {
            actions::auth::logout(client, &ctx.auth).await?;
            client.transport().forget_cookies();
            ctx.say("Signed out")
        }
        Command::UpdateAccount { fullname, country, city, street } => {
            actions::auth::fetch_profile(client, &ctx.auth).await?;
            let mut form = {
                let auth = ctx.auth.borrow();
                UpdateAccountForm::from_user(auth.user().ok_or(CliError::SignedOut)?)
            };
            for (slot, value) in
                [(&mut form.fullname, fullname), (&mut form.country, country), (&mut form.city, city), (&mut form.street, street)]
            {
                if let Some(value) = value {
                    *slot = value;
                }
            }
            actions::auth::update_account(client, &ctx.auth, &ctx.loading, &form).await?;
            ctx.announce(Operation::UpdateAccount)?;
            match ctx.auth.borrow().user() {
                Some(user) => ctx.show_user(user),
                None => Ok(()),
            }
        }
        Command::UpdatePassword { old_password, new_password, confirm_new_password } => {
            let form = UpdatePasswordForm {
                old_password: old_password.into(),
                confirm_new_password: confirm_new_password.unwrap_or_else(|| new_password.clone()).into(),
                new_password: new_password.into(),
            };
            actions::auth::update_password(client, &ctx.loading, &form).await?;
            ctx.announce(Operation::UpdatePassword)
        }
        Command::ForgotPassword { email } => {
            actions::auth::forgot_password(client, &ctx.loading, &ForgotPasswordForm { email }).await?;
            ctx.announce(Operation::ForgotPassword)
        }
        Command::ResetPassword { code, password, confirm_password } => {
            let form = ResetPasswordForm {
                code,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()).into(),
                password: password.into(),
            };
            actions::auth::reset_password(client, &ctx.loading, &form).await?;
            ctx.announce(Operation::ResetPassword)
        }
        Command::List { page } => {
            actions::resources::load_page(client, &ctx.list, &ctx.config, page).await?;
            match ctx.list.borrow().list() {
                Some(listing) => ctx.show_page(listing),
                None => Ok(()),
            }
        }
        Command::Upload { path, name } => upload(ctx, path, name).await,
        Command::Show { id } => {
            let resource = actions::resources::get_resource(client, &ctx.list, &ctx.loading, &id).await?;
            ctx.show_resource(&resource)
        }
        Command::Delete { id } => {
            actions::resources::delete_resource(client, &ctx.list, &ctx.loading, &id).await?;
            ctx.announce(Operation::DeleteResource)
        }
        Command::Retry { id } => {
            actions::resources::retry_conversion(client, &ctx.loading, &id).await?;
            ctx.announce(Operation::RetryConversion)
        }
    }
}

/// Validate from file metadata first, so an oversized file is never read.
async fn upload(ctx: &Context, path: PathBuf, name: Option<String>) -> Result<(), CliError> {
    let video_error = |source| CliError::Video { path: path.clone(), source };
    let meta = video::inspect(&path).await.map_err(video_error)?;
    let title = name.unwrap_or_else(|| video::default_title(&path));
    validate::upload(&title, Some(&meta), &ctx.config)
        .map_err(|invalid| ActionError::new(Operation::CreateResource, invalid.into()))?;

    tracing::info!(file = %path.display(), size = meta.size, "uploading");
    let upload = video::read(&path, title, meta).await.map_err(video_error)?;
    let created =
        actions::resources::create_resource(&ctx.client, &ctx.list, &ctx.loading, &ctx.config, upload).await?;
    ctx.announce(Operation::CreateResource)?;
    ctx.show_resource(&created)
}

fn print_signed_in(ctx: &Context) -> Result<(), CliError> {
    let auth = ctx.auth.borrow();
    let user = auth.user().ok_or(CliError::SignedOut)?;
    if ctx.json {
        return ctx.show_user(user);
    }
    println!("Signed in as {} <{}>", user.fullname, user.email);
    Ok(())
}
