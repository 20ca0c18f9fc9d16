//! Subcommand handlers.

use anyhow::Result;
use clothie_lib::BackendClient;
use clothie_lib::Route;
use clothie_lib::api::AccountApi;
use clothie_lib::pages::cta::{EMAIL, PASSWORD, PASSWORD_AGAIN};
use clothie_lib::pages::user::{NEW_PASSWORD, NEW_PASSWORD_CHECK, OLD_PASSWORD};
use clothie_lib::pages::{NavBar, Outcome, SignupCta, UserPage};
use clothie_lib::session::{FileSessionStore, Session, SessionContext};

use crate::config::Config;
use crate::terminal::Terminal;
use crate::view;

const ACCOUNT_HELP: &str = "commands: old <pw> | new <pw> | check <pw> | submit | logout | quit";

fn session(config: &Config) -> SessionContext {
    SessionContext::new(FileSessionStore::new(config.session_file.clone()))
}

fn navigate(route: Route) {
    println!("-> {}", route);
}

/// Split an input line into its command word and the argument after the
/// first run of whitespace.
fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim_start()),
        None => (line, ""),
    }
}

pub fn nav() {
    print!("{}", view::nav_bar(&NavBar::new()));
}

pub fn login(config: &Config, user_id: &str, token: &str) -> Result<()> {
    session(config).login(&Session::new(user_id, token))?;
    println!("signed in as {}", user_id);
    Ok(())
}

pub fn logout(config: &Config) -> Result<()> {
    session(config).logout()?;
    println!("signed out");
    Ok(())
}

pub async fn signup(term: &mut Terminal) -> Result<()> {
    let mut cta = SignupCta::new();
    print!("{}", view::signup(&cta));

    for (id, label) in [(EMAIL, "email"), (PASSWORD, "password"), (PASSWORD_AGAIN, "password again")] {
        let Some(value) = term.read_line(&format!("{}: ", label)).await? else {
            return Ok(());
        };
        cta.change(id, value)?;
        print!("{}", view::signup(&cta));
    }

    match cta.submit() {
        Some(submission) => println!("signup ready for {}", submission.email),
        None => println!("form is not valid, nothing submitted"),
    }
    Ok(())
}

pub async fn account(config: &Config, term: &mut Terminal) -> Result<()> {
    let mut builder = BackendClient::builder().url(config.require_backend_url()?);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    let api = builder.build()?;
    log::info!("account page against {}", api.base_url());

    let mut page = UserPage::new(session(config));
    if let Some(user_id) = page.begin_load() {
        print!("{}", view::user(&page));
        let result = api.fetch_email(&user_id).await;
        page.finish_load(&user_id, result);
    }

    loop {
        if let Some(error) = page.error() {
            print!("{}", view::error_dialog(error));
            term.read_line("press enter to close ").await?;
            if let Outcome::Navigate(route) = page.dismiss_error() {
                navigate(route);
                return Ok(());
            }
        }

        print!("{}", view::user(&page));
        let Some(line) = term.read_line("> ").await? else {
            return Ok(());
        };
        let (command, arg) = split_command(&line);

        let outcome = match command {
            "old" => {
                page.change(OLD_PASSWORD, arg)?;
                Outcome::Stay
            }
            "new" => {
                page.change(NEW_PASSWORD, arg)?;
                Outcome::Stay
            }
            "check" => {
                page.change(NEW_PASSWORD_CHECK, arg)?;
                Outcome::Stay
            }
            "submit" => match page.begin_submit() {
                Some(request) => {
                    print!("{}", view::user(&page));
                    let result = api.update_password(&request).await;
                    page.finish_submit(&request, result)
                }
                None => Outcome::Stay,
            },
            "logout" => {
                let confirmed = term.confirm(UserPage::LOGOUT_PROMPT).await?;
                page.logout(confirmed)
            }
            "quit" | "q" => return Ok(()),
            _ => {
                println!("{}", ACCOUNT_HELP);
                Outcome::Stay
            }
        };

        if let Some(notice) = page.take_notice() {
            println!("{}", notice);
        }
        if let Outcome::Navigate(route) = outcome {
            navigate(route);
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("old secret1"), ("old", "secret1"));
        assert_eq!(split_command("  old  \t secret1  "), ("old", "secret1"));
        assert_eq!(split_command("submit"), ("submit", ""));
        assert_eq!(split_command("   "), ("", ""));
    }
}
