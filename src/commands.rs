//! Command dispatch: login, run the requested command, logout.
use std::io::Write;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::cli::{Command, GetArgs, HomeworksAction};
use crate::client::EntClient;
use crate::dates::{filter_days, DateRange};
use crate::display::{write_homework_list, write_homeworks};
use crate::error::EntError;

/// Run `command` inside an authenticated session.
///
/// Once login succeeds, logout is attempted whether or not the command
/// succeeded. A command error wins over a logout error.
pub async fn run<W: Write>(
    client: &EntClient,
    command: &Command,
    today: NaiveDate,
    out: &mut W,
) -> Result<(), EntError> {
    client.login().await?;

    let outcome = execute(client, command, today, out).await;
    let logout = client.logout().await;

    match (outcome, logout) {
        (Err(err), Err(logout_err)) => {
            warn!(error = %logout_err, "logout failed after command error");
            Err(err)
        }
        (Err(err), Ok(_)) => Err(err),
        (Ok(()), logout) => logout.map(|_| ()),
    }
}

/// Run `command` against an already authenticated client.
pub async fn execute<W: Write>(
    client: &EntClient,
    command: &Command,
    today: NaiveDate,
    out: &mut W,
) -> Result<(), EntError> {
    match command {
        Command::Homeworks(args) => match args.action() {
            HomeworksAction::List => list(client, out).await,
            HomeworksAction::Get(get_args) => get(client, &get_args, today, out).await,
        },
    }
}

async fn list<W: Write>(client: &EntClient, out: &mut W) -> Result<(), EntError> {
    let homeworks = client.list_homeworks().await?;
    write_homework_list(out, &homeworks, &Local)?;
    Ok(())
}

async fn get<W: Write>(
    client: &EntClient,
    args: &GetArgs,
    today: NaiveDate,
    out: &mut W,
) -> Result<(), EntError> {
    let homeworks = client.get_homeworks(&args.id).await?;

    let range = DateRange::from_option(args.filter(), today);
    debug!(start = %range.start, end = %range.end, "filtering homework days");

    let days = filter_days(homeworks.data, &range);
    write_homeworks(out, &days)?;
    Ok(())
}
