use crate::core::view::{PageLoader, ViewController, ViewState};
use crate::domain::model::{DurationFilter, MenuFilter};
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// One line typed by the user while a view is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand<F> {
    SetFilter(F),
    Refresh,
    Help,
    Quit,
}

pub const MENU_HELP: &str =
    "Perintah: all | available | sold-out | refresh | help | quit";
pub const RESERVATION_HELP: &str =
    "Perintah: all | 3 | 5 | <jam minimum> | refresh | help | quit";

fn parse_common<F>(word: &str) -> Option<ViewCommand<F>> {
    match word {
        "refresh" | "r" => Some(ViewCommand::Refresh),
        "help" | "h" | "?" => Some(ViewCommand::Help),
        "quit" | "q" | "exit" => Some(ViewCommand::Quit),
        _ => None,
    }
}

pub fn parse_menu_command(line: &str) -> Option<ViewCommand<MenuFilter>> {
    let word = line.trim().to_ascii_lowercase();
    parse_common(&word).or_else(|| word.parse().ok().map(ViewCommand::SetFilter))
}

pub fn parse_reservation_command(line: &str) -> Option<ViewCommand<DurationFilter>> {
    let word = line.trim().to_ascii_lowercase();
    if let Some(command) = parse_common(&word) {
        return Some(command);
    }
    match word.as_str() {
        "all" | "semua" => Some(ViewCommand::SetFilter(DurationFilter::All)),
        other => other
            .parse::<u32>()
            .ok()
            .map(|hours| ViewCommand::SetFilter(DurationFilter::AtLeast(hours))),
    }
}

async fn write_block<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n\n").await?;
    out.flush().await?;
    Ok(())
}

/// Keeps a view open: filter commands are read line by line from `input`
/// and every applied fetch result is re-rendered to `out`.
///
/// On end of input the latest fetch is awaited and rendered once more, so
/// piped command scripts always end with a settled view.
pub async fn run_interactive<L, R, W>(
    controller: &ViewController<L>,
    input: R,
    mut out: W,
    parse: fn(&str) -> Option<ViewCommand<L::Filter>>,
    render: impl Fn(&ViewState<L::Page>) -> String,
    help: &str,
) -> Result<()>
where
    L: PageLoader,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut settled = controller.subscribe();

    write_block(&mut out, help).await?;
    controller.mount().await;
    write_block(&mut out, &render(&controller.state().await)).await?;

    loop {
        tokio::select! {
            changed = settled.changed() => {
                if changed.is_err() {
                    break;
                }
                write_block(&mut out, &render(&controller.state().await)).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    let state = controller.settle().await;
                    write_block(&mut out, &render(&state)).await?;
                    break;
                };

                match parse(&line) {
                    Some(ViewCommand::SetFilter(filter)) => {
                        if controller.set_filter(filter).await {
                            tracing::info!("Filter changed to {:?}", filter);
                            write_block(&mut out, &render(&ViewState::Loading)).await?;
                        }
                    }
                    Some(ViewCommand::Refresh) => {
                        controller.refresh().await;
                        write_block(&mut out, &render(&ViewState::Loading)).await?;
                    }
                    Some(ViewCommand::Help) => write_block(&mut out, help).await?,
                    Some(ViewCommand::Quit) => break,
                    None if line.trim().is_empty() => {}
                    None => {
                        let message = format!("Perintah tidak dikenal: '{}'\n{}", line.trim(), help);
                        write_block(&mut out, &message).await?;
                    }
                }
            }
        }
    }

    Ok(())
}
