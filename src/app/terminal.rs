//! Raw-mode terminal lifecycle.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Enter raw mode and the alternate screen with mouse capture.
///
/// Details:
/// - Installs a panic hook that restores the terminal first, so a panic
///   message is readable instead of being swallowed by the alternate screen.
///
/// # Errors
/// - Returns `Err` when raw mode or the escape sequences cannot be applied.
pub fn setup_terminal() -> Result<()> {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// What: Leave the alternate screen, release the mouse and show the cursor again.
///
/// # Errors
/// - Returns `Err` when the terminal rejects the restore sequence.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(
        std::io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    )?;
    Ok(())
}
