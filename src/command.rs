use crate::app::Tab;

/// Work queued for the app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    ShowHelp,
    CloseHelp,
    ToggleTheme,
    SelectTab(Tab),
}
