//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent on the content screens, not specific keys.
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `KeyBindings`. Text entry (login form, search bar) bypasses the bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection
    /// Move the list selection up. Default: k/↑
    SelectPrev,
    /// Move the list selection down. Default: j/↓
    SelectNext,
    /// Jump to the first row. Default: g/Home
    SelectFirst,
    /// Jump to the last row. Default: G/End
    SelectLast,

    // Tabs
    /// Switch to the next content tab. Default: ]/Tab
    NextTab,
    /// Switch to the previous content tab. Default: [/Shift+Tab
    PrevTab,
    /// Select a content tab by number. Field: tab number (1-3)
    SelectTab(usize),

    // Content
    /// Open the selected row's picture in the system viewer. Default: o/Enter
    OpenImage,
    /// Open the selected row's own file (book or movie). Default: f
    OpenFile,
    /// Re-fetch the current screen. Default: r
    Refresh,

    // Search
    /// Focus the header search bar. Default: //Ctrl+f
    StartSearch,
    /// Leave the search results screen. Default: Esc/Backspace
    Back,

    // Application
    /// Clear the session and return to the login screen. Default: L
    Logout,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
