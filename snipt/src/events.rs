use snippets::SnippetLibrary;

/// Commands to execute (user actions → state changes or background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Navigation
    NavigateBack,

    // Data loading
    LoadSnippets,

    // Search box
    EnterSearchMode,
    ExitSearchMode,
    AppendSearchChar(char),
    DeleteSearchChar,
    ClearSearch,

    // Tag panel
    ToggleTagPanel,
    EnterTagMode,
    ExitTagMode,
    FocusNextTag,
    FocusPreviousTag,
    ToggleFocusedTag,

    // View toggles
    ToggleHelp,

    // Log screen
    NavigateToLogs,
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    SnippetsLoaded { library: SnippetLibrary },

    // Errors
    LoadError { error: String },
}
